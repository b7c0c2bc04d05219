use std::sync::LazyLock;

use regex::Regex;

static INPUT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<input\b([^>]*)>").expect("input tag pattern")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`/]+))"#)
        .expect("attribute pattern")
});

/// Collect `name`/`value` pairs of every `<input type="hidden">` in a page,
/// in document order. Inputs without a name are skipped.
pub fn extract_hidden_fields(html: &str) -> Vec<(String, String)> {
    let mut fields = Vec::new();

    for tag in INPUT_TAG.captures_iter(html) {
        let mut is_hidden = false;
        let mut name = None;
        let mut value = String::new();

        for attr in ATTRIBUTE.captures_iter(&tag[1]) {
            let raw = attr.get(2).or_else(|| attr.get(3)).or_else(|| attr.get(4))
                .map(|m| m.as_str())
                .unwrap_or("");
            match attr[1].to_ascii_lowercase().as_str() {
                "type" => is_hidden = raw.eq_ignore_ascii_case("hidden"),
                "name" => name = Some(unescape(raw)),
                "value" => value = unescape(raw),
                _ => {}
            }
        }

        if let (true, Some(name)) = (is_hidden, name) {
            fields.push((name, value));
        }
    }
    fields
}

fn unescape(value: &str) -> String {
    html_escape::decode_html_entities(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_PAGE: &str = r#"
<html><body>
<form method="post" action="/account/signIn">
  <input type="hidden" name="csrfToken" value="abc123">
  <INPUT TYPE='hidden' NAME='returnTo' VALUE='/org/x'/>
  <input type="email" name="email" value="">
  <input type="password" name="password">
  <input type="hidden" value="orphan">
  <input name="formId" type="hidden" value="a&amp;b">
  <input type="submit" name="submitButton" value="Submit">
</form>
</body></html>"#;

    #[test]
    fn test_extracts_only_hidden_named_inputs() {
        let fields = extract_hidden_fields(LOGIN_PAGE);
        assert_eq!(
            fields,
            vec![
                ("csrfToken".to_string(), "abc123".to_string()),
                ("returnTo".to_string(), "/org/x".to_string()),
                ("formId".to_string(), "a&b".to_string()),
            ]
        );
    }

    #[test]
    fn test_hidden_input_without_value() {
        let fields = extract_hidden_fields(r#"<input type=hidden name=nonce>"#);
        assert_eq!(fields, vec![("nonce".to_string(), String::new())]);
    }

    #[test]
    fn test_page_without_inputs() {
        assert!(extract_hidden_fields("<html><p>maintenance</p></html>").is_empty());
    }

    #[test]
    fn test_numeric_and_named_entities_decoded() {
        let fields = extract_hidden_fields(
            r#"<input type="hidden" name="csrf" value="ab&#43;cd&#x2F;ef&amp;x">"#,
        );
        assert_eq!(fields, vec![("csrf".to_string(), "ab+cd/ef&x".to_string())]);
    }
}
