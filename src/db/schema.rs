pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS groups (
    id INTEGER PRIMARY KEY,
    hgroup TEXT NOT NULL DEFAULT '',
    domain TEXT NOT NULL DEFAULT '',
    day TEXT NOT NULL DEFAULT '',
    data TEXT NOT NULL DEFAULT '',
    UNIQUE (hgroup, domain, day)
);

CREATE INDEX IF NOT EXISTS idx_groups_day ON groups(day);
";

pub const DROP_TABLES: &str = "
DROP INDEX IF EXISTS idx_groups_day;
DROP TABLE IF EXISTS groups;
";
