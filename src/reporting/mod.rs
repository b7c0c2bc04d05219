pub mod formatter;
pub mod raw;
pub mod writer;

pub use raw::RawStore;
pub use writer::{build_report, day_stamp, report_file_name, write_report};
