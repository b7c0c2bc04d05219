//! Turning Hardenize CSV exports into ranked point totals.

pub mod aggregate;
pub mod crosscheck;
pub mod rank;
pub mod row;
pub mod status;

pub use aggregate::{aggregate, read_records, score_group};
pub use rank::{rank, rank_all, rank_groups, rank_hosts, RankEntry};
pub use status::{points, Status};
