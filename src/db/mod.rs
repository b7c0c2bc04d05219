pub mod connection;
pub mod groups;
pub mod schema;

pub use connection::Database;
