/// All document identifiers are server-assigned, monotonically increasing
/// per collection.
pub type DocId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
