/// Item primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Batch records are keyed by a store-generated UUID.
pub type BatchId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
