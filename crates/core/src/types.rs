/// Project primary keys are UUIDs, assigned by the database on insert
/// (and pre-generated locally for import drafts).
pub type ProjectId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
