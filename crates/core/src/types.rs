/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Diary days are calendar dates without a time zone (`DATE` columns).
pub type DiaryDate = chrono::NaiveDate;
