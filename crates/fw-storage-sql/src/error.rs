//! Translation from sqlx errors to storage errors.

use fw_storage::StorageError;

/// Maps a sqlx error onto the storage error taxonomy.
pub(crate) fn from_sqlx_error(err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StorageError::Connection(err.to_string())
        }
        sqlx::Error::Io(e) => StorageError::Connection(e.to_string()),
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            StorageError::Serialization(err.to_string())
        }
        sqlx::Error::Database(db) => StorageError::Query(db.to_string()),
        _ => StorageError::Query(err.to_string()),
    }
}

/// Maps an insert error, turning a unique violation into `Duplicate`.
pub(crate) fn from_insert_error(
    err: sqlx::Error,
    entity_type: &'static str,
    field: &'static str,
    value: &str,
) -> StorageError {
    if let sqlx::Error::Database(db) = &err {
        if db.code().as_deref() == Some("23505") {
            return StorageError::duplicate(entity_type, field, value);
        }
    }
    from_sqlx_error(err)
}
