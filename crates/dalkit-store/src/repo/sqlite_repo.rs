//! Generic SQLite repository

use std::marker::PhantomData;
use std::sync::MutexGuard;

use dalkit_core::errors::DalError;
use dalkit_core::repo::{require_id, validate};
use dalkit_core::{RecordId, Repository};
use rusqlite::{params_from_iter, Connection, ErrorCode, OptionalExtension};

use crate::db::SharedConnection;
use crate::errors::{connection_poisoned, from_row_error, from_rusqlite, Result};
use crate::repo::records::SqlRecord;

/// [`Repository`] over the table of `T`
///
/// Rows keep insertion order through the table's autoincrement `seq` column.
/// Several repositories may share one connection; each call holds the
/// connection lock for its whole duration.
pub struct SqliteRepository<T> {
    conn: SharedConnection,
    _record: PhantomData<fn() -> T>,
}

impl<T: SqlRecord> SqliteRepository<T> {
    /// Repository over an already migrated connection
    pub fn new(conn: SharedConnection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| connection_poisoned())
    }

    fn select_sql(filter: &str) -> String {
        format!(
            "SELECT id, {} FROM {} {} ORDER BY seq",
            T::COLUMNS.join(", "),
            T::TABLE,
            filter
        )
    }

    fn insert_sql() -> String {
        let placeholders = (1..=T::COLUMNS.len() + 1)
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} (id, {}) VALUES ({})",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders
        )
    }
}

impl<T: SqlRecord> Clone for SqliteRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.conn.clone())
    }
}

impl<T: SqlRecord> std::fmt::Debug for SqliteRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteRepository")
            .field("table", &T::TABLE)
            .finish()
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

impl<T: SqlRecord> Repository<T> for SqliteRepository<T> {
    fn insert(&self, record: T) -> Result<RecordId> {
        let id = validate(&record)?;
        let conn = self.lock()?;
        conn.execute(&Self::insert_sql(), params_from_iter(record.values()))
            .map_err(|err| {
                if is_unique_violation(&err) {
                    DalError::DuplicateId { kind: T::KIND, id }
                } else {
                    from_rusqlite(err)
                }
            })?;
        tracing::debug!(
            component = module_path!(),
            record_kind = T::KIND,
            record_id = id,
            "inserted"
        );
        Ok(id)
    }

    fn delete(&self, record: &T) -> Result<()> {
        let id = require_id(record)?;
        let conn = self.lock()?;
        let removed = conn
            .execute(&format!("DELETE FROM {} WHERE id = ?1", T::TABLE), [id])
            .map_err(from_rusqlite)?;
        if removed == 0 {
            return Err(DalError::NotFound { kind: T::KIND, id });
        }
        tracing::debug!(
            component = module_path!(),
            record_kind = T::KIND,
            record_id = id,
            "deleted"
        );
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<T>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&Self::select_sql("")).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], |row| T::from_row(row))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_row_error)?;
        Ok(rows)
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<T>> {
        let conn = self.lock()?;
        conn.query_row(&Self::select_sql("WHERE id = ?1"), [id], |row| {
            T::from_row(row)
        })
        .optional()
        .map_err(from_row_error)
    }
}
