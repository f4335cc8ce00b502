//! Transaction management utilities.
//!
//! Every lifecycle mutation runs inside one `BEGIN IMMEDIATE` transaction.
//! `SQLite` admits a single immediate transaction at a time, so a read,
//! check, and write performed inside the closure cannot interleave with
//! another writer.

use rusqlite::{ErrorCode, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;

impl Database {
    /// Runs `f` inside an immediate transaction.
    ///
    /// The transaction commits if `f` returns `Ok` and rolls back otherwise,
    /// so a rejected operation leaves no trace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if the write lock cannot be acquired
    /// within the configured busy timeout, or whatever error `f` returns.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roombook::database::{Database, DatabaseConfig, ReservationStore};
    /// use roombook::ReservationId;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
    /// let exists = db
    ///     .with_immediate_transaction(|tx| tx.exists_by_id(ReservationId::new(1)))
    ///     .unwrap();
    /// ```
    pub fn with_immediate_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let seconds = self.config().busy_timeout.as_secs();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| lock_error(e, seconds))?;

        let value = f(&tx)?;

        tx.commit().map_err(|e| lock_error(e, seconds))?;
        Ok(value)
    }
}

/// Maps `SQLITE_BUSY` and `SQLITE_LOCKED` to [`Error::LockTimeout`].
fn lock_error(err: rusqlite::Error, seconds: u64) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(ref sqlite_err, _)
            if matches!(
                sqlite_err.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ) =>
        {
            Error::LockTimeout { seconds }
        }
        other => Error::Database(other),
    }
}
