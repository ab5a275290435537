//! Database connection management

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;

/// Connection shared by every repository over the same database
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)
}

/// Configure, migrate and wrap `conn` for sharing between repositories
pub fn prepare(mut conn: Connection) -> Result<SharedConnection> {
    configure(&conn)?;
    apply_migrations(&mut conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Open, migrate and share the database at `path`
pub fn open_shared<P: AsRef<Path>>(path: P) -> Result<SharedConnection> {
    prepare(open(path)?)
}

/// Open, migrate and share a fresh in-memory database
pub fn open_shared_in_memory() -> Result<SharedConnection> {
    prepare(open_in_memory()?)
}
