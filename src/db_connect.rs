use std::path::Path;

use log::info;
use rusqlite::{Connection, OpenFlags};

use crate::error::{PipelineError, Result};

/// Opens a read-only connection to the capture database.
///
/// Fails if the file does not exist or cannot be opened; the pipeline never
/// writes to the store, so the connection is opened with read-only flags. A
/// `SELECT 1` probe confirms the file is actually a usable SQLite database
/// before any real query runs.
pub fn open(db_path: &Path) -> Result<Connection> {
    if !db_path.exists() {
        return Err(PipelineError::DataSource(format!(
            "database file not found at {}",
            db_path.display()
        )));
    }

    info!("Connecting to SQLite database at {}...", db_path.display());
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;

    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
    info!("Database connection established.");
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_data_source_error() {
        let result = open(Path::new("/nonexistent/networks.sqlite"));
        assert!(matches!(result, Err(PipelineError::DataSource(_))));
    }

    #[test]
    fn opens_an_existing_database_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("networks.sqlite");
        {
            let conn = Connection::open(&db_path).unwrap();
            conn.execute_batch("CREATE TABLE network (bssid TEXT);")
                .unwrap();
        }

        let conn = open(&db_path).unwrap();
        let err = conn.execute("INSERT INTO network (bssid) VALUES ('AA')", []);
        assert!(err.is_err(), "read-only connection must refuse writes");
    }
}
