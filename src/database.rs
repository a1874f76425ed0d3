use std::path::Path;

use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

use crate::config::ensure_directories;
use crate::error::Result;

/// Initialize database tables
fn init_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            video_id TEXT NOT NULL,
            comment TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )?;
    Ok(())
}

/// Open (or create) the database at `path` and make sure the schema exists
pub fn open(path: &Path) -> Result<Connection> {
    ensure_directories(path)?;
    let conn = Connection::open(path)?;
    init_tables(&conn)?;
    Ok(conn)
}

/// Comment row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: i64,
    pub video_id: String,
    pub comment: Option<String>,
    pub created_at: String,
}

/// Add a comment for a video, returning its row id
pub fn add_comment(conn: &Connection, video_id: &str, comment: Option<&str>) -> Result<i64> {
    conn.execute(
        "INSERT INTO comments (video_id, comment) VALUES (?1, ?2)",
        params![video_id, comment],
    )?;

    Ok(conn.last_insert_rowid())
}

/// List comments for a video, oldest first
pub fn comments_for_video(conn: &Connection, video_id: &str) -> Result<Vec<CommentRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, video_id, comment, created_at FROM comments WHERE video_id = ?1 ORDER BY id",
    )?;

    let results = stmt
        .query_map(params![video_id], |row| {
            Ok(CommentRecord {
                id: row.get(0)?,
                video_id: row.get(1)?,
                comment: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(results)
}
