use std::path::Path;

use chrono::Utc;
use mobc::{Manager, Pool};
use rusqlite::{params, Connection, Result as SqliteResult};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::Result;

/// Metadata columns attached to every stored document. Callers strip these
/// before re-validating a raw document against a schema.
pub const METADATA_FIELDS: [&str; 3] = ["_id", "created_at", "updated_at"];

pub fn strip_metadata(document: &mut Map<String, Value>) {
    for field in METADATA_FIELDS {
        document.remove(field);
    }
}

pub struct SqliteManager {
    db_path: String,
}

impl SqliteManager {
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }
}

// Some PRAGMA statements return a row; fall back to query_row for those.
fn exec_pragma(conn: &Connection, pragma: &str) -> SqliteResult<()> {
    match conn.execute(pragma, []) {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::ExecuteReturnedResults) => conn.query_row(pragma, [], |_| Ok(())),
        Err(e) => Err(e),
    }
}

fn init_store(conn: &Connection) -> SqliteResult<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id TEXT PRIMARY KEY,
            collection TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection)",
        [],
    )?;
    Ok(())
}

#[async_trait::async_trait]
impl Manager for SqliteManager {
    type Connection = Connection;
    type Error = rusqlite::Error;

    async fn connect(&self) -> std::result::Result<Self::Connection, Self::Error> {
        debug!("opening document store at {}", self.db_path);
        let conn = Connection::open(&self.db_path)?;

        exec_pragma(&conn, "PRAGMA journal_mode=WAL")?;
        exec_pragma(&conn, "PRAGMA synchronous=NORMAL")?;
        exec_pragma(&conn, "PRAGMA temp_store=memory")?;

        init_store(&conn)?;
        Ok(conn)
    }

    async fn check(
        &self,
        conn: Self::Connection,
    ) -> std::result::Result<Self::Connection, Self::Error> {
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(conn)
    }
}

pub type DbPool = Pool<SqliteManager>;

pub async fn create_db_pool(db_path: &str) -> Result<DbPool> {
    if let Some(parent) = Path::new(db_path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let manager = SqliteManager::new(db_path.to_string());
    let pool = Pool::builder().max_open(10).max_idle(5).build(manager);

    info!("document store pool created: {}", db_path);
    Ok(pool)
}

/// Inserts a document into the named collection and returns the generated id.
pub async fn insert_document(pool: &DbPool, collection: &str, document: &Value) -> Result<String> {
    let conn = pool.get().await?;

    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();
    let body = serde_json::to_string(document)?;

    conn.execute(
        "INSERT INTO documents (id, collection, body, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, collection, body, now, now],
    )?;

    debug!("inserted document {} into collection '{}'", id, collection);
    Ok(id)
}

/// Returns every raw document in the collection, in the store's natural
/// retrieval order. Each document carries `_id`, `created_at` and `updated_at`
/// metadata merged into its body.
pub async fn find_all_documents(pool: &DbPool, collection: &str) -> Result<Vec<Value>> {
    let conn = pool.get().await?;

    let mut stmt = conn.prepare(
        "SELECT id, body, created_at, updated_at FROM documents
         WHERE collection = ?1 ORDER BY rowid",
    )?;

    let row_iter = stmt.query_map([collection], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;

    let mut documents = Vec::new();
    for row in row_iter {
        let (id, body, created_at, updated_at) = row?;
        let mut document: Value = serde_json::from_str(&body)?;
        if let Value::Object(map) = &mut document {
            map.insert("_id".to_string(), Value::String(id));
            map.insert("created_at".to_string(), Value::String(created_at));
            map.insert("updated_at".to_string(), Value::String(updated_at));
        }
        documents.push(document);
    }

    debug!(
        "fetched {} documents from collection '{}'",
        documents.len(),
        collection
    );
    Ok(documents)
}

pub async fn count_documents(pool: &DbPool, collection: &str) -> Result<i64> {
    let conn = pool.get().await?;
    let count = conn.query_row(
        "SELECT COUNT(*) FROM documents WHERE collection = ?1",
        [collection],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Names of every collection that currently holds at least one document.
pub async fn list_collections(pool: &DbPool) -> Result<Vec<String>> {
    let conn = pool.get().await?;

    let mut stmt =
        conn.prepare("SELECT DISTINCT collection FROM documents ORDER BY collection")?;
    let name_iter = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut collections = Vec::new();
    for name in name_iter {
        collections.push(name?);
    }
    Ok(collections)
}
