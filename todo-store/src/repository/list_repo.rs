//! List Repository
//!
//! SQLite-backed operations for to-do lists and their item associations.
//! A list may reference the same item more than once: every submission
//! appends one association row per entry.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{DomainError, DomainResult, Item, ItemEntry, OnList, Title, TodoList};
use super::db::{last_insert_id, SharedConnection};
use super::item_repo::{get_or_create_item, row_to_item};
use super::traits::Repository;

const LIST_COLUMNS: &str = "id, title, created_at";

/// SQLite implementation of TodoList repository
pub struct ListRepository {
    conn: SharedConnection,
}

impl ListRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Fetch or create the list named `title` and append one item per raw
    /// entry. All entries are parsed before anything is written, and the
    /// whole call commits or rolls back as one unit.
    pub async fn get_or_create<S: AsRef<str>>(&self, title: &str, raw_entries: &[S]) -> DomainResult<TodoList> {
        let title = Title::parse(title)?;
        let entries = raw_entries
            .iter()
            .map(|raw| ItemEntry::parse(raw.as_ref()))
            .collect::<DomainResult<Vec<_>>>()?;

        let mut guard = self.conn.lock().await;
        let tx = guard.transaction()?;

        let list = match find_list(&tx, &title)? {
            Some(existing) => existing,
            None => {
                let now = chrono::Utc::now().timestamp_millis();
                tx.execute(
                    "INSERT INTO lists (title, created_at) VALUES (?, ?)",
                    params![title.as_str(), now],
                )?;
                let id = last_insert_id(&tx)?;
                log::debug!("created list {} `{}`", id, title);
                TodoList::new(id, title, now)
            }
        };

        for entry in &entries {
            let item = get_or_create_item(&tx, entry)?;
            tx.execute(
                "INSERT INTO on_list (item_id, list_id) VALUES (?, ?)",
                params![item.id, list.id],
            )?;
        }

        tx.commit()?;
        Ok(list)
    }

    /// Delete the list named `title` together with its association rows.
    /// Items are left in place. Returns `false` if no such list exists.
    pub async fn delete(&self, title: &str) -> DomainResult<bool> {
        let title = match Title::parse(title) {
            Ok(title) => title,
            Err(_) => return Ok(false),
        };

        let mut guard = self.conn.lock().await;
        let tx = guard.transaction()?;

        let Some(list) = find_list(&tx, &title)? else {
            return Ok(false);
        };

        tx.execute("DELETE FROM on_list WHERE list_id = ?", params![list.id])?;
        tx.execute("DELETE FROM lists WHERE id = ?", params![list.id])?;
        tx.commit()?;

        log::debug!("deleted list {} `{}`", list.id, list.title);
        Ok(true)
    }

    pub async fn find_by_title(&self, title: &str) -> DomainResult<Option<TodoList>> {
        let title = Title::parse(title)?;
        let conn = self.conn.lock().await;
        find_list(&conn, &title)
    }

    /// Items of a list, one per association row, in insertion order
    pub async fn items_of(&self, list_id: u32) -> DomainResult<Vec<Item>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(
            "SELECT i.id, i.description, i.priority FROM items i
             JOIN on_list ol ON i.id = ol.item_id
             WHERE ol.list_id = ?
             ORDER BY ol.rowid",
        )?;
        let mut rows = stmt.query(params![list_id])?;

        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(row_to_item(row)?);
        }
        Ok(items)
    }

    /// Number of association rows for a list
    pub async fn item_count(&self, list_id: u32) -> DomainResult<u32> {
        let conn = self.conn.lock().await;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM on_list WHERE list_id = ?",
            params![list_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Raw association rows for a list
    pub async fn associations(&self, list_id: u32) -> DomainResult<Vec<OnList>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare("SELECT item_id, list_id FROM on_list WHERE list_id = ? ORDER BY rowid")?;
        let mut rows = stmt.query(params![list_id])?;

        let mut links = Vec::new();
        while let Some(row) = rows.next()? {
            links.push(OnList {
                item_id: row.get(0)?,
                list_id: row.get(1)?,
            });
        }
        Ok(links)
    }
}

#[async_trait]
impl Repository<TodoList> for ListRepository {
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<TodoList>> {
        let conn = self.conn.lock().await;

        let list = conn
            .query_row(
                &format!("SELECT {} FROM lists WHERE id = ?", LIST_COLUMNS),
                params![id],
                |row| Ok(row_to_list(row)),
            )
            .optional()?;

        list.transpose()
    }

    async fn list(&self) -> DomainResult<Vec<TodoList>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(&format!("SELECT {} FROM lists ORDER BY id", LIST_COLUMNS))?;
        let mut rows = stmt.query([])?;

        let mut lists = Vec::new();
        while let Some(row) = rows.next()? {
            lists.push(row_to_list(row)?);
        }
        Ok(lists)
    }
}

fn find_list(conn: &Connection, title: &Title) -> DomainResult<Option<TodoList>> {
    let list = conn
        .query_row(
            &format!("SELECT {} FROM lists WHERE title = ?", LIST_COLUMNS),
            params![title.as_str()],
            |row| Ok(row_to_list(row)),
        )
        .optional()?;

    list.transpose()
}

/// Convert a database row (`LIST_COLUMNS` order) to TodoList
fn row_to_list(row: &Row) -> DomainResult<TodoList> {
    let id: u32 = row.get(0)?;
    let title: String = row.get(1)?;
    let created_at: i64 = row.get(2)?;

    let title = Title::parse(&title).map_err(|e| DomainError::Internal(format!("list {}: {}", id, e)))?;
    Ok(TodoList::new(id, title, created_at))
}
