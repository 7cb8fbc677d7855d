//! Item Repository
//!
//! SQLite-backed get-or-create and priority updates for items. The
//! connection-level helpers are shared with the list repository so that a
//! whole list submission runs inside one transaction.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{Description, DomainError, DomainResult, Item, ItemEntry, Priority};
use super::db::{last_insert_id, SharedConnection};
use super::traits::Repository;

const ITEM_COLUMNS: &str = "id, description, priority";

/// SQLite implementation of Item repository
pub struct ItemRepository {
    conn: SharedConnection,
}

impl ItemRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Return the item for the entry's description, creating it with the
    /// entry's priority if it does not exist yet. An existing item is
    /// returned unchanged.
    pub async fn get_or_create(&self, raw_entry: &str) -> DomainResult<Item> {
        let entry = ItemEntry::parse(raw_entry)?;

        let mut guard = self.conn.lock().await;
        let tx = guard.transaction()?;
        let item = get_or_create_item(&tx, &entry)?;
        tx.commit()?;

        Ok(item)
    }

    /// Overwrite the priority of the item named `description`
    pub async fn update(&self, description: &str, new_priority: &str) -> DomainResult<Item> {
        let description = Description::parse(description)?;
        let priority = Priority::parse(new_priority)?;

        let mut guard = self.conn.lock().await;
        let tx = guard.transaction()?;

        let changed = tx.execute(
            "UPDATE items SET priority = ? WHERE description = ?",
            params![priority.as_str(), description.as_str()],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("item `{}`", description)));
        }

        let item = find_item(&tx, &description)?
            .ok_or_else(|| DomainError::Internal(format!("item `{}` vanished during update", description)))?;
        tx.commit()?;

        log::debug!("item `{}` priority set to `{}`", item.description, item.priority);
        Ok(item)
    }

    pub async fn find_by_description(&self, description: &str) -> DomainResult<Option<Item>> {
        let description = Description::parse(description)?;
        let conn = self.conn.lock().await;
        find_item(&conn, &description)
    }
}

#[async_trait]
impl Repository<Item> for ItemRepository {
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Item>> {
        let conn = self.conn.lock().await;

        let item = conn
            .query_row(
                &format!("SELECT {} FROM items WHERE id = ?", ITEM_COLUMNS),
                params![id],
                |row| Ok(row_to_item(row)),
            )
            .optional()?;

        item.transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Item>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(&format!("SELECT {} FROM items ORDER BY id", ITEM_COLUMNS))?;
        let mut rows = stmt.query([])?;

        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(row_to_item(row)?);
        }
        Ok(items)
    }
}

/// Look up an item by its exact description
pub(super) fn find_item(conn: &Connection, description: &Description) -> DomainResult<Option<Item>> {
    let item = conn
        .query_row(
            &format!("SELECT {} FROM items WHERE description = ?", ITEM_COLUMNS),
            params![description.as_str()],
            |row| Ok(row_to_item(row)),
        )
        .optional()?;

    item.transpose()
}

/// Get-or-create on an open connection or transaction; does not commit
pub(super) fn get_or_create_item(conn: &Connection, entry: &ItemEntry) -> DomainResult<Item> {
    if let Some(existing) = find_item(conn, &entry.description)? {
        return Ok(existing);
    }

    conn.execute(
        "INSERT INTO items (description, priority) VALUES (?, ?)",
        params![entry.description.as_str(), entry.priority.as_str()],
    )?;
    let id = last_insert_id(conn)?;

    log::debug!("created item {} `{}`", id, entry.description);
    Ok(Item::new(id, entry.description.clone(), entry.priority.clone()))
}

/// Convert a database row (`ITEM_COLUMNS` order) to Item
pub(super) fn row_to_item(row: &Row) -> DomainResult<Item> {
    let id: u32 = row.get(0)?;
    let description: String = row.get(1)?;
    let priority: String = row.get(2)?;

    Ok(Item::new(
        id,
        Description::parse(&description).map_err(|e| DomainError::Internal(format!("item {}: {}", id, e)))?,
        Priority::parse(&priority).map_err(|e| DomainError::Internal(format!("item {}: {}", id, e)))?,
    ))
}
