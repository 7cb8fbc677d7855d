//! Router and shared state.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | / | `index` |
//! | POST | / | `create_list` |
//! | GET, POST | /all_lists | `all_lists` |
//! | GET, POST | /list/{ident} | `one_list` |
//! | GET | /update/{item} | `update_form` |
//! | POST | /update/{item} | `update_item` |
//! | GET, POST | /delete/{lst} | `delete_list` |

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use todo_store::{DbState, ItemRepository, ListRepository};
use tower_http::trace::TraceLayer;

use crate::handlers::{all_lists, create_list, delete_list, index, one_list, update_form, update_item};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub item_repo: Arc<ItemRepository>,
    pub list_repo: Arc<ListRepository>,
}

impl AppState {
    /// Build both repositories over the same connection
    pub fn new(db_state: &DbState) -> Self {
        Self {
            item_repo: Arc::new(ItemRepository::new(db_state.conn.clone())),
            list_repo: Arc::new(ListRepository::new(db_state.conn.clone())),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(create_list))
        .route("/all_lists", get(all_lists).post(all_lists))
        .route("/list/{ident}", get(one_list).post(one_list))
        .route("/update/{item}", get(update_form).post(update_item))
        .route("/delete/{lst}", get(delete_list).post(delete_list))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
