//! Request handlers
//!
//! Translate HTTP requests into repository calls and render pages or
//! redirects.

mod item_handler;
mod list_handler;

pub use item_handler::*;
pub use list_handler::*;

use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};

use crate::flash;

/// Landing page after every successful mutation
pub const ALL_LISTS_PATH: &str = "/all_lists";

/// See-other redirect carrying a flash message for the next page
fn redirect_with_flash(to: &str, message: &str) -> Response {
    ([(header::SET_COOKIE, flash::set_cookie(message))], Redirect::to(to)).into_response()
}
