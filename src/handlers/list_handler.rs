//! List handlers: creation form, overview, single list, delete.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use todo_store::Repository;

use super::{redirect_with_flash, ALL_LISTS_PATH};
use crate::app::AppState;
use crate::error::AppError;
use crate::flash;
use crate::forms::CreateListForm;
use crate::views::{self, ListSummary};

/// GET / - empty creation form
pub async fn index() -> Html<String> {
    Html(views::index_page(&CreateListForm::default(), &[]))
}

/// POST / - create the list (or extend an existing one) from the form
pub async fn create_list(
    State(state): State<AppState>,
    Form(form): Form<CreateListForm>,
) -> Result<Response, AppError> {
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            tracing::debug!(?errors, "rejected list form");
            let page = Html(views::index_page(&form, &errors));
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    let list = state
        .list_repo
        .get_or_create(valid.title.as_str(), valid.entries.as_slice())
        .await?;
    tracing::info!(list_id = list.id, title = %list.title, entries = valid.entries.len(), "list saved");

    Ok(Redirect::to(ALL_LISTS_PATH).into_response())
}

/// GET|POST /all_lists - every list with its delete control
pub async fn all_lists(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let lists = state.list_repo.list().await?;

    let mut summaries = Vec::with_capacity(lists.len());
    for list in lists {
        let item_count = state.list_repo.item_count(list.id).await?;
        summaries.push(ListSummary { list, item_count });
    }

    let message = flash::read(&headers);
    let page = Html(views::all_lists_page(&summaries, message.as_deref()));

    Ok(match message {
        Some(_) => ([(header::SET_COOKIE, flash::clear_cookie())], page).into_response(),
        None => page.into_response(),
    })
}

/// GET|POST /list/{ident} - items of one list
pub async fn one_list(
    State(state): State<AppState>,
    Path(ident): Path<String>,
) -> Result<Html<String>, AppError> {
    let not_found = || AppError::NotFound(format!("No list with id {}", ident));

    let id: u32 = ident.parse().map_err(|_| not_found())?;
    let list = state.list_repo.find_by_id(id).await?.ok_or_else(not_found)?;
    let items = state.list_repo.items_of(list.id).await?;

    Ok(Html(views::list_page(&list, &items)))
}

/// GET|POST /delete/{lst} - delete by title, always back to the overview
pub async fn delete_list(
    State(state): State<AppState>,
    Path(lst): Path<String>,
) -> Result<Response, AppError> {
    let message = if state.list_repo.delete(&lst).await? {
        tracing::info!(title = %lst, "list deleted");
        format!("Deleted list {}", lst)
    } else {
        tracing::warn!(title = %lst, "delete requested for unknown list");
        format!("No list named {}", lst)
    };

    Ok(redirect_with_flash(ALL_LISTS_PATH, &message))
}
