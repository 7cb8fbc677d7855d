//! Item handlers: priority update form and submission.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use super::{redirect_with_flash, ALL_LISTS_PATH};
use crate::app::AppState;
use crate::error::AppError;
use crate::forms::UpdatePriorityForm;
use crate::views;

/// GET /update/{item}
pub async fn update_form(
    State(state): State<AppState>,
    Path(item): Path<String>,
) -> Result<Html<String>, AppError> {
    if state.item_repo.find_by_description(&item).await?.is_none() {
        return Err(AppError::NotFound(format!("No item named {}", item)));
    }
    Ok(Html(views::update_page(&item, &[])))
}

/// POST /update/{item}
pub async fn update_item(
    State(state): State<AppState>,
    Path(item): Path<String>,
    Form(form): Form<UpdatePriorityForm>,
) -> Result<Response, AppError> {
    let priority = match form.validate() {
        Ok(priority) => priority,
        Err(errors) => {
            let page = Html(views::update_page(&item, &errors));
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    let updated = state.item_repo.update(&item, priority.as_str()).await?;
    tracing::info!(item_id = updated.id, priority = %updated.priority, "priority updated");

    Ok(redirect_with_flash(ALL_LISTS_PATH, &format!("Updated priority of {}", item)))
}
