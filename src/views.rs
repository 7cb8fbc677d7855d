//! HTML pages.
//!
//! Plain string building around one shared layout. All user text is escaped
//! and path segments in links are percent-encoded.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use todo_store::{Item, TodoList};

use crate::forms::CreateListForm;

/// A list together with how many item rows it holds
#[derive(Debug, Clone)]
pub struct ListSummary {
    pub list: TodoList,
    pub item_count: u32,
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn path_segment(text: &str) -> String {
    utf8_percent_encode(text, NON_ALPHANUMERIC).to_string()
}

fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let banner = flash
        .map(|message| format!("<p class=\"flash\">{}</p>\n", escape_html(message)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>
<html>
<head><meta charset=\"utf-8\"><title>{title}</title></head>
<body>
<nav><a href=\"/\">New list</a> | <a href=\"/all_lists\">All lists</a></nav>
{banner}<h1>{title}</h1>
{body}
</body>
</html>
",
        title = escape_html(title),
        banner = banner,
        body = body,
    )
}

fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape_html(e)))
        .collect();
    format!("<ul class=\"errors\">{}</ul>\n", items)
}

/// `GET /` and a rejected `POST /`
pub fn index_page(form: &CreateListForm, errors: &[String]) -> String {
    let body = format!(
        "{errors}<form method=\"post\" action=\"/\">
<p><label>What is the title of this TODO List?<br><input type=\"text\" name=\"name\" value=\"{name}\"></label></p>
<p><label>Enter your TODO list items in the following format: Description, Priority -- separated by newlines<br>
<textarea name=\"items\" rows=\"8\" cols=\"50\">{items}</textarea></label></p>
<p><button type=\"submit\">Submit</button></p>
</form>",
        errors = error_list(errors),
        name = escape_html(&form.name),
        items = escape_html(&form.items),
    );
    layout("Create a TODO list", None, &body)
}

/// `GET /all_lists`
pub fn all_lists_page(lists: &[ListSummary], flash: Option<&str>) -> String {
    let body = if lists.is_empty() {
        "<p>There are no lists yet.</p>".to_string()
    } else {
        let rows: String = lists
            .iter()
            .map(|summary| {
                let list = &summary.list;
                let created = DateTime::<Utc>::from_timestamp_millis(list.created_at)
                    .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                format!(
                    "<li><a href=\"/list/{id}\">{title}</a> ({count} items, created {created})
<form method=\"post\" action=\"/delete/{segment}\" style=\"display:inline\"><button type=\"submit\">Delete</button></form></li>\n",
                    id = list.id,
                    title = escape_html(list.title.as_str()),
                    count = summary.item_count,
                    created = created,
                    segment = path_segment(list.title.as_str()),
                )
            })
            .collect();
        format!("<ul>\n{}</ul>", rows)
    };
    layout("All TODO lists", flash, &body)
}

/// `GET /list/{ident}`
pub fn list_page(list: &TodoList, items: &[Item]) -> String {
    let body = if items.is_empty() {
        "<p>This list has no items.</p>".to_string()
    } else {
        let rows: String = items
            .iter()
            .map(|item| {
                format!(
                    "<tr><td>{description}</td><td>{priority}</td><td><a href=\"/update/{segment}\">Update</a></td></tr>\n",
                    description = escape_html(item.description.as_str()),
                    priority = escape_html(item.priority.as_str()),
                    segment = path_segment(item.description.as_str()),
                )
            })
            .collect();
        format!(
            "<table>\n<tr><th>Item</th><th>Priority</th><th></th></tr>\n{}</table>",
            rows
        )
    };
    layout(list.title.as_str(), None, &body)
}

/// `GET /update/{item}` and a rejected `POST /update/{item}`
pub fn update_page(item: &str, errors: &[String]) -> String {
    let body = format!(
        "{errors}<form method=\"post\" action=\"/update/{segment}\">
<p><label>What is the new priority of this item?<br><input type=\"text\" name=\"new_priority\"></label></p>
<p><button type=\"submit\">Update</button></p>
</form>",
        errors = error_list(errors),
        segment = path_segment(item),
    );
    layout(&format!("Update {}", item), None, &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(title, None, &format!("<p>{}</p>", escape_html(message)))
}
