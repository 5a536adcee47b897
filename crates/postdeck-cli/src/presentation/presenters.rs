use chrono::{DateTime, Utc};

use postdeck_app::{BoardState, DETAIL_PLACEHOLDER, DetailPane, EditForm};
use postdeck_types::Post;

use super::view_models::{
    BoardViewModel, ConfigViewModel, ConfirmDeleteViewModel, CreatedViewModel, DeletedViewModel,
    EditFormViewModel, PostDetailViewModel, PostListViewModel, PostRowViewModel,
    PostSummaryViewModel, UpdatedViewModel,
};

pub fn present_post_list(posts: &[Post], api_url: &str) -> PostListViewModel {
    PostListViewModel {
        api_url: api_url.to_string(),
        total: posts.len(),
        posts: posts
            .iter()
            .map(|post| PostSummaryViewModel {
                id: post.id.to_string(),
                title: post.title.clone(),
                author: post.author.clone(),
            })
            .collect(),
    }
}

pub fn present_post_detail(post: &Post) -> PostDetailViewModel {
    PostDetailViewModel {
        id: post.id.to_string(),
        title: post.title.clone(),
        author: post.author.clone(),
        content: post.content.clone(),
    }
}

pub fn present_created(post: &Post) -> CreatedViewModel {
    CreatedViewModel {
        post: present_post_detail(post),
    }
}

pub fn present_updated(post: &Post) -> UpdatedViewModel {
    UpdatedViewModel {
        post: present_post_detail(post),
    }
}

pub fn present_deleted(id: &str, remaining: usize) -> DeletedViewModel {
    DeletedViewModel {
        id: id.to_string(),
        remaining,
    }
}

pub fn present_config(
    config_dir: &std::path::Path,
    config_file_exists: bool,
    api_url: &str,
) -> ConfigViewModel {
    ConfigViewModel {
        config_dir: config_dir.display().to_string(),
        config_file_exists,
        api_url: api_url.to_string(),
    }
}

/// Project the whole board into one drawable frame.
///
/// The active flag is derived from the single selected id, so at most one
/// row can ever carry it.
pub fn present_board(board: &BoardState, api_url: &str) -> BoardViewModel {
    let rows = board
        .rows()
        .iter()
        .map(|row| PostRowViewModel {
            id: row.id.to_string(),
            title: row.title.clone(),
            author: row.author.clone(),
            active: board.is_row_active(&row.id),
        })
        .collect();

    let detail = match board.detail() {
        DetailPane::Placeholder => None,
        DetailPane::Showing(post) => Some(present_post_detail(post)),
    };

    let edit_form = match board.edit_form() {
        EditForm::Hidden => None,
        EditForm::Visible { id } => {
            // Pre-fill from the shown detail; the form only opens from it.
            let (title, content) = match board.detail() {
                DetailPane::Showing(post) if &post.id == id => {
                    (post.title.clone(), post.content.clone())
                }
                _ => (String::new(), String::new()),
            };
            Some(EditFormViewModel {
                id: id.to_string(),
                title,
                content,
            })
        }
    };

    let confirm_delete = board.confirm_delete().map(|id| {
        let title = board
            .rows()
            .iter()
            .find(|row| &row.id == id)
            .map(|row| row.title.clone())
            .or_else(|| match board.detail() {
                DetailPane::Showing(post) if &post.id == id => Some(post.title.clone()),
                _ => None,
            })
            .unwrap_or_else(|| id.to_string());
        ConfirmDeleteViewModel {
            id: id.to_string(),
            title,
        }
    });

    BoardViewModel {
        api_url: api_url.to_string(),
        rows,
        detail,
        placeholder: DETAIL_PLACEHOLDER.to_string(),
        edit_form,
        confirm_delete,
        refreshed_at: board.refreshed_at().map(|ts| ts.to_rfc3339()),
    }
}

/// Format a timestamp as relative time (e.g., "just now", "2 min ago").
pub fn format_relative_time(ts: &str) -> String {
    let parsed = match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return ts.to_string(),
    };

    let duration = Utc::now().signed_duration_since(parsed);
    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else {
        format!("{} days ago", duration.num_days())
    }
}
