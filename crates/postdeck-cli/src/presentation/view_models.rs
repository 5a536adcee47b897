use serde::Serialize;

/// One row of the post list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummaryViewModel {
    pub id: String,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostListViewModel {
    pub api_url: String,
    pub total: usize,
    pub posts: Vec<PostSummaryViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetailViewModel {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedViewModel {
    pub post: PostDetailViewModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatedViewModel {
    pub post: PostDetailViewModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedViewModel {
    pub id: String,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigViewModel {
    pub config_dir: String,
    pub config_file_exists: bool,
    pub api_url: String,
}

/// Row as the interactive browser renders it; `active` marks the row
/// whose detail is currently shown (at most one).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRowViewModel {
    pub id: String,
    pub title: String,
    pub author: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditFormViewModel {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmDeleteViewModel {
    pub id: String,
    pub title: String,
}

/// Everything the interactive browser draws in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardViewModel {
    pub api_url: String,
    pub rows: Vec<PostRowViewModel>,
    /// `None` renders the placeholder.
    pub detail: Option<PostDetailViewModel>,
    pub placeholder: String,
    /// Pre-filled values for the edit form while it is visible.
    pub edit_form: Option<EditFormViewModel>,
    pub confirm_delete: Option<ConfirmDeleteViewModel>,
    /// RFC 3339 timestamp of the last successful list fetch.
    pub refreshed_at: Option<String>,
}
