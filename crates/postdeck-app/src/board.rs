use chrono::{DateTime, Utc};

use postdeck_types::{Post, PostId, PostPatch};

use crate::actions::Action;
use crate::diag::Diagnostics;
use crate::effects::{Effect, Outcome};

/// Placeholder shown by the detail pane when no post is selected.
pub const DETAIL_PLACEHOLDER: &str = "Select a post to view details";

/// One selectable list entry: the rendered summary row for a post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRow {
    pub id: PostId,
    pub title: String,
    pub author: String,
}

impl From<&Post> for PostRow {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
        }
    }
}

/// What the detail pane shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPane {
    #[default]
    Placeholder,
    Showing(Post),
}

/// Edit form visibility, the only explicit form state flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditForm {
    #[default]
    Hidden,
    Visible {
        id: PostId,
    },
}

/// The whole visible surface, modeled explicitly.
///
/// Mutated only through [`dispatch`](Self::dispatch) (user intent) and
/// [`absorb`](Self::absorb) (completed requests); both return the effects
/// the driver should issue next. `list_gen` and `detail_gen` tag every
/// fetch at issue time so a superseded response is discarded instead of
/// overwriting a newer one.
#[derive(Debug, Default)]
pub struct BoardState {
    rows: Vec<PostRow>,
    selected: Option<PostId>,
    detail: DetailPane,
    edit_form: EditForm,
    confirm_delete: Option<PostId>,
    list_gen: u64,
    detail_gen: u64,
    refreshed_at: Option<DateTime<Utc>>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[PostRow] {
        &self.rows
    }

    pub fn selected(&self) -> Option<&PostId> {
        self.selected.as_ref()
    }

    pub fn detail(&self) -> &DetailPane {
        &self.detail
    }

    pub fn edit_form(&self) -> &EditForm {
        &self.edit_form
    }

    pub fn confirm_delete(&self) -> Option<&PostId> {
        self.confirm_delete.as_ref()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Whether a row should carry the active-selection marker.
    ///
    /// Derived from `selected`, so at most one row is ever active. A
    /// selected id with no matching row silently highlights nothing while
    /// the detail still renders.
    pub fn is_row_active(&self, id: &PostId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Effects for the initial load: fetch the list, then auto-select the
    /// first post in server order.
    pub fn initial_effects(&mut self) -> Vec<Effect> {
        self.list_gen += 1;
        vec![Effect::FetchList {
            generation: self.list_gen,
            select_first: true,
        }]
    }

    /// Apply a user action; returns the requests to issue.
    pub fn dispatch(&mut self, action: Action, diag: &dyn Diagnostics) -> Vec<Effect> {
        match action {
            Action::Reload => {
                self.list_gen += 1;
                vec![Effect::FetchList {
                    generation: self.list_gen,
                    select_first: false,
                }]
            }

            Action::Select(id) => {
                self.detail_gen += 1;
                vec![Effect::FetchDetail {
                    id,
                    generation: self.detail_gen,
                }]
            }

            Action::OpenEdit => {
                if let DetailPane::Showing(post) = &self.detail {
                    self.edit_form = EditForm::Visible {
                        id: post.id.clone(),
                    };
                }
                Vec::new()
            }

            Action::CancelEdit => {
                self.edit_form = EditForm::Hidden;
                Vec::new()
            }

            Action::SubmitEdit { title, content } => match &self.edit_form {
                EditForm::Visible { id } => vec![Effect::SubmitUpdate {
                    id: id.clone(),
                    patch: PostPatch { title, content },
                }],
                EditForm::Hidden => Vec::new(),
            },

            Action::RequestDelete => {
                if let DetailPane::Showing(post) = &self.detail {
                    self.confirm_delete = Some(post.id.clone());
                }
                Vec::new()
            }

            Action::ConfirmDelete => match self.confirm_delete.take() {
                Some(id) => vec![Effect::SubmitDelete { id }],
                None => Vec::new(),
            },

            Action::CancelDelete => {
                self.confirm_delete = None;
                Vec::new()
            }

            Action::SubmitCreate(draft) => {
                if !draft.is_complete() {
                    diag.note("create form incomplete; nothing submitted");
                    return Vec::new();
                }
                vec![Effect::SubmitCreate { draft }]
            }
        }
    }

    /// Apply a completed request; returns the follow-up requests.
    ///
    /// Every failure is reported to `diag` here and nowhere else; the
    /// previous view persists.
    pub fn absorb(&mut self, outcome: Outcome, diag: &dyn Diagnostics) -> Vec<Effect> {
        match outcome {
            Outcome::ListLoaded {
                generation,
                select_first,
                result,
            } => {
                if generation != self.list_gen {
                    diag.note("discarded stale post list response");
                    return Vec::new();
                }
                match result {
                    Ok(posts) => {
                        self.rows = posts.iter().map(PostRow::from).collect();
                        self.refreshed_at = Some(Utc::now());

                        if select_first {
                            if let Some(first) = self.rows.first() {
                                let id = first.id.clone();
                                self.detail_gen += 1;
                                return vec![Effect::FetchDetail {
                                    id,
                                    generation: self.detail_gen,
                                }];
                            }
                        }
                        Vec::new()
                    }
                    Err(err) => {
                        diag.failure("fetching posts", &err);
                        Vec::new()
                    }
                }
            }

            Outcome::DetailLoaded { generation, result } => {
                if generation != self.detail_gen {
                    diag.note("discarded stale post detail response");
                    return Vec::new();
                }
                match result {
                    Ok(post) => {
                        self.selected = Some(post.id.clone());
                        self.detail = DetailPane::Showing(post);
                    }
                    Err(err) => diag.failure("fetching post", &err),
                }
                Vec::new()
            }

            Outcome::Updated { id, result } => match result {
                Ok(()) => {
                    self.edit_form = EditForm::Hidden;
                    self.list_gen += 1;
                    self.detail_gen += 1;
                    vec![
                        Effect::FetchList {
                            generation: self.list_gen,
                            select_first: false,
                        },
                        Effect::FetchDetail {
                            id,
                            generation: self.detail_gen,
                        },
                    ]
                }
                Err(err) => {
                    // Form stays visible so nothing typed is lost.
                    diag.failure("updating post", &err);
                    Vec::new()
                }
            },

            Outcome::Created { result } => match result {
                Ok(_post) => {
                    self.list_gen += 1;
                    vec![Effect::FetchList {
                        generation: self.list_gen,
                        select_first: false,
                    }]
                }
                Err(err) => {
                    diag.failure("creating post", &err);
                    Vec::new()
                }
            },

            Outcome::Deleted { id: _, result } => match result {
                Ok(()) => {
                    self.detail = DetailPane::Placeholder;
                    self.selected = None;
                    self.list_gen += 1;
                    // Reselection policy: first post in server order, not
                    // the neighbor of the deleted row.
                    vec![Effect::FetchList {
                        generation: self.list_gen,
                        select_first: true,
                    }]
                }
                Err(err) => {
                    diag.failure("deleting post", &err);
                    Vec::new()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::BufferDiagnostics;
    use postdeck_types::{ApiError, PostDraft};

    fn post(id: &str, title: &str) -> Post {
        Post {
            id: PostId::new(id),
            title: title.to_string(),
            author: "Au".to_string(),
            content: "body".to_string(),
        }
    }

    fn list_generation(effects: &[Effect]) -> u64 {
        match effects {
            [Effect::FetchList { generation, .. }] => *generation,
            other => panic!("expected a single list fetch, got {:?}", other),
        }
    }

    fn detail_generation(effects: &[Effect]) -> u64 {
        match effects {
            [Effect::FetchDetail { generation, .. }] => *generation,
            other => panic!("expected a single detail fetch, got {:?}", other),
        }
    }

    #[test]
    fn initial_load_selects_first_post_in_server_order() {
        let diag = BufferDiagnostics::new();
        let mut board = BoardState::new();

        let effects = board.initial_effects();
        assert!(matches!(
            effects.as_slice(),
            [Effect::FetchList {
                select_first: true,
                ..
            }]
        ));

        let follow_up = board.absorb(
            Outcome::ListLoaded {
                generation: list_generation(&effects),
                select_first: true,
                result: Ok(vec![post("1", "A"), post("2", "B")]),
            },
            &diag,
        );
        assert!(matches!(
            follow_up.as_slice(),
            [Effect::FetchDetail { id, .. }] if id == &PostId::new("1")
        ));
    }

    #[test]
    fn stale_detail_response_is_discarded() {
        let diag = BufferDiagnostics::new();
        let mut board = BoardState::new();

        let first = board.dispatch(Action::Select(PostId::new("1")), &diag);
        let second = board.dispatch(Action::Select(PostId::new("2")), &diag);

        // The slower first response lands after the second was issued.
        board.absorb(
            Outcome::DetailLoaded {
                generation: detail_generation(&first),
                result: Ok(post("1", "old")),
            },
            &diag,
        );
        assert_eq!(board.detail(), &DetailPane::Placeholder);

        board.absorb(
            Outcome::DetailLoaded {
                generation: detail_generation(&second),
                result: Ok(post("2", "new")),
            },
            &diag,
        );
        assert!(matches!(board.detail(), DetailPane::Showing(p) if p.id == PostId::new("2")));
        assert!(board.is_row_active(&PostId::new("2")));
    }

    #[test]
    fn at_most_one_row_is_active() {
        let diag = BufferDiagnostics::new();
        let mut board = BoardState::new();

        let effects = board.initial_effects();
        board.absorb(
            Outcome::ListLoaded {
                generation: list_generation(&effects),
                select_first: false,
                result: Ok(vec![post("1", "A"), post("2", "B"), post("3", "C")]),
            },
            &diag,
        );

        for selected in ["1", "2", "3"] {
            let effects = board.dispatch(Action::Select(PostId::new(selected)), &diag);
            board.absorb(
                Outcome::DetailLoaded {
                    generation: detail_generation(&effects),
                    result: Ok(post(selected, "T")),
                },
                &diag,
            );

            let active: Vec<_> = board
                .rows()
                .iter()
                .filter(|row| board.is_row_active(&row.id))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].id, PostId::new(selected));
        }
    }

    #[test]
    fn edit_flow_opens_prefills_and_hides_on_success() {
        let diag = BufferDiagnostics::new();
        let mut board = BoardState::new();

        // Edit without a shown detail is a no-op.
        board.dispatch(Action::OpenEdit, &diag);
        assert_eq!(board.edit_form(), &EditForm::Hidden);

        let effects = board.dispatch(Action::Select(PostId::new("1")), &diag);
        board.absorb(
            Outcome::DetailLoaded {
                generation: detail_generation(&effects),
                result: Ok(post("1", "A")),
            },
            &diag,
        );

        board.dispatch(Action::OpenEdit, &diag);
        assert_eq!(
            board.edit_form(),
            &EditForm::Visible {
                id: PostId::new("1")
            }
        );

        let effects = board.dispatch(
            Action::SubmitEdit {
                title: "A2".to_string(),
                content: "body2".to_string(),
            },
            &diag,
        );
        match effects.as_slice() {
            [Effect::SubmitUpdate { id, patch }] => {
                assert_eq!(id, &PostId::new("1"));
                assert_eq!(patch.title, "A2");
            }
            other => panic!("expected update submit, got {:?}", other),
        }

        let follow_up = board.absorb(
            Outcome::Updated {
                id: PostId::new("1"),
                result: Ok(()),
            },
            &diag,
        );
        assert_eq!(board.edit_form(), &EditForm::Hidden);
        assert_eq!(follow_up.len(), 2);
    }

    #[test]
    fn failed_update_keeps_the_form_visible() {
        let diag = BufferDiagnostics::new();
        let mut board = BoardState::new();

        let effects = board.dispatch(Action::Select(PostId::new("1")), &diag);
        board.absorb(
            Outcome::DetailLoaded {
                generation: detail_generation(&effects),
                result: Ok(post("1", "A")),
            },
            &diag,
        );
        board.dispatch(Action::OpenEdit, &diag);

        let follow_up = board.absorb(
            Outcome::Updated {
                id: PostId::new("1"),
                result: Err(ApiError::Status { status: 500 }),
            },
            &diag,
        );
        assert!(follow_up.is_empty());
        assert!(matches!(board.edit_form(), EditForm::Visible { .. }));
        assert!(!diag.is_empty());
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let diag = BufferDiagnostics::new();
        let mut board = BoardState::new();

        let effects = board.dispatch(Action::Select(PostId::new("1")), &diag);
        board.absorb(
            Outcome::DetailLoaded {
                generation: detail_generation(&effects),
                result: Ok(post("1", "A")),
            },
            &diag,
        );

        board.dispatch(Action::RequestDelete, &diag);
        assert_eq!(board.confirm_delete(), Some(&PostId::new("1")));

        let effects = board.dispatch(Action::CancelDelete, &diag);
        assert!(effects.is_empty());
        assert_eq!(board.confirm_delete(), None);

        // Confirming with no pending delete is also a no-op.
        assert!(board.dispatch(Action::ConfirmDelete, &diag).is_empty());
    }

    #[test]
    fn deleting_resets_detail_and_reselects_first() {
        let diag = BufferDiagnostics::new();
        let mut board = BoardState::new();

        let effects = board.dispatch(Action::Select(PostId::new("2")), &diag);
        board.absorb(
            Outcome::DetailLoaded {
                generation: detail_generation(&effects),
                result: Ok(post("2", "B")),
            },
            &diag,
        );

        board.dispatch(Action::RequestDelete, &diag);
        let effects = board.dispatch(Action::ConfirmDelete, &diag);
        assert!(matches!(
            effects.as_slice(),
            [Effect::SubmitDelete { id }] if id == &PostId::new("2")
        ));

        let follow_up = board.absorb(
            Outcome::Deleted {
                id: PostId::new("2"),
                result: Ok(()),
            },
            &diag,
        );
        assert_eq!(board.detail(), &DetailPane::Placeholder);
        assert_eq!(board.selected(), None);
        assert!(matches!(
            follow_up.as_slice(),
            [Effect::FetchList {
                select_first: true,
                ..
            }]
        ));
    }

    #[test]
    fn incomplete_create_draft_is_not_submitted() {
        let diag = BufferDiagnostics::new();
        let mut board = BoardState::new();

        let effects = board.dispatch(Action::SubmitCreate(PostDraft::new("", "Au", "C")), &diag);
        assert!(effects.is_empty());
        assert!(!diag.is_empty());

        let effects = board.dispatch(Action::SubmitCreate(PostDraft::new("T", "Au", "C")), &diag);
        assert!(matches!(effects.as_slice(), [Effect::SubmitCreate { .. }]));
    }

    #[test]
    fn failed_list_fetch_keeps_previous_rows() {
        let diag = BufferDiagnostics::new();
        let mut board = BoardState::new();

        let effects = board.initial_effects();
        board.absorb(
            Outcome::ListLoaded {
                generation: list_generation(&effects),
                select_first: false,
                result: Ok(vec![post("1", "A")]),
            },
            &diag,
        );
        assert_eq!(board.rows().len(), 1);

        let effects = board.dispatch(Action::Reload, &diag);
        board.absorb(
            Outcome::ListLoaded {
                generation: list_generation(&effects),
                select_first: false,
                result: Err(ApiError::transport("connection refused")),
            },
            &diag,
        );

        // Stale rows persist; the failure only reaches the diagnostics.
        assert_eq!(board.rows().len(), 1);
        assert!(!diag.is_empty());
    }
}
