use postdeck_types::{PostDraft, PostId};

/// A control the rendered surface exposes.
///
/// The analog of the wired-up nodes of a browser page: a selectable list
/// row, the edit/delete buttons on the detail pane, the form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    PostRow(PostId),
    EditButton,
    CancelEdit,
    DeleteButton,
    ConfirmDelete,
    CancelDelete,
    Reload,
}

/// Something the user asked for, named by intent.
///
/// Submits carry the field values the surface collected; everything else
/// is resolved against current state inside [`crate::BoardState::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Re-fetch the list, keeping the current selection.
    Reload,
    /// Show a post's detail (list row activation).
    Select(PostId),
    /// Reveal the edit form, pre-filled from the shown detail.
    OpenEdit,
    /// Hide the edit form without submitting.
    CancelEdit,
    /// Submit the edit form's current values.
    SubmitEdit { title: String, content: String },
    /// Ask for delete confirmation on the shown post.
    RequestDelete,
    /// Confirm the pending delete.
    ConfirmDelete,
    /// Decline the pending delete; no request is sent.
    CancelDelete,
    /// Submit the create form.
    SubmitCreate(PostDraft),
}

/// The event-dispatch table: each control maps to exactly one action.
pub fn action_for(control: Control) -> Action {
    match control {
        Control::PostRow(id) => Action::Select(id),
        Control::EditButton => Action::OpenEdit,
        Control::CancelEdit => Action::CancelEdit,
        Control::DeleteButton => Action::RequestDelete,
        Control::ConfirmDelete => Action::ConfirmDelete,
        Control::CancelDelete => Action::CancelDelete,
        Control::Reload => Action::Reload,
    }
}
