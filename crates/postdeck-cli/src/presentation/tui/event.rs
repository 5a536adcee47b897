use postdeck_app::Control;

use crate::presentation::view_models::BoardViewModel;

/// Driver -> renderer: what to draw next.
#[derive(Debug)]
pub enum TuiEvent {
    Update(Box<BoardViewModel>),
    /// A create submit succeeded; clear the form fields.
    ResetCreateForm,
}

/// Renderer -> driver: what the user did.
///
/// Controls go through the dispatch table; submits carry the field
/// values the renderer collected.
#[derive(Debug)]
pub enum UiSignal {
    Control(Control),
    SubmitEdit {
        title: String,
        content: String,
    },
    SubmitCreate {
        title: String,
        author: String,
        content: String,
    },
    Quit,
}
