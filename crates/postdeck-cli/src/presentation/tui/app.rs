use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;

use postdeck_app::{Control, DETAIL_PLACEHOLDER};
use postdeck_types::PostId;

use super::event::UiSignal;
use crate::presentation::view_models::BoardViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditField {
    Title,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CreateField {
    Title,
    Author,
    Content,
}

/// Which surface element receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    List,
    Edit(EditField),
    Create(CreateField),
    Confirm,
}

/// Renderer-side state: the last frame received plus cursor, focus and
/// form text buffers. Domain state never lives here; every frame is
/// rebuilt from the driver's [`BoardViewModel`].
pub(crate) struct TuiState {
    pub board: BoardViewModel,
    pub focus: Focus,
    pub cursor: usize,
    pub list_state: ListState,
    pub edit_title: String,
    pub edit_content: String,
    edit_seeded: bool,
    pub create_title: String,
    pub create_author: String,
    pub create_content: String,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            board: BoardViewModel {
                api_url: String::new(),
                rows: Vec::new(),
                detail: None,
                placeholder: DETAIL_PLACEHOLDER.to_string(),
                edit_form: None,
                confirm_delete: None,
                refreshed_at: None,
            },
            focus: Focus::List,
            cursor: 0,
            list_state: ListState::default(),
            edit_title: String::new(),
            edit_content: String::new(),
            edit_seeded: false,
            create_title: String::new(),
            create_author: String::new(),
            create_content: String::new(),
        }
    }

    /// Absorb a new frame from the driver.
    pub fn apply_update(&mut self, board: BoardViewModel) {
        self.board = board;

        if self.board.rows.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.board.rows.len() - 1);
        }

        match &self.board.edit_form {
            Some(form) if !self.edit_seeded => {
                // Pre-fill once when the form becomes visible; later
                // frames must not clobber what the user typed.
                self.edit_title = form.title.clone();
                self.edit_content = form.content.clone();
                self.edit_seeded = true;
                self.focus = Focus::Edit(EditField::Title);
            }
            Some(_) => {}
            None => {
                self.edit_seeded = false;
                if matches!(self.focus, Focus::Edit(_)) {
                    self.focus = Focus::List;
                }
            }
        }

        match (&self.board.confirm_delete, self.focus) {
            (Some(_), focus) if focus != Focus::Confirm => self.focus = Focus::Confirm,
            (None, Focus::Confirm) => self.focus = Focus::List,
            _ => {}
        }
    }

    pub fn reset_create_form(&mut self) {
        self.create_title.clear();
        self.create_author.clear();
        self.create_content.clear();
        if matches!(self.focus, Focus::Create(_)) {
            self.focus = Focus::List;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UiSignal> {
        match self.focus {
            Focus::List => self.handle_list_key(key),
            Focus::Edit(field) => self.handle_edit_key(field, key),
            Focus::Create(field) => self.handle_create_key(field, key),
            Focus::Confirm => self.handle_confirm_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<UiSignal> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(UiSignal::Quit),
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Enter => self
                .cursor_row_id()
                .map(|id| UiSignal::Control(Control::PostRow(id))),
            KeyCode::Char('e') => Some(UiSignal::Control(Control::EditButton)),
            KeyCode::Char('d') => Some(UiSignal::Control(Control::DeleteButton)),
            KeyCode::Char('r') => Some(UiSignal::Control(Control::Reload)),
            KeyCode::Char('n') => {
                self.focus = Focus::Create(CreateField::Title);
                None
            }
            _ => None,
        }
    }

    fn handle_edit_key(&mut self, field: EditField, key: KeyEvent) -> Option<UiSignal> {
        match key.code {
            KeyCode::Esc => Some(UiSignal::Control(Control::CancelEdit)),
            KeyCode::Tab => {
                self.focus = Focus::Edit(match field {
                    EditField::Title => EditField::Content,
                    EditField::Content => EditField::Title,
                });
                None
            }
            KeyCode::Enter => Some(UiSignal::SubmitEdit {
                title: self.edit_title.clone(),
                content: self.edit_content.clone(),
            }),
            KeyCode::Backspace => {
                self.edit_buffer(field).pop();
                None
            }
            KeyCode::Char(c) => {
                self.edit_buffer(field).push(c);
                None
            }
            _ => None,
        }
    }

    fn handle_create_key(&mut self, field: CreateField, key: KeyEvent) -> Option<UiSignal> {
        match key.code {
            // The create form persists with whatever was typed, like a
            // form that never left the page.
            KeyCode::Esc => {
                self.focus = Focus::List;
                None
            }
            KeyCode::Tab => {
                self.focus = Focus::Create(match field {
                    CreateField::Title => CreateField::Author,
                    CreateField::Author => CreateField::Content,
                    CreateField::Content => CreateField::Title,
                });
                None
            }
            KeyCode::Enter => Some(UiSignal::SubmitCreate {
                title: self.create_title.clone(),
                author: self.create_author.clone(),
                content: self.create_content.clone(),
            }),
            KeyCode::Backspace => {
                self.create_buffer(field).pop();
                None
            }
            KeyCode::Char(c) => {
                self.create_buffer(field).push(c);
                None
            }
            _ => None,
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Option<UiSignal> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                Some(UiSignal::Control(Control::ConfirmDelete))
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(UiSignal::Control(Control::CancelDelete))
            }
            _ => None,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.board.rows.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.board.rows.len() - 1;
        self.cursor = self
            .cursor
            .saturating_add_signed(delta)
            .min(last);
    }

    fn cursor_row_id(&self) -> Option<PostId> {
        self.board
            .rows
            .get(self.cursor)
            .map(|row| PostId::new(row.id.clone()))
    }

    fn edit_buffer(&mut self, field: EditField) -> &mut String {
        match field {
            EditField::Title => &mut self.edit_title,
            EditField::Content => &mut self.edit_content,
        }
    }

    fn create_buffer(&mut self, field: CreateField) -> &mut String {
        match field {
            CreateField::Title => &mut self.create_title,
            CreateField::Author => &mut self.create_author,
            CreateField::Content => &mut self.create_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{EditFormViewModel, PostRowViewModel};
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn board_with_rows(rows: Vec<PostRowViewModel>) -> BoardViewModel {
        BoardViewModel {
            api_url: "http://localhost:3001".to_string(),
            rows,
            detail: None,
            placeholder: DETAIL_PLACEHOLDER.to_string(),
            edit_form: None,
            confirm_delete: None,
            refreshed_at: None,
        }
    }

    fn row(id: &str) -> PostRowViewModel {
        PostRowViewModel {
            id: id.to_string(),
            title: format!("Post {}", id),
            author: "Sam".to_string(),
            active: false,
        }
    }

    #[test]
    fn enter_on_a_row_activates_it() {
        let mut state = TuiState::new();
        state.apply_update(board_with_rows(vec![row("1"), row("2")]));

        state.handle_key(key(KeyCode::Down));
        let signal = state.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            signal,
            Some(UiSignal::Control(Control::PostRow(id))) if id == PostId::new("2")
        ));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = TuiState::new();
        state.apply_update(board_with_rows(vec![row("1"), row("2")]));

        state.handle_key(key(KeyCode::Up));
        assert_eq!(state.cursor, 0);
        for _ in 0..5 {
            state.handle_key(key(KeyCode::Down));
        }
        assert_eq!(state.cursor, 1);

        // Shrinking the list clamps the cursor.
        state.apply_update(board_with_rows(vec![row("1")]));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn edit_form_seeds_buffers_once() {
        let mut state = TuiState::new();
        let mut board = board_with_rows(vec![row("1")]);
        board.edit_form = Some(EditFormViewModel {
            id: "1".to_string(),
            title: "Post 1".to_string(),
            content: "Body".to_string(),
        });
        state.apply_update(board.clone());

        assert_eq!(state.focus, Focus::Edit(EditField::Title));
        assert_eq!(state.edit_title, "Post 1");

        // User edits, then another frame arrives: typed text survives.
        state.handle_key(key(KeyCode::Char('!')));
        state.apply_update(board);
        assert_eq!(state.edit_title, "Post 1!");

        let signal = state.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            signal,
            Some(UiSignal::SubmitEdit { title, .. }) if title == "Post 1!"
        ));
    }

    #[test]
    fn quit_only_from_the_list() {
        let mut state = TuiState::new();
        state.apply_update(board_with_rows(vec![row("1")]));

        state.handle_key(key(KeyCode::Char('n')));
        assert_eq!(state.focus, Focus::Create(CreateField::Title));
        // Esc in the create form returns to the list without quitting.
        assert!(state.handle_key(key(KeyCode::Esc)).is_none());
        assert_eq!(state.focus, Focus::List);

        assert!(matches!(
            state.handle_key(key(KeyCode::Char('q'))),
            Some(UiSignal::Quit)
        ));
    }

    #[test]
    fn confirm_modal_takes_focus_and_answers() {
        let mut state = TuiState::new();
        let mut board = board_with_rows(vec![row("1")]);
        board.confirm_delete = Some(crate::presentation::view_models::ConfirmDeleteViewModel {
            id: "1".to_string(),
            title: "Post 1".to_string(),
        });
        state.apply_update(board);

        assert_eq!(state.focus, Focus::Confirm);
        assert!(matches!(
            state.handle_key(key(KeyCode::Char('y'))),
            Some(UiSignal::Control(Control::ConfirmDelete))
        ));
    }
}
