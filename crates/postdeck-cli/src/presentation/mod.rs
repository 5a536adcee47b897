//! Presentation layer for the CLI.
//!
//! Unidirectional flow, for both output styles:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(json)==> serde_json
//!                                                                        ==(plain)==> console views
//!
//! [ browse driver ] --> [ present_board ] --> [ BoardViewModel ] --> [ TuiRenderer thread ]
//! ```
//!
//! ViewModels carry raw data, not formatted strings: `--format json`
//! dumps the complete view model and is treated as an API, while plain
//! and TUI rendering decide layout at the edge.

pub mod console;
pub mod presenters;
pub mod tui;
pub mod view_models;

pub use console::{ConsoleDiagnostics, ConsoleRenderer, Render};
