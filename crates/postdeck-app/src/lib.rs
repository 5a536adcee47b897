//! View-state machine for the post browser.
//!
//! The rendered surface (a terminal UI, or a test driver) is the only
//! cache: every mutation ends in a re-fetch, and [`BoardState`] is rebuilt
//! from whatever the server returned. State transitions are split three
//! ways:
//!
//! - [`Action`]: something the user did, named by intent. The
//!   [`action_for`] table maps surface controls to actions, decoupling
//!   invocation from how the surface is drawn.
//! - [`Effect`]: a network request the state machine wants issued. The
//!   driver runs effects via [`run_effect`] without blocking the surface.
//! - [`Outcome`]: a completed request fed back into the state. List and
//!   detail outcomes carry the generation captured at issue time; a stale
//!   generation is discarded, so a superseded response can never overwrite
//!   a newer one.
//!
//! Failures never surface in the rendered view. Every outcome reports to
//! a [`Diagnostics`] sink at its own boundary and the previous view
//! persists, stale or empty.

pub mod actions;
pub mod board;
pub mod diag;
pub mod effects;

pub use actions::{Action, Control, action_for};
pub use board::{BoardState, DETAIL_PLACEHOLDER, DetailPane, EditForm, PostRow};
pub use diag::{BufferDiagnostics, Diagnostics};
pub use effects::{Effect, Outcome, run_effect};
