// NOTE: postdeck Architecture Rationale
//
// Why re-fetch after every mutation (not patch local state)?
// - The server owns the collection; the client renders transient copies
// - No optimistic updates means no rollback paths on failure
// - Trade-off: one extra request per mutation buys a view that can never
//   drift from server state
//
// Why an explicit view-state machine (postdeck-app) under the UI?
// - The interactive surface and the test suite drive the same
//   dispatch/absorb transitions
// - Generation-tagged fetches close the stale-response window that an
//   implicit query-the-screen design leaves open

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, OutputFormat, PostCommand};
pub use commands::run;
