//! Test harness for the postdeck workspace.
//!
//! [`StubPostsServer`] is an in-process stand-in for the external posts
//! API (json-server semantics: integer auto-increment ids, `{}` as the
//! delete confirmation, 404 for unknown ids). [`TestFixture`] wires an
//! isolated config dir and the stub's address into CLI invocations.

pub mod fixture;
pub mod stub;

pub use fixture::TestFixture;
pub use stub::{StubPostsServer, seed_posts};
