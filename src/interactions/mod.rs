//! Central router for component interactions.
//!
//! `handler.rs` hands every component interaction to `router::handle`, which
//! parses the custom_id into an `Action` and dispatches to the weapon draw
//! handlers. Identifiers the bot does not own are ignored.

pub mod action;
pub mod ids;
pub mod router;
pub mod util;
