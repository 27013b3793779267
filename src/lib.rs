//! 2060 (workspace facade crate).
//!
//! Re-exports the crates under `crates/` as `tui_2060::{core,engine,input,session,term,types}`
//! so the binary, integration tests and benches share one import root.

pub use tui_2060_core as core;
pub use tui_2060_engine as engine;
pub use tui_2060_input as input;
pub use tui_2060_session as session;
pub use tui_2060_term as term;
pub use tui_2060_types as types;
