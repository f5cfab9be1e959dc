// Chunk: docs/chunks/structured_selection_engine - Smart Home/End over rich editable regions

//! smart-home-end-selection: Home/End movement for rich editable regions.
//!
//! Content in a `contenteditable` region is a tree of nodes and the browser
//! offers only directional steps over it (`Selection.modify`). This crate
//! expresses that surface as the [`SelectionHost`] trait and implements the
//! two-tier Home/End on top of it by probing: step to the line boundary, and
//! if that did not move anything, step one line and to the boundary again.
//!
//! # Example
//!
//! ```ignore
//! use smart_home_end_buffer::MovementRequest;
//! use smart_home_end_selection::{smart_move, ProbeOutcome};
//!
//! // `selection` is any SelectionHost, e.g. the page's window.getSelection()
//! match smart_move(&mut selection, MovementRequest::home()) {
//!     ProbeOutcome::Moved => { /* was mid-line, now at its start */ }
//!     ProbeOutcome::Compounded { .. } => { /* was at the start, went up a line */ }
//!     _ => {}
//! }
//! ```

mod engine;
mod host;

pub use engine::{probe_step, smart_move, ProbeOutcome};
pub use host::{Alter, Granularity, SelectionError, SelectionHost, Step, StepDirection};
