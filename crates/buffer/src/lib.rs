// Chunk: docs/chunks/flat_buffer_engine - Smart Home/End over form-field text buffers
// Chunk: docs/chunks/caret_model - Shared caret and selection types

//! smart-home-end-buffer: flat-buffer Home/End movement and the caret model
//! shared by both movement engines.
//!
//! # Overview
//!
//! The main entry point is [`smart_move`], which drives any [`TextField`]:
//! - First press moves to the current line's start/end
//! - A press already at that boundary moves to the previous line's start or
//!   the next line's end
//! - Shift extends the selection, keeping the opposite end as anchor
//!
//! # Example
//!
//! ```
//! use smart_home_end_buffer::{plan_move, FieldSelection, MovementRequest, PlannedSelection};
//!
//! let text = "ab\ncd\nef";
//!
//! // Caret at the start of "cd": Home jumps to the start of "ab"
//! let planned = plan_move(text, FieldSelection::caret(3), MovementRequest::home());
//! assert_eq!(planned, Some(PlannedSelection::caret(0)));
//!
//! // Caret at the end of "cd": End jumps to the end of "ef"
//! let planned = plan_move(text, FieldSelection::caret(5), MovementRequest::end());
//! assert_eq!(planned, Some(PlannedSelection::caret(8)));
//! ```
//!
//! # Caret Model
//!
//! [`Positionable`] and [`SelectionSnapshot`] describe a selection in either
//! the flat (integer offset) or structured (node + offset) model. The
//! structured-selection engine compares snapshots to detect whether a step
//! moved the caret at all.

mod line_index;
mod text_field;
mod types;

pub use line_index::LineIndex;
pub use text_field::{
    plan_move, smart_move, FieldError, FieldSelection, PlannedSelection, TextField,
};
pub use types::{Direction, MovementRequest, Positionable, SelectionDirection, SelectionSnapshot};
