// Chunk: docs/chunks/flat_buffer_engine - Smart Home/End over form-field text buffers

//! Smart Home/End for `<input>` and `<textarea>`.
//!
//! A form field exposes its whole value plus integer selection offsets, so the
//! target of a press can be computed up front:
//!
//! - Home moves to the start of the current line. If the caret is already
//!   there, it moves to the start of the previous line (no-op on line 0).
//! - End moves to the end of the current line. If the caret is already there,
//!   it moves to the end of the next line (no-op on the last line).
//!
//! With shift held the opposite end of the selection stays fixed as the
//! anchor. Planning is pure ([`plan_move`]); [`smart_move`] reads the field,
//! plans, writes the new range back only when the plan moved something, and
//! then checks that the field actually took it.

use thiserror::Error;

use crate::line_index::LineIndex;
use crate::types::{Direction, MovementRequest, SelectionDirection, SelectionSnapshot};

/// Failure reported by a field when reading or writing its selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field type has no selection API (e.g. `<input type="number">`).
    #[error("field does not support selection ranges")]
    Unsupported,
    /// The host threw while applying the range.
    #[error("host rejected selection range: {0}")]
    Rejected(String),
    /// The host accepted the range but its selection did not change to it.
    #[error("field kept selection {start}..{end}")]
    Ignored { start: u32, end: u32 },
}

/// A form field with a flat text buffer and integer selection offsets.
///
/// Offsets are UTF-16 code units, as the DOM reports them.
pub trait TextField {
    /// The current value. `None` when the host reports no usable value; the
    /// engine treats that as an empty string.
    fn value(&self) -> Option<String>;

    /// `None` from both offset queries means the field has no selection API.
    fn selection_start(&self) -> Option<u32>;

    fn selection_end(&self) -> Option<u32>;

    /// Applies a new selection range with a direction hint.
    fn set_selection_range(
        &mut self,
        start: u32,
        end: u32,
        direction: SelectionDirection,
    ) -> Result<(), FieldError>;
}

/// A field's selection as read before a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub start: u32,
    pub end: u32,
}

impl FieldSelection {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// A collapsed selection at `offset`.
    pub fn caret(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    /// Reads the selection from a field.
    ///
    /// A missing start reads as 0 and a missing end falls back to the start.
    pub fn read<F: TextField + ?Sized>(field: &F) -> Self {
        let start = field.selection_start().unwrap_or(0);
        let end = field.selection_end().unwrap_or(start);
        Self::new(start, end)
    }

    pub fn snapshot(&self) -> SelectionSnapshot<()> {
        SelectionSnapshot::flat(self.start, self.end)
    }
}

/// The range [`plan_move`] decided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedSelection {
    pub start: u32,
    pub end: u32,
    pub direction: SelectionDirection,
}

impl PlannedSelection {
    /// A collapsed caret at `offset`.
    pub fn caret(offset: u32) -> Self {
        Self {
            start: offset,
            end: offset,
            direction: SelectionDirection::None,
        }
    }

    /// A range from a fixed `anchor` to a moving `focus`, in document order.
    pub fn span(anchor: u32, focus: u32) -> Self {
        let direction = if focus < anchor {
            SelectionDirection::Backward
        } else {
            SelectionDirection::Forward
        };
        Self {
            start: anchor.min(focus),
            end: anchor.max(focus),
            direction,
        }
    }

    pub fn snapshot(&self) -> SelectionSnapshot<()> {
        SelectionSnapshot::flat(self.start, self.end)
    }
}

/// Plans the selection after one Home/End press.
///
/// Returns `None` when the press should be a no-op: Home already at the start
/// of the first line, or End already at the end of the last line.
pub fn plan_move(
    text: &str,
    selection: FieldSelection,
    request: MovementRequest,
) -> Option<PlannedSelection> {
    let index = LineIndex::build(text);
    let len = index.len();
    let start = selection.start.min(len);
    let end = selection.end.min(len);

    // The moving end: the side being extended, or the caret itself.
    let moving = match (request.extend, request.direction) {
        (true, Direction::End) => end,
        _ => start,
    };

    let target = match request.direction {
        Direction::Start => {
            let line_start = index.start_of_line_at(moving);
            if moving != line_start {
                line_start
            } else if line_start == 0 {
                return None;
            } else {
                // line_start - 1 is the newline ending the previous line
                index.start_of_line_at(line_start - 1)
            }
        }
        Direction::End => {
            let line_end = index.end_of_line_at(moving);
            if moving != line_end {
                line_end
            } else if line_end >= len {
                return None;
            } else {
                index.end_of_line_at(line_end + 1)
            }
        }
    };

    if !request.extend {
        return Some(PlannedSelection::caret(target));
    }

    let anchor = match request.direction {
        Direction::Start => end,
        Direction::End => start,
    };
    Some(PlannedSelection::span(anchor, target))
}

/// Performs one smart Home/End press on `field`.
///
/// Returns the applied range, or `None` if the press was a no-op and the
/// field was left untouched.
///
/// Fails with [`FieldError::Unsupported`] before planning when the field
/// reports neither offset, and with [`FieldError::Ignored`] when the write
/// went through but the field's selection did not follow it.
pub fn smart_move<F: TextField + ?Sized>(
    field: &mut F,
    request: MovementRequest,
) -> Result<Option<PlannedSelection>, FieldError> {
    if field.selection_start().is_none() && field.selection_end().is_none() {
        return Err(FieldError::Unsupported);
    }
    let text = field.value().unwrap_or_default();
    let selection = FieldSelection::read(field);

    let Some(planned) = plan_move(&text, selection, request) else {
        return Ok(None);
    };

    field.set_selection_range(planned.start, planned.end, planned.direction)?;

    let applied = FieldSelection::read(field).snapshot();
    if applied != planned.snapshot() {
        return Err(FieldError::Ignored {
            start: applied.anchor.offset(),
            end: applied.focus.offset(),
        });
    }
    Ok(Some(planned))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> MovementRequest {
        MovementRequest::home()
    }

    fn end() -> MovementRequest {
        MovementRequest::end()
    }

    // ==================== Home ====================

    #[test]
    fn test_home_moves_to_line_start() {
        let planned = plan_move("hello", FieldSelection::caret(2), home());
        assert_eq!(planned, Some(PlannedSelection::caret(0)));
    }

    #[test]
    fn test_home_at_buffer_start_is_noop() {
        assert_eq!(plan_move("ab\ncd\nef", FieldSelection::caret(0), home()), None);
    }

    #[test]
    fn test_home_at_line_start_moves_to_previous_line_start() {
        let planned = plan_move("ab\ncd\nef", FieldSelection::caret(3), home());
        assert_eq!(planned, Some(PlannedSelection::caret(0)));

        let planned = plan_move("ab\ncd\nef", FieldSelection::caret(6), home());
        assert_eq!(planned, Some(PlannedSelection::caret(3)));
    }

    #[test]
    fn test_home_into_empty_previous_line() {
        let planned = plan_move("ab\n\ncd", FieldSelection::caret(4), home());
        assert_eq!(planned, Some(PlannedSelection::caret(3)));
    }

    #[test]
    fn test_home_from_second_line_after_leading_newline() {
        let planned = plan_move("\nabc", FieldSelection::caret(1), home());
        assert_eq!(planned, Some(PlannedSelection::caret(0)));
    }

    #[test]
    fn test_home_from_newline_position() {
        // Offset 2 is the '\n' ending "ab", which still belongs to line 0
        let planned = plan_move("ab\ncd", FieldSelection::caret(2), home());
        assert_eq!(planned, Some(PlannedSelection::caret(0)));
    }

    // ==================== End ====================

    #[test]
    fn test_end_moves_to_line_end() {
        let planned = plan_move("hello", FieldSelection::caret(2), end());
        assert_eq!(planned, Some(PlannedSelection::caret(5)));
    }

    #[test]
    fn test_end_at_buffer_end_is_noop() {
        assert_eq!(plan_move("hello", FieldSelection::caret(5), end()), None);
    }

    #[test]
    fn test_end_at_line_end_moves_to_next_line_end() {
        let planned = plan_move("ab\ncd\nef", FieldSelection::caret(5), end());
        assert_eq!(planned, Some(PlannedSelection::caret(8)));

        let planned = plan_move("ab\ncd\nef", FieldSelection::caret(2), end());
        assert_eq!(planned, Some(PlannedSelection::caret(5)));
    }

    #[test]
    fn test_end_into_trailing_empty_line() {
        let planned = plan_move("ab\n", FieldSelection::caret(2), end());
        assert_eq!(planned, Some(PlannedSelection::caret(3)));
    }

    // ==================== Empty / out of range ====================

    #[test]
    fn test_empty_buffer_is_noop_both_ways() {
        assert_eq!(plan_move("", FieldSelection::caret(0), home()), None);
        assert_eq!(plan_move("", FieldSelection::caret(0), end()), None);
    }

    #[test]
    fn test_offsets_past_end_are_clamped() {
        let planned = plan_move("abc", FieldSelection::caret(40), home());
        assert_eq!(planned, Some(PlannedSelection::caret(0)));
        assert_eq!(plan_move("abc", FieldSelection::caret(40), end()), None);
    }

    // ==================== Extend ====================

    #[test]
    fn test_shift_end_from_caret_extends_forward() {
        let planned = plan_move("abcdef", FieldSelection::caret(2), end().extending());
        assert_eq!(
            planned,
            Some(PlannedSelection {
                start: 2,
                end: 6,
                direction: SelectionDirection::Forward,
            })
        );
    }

    #[test]
    fn test_shift_home_from_caret_extends_backward() {
        let planned = plan_move("abcdef", FieldSelection::caret(4), home().extending());
        assert_eq!(
            planned,
            Some(PlannedSelection {
                start: 0,
                end: 4,
                direction: SelectionDirection::Backward,
            })
        );
    }

    #[test]
    fn test_shift_home_keeps_selection_end_as_anchor() {
        let planned = plan_move("ab\ncdef", FieldSelection::new(4, 6), home().extending());
        assert_eq!(
            planned,
            Some(PlannedSelection {
                start: 3,
                end: 6,
                direction: SelectionDirection::Backward,
            })
        );
    }

    #[test]
    fn test_shift_end_moves_selection_end() {
        // Selection end already at line end: advances to next line end
        let planned = plan_move("ab\ncd", FieldSelection::new(1, 2), end().extending());
        assert_eq!(
            planned,
            Some(PlannedSelection {
                start: 1,
                end: 5,
                direction: SelectionDirection::Forward,
            })
        );
    }

    #[test]
    fn test_shift_home_at_first_line_start_is_noop() {
        assert_eq!(
            plan_move("abc", FieldSelection::new(0, 2), home().extending()),
            None
        );
    }

    // ==================== Snapshots ====================

    #[test]
    fn test_planned_snapshot_matches_written_range() {
        let planned = PlannedSelection::span(6, 3);
        assert_eq!(planned.snapshot(), FieldSelection::new(3, 6).snapshot());
        assert_ne!(planned.snapshot(), FieldSelection::caret(3).snapshot());
    }

    // ==================== Span ====================

    #[test]
    fn test_span_orders_endpoints() {
        let span = PlannedSelection::span(6, 3);
        assert_eq!((span.start, span.end), (3, 6));
        assert_eq!(span.direction, SelectionDirection::Backward);

        let span = PlannedSelection::span(3, 3);
        assert_eq!(span.direction, SelectionDirection::Forward);
    }
}
