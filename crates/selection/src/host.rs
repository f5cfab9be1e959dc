// Chunk: docs/chunks/structured_selection_engine - Selection host capability

//! The capability surface of a live, host-owned selection.
//!
//! Rich editable regions expose no line offsets. All the engine can do is read
//! the anchor/focus node+offset pairs and ask the host to step the selection in
//! a direction by some granularity (`Selection.modify` in the DOM). The trait
//! keeps the engine off ambient global state so it can run against a mock.

use smart_home_end_buffer::{Direction, Positionable, SelectionSnapshot};
use thiserror::Error;

/// Failure reported by a [`SelectionHost`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The host refused the step (e.g. unsupported selection state).
    #[error("selection.modify rejected: {0}")]
    Rejected(String),
}

/// Whether a step moves the whole selection or only its focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alter {
    Move,
    Extend,
}

impl Alter {
    pub fn from_extend(extend: bool) -> Self {
        if extend {
            Alter::Extend
        } else {
            Alter::Move
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Alter::Move => "move",
            Alter::Extend => "extend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Backward,
    Forward,
}

impl StepDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepDirection::Backward => "backward",
            StepDirection::Forward => "forward",
        }
    }
}

impl From<Direction> for StepDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Start => StepDirection::Backward,
            Direction::End => StepDirection::Forward,
        }
    }
}

/// Step size for [`SelectionHost::modify`]. Only the two the engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// To the start/end of the current visual line
    LineBoundary,
    /// One visual line up/down
    Line,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::LineBoundary => "lineboundary",
            Granularity::Line => "line",
        }
    }
}

/// One call to [`SelectionHost::modify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub alter: Alter,
    pub direction: StepDirection,
    pub granularity: Granularity,
}

impl Step {
    pub fn new(alter: Alter, direction: StepDirection, granularity: Granularity) -> Self {
        Self {
            alter,
            direction,
            granularity,
        }
    }
}

/// A live selection over a tree of content nodes.
pub trait SelectionHost {
    /// Handle to a content node; compared by identity.
    type Node: PartialEq + Clone;

    fn range_count(&self) -> u32;

    fn anchor_node(&self) -> Option<Self::Node>;

    fn anchor_offset(&self) -> u32;

    fn focus_node(&self) -> Option<Self::Node>;

    fn focus_offset(&self) -> u32;

    fn is_collapsed(&self) -> bool;

    /// Steps the selection. May fail when the host cannot apply the step.
    fn modify(&mut self, step: Step) -> Result<(), SelectionError>;

    /// Captures the anchor and focus as they are right now.
    fn snapshot(&self) -> SelectionSnapshot<Option<Self::Node>> {
        SelectionSnapshot::new(
            Positionable::NodePosition(self.anchor_node(), self.anchor_offset()),
            Positionable::NodePosition(self.focus_node(), self.focus_offset()),
            self.is_collapsed(),
        )
    }
}

impl<H: SelectionHost + ?Sized> SelectionHost for &mut H {
    type Node = H::Node;

    fn range_count(&self) -> u32 {
        (**self).range_count()
    }

    fn anchor_node(&self) -> Option<Self::Node> {
        (**self).anchor_node()
    }

    fn anchor_offset(&self) -> u32 {
        (**self).anchor_offset()
    }

    fn focus_node(&self) -> Option<Self::Node> {
        (**self).focus_node()
    }

    fn focus_offset(&self) -> u32 {
        (**self).focus_offset()
    }

    fn is_collapsed(&self) -> bool {
        (**self).is_collapsed()
    }

    fn modify(&mut self, step: Step) -> Result<(), SelectionError> {
        (**self).modify(step)
    }
}
