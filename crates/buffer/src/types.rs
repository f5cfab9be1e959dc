// Chunk: docs/chunks/caret_model - Shared caret and selection types

/// Which line edge a Home/End press targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Home: toward the start of the line
    Start,
    /// End: toward the end of the line
    End,
}

/// A single Home/End press, resolved from a key event.
///
/// Constructed per event and consumed synchronously; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRequest {
    pub direction: Direction,
    /// Shift held: extend the selection instead of collapsing it.
    pub extend: bool,
}

impl MovementRequest {
    pub fn new(direction: Direction, extend: bool) -> Self {
        Self { direction, extend }
    }

    pub fn home() -> Self {
        Self::new(Direction::Start, false)
    }

    pub fn end() -> Self {
        Self::new(Direction::End, false)
    }

    /// The same request with shift held.
    pub fn extending(mut self) -> Self {
        self.extend = true;
        self
    }
}

/// Direction hint passed with `setSelectionRange`, so the host draws the
/// caret at the moving end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionDirection {
    Forward,
    Backward,
    #[default]
    None,
}

impl SelectionDirection {
    /// The DOM string for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionDirection::Forward => "forward",
            SelectionDirection::Backward => "backward",
            SelectionDirection::None => "none",
        }
    }
}

/// One end of a selection, in either of the two caret models.
///
/// Form fields address the caret as an integer offset into their value; rich
/// editable regions address it as a node plus an offset within that node.
/// `N` is the host's node handle and only needs identity comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Positionable<N> {
    FlatOffset(u32),
    NodePosition(N, u32),
}

impl<N: PartialEq> Positionable<N> {
    /// The offset component, regardless of model.
    pub fn offset(&self) -> u32 {
        match self {
            Positionable::FlatOffset(offset) => *offset,
            Positionable::NodePosition(_, offset) => *offset,
        }
    }

    /// True if a selection from `self` to `other` would be a bare caret.
    pub fn is_collapsed_with(&self, other: &Self) -> bool {
        self == other
    }
}

/// The anchor and focus of a selection at one instant.
///
/// Two snapshots are equal iff both anchor and focus match exactly (node
/// identity and offset). The collapsed flag is carried for callers but does
/// not take part in equality.
#[derive(Debug, Clone)]
pub struct SelectionSnapshot<N> {
    pub anchor: Positionable<N>,
    pub focus: Positionable<N>,
    pub collapsed: bool,
}

impl<N: PartialEq> SelectionSnapshot<N> {
    pub fn new(anchor: Positionable<N>, focus: Positionable<N>, collapsed: bool) -> Self {
        Self {
            anchor,
            focus,
            collapsed,
        }
    }

    /// Returns true if no selection end moved between `self` and `other`.
    pub fn same_caret(&self, other: &Self) -> bool {
        self.anchor == other.anchor && self.focus == other.focus
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

impl SelectionSnapshot<()> {
    /// Snapshot of a form field's `[start, end]` selection.
    pub fn flat(start: u32, end: u32) -> Self {
        let anchor = Positionable::FlatOffset(start);
        let focus = Positionable::FlatOffset(end);
        let collapsed = anchor.is_collapsed_with(&focus);
        Self {
            anchor,
            focus,
            collapsed,
        }
    }
}

impl<N: PartialEq> PartialEq for SelectionSnapshot<N> {
    fn eq(&self, other: &Self) -> bool {
        self.same_caret(other)
    }
}

impl<N: Eq> Eq for SelectionSnapshot<N> {}
