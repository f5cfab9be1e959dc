// Chunk: docs/chunks/structured_selection_engine - Smart Home/End over rich editable regions

//! Boundary probing for selections that only support relative steps.
//!
//! Without an offset query there is no way to ask "is the caret already at the
//! line start?". Instead [`probe_step`] takes the step, compares snapshots from
//! before and after, and only if nothing moved runs a compound fallback (one
//! visual line, then the line boundary again). Failed steps are not rolled
//! back; whatever partial movement happened stays.

use smart_home_end_buffer::MovementRequest;

use crate::host::{Alter, Granularity, SelectionError, SelectionHost, Step, StepDirection};

/// What [`probe_step`] did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// No range to act on; nothing was called.
    NoRange,
    /// The probing step itself was rejected; selection unchanged.
    Rejected(SelectionError),
    /// The probing step moved the selection.
    Moved,
    /// The probing step was a no-op, so the fallback steps ran.
    ///
    /// `completed` counts fallback steps that succeeded before `error`.
    Compounded {
        completed: usize,
        error: Option<SelectionError>,
    },
}

impl ProbeOutcome {
    /// True if the host accepted at least one step that was meant to move.
    pub fn took_effect(&self) -> bool {
        match self {
            ProbeOutcome::Moved => true,
            ProbeOutcome::Compounded { completed, .. } => *completed > 0,
            ProbeOutcome::NoRange | ProbeOutcome::Rejected(_) => false,
        }
    }
}

/// Applies `probe`; if the selection did not move, applies `fallback` in order.
///
/// A fallback step that fails stops the sequence.
pub fn probe_step<H: SelectionHost + ?Sized>(
    host: &mut H,
    probe: Step,
    fallback: &[Step],
) -> ProbeOutcome {
    if host.range_count() == 0 {
        return ProbeOutcome::NoRange;
    }

    let before = host.snapshot();
    if let Err(err) = host.modify(probe) {
        return ProbeOutcome::Rejected(err);
    }
    let after = host.snapshot();

    if !before.same_caret(&after) {
        return ProbeOutcome::Moved;
    }

    let mut completed = 0;
    for step in fallback {
        if let Err(err) = host.modify(*step) {
            return ProbeOutcome::Compounded {
                completed,
                error: Some(err),
            };
        }
        completed += 1;
    }
    ProbeOutcome::Compounded {
        completed,
        error: None,
    }
}

/// Performs one smart Home/End press on a structured selection.
///
/// Home steps backward and End forward. Shift (`request.extend`) extends
/// instead of moving, leaving the anchor in place.
pub fn smart_move<H: SelectionHost + ?Sized>(
    host: &mut H,
    request: MovementRequest,
) -> ProbeOutcome {
    let alter = Alter::from_extend(request.extend);
    let direction = StepDirection::from(request.direction);

    let boundary = Step::new(alter, direction, Granularity::LineBoundary);
    let line = Step::new(alter, direction, Granularity::Line);

    probe_step(host, boundary, &[line, boundary])
}
