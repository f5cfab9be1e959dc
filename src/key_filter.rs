// Chunk: docs/chunks/key_filter - Capturing keydown filter
//!
//! The single entry point for keydown events.
//!
//! The filter runs in the capturing phase so it sees Home/End before the page's
//! own handlers. It takes an event only when all of these hold:
//! - no earlier listener prevented it;
//! - no modifier other than shift is held;
//! - it is Home or End;
//! - the target or the focused element is editable.
//!
//! It then routes the press to the flat-buffer engine (form fields) or the
//! structured-selection engine (everything else). Engine failures are traced
//! and otherwise ignored. A missed jump is better than a wrong one.

use smart_home_end_buffer::{Direction, FieldError, MovementRequest};
use smart_home_end_input::{Key, KeyEvent};
use smart_home_end_selection::ProbeOutcome;
use tracing::{debug, trace};

use crate::document::Document;
use crate::editable::{is_editable, is_form_field_tag, EditableElement};
use crate::settings::Settings;

/// Result of offering an event to the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The filter took the event: the caller must prevent the default action
    /// and stop propagation.
    Yes,
    /// Not ours; let the event continue untouched.
    No,
}

/// Which engine an acting element is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    FormField,
    RichRegion,
}

impl Surface {
    pub fn of<E: EditableElement + ?Sized>(element: &E) -> Self {
        if is_form_field_tag(&element.tag_name()) {
            Surface::FormField
        } else {
            Surface::RichRegion
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyFilter {
    settings: Settings,
}

impl KeyFilter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Resolves the movement an event asks for, ignoring the target.
    ///
    /// `None` for events the filter never takes: already prevented, chorded
    /// with command/control/option, or not Home/End.
    pub fn movement_for(event: &KeyEvent) -> Option<MovementRequest> {
        if event.default_prevented || event.modifiers.has_secondary() {
            return None;
        }
        let direction = match event.key {
            Key::Home => Direction::Start,
            Key::End => Direction::End,
            Key::Other => return None,
        };
        Some(MovementRequest::new(direction, event.modifiers.shift))
    }

    /// Offers a keydown event to the filter.
    ///
    /// `target` is the event's original target, used when nothing has focus.
    pub fn on_key_down<D: Document>(
        &self,
        doc: &D,
        event: &KeyEvent,
        target: Option<&D::Element>,
    ) -> Handled {
        let Some(request) = Self::movement_for(event) else {
            return Handled::No;
        };

        let active = doc.active_element();
        let marker = self.settings.editable_marker.as_str();
        if !is_editable(target, marker) && !is_editable(active.as_ref(), marker) {
            trace!(?request, "Home/End outside an editable element");
            return Handled::No;
        }

        let Some(acting) = active.as_ref().or(target) else {
            return Handled::No;
        };

        let surface = Surface::of(acting);
        let enabled = match surface {
            Surface::FormField => self.settings.form_fields,
            Surface::RichRegion => self.settings.rich_regions,
        };
        if !enabled {
            trace!(?surface, "surface disabled; leaving native Home/End");
            return Handled::No;
        }

        match surface {
            Surface::FormField => self.move_in_field(doc, acting, request),
            Surface::RichRegion => self.move_in_selection(doc, request),
        }
        Handled::Yes
    }

    fn move_in_field<D: Document>(&self, doc: &D, element: &D::Element, request: MovementRequest) {
        let Some(mut field) = doc.form_field(element) else {
            debug!(tag = %element.tag_name(), "form field without selection API");
            return;
        };
        match smart_home_end_buffer::smart_move(&mut field, request) {
            Ok(Some(applied)) => trace!(?request, ?applied, "moved caret in form field"),
            Ok(None) => trace!(?request, "already at buffer edge"),
            Err(FieldError::Unsupported) => {
                debug!(tag = %element.tag_name(), "form field without selection API")
            }
            Err(err) => debug!(%err, "form field did not take selection"),
        }
    }

    fn move_in_selection<D: Document>(&self, doc: &D, request: MovementRequest) {
        let Some(mut selection) = doc.selection() else {
            debug!("no document selection");
            return;
        };
        match smart_home_end_selection::smart_move(&mut selection, request) {
            ProbeOutcome::NoRange => trace!("selection has no range"),
            ProbeOutcome::Rejected(err) => debug!(%err, "line boundary step rejected"),
            ProbeOutcome::Moved => trace!(?request, "moved to line boundary"),
            ProbeOutcome::Compounded { completed, error } => match error {
                Some(err) => debug!(completed, %err, "adjacent line step rejected"),
                None => trace!(?request, "moved to adjacent line boundary"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_home_end_input::Modifiers;

    fn event(key: Key, modifiers: Modifiers) -> KeyEvent {
        KeyEvent::new(key, modifiers)
    }

    #[test]
    fn test_plain_home_and_end() {
        assert_eq!(
            KeyFilter::movement_for(&event(Key::Home, Modifiers::default())),
            Some(MovementRequest::home())
        );
        assert_eq!(
            KeyFilter::movement_for(&event(Key::End, Modifiers::default())),
            Some(MovementRequest::end())
        );
    }

    #[test]
    fn test_shift_extends() {
        assert_eq!(
            KeyFilter::movement_for(&event(Key::End, Modifiers::shift())),
            Some(MovementRequest::end().extending())
        );
    }

    #[test]
    fn test_chords_are_ignored() {
        let mods = Modifiers {
            control: true,
            ..Default::default()
        };
        assert_eq!(KeyFilter::movement_for(&event(Key::Home, mods)), None);
    }

    #[test]
    fn test_prevented_events_are_ignored() {
        let prevented = event(Key::Home, Modifiers::default()).prevented();
        assert_eq!(KeyFilter::movement_for(&prevented), None);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(
            KeyFilter::movement_for(&event(Key::Other, Modifiers::default())),
            None
        );
    }
}
