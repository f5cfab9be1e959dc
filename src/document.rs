// Chunk: docs/chunks/key_filter - Host document capability

//! The host document as seen by the key filter.
//!
//! The browser implementation lives in `web`; tests supply their own. Handles
//! returned here are cheap references into host-owned state, so mutating a
//! field or selection through them mutates the live page.

use smart_home_end_buffer::TextField;
use smart_home_end_selection::SelectionHost;

use crate::editable::EditableElement;

pub trait Document {
    type Element: EditableElement;
    type Field: TextField;
    type Selection: SelectionHost;

    /// The focused element, if any.
    fn active_element(&self) -> Option<Self::Element>;

    /// The element's flat-buffer view, if it is a form field with a
    /// selection API.
    fn form_field(&self, element: &Self::Element) -> Option<Self::Field>;

    /// The document's live selection, if it has one.
    fn selection(&self) -> Option<Self::Selection>;
}
