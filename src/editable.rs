// Chunk: docs/chunks/key_filter - Editability classifier

//! Decides whether an element takes text input.
//!
//! Only editable targets get the smart Home/End treatment; everywhere else the
//! browser's own Home/End (scroll to top/bottom) is left alone.

/// Tags of elements that expose a flat text buffer with selection offsets.
pub const FORM_FIELD_TAGS: [&str; 2] = ["input", "textarea"];

/// Marker selector for explicitly editable regions.
pub const DEFAULT_EDITABLE_MARKER: &str = r#"[contenteditable="true"]"#;

/// The element queries the classifier needs.
pub trait EditableElement {
    /// Tag name in any case (`INPUT`, `div`, ...).
    fn tag_name(&self) -> String;

    /// The element's own `isContentEditable` flag.
    fn is_content_editable(&self) -> bool;

    /// Whether this element or an ancestor matches `marker`.
    ///
    /// `None` when the element cannot answer ancestor queries at all.
    fn closest_marked(&self, marker: &str) -> Option<bool>;
}

/// Returns true if `tag` names a form field.
pub fn is_form_field_tag(tag: &str) -> bool {
    FORM_FIELD_TAGS
        .iter()
        .any(|candidate| tag.eq_ignore_ascii_case(candidate))
}

/// Returns true if `element` accepts text input.
///
/// Rules, in order: no element is not editable; form fields are; an element
/// flagged content-editable is; an element inside a region matching `marker`
/// is.
pub fn is_editable<E: EditableElement + ?Sized>(element: Option<&E>, marker: &str) -> bool {
    let Some(element) = element else {
        return false;
    };
    if is_form_field_tag(&element.tag_name()) {
        return true;
    }
    if element.is_content_editable() {
        return true;
    }
    element.closest_marked(marker).unwrap_or(false)
}
