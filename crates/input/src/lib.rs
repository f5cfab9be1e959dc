// Chunk: docs/chunks/dom_key_decoding - Shared input types crate
//!
//! Keydown event types.
//!
//! These types abstract over the browser's `KeyboardEvent` and provide a
//! Rust-native interface for the key filter. Browsers have reported the same
//! physical key in several ways over the years (`key`, `code`, and the legacy
//! numeric `keyCode`/`which`), so decoding accepts any of them.

/// Legacy numeric code for the Home key.
pub const KEY_CODE_HOME: u32 = 36;

/// Legacy numeric code for the End key.
pub const KEY_CODE_END: u32 = 35;

/// A keydown event, reduced to the fields the key filter reads.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
    /// True when an earlier listener already called `preventDefault`
    pub default_prevented: bool,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            default_prevented: false,
        }
    }

    /// Decodes a KeyEvent from the raw DOM fields.
    pub fn from_dom(raw: &RawKey<'_>, modifiers: Modifiers, default_prevented: bool) -> Self {
        Self {
            key: Key::from_dom(raw),
            modifiers,
            default_prevented,
        }
    }

    /// Marks the event as already handled by an earlier listener.
    pub fn prevented(mut self) -> Self {
        self.default_prevented = true;
        self
    }
}

/// The raw key identification fields of a DOM `KeyboardEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawKey<'a> {
    /// Symbolic key name (`KeyboardEvent.key`)
    pub key: &'a str,
    /// Physical key code (`KeyboardEvent.code`)
    pub code: &'a str,
    /// Legacy numeric code (`KeyboardEvent.keyCode`)
    pub key_code: u32,
    /// Legacy numeric code (`KeyboardEvent.which`)
    pub which: u32,
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Command key (Cmd/⌘, `metaKey`)
    pub command: bool,
    /// Option key (Alt/⌥)
    pub option: bool,
    /// Control key (Ctrl/⌃)
    pub control: bool,
}

impl Modifiers {
    /// Modifiers with only shift held.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    /// Returns true if command, option, or control is held.
    ///
    /// Only plain and shift-modified presses are intercepted; anything else
    /// belongs to the page or the browser.
    pub fn has_secondary(&self) -> bool {
        self.command || self.option || self.control
    }
}

/// Keys the filter distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Home key
    Home,
    /// End key
    End,
    /// Any other key
    Other,
}

impl Key {
    /// Decodes the key from any of the DOM encodings.
    ///
    /// Home wins if an event somehow matches both.
    pub fn from_dom(raw: &RawKey<'_>) -> Self {
        if is_home(raw) {
            Key::Home
        } else if is_end(raw) {
            Key::End
        } else {
            Key::Other
        }
    }
}

fn is_home(raw: &RawKey<'_>) -> bool {
    raw.key == "Home"
        || raw.code == "Home"
        || raw.key_code == KEY_CODE_HOME
        || raw.which == KEY_CODE_HOME
}

fn is_end(raw: &RawKey<'_>) -> bool {
    raw.key == "End"
        || raw.code == "End"
        || raw.key_code == KEY_CODE_END
        || raw.which == KEY_CODE_END
}
