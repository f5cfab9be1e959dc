// Chunk: docs/chunks/key_filter - Capturing keydown filter + wasm install surface

//! smart-home-end: smarter Home/End for web pages.
//!
//! Replaces the browser's Home/End in editable elements with line-aware
//! movement:
//! - First press goes to the start/end of the current line
//! - A press already at that boundary goes to the previous line's start or
//!   the next line's end
//! - Shift extends the selection instead of collapsing it
//!
//! # Overview
//!
//! - [`editable`]: decides whether an element takes text input
//! - [`key_filter`]: the keydown entry point that routes presses to the
//!   flat-buffer engine (`<input>`, `<textarea>`) or the structured-selection
//!   engine (`contenteditable`)
//! - [`settings`]: JSON settings and the userscript metadata header
//! - [`logging`]: tracing setup, silent by default
//!
//! The browser side (`install`, compiled only for `wasm32`) implements
//! [`Document`] over the live page and registers the capturing listener.
//!
//! # Example
//!
//! ```ignore
//! // In the page, once:
//! smart_home_end::install()?;
//! ```

pub mod document;
pub mod editable;
pub mod key_filter;
pub mod logging;
pub mod settings;
#[cfg(target_arch = "wasm32")]
mod web;

pub use document::Document;
pub use editable::{is_editable, is_form_field_tag, EditableElement, DEFAULT_EDITABLE_MARKER};
pub use key_filter::{Handled, KeyFilter, Surface};
pub use settings::{ConfigError, Settings, UserscriptMeta};
#[cfg(target_arch = "wasm32")]
pub use web::{install, install_with, install_with_config};

pub use smart_home_end_buffer as buffer;
pub use smart_home_end_input as input;
pub use smart_home_end_selection as selection;
