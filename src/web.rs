// Chunk: docs/chunks/key_filter - wasm install surface
//!
//! Browser bindings: the live page behind [`Document`], and the one-time
//! `keydown` subscription.
//!
//! The userscript loads the wasm module and calls `install()` (or
//! `install_with_config(json)`) once. The listener is registered in the
//! capturing phase on `window` and kept for the life of the page.

use std::cell::Cell;

use smart_home_end_buffer::{FieldError, SelectionDirection, TextField};
use smart_home_end_input::{KeyEvent, Modifiers, RawKey};
use smart_home_end_selection::{SelectionError, SelectionHost, Step};
use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, Node, Selection,
    Window,
};

use crate::document::Document;
use crate::editable::EditableElement;
use crate::key_filter::{Handled, KeyFilter};
use crate::logging;
use crate::settings::Settings;

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Installs the filter with default settings.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    install_with(Settings::default())
}

/// Installs the filter with settings given as JSON.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(json: &str) -> Result<(), JsValue> {
    let settings = Settings::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    install_with(settings)
}

/// Registers the capturing `keydown` listener. Later calls are no-ops.
pub fn install_with(settings: Settings) -> Result<(), JsValue> {
    if INSTALLED.with(|installed| installed.replace(true)) {
        debug!("keydown filter already installed");
        return Ok(());
    }
    logging::init(&settings);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let page = WebDocument {
        window: window.clone(),
        document,
    };
    let filter = KeyFilter::new(settings);

    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key_event = decode(&event);
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(WebElement);

        if filter.on_key_down(&page, &key_event, target.as_ref()) == Handled::Yes {
            event.prevent_default();
            event.stop_immediate_propagation();
        }
    });

    window.add_event_listener_with_callback_and_bool(
        "keydown",
        on_key_down.as_ref().unchecked_ref(),
        true,
    )?;
    // Held for the page's lifetime.
    on_key_down.forget();

    info!("smart Home/End installed");
    Ok(())
}

fn decode(event: &KeyboardEvent) -> KeyEvent {
    let key = event.key();
    let code = event.code();
    let raw = RawKey {
        key: &key,
        code: &code,
        key_code: event.key_code(),
        which: event.which(),
    };
    let modifiers = Modifiers {
        shift: event.shift_key(),
        command: event.meta_key(),
        option: event.alt_key(),
        control: event.ctrl_key(),
    };
    KeyEvent::from_dom(&raw, modifiers, event.default_prevented())
}

struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl Document for WebDocument {
    type Element = WebElement;
    type Field = WebField;
    type Selection = WebSelection;

    fn active_element(&self) -> Option<WebElement> {
        self.document.active_element().map(WebElement)
    }

    fn form_field(&self, element: &WebElement) -> Option<WebField> {
        let element = element.0.clone();
        match element.dyn_into::<HtmlInputElement>() {
            // type=number, email, ... throw from selectionStart
            Ok(input) if input.selection_start().is_err() => None,
            Ok(input) => Some(WebField::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(WebField::TextArea),
        }
    }

    fn selection(&self) -> Option<WebSelection> {
        self.window.get_selection().ok().flatten().map(WebSelection)
    }
}

struct WebElement(Element);

impl EditableElement for WebElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn is_content_editable(&self) -> bool {
        self.0
            .dyn_ref::<HtmlElement>()
            .is_some_and(|element| element.is_content_editable())
    }

    fn closest_marked(&self, marker: &str) -> Option<bool> {
        self.0.closest(marker).ok().map(|found| found.is_some())
    }
}

enum WebField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField for WebField {
    fn value(&self) -> Option<String> {
        Some(match self {
            WebField::Input(input) => input.value(),
            WebField::TextArea(area) => area.value(),
        })
    }

    // Inputs without a selection API (type=number, email, ...) throw here.
    fn selection_start(&self) -> Option<u32> {
        match self {
            WebField::Input(input) => input.selection_start().ok().flatten(),
            WebField::TextArea(area) => area.selection_start().ok().flatten(),
        }
    }

    fn selection_end(&self) -> Option<u32> {
        match self {
            WebField::Input(input) => input.selection_end().ok().flatten(),
            WebField::TextArea(area) => area.selection_end().ok().flatten(),
        }
    }

    fn set_selection_range(
        &mut self,
        start: u32,
        end: u32,
        direction: SelectionDirection,
    ) -> Result<(), FieldError> {
        let result = match self {
            WebField::Input(input) => {
                input.set_selection_range_with_direction(start, end, direction.as_str())
            }
            WebField::TextArea(area) => {
                area.set_selection_range_with_direction(start, end, direction.as_str())
            }
        };
        result.map_err(|err| FieldError::Rejected(format!("{:?}", err)))
    }
}

struct WebSelection(Selection);

impl SelectionHost for WebSelection {
    type Node = Node;

    fn range_count(&self) -> u32 {
        self.0.range_count()
    }

    fn anchor_node(&self) -> Option<Node> {
        self.0.anchor_node()
    }

    fn anchor_offset(&self) -> u32 {
        self.0.anchor_offset()
    }

    fn focus_node(&self) -> Option<Node> {
        self.0.focus_node()
    }

    fn focus_offset(&self) -> u32 {
        self.0.focus_offset()
    }

    fn is_collapsed(&self) -> bool {
        self.0.is_collapsed()
    }

    fn modify(&mut self, step: Step) -> Result<(), SelectionError> {
        self.0
            .modify(
                step.alter.as_str(),
                step.direction.as_str(),
                step.granularity.as_str(),
            )
            .map_err(|err| SelectionError::Rejected(format!("{:?}", err)))
    }
}
