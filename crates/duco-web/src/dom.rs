//! Thin helpers over `web-sys` document access.
//!
//! Every fallible browser call is mapped into [`CoreError`] with a short
//! context so feature wiring can use `?`.

use duco_core::{CoreError, Result};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

/// Convert a thrown JS value into a DOM error.
pub fn js_error(context: &str, err: JsValue) -> CoreError {
    CoreError::dom(format!("{context}: {}", describe(&err)))
}

/// Human-readable rendering of a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| CoreError::dom("no global window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| CoreError::dom("window has no document"))
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| js_error(&format!("querySelectorAll({selector})"), e))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// First HTML element matching `selector`.
pub fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    let found = document
        .query_selector(selector)
        .map_err(|e| js_error(&format!("querySelector({selector})"), e))?;

    Ok(found.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Non-empty value of attribute `name`.
pub fn attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name).filter(|v| !v.is_empty())
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|e| js_error(&format!("classList.toggle({class})"), e))
}

/// Register `handler` for `event` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| js_error(&format!("addEventListener({event})"), e))?;

    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}
