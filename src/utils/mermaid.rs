//! Diagram rendering through the page-global mermaid library.
//!
//! mermaid is loaded from a CDN script tag in `index.html` and
//! initialized there with `startOnLoad: false`; the binding goes
//! through the Reflect API like the rest of the app's JS interop.

use std::cell::Cell;

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::DiagramError;

thread_local! {
    /// Monotonic id source for render targets; mermaid requires a
    /// unique element id per render call.
    static NEXT_RENDER_ID: Cell<u32> = const { Cell::new(0) };
}

/// Get the window.mermaid object injected by the CDN script.
fn get_mermaid() -> Result<Object, DiagramError> {
    let window = web_sys::window().ok_or(DiagramError::Unavailable)?;
    Reflect::get(&window, &"mermaid".into())
        .ok()
        .and_then(|value| value.dyn_into::<Object>().ok())
        .ok_or(DiagramError::Unavailable)
}

/// Render diagram source to SVG markup via `mermaid.render`.
pub async fn render(code: &str) -> Result<String, DiagramError> {
    let mermaid = get_mermaid()?;

    let render = Reflect::get(&mermaid, &"render".into())
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(DiagramError::Unavailable)?;

    let id = NEXT_RENDER_ID.with(|cell| {
        let id = cell.get();
        cell.set(id.wrapping_add(1));
        id
    });
    let element_id = format!("mdview-diagram-{id}");

    let promise: Promise = render
        .call2(&mermaid, &element_id.into(), &code.into())
        .map_err(|err| DiagramError::RenderFailed(js_error_message(&err)))?
        .into();

    let result = JsFuture::from(promise)
        .await
        .map_err(|err| DiagramError::RenderFailed(js_error_message(&err)))?;

    Reflect::get(&result, &"svg".into())
        .ok()
        .and_then(|value| value.as_string())
        .ok_or(DiagramError::InvalidOutput)
}

/// Best-effort message extraction from a thrown JS value.
fn js_error_message(value: &JsValue) -> String {
    Reflect::get(value, &"message".into())
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
