//! Asynchronous diagram rendering.
//!
//! Each diagram renders independently; a failure shows a local error
//! box and never takes down sibling content.

use leptos::prelude::*;

use crate::utils::mermaid;

stylance::import_crate_style!(css, "src/components/viewer/diagram.module.css");

/// One diagram fence, rendered through the external diagram library.
#[component]
pub fn Diagram(code: String) -> impl IntoView {
    let svg = LocalResource::new(move || {
        let code = code.clone();
        async move { mermaid::render(&code).await }
    });

    view! {
        <Suspense fallback=move || view! {
            <div class=css::pending>"Rendering diagram..."</div>
        }>
            {move || svg.get().map(|result| match result {
                Ok(markup) => view! {
                    <div class=css::diagram inner_html=markup />
                }.into_any(),
                Err(err) => {
                    web_sys::console::error_1(&format!("diagram render failed: {err}").into());
                    view! {
                        <div class=css::failed>
                            {format!("Failed to render diagram: {err}")}
                        </div>
                    }.into_any()
                }
            })}
        </Suspense>
    }
}
