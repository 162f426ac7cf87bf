//! Document preview pane.
//!
//! Components:
//! - [`Viewer`] - header plus content dispatch for the current selection
//! - [`Diagram`] - async diagram rendering, isolated per diagram

mod diagram;

pub use diagram::Diagram;

use leptos::prelude::*;
use leptos_icons::Icon;

use mdview_core::markdown::{Segment, render_segments};
use mdview_core::types::FileType;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::DIAGRAM_DIALECT;
use crate::utils::fetch::fetch_document;
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Content resolved for the preview pane.
#[derive(Clone)]
enum ViewerContent {
    /// Markdown split into HTML and diagram segments.
    Markdown(Vec<Segment>),
    /// Raw text shown in a monospace block.
    Plain(String),
    /// No preview for this file type.
    Unsupported,
}

/// Preview pane for the current selection.
///
/// The file type was resolved when the selection was made; the fetch
/// reruns whenever the selection changes.
#[component]
pub fn Viewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selection = ctx.selection;

    let content = LocalResource::new(move || {
        let selected = selection.get();
        async move {
            let selected = selected?;
            let result = match selected.file_type {
                FileType::Unsupported => Ok(ViewerContent::Unsupported),
                FileType::Markdown => fetch_document(&selected.path).await.map(|doc| {
                    ViewerContent::Markdown(render_segments(&doc.content, DIAGRAM_DIALECT))
                }),
                FileType::PlainText => fetch_document(&selected.path)
                    .await
                    .map(|doc| ViewerContent::Plain(doc.content)),
            };
            Some(result)
        }
    });

    view! {
        <section class=css::viewer>
            <Show
                when=move || selection.get().is_some()
                fallback=|| view! {
                    <div class=css::empty>
                        <p>"Select a file from the tree to preview it."</p>
                    </div>
                }
            >
                <header class=css::header>
                    {move || selection.get().map(|s| view! {
                        <div class=css::titleBlock>
                            <h1 class=css::title>{s.name.clone()}</h1>
                            <p class=css::path>
                                {format!("{} · {}", s.path, format_size(s.size))}
                            </p>
                        </div>
                    })}
                    <button
                        class=css::closeButton
                        on:click=move |_| ctx.clear_selection()
                        title="Close preview"
                        aria-label="Close preview"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=format!("{} scrollbar-thin", css::content)>
                    <Suspense fallback=move || view! {
                        <div class=css::loading>"Loading content..."</div>
                    }>
                        {move || content.get().map(|loaded| match loaded {
                            Some(Ok(ViewerContent::Markdown(segments))) => view! {
                                <MarkdownSegments segments=segments />
                            }.into_any(),
                            Some(Ok(ViewerContent::Plain(text))) => view! {
                                <pre class=css::plainText>{text}</pre>
                            }.into_any(),
                            Some(Ok(ViewerContent::Unsupported)) => view! {
                                <div class=css::noPreview>
                                    <p>"Preview not available for this file type."</p>
                                </div>
                            }.into_any(),
                            Some(Err(err)) => view! {
                                <div class=css::error>
                                    <p class=css::errorTitle>"Error loading content:"</p>
                                    <p>{err.to_string()}</p>
                                </div>
                            }.into_any(),
                            None => ().into_any(),
                        })}
                    </Suspense>
                </div>
            </Show>
        </section>
    }
}

/// Markdown segments in document order: HTML chunks interleaved with
/// asynchronously rendered diagrams.
#[component]
fn MarkdownSegments(segments: Vec<Segment>) -> impl IntoView {
    view! {
        <div class=css::markdown>
            {segments.into_iter().map(|segment| match segment {
                Segment::Html(html) => view! { <div inner_html=html /> }.into_any(),
                Segment::Diagram(code) => view! { <Diagram code=code /> }.into_any(),
            }).collect_view()}
        </div>
    }
}
