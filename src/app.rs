//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::{Explorer, Viewer};
use crate::models::Selection;

stylance::import_crate_style!(css, "src/app.module.css");

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessible from any
/// child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because its fields are Leptos signals, which
/// are cheap to copy (pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The file currently open in the viewer, if any.
    pub selection: RwSignal<Option<Selection>>,
}

impl AppContext {
    /// Creates a new application context with nothing selected.
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(None),
        }
    }

    /// Open a file in the viewer.
    pub fn select(&self, selection: Selection) {
        self.selection.set(Some(selection));
    }

    /// Close the viewer.
    pub fn clear_selection(&self) {
        self.selection.set(None);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// Creates and provides the global AppContext, wraps the app in an
/// ErrorBoundary for graceful error handling, and lays out the
/// explorer sidebar next to the viewer pane.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0f1117;
                    color: #e0e0e0;
                    font-family: monospace;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <div class=css::layout>
                <aside class=css::sidebar>
                    <Explorer />
                </aside>
                <main class=css::main>
                    <Viewer />
                </main>
            </div>
        </ErrorBoundary>
    }
}
