//! Lazy directory tree sidebar.
//!
//! Components:
//! - [`Explorer`] - sidebar with the root listing and a path header
//! - [`TreeNode`] - one row of the tree, recursive for directories

mod tree;

pub use tree::TreeNode;

use leptos::prelude::*;

use crate::config::APP_NAME;
use crate::utils::fetch::fetch_listing;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File tree sidebar.
///
/// The root listing is fetched once on mount; every directory below
/// fetches its own children on first expansion.
#[component]
pub fn Explorer() -> impl IntoView {
    let listing = LocalResource::new(|| async { fetch_listing(None).await });

    let current_path = Signal::derive(move || {
        listing
            .get()
            .and_then(|result| result.ok())
            .map(|data| data.current_path)
            .unwrap_or_default()
    });

    view! {
        <div class=css::explorer>
            <header class=css::header>
                <span class=css::appName>{APP_NAME}</span>
                <span class=css::rootPath title=move || current_path.get()>
                    {move || current_path.get()}
                </span>
            </header>

            <div class=format!("{} scrollbar-thin", css::tree) role="tree" aria-label="File tree">
                <Suspense fallback=move || view! { <div class=css::loading>"Loading..."</div> }>
                    {move || listing.get().map(|result| match result {
                        Ok(data) => view! {
                            <For
                                each=move || data.items.clone()
                                key=|entry| entry.path.clone()
                                children=move |entry| view! { <TreeNode entry=entry depth=0 /> }
                            />
                        }.into_any(),
                        Err(err) => view! {
                            <div class=css::error>
                                <p>"Failed to load directory listing"</p>
                                <p class=css::errorDetail>{err.to_string()}</p>
                            </div>
                        }.into_any(),
                    })}
                </Suspense>
            </div>
        </div>
    }
}
