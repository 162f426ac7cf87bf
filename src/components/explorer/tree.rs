//! Tree node component.
//!
//! Directories expand lazily: the first toggle fetches the listing and
//! caches it in the node's own state for the rest of the session;
//! later toggles only flip visibility. Files select into the viewer.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use mdview_core::tree::{NodeState, ToggleOutcome};
use mdview_core::types::{DirectoryEntry, FileType};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Selection;
use crate::utils::fetch::fetch_listing;

stylance::import_crate_style!(css, "src/components/explorer/tree.module.css");

/// Icon for an entry based on its type.
fn node_icon(entry: &DirectoryEntry) -> IconData {
    if entry.is_directory {
        ic::FOLDER
    } else {
        match FileType::from_path(&entry.name) {
            FileType::Markdown => ic::FILE_TEXT,
            FileType::PlainText | FileType::Unsupported => ic::FILE,
        }
    }
}

/// One entry row, recursive for directories.
///
/// Returns [`AnyView`] to break the recursive component type.
#[component]
pub fn TreeNode(entry: DirectoryEntry, depth: usize) -> AnyView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Each node owns its state exclusively; nothing is shared between
    // sibling nodes.
    let state = RwSignal::new(NodeState::new());

    let is_directory = entry.is_directory;
    let name = entry.name.clone();
    let icon = node_icon(&entry);
    let indent = format!("padding-left: {}px", depth * 12 + 8);
    let child_indent = format!("padding-left: {}px", (depth + 1) * 12 + 8);

    let entry_for_select = entry.clone();
    let path_for_fetch = entry.path.clone();
    let path_for_selected = entry.path.clone();

    let handle_click = move |_: leptos::ev::MouseEvent| {
        if !is_directory {
            ctx.select(Selection::from_entry(&entry_for_select));
            return;
        }

        let outcome = state
            .try_update(|node| node.toggle())
            .unwrap_or(ToggleOutcome::Toggled);

        if outcome == ToggleOutcome::StartFetch {
            let path = path_for_fetch.clone();
            spawn_local(async move {
                match fetch_listing(Some(&path)).await {
                    // Applied even if the node was collapsed meanwhile.
                    Ok(listing) => state.update(|node| node.children_loaded(listing.items)),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("listing {path} failed: {err}").into(),
                        );
                        state.update(|node| node.load_failed());
                    }
                }
            });
        }
    };

    let expanded = Signal::derive(move || state.with(|node| node.expanded));
    let loading = Signal::derive(move || state.with(|node| node.is_loading()));
    let children = Signal::derive(move || state.with(|node| node.visible_children().to_vec()));

    let is_selected = Signal::derive(move || {
        ctx.selection
            .get()
            .map(|s| s.path == path_for_selected)
            .unwrap_or(false)
    });

    let row_class = move || {
        if is_selected.get() {
            format!("{} {}", css::row, css::selected)
        } else {
            css::row.to_string()
        }
    };

    let aria_label = if is_directory {
        format!("Folder: {name}")
    } else {
        format!("File: {name}")
    };

    view! {
        <div
            class=row_class
            style=indent
            on:click=handle_click
            role="treeitem"
            tabindex="0"
            aria-label=aria_label
            aria-expanded=move || is_directory.then(|| expanded.get().to_string())
        >
            <span class=css::chevron aria-hidden="true">
                {is_directory.then(|| view! {
                    {move || if expanded.get() {
                        view! { <Icon icon=ic::CHEVRON_DOWN /> }
                    } else {
                        view! { <Icon icon=ic::CHEVRON_RIGHT /> }
                    }}
                })}
            </span>
            <span class=css::icon aria-hidden="true">
                <Icon icon=icon />
            </span>
            <span class=if is_directory { css::nameDir } else { css::nameFile }>
                {name.clone()}
            </span>
        </div>

        <Show when=move || expanded.get()>
            <div class=css::children role="group">
                <For
                    each=move || children.get()
                    key=|child| child.path.clone()
                    children=move |child| view! { <TreeNode entry=child depth=depth + 1 /> }
                />
                <Show when=move || loading.get()>
                    <div class=css::loadingRow style=child_indent.clone()>"Loading..."</div>
                </Show>
            </div>
        </Show>
    }
    .into_any()
}
