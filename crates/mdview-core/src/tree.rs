//! Per-node state machine for the lazily expanding directory tree.
//!
//! Each directory node owns one [`NodeState`] exclusively; no state is
//! shared across nodes. Children are fetched once, on first expansion,
//! and kept for the rest of the session even if the underlying
//! filesystem changes afterwards.

use crate::types::DirectoryEntry;

/// Children slot of a directory node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ChildrenState {
    /// No listing fetch has been issued yet.
    #[default]
    NotLoaded,
    /// A listing fetch is in flight.
    Loading,
    /// Children are cached for the rest of the session.
    Loaded(Vec<DirectoryEntry>),
}

/// What a toggle asks the caller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Visibility flipped; children were already cached or in flight.
    Toggled,
    /// The node needs its children fetched.
    StartFetch,
}

/// Expansion state of one directory node.
#[derive(Clone, Debug, Default)]
pub struct NodeState {
    /// Whether the node is currently shown open.
    pub expanded: bool,
    /// The node's children slot.
    pub children: ChildrenState,
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the node open or closed.
    ///
    /// The first expansion returns [`ToggleOutcome::StartFetch`]; the
    /// caller issues the listing fetch and reports back through
    /// [`NodeState::children_loaded`] or [`NodeState::load_failed`].
    /// Toggling while a fetch is in flight only changes visibility and
    /// never issues a second fetch.
    pub fn toggle(&mut self) -> ToggleOutcome {
        self.expanded = !self.expanded;
        if self.expanded && self.children == ChildrenState::NotLoaded {
            self.children = ChildrenState::Loading;
            ToggleOutcome::StartFetch
        } else {
            ToggleOutcome::Toggled
        }
    }

    /// Apply a successful listing fetch.
    ///
    /// The result is stored even if the node was collapsed while the
    /// fetch was in flight: last write wins on the children slot, and
    /// the cached listing is shown on the next expansion.
    pub fn children_loaded(&mut self, items: Vec<DirectoryEntry>) {
        self.children = ChildrenState::Loaded(items);
    }

    /// Apply a failed listing fetch.
    ///
    /// The node returns to collapsed with an empty children slot, so a
    /// later expansion starts a fresh fetch.
    pub fn load_failed(&mut self) {
        self.children = ChildrenState::NotLoaded;
        self.expanded = false;
    }

    /// Whether a listing fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.children == ChildrenState::Loading
    }

    /// Children to render: cached entries when the node is expanded,
    /// empty otherwise.
    pub fn visible_children(&self) -> &[DirectoryEntry] {
        match &self.children {
            ChildrenState::Loaded(items) if self.expanded => items,
            _ => &[],
        }
    }
}
