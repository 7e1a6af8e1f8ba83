use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::domain::ListingId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBlock {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// Fully visible, vertically centered, smooth.
    pub const CENTERED_SMOOTH: Self = Self {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Center,
    };
}

/// A mounted card that can be brought into the list viewport.
pub trait ScrollHandle {
    fn scroll_into_view(&self, options: ScrollOptions);
}

/// Listing id to mounted card handle. Populated by the list adapter.
#[derive(Debug)]
pub struct CardRegistry<H> {
    handles: HashMap<ListingId, H>,
}

impl<H> Default for CardRegistry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> CardRegistry<H> {
    pub fn mount(&mut self, id: ListingId, handle: H) -> Option<H> {
        self.handles.insert(id, handle)
    }

    pub fn unmount(&mut self, id: &ListingId) -> Option<H> {
        self.handles.remove(id)
    }

    pub fn get(&self, id: &ListingId) -> Option<&H> {
        self.handles.get(id)
    }

    pub fn is_mounted(&self, id: &ListingId) -> bool {
        self.handles.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Drops every handle whose id fails `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&ListingId) -> bool) {
        self.handles.retain(|id, _| keep(id));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "listing_id")]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(ListingId),
}

impl SelectionState {
    pub fn id(&self) -> Option<&ListingId> {
        match self {
            Self::Unselected => None,
            Self::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(&self, id: &ListingId) -> bool {
        self.id() == Some(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Requested(ScrollOptions),
    /// The card is filtered out or not yet rendered.
    NotMounted,
}

/// Single source of truth for the highlighted listing.
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    state: SelectionState,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<&ListingId> {
        self.state.id()
    }

    /// Last writer wins. The id is not checked against the current view.
    pub fn select_by_id<H: ScrollHandle>(
        &mut self,
        id: ListingId,
        registry: &CardRegistry<H>,
    ) -> ScrollOutcome {
        debug!(listing_id = %id, "listing selected");
        self.state = SelectionState::Selected(id);
        self.scroll_selected(registry)
    }

    fn scroll_selected<H: ScrollHandle>(&self, registry: &CardRegistry<H>) -> ScrollOutcome {
        let Some(id) = self.state.id() else {
            return ScrollOutcome::NotMounted;
        };

        match registry.get(id) {
            Some(handle) => {
                let options = ScrollOptions::CENTERED_SMOOTH;
                handle.scroll_into_view(options);
                ScrollOutcome::Requested(options)
            }
            None => {
                debug!(listing_id = %id, "selected card not mounted, skipping scroll");
                ScrollOutcome::NotMounted
            }
        }
    }
}
