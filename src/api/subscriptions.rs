use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::{Dimension, ViewportId};

/// Notification raised by a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Signal {
    /// Range changed along one dimension, whatever the origin.
    RangeChanged(Dimension),
    /// Range changed along one dimension through direct user interaction.
    RangeChangedManually(Dimension),
    Resized,
}

/// Handler bound to a `(viewport, signal)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LinkAction {
    /// Recompute the axis geometry from the emitting viewport.
    RefreshAxis(String),
    /// Copy the emitting viewport's range into `target` (programmatically).
    ForwardRange {
        target: ViewportId,
        dimension: Dimension,
    },
    DisableAutoRange(String),
    /// Copy the emitting viewport's geometry into `target`.
    TrackGeometry(ViewportId),
}

pub(crate) type ActionList = SmallVec<[LinkAction; 4]>;

/// Ordered subscription lists, scoped to one engine and torn down on reset.
#[derive(Debug, Default)]
pub(crate) struct SubscriptionTable {
    entries: IndexMap<(ViewportId, Signal), ActionList>,
}

impl SubscriptionTable {
    /// Appends `action` unless the exact subscription already exists.
    pub(crate) fn subscribe(
        &mut self,
        viewport: ViewportId,
        signal: Signal,
        action: LinkAction,
    ) -> bool {
        let actions = self.entries.entry((viewport, signal)).or_default();
        if actions.contains(&action) {
            return false;
        }
        actions.push(action);
        true
    }

    /// Snapshot of the handlers, so dispatch can mutate the engine freely.
    pub(crate) fn actions(&self, viewport: ViewportId, signal: Signal) -> ActionList {
        self.entries
            .get(&(viewport, signal))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.values().map(|actions| actions.len()).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
