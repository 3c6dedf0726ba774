use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{AxisRange, Dimension, SceneRect};

/// Non-owning handle to a viewport in a [`ViewportTable`].
///
/// Handles are never reused, so a handle kept past `reset` simply stops
/// resolving instead of aliasing a newer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewportId(u32);

impl ViewportId {
    /// The shared master surface. It exists for the whole engine lifetime.
    pub const MASTER: Self = Self(0);

    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn is_master(self) -> bool {
        self == Self::MASTER
    }
}

impl fmt::Display for ViewportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a range write came from direct user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeOrigin {
    Manual,
    Programmatic,
}

/// Range and geometry state of one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    x_range: AxisRange,
    y_range: AxisRange,
    geometry: SceneRect,
}

impl ViewBox {
    #[must_use]
    pub fn new(x_range: AxisRange, y_range: AxisRange, geometry: SceneRect) -> Self {
        Self {
            x_range,
            y_range,
            geometry,
        }
    }

    #[must_use]
    pub fn range(&self, dimension: Dimension) -> AxisRange {
        match dimension {
            Dimension::X => self.x_range,
            Dimension::Y => self.y_range,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> SceneRect {
        self.geometry
    }

    /// Returns `true` when the stored range changed.
    pub fn set_range(&mut self, dimension: Dimension, range: AxisRange) -> bool {
        let slot = match dimension {
            Dimension::X => &mut self.x_range,
            Dimension::Y => &mut self.y_range,
        };
        if *slot == range {
            return false;
        }
        *slot = range;
        true
    }

    /// Returns `true` when the stored geometry changed.
    pub fn set_geometry(&mut self, geometry: SceneRect) -> bool {
        if self.geometry == geometry {
            return false;
        }
        self.geometry = geometry;
        true
    }
}

/// Arena owning every viewport of one composite plot.
#[derive(Debug, Clone)]
pub struct ViewportTable {
    entries: IndexMap<ViewportId, ViewBox>,
    next_id: u32,
}

impl ViewportTable {
    #[must_use]
    pub fn new(master: ViewBox) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(ViewportId::MASTER, master);
        Self {
            entries,
            next_id: 1,
        }
    }

    #[must_use]
    pub fn master(&self) -> &ViewBox {
        // Invariant: the master entry is inserted in `new` and never removed.
        &self.entries[&ViewportId::MASTER]
    }

    pub fn create(&mut self, view: ViewBox) -> ViewportId {
        let id = ViewportId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.insert(id, view);
        id
    }

    #[must_use]
    pub fn get(&self, id: ViewportId) -> Option<&ViewBox> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: ViewportId) -> Option<&mut ViewBox> {
        self.entries.get_mut(&id)
    }

    #[must_use]
    pub fn contains(&self, id: ViewportId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every dedicated surface; the master survives.
    pub fn retain_master(&mut self) {
        self.entries.retain(|id, _| id.is_master());
    }
}
