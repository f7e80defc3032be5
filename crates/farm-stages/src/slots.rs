//! Fixed display-slot arrays that visualize stage contents.
//!
//! Nest eggs, pantry ingredient piles, and the cake shelf are item-layer
//! entities whose visibility tracks a counter.  The slot array must hold the
//! true maximum concurrent count — an under-sized array is a configuration
//! error caught at construction, never a runtime retry (the cake shelf in
//! particular must hold 6, not the 3 the reference layout drew).

use farm_core::{AgentId, BoundingBox, FarmError, FarmResult};
use farm_core::agent::ITEM_SIZE;
use farm_core::Layer;
use farm_spatial::{Placement, SpatialRegistry};

/// A fixed row of item entities toggled in and out of the registry.
#[derive(Debug)]
pub struct DisplaySlots {
    ids: Vec<AgentId>,
    positions: Vec<(f32, f32)>,
    texture: &'static str,
}

impl DisplaySlots {
    /// Build a slot array.
    ///
    /// # Errors
    ///
    /// `DisplaySlotsTooSmall` when fewer slots are supplied than
    /// `required_capacity` — the maximum count the owning stage can reach.
    pub fn new(
        ids: Vec<AgentId>,
        positions: Vec<(f32, f32)>,
        texture: &'static str,
        required_capacity: usize,
    ) -> FarmResult<Self> {
        if ids.len() != positions.len() {
            return Err(FarmError::Config(format!(
                "{} slot ids but {} positions for '{texture}' slots",
                ids.len(),
                positions.len()
            )));
        }
        if ids.len() < required_capacity {
            return Err(FarmError::DisplaySlotsTooSmall {
                capacity: ids.len(),
                required: required_capacity,
            });
        }
        Ok(Self { ids, positions, texture })
    }

    /// Publish the first `shown` slots and retract the rest.
    ///
    /// Called after a stage transition, outside the stage lock (the registry
    /// is first in the lock order; display lag of one transition is visual
    /// only).
    pub fn sync(&self, shown: usize, registry: &SpatialRegistry) {
        debug_assert!(shown <= self.ids.len(), "slot count validated at build");
        let shown = shown.min(self.ids.len());
        for (i, (&id, &(x, y))) in self.ids.iter().zip(&self.positions).enumerate() {
            if i < shown {
                registry.register(
                    id,
                    Placement::new(
                        BoundingBox::new(x, y, ITEM_SIZE, ITEM_SIZE),
                        Layer::Items,
                        self.texture,
                    ),
                );
            } else {
                registry.retract(id);
            }
        }
    }

    pub fn capacity(&self) -> usize {
        self.ids.len()
    }
}
