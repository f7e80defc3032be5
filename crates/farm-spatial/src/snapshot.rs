//! Immutable snapshots of the registry for the rendering collaborator.
//!
//! The publisher clones the registry under its lock, freezes the copy in an
//! `Arc`, and swaps it into place.  Readers clone the `Arc` (two pointer
//! bumps) and then work entirely on immutable data — a frame can never show
//! an entity with only some fields updated.

use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use farm_core::{AgentId, Layer};

use crate::SpatialRegistry;

/// One entity as the renderer sees it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapshotEntity {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub layer: Layer,
    pub texture: String,
}

/// A frozen copy of the whole farm at one instant.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FarmSnapshot {
    pub entities: FxHashMap<AgentId, SnapshotEntity>,
}

impl FarmSnapshot {
    /// Build from the registry's current contents (takes the registry lock
    /// exactly once).
    pub fn capture(registry: &SpatialRegistry) -> Self {
        let entities = registry
            .entries()
            .into_iter()
            .map(|(id, p)| {
                let e = SnapshotEntity {
                    x: p.bbox.cx,
                    y: p.bbox.cy,
                    width: p.bbox.half_w * 2.0,
                    height: p.bbox.half_h * 2.0,
                    layer: p.layer,
                    texture: p.texture,
                };
                (id, e)
            })
            .collect();
        Self { entities }
    }
}

/// The atomically swapped reference the rendering side polls.
#[derive(Default)]
pub struct SnapshotHandle {
    current: RwLock<Arc<FarmSnapshot>>,
}

impl SnapshotHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the registry and swap the published snapshot.
    pub fn publish(&self, registry: &SpatialRegistry) {
        let fresh = Arc::new(FarmSnapshot::capture(registry));
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = fresh;
    }

    /// The most recently published snapshot.  Never blocks on the registry;
    /// the write lock is held only for the pointer swap above.
    pub fn latest(&self) -> Arc<FarmSnapshot> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }
}
