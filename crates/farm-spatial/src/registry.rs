//! The `SpatialRegistry` — lock-protected id → placement map.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use farm_core::{AgentId, BoundingBox, Layer};

/// One registry record: where an entity is, how big it is, what it looks like.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub bbox: BoundingBox,
    pub layer: Layer,
    pub texture: String,
}

impl Placement {
    pub fn new(bbox: BoundingBox, layer: Layer, texture: impl Into<String>) -> Self {
        Self { bbox, layer, texture: texture.into() }
    }
}

/// Shared mapping from entity id to current placement.
///
/// Every read and write takes the one internal mutex; collision checks and
/// commits that must be atomic together go through [`SpatialRegistry::lock`].
#[derive(Default)]
pub struct SpatialRegistry {
    entries: Mutex<FxHashMap<AgentId, Placement>>,
}

impl SpatialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, FxHashMap<AgentId, Placement>> {
        // The registry holds plain-old-data; a panicking writer cannot leave
        // it in a torn state, so poisoning is recovered rather than spread.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or overwrite the full record for `id`.
    pub fn register(&self, id: AgentId, placement: Placement) {
        self.guard().insert(id, placement);
    }

    /// Re-center `id` at `(x, y)` without a collision check.
    ///
    /// Bootstrap/scenery placement only — mobile agents commit moves through
    /// [`RegistryView::commit`] after a passing check.
    pub fn place(&self, id: AgentId, x: f32, y: f32) {
        if let Some(p) = self.guard().get_mut(&id) {
            p.bbox = p.bbox.at(x, y);
        }
    }

    /// Remove `id` from the registry (the entity disappears from snapshots).
    pub fn retract(&self, id: AgentId) {
        self.guard().remove(&id);
    }

    /// Current placement of `id`, if registered.
    pub fn get(&self, id: AgentId) -> Option<Placement> {
        self.guard().get(&id).cloned()
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().len() == 0
    }

    /// Convenience single-shot collision query.  For check-then-commit use
    /// [`SpatialRegistry::lock`] so both happen under one acquisition.
    pub fn would_collide(&self, id: AgentId, bbox: BoundingBox, layer: Layer) -> bool {
        self.lock().would_collide(id, bbox, layer)
    }

    /// Atomically check `bbox` against `id`'s layer and commit it on success.
    ///
    /// Returns `false` (and leaves the entity in place) if the box overlaps
    /// any same-layer entity or `id` is unregistered.
    pub fn try_move(&self, id: AgentId, bbox: BoundingBox) -> bool {
        let mut view = self.lock();
        let Some(layer) = view.layer_of(id) else {
            return false;
        };
        if view.would_collide(id, bbox, layer) {
            return false;
        }
        view.commit(id, bbox);
        true
    }

    /// Take the registry lock and return a view for multi-step atomic work
    /// (the navigator runs its whole direct/axis/dodge cascade under one).
    pub fn lock(&self) -> RegistryView<'_> {
        RegistryView { guard: self.guard() }
    }

    /// Clone all records (used by the snapshot publisher).
    pub fn entries(&self) -> FxHashMap<AgentId, Placement> {
        self.guard().clone()
    }
}

// ── RegistryView ──────────────────────────────────────────────────────────────

/// A held registry lock.  Everything done through one view is atomic with
/// respect to all other registry users.
pub struct RegistryView<'a> {
    guard: MutexGuard<'a, FxHashMap<AgentId, Placement>>,
}

impl RegistryView<'_> {
    /// Scan all entries sharing `layer` (excluding `id` itself) for overlap
    /// with `bbox`.
    pub fn would_collide(&self, id: AgentId, bbox: BoundingBox, layer: Layer) -> bool {
        self.guard
            .iter()
            .any(|(&other, p)| other != id && p.layer == layer && p.bbox.overlaps(bbox))
    }

    /// Overwrite `id`'s box.  Callers check first; commit itself is blind.
    pub fn commit(&mut self, id: AgentId, bbox: BoundingBox) {
        if let Some(p) = self.guard.get_mut(&id) {
            p.bbox = bbox;
        }
    }

    /// Current box of `id`, if registered.
    pub fn bbox_of(&self, id: AgentId) -> Option<BoundingBox> {
        self.guard.get(&id).map(|p| p.bbox)
    }

    /// Layer of `id`, if registered.
    pub fn layer_of(&self, id: AgentId) -> Option<Layer> {
        self.guard.get(&id).map(|p| p.layer)
    }
}
