//! `farm-spatial` — the shared spatial registry and snapshot publisher.
//!
//! The registry is the single source of truth for every entity's box and
//! layer.  All mutation and every collision query go through one mutex, and
//! the guard view returned by [`SpatialRegistry::lock`] lets callers make
//! check-then-commit atomic within a single lock acquisition — two agents can
//! never both pass a collision check and then both commit overlapping boxes.
//!
//! Snapshots are immutable copies of the registry published through an
//! atomically swapped `Arc`; the rendering side reads them without ever
//! blocking the simulation or observing a half-written frame.

pub mod registry;
pub mod snapshot;


pub use registry::{Placement, RegistryView, SpatialRegistry};
pub use snapshot::{FarmSnapshot, SnapshotEntity, SnapshotHandle};
