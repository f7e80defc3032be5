//! `farm-core` — foundational types for the `farmyard` simulation.
//!
//! This crate is a dependency of every other `farm-*` crate.  It intentionally
//! has no `farm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `NestId`                                   |
//! | [`geom`]    | `BoundingBox`, plane bounds, overlap tests            |
//! | [`agent`]   | `AgentKind`, `Layer`, entity size constants           |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]   | `FarmError`, `FarmResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |
//!           | Required for snapshot export.                             |

pub mod agent;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{AgentKind, Layer};
pub use error::{FarmError, FarmResult};
pub use geom::{BoundingBox, PLANE_HEIGHT, PLANE_WIDTH};
pub use ids::{AgentId, NestId};
pub use rng::{AgentRng, SimRng};
