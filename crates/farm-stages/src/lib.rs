//! `farm-stages` — the capacity-bounded resource stages of the farm economy.
//!
//! Each stage is a self-contained monitor: one `Mutex` around a small state
//! record plus the `Condvar`(s) that gate producers and consumers.  All waits
//! go through `wait_while`/`wait_timeout_while`, so predicates are re-checked
//! on every wake (spurious wakeups and lost-wakeup races are handled by
//! construction).
//!
//! # Wait discipline
//!
//! | Stage        | Wait                                   | Bound     |
//! |--------------|----------------------------------------|-----------|
//! | Nest occupy  | "free or already mine"                 | timeout   |
//! | Nest collect | "unoccupied and eggs > 0"              | timeout   |
//! | Barn load    | "eggs ≥ 3"                             | unbounded |
//! | Pantry give  | "delivery fits under the 6-unit cap"   | unbounded |
//! | Pantry take  | "every ingredient ≥ 2"                 | unbounded |
//! | Oven gate    | "cakes ≤ 3"                            | unbounded |
//! | Oven stock   | "cakes > 0"                            | unbounded |
//! | Intersection | "queue head and lane free" (FIFO)      | unbounded |
//! | Shop counter | "queue head and counter free" (FIFO)   | unbounded |
//!
//! Bounded waits are exactly the two nest predicates — a stalled nest must
//! never permanently block a chicken or the farmer; everywhere else the
//! design guarantees eventual satisfaction.
//!
//! # Lock ordering
//!
//! The global acquisition order is
//! registry → nest → barn → pantry → oven → shop → intersection → stats.
//! Stage monitors never call into each other, so no worker in this workspace
//! ever holds two stage locks at once; the order exists so any future
//! multi-lock path has a rule to follow.

pub mod barn;
pub mod goods;
pub mod intersection;
pub mod nest;
pub mod oven;
pub mod pantry;
pub mod shop;
pub mod slots;
pub mod stats;

#[cfg(test)]
mod tests;

pub use barn::Barn;
pub use goods::Goods;
pub use intersection::Intersection;
pub use nest::{LayOutcome, Nest, NEST_CAPACITY};
pub use oven::{Oven, BAKE_BATCH_UNITS, BAKE_CAKE_GATE, BAKE_YIELD};
pub use pantry::{Pantry, PantryLevels, PANTRY_CAPACITY};
pub use shop::ShopQueue;
pub use slots::DisplaySlots;
pub use stats::{BakeryStats, StatsBoard};
