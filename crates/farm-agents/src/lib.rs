//! `farm-agents` — the long-running behavior loops of the farmyard.
//!
//! Each worker thread runs one `run` function over an [`AgentCtx`]:
//!
//! | Module    | Loop                                                        |
//! |-----------|-------------------------------------------------------------|
//! | `chicken` | nest → occupy → lay → sit → release → other nest            |
//! | `farmer`  | nest → bounded collect (or switch) → barn deposit           |
//! | `truck`   | barn load → intersection → pantry delivery → return         |
//! | `child`   | shop queue → partial-fulfilment purchase → eat → requeue    |
//! | `cow`     | stand there                                                 |
//! | `baker`   | cake-cap gate → pantry batch → timed bake → shelf           |
//!
//! No loop ever holds two stage locks at once; display-slot syncs happen
//! after the stage call returns, so the registry lock is always taken on its
//! own.

pub mod baker;
pub mod chicken;
pub mod child;
pub mod cow;
mod ctx;
pub mod farmer;
pub mod truck;


pub use ctx::{AgentCtx, Farm, FarmLayout, FarmSlots, Pacing, PantrySlots, Stages};
pub use truck::TruckRole;
