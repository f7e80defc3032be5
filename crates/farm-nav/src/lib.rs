//! `farm-nav` — stateless movement/navigation for agents on the plane.
//!
//! One call of [`Navigator::step_toward`] advances an agent by at most one
//! bounded step.  The whole decision cascade — direct step, axis-decomposed
//! slide, randomized dodge — runs under a single registry lock acquisition,
//! so a passing collision check and its commit are atomic with respect to
//! every other agent.
//!
//! A blocked step is not an error: the agent simply stays in place for that
//! tick and retries on the next one.

pub mod navigator;


pub use navigator::{NavParams, Navigator};
