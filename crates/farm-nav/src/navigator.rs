//! The step-toward heuristic: bounded step, wobble, slide, dodge.

use std::sync::Arc;

use farm_core::{AgentId, AgentKind, AgentRng, BoundingBox};
use farm_spatial::SpatialRegistry;

/// Tunables for the movement heuristic.
#[derive(Clone, Debug)]
pub struct NavParams {
    /// Probability of adding vertical wobble to a step.
    pub jitter_prob: f64,
    /// Maximum wobble magnitude in plane units.
    pub jitter_mag: f32,
    /// Dodge candidates generated when both the direct and the axis steps
    /// are blocked.
    pub dodge_batch: usize,
    /// Probability of taking a free dodge at all.  Hesitation keeps a crowd
    /// of blocked agents from retrying in lockstep and oscillating.
    pub dodge_accept_prob: f64,
    /// Per-candidate speed multiplier range (low, high).
    pub dodge_speed_jitter: (f32, f32),
    /// Probability a dodge candidate is vertical for low-profile agents.
    pub vertical_bias_low_profile: f64,
    /// Probability a dodge candidate is vertical for everyone else.
    pub vertical_bias_default: f64,
    /// Within this center distance of the target the agent counts as arrived.
    pub arrive_tolerance: f32,
}

impl Default for NavParams {
    fn default() -> Self {
        Self {
            jitter_prob: 0.2,
            jitter_mag: 3.0,
            dodge_batch: 8,
            dodge_accept_prob: 0.6,
            dodge_speed_jitter: (0.5, 1.5),
            vertical_bias_low_profile: 0.8,
            vertical_bias_default: 0.5,
            arrive_tolerance: 8.0,
        }
    }
}

/// Stateless navigator over the shared registry.
///
/// Cheap to clone a handle per worker: all state lives in the registry.
pub struct Navigator {
    registry: Arc<SpatialRegistry>,
    params: NavParams,
}

impl Navigator {
    pub fn new(registry: Arc<SpatialRegistry>, params: NavParams) -> Self {
        Self { registry, params }
    }

    pub fn params(&self) -> &NavParams {
        &self.params
    }

    /// `true` once `current` is within the arrival tolerance of the target.
    pub fn arrived(&self, current: BoundingBox, tx: f32, ty: f32) -> bool {
        current.distance_to(tx, ty) <= self.params.arrive_tolerance
    }

    /// Attempt one bounded step of `id` toward `(tx, ty)`.
    ///
    /// Returns the committed box, or `None` when the step was rejected
    /// (out of plane) or blocked on every candidate.  The registry is only
    /// updated on success; on failure the agent stays exactly where it was.
    pub fn step_toward(
        &self,
        id: AgentId,
        kind: AgentKind,
        tx: f32,
        ty: f32,
        speed: f32,
        rng: &mut AgentRng,
    ) -> Option<BoundingBox> {
        let p = &self.params;

        let mut view = self.registry.lock();
        let current = view.bbox_of(id)?;
        let layer = view.layer_of(id)?;

        // Signed per-axis step: remaining distance, capped at `speed`.
        let dx = (tx - current.cx).clamp(-speed, speed);
        let mut dy = (ty - current.cy).clamp(-speed, speed);

        // Vertical wobble.
        if p.jitter_mag > 0.0 && rng.gen_bool(p.jitter_prob) {
            dy += rng.gen_range(-p.jitter_mag..=p.jitter_mag);
        }

        // A straight step that leaves the plane rejects the whole move.
        let direct = current.offset(dx, dy);
        if !direct.in_plane() {
            return None;
        }

        if !view.would_collide(id, direct, layer) {
            view.commit(id, direct);
            return Some(direct);
        }

        // Axis decomposition: slide along whichever single axis is free,
        // trying the two in random order.  Zero-displacement components are
        // skipped — a no-op "step" must not count as progress.
        let mut axis: Vec<BoundingBox> = Vec::with_capacity(2);
        if dx != 0.0 {
            axis.push(current.offset(dx, 0.0));
        }
        if dy != 0.0 {
            axis.push(current.offset(0.0, dy));
        }
        rng.shuffle(&mut axis);
        for candidate in axis {
            if candidate.in_plane() && !view.would_collide(id, candidate, layer) {
                view.commit(id, candidate);
                return Some(candidate);
            }
        }

        // Dodge phase, gated by the hesitation roll.
        if !rng.gen_bool(p.dodge_accept_prob) {
            return None;
        }
        let vertical_bias = if kind.low_profile() {
            p.vertical_bias_low_profile
        } else {
            p.vertical_bias_default
        };
        let (lo, hi) = p.dodge_speed_jitter;
        let mut dodges: Vec<BoundingBox> = (0..p.dodge_batch)
            .map(|_| {
                let magnitude = speed * rng.gen_range(lo..=hi);
                let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                if rng.gen_bool(vertical_bias) {
                    current.offset(0.0, sign * magnitude)
                } else {
                    current.offset(sign * magnitude, 0.0)
                }
            })
            .collect();
        rng.shuffle(&mut dodges);

        for candidate in dodges {
            if candidate.in_plane() && !view.would_collide(id, candidate, layer) {
                view.commit(id, candidate);
                return Some(candidate);
            }
        }

        None
    }
}
