//! Shared world handles and the per-worker agent context.
//!
//! Everything a behavior loop touches hangs off one `Arc<Farm>`: the spatial
//! registry, the navigator, the stage monitors, the display-slot arrays, the
//! landmark layout, and the pacing table.  Each worker then owns an
//! [`AgentCtx`] with its id, kind, speed, and private RNG stream.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use farm_core::{AgentId, AgentKind, AgentRng, BoundingBox};
use farm_nav::Navigator;
use farm_spatial::SpatialRegistry;
use farm_stages::{
    Barn, DisplaySlots, Intersection, Nest, Oven, Pantry, PantryLevels, ShopQueue, StatsBoard,
};

// ── Stage bundle ──────────────────────────────────────────────────────────────

/// Every stage monitor of one farm, shared across all workers.
pub struct Stages {
    pub nests:        Vec<Arc<Nest>>,
    pub barn:         Arc<Barn>,
    pub pantry:       Arc<Pantry>,
    pub oven:         Arc<Oven>,
    pub intersection: Arc<Intersection>,
    pub shop:         Arc<ShopQueue>,
    pub stats:        Arc<StatsBoard>,
}

// ── Display slots ─────────────────────────────────────────────────────────────

/// One slot row per pantry ingredient.
pub struct PantrySlots {
    pub eggs:   DisplaySlots,
    pub butter: DisplaySlots,
    pub flour:  DisplaySlots,
    pub sugar:  DisplaySlots,
}

impl PantrySlots {
    /// Show exactly the current pantry levels.  Called after a delivery or a
    /// bake batch, outside the pantry lock.
    pub fn sync(&self, levels: PantryLevels, registry: &SpatialRegistry) {
        self.eggs.sync(levels.eggs as usize, registry);
        self.butter.sync(levels.butter as usize, registry);
        self.flour.sync(levels.flour as usize, registry);
        self.sugar.sync(levels.sugar as usize, registry);
    }
}

/// All item-layer slot rows of the farm.
pub struct FarmSlots {
    /// One egg row per nest, indexed like `Stages::nests`.
    pub nest_eggs: Vec<DisplaySlots>,
    pub pantry:    PantrySlots,
    pub cakes:     DisplaySlots,
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Named landmark positions the behavior loops steer toward.
///
/// Spots where an agent stands still during a stage wait are never shared
/// between two agents that can wait concurrently: each truck role has its
/// own loading bay and pantry dock, the farmer's barn drop-off is apart
/// from the truck bay, and the road has one lane per direction.  A shared
/// stand-still spot would let a blocked agent physically wall off the very
/// agent whose progress it is waiting on.
#[derive(Clone, Debug)]
pub struct FarmLayout {
    /// Nest centers, indexed like `Stages::nests`.
    pub nests:          Vec<(f32, f32)>,
    /// The egg barn where the farmer drops off collected eggs.
    pub egg_barn:       (f32, f32),
    /// Loading bay of the egg/butter truck (it waits here for eggs ≥ 3).
    pub egg_bay:        (f32, f32),
    /// Loading bay of the flour/sugar truck.
    pub dry_bay:        (f32, f32),
    /// Pantry dock of the egg/butter truck (it waits here at the cap gate).
    pub egg_dock:       (f32, f32),
    /// Pantry dock of the flour/sugar truck.
    pub dry_dock:       (f32, f32),
    /// Outbound road lane: barn-side entry and bakery-side exit.
    pub road_out_start: (f32, f32),
    pub road_out_end:   (f32, f32),
    /// Inbound road lane: bakery-side entry and barn-side exit.
    pub road_in_start:  (f32, f32),
    pub road_in_end:    (f32, f32),
    /// The shop counter where an admitted child stands.
    pub counter:        (f32, f32),
    /// Where a child stands while queued (the back of the line).
    pub queue_tail:     (f32, f32),
    /// Where a child wanders off to eat before rejoining the line.
    pub eating_spot:    (f32, f32),
}

// ── Pacing ────────────────────────────────────────────────────────────────────

/// All sleeps and per-wait timeouts of the behavior loops, in one table so
/// tests can shrink everything at once.
#[derive(Clone, Debug)]
pub struct Pacing {
    /// Delay between movement steps (one registry commit per tick).
    pub step_interval:   Duration,
    /// How long a chicken sits after laying.
    pub lay_pause:       Duration,
    /// Bounded wait for nest occupancy before switching nests.
    pub occupy_timeout:  Duration,
    /// Bounded wait for a collectable nest before switching nests.
    pub collect_timeout: Duration,
    /// Loading/unloading pause at a barn or the pantry dock.
    pub load_pause:      Duration,
    /// How long a child eats before rejoining the shop line.
    pub eat_pause:       Duration,
    /// Fixed bake duration (no locks held while it elapses).
    pub bake_duration:   Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            step_interval:   Duration::from_millis(25),
            lay_pause:       Duration::from_millis(400),
            occupy_timeout:  Duration::from_secs(2),
            collect_timeout: Duration::from_secs(2),
            load_pause:      Duration::from_millis(300),
            eat_pause:       Duration::from_millis(1000),
            bake_duration:   Duration::from_millis(800),
        }
    }
}

// ── Farm & AgentCtx ───────────────────────────────────────────────────────────

/// The complete shared world one farm's workers operate on.
pub struct Farm {
    pub registry: Arc<SpatialRegistry>,
    pub nav:      Navigator,
    pub stages:   Stages,
    pub slots:    FarmSlots,
    pub layout:   FarmLayout,
    pub pacing:   Pacing,
}

/// One worker's view of the world: shared handles plus private identity,
/// speed, and RNG stream.
pub struct AgentCtx {
    pub id:    AgentId,
    pub kind:  AgentKind,
    pub speed: f32,
    pub rng:   AgentRng,
    pub farm:  Arc<Farm>,
}

impl AgentCtx {
    pub fn new(id: AgentId, kind: AgentKind, speed: f32, seed: u64, farm: Arc<Farm>) -> Self {
        Self { id, kind, speed, rng: AgentRng::new(seed, id), farm }
    }

    /// Current bounding box, if this agent is registered.
    pub fn bbox(&self) -> Option<BoundingBox> {
        self.farm.registry.get(self.id).map(|p| p.bbox)
    }

    /// Walk step by step until within arrival tolerance of `(tx, ty)`.
    ///
    /// Blocked steps are retried on the next tick; the dodge cascade inside
    /// the navigator keeps a crowd moving.  Returns immediately if the agent
    /// is not registered.
    pub fn walk_to(&mut self, (tx, ty): (f32, f32)) {
        loop {
            let Some(current) = self.bbox() else { return };
            if self.farm.nav.arrived(current, tx, ty) {
                return;
            }
            self.farm
                .nav
                .step_toward(self.id, self.kind, tx, ty, self.speed, &mut self.rng);
            thread::sleep(self.farm.pacing.step_interval);
        }
    }

    /// Convenience sleep used by the behavior loops.
    pub fn pause(&self, d: Duration) {
        thread::sleep(d);
    }
}
