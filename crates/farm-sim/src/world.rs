//! World assembly: scenery, display slots, stage monitors, and the agent
//! roster, all built into one explicit [`World`] value.
//!
//! Nothing here is global — tests build as many isolated worlds as they
//! like, and every handle a worker needs hangs off `World::farm`.

use std::sync::Arc;

use tracing::info;

use farm_agents::{Farm, FarmLayout, FarmSlots, PantrySlots, Stages, TruckRole};
use farm_core::{AgentId, AgentKind, BoundingBox, Layer, SimRng};
use farm_nav::{NavParams, Navigator};
use farm_spatial::{Placement, SnapshotHandle, SpatialRegistry};
use farm_stages::{
    Barn, DisplaySlots, Intersection, Nest, Oven, Pantry, ShopQueue, StatsBoard, NEST_CAPACITY,
    PANTRY_CAPACITY,
};

use crate::config::SimConfig;
use crate::error::SimResult;

// ── Roster ────────────────────────────────────────────────────────────────────

/// Which behavior loop a roster entry runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Chicken,
    Farmer,
    Truck(TruckRole),
    Child,
    Cow,
}

/// One spawned worker's identity.
#[derive(Clone, Debug)]
pub struct AgentSpec {
    pub id:    AgentId,
    pub kind:  AgentKind,
    pub role:  Role,
    pub speed: f32,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// A fully assembled farm, ready for [`crate::spawn_workers`].
pub struct World {
    pub farm:     Arc<Farm>,
    pub snapshot: Arc<SnapshotHandle>,
    pub roster:   Vec<AgentSpec>,
    pub config:   SimConfig,
}

/// The landmark positions of the reference farm.
///
/// Wait spots are pairwise clear of each other (see the `FarmLayout` docs):
/// a truck parked at a gate never covers the farmer's drop-off, the other
/// truck's dock, or a road lane.
pub fn default_layout() -> FarmLayout {
    FarmLayout {
        nests:          vec![(100.0, 500.0), (700.0, 500.0)],
        egg_barn:       (50.0, 50.0),
        egg_bay:        (160.0, 50.0),
        dry_bay:        (160.0, 150.0),
        egg_dock:       (460.0, 110.0),
        dry_dock:       (460.0, 200.0),
        road_out_start: (250.0, 80.0),
        road_out_end:   (370.0, 80.0),
        road_in_start:  (370.0, 160.0),
        road_in_end:    (250.0, 160.0),
        counter:        (630.0, 150.0),
        queue_tail:     (630.0, 300.0),
        eating_spot:    (740.0, 120.0),
    }
}

// Non-overlapping spawn spots, one band per kind.  The bands are separated
// either vertically (by more than the combined half heights) or horizontally
// from the bands they share a y-range with.
const CHICKEN_SPAWNS: [(f32, f32); 6] = [
    (260.0, 450.0),
    (350.0, 450.0),
    (440.0, 450.0),
    (530.0, 450.0),
    (620.0, 450.0),
    (710.0, 450.0),
];
const CHILD_SPAWNS: [(f32, f32); 6] = [
    (140.0, 330.0),
    (220.0, 330.0),
    (300.0, 330.0),
    (380.0, 330.0),
    (460.0, 330.0),
    (540.0, 330.0),
];
// Cows are permanent obstacles, so their spots additionally clear every
// wait spot in the default layout.
const COW_SPAWNS: [(f32, f32); 4] = [
    (720.0, 240.0),
    (180.0, 420.0),
    (350.0, 60.0),
    (60.0, 390.0),
];
const FARMER_SPAWN: (f32, f32) = (300.0, 200.0);
const TRUCK_SPAWNS: [(f32, f32); 2] = [(160.0, 50.0), (160.0, 150.0)];

// ── Builder ───────────────────────────────────────────────────────────────────

pub struct WorldBuilder {
    config: SimConfig,
    layout: FarmLayout,
}

struct IdAlloc(u32);

impl IdAlloc {
    fn next(&mut self) -> AgentId {
        let id = AgentId(self.0);
        self.0 += 1;
        id
    }

    /// A row of fresh ids with matching evenly spaced positions.
    fn slot_row(
        &mut self,
        len: usize,
        (x0, y): (f32, f32),
        spacing: f32,
        texture: &'static str,
        required: usize,
    ) -> SimResult<DisplaySlots> {
        let ids = (0..len).map(|_| self.next()).collect();
        let positions = (0..len).map(|i| (x0 + spacing * i as f32, y)).collect();
        Ok(DisplaySlots::new(ids, positions, texture, required)?)
    }
}

impl WorldBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, layout: default_layout() }
    }

    /// Replace the default landmark layout (tests use cramped planes).
    pub fn layout(mut self, layout: FarmLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn build(self) -> SimResult<World> {
        let WorldBuilder { config, layout } = self;
        config.validate()?;

        let registry = Arc::new(SpatialRegistry::new());
        let nav = Navigator::new(Arc::clone(&registry), NavParams::default());
        let snapshot = Arc::new(SnapshotHandle::new());
        let mut build_rng = SimRng::new(config.seed);
        let mut ids = IdAlloc(1);

        // Scenery: registered blind (layer Scenery never collides).
        let scenery = |reg: &SpatialRegistry,
                           ids: &mut IdAlloc,
                           (x, y): (f32, f32),
                           (w, h): (f32, f32),
                           texture: &'static str| {
            reg.register(
                ids.next(),
                Placement::new(BoundingBox::new(x, y, w, h), Layer::Scenery, texture),
            );
        };
        for &nest_pos in &layout.nests {
            scenery(&registry, &mut ids, nest_pos, (60.0, 45.0), "nest");
        }
        scenery(&registry, &mut ids, layout.egg_barn, (100.0, 80.0), "barn");
        // Second barn drawn just west of the dry-goods bay.
        let dry_barn = (layout.dry_bay.0 - 110.0, layout.dry_bay.1);
        scenery(&registry, &mut ids, dry_barn, (100.0, 80.0), "barn");
        scenery(&registry, &mut ids, (550.0, 150.0), (120.0, 100.0), "bakery");
        scenery(&registry, &mut ids, layout.counter, (60.0, 40.0), "shop");
        let road_mid = (
            (layout.road_out_start.0 + layout.road_out_end.0) * 0.5,
            (layout.road_out_start.1 + layout.road_in_start.1) * 0.5,
        );
        scenery(&registry, &mut ids, road_mid, (60.0, 60.0), "crossing");

        // Display slots: one egg row per nest, four ingredient rows and the
        // cake shelf at the bakery.  Row capacities are validated here, at
        // build time.
        let mut nest_eggs = Vec::with_capacity(layout.nests.len());
        for &(nx, ny) in &layout.nests {
            nest_eggs.push(ids.slot_row(
                NEST_CAPACITY as usize,
                (nx - 25.0, ny - 40.0),
                25.0,
                "egg",
                NEST_CAPACITY as usize,
            )?);
        }
        let per_kind = PANTRY_CAPACITY as usize;
        let pantry_slots = PantrySlots {
            eggs:   ids.slot_row(per_kind, (495.0, 110.0), 22.0, "egg", per_kind)?,
            butter: ids.slot_row(per_kind, (495.0, 135.0), 22.0, "butter", per_kind)?,
            flour:  ids.slot_row(per_kind, (495.0, 160.0), 22.0, "flour", per_kind)?,
            sugar:  ids.slot_row(per_kind, (495.0, 185.0), 22.0, "sugar", per_kind)?,
        };
        // The shelf must hold a full two-bake stock (gate 3 + yield 3).
        let cakes = ids.slot_row(6, (495.0, 215.0), 22.0, "cake", 6)?;

        // Stages.  The first nest starts with a random egg count so the
        // farmer has something to do before the first lay.
        let nests: Vec<Arc<Nest>> = layout.nests.iter().map(|_| Arc::new(Nest::new())).collect();
        let initial_eggs: u8 = build_rng.gen_range(0..=NEST_CAPACITY);
        if let Some(first) = nests.first() {
            first.seed_eggs(initial_eggs);
        }
        let stages = Stages {
            nests,
            barn:         Arc::new(Barn::new()),
            pantry:       Arc::new(Pantry::new()),
            oven:         Arc::new(Oven::new()),
            intersection: Arc::new(Intersection::new()),
            shop:         Arc::new(ShopQueue::new()),
            stats:        Arc::new(StatsBoard::new()),
        };

        let slots = FarmSlots { nest_eggs, pantry: pantry_slots, cakes };
        slots.nest_eggs[0].sync(initial_eggs as usize, &registry);

        // Roster: one record per mobile agent, registered at its spawn spot.
        let mut roster = Vec::new();
        let actor = |reg: &SpatialRegistry,
                         roster: &mut Vec<AgentSpec>,
                         ids: &mut IdAlloc,
                         kind: AgentKind,
                         role: Role,
                         speed: f32,
                         (x, y): (f32, f32)| {
            let id = ids.next();
            reg.register(id, Placement::new(kind.bbox_at(x, y), Layer::Actors, kind.texture()));
            roster.push(AgentSpec { id, kind, role, speed });
        };
        actor(
            &registry,
            &mut roster,
            &mut ids,
            AgentKind::Farmer,
            Role::Farmer,
            config.person_speed,
            FARMER_SPAWN,
        );
        for (pos, role) in TRUCK_SPAWNS
            .iter()
            .zip([TruckRole::EggButter, TruckRole::FlourSugar])
        {
            actor(
                &registry,
                &mut roster,
                &mut ids,
                AgentKind::Truck,
                Role::Truck(role),
                config.truck_speed,
                *pos,
            );
        }
        for &pos in CHICKEN_SPAWNS.iter().take(config.chickens) {
            actor(
                &registry,
                &mut roster,
                &mut ids,
                AgentKind::Chicken,
                Role::Chicken,
                config.chicken_speed,
                pos,
            );
        }
        for &pos in CHILD_SPAWNS.iter().take(config.children) {
            actor(
                &registry,
                &mut roster,
                &mut ids,
                AgentKind::Child,
                Role::Child,
                config.person_speed,
                pos,
            );
        }
        for &pos in COW_SPAWNS.iter().take(config.cows) {
            actor(&registry, &mut roster, &mut ids, AgentKind::Cow, Role::Cow, 0.0, pos);
        }

        let pacing = config.pacing.clone();
        let farm = Arc::new(Farm { registry, nav, stages, slots, layout, pacing });
        snapshot.publish(&farm.registry);

        info!(
            agents = roster.len(),
            entities = farm.registry.len(),
            initial_eggs,
            "world built"
        );
        Ok(World { farm, snapshot, roster, config })
    }
}
