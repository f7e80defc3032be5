//! Unit tests for the resource stages.
//!
//! Blocking protocols are exercised with real threads and short sleeps; every
//! unbounded wait in a test is guaranteed satisfiable before the join.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use farm_core::{AgentId, AgentRng};

const SHORT: Duration = Duration::from_millis(50);

#[cfg(test)]
mod nest {
    use super::*;
    use crate::{Nest, NEST_CAPACITY};

    #[test]
    fn occupy_lay_release() {
        let nest = Nest::new();
        let hen = AgentId(1);
        let mut rng = AgentRng::new(42, hen);

        assert!(nest.try_occupy(hen, SHORT));
        let outcome = nest.lay(hen, &mut rng);
        assert!((1..=3).contains(&outcome.laid));
        assert_eq!(outcome.eggs, outcome.laid);
        nest.release(hen);
        assert_eq!(nest.occupant(), None);
    }

    #[test]
    fn lay_clamps_to_capacity() {
        let nest = Nest::new();
        let hen = AgentId(1);
        let mut rng = AgentRng::new(42, hen);

        nest.seed_eggs(2);
        assert!(nest.try_occupy(hen, SHORT));
        let outcome = nest.lay(hen, &mut rng);
        assert!(outcome.laid <= 1);
        assert!(outcome.eggs <= NEST_CAPACITY);
        nest.release(hen);
    }

    #[test]
    fn lay_at_full_nest_is_zero_and_succeeds() {
        let nest = Nest::new();
        let hen = AgentId(1);
        let mut rng = AgentRng::new(42, hen);

        nest.seed_eggs(NEST_CAPACITY);
        assert!(nest.try_occupy(hen, SHORT));
        let outcome = nest.lay(hen, &mut rng);
        assert_eq!(outcome.laid, 0);
        assert_eq!(outcome.eggs, NEST_CAPACITY);
        nest.release(hen);
        assert_eq!(nest.occupant(), None, "occupancy released after no-op lay");
    }

    #[test]
    fn second_occupier_times_out() {
        let nest = Nest::new();
        assert!(nest.try_occupy(AgentId(1), SHORT));
        assert!(!nest.try_occupy(AgentId(2), Duration::from_millis(20)));
        // Holder re-entering its own occupancy is fine.
        assert!(nest.try_occupy(AgentId(1), SHORT));
    }

    #[test]
    fn collect_times_out_on_empty_nest() {
        let nest = Nest::new();
        assert_eq!(nest.collect(Duration::from_millis(20)), None);
    }

    #[test]
    fn collect_waits_out_occupancy() {
        let nest = Arc::new(Nest::new());
        nest.seed_eggs(2);
        assert!(nest.try_occupy(AgentId(1), SHORT));

        let hen_nest = Arc::clone(&nest);
        let hen = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            hen_nest.release(AgentId(1));
        });

        // Blocked while occupied, succeeds once released.
        let collected = nest.collect(Duration::from_secs(2));
        assert_eq!(collected, Some(2));
        assert_eq!(nest.eggs(), 0);
        hen.join().unwrap();
    }
}

#[cfg(test)]
mod barn {
    use super::*;
    use crate::{Barn, Goods};

    #[test]
    fn exact_three_eggs_loads_to_zero() {
        let barn = Barn::new();
        barn.deposit(3);
        let cargo = barn.load_eggs_and_butter();
        assert_eq!(cargo, Goods::eggs_and_butter(3));
        assert_eq!(barn.eggs(), 0);
    }

    #[test]
    fn load_blocks_until_enough_eggs() {
        let barn = Arc::new(Barn::new());
        barn.deposit(1);

        let farmer_barn = Arc::clone(&barn);
        let farmer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            farmer_barn.deposit(2);
        });

        let cargo = barn.load_eggs_and_butter();
        assert_eq!(cargo.eggs, 3);
        assert_eq!(cargo.butter, 3);
        assert_eq!(barn.eggs(), 0);
        farmer.join().unwrap();
    }

    #[test]
    fn dry_goods_load_is_unconditional() {
        // No upstream counter, no gate — deliberately asymmetric.
        let cargo = Barn::load_flour_and_sugar();
        assert_eq!(cargo, Goods::flour_and_sugar(3));
    }
}

#[cfg(test)]
mod pantry {
    use super::*;
    use crate::{Goods, Pantry, PANTRY_CAPACITY};

    #[test]
    fn deliver_accumulates_within_cap() {
        let pantry = Pantry::new();
        let levels = pantry.deliver(Goods::eggs_and_butter(3));
        assert_eq!((levels.eggs, levels.butter), (3, 3));
        let levels = pantry.deliver(Goods::flour_and_sugar(3));
        assert_eq!((levels.flour, levels.sugar), (3, 3));
    }

    #[test]
    fn delivery_blocks_at_cap_until_batch_taken() {
        let pantry = Arc::new(Pantry::new());
        pantry.deliver(Goods::eggs_and_butter(3));
        pantry.deliver(Goods::eggs_and_butter(2));
        pantry.deliver(Goods::flour_and_sugar(2));
        assert_eq!(pantry.levels().eggs, 5);

        let oven_pantry = Arc::clone(&pantry);
        let oven = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            oven_pantry.take_batch(2);
        });

        // 5 + 3 > 6: must wait for the bake batch to free room.
        let levels = pantry.deliver(Goods::eggs_and_butter(3));
        assert_eq!(levels.eggs, PANTRY_CAPACITY); // 5 - 2 + 3
        assert_eq!(levels.flour, 0);
        oven.join().unwrap();
    }

    #[test]
    fn take_batch_waits_for_all_four_kinds() {
        let pantry = Arc::new(Pantry::new());
        pantry.deliver(Goods::eggs_and_butter(2));

        let truck_pantry = Arc::clone(&pantry);
        let truck = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            truck_pantry.deliver(Goods::flour_and_sugar(2));
        });

        let levels = pantry.take_batch(2);
        assert_eq!(levels, crate::PantryLevels::default());
        truck.join().unwrap();
    }
}

#[cfg(test)]
mod oven {
    use super::*;
    use crate::{Goods, Oven, Pantry, BAKE_BATCH_UNITS, BAKE_CAKE_GATE, BAKE_YIELD};

    /// One manual bake cycle as the oven worker performs it.
    fn bake_once(oven: &Oven, pantry: &Pantry) {
        oven.wait_for_bake_slot();
        pantry.take_batch(BAKE_BATCH_UNITS);
        oven.begin_bake();
        // Bake time elapses with no locks held.
        thread::sleep(Duration::from_millis(5));
        oven.finish_bake();
    }

    #[test]
    fn boundary_cycle_at_cake_gate() {
        // Pantry {2,2,2,2}, cakes = 3: the gate (cakes <= 3) is satisfied at
        // the boundary; the cycle consumes to {0,0,0,0} and yields 3 more.
        let oven = Oven::new();
        let pantry = Pantry::new();
        pantry.deliver(Goods::eggs_and_butter(2));
        pantry.deliver(Goods::flour_and_sugar(2));
        oven.begin_bake();
        oven.finish_bake();
        assert_eq!(oven.cakes(), BAKE_CAKE_GATE);

        bake_once(&oven, &pantry);
        assert_eq!(pantry.levels(), crate::PantryLevels::default());
        assert_eq!(oven.cakes(), BAKE_CAKE_GATE + BAKE_YIELD);
        assert!(!oven.is_busy());
    }

    #[test]
    fn bake_slot_blocks_above_gate() {
        let oven = Arc::new(Oven::new());
        // Two bakes back to back: 6 cakes — above the gate.
        oven.begin_bake();
        oven.finish_bake();
        oven.begin_bake();
        oven.finish_bake();
        assert_eq!(oven.cakes(), 2 * BAKE_YIELD);

        let worker_oven = Arc::clone(&oven);
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || {
            worker_oven.wait_for_bake_slot();
            tx.send(()).unwrap();
        });

        // Not signalled while stock is above the gate.
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());

        // A sale drops stock to 3 == gate: worker wakes.
        oven.take_cakes(3);
        assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());
        worker.join().unwrap();
    }

    #[test]
    fn take_cakes_is_partial() {
        let oven = Oven::new();
        oven.begin_bake();
        oven.finish_bake(); // stock 3
        assert_eq!(oven.take_cakes(2), 2);
        assert_eq!(oven.take_cakes(5), 1, "only what is in stock");
        assert_eq!(oven.cakes(), 0);
    }

    #[test]
    fn six_cake_purchase_completes_after_replenishment() {
        // A shopper wants 6; stock is 2.  The purchase loop finishes only
        // after two more bakes, and the total taken is exactly 6.
        let oven = Arc::new(Oven::new());
        oven.begin_bake();
        oven.finish_bake();
        assert_eq!(oven.take_cakes(1), 1); // stock 2

        let shopper_oven = Arc::clone(&oven);
        let shopper = thread::spawn(move || {
            let mut remaining = 6u32;
            let mut total = 0u32;
            while remaining > 0 {
                let taken = shopper_oven.take_cakes(remaining);
                remaining -= taken;
                total += taken;
            }
            total
        });

        for _ in 0..2 {
            thread::sleep(Duration::from_millis(20));
            oven.begin_bake();
            oven.finish_bake();
        }

        assert_eq!(shopper.join().unwrap(), 6);
        assert_eq!(oven.cakes(), 2); // 2 + 3 + 3 - 6
    }
}

#[cfg(test)]
mod intersection {
    use super::*;
    use crate::Intersection;

    #[test]
    fn exclusive_occupancy() {
        let isect = Intersection::new();
        isect.enter(AgentId(1));
        assert_eq!(isect.current(), Some(AgentId(1)));
        isect.leave(AgentId(1));
        assert_eq!(isect.current(), None);
    }

    #[test]
    fn grants_follow_arrival_order() {
        let isect = Arc::new(Intersection::new());
        isect.enter(AgentId(0)); // lane held; later arrivals must queue

        let (tx, rx) = mpsc::channel();
        let mut workers = Vec::new();
        for truck in [AgentId(1), AgentId(2), AgentId(3)] {
            // Ensure deterministic arrival order before spawning the next.
            let before = isect.waiting();
            let worker_isect = Arc::clone(&isect);
            let tx = tx.clone();
            workers.push(thread::spawn(move || {
                worker_isect.enter(truck);
                tx.send(truck).unwrap();
                thread::sleep(Duration::from_millis(10));
                worker_isect.leave(truck);
            }));
            while isect.waiting() == before {
                thread::sleep(Duration::from_millis(1));
            }
        }

        isect.leave(AgentId(0));
        let granted: Vec<AgentId> = (0..3)
            .map(|_| rx.recv_timeout(Duration::from_secs(2)).unwrap())
            .collect();
        assert_eq!(granted, vec![AgentId(1), AgentId(2), AgentId(3)]);
        for w in workers {
            w.join().unwrap();
        }
    }
}

#[cfg(test)]
mod shop {
    use super::*;
    use crate::ShopQueue;

    #[test]
    fn one_shopper_at_a_time() {
        let shop = Arc::new(ShopQueue::new());
        shop.enter(AgentId(1));
        assert_eq!(shop.current(), Some(AgentId(1)));

        let second_shop = Arc::clone(&shop);
        let (tx, rx) = mpsc::channel();
        let second = thread::spawn(move || {
            second_shop.enter(AgentId(2));
            tx.send(()).unwrap();
            second_shop.leave(AgentId(2));
        });

        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
        shop.leave(AgentId(1));
        assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());
        second.join().unwrap();
    }

    #[test]
    fn line_positions_reported() {
        let shop = Arc::new(ShopQueue::new());
        shop.enter(AgentId(1)); // at the counter, not in line

        let waiter_shop = Arc::clone(&shop);
        let waiter = thread::spawn(move || {
            waiter_shop.enter(AgentId(2));
            waiter_shop.leave(AgentId(2));
        });
        while shop.waiting() == 0 {
            thread::sleep(Duration::from_millis(1));
        }

        assert_eq!(shop.position(AgentId(2)), Some(0));
        assert_eq!(shop.position(AgentId(9)), None);
        shop.leave(AgentId(1));
        waiter.join().unwrap();
    }
}

#[cfg(test)]
mod slots {
    use super::*;
    use crate::DisplaySlots;
    use farm_core::FarmError;
    use farm_spatial::SpatialRegistry;

    fn row(n: usize) -> (Vec<AgentId>, Vec<(f32, f32)>) {
        let ids = (100..100 + n as u32).map(AgentId).collect();
        let positions = (0..n).map(|i| (500.0 + 20.0 * i as f32, 110.0)).collect();
        (ids, positions)
    }

    #[test]
    fn undersized_array_fails_construction() {
        let (ids, positions) = row(3);
        let err = DisplaySlots::new(ids, positions, "cake", 6).unwrap_err();
        assert!(matches!(
            err,
            FarmError::DisplaySlotsTooSmall { capacity: 3, required: 6 }
        ));
    }

    #[test]
    fn sync_publishes_exactly_shown_slots() {
        let registry = SpatialRegistry::new();
        let (ids, positions) = row(6);
        let slots = DisplaySlots::new(ids.clone(), positions, "cake", 6).unwrap();

        slots.sync(4, &registry);
        assert_eq!(registry.len(), 4);
        assert!(registry.get(ids[3]).is_some());
        assert!(registry.get(ids[4]).is_none());

        slots.sync(1, &registry);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(ids[0]).is_some());
    }
}

#[cfg(test)]
mod stats {
    use crate::StatsBoard;

    #[test]
    fn counters_accumulate_monotonically() {
        let board = StatsBoard::new();
        board.record_eggs_laid(3);
        board.record_eggs_laid(2);
        board.record_cakes_sold(6);
        let s = board.read();
        assert_eq!(s.eggs_laid, 5);
        assert_eq!(s.cakes_sold, 6);
        assert_eq!(s.flour_used, 0);
    }

    #[test]
    fn dump_lists_every_counter() {
        let board = StatsBoard::new();
        board.record_cakes_produced(3);
        let text = board.read().to_string();
        assert!(text.contains("cakes_produced:   3"));
        assert!(text.contains("eggs_laid:        0"));
    }
}
