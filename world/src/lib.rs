#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Lawn Defence.
//!
//! The world owns every entity pool, the occupancy grid, the sun economy, and
//! the run clock. All mutation flows through [`apply`], which validates each
//! [`Command`] and broadcasts [`Event`] values describing what actually
//! happened. Read access goes through the [`query`] module.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use lawn_defence_core::{
    CardSlot, CollectRejection, Command, Event, GridCoord, Health, KillCause, Mode, MowerState,
    PlacementRejection, PlantId, PlantKind, ProjectileId, RunOutcome, RunState,
    SelectionRejection, SunId, SunOrigin, ZombieId, ZombieKind, WELCOME_BANNER,
};

mod economy;
mod plants;

use economy::CardTray;
use plants::{OccupancyGrid, PlantArena};

const DEFAULT_LAWN_COLUMNS: u32 = 9;
const DEFAULT_LAWN_ROWS: u32 = 5;

const OPENING_BALANCE: u32 = 50;
const SUN_VALUE: u32 = 25;

// Horizontal distances are measured in columns, vertical ones in rows.
const PLANT_HALF_WIDTH: f32 = 0.375;
const ZOMBIE_HALF_WIDTH: f32 = 0.3;
const PROJECTILE_HALF_WIDTH: f32 = 0.125;
const MOWER_HALF_WIDTH: f32 = 0.35;

const ZOMBIE_SPAWN_X: f32 = 9.75;
const BOUNDARY_X: f32 = -1.375;

// The bite probe reaches ahead of the zombie toward the house.
const BITE_PROBE_NEAR: f32 = 0.125;
const BITE_PROBE_FAR: f32 = 0.375;

const PROJECTILE_SPEED: f32 = 4.5;
const PROJECTILE_DAMAGE: u32 = 20;
const PROJECTILE_EXIT_X: f32 = 10.4;
const MUZZLE_OFFSET: f32 = 0.3125;

const MOWER_HOME_X: f32 = -0.875;
const MOWER_TRIGGER_X: f32 = -0.1875;
const MOWER_SPEED: f32 = 7.0;
const MOWER_EXIT_X: f32 = 10.5;

const SKY_SUN_SPAWN_Y: f32 = -2.0;
const SKY_SUN_FALL_ACCEL: f32 = 10.0;
const SKY_SUN_MAX_FALL_SPEED: f32 = 6.5;
const SKY_SUN_DRIFT: f32 = -0.25;
const SKY_SUN_LIFETIME_SECS: f32 = 11.0;

const PLANT_SUN_DRIFT: f32 = -0.9;
const PLANT_SUN_LIFETIME_SECS: f32 = 9.0;
const PLANT_SUN_X_JITTER: f32 = 0.125;
const PLANT_SUN_Y_OFFSET: f32 = -0.1;

const PLANT_RNG_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Describes the rectangular lawn the run is played on.
#[derive(Debug)]
pub struct Lawn {
    columns: u32,
    rows: u32,
}

impl Lawn {
    pub(crate) const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of plantable columns, counted from the house side.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of lanes. Zombies never change lanes.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the cell lies on the lawn.
    #[must_use]
    pub const fn contains(&self, cell: GridCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ZombieBehavior {
    Walking,
    Eating { plant: PlantId, pending_bite: f32 },
}

#[derive(Clone, Debug)]
struct Zombie {
    id: ZombieId,
    kind: ZombieKind,
    lane: u32,
    x: f32,
    speed: f32,
    health: Health,
    behavior: ZombieBehavior,
    crossed: bool,
}

#[derive(Clone, Copy, Debug)]
struct Projectile {
    id: ProjectileId,
    lane: u32,
    x: f32,
}

#[derive(Clone, Copy, Debug)]
enum SunMotion {
    Falling { velocity: f32, target_y: f32 },
    Floating { drift: f32 },
}

#[derive(Clone, Copy, Debug)]
struct SunDrop {
    id: SunId,
    x: f32,
    y: f32,
    value: u32,
    remaining: f32,
    motion: SunMotion,
}

#[derive(Clone, Copy, Debug)]
struct Mower {
    lane: u32,
    x: f32,
    state: MowerState,
}

/// Zombie overlapped by a projectile's sweep, ordered nearest-first.
#[derive(Clone, Copy, Debug)]
struct BestHit {
    x: f32,
    id: ZombieId,
    index: usize,
}

impl BestHit {
    fn precedes(&self, other: &Self) -> bool {
        if self.x < other.x {
            return true;
        }
        if self.x > other.x {
            return false;
        }
        self.id < other.id
    }
}

/// Represents the authoritative Lawn Defence world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    mode: Mode,
    run_state: RunState,
    elapsed: Duration,
    lawn: Lawn,
    plants: PlantArena,
    occupancy: OccupancyGrid,
    tray: CardTray,
    zombies: Vec<Zombie>,
    projectiles: Vec<Projectile>,
    suns: Vec<SunDrop>,
    mowers: Vec<Mower>,
    next_zombie: u32,
    next_projectile: u32,
    next_sun: u32,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates a new Lawn Defence world ready for simulation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(Mode::Adventure)
    }

    fn with_mode(mode: Mode) -> Self {
        let lawn = Lawn::new(DEFAULT_LAWN_COLUMNS, DEFAULT_LAWN_ROWS);
        let mowers = (0..lawn.rows())
            .map(|lane| Mower {
                lane,
                x: MOWER_HOME_X,
                state: MowerState::Idle,
            })
            .collect();
        Self {
            banner: WELCOME_BANNER,
            mode,
            run_state: RunState::Playing,
            elapsed: Duration::ZERO,
            plants: PlantArena::new(),
            occupancy: OccupancyGrid::new(lawn.columns(), lawn.rows()),
            tray: CardTray::new(OPENING_BALANCE),
            zombies: Vec::new(),
            projectiles: Vec::new(),
            suns: Vec::new(),
            mowers,
            next_zombie: 0,
            next_projectile: 0,
            next_sun: 0,
            rng: ChaCha8Rng::seed_from_u64(PLANT_RNG_SEED),
            lawn,
        }
    }

    fn reset(&mut self, mode: Mode, out_events: &mut Vec<Event>) {
        *self = Self::with_mode(mode);
        out_events.push(Event::RunStarted { mode });
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        if self.run_state != RunState::Playing {
            return;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        out_events.push(Event::TimeAdvanced { dt });

        if self.elapsed >= self.mode.duration() {
            self.run_state = RunState::Won;
            out_events.push(Event::RunEnded {
                outcome: RunOutcome::Won,
            });
            return;
        }

        let dt_secs = dt.as_secs_f32();
        self.tray.advance_timers(dt_secs);
        self.advance_suns(dt_secs, out_events);
        self.plants.advance_timers(dt_secs);
        self.advance_projectiles(dt_secs, out_events);
        self.advance_zombies(dt_secs, out_events);
        self.advance_mowers(dt_secs, out_events);
        self.reap_zombies();
    }

    fn advance_suns(&mut self, dt_secs: f32, out_events: &mut Vec<Event>) {
        for sun in &mut self.suns {
            sun.remaining -= dt_secs;
            match &mut sun.motion {
                SunMotion::Falling { velocity, target_y } => {
                    *velocity = (*velocity + SKY_SUN_FALL_ACCEL * dt_secs).min(SKY_SUN_MAX_FALL_SPEED);
                    sun.y += *velocity * dt_secs;
                    if sun.y >= *target_y {
                        sun.y = *target_y;
                        sun.motion = SunMotion::Floating {
                            drift: SKY_SUN_DRIFT,
                        };
                    }
                }
                SunMotion::Floating { drift } => {
                    sun.y += *drift * dt_secs;
                }
            }
        }

        self.suns.retain(|sun| {
            if sun.remaining > 0.0 {
                return true;
            }
            out_events.push(Event::SunExpired { sun: sun.id });
            false
        });
    }

    fn advance_projectiles(&mut self, dt_secs: f32, out_events: &mut Vec<Event>) {
        let World {
            projectiles,
            zombies,
            ..
        } = self;

        let mut index = 0;
        while index < projectiles.len() {
            let (id, lane, previous_x, new_x) = {
                let projectile = &mut projectiles[index];
                let previous_x = projectile.x;
                projectile.x += PROJECTILE_SPEED * dt_secs;
                (projectile.id, projectile.lane, previous_x, projectile.x)
            };

            // The sweep covers the whole step so fast projectiles cannot
            // pass through a zombie between frames.
            let hull_min = previous_x - PROJECTILE_HALF_WIDTH;
            let hull_max = new_x + PROJECTILE_HALF_WIDTH;

            let mut best: Option<BestHit> = None;
            for (zombie_index, zombie) in zombies.iter().enumerate() {
                if zombie.lane != lane || zombie.health.is_zero() || zombie.crossed {
                    continue;
                }
                let zombie_min = zombie.x - ZOMBIE_HALF_WIDTH;
                let zombie_max = zombie.x + ZOMBIE_HALF_WIDTH;
                if hull_min < zombie_max && zombie_min < hull_max {
                    let candidate = BestHit {
                        x: zombie.x,
                        id: zombie.id,
                        index: zombie_index,
                    };
                    if best.map_or(true, |current| candidate.precedes(&current)) {
                        best = Some(candidate);
                    }
                }
            }

            if let Some(hit) = best {
                let zombie = &mut zombies[hit.index];
                zombie.health = zombie.health.saturating_sub(PROJECTILE_DAMAGE);
                out_events.push(Event::ProjectileHit {
                    projectile: id,
                    zombie: zombie.id,
                });
                if zombie.health.is_zero() {
                    out_events.push(Event::ZombieKilled {
                        zombie: zombie.id,
                        cause: KillCause::Projectile,
                    });
                }
                let _ = projectiles.remove(index);
                continue;
            }

            if new_x > PROJECTILE_EXIT_X {
                out_events.push(Event::ProjectileExpired { projectile: id });
                let _ = projectiles.remove(index);
                continue;
            }

            index += 1;
        }
    }

    fn advance_zombies(&mut self, dt_secs: f32, out_events: &mut Vec<Event>) {
        let World {
            zombies,
            plants,
            occupancy,
            mowers,
            run_state,
            lawn,
            ..
        } = self;

        for zombie in zombies.iter_mut() {
            if zombie.health.is_zero() {
                continue;
            }

            // Chew on the bound plant; a stale handle means it died and the
            // zombie resumes walking this same frame.
            let bound = match zombie.behavior {
                ZombieBehavior::Eating { plant, .. } => Some(plant),
                ZombieBehavior::Walking => None,
            };
            if let Some(target) = bound {
                let mut destroyed: Option<(PlantId, PlantKind, GridCoord)> = None;
                let mut chewing = false;

                if let Some(state) = plants.get_mut(target) {
                    chewing = true;
                    let dps = zombie.kind.bite_damage_per_sec();
                    if let ZombieBehavior::Eating { pending_bite, .. } = &mut zombie.behavior {
                        *pending_bite += dps * dt_secs;
                        let whole = *pending_bite as u32;
                        if whole > 0 {
                            *pending_bite -= whole as f32;
                            state.health = state.health.saturating_sub(whole);
                        }
                    }
                    if state.health.is_zero() {
                        destroyed = Some((state.id, state.kind, state.cell));
                    }
                }

                if let Some((plant, kind, cell)) = destroyed {
                    let _ = plants.remove(plant);
                    occupancy.vacate(cell);
                    out_events.push(Event::PlantDied { plant, kind, cell });
                    zombie.behavior = ZombieBehavior::Walking;
                }

                if chewing {
                    continue;
                }

                zombie.behavior = ZombieBehavior::Walking;
            }

            zombie.x -= zombie.speed * dt_secs;

            if zombie.x < MOWER_TRIGGER_X {
                if let Some(mower) = mowers.get_mut(zombie.lane as usize) {
                    if mower.state == MowerState::Idle {
                        mower.state = MowerState::Sweeping;
                        out_events.push(Event::MowerTriggered { lane: zombie.lane });
                    }
                }
            }

            if zombie.x < BOUNDARY_X {
                zombie.crossed = true;
                if *run_state == RunState::Playing {
                    *run_state = RunState::Lost;
                    out_events.push(Event::RunEnded {
                        outcome: RunOutcome::Lost,
                    });
                }
                continue;
            }

            // Probe ahead for a plant to start eating next frame. Columns are
            // scanned house-first so the nearest blocker binds.
            let probe_min = zombie.x - BITE_PROBE_FAR;
            let probe_max = zombie.x - BITE_PROBE_NEAR;
            for column in 0..lawn.columns() {
                let cell = GridCoord::new(column, zombie.lane);
                if let Some(plant) = occupancy.plant_at(cell) {
                    let center = cell.center_x();
                    let plant_min = center - PLANT_HALF_WIDTH;
                    let plant_max = center + PLANT_HALF_WIDTH;
                    if probe_min < plant_max && plant_min < probe_max {
                        zombie.behavior = ZombieBehavior::Eating {
                            plant,
                            pending_bite: 0.0,
                        };
                        break;
                    }
                }
            }
        }

        // A plant killed mid-pass leaves earlier-updated zombies bound to a
        // stale handle; clear them before the frame is observed.
        for zombie in zombies.iter_mut() {
            if let ZombieBehavior::Eating { plant, .. } = zombie.behavior {
                if plants.get(plant).is_none() {
                    zombie.behavior = ZombieBehavior::Walking;
                }
            }
        }
    }

    fn advance_mowers(&mut self, dt_secs: f32, out_events: &mut Vec<Event>) {
        let World {
            mowers, zombies, ..
        } = self;

        for mower in mowers.iter_mut() {
            if mower.state != MowerState::Sweeping {
                continue;
            }

            let previous_x = mower.x;
            mower.x += MOWER_SPEED * dt_secs;

            // Sweep hull spans the whole step so no zombie is skipped over.
            let hull_min = previous_x - MOWER_HALF_WIDTH;
            let hull_max = mower.x + MOWER_HALF_WIDTH;
            for zombie in zombies.iter_mut() {
                if zombie.lane != mower.lane || zombie.health.is_zero() || zombie.crossed {
                    continue;
                }
                let zombie_min = zombie.x - ZOMBIE_HALF_WIDTH;
                let zombie_max = zombie.x + ZOMBIE_HALF_WIDTH;
                if hull_min < zombie_max && zombie_min < hull_max {
                    zombie.health = Health::new(0);
                    out_events.push(Event::ZombieKilled {
                        zombie: zombie.id,
                        cause: KillCause::Mower,
                    });
                }
            }

            if mower.x > MOWER_EXIT_X {
                mower.state = MowerState::Spent;
                out_events.push(Event::MowerSpent { lane: mower.lane });
            }
        }
    }

    fn reap_zombies(&mut self) {
        self.zombies
            .retain(|zombie| !zombie.health.is_zero() && !zombie.crossed);
    }

    fn select_card(&mut self, slot: CardSlot, out_events: &mut Vec<Event>) {
        if self.run_state != RunState::Playing {
            out_events.push(Event::CardSelectionRejected {
                slot,
                reason: SelectionRejection::RunEnded,
            });
            return;
        }

        if self.tray.selected() == Some(slot) {
            self.tray.clear_selection();
            out_events.push(Event::CardDeselected { slot });
            return;
        }

        let (ready, cost) = match self.tray.card(slot) {
            Some(card) => (card.ready(), card.kind().cost()),
            None => {
                out_events.push(Event::CardSelectionRejected {
                    slot,
                    reason: SelectionRejection::UnknownSlot,
                });
                return;
            }
        };

        if !ready {
            out_events.push(Event::CardSelectionRejected {
                slot,
                reason: SelectionRejection::OnCooldown,
            });
            return;
        }

        if self.tray.bank().balance() < cost {
            out_events.push(Event::CardSelectionRejected {
                slot,
                reason: SelectionRejection::Unaffordable,
            });
            return;
        }

        self.tray.select(slot);
        out_events.push(Event::CardSelected { slot });
    }

    fn place_selected(&mut self, cell: GridCoord, out_events: &mut Vec<Event>) {
        if self.run_state != RunState::Playing {
            out_events.push(Event::PlantPlacementRejected {
                cell,
                reason: PlacementRejection::RunEnded,
            });
            return;
        }

        let Some(slot) = self.tray.selected() else {
            out_events.push(Event::PlantPlacementRejected {
                cell,
                reason: PlacementRejection::NoSelection,
            });
            return;
        };

        if !self.lawn.contains(cell) {
            out_events.push(Event::PlantPlacementRejected {
                cell,
                reason: PlacementRejection::OutOfBounds,
            });
            return;
        }

        if !self.occupancy.is_vacant(cell) {
            out_events.push(Event::PlantPlacementRejected {
                cell,
                reason: PlacementRejection::Occupied,
            });
            return;
        }

        let (kind, ready) = match self.tray.card(slot) {
            Some(card) => (card.kind(), card.ready()),
            None => {
                self.tray.clear_selection();
                out_events.push(Event::PlantPlacementRejected {
                    cell,
                    reason: PlacementRejection::NoSelection,
                });
                return;
            }
        };

        if !ready {
            out_events.push(Event::PlantPlacementRejected {
                cell,
                reason: PlacementRejection::OnCooldown,
            });
            return;
        }

        if !self.tray.bank_mut().try_spend(kind.cost()) {
            out_events.push(Event::PlantPlacementRejected {
                cell,
                reason: PlacementRejection::Unaffordable,
            });
            return;
        }

        // Spending succeeded, so the rest of the placement is unconditional.
        let action_in = match kind.initial_delay_band_secs() {
            Some((low, high)) => self.rng.gen_range(low..high),
            None => 0.0,
        };
        let plant = self.plants.insert(kind, cell, action_in);
        self.occupancy.occupy(plant, cell);
        if let Some(card) = self.tray.card_mut(slot) {
            card.start_recharge();
        }
        self.tray.clear_selection();
        out_events.push(Event::PlantPlaced { plant, kind, cell });
    }

    fn collect_sun(&mut self, sun: SunId, out_events: &mut Vec<Event>) {
        if self.run_state != RunState::Playing {
            out_events.push(Event::SunCollectionRejected {
                sun,
                reason: CollectRejection::RunEnded,
            });
            return;
        }

        let Some(position) = self.suns.iter().position(|drop| drop.id == sun) else {
            out_events.push(Event::SunCollectionRejected {
                sun,
                reason: CollectRejection::UnknownSun,
            });
            return;
        };

        let drop = self.suns.remove(position);
        self.tray.bank_mut().deposit(drop.value);
        out_events.push(Event::SunCollected {
            sun: drop.id,
            value: drop.value,
            balance: self.tray.bank().balance(),
        });
    }

    fn spawn_zombie(
        &mut self,
        kind: ZombieKind,
        lane: u32,
        speed: f32,
        out_events: &mut Vec<Event>,
    ) {
        if self.run_state != RunState::Playing || lane >= self.lawn.rows() {
            return;
        }

        let id = ZombieId::new(self.next_zombie);
        self.next_zombie = self.next_zombie.wrapping_add(1);
        self.zombies.push(Zombie {
            id,
            kind,
            lane,
            x: ZOMBIE_SPAWN_X,
            speed,
            health: kind.max_health(),
            behavior: ZombieBehavior::Walking,
            crossed: false,
        });
        out_events.push(Event::ZombieSpawned {
            zombie: id,
            kind,
            lane,
        });
    }

    fn drop_sun(&mut self, x: f32, target_y: f32, out_events: &mut Vec<Event>) {
        if self.run_state != RunState::Playing {
            return;
        }

        let id = SunId::new(self.next_sun);
        self.next_sun = self.next_sun.wrapping_add(1);
        self.suns.push(SunDrop {
            id,
            x,
            y: SKY_SUN_SPAWN_Y,
            value: SUN_VALUE,
            remaining: SKY_SUN_LIFETIME_SECS,
            motion: SunMotion::Falling {
                velocity: 0.0,
                target_y,
            },
        });
        out_events.push(Event::SunSpawned {
            sun: id,
            origin: SunOrigin::Sky,
        });
    }

    fn fire_projectile(&mut self, plant: PlantId, out_events: &mut Vec<Event>) {
        if self.run_state != RunState::Playing {
            return;
        }

        // Stale or unready requests are dropped without effect.
        let (lane, x) = {
            let Some(state) = self.plants.get_mut(plant) else {
                return;
            };
            if state.kind != PlantKind::Peashooter || state.action_in > 0.0 {
                return;
            }
            let Some(interval) = state.kind.action_interval_secs() else {
                return;
            };
            state.action_in = interval;
            (state.cell.row(), state.cell.center_x() + MUZZLE_OFFSET)
        };

        let id = ProjectileId::new(self.next_projectile);
        self.next_projectile = self.next_projectile.wrapping_add(1);
        self.projectiles.push(Projectile { id, lane, x });
        out_events.push(Event::ProjectileFired {
            projectile: id,
            plant,
            lane,
        });
    }

    fn produce_sun(&mut self, plant: PlantId, out_events: &mut Vec<Event>) {
        if self.run_state != RunState::Playing {
            return;
        }

        let cell = {
            let Some(state) = self.plants.get_mut(plant) else {
                return;
            };
            if state.kind != PlantKind::Sunflower || state.action_in > 0.0 {
                return;
            }
            let Some(interval) = state.kind.action_interval_secs() else {
                return;
            };
            state.action_in = interval;
            state.cell
        };

        let jitter = self.rng.gen_range(-PLANT_SUN_X_JITTER..PLANT_SUN_X_JITTER);
        let id = SunId::new(self.next_sun);
        self.next_sun = self.next_sun.wrapping_add(1);
        self.suns.push(SunDrop {
            id,
            x: cell.center_x() + jitter,
            y: cell.row() as f32 + 0.5 + PLANT_SUN_Y_OFFSET,
            value: SUN_VALUE,
            remaining: PLANT_SUN_LIFETIME_SECS,
            motion: SunMotion::Floating {
                drift: PLANT_SUN_DRIFT,
            },
        });
        out_events.push(Event::SunSpawned {
            sun: id,
            origin: SunOrigin::Sunflower,
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => world.tick(dt, out_events),
        Command::Reset { mode } => world.reset(mode, out_events),
        Command::SelectCard { slot } => world.select_card(slot, out_events),
        Command::PlaceSelected { cell } => world.place_selected(cell, out_events),
        Command::CollectSun { sun } => world.collect_sun(sun, out_events),
        Command::SpawnZombie { kind, lane, speed } => {
            world.spawn_zombie(kind, lane, speed, out_events);
        }
        Command::DropSun { x, target_y } => world.drop_sun(x, target_y, out_events),
        Command::FireProjectile { plant } => world.fire_projectile(plant, out_events),
        Command::ProduceSun { plant } => world.produce_sun(plant, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use super::{Lawn, SunMotion, World, ZombieBehavior};
    use lawn_defence_core::{
        CardSlot, CardSnapshot, Mode, MowerSnapshot, PlantCooldownSnapshot, PlantCooldownView,
        PlantSnapshot, PlantView, ProjectileSnapshot, RunState, SunPhase, SunSnapshot,
        ZombieSnapshot, ZombieState, ZombieView,
    };

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Pacing profile the current run is played under.
    #[must_use]
    pub fn mode(world: &World) -> Mode {
        world.mode
    }

    /// Lifecycle phase of the current run.
    #[must_use]
    pub fn run_state(world: &World) -> RunState {
        world.run_state
    }

    /// Simulated time consumed by the current run so far.
    #[must_use]
    pub fn elapsed(world: &World) -> Duration {
        world.elapsed
    }

    /// Simulated time left until the run is won.
    #[must_use]
    pub fn remaining(world: &World) -> Duration {
        world.mode.duration().saturating_sub(world.elapsed)
    }

    /// Provides read-only access to the lawn dimensions.
    #[must_use]
    pub fn lawn(world: &World) -> &Lawn {
        &world.lawn
    }

    /// Current bank balance in sun points.
    #[must_use]
    pub fn sun_balance(world: &World) -> u32 {
        world.tray.bank().balance()
    }

    /// Slot of the actively selected seed card, if any.
    #[must_use]
    pub fn selected_card(world: &World) -> Option<CardSlot> {
        world.tray.selected()
    }

    /// Captures the seed tray in slot order.
    #[must_use]
    pub fn card_view(world: &World) -> Vec<CardSnapshot> {
        let balance = world.tray.bank().balance();
        let selected = world.tray.selected();
        world
            .tray
            .iter()
            .map(|(slot, card)| CardSnapshot {
                slot,
                kind: card.kind(),
                cost: card.kind().cost(),
                ready_in: Duration::from_secs_f32(card.recharge_in()),
                affordable: balance >= card.kind().cost(),
                selected: selected == Some(slot),
            })
            .collect()
    }

    /// Captures a read-only view of the plants rooted in the lawn.
    #[must_use]
    pub fn plant_view(world: &World) -> PlantView {
        let snapshots: Vec<PlantSnapshot> = world
            .plants
            .iter()
            .map(|plant| PlantSnapshot {
                id: plant.id,
                kind: plant.kind,
                cell: plant.cell,
                health: plant.health,
                max_health: plant.kind.max_health(),
            })
            .collect();
        PlantView::from_snapshots(snapshots)
    }

    /// Captures action readiness for every plant on the lawn.
    #[must_use]
    pub fn plant_cooldown_view(world: &World) -> PlantCooldownView {
        let snapshots: Vec<PlantCooldownSnapshot> = world
            .plants
            .iter()
            .map(|plant| PlantCooldownSnapshot {
                plant: plant.id,
                kind: plant.kind,
                ready_in: Duration::from_secs_f32(plant.action_in),
            })
            .collect();
        PlantCooldownView::from_snapshots(snapshots)
    }

    /// Captures a read-only view of the zombies attacking the lawn.
    #[must_use]
    pub fn zombie_view(world: &World) -> ZombieView {
        let snapshots: Vec<ZombieSnapshot> = world
            .zombies
            .iter()
            .map(|zombie| ZombieSnapshot {
                id: zombie.id,
                kind: zombie.kind,
                lane: zombie.lane,
                x: zombie.x,
                speed: zombie.speed,
                health: zombie.health,
                max_health: zombie.kind.max_health(),
                state: match zombie.behavior {
                    ZombieBehavior::Walking => ZombieState::Walking,
                    ZombieBehavior::Eating { plant, .. } => ZombieState::Eating { plant },
                },
            })
            .collect();
        ZombieView::from_snapshots(snapshots)
    }

    /// Captures the projectiles currently in flight, in spawn order.
    #[must_use]
    pub fn projectile_view(world: &World) -> Vec<ProjectileSnapshot> {
        world
            .projectiles
            .iter()
            .map(|projectile| ProjectileSnapshot {
                id: projectile.id,
                lane: projectile.lane,
                x: projectile.x,
            })
            .collect()
    }

    /// Captures the sun pickups awaiting collection, in spawn order.
    #[must_use]
    pub fn sun_view(world: &World) -> Vec<SunSnapshot> {
        world
            .suns
            .iter()
            .map(|sun| SunSnapshot {
                id: sun.id,
                x: sun.x,
                y: sun.y,
                value: sun.value,
                phase: match sun.motion {
                    SunMotion::Falling { .. } => SunPhase::Falling,
                    SunMotion::Floating { .. } => SunPhase::Floating,
                },
                remaining: Duration::from_secs_f32(sun.remaining.max(0.0)),
            })
            .collect()
    }

    /// Captures the lane mowers in lane order.
    #[must_use]
    pub fn mower_view(world: &World) -> Vec<MowerSnapshot> {
        world
            .mowers
            .iter()
            .map(|mower| MowerSnapshot {
                lane: mower.lane,
                x: mower.x,
                state: mower.state,
            })
            .collect()
    }
}

/// Direct state injection for scenario tests.
///
/// These helpers bypass the command surface so tests can stage a lawn
/// without replaying the player inputs that would normally build it.
#[cfg(any(test, feature = "scenario_scaffolding"))]
pub mod scaffolding {
    use super::{
        Projectile, SunDrop, SunMotion, World, Zombie, ZombieBehavior, PLANT_SUN_LIFETIME_SECS,
        SUN_VALUE,
    };
    use lawn_defence_core::{
        GridCoord, Health, PlantId, PlantKind, ProjectileId, SunId, ZombieId, ZombieKind,
    };

    /// Drops a zombie directly onto the lawn, bypassing the spawner.
    pub fn spawn_zombie(
        world: &mut World,
        lane: u32,
        x: f32,
        speed: f32,
        health: Health,
    ) -> ZombieId {
        let id = ZombieId::new(world.next_zombie);
        world.next_zombie = world.next_zombie.wrapping_add(1);
        world.zombies.push(Zombie {
            id,
            kind: ZombieKind::Walker,
            lane,
            x,
            speed,
            health,
            behavior: ZombieBehavior::Walking,
            crossed: false,
        });
        id
    }

    /// Roots a plant without touching the bank or the seed tray.
    ///
    /// The plant starts with its action timer already elapsed. Returns
    /// `None` when the cell is off the lawn or occupied.
    pub fn place_plant(world: &mut World, kind: PlantKind, cell: GridCoord) -> Option<PlantId> {
        if !world.lawn.contains(cell) || !world.occupancy.is_vacant(cell) {
            return None;
        }
        let plant = world.plants.insert(kind, cell, 0.0);
        world.occupancy.occupy(plant, cell);
        Some(plant)
    }

    /// Puts a projectile in flight without a firing plant.
    pub fn spawn_projectile(world: &mut World, lane: u32, x: f32) -> ProjectileId {
        let id = ProjectileId::new(world.next_projectile);
        world.next_projectile = world.next_projectile.wrapping_add(1);
        world.projectiles.push(Projectile { id, lane, x });
        id
    }

    /// Floats a collectible sun at the provided position.
    pub fn spawn_floating_sun(world: &mut World, x: f32, y: f32) -> SunId {
        let id = SunId::new(world.next_sun);
        world.next_sun = world.next_sun.wrapping_add(1);
        world.suns.push(SunDrop {
            id,
            x,
            y,
            value: SUN_VALUE,
            remaining: PLANT_SUN_LIFETIME_SECS,
            motion: SunMotion::Floating { drift: 0.0 },
        });
        id
    }

    /// Overwrites the bank balance for affordability scenarios.
    pub fn set_sun_balance(world: &mut World, balance: u32) {
        let current = world.tray.bank().balance();
        if balance >= current {
            world.tray.bank_mut().deposit(balance - current);
        } else {
            let _ = world.tray.bank_mut().try_spend(current - balance);
        }
    }
}
