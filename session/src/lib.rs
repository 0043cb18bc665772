#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Frame orchestrator that owns the world and the pure systems driving it.
//!
//! Each [`Session::advance`] call runs one simulation frame in a fixed order:
//! queued player commands, the world tick, the wave director, targeting,
//! combat, and finally the commands the systems emitted. Every event the
//! frame produced is handed back to the caller in order, so adapters can
//! render, report, or replay without reaching into the world.

use std::time::Duration;

use lawn_defence_core::{Command, Event, Mode, RunState, ShooterTarget};
use lawn_defence_system_combat::Combat;
use lawn_defence_system_spawning::{Config, Spawning};
use lawn_defence_system_targeting::Targeting;
use lawn_defence_world::{self as world, query, World};

/// Owns the simulation world plus the systems that drive it.
#[derive(Debug)]
pub struct Session {
    world: World,
    spawning: Spawning,
    targeting: Targeting,
    combat: Combat,
    queued: Vec<Command>,
    pending_events: Vec<Event>,
    system_commands: Vec<Command>,
    targets: Vec<ShooterTarget>,
}

impl Session {
    /// Boots a session for the requested mode and wave seed.
    ///
    /// The opening `RunStarted` event is delivered by the first `advance`
    /// so the wave director and adapters observe it like any other event.
    #[must_use]
    pub fn new(mode: Mode, wave_seed: u64) -> Self {
        let mut world = World::new();
        let mut pending_events = Vec::new();
        world::apply(&mut world, Command::Reset { mode }, &mut pending_events);

        Self {
            world,
            spawning: Spawning::new(Config::new(mode, wave_seed)),
            targeting: Targeting::new(),
            combat: Combat::new(),
            queued: Vec::new(),
            pending_events,
            system_commands: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Queues a player command for the next frame.
    pub fn submit(&mut self, command: Command) {
        self.queued.push(command);
    }

    /// Read-only access to the world for adapter queries.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Shooter assignments computed on the most recent frame.
    #[must_use]
    pub fn targets(&self) -> &[ShooterTarget] {
        &self.targets
    }

    /// Reports whether the run has reached a terminal state.
    #[must_use]
    pub fn finished(&self) -> bool {
        query::run_state(&self.world) != RunState::Playing
    }

    /// Runs one simulation frame.
    ///
    /// `out_events` is cleared and then filled with every event the frame
    /// produced, in order: pending bootstrap events, player command results,
    /// the tick, and the system command results.
    pub fn advance(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        out_events.clear();
        out_events.append(&mut self.pending_events);

        for command in self.queued.drain(..) {
            world::apply(&mut self.world, command, out_events);
        }

        world::apply(&mut self.world, Command::Tick { dt }, out_events);

        // The wave director sees everything that happened this frame so a
        // run that just started or ended adjusts its schedule immediately.
        let lanes = query::lawn(&self.world).rows();
        self.system_commands.clear();
        self.spawning
            .handle(out_events, lanes, &mut self.system_commands);

        let run_state = query::run_state(&self.world);
        let plants = query::plant_view(&self.world);
        let zombies = query::zombie_view(&self.world);
        self.targeting
            .handle(run_state, &plants, &zombies, &mut self.targets);

        let cooldowns = query::plant_cooldown_view(&self.world);
        self.combat
            .handle(run_state, cooldowns, &self.targets, &mut self.system_commands);

        for command in self.system_commands.drain(..) {
            world::apply(&mut self.world, command, out_events);
        }
    }
}
