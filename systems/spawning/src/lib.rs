#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic wave director that emits zombie and sky-sun spawn commands.

use lawn_defence_core::{Command, Event, Mode, ZombieKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ZOMBIE_INITIAL_DELAY_SECS: f32 = 2.0;
const ZOMBIE_BASE_INTERVAL_SECS: f32 = 4.0;
const ZOMBIE_JITTER_LOW_SECS: f32 = -0.4;
const ZOMBIE_JITTER_HIGH_SECS: f32 = 0.6;

const SUN_INITIAL_DELAY_SECS: f32 = 2.0;
const SUN_BASE_INTERVAL_SECS: f32 = 9.0;
const SUN_JITTER_SECS: f32 = 1.5;

// Sky suns aim inside the lawn with a margin so they stay collectable.
const SUN_MIN_X: f32 = 0.4;
const SUN_MAX_X: f32 = 8.6;
const SUN_MIN_TARGET_Y: f32 = 0.33;
const SUN_MAX_TARGET_Y: f32 = 4.67;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    mode: Mode,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided pacing mode and seed.
    #[must_use]
    pub const fn new(mode: Mode, rng_seed: u64) -> Self {
        Self { mode, rng_seed }
    }
}

/// Pure system that deterministically schedules zombie waves and sky suns.
#[derive(Debug)]
pub struct Spawning {
    mode: Mode,
    rng_seed: u64,
    rng: ChaCha8Rng,
    active: bool,
    zombie_interval: f32,
    zombie_clock: f32,
    sun_clock: f32,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            mode: config.mode,
            rng_seed: config.rng_seed,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            active: true,
            zombie_interval: ZOMBIE_BASE_INTERVAL_SECS,
            zombie_clock: ZOMBIE_INITIAL_DELAY_SECS,
            sun_clock: SUN_INITIAL_DELAY_SECS,
        }
    }

    /// Consumes world events to emit spawn commands for the elapsed time.
    ///
    /// `Event::RunStarted` rewinds both schedules to their initial delays and
    /// reseeds the random stream, so a restarted run replays the same waves.
    pub fn handle(&mut self, events: &[Event], lanes: u32, out: &mut Vec<Command>) {
        if lanes == 0 {
            return;
        }

        for event in events {
            match event {
                Event::RunStarted { mode } => self.rearm(*mode),
                Event::RunEnded { .. } => self.active = false,
                Event::TimeAdvanced { dt } => {
                    if self.active {
                        self.step(dt.as_secs_f32(), lanes, out);
                    }
                }
                _ => {}
            }
        }
    }

    fn rearm(&mut self, mode: Mode) {
        self.mode = mode;
        self.rng = ChaCha8Rng::seed_from_u64(self.rng_seed);
        self.active = true;
        self.zombie_interval = ZOMBIE_BASE_INTERVAL_SECS;
        self.zombie_clock = ZOMBIE_INITIAL_DELAY_SECS;
        self.sun_clock = SUN_INITIAL_DELAY_SECS;
    }

    fn step(&mut self, dt_secs: f32, lanes: u32, out: &mut Vec<Command>) {
        // The inter-arrival gap tightens as the run progresses, clamped at
        // the mode's floor so the schedule never degenerates.
        self.zombie_interval = (self.zombie_interval - self.mode.spawn_decay_per_sec() * dt_secs)
            .max(self.mode.spawn_floor_secs());

        self.zombie_clock -= dt_secs;
        while self.zombie_clock <= 0.0 {
            self.emit_zombie(lanes, out);
            let jitter = self
                .rng
                .gen_range(ZOMBIE_JITTER_LOW_SECS..ZOMBIE_JITTER_HIGH_SECS);
            self.zombie_clock += self.zombie_interval + jitter;
        }

        self.sun_clock -= dt_secs;
        while self.sun_clock <= 0.0 {
            self.emit_sun(out);
            let jitter = self.rng.gen_range(-SUN_JITTER_SECS..SUN_JITTER_SECS);
            self.sun_clock += SUN_BASE_INTERVAL_SECS + jitter;
        }
    }

    fn emit_zombie(&mut self, lanes: u32, out: &mut Vec<Command>) {
        let kind = ZombieKind::Walker;
        let lane = self.rng.gen_range(0..lanes);
        let (slowest, fastest) = kind.walk_speed_band();
        let speed = self.rng.gen_range(slowest..fastest);
        out.push(Command::SpawnZombie { kind, lane, speed });
    }

    fn emit_sun(&mut self, out: &mut Vec<Command>) {
        let x = self.rng.gen_range(SUN_MIN_X..SUN_MAX_X);
        let target_y = self.rng.gen_range(SUN_MIN_TARGET_Y..SUN_MAX_TARGET_Y);
        out.push(Command::DropSun { x, target_y });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn advanced(secs: f32) -> Event {
        Event::TimeAdvanced {
            dt: Duration::from_secs_f32(secs),
        }
    }

    #[test]
    fn nothing_fires_before_the_initial_delay() {
        let mut spawning = Spawning::new(Config::new(Mode::Adventure, 0x51));
        let mut out = Vec::new();

        spawning.handle(&[advanced(1.99)], 5, &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn zero_lanes_keep_the_spawner_silent() {
        let mut spawning = Spawning::new(Config::new(Mode::Adventure, 0x51));
        let mut out = Vec::new();

        spawning.handle(&[advanced(30.0)], 0, &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn decay_clamps_the_interval_at_the_mode_floor() {
        let mut spawning = Spawning::new(Config::new(Mode::Blitz, 0x51));
        let mut out = Vec::new();

        spawning.handle(&[advanced(400.0)], 5, &mut out);

        assert_eq!(spawning.zombie_interval, Mode::Blitz.spawn_floor_secs());
        assert!(!out.is_empty());
    }
}
