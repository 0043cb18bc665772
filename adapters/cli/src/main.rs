#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless command-line runner for Lawn Defence.

mod autoplay;
mod scene;

use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use lawn_defence_core::{Event, KillCause, Mode, PlantKind, RunOutcome, ZombieKind, WELCOME_BANNER};
use lawn_defence_rendering::LawnPresentation;
use lawn_defence_session::Session;
use lawn_defence_world::{query, World};
use rand::Rng;

use autoplay::Autoplayer;

/// Command-line arguments accepted by the runner.
#[derive(Debug, Parser)]
#[command(name = "lawn-defence", version, about = "Runs headless Lawn Defence simulations")]
struct Args {
    /// Pacing profile for the run.
    #[arg(long, value_enum, default_value = "adventure")]
    mode: ModeArg,
    /// Seed for the wave schedule. Drawn from system entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Simulation frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Leave the lawn undefended instead of autoplaying.
    #[arg(long)]
    idle: bool,
    /// Print the lawn once per simulated second.
    #[arg(long)]
    trace: bool,
    /// Print the almanac and exit.
    #[arg(long)]
    almanac: bool,
}

/// Pacing profiles selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Two-minute run with the standard spawn ramp.
    Adventure,
    /// One-minute run with a doubled spawn ramp.
    Blitz,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Adventure => Self::Adventure,
            ModeArg::Blitz => Self::Blitz,
        }
    }
}

/// Entry point for the Lawn Defence command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    if args.almanac {
        print_almanac();
        return Ok(());
    }
    if args.fps == 0 {
        bail!("--fps must be positive");
    }

    let mode = Mode::from(args.mode);
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let dt = Duration::from_secs(1) / args.fps;

    let mut session = Session::new(mode, seed);
    println!("{}", query::welcome_banner(session.world()));
    println!("{} run, seed {seed}, {} fps", mode.label(), args.fps);

    let layout = {
        let lawn = query::lawn(session.world());
        LawnPresentation::standard(lawn.columns(), lawn.rows())
    };
    let autoplayer = (!args.idle).then(|| Autoplayer::new(layout));

    let mut report = RunReport::default();
    let mut events = Vec::new();
    let mut next_trace = Duration::from_secs(1);

    // The run always terminates on its own clock; the cap only bounds the
    // loop if frame pacing ever regresses.
    let frame_cap = (mode.duration().as_secs() + 30) * u64::from(args.fps);
    for _ in 0..frame_cap {
        if let Some(autoplayer) = autoplayer.as_ref() {
            autoplayer.act(&mut session);
        }
        session.advance(dt, &mut events);
        report.absorb(&events);

        if args.trace && query::elapsed(session.world()) >= next_trace {
            let composed = scene::compose(session.world(), layout);
            print!("{}", scene::render_ascii(&composed));
            next_trace += Duration::from_secs(1);
        }
        if session.finished() {
            break;
        }
    }

    let Some(outcome) = report.outcome else {
        bail!("run never reached a terminal state");
    };
    report.print(outcome, session.world());
    Ok(())
}

/// Tally of the run assembled from the world's event stream.
#[derive(Debug, Default)]
struct RunReport {
    zombies_spawned: u32,
    zombies_shot: u32,
    zombies_mowed: u32,
    plants_placed: u32,
    plants_lost: u32,
    suns_collected: u32,
    sun_income: u32,
    peas_fired: u32,
    outcome: Option<RunOutcome>,
}

impl RunReport {
    fn absorb(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::ZombieSpawned { .. } => self.zombies_spawned += 1,
                Event::ZombieKilled { cause, .. } => match cause {
                    KillCause::Projectile => self.zombies_shot += 1,
                    KillCause::Mower => self.zombies_mowed += 1,
                },
                Event::PlantPlaced { .. } => self.plants_placed += 1,
                Event::PlantDied { .. } => self.plants_lost += 1,
                Event::SunCollected { value, .. } => {
                    self.suns_collected += 1;
                    self.sun_income += value;
                }
                Event::ProjectileFired { .. } => self.peas_fired += 1,
                Event::RunEnded { outcome } => self.outcome = Some(*outcome),
                _ => {}
            }
        }
    }

    fn print(&self, outcome: RunOutcome, world: &World) {
        let elapsed = query::elapsed(world).as_secs_f32();
        println!();
        match outcome {
            RunOutcome::Won => println!("The lawn held for the full {elapsed:.0}s."),
            RunOutcome::Lost => println!("The lawn was overrun after {elapsed:.1}s."),
        }
        println!(
            "  zombies  {} spawned, {} shot down, {} mowed",
            self.zombies_spawned, self.zombies_shot, self.zombies_mowed
        );
        println!(
            "  plants   {} placed, {} eaten",
            self.plants_placed, self.plants_lost
        );
        println!(
            "  sun      {} pickups banked for {}, {} left over",
            self.suns_collected,
            self.sun_income,
            query::sun_balance(world)
        );
        println!("  peas     {} fired", self.peas_fired);
    }
}

fn print_almanac() {
    println!("{WELCOME_BANNER}");
    println!();
    println!("PLANTS");
    for kind in PlantKind::ALL {
        println!(
            "  {:<12} cost {:>3}, {:>3} hp",
            kind.display_name(),
            kind.cost(),
            kind.max_health().get()
        );
        println!("    {}", kind.blurb());
    }
    println!();
    println!("ZOMBIES");
    for kind in ZombieKind::ALL {
        let (low, high) = kind.walk_speed_band();
        println!(
            "  {:<12} {:>3} hp, bites for {} per second, walks {low:.3}-{high:.3} columns per second",
            kind.display_name(),
            kind.max_health().get(),
            kind.bite_damage_per_sec()
        );
        println!("    {}", kind.blurb());
    }
}
