#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that emits plant action commands from cooldown and targeting data.

use lawn_defence_core::{Command, PlantCooldownView, PlantId, PlantKind, RunState, ShooterTarget};

/// Plant combat system that queues action commands for ready plants.
#[derive(Debug, Default)]
pub struct Combat {
    scratch: Vec<Command>,
}

impl Combat {
    /// Creates a new combat system with an empty scratch buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `Command::FireProjectile` for ready shooters with a target and
    /// `Command::ProduceSun` for ready sunflowers.
    ///
    /// Sunflowers act on their timer alone, so they are never gated on the
    /// targeting output.
    pub fn handle(
        &mut self,
        run_state: RunState,
        plant_cooldowns: PlantCooldownView,
        shooter_targets: &[ShooterTarget],
        out: &mut Vec<Command>,
    ) {
        if run_state != RunState::Playing {
            return;
        }

        let cooldowns = plant_cooldowns.into_vec();
        if cooldowns.is_empty() {
            return;
        }

        self.scratch.clear();

        for snapshot in &cooldowns {
            if !snapshot.ready_in.is_zero() {
                continue;
            }

            match snapshot.kind {
                PlantKind::Peashooter => {
                    if has_target(shooter_targets, snapshot.plant) {
                        self.scratch.push(Command::FireProjectile {
                            plant: snapshot.plant,
                        });
                    }
                }
                PlantKind::Sunflower => {
                    self.scratch.push(Command::ProduceSun {
                        plant: snapshot.plant,
                    });
                }
                PlantKind::Wallnut => {}
            }
        }

        if self.scratch.is_empty() {
            return;
        }

        out.reserve(self.scratch.len());
        out.append(&mut self.scratch);
    }
}

fn has_target(targets: &[ShooterTarget], plant: PlantId) -> bool {
    targets
        .binary_search_by_key(&plant, |target| target.plant)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawn_defence_core::{PlantCooldownSnapshot, ZombieId};
    use std::time::Duration;

    fn snapshot(index: u32, kind: PlantKind, ready_in: Duration) -> PlantCooldownSnapshot {
        PlantCooldownSnapshot {
            plant: PlantId::new(index, 0),
            kind,
            ready_in,
        }
    }

    fn target(plant: u32, zombie: u32) -> ShooterTarget {
        ShooterTarget {
            plant: PlantId::new(plant, 0),
            zombie: ZombieId::new(zombie),
            lane: 0,
        }
    }

    #[test]
    fn terminal_runs_are_silent() {
        let mut system = Combat::new();
        let cooldowns = PlantCooldownView::from_snapshots(vec![snapshot(
            1,
            PlantKind::Peashooter,
            Duration::ZERO,
        )]);
        let targets = vec![target(1, 7)];
        let mut out = Vec::new();

        system.handle(RunState::Won, cooldowns, &targets, &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn ready_shooters_fire_at_their_targets() {
        let mut system = Combat::new();
        let cooldowns = PlantCooldownView::from_snapshots(vec![
            snapshot(2, PlantKind::Peashooter, Duration::ZERO),
            snapshot(5, PlantKind::Peashooter, Duration::ZERO),
        ]);
        let targets = vec![target(2, 4), target(5, 1)];
        let mut out = Vec::new();

        system.handle(RunState::Playing, cooldowns, &targets, &mut out);

        assert_eq!(
            out,
            vec![
                Command::FireProjectile {
                    plant: PlantId::new(2, 0),
                },
                Command::FireProjectile {
                    plant: PlantId::new(5, 0),
                },
            ],
        );
    }

    #[test]
    fn shooters_without_targets_hold_fire() {
        let mut system = Combat::new();
        let cooldowns = PlantCooldownView::from_snapshots(vec![snapshot(
            3,
            PlantKind::Peashooter,
            Duration::ZERO,
        )]);
        let mut out = Vec::new();

        system.handle(RunState::Playing, cooldowns, &[], &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn recharging_plants_are_skipped() {
        let mut system = Combat::new();
        let cooldowns = PlantCooldownView::from_snapshots(vec![
            snapshot(3, PlantKind::Peashooter, Duration::from_millis(250)),
            snapshot(8, PlantKind::Sunflower, Duration::ZERO),
        ]);
        let targets = vec![target(3, 9)];
        let mut out = Vec::new();

        system.handle(RunState::Playing, cooldowns, &targets, &mut out);

        assert_eq!(
            out,
            vec![Command::ProduceSun {
                plant: PlantId::new(8, 0),
            }],
        );
    }

    #[test]
    fn sunflowers_produce_without_targets() {
        let mut system = Combat::new();
        let cooldowns = PlantCooldownView::from_snapshots(vec![snapshot(
            4,
            PlantKind::Sunflower,
            Duration::ZERO,
        )]);
        let mut out = Vec::new();

        system.handle(RunState::Playing, cooldowns, &[], &mut out);

        assert_eq!(
            out,
            vec![Command::ProduceSun {
                plant: PlantId::new(4, 0),
            }],
        );
    }

    #[test]
    fn wallnuts_never_act() {
        let mut system = Combat::new();
        let cooldowns = PlantCooldownView::from_snapshots(vec![snapshot(
            0,
            PlantKind::Wallnut,
            Duration::ZERO,
        )]);
        let targets = vec![target(0, 2)];
        let mut out = Vec::new();

        system.handle(RunState::Playing, cooldowns, &targets, &mut out);

        assert!(out.is_empty());
    }
}
