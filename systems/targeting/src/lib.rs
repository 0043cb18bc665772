#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that computes deterministic shooter targets from world snapshots.

use lawn_defence_core::{
    PlantId, PlantKind, PlantView, RunState, ShooterTarget, ZombieId, ZombieView,
};

/// Shooter targeting system that reuses scratch buffers to avoid repeated allocations.
#[derive(Debug, Default)]
pub struct Targeting {
    shooter_workspace: Vec<ShooterWorkspace>,
    zombie_workspace: Vec<ZombieCandidate>,
}

impl Targeting {
    /// Creates a new targeting system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes shooter assignments for the provided world snapshot.
    ///
    /// The output buffer is cleared before populating it with the latest
    /// assignments, ordered by shooter id.
    pub fn handle(
        &mut self,
        run_state: RunState,
        plants: &PlantView,
        zombies: &ZombieView,
        out: &mut Vec<ShooterTarget>,
    ) {
        out.clear();

        if run_state != RunState::Playing {
            return;
        }

        self.prepare_shooter_workspace(plants);
        if self.shooter_workspace.is_empty() {
            return;
        }

        self.prepare_zombie_workspace(zombies);
        if self.zombie_workspace.is_empty() {
            return;
        }

        for shooter in &self.shooter_workspace {
            let mut best: Option<BestCandidate> = None;

            for candidate in &self.zombie_workspace {
                if candidate.lane != shooter.lane {
                    continue;
                }

                // Only zombies strictly ahead of the plant's center are
                // shootable; anything level or behind is past the muzzle.
                if candidate.x <= shooter.center_x {
                    continue;
                }

                let current = BestCandidate {
                    x: candidate.x,
                    zombie: candidate.id,
                };

                match &mut best {
                    Some(existing) => {
                        if current.precedes(existing) {
                            *existing = current;
                        }
                    }
                    None => best = Some(current),
                }
            }

            if let Some(best_candidate) = best {
                out.push(ShooterTarget {
                    plant: shooter.id,
                    zombie: best_candidate.zombie,
                    lane: shooter.lane,
                });
            }
        }
    }

    fn prepare_shooter_workspace(&mut self, plants: &PlantView) {
        self.shooter_workspace.clear();
        let (lower, _) = plants.iter().size_hint();
        self.shooter_workspace.reserve(lower);

        for snapshot in plants.iter() {
            if snapshot.kind != PlantKind::Peashooter {
                continue;
            }

            self.shooter_workspace.push(ShooterWorkspace {
                id: snapshot.id,
                lane: snapshot.cell.row(),
                center_x: snapshot.cell.center_x(),
            });
        }
    }

    fn prepare_zombie_workspace(&mut self, zombies: &ZombieView) {
        self.zombie_workspace.clear();
        let (lower, _) = zombies.iter().size_hint();
        self.zombie_workspace.reserve(lower);

        for snapshot in zombies.iter() {
            if snapshot.health.is_zero() {
                continue;
            }

            self.zombie_workspace.push(ZombieCandidate {
                id: snapshot.id,
                lane: snapshot.lane,
                x: snapshot.x,
            });
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ShooterWorkspace {
    id: PlantId,
    lane: u32,
    center_x: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ZombieCandidate {
    id: ZombieId,
    lane: u32,
    x: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct BestCandidate {
    x: f32,
    zombie: ZombieId,
}

impl BestCandidate {
    fn precedes(&self, other: &Self) -> bool {
        if self.x < other.x {
            return true;
        }
        if self.x > other.x {
            return false;
        }
        self.zombie < other.zombie
    }
}

#[cfg(test)]
mod tests {
    use super::Targeting;
    use lawn_defence_core::{
        GridCoord, Health, PlantId, PlantKind, PlantSnapshot, PlantView, RunState, ZombieId,
        ZombieKind, ZombieSnapshot, ZombieState, ZombieView,
    };

    fn plant_view(snapshots: Vec<PlantSnapshot>) -> PlantView {
        PlantView::from_snapshots(snapshots)
    }

    fn zombie_view(snapshots: Vec<ZombieSnapshot>) -> ZombieView {
        ZombieView::from_snapshots(snapshots)
    }

    fn plant_snapshot(id: u32, kind: PlantKind, cell: (u32, u32)) -> PlantSnapshot {
        PlantSnapshot {
            id: PlantId::new(id, 0),
            kind,
            cell: GridCoord::new(cell.0, cell.1),
            health: kind.max_health(),
            max_health: kind.max_health(),
        }
    }

    fn zombie_snapshot(id: u32, lane: u32, x: f32) -> ZombieSnapshot {
        ZombieSnapshot {
            id: ZombieId::new(id),
            kind: ZombieKind::Walker,
            lane,
            x,
            speed: 0.25,
            health: Health::new(200),
            max_health: ZombieKind::Walker.max_health(),
            state: ZombieState::Walking,
        }
    }

    #[test]
    fn targets_the_nearest_zombie_ahead() {
        let mut system = Targeting::new();
        let plants = plant_view(vec![plant_snapshot(0, PlantKind::Peashooter, (2, 1))]);
        let zombies = zombie_view(vec![zombie_snapshot(1, 1, 5.0), zombie_snapshot(2, 1, 3.5)]);

        let mut out = Vec::new();
        system.handle(RunState::Playing, &plants, &zombies, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].plant, PlantId::new(0, 0));
        assert_eq!(out[0].zombie, ZombieId::new(2));
        assert_eq!(out[0].lane, 1);
    }

    #[test]
    fn zombies_level_with_or_behind_the_plant_are_ignored() {
        let mut system = Targeting::new();
        let plants = plant_view(vec![plant_snapshot(0, PlantKind::Peashooter, (2, 1))]);
        let zombies = zombie_view(vec![zombie_snapshot(1, 1, 2.5), zombie_snapshot(2, 1, 1.0)]);

        let mut out = Vec::new();
        system.handle(RunState::Playing, &plants, &zombies, &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn lanes_are_isolated() {
        let mut system = Targeting::new();
        let plants = plant_view(vec![plant_snapshot(0, PlantKind::Peashooter, (2, 1))]);
        let zombies = zombie_view(vec![zombie_snapshot(1, 0, 5.0), zombie_snapshot(2, 2, 5.0)]);

        let mut out = Vec::new();
        system.handle(RunState::Playing, &plants, &zombies, &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn equal_positions_prefer_the_smaller_zombie_id() {
        let mut system = Targeting::new();
        let plants = plant_view(vec![plant_snapshot(0, PlantKind::Peashooter, (2, 1))]);
        let zombies = zombie_view(vec![zombie_snapshot(9, 1, 6.0), zombie_snapshot(4, 1, 6.0)]);

        let mut out = Vec::new();
        system.handle(RunState::Playing, &plants, &zombies, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].zombie, ZombieId::new(4));
    }

    #[test]
    fn assignments_follow_shooter_id_order() {
        let mut system = Targeting::new();
        let plants = plant_view(vec![
            plant_snapshot(2, PlantKind::Peashooter, (3, 0)),
            plant_snapshot(0, PlantKind::Peashooter, (3, 1)),
        ]);
        let zombies = zombie_view(vec![zombie_snapshot(1, 0, 7.0), zombie_snapshot(2, 1, 7.0)]);

        let mut out = Vec::new();
        system.handle(RunState::Playing, &plants, &zombies, &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].plant, PlantId::new(0, 0));
        assert_eq!(out[1].plant, PlantId::new(2, 0));
    }

    #[test]
    fn only_shooters_receive_assignments() {
        let mut system = Targeting::new();
        let plants = plant_view(vec![
            plant_snapshot(0, PlantKind::Sunflower, (2, 1)),
            plant_snapshot(1, PlantKind::Wallnut, (3, 1)),
        ]);
        let zombies = zombie_view(vec![zombie_snapshot(1, 1, 6.0)]);

        let mut out = Vec::new();
        system.handle(RunState::Playing, &plants, &zombies, &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn terminal_runs_clear_the_output() {
        let mut system = Targeting::new();
        let plants = plant_view(vec![plant_snapshot(0, PlantKind::Peashooter, (2, 1))]);
        let zombies = zombie_view(vec![zombie_snapshot(1, 1, 5.0)]);

        let mut out = Vec::new();
        system.handle(RunState::Playing, &plants, &zombies, &mut out);
        assert_eq!(out.len(), 1);

        system.handle(RunState::Lost, &plants, &zombies, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_collections_produce_no_assignments() {
        let mut system = Targeting::new();
        let zombies = zombie_view(vec![zombie_snapshot(1, 1, 5.0)]);

        let mut out = Vec::new();
        system.handle(RunState::Playing, &plant_view(Vec::new()), &zombies, &mut out);
        assert!(out.is_empty());

        let plants = plant_view(vec![plant_snapshot(0, PlantKind::Peashooter, (2, 1))]);
        system.handle(RunState::Playing, &plants, &zombie_view(Vec::new()), &mut out);
        assert!(out.is_empty());
    }
}
