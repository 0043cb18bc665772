//! Scripted player used when the runner is not in idle mode.

use lawn_defence_core::{Command, GridCoord, PlantKind, RunState, SunId};
use lawn_defence_rendering::{palette, LawnPresentation, SunPresentation};
use lawn_defence_session::Session;
use lawn_defence_world::query;

/// Desired builds as `(kind, column, row)`, attempted in order.
///
/// Sunflowers and peashooters go up center-out so the earliest waves meet a
/// defended lane, then wall-nuts cover the bite zone ahead of the mowers.
const BUILD_PLAN: [(PlantKind, u32, u32); 15] = [
    (PlantKind::Sunflower, 1, 2),
    (PlantKind::Peashooter, 2, 2),
    (PlantKind::Sunflower, 1, 1),
    (PlantKind::Peashooter, 2, 1),
    (PlantKind::Sunflower, 1, 3),
    (PlantKind::Peashooter, 2, 3),
    (PlantKind::Sunflower, 1, 0),
    (PlantKind::Peashooter, 2, 0),
    (PlantKind::Sunflower, 1, 4),
    (PlantKind::Peashooter, 2, 4),
    (PlantKind::Wallnut, 7, 2),
    (PlantKind::Wallnut, 7, 1),
    (PlantKind::Wallnut, 7, 3),
    (PlantKind::Wallnut, 7, 0),
    (PlantKind::Wallnut, 7, 4),
];

/// Deterministic stand-in for a player: banks suns and works down the
/// build plan, placing through the same pointer classification a click
/// would use.
pub(crate) struct Autoplayer {
    layout: LawnPresentation,
}

impl Autoplayer {
    pub(crate) const fn new(layout: LawnPresentation) -> Self {
        Self { layout }
    }

    /// Queues this frame's player commands.
    pub(crate) fn act(&self, session: &mut Session) {
        if query::run_state(session.world()) != RunState::Playing {
            return;
        }

        // Presses land on each sun's drawn center, so the pick resolves
        // through the same radius test a pointer frontend uses.
        let suns: Vec<SunPresentation> = query::sun_view(session.world())
            .into_iter()
            .map(|sun| SunPresentation::new(sun.id, sun.x, sun.y, sun.value, sun.phase, palette::SUN))
            .collect();
        let mut picked: Vec<SunId> = Vec::new();
        for sun in &suns {
            let press = self.layout.sun_point(sun.x, sun.y);
            let Some(id) = self.layout.classify_sun_pick(&suns, press) else {
                continue;
            };
            if picked.contains(&id) {
                continue;
            }
            picked.push(id);
            session.submit(Command::CollectSun { sun: id });
        }

        if query::selected_card(session.world()).is_some() {
            return;
        }

        let plants = query::plant_view(session.world());
        let cards = query::card_view(session.world());
        for (kind, column, row) in BUILD_PLAN {
            let cell = GridCoord::new(column, row);
            if plants.iter().any(|plant| plant.cell == cell) {
                continue;
            }
            let Some(card) = cards.iter().find(|card| card.kind == kind) else {
                continue;
            };
            if !card.ready_in.is_zero() || !card.affordable {
                continue;
            }
            let Some(target) = self.layout.classify_pointer(self.layout.cell_center(cell)) else {
                continue;
            };
            session.submit(Command::SelectCard { slot: card.slot });
            session.submit(Command::PlaceSelected { cell: target });
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BUILD_PLAN;

    #[test]
    fn build_plan_cells_are_unique_and_in_bounds() {
        let mut cells: Vec<(u32, u32)> = BUILD_PLAN
            .iter()
            .map(|(_, column, row)| (*column, *row))
            .collect();
        cells.sort_unstable();
        let before = cells.len();
        cells.dedup();

        assert_eq!(cells.len(), before, "duplicate cell in the build plan");
        assert!(cells.iter().all(|(column, row)| *column < 9 && *row < 5));
    }
}
