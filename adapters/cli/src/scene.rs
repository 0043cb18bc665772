//! Scene composition and the ASCII board printed by `--trace`.

use lawn_defence_core::{Health, MowerState, PlantKind, ZombieState};
use lawn_defence_rendering::{
    palette, CardPresentation, HudPresentation, LawnPresentation, MowerPresentation,
    PlantPresentation, ProjectilePresentation, Scene, SunPresentation, ZombiePresentation,
};
use lawn_defence_world::{query, World};

/// Projects the world's query views into a frontend-neutral scene.
pub(crate) fn compose(world: &World, layout: LawnPresentation) -> Scene {
    let plants = query::plant_view(world)
        .into_vec()
        .into_iter()
        .map(|plant| {
            PlantPresentation::new(
                plant.id,
                plant.kind,
                plant.cell,
                health_fraction(plant.health, plant.max_health),
                palette::plant_fill(plant.kind),
            )
        })
        .collect();

    let zombies = query::zombie_view(world)
        .into_vec()
        .into_iter()
        .map(|zombie| {
            let eating = matches!(zombie.state, ZombieState::Eating { .. });
            ZombiePresentation::new(
                zombie.id,
                zombie.kind,
                zombie.lane,
                zombie.x,
                eating,
                health_fraction(zombie.health, zombie.max_health),
                if eating {
                    palette::ZOMBIE_ACCENT
                } else {
                    palette::ZOMBIE
                },
            )
        })
        .collect();

    let projectiles = query::projectile_view(world)
        .into_iter()
        .map(|projectile| {
            ProjectilePresentation::new(projectile.id, projectile.lane, projectile.x, palette::PEA)
        })
        .collect();

    let suns = query::sun_view(world)
        .into_iter()
        .map(|sun| SunPresentation::new(sun.id, sun.x, sun.y, sun.value, sun.phase, palette::SUN))
        .collect();

    let mowers = query::mower_view(world)
        .into_iter()
        .map(|mower| MowerPresentation::new(mower.lane, mower.x, mower.state))
        .collect();

    let cards = query::card_view(world)
        .into_iter()
        .map(|card| {
            let fill = if card.selected {
                palette::CARD_SELECTED
            } else if card.ready_in.is_zero() && card.affordable {
                palette::CARD
            } else {
                palette::CARD_DISABLED
            };
            CardPresentation::new(
                card.slot,
                card.kind,
                card.cost,
                card.ready_in,
                card.affordable,
                card.selected,
                fill,
            )
        })
        .collect();

    let hud = HudPresentation::new(
        query::mode(world),
        query::run_state(world),
        query::sun_balance(world),
        query::remaining(world),
        cards,
    );

    Scene::new(layout, hud, plants, zombies, projectiles, suns, mowers)
}

/// Renders the scene as one text block, lanes top to bottom.
///
/// The strip is two cells wider than the lawn: the left margin holds parked
/// mowers, the right margin holds zombies that have not entered yet.
pub(crate) fn render_ascii(scene: &Scene) -> String {
    let columns = scene.lawn.columns as usize;
    let rows = scene.lawn.rows as usize;
    let width = columns + 2;
    let mut board = vec![vec!['.'; width]; rows];

    for plant in &scene.plants {
        let row = plant.cell.row() as usize;
        let column = plant.cell.column() as usize;
        if row < rows && column < columns {
            board[row][column + 1] = plant_glyph(plant.kind);
        }
    }

    for sun in &scene.suns {
        let row = sun.y.round() as i32;
        if row < 0 || row >= rows as i32 {
            continue;
        }
        board[row as usize][strip_column(sun.x, width)] = 'o';
    }

    for projectile in &scene.projectiles {
        let row = projectile.lane as usize;
        if row < rows {
            board[row][strip_column(projectile.x, width)] = '-';
        }
    }

    for zombie in &scene.zombies {
        let row = zombie.lane as usize;
        if row < rows {
            board[row][strip_column(zombie.x, width)] = 'Z';
        }
    }

    for mower in &scene.mowers {
        let row = mower.lane as usize;
        if row < rows && mower.state != MowerState::Spent {
            board[row][strip_column(mower.x, width)] = '>';
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "sun {:>4}  {:>3}s left  {}\n",
        scene.hud.balance,
        scene.hud.remaining.as_secs(),
        card_summary(&scene.hud.cards)
    ));
    for lane in board {
        out.push_str(&lane.into_iter().collect::<String>());
        out.push('\n');
    }
    out.push('\n');
    out
}

fn health_fraction(health: Health, max_health: Health) -> f32 {
    if max_health.get() == 0 {
        return 0.0;
    }
    health.get() as f32 / max_health.get() as f32
}

fn plant_glyph(kind: PlantKind) -> char {
    match kind {
        PlantKind::Sunflower => 'S',
        PlantKind::Peashooter => 'P',
        PlantKind::Wallnut => 'W',
    }
}

fn card_summary(cards: &[CardPresentation]) -> String {
    let mut out = String::new();
    for card in cards {
        if !out.is_empty() {
            out.push(' ');
        }
        if card.selected {
            out.push_str(&format!("[{}*]", card.kind.display_name()));
        } else if !card.ready_in.is_zero() {
            out.push_str(&format!(
                "[{} {:.1}s]",
                card.kind.display_name(),
                card.ready_in.as_secs_f32()
            ));
        } else if !card.affordable {
            out.push_str(&format!("[{} !]", card.kind.display_name()));
        } else {
            out.push_str(&format!("[{}]", card.kind.display_name()));
        }
    }
    out
}

/// Maps a continuous column position onto the widened strip.
fn strip_column(x: f32, width: usize) -> usize {
    let column = x.floor() as i64 + 1;
    column.clamp(0, width as i64 - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::strip_column;

    #[test]
    fn strip_columns_cover_margins_and_lawn() {
        assert_eq!(strip_column(-0.875, 11), 0);
        assert_eq!(strip_column(0.0, 11), 1);
        assert_eq!(strip_column(8.9, 11), 9);
        assert_eq!(strip_column(9.75, 11), 10);
        assert_eq!(strip_column(11.4, 11), 10);
    }
}
