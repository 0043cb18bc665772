#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Lawn Defence frontends.

use glam::Vec2;
use lawn_defence_core::{
    CardSlot, GridCoord, Mode, MowerState, PlantId, PlantKind, ProjectileId, RunState, SunId,
    SunPhase, ZombieId, ZombieKind,
};
use std::{error::Error, fmt, time::Duration};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Named colors shared by every Lawn Defence frontend.
pub mod palette {
    use super::Color;
    use lawn_defence_core::PlantKind;

    /// Backdrop behind the whole scene.
    pub const BACKGROUND: Color = Color::from_rgb_u8(24, 32, 24);
    /// Panels framing the lawn, such as the card bar.
    pub const PANEL: Color = Color::from_rgb_u8(40, 55, 40);
    /// Base lawn fill underneath the tile checkering.
    pub const LAWN: Color = Color::from_rgb_u8(55, 90, 55);
    /// Lighter tile of the checkered lawn.
    pub const TILE_LIGHT: Color = Color::from_rgb_u8(65, 110, 65);
    /// Darker tile of the checkered lawn.
    pub const TILE_DARK: Color = Color::from_rgb_u8(58, 100, 58);
    /// Grid lines separating lawn cells.
    pub const GRID_LINE: Color = Color::from_rgb_u8(30, 60, 30);
    /// Default foreground for HUD text.
    pub const TEXT: Color = Color::from_rgb_u8(240, 240, 240);
    /// Highlight used for headings and the sun counter.
    pub const ACCENT: Color = Color::from_rgb_u8(255, 230, 120);
    /// Alerts such as the defeat banner.
    pub const WARNING: Color = Color::from_rgb_u8(255, 80, 80);
    /// Seed card body.
    pub const CARD: Color = Color::from_rgb_u8(90, 70, 40);
    /// Seed card outline.
    pub const CARD_BORDER: Color = Color::from_rgb_u8(220, 200, 140);
    /// Seed card body while recharging or unaffordable.
    pub const CARD_DISABLED: Color = Color::from_rgb_u8(70, 70, 70);
    /// Seed card outline while selected.
    pub const CARD_SELECTED: Color = Color::from_rgb_u8(255, 255, 200);
    /// Collectible sun body.
    pub const SUN: Color = Color::from_rgb_u8(255, 220, 60);
    /// Pea projectile body.
    pub const PEA: Color = Color::from_rgb_u8(80, 220, 90);
    /// Zombie body.
    pub const ZOMBIE: Color = Color::from_rgb_u8(130, 160, 160);
    /// Zombie limbs and shading.
    pub const ZOMBIE_ACCENT: Color = Color::from_rgb_u8(80, 110, 110);
    /// Peashooter body.
    pub const PEASHOOTER: Color = Color::from_rgb_u8(70, 200, 80);
    /// Sunflower body.
    pub const SUNFLOWER: Color = Color::from_rgb_u8(240, 200, 40);
    /// Wallnut body.
    pub const WALLNUT: Color = Color::from_rgb_u8(170, 120, 60);

    /// Body color assigned to a plant variant.
    #[must_use]
    pub const fn plant_fill(kind: PlantKind) -> Color {
        match kind {
            PlantKind::Peashooter => PEASHOOTER,
            PlantKind::Sunflower => SUNFLOWER,
            PlantKind::Wallnut => WALLNUT,
        }
    }
}

/// Describes the lawn's placement and tile metrics in world units.
///
/// The simulation measures horizontal positions in columns and vertical
/// positions in rows; this descriptor carries the affine transform between
/// those lawn units and the world-space units frontends draw in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LawnPresentation {
    /// Number of columns contained in the lawn.
    pub columns: u32,
    /// Number of lanes contained in the lawn.
    pub rows: u32,
    /// Width of a single tile expressed in world units.
    pub tile_width: f32,
    /// Height of a single tile expressed in world units.
    pub tile_height: f32,
    /// World-space position of the lawn's top-left corner.
    pub origin: Vec2,
    /// Color used when drawing grid lines.
    pub line_color: Color,
}

impl LawnPresentation {
    /// Default tile width in world units.
    pub const DEFAULT_TILE_WIDTH: f32 = 80.0;

    /// Default tile height in world units.
    pub const DEFAULT_TILE_HEIGHT: f32 = 90.0;

    /// Default world-space position of the lawn's top-left corner.
    pub const DEFAULT_ORIGIN: Vec2 = Vec2::new(200.0, 170.0);

    /// Pick radius for sun presses, measured in columns.
    pub const SUN_PICK_RADIUS_COLUMNS: f32 = 0.225;

    /// Creates a new lawn descriptor.
    ///
    /// Returns an error when either tile dimension is not a positive finite
    /// number.
    pub fn new(
        columns: u32,
        rows: u32,
        tile_width: f32,
        tile_height: f32,
        origin: Vec2,
        line_color: Color,
    ) -> std::result::Result<Self, RenderingError> {
        if !tile_width.is_finite()
            || tile_width <= 0.0
            || !tile_height.is_finite()
            || tile_height <= 0.0
        {
            return Err(RenderingError::InvalidTileSize {
                tile_width,
                tile_height,
            });
        }

        Ok(Self {
            columns,
            rows,
            tile_width,
            tile_height,
            origin,
            line_color,
        })
    }

    /// Creates the layout shared by the shipped frontends.
    #[must_use]
    pub const fn standard(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            tile_width: Self::DEFAULT_TILE_WIDTH,
            tile_height: Self::DEFAULT_TILE_HEIGHT,
            origin: Self::DEFAULT_ORIGIN,
            line_color: palette::GRID_LINE,
        }
    }

    /// Calculates the total width of the lawn.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.columns as f32 * self.tile_width
    }

    /// Calculates the total height of the lawn.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.rows as f32 * self.tile_height
    }

    /// World-space center of the given lawn cell.
    #[must_use]
    pub fn cell_center(&self, cell: GridCoord) -> Vec2 {
        Vec2::new(
            self.origin.x + (cell.column() as f32 + 0.5) * self.tile_width,
            self.origin.y + (cell.row() as f32 + 0.5) * self.tile_height,
        )
    }

    /// World-space point for a continuous column position on a lane midline.
    #[must_use]
    pub fn lane_point(&self, lane: u32, x: f32) -> Vec2 {
        Vec2::new(
            self.origin.x + x * self.tile_width,
            self.origin.y + (lane as f32 + 0.5) * self.tile_height,
        )
    }

    /// World-space point for a sun's continuous column/row position.
    ///
    /// Suns travel above the lawn before settling, so the result may lie
    /// outside the lawn rectangle.
    #[must_use]
    pub fn sun_point(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            self.origin.x + x * self.tile_width,
            self.origin.y + y * self.tile_height,
        )
    }

    /// Finds the sun a pointer press at `position` picks up, if any.
    ///
    /// Suns are picked within a fixed radius of their center, nearest
    /// first; distance ties fall to the lower sun id.
    #[must_use]
    pub fn classify_sun_pick(&self, suns: &[SunPresentation], position: Vec2) -> Option<SunId> {
        let radius = Self::SUN_PICK_RADIUS_COLUMNS * self.tile_width;
        let mut best: Option<(f32, SunId)> = None;
        for sun in suns {
            let center = self.sun_point(sun.x, sun.y);
            let distance_squared = center.distance_squared(position);
            if distance_squared > radius * radius {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_distance, best_id)) => {
                    distance_squared < best_distance
                        || (distance_squared == best_distance && sun.id < best_id)
                }
            };
            if better {
                best = Some((distance_squared, sun.id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Classifies a pointer position into the lawn cell beneath it.
    ///
    /// Bounds are half-open: a pointer on the right or bottom edge lies
    /// outside the lawn. Returns `None` for any position off the lawn.
    #[must_use]
    pub fn classify_pointer(&self, position: Vec2) -> Option<GridCoord> {
        if position.x < self.origin.x || position.y < self.origin.y {
            return None;
        }

        let offset_x = position.x - self.origin.x;
        let offset_y = position.y - self.origin.y;
        if offset_x >= self.width() || offset_y >= self.height() {
            return None;
        }

        let column = (offset_x / self.tile_width) as u32;
        let row = (offset_y / self.tile_height) as u32;
        Some(GridCoord::new(column, row))
    }
}

/// Plant rendered as a filled body within its cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantPresentation {
    /// Identifier allocated to the plant by the world.
    pub id: PlantId,
    /// Variant of the plant.
    pub kind: PlantKind,
    /// Lawn cell the plant is rooted in.
    pub cell: GridCoord,
    /// Remaining health as a fraction of placement health, in 0.0..=1.0.
    pub health_fraction: f32,
    /// Fill color of the plant's body.
    pub fill: Color,
}

impl PlantPresentation {
    /// Creates a new plant presentation descriptor.
    #[must_use]
    pub const fn new(
        id: PlantId,
        kind: PlantKind,
        cell: GridCoord,
        health_fraction: f32,
        fill: Color,
    ) -> Self {
        Self {
            id,
            kind,
            cell,
            health_fraction,
            fill,
        }
    }
}

/// Zombie rendered along its lane midline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZombiePresentation {
    /// Identifier allocated to the zombie by the world.
    pub id: ZombieId,
    /// Variant of the zombie.
    pub kind: ZombieKind,
    /// Lane row the zombie walks down.
    pub lane: u32,
    /// Horizontal position measured in columns.
    pub x: f32,
    /// Whether the zombie is currently chewing on a plant.
    pub eating: bool,
    /// Remaining health as a fraction of spawn health, in 0.0..=1.0.
    pub health_fraction: f32,
    /// Fill color of the zombie's body.
    pub fill: Color,
}

impl ZombiePresentation {
    /// Creates a new zombie presentation descriptor.
    #[must_use]
    pub const fn new(
        id: ZombieId,
        kind: ZombieKind,
        lane: u32,
        x: f32,
        eating: bool,
        health_fraction: f32,
        fill: Color,
    ) -> Self {
        Self {
            id,
            kind,
            lane,
            x,
            eating,
            health_fraction,
            fill,
        }
    }
}

/// Projectile rendered along its lane midline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectilePresentation {
    /// Identifier allocated to the projectile by the world.
    pub id: ProjectileId,
    /// Lane row the projectile travels down.
    pub lane: u32,
    /// Horizontal position measured in columns.
    pub x: f32,
    /// Fill color of the projectile.
    pub fill: Color,
}

impl ProjectilePresentation {
    /// Creates a new projectile presentation descriptor.
    #[must_use]
    pub const fn new(id: ProjectileId, lane: u32, x: f32, fill: Color) -> Self {
        Self { id, lane, x, fill }
    }
}

/// Collectible sun rendered at its continuous lawn position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunPresentation {
    /// Identifier allocated to the sun by the world.
    pub id: SunId,
    /// Horizontal position measured in columns.
    pub x: f32,
    /// Vertical position measured in rows.
    pub y: f32,
    /// Amount banked when the sun is collected.
    pub value: u32,
    /// Vertical motion phase, used to animate falling suns.
    pub phase: SunPhase,
    /// Fill color of the sun.
    pub fill: Color,
}

impl SunPresentation {
    /// Creates a new sun presentation descriptor.
    #[must_use]
    pub const fn new(id: SunId, x: f32, y: f32, value: u32, phase: SunPhase, fill: Color) -> Self {
        Self {
            id,
            x,
            y,
            value,
            phase,
            fill,
        }
    }
}

/// Lane mower rendered at the left lawn edge or mid-sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MowerPresentation {
    /// Lane row the mower defends.
    pub lane: u32,
    /// Horizontal position measured in columns.
    pub x: f32,
    /// Progress state of the mower.
    pub state: MowerState,
}

impl MowerPresentation {
    /// Creates a new mower presentation descriptor.
    #[must_use]
    pub const fn new(lane: u32, x: f32, state: MowerState) -> Self {
        Self { lane, x, state }
    }
}

/// Seed card rendered in the HUD tray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPresentation {
    /// Tray slot hosting the card.
    pub slot: CardSlot,
    /// Kind of plant the card seeds.
    pub kind: PlantKind,
    /// Sun cost of the seed.
    pub cost: u32,
    /// Time left until the card finishes recharging.
    pub ready_in: Duration,
    /// Whether the bank currently covers the seed cost.
    pub affordable: bool,
    /// Whether the card is the active selection.
    pub selected: bool,
    /// Body color reflecting the card's availability.
    pub fill: Color,
}

impl CardPresentation {
    /// Creates a new card presentation descriptor.
    #[must_use]
    pub const fn new(
        slot: CardSlot,
        kind: PlantKind,
        cost: u32,
        ready_in: Duration,
        affordable: bool,
        selected: bool,
        fill: Color,
    ) -> Self {
        Self {
            slot,
            kind,
            cost,
            ready_in,
            affordable,
            selected,
            fill,
        }
    }
}

/// HUD companion to the lawn: economy, cards, and run progress.
#[derive(Clone, Debug, PartialEq)]
pub struct HudPresentation {
    /// Pacing profile the run is played under.
    pub mode: Mode,
    /// Lifecycle phase of the run.
    pub run_state: RunState,
    /// Current sun balance.
    pub balance: u32,
    /// Time left before the run is survived.
    pub remaining: Duration,
    /// Seed cards in tray order.
    pub cards: Vec<CardPresentation>,
}

impl HudPresentation {
    /// Creates a new HUD descriptor.
    #[must_use]
    pub fn new(
        mode: Mode,
        run_state: RunState,
        balance: u32,
        remaining: Duration,
        cards: Vec<CardPresentation>,
    ) -> Self {
        Self {
            mode,
            run_state,
            balance,
            remaining,
            cards,
        }
    }
}

/// Scene description combining the lawn layout, its inhabitants and the HUD.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Lawn layout and transform.
    pub lawn: LawnPresentation,
    /// HUD state for the current frame.
    pub hud: HudPresentation,
    /// Plants rooted on the lawn.
    pub plants: Vec<PlantPresentation>,
    /// Zombies advancing down their lanes.
    pub zombies: Vec<ZombiePresentation>,
    /// Projectiles in flight.
    pub projectiles: Vec<ProjectilePresentation>,
    /// Collectible suns drifting over the lawn.
    pub suns: Vec<SunPresentation>,
    /// Lane mowers in every state.
    pub mowers: Vec<MowerPresentation>,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        lawn: LawnPresentation,
        hud: HudPresentation,
        plants: Vec<PlantPresentation>,
        zombies: Vec<ZombiePresentation>,
        projectiles: Vec<ProjectilePresentation>,
        suns: Vec<SunPresentation>,
        mowers: Vec<MowerPresentation>,
    ) -> Self {
        Self {
            lawn,
            hud,
            plants,
            zombies,
            projectiles,
            suns,
            mowers,
        }
    }
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderingError {
    /// Tile dimensions must be positive to avoid a degenerate transform.
    InvalidTileSize {
        /// Provided tile width that failed validation.
        tile_width: f32,
        /// Provided tile height that failed validation.
        tile_height: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileSize {
                tile_width,
                tile_height,
            } => {
                write!(
                    f,
                    "tile dimensions must be positive (received {tile_width}x{tile_height})"
                )
            }
        }
    }
}

impl Error for RenderingError {}
