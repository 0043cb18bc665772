#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Lawn Defence engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Lawn Defence.";

/// Describes the pacing profile a run is played under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Standard run with a gentle spawn ramp over two minutes.
    Adventure,
    /// Short run with a doubled spawn ramp and a lower interval floor.
    Blitz,
}

impl Mode {
    /// Simulated time the lawn must survive for the run to be won.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Adventure => Duration::from_secs(120),
            Self::Blitz => Duration::from_secs(60),
        }
    }

    /// Rate at which the zombie spawn interval shrinks, in seconds per
    /// simulated second.
    #[must_use]
    pub const fn spawn_decay_per_sec(self) -> f32 {
        match self {
            Self::Adventure => 0.005,
            Self::Blitz => 0.010,
        }
    }

    /// Lower bound the zombie spawn interval never decays past.
    #[must_use]
    pub const fn spawn_floor_secs(self) -> f32 {
        match self {
            Self::Adventure => 1.2,
            Self::Blitz => 0.6,
        }
    }

    /// Human-readable name of the mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Adventure => "Adventure",
            Self::Blitz => "Blitz",
        }
    }
}

/// Lifecycle phase of the current run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    /// The run is live and ticks advance the simulation.
    Playing,
    /// The lawn survived the full run duration.
    Won,
    /// A zombie crossed the defended boundary.
    Lost,
}

/// Terminal result reported when a run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The full run duration elapsed with the boundary intact.
    Won,
    /// A zombie reached the defended boundary alive.
    Lost,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Discards the current run and starts a fresh one in the given mode.
    Reset {
        /// Pacing profile the new run is played under.
        mode: Mode,
    },
    /// Toggles selection of a seed card in the tray.
    SelectCard {
        /// Tray slot the player clicked.
        slot: CardSlot,
    },
    /// Requests placement of the currently selected seed at a lawn cell.
    PlaceSelected {
        /// Lawn cell the player clicked.
        cell: GridCoord,
    },
    /// Requests collection of a sun pickup into the bank.
    CollectSun {
        /// Identifier of the sun the player clicked.
        sun: SunId,
    },
    /// Requests that a new zombie enter the lawn at the spawn edge.
    SpawnZombie {
        /// Variant of zombie to create.
        kind: ZombieKind,
        /// Lane row the zombie walks down.
        lane: u32,
        /// Walk speed assigned to the zombie, in columns per second.
        speed: f32,
    },
    /// Requests that a sky sun start falling toward the lawn.
    DropSun {
        /// Horizontal drop position measured in columns.
        x: f32,
        /// Vertical rest position the sun falls to, measured in rows.
        target_y: f32,
    },
    /// Requests that a shooter plant fire a projectile down its lane.
    FireProjectile {
        /// Identifier of the plant expected to fire.
        plant: PlantId,
    },
    /// Requests that a producer plant emit a sun pickup.
    ProduceSun {
        /// Identifier of the plant expected to produce.
        plant: PlantId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that a fresh run began.
    RunStarted {
        /// Pacing profile of the new run.
        mode: Mode,
    },
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Announces that the run reached a terminal state.
    RunEnded {
        /// Result the run finished with.
        outcome: RunOutcome,
    },
    /// Confirms that a seed card became the active selection.
    CardSelected {
        /// Tray slot that was selected.
        slot: CardSlot,
    },
    /// Confirms that the active seed card selection was cleared.
    CardDeselected {
        /// Tray slot that was deselected.
        slot: CardSlot,
    },
    /// Reports that a card selection request was rejected.
    CardSelectionRejected {
        /// Tray slot named in the request.
        slot: CardSlot,
        /// Specific reason the selection failed.
        reason: SelectionRejection,
    },
    /// Confirms that a plant was placed onto the lawn.
    PlantPlaced {
        /// Identifier assigned to the plant by the world.
        plant: PlantId,
        /// Kind of plant that was placed.
        kind: PlantKind,
        /// Cell the plant now occupies.
        cell: GridCoord,
    },
    /// Reports that a plant placement request was rejected.
    PlantPlacementRejected {
        /// Cell provided in the placement request.
        cell: GridCoord,
        /// Specific reason the placement failed.
        reason: PlacementRejection,
    },
    /// Confirms that a plant was destroyed by zombie bites.
    PlantDied {
        /// Identifier of the plant that was destroyed.
        plant: PlantId,
        /// Kind of plant that was destroyed.
        kind: PlantKind,
        /// Cell the plant vacated.
        cell: GridCoord,
    },
    /// Confirms that a sun pickup appeared.
    SunSpawned {
        /// Identifier assigned to the sun by the world.
        sun: SunId,
        /// Where the sun came from.
        origin: SunOrigin,
    },
    /// Confirms that a sun pickup was banked.
    SunCollected {
        /// Identifier of the collected sun.
        sun: SunId,
        /// Amount credited to the bank.
        value: u32,
        /// Bank balance after the credit.
        balance: u32,
    },
    /// Reports that a sun pickup timed out before collection.
    SunExpired {
        /// Identifier of the expired sun.
        sun: SunId,
    },
    /// Reports that a sun collection request was rejected.
    SunCollectionRejected {
        /// Identifier named in the request.
        sun: SunId,
        /// Specific reason the collection failed.
        reason: CollectRejection,
    },
    /// Confirms that a zombie entered the lawn.
    ZombieSpawned {
        /// Identifier assigned to the zombie by the world.
        zombie: ZombieId,
        /// Variant of zombie that spawned.
        kind: ZombieKind,
        /// Lane row the zombie walks down.
        lane: u32,
    },
    /// Confirms that a zombie was destroyed.
    ZombieKilled {
        /// Identifier of the destroyed zombie.
        zombie: ZombieId,
        /// What destroyed the zombie.
        cause: KillCause,
    },
    /// Confirms that a shooter plant fired a projectile.
    ProjectileFired {
        /// Identifier assigned to the projectile by the world.
        projectile: ProjectileId,
        /// Plant that fired the projectile.
        plant: PlantId,
        /// Lane row the projectile travels down.
        lane: u32,
    },
    /// Confirms that a projectile struck a zombie.
    ProjectileHit {
        /// Identifier of the projectile that landed.
        projectile: ProjectileId,
        /// Zombie that absorbed the hit.
        zombie: ZombieId,
    },
    /// Reports that a projectile left the lawn without striking anything.
    ProjectileExpired {
        /// Identifier of the discarded projectile.
        projectile: ProjectileId,
    },
    /// Confirms that a lane mower began its sweep.
    MowerTriggered {
        /// Lane row the mower defends.
        lane: u32,
    },
    /// Reports that a lane mower finished its sweep and left the lawn.
    MowerSpent {
        /// Lane row the mower defended.
        lane: u32,
    },
}

/// Unique identifier assigned to a plant.
///
/// Plant identifiers pair an arena slot index with a generation counter so
/// that references held by zombies can never resolve to a different plant
/// after the slot is reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId {
    index: u32,
    generation: u32,
}

impl PlantId {
    /// Creates a new plant identifier from a slot index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Arena slot index the identifier points at.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Generation the slot held when the identifier was issued.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

/// Unique identifier assigned to a zombie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZombieId(u32);

impl ZombieId {
    /// Creates a new zombie identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectileId(u32);

impl ProjectileId {
    /// Creates a new projectile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a sun pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SunId(u32);

impl SunId {
    /// Creates a new sun identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Index of a seed card slot within the tray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardSlot(u8);

impl CardSlot {
    /// Creates a new card slot index.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Retrieves the underlying slot index.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

/// Location of a single lawn cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    column: u32,
    row: u32,
}

impl GridCoord {
    /// Creates a new lawn cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell, counted from the house side.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell. Rows double as lanes.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Horizontal center of the cell measured in columns.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.column as f32 + 0.5
    }
}

/// Integer hit points carried by plants and zombies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Health(u32);

impl Health {
    /// Creates a health value with the provided number of hit points.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the remaining hit points.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Reports whether no hit points remain.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts damage, clamping at zero rather than wrapping.
    #[must_use]
    pub const fn saturating_sub(self, damage: u32) -> Self {
        Self(self.0.saturating_sub(damage))
    }
}

/// Varieties of plants the player can place on the lawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantKind {
    /// Producer that periodically emits sun pickups.
    Sunflower,
    /// Shooter that fires peas down its lane at the nearest zombie.
    Peashooter,
    /// Barrier with no action and a large health pool.
    Wallnut,
}

impl PlantKind {
    /// All plant kinds in seed tray order.
    pub const ALL: [Self; 3] = [Self::Sunflower, Self::Peashooter, Self::Wallnut];

    /// Sun cost deducted from the bank when the plant is placed.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Self::Sunflower => 50,
            Self::Peashooter => 100,
            Self::Wallnut => 50,
        }
    }

    /// Hit points the plant is placed with.
    #[must_use]
    pub const fn max_health(self) -> Health {
        match self {
            Self::Sunflower => Health::new(160),
            Self::Peashooter => Health::new(180),
            Self::Wallnut => Health::new(720),
        }
    }

    /// Interval between the plant's actions, if it has one.
    ///
    /// Shooters fire and producers emit sun once per interval. Barrier
    /// plants return `None` and never act.
    #[must_use]
    pub const fn action_interval_secs(self) -> Option<f32> {
        match self {
            Self::Sunflower => Some(7.5),
            Self::Peashooter => Some(1.4),
            Self::Wallnut => None,
        }
    }

    /// Seconds the seed card recharges for after a placement.
    #[must_use]
    pub const fn card_recharge_secs(self) -> f32 {
        match self {
            Self::Sunflower => 7.0,
            Self::Peashooter => 5.0,
            Self::Wallnut => 9.0,
        }
    }

    /// Half-open band the plant's first action delay is drawn from.
    ///
    /// The randomized offset desynchronizes plants placed on the same frame.
    /// Kinds without an action return `None` and consume no randomness.
    #[must_use]
    pub const fn initial_delay_band_secs(self) -> Option<(f32, f32)> {
        match self {
            Self::Sunflower => Some((2.5, 5.0)),
            Self::Peashooter => Some((0.1, 0.8)),
            Self::Wallnut => None,
        }
    }

    /// Human-readable name used by almanac listings.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sunflower => "Sunflower",
            Self::Peashooter => "Peashooter",
            Self::Wallnut => "Wall-nut",
        }
    }

    /// One-line almanac description of the plant.
    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Sunflower => "Converts sunlight into bankable sun pickups.",
            Self::Peashooter => "Fires peas at the first zombie in its lane.",
            Self::Wallnut => "Blocks the lane and soaks up bites.",
        }
    }
}

/// Varieties of zombies that attack the lawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZombieKind {
    /// Ordinary zombie that shambles left and eats whatever blocks it.
    Walker,
}

impl ZombieKind {
    /// All zombie kinds in almanac order.
    pub const ALL: [Self; 1] = [Self::Walker];

    /// Hit points the zombie spawns with.
    #[must_use]
    pub const fn max_health(self) -> Health {
        match self {
            Self::Walker => Health::new(200),
        }
    }

    /// Damage dealt per second while eating a plant.
    #[must_use]
    pub const fn bite_damage_per_sec(self) -> f32 {
        match self {
            Self::Walker => 40.0,
        }
    }

    /// Half-open band walk speeds are drawn from, in columns per second.
    #[must_use]
    pub const fn walk_speed_band(self) -> (f32, f32) {
        match self {
            Self::Walker => (0.225, 0.350),
        }
    }

    /// Human-readable name used by almanac listings.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Walker => "Zombie",
        }
    }

    /// One-line almanac description of the zombie.
    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Walker => "Walks the lane and eats anything planted in its way.",
        }
    }
}

/// Where a sun pickup came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunOrigin {
    /// Dropped from the sky by the spawner.
    Sky,
    /// Produced by a sunflower.
    Sunflower,
}

/// Vertical motion phase of a sun pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunPhase {
    /// Accelerating toward its rest height.
    Falling,
    /// Settled and drifting slowly upward until it expires.
    Floating,
}

/// What destroyed a zombie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KillCause {
    /// Accumulated projectile damage reached zero health.
    Projectile,
    /// A sweeping lane mower ran the zombie over.
    Mower,
}

/// Progress state of a lane mower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MowerState {
    /// Parked at the lane edge, armed to trigger once.
    Idle,
    /// Sweeping rightward across the lane.
    Sweeping,
    /// Already consumed; the lane is undefended.
    Spent,
}

/// Behavior state a zombie snapshot was captured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZombieState {
    /// Advancing toward the defended boundary.
    Walking,
    /// Bound to a plant and chewing on it.
    Eating {
        /// Plant currently being eaten.
        plant: PlantId,
    },
}

/// Reasons a plant placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementRejection {
    /// The run already reached a terminal state.
    RunEnded,
    /// No seed card is currently selected.
    NoSelection,
    /// The requested cell lies outside the lawn.
    OutOfBounds,
    /// The requested cell already hosts a plant.
    Occupied,
    /// The selected seed card has not finished recharging.
    OnCooldown,
    /// The bank holds less sun than the seed costs.
    Unaffordable,
}

/// Reasons a seed card selection request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionRejection {
    /// The run already reached a terminal state.
    RunEnded,
    /// The tray has no card at the requested slot.
    UnknownSlot,
    /// The seed card has not finished recharging.
    OnCooldown,
    /// The bank holds less sun than the seed costs.
    Unaffordable,
}

/// Reasons a sun collection request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectRejection {
    /// The run already reached a terminal state.
    RunEnded,
    /// No sun with the provided identifier is on the lawn.
    UnknownSun,
}

/// Pairing of a shooter plant with the zombie it should fire at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShooterTarget {
    /// Shooter plant that has a zombie in range.
    pub plant: PlantId,
    /// Zombie selected as the shot's target.
    pub zombie: ZombieId,
    /// Lane row shared by the shooter and the target.
    pub lane: u32,
}

/// Immutable representation of a single plant's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlantSnapshot {
    /// Unique identifier assigned to the plant.
    pub id: PlantId,
    /// Kind of plant occupying the cell.
    pub kind: PlantKind,
    /// Lawn cell the plant is rooted in.
    pub cell: GridCoord,
    /// Remaining hit points.
    pub health: Health,
    /// Hit points the plant was placed with.
    pub max_health: Health,
}

/// Read-only snapshot describing all plants on the lawn.
#[derive(Clone, Debug, Default)]
pub struct PlantView {
    snapshots: Vec<PlantSnapshot>,
}

impl PlantView {
    /// Creates a new plant view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<PlantSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured plant snapshots in deterministic order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &PlantSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<PlantSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single zombie's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZombieSnapshot {
    /// Unique identifier assigned to the zombie.
    pub id: ZombieId,
    /// Variant of the zombie.
    pub kind: ZombieKind,
    /// Lane row the zombie walks down.
    pub lane: u32,
    /// Horizontal position measured in columns.
    pub x: f32,
    /// Walk speed in columns per second.
    pub speed: f32,
    /// Remaining hit points.
    pub health: Health,
    /// Hit points the zombie spawned with.
    pub max_health: Health,
    /// Behavior state at capture time.
    pub state: ZombieState,
}

/// Read-only snapshot describing all zombies on the lawn.
#[derive(Clone, Debug, Default)]
pub struct ZombieView {
    snapshots: Vec<ZombieSnapshot>,
}

impl ZombieView {
    /// Creates a new zombie view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<ZombieSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured zombie snapshots in deterministic order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &ZombieSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<ZombieSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single projectile used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileSnapshot {
    /// Unique identifier assigned to the projectile.
    pub id: ProjectileId,
    /// Lane row the projectile travels down.
    pub lane: u32,
    /// Horizontal position measured in columns.
    pub x: f32,
}

/// Immutable representation of a single sun pickup used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunSnapshot {
    /// Unique identifier assigned to the sun.
    pub id: SunId,
    /// Horizontal position measured in columns.
    pub x: f32,
    /// Vertical position measured in rows.
    pub y: f32,
    /// Amount the sun banks when collected.
    pub value: u32,
    /// Vertical motion phase at capture time.
    pub phase: SunPhase,
    /// Time left before the sun expires uncollected.
    pub remaining: Duration,
}

/// Immutable representation of a single lane mower used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MowerSnapshot {
    /// Lane row the mower defends.
    pub lane: u32,
    /// Horizontal position measured in columns.
    pub x: f32,
    /// Progress state at capture time.
    pub state: MowerState,
}

/// Immutable representation of a single seed card used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSnapshot {
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
}

/// Immutable representation of a plant's action readiness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlantCooldownSnapshot {
    /// Plant the readiness belongs to.
    pub plant: PlantId,
    /// Kind of the plant, used to pick the action on ready.
    pub kind: PlantKind,
    /// Time left until the plant may act again. Zero means ready.
    pub ready_in: Duration,
}

/// Read-only snapshot describing action readiness for all plants.
#[derive(Clone, Debug, Default)]
pub struct PlantCooldownView {
    snapshots: Vec<PlantCooldownSnapshot>,
}

impl PlantCooldownView {
    /// Creates a new cooldown view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<PlantCooldownSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.plant);
        Self { snapshots }
    }

    /// Iterator over the captured cooldown snapshots in deterministic order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &PlantCooldownSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<PlantCooldownSnapshot> {
        self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CardSlot, CollectRejection, GridCoord, Health, Mode, PlacementRejection, PlantId,
        PlantKind, SelectionRejection, ZombieKind,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn plant_id_round_trips_through_bincode() {
        let plant = PlantId::new(7, 3);
        assert_round_trip(&plant);
    }

    #[test]
    fn grid_coord_round_trips_through_bincode() {
        let cell = GridCoord::new(4, 2);
        assert_round_trip(&cell);
    }

    #[test]
    fn plant_kind_round_trips_through_bincode() {
        assert_round_trip(&PlantKind::Wallnut);
    }

    #[test]
    fn mode_round_trips_through_bincode() {
        assert_round_trip(&Mode::Blitz);
    }

    #[test]
    fn card_slot_round_trips_through_bincode() {
        assert_round_trip(&CardSlot::new(2));
    }

    #[test]
    fn rejection_reasons_round_trip_through_bincode() {
        assert_round_trip(&PlacementRejection::Occupied);
        assert_round_trip(&SelectionRejection::Unaffordable);
        assert_round_trip(&CollectRejection::UnknownSun);
    }

    #[test]
    fn plant_ids_order_by_slot_then_generation() {
        assert!(PlantId::new(0, 5) < PlantId::new(1, 0));
        assert!(PlantId::new(3, 1) < PlantId::new(3, 2));
    }

    #[test]
    fn grid_coord_center_sits_mid_column() {
        let cell = GridCoord::new(2, 4);
        assert!((cell.center_x() - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn health_saturates_at_zero() {
        let health = Health::new(15);
        let drained = health.saturating_sub(40);
        assert!(drained.is_zero());
        assert_eq!(drained.get(), 0);
    }

    #[test]
    fn seed_costs_match_the_stat_table() {
        assert_eq!(PlantKind::Sunflower.cost(), 50);
        assert_eq!(PlantKind::Peashooter.cost(), 100);
        assert_eq!(PlantKind::Wallnut.cost(), 50);
    }

    #[test]
    fn barrier_plants_never_act() {
        assert!(PlantKind::Wallnut.action_interval_secs().is_none());
        assert!(PlantKind::Wallnut.initial_delay_band_secs().is_none());
    }

    #[test]
    fn walker_speed_band_is_ordered() {
        let (slow, fast) = ZombieKind::Walker.walk_speed_band();
        assert!(slow < fast);
    }

    #[test]
    fn blitz_runs_shorter_and_ramps_faster() {
        assert!(Mode::Blitz.duration() < Mode::Adventure.duration());
        assert!(Mode::Blitz.spawn_decay_per_sec() > Mode::Adventure.spawn_decay_per_sec());
        assert!(Mode::Blitz.spawn_floor_secs() < Mode::Adventure.spawn_floor_secs());
    }
}
