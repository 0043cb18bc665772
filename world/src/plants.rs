//! Authoritative plant storage with generational handles.

use lawn_defence_core::{GridCoord, Health, PlantId, PlantKind};

/// State of a single plant stored inside the world.
#[derive(Clone, Debug)]
pub(crate) struct PlantState {
    /// Identifier allocated by the world for the plant.
    pub(crate) id: PlantId,
    /// Kind of plant occupying the cell.
    pub(crate) kind: PlantKind,
    /// Lawn cell the plant is rooted in.
    pub(crate) cell: GridCoord,
    /// Remaining hit points.
    pub(crate) health: Health,
    /// Seconds left until the plant may act. Stays zero for actionless kinds.
    pub(crate) action_in: f32,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    state: Option<PlantState>,
}

/// Arena that stores plants and allocates generational identifiers.
///
/// Slot indices are recycled but the generation counter is bumped on every
/// removal, so handles held by zombies go stale instead of aliasing a newer
/// plant in the same slot.
#[derive(Debug)]
pub(crate) struct PlantArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl PlantArena {
    /// Creates an empty arena with no retired slots.
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Inserts a plant and returns the generational handle pointing at it.
    pub(crate) fn insert(&mut self, kind: PlantKind, cell: GridCoord, action_in: f32) -> PlantId {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    state: None,
                });
                index
            }
        };

        let slot = &mut self.slots[index as usize];
        debug_assert!(slot.state.is_none(), "allocated slot must be vacant");
        let id = PlantId::new(index, slot.generation);
        slot.state = Some(PlantState {
            id,
            kind,
            cell,
            health: kind.max_health(),
            action_in,
        });
        id
    }

    /// Resolves a handle to the live plant it points at, if any.
    pub(crate) fn get(&self, id: PlantId) -> Option<&PlantState> {
        let slot = self.slots.get(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.state.as_ref()
    }

    /// Resolves a handle to the live plant it points at for mutation.
    pub(crate) fn get_mut(&mut self, id: PlantId) -> Option<&mut PlantState> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.state.as_mut()
    }

    /// Removes a plant, retiring its slot generation.
    pub(crate) fn remove(&mut self, id: PlantId) -> Option<PlantState> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.generation != id.generation() || slot.state.is_none() {
            return None;
        }
        let state = slot.state.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        state
    }

    /// Iterator over live plants in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &PlantState> {
        self.slots.iter().filter_map(|slot| slot.state.as_ref())
    }

    /// Counts down every live plant's action timer, clamping at zero.
    pub(crate) fn advance_timers(&mut self, dt_secs: f32) {
        for slot in &mut self.slots {
            if let Some(plant) = slot.state.as_mut() {
                plant.action_in = (plant.action_in - dt_secs).max(0.0);
            }
        }
    }

    /// Number of live plants currently stored.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.state.is_some())
            .count()
    }
}

/// Dense cell-to-plant index kept in lockstep with the arena.
#[derive(Debug)]
pub(crate) struct OccupancyGrid {
    columns: u32,
    rows: u32,
    cells: Vec<Option<PlantId>>,
}

impl OccupancyGrid {
    /// Creates an empty occupancy grid with the provided dimensions.
    pub(crate) fn new(columns: u32, rows: u32) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            cells: vec![None; capacity],
        }
    }

    /// Reports whether the cell lies on the lawn and hosts no plant.
    pub(crate) fn is_vacant(&self, cell: GridCoord) -> bool {
        self.index(cell).map_or(false, |index| {
            self.cells.get(index).copied().unwrap_or(None).is_none()
        })
    }

    /// Returns the plant rooted in the provided cell, if any.
    pub(crate) fn plant_at(&self, cell: GridCoord) -> Option<PlantId> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Records that a plant took root in the cell.
    pub(crate) fn occupy(&mut self, id: PlantId, cell: GridCoord) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                debug_assert!(slot.is_none(), "occupied cell must be vacated first");
                *slot = Some(id);
            }
        }
    }

    /// Clears the cell after a plant is removed.
    pub(crate) fn vacate(&mut self, cell: GridCoord) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = None;
            }
        }
    }

    fn index(&self, cell: GridCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}
