//! Procedural road generation
//!
//! A road is a line of cells, each either `Passable` or a `Gap`. Generation
//! guarantees two invariants by construction:
//! - cell 0 is always passable (the player spawns there)
//! - a gap is always followed by a passable cell (every gap can be cleared
//!   with a 2-step jump)

use std::collections::VecDeque;
use std::fmt;

use glam::Vec2;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::cell_to_world;
use crate::error::GameError;

/// One position on the road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Passable,
    Gap,
}

impl Cell {
    #[inline]
    pub fn is_gap(self) -> bool {
        self == Cell::Gap
    }
}

/// Source of fair coin flips for the generator
pub trait BitSource {
    /// `true` means "make this cell a gap"
    fn next_bit(&mut self) -> bool;
}

impl<R: RngCore> BitSource for R {
    fn next_bit(&mut self) -> bool {
        self.random::<bool>()
    }
}

/// Replays a fixed bit sequence; yields `false` once exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedBits {
    bits: VecDeque<bool>,
}

impl ScriptedBits {
    pub fn new(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// Bits not consumed yet
    pub fn remaining(&self) -> usize {
        self.bits.len()
    }
}

impl BitSource for ScriptedBits {
    fn next_bit(&mut self) -> bool {
        self.bits.pop_front().unwrap_or(false)
    }
}

/// Where an external renderer should place the visual for a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    pub index: usize,
    pub cell: Cell,
    pub pos: Vec2,
}

/// The ordered cells of the current run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    cells: Vec<Cell>,
}

impl Road {
    /// Generate a road of `length` cells
    ///
    /// Forced cells (those right after a gap) do not consume a bit, so a
    /// given bit sequence always yields the same road.
    pub fn generate<B>(length: usize, bits: &mut B) -> Result<Self, GameError>
    where
        B: BitSource + ?Sized,
    {
        if length == 0 {
            return Err(GameError::invalid("road_length", "must be at least 1"));
        }

        let mut cells = Vec::with_capacity(length);
        cells.push(Cell::Passable);
        for i in 1..length {
            let cell = if cells[i - 1].is_gap() {
                Cell::Passable
            } else if bits.next_bit() {
                Cell::Gap
            } else {
                Cell::Passable
            };
            cells.push(cell);
        }

        let road = Self { cells };
        log::info!("Generated road of {} cells ({} gaps)", length, road.gap_count());
        Ok(road)
    }

    /// Build a road from hand-authored cells, checking the generation invariants
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, GameError> {
        match cells.first() {
            None => return Err(GameError::invalid("road", "must contain at least one cell")),
            Some(Cell::Gap) => return Err(GameError::invalid("road", "cell 0 must be passable")),
            Some(Cell::Passable) => {}
        }
        if let Some(i) = cells.windows(2).position(|w| w[0].is_gap() && w[1].is_gap()) {
            return Err(GameError::invalid(
                "road",
                format!("gaps at {} and {} are adjacent", i, i + 1),
            ));
        }
        Ok(Self { cells })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed road
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `index`, or `None` past the end of the road
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn gap_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_gap()).count()
    }

    /// Placement of every cell along the x axis, `cell_width` apart
    pub fn layout(&self, cell_width: f32) -> impl Iterator<Item = CellPlacement> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &cell)| CellPlacement {
                index,
                cell,
                pos: cell_to_world(index, cell_width),
            })
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let ch = match cell {
                Cell::Passable => '#',
                Cell::Gap => '_',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
