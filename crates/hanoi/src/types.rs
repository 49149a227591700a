//! Core domain types for Tower of Hanoi.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A disk, identified solely by its size. Larger value = larger disk.
pub type Disk = u8;

/// One of the three rods on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Rod {
    /// Leftmost rod (index 0) — all disks start here.
    Left,
    /// Middle rod (index 1) — the auxiliary in the canonical solution.
    Middle,
    /// Rightmost rod (index 2) — the target rod; filling it wins.
    Right,
}

impl Rod {
    /// Returns the rod's board index (0-2).
    pub fn index(self) -> usize {
        match self {
            Rod::Left => 0,
            Rod::Middle => 1,
            Rod::Right => 2,
        }
    }

    /// Returns the player-facing label ("Rod 1" through "Rod 3").
    pub fn label(self) -> &'static str {
        match self {
            Rod::Left => "Rod 1",
            Rod::Middle => "Rod 2",
            Rod::Right => "Rod 3",
        }
    }
}

impl TryFrom<usize> for Rod {
    type Error = &'static str;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Rod::Left),
            1 => Ok(Rod::Middle),
            2 => Ok(Rod::Right),
            _ => Err("Rod index out of bounds (must be 0-2)"),
        }
    }
}

impl std::fmt::Display for Rod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Relocation of the top disk of one rod onto another.
///
/// Moves are first-class domain events: the solver emits them, the
/// playback plan queues them, and the rules apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The rod whose top disk moves.
    pub from: Rod,
    /// The rod receiving the disk.
    pub to: Rod,
}

impl Move {
    /// Creates a new move.
    pub fn new(from: Rod, to: Rod) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The full three-rod arrangement of disks.
///
/// Each rod is a stack ordered bottom-to-top; within a rod, sizes are
/// strictly decreasing toward the top. Mutation is crate-private so
/// disks only ever relocate through the game engine or playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Rod stacks indexed by `Rod::index()`, bottom-to-top.
    rods: [Vec<Disk>; 3],
}

impl Board {
    /// Creates a board with `disks` sizes stacked on the left rod,
    /// largest at the bottom, and the other rods empty.
    pub fn new(disks: Disk) -> Self {
        Self {
            rods: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
        }
    }

    /// Returns the stack on the given rod, bottom-to-top.
    pub fn rod(&self, rod: Rod) -> &[Disk] {
        &self.rods[rod.index()]
    }

    /// Returns the top disk of the given rod, if any.
    pub fn top(&self, rod: Rod) -> Option<Disk> {
        self.rods[rod.index()].last().copied()
    }

    /// Returns the total number of disks on the board.
    pub fn disk_count(&self) -> usize {
        self.rods.iter().map(Vec::len).sum()
    }

    /// Checks that every rod is strictly decreasing bottom-to-top.
    pub fn is_ordered(&self) -> bool {
        self.rods
            .iter()
            .all(|rod| rod.windows(2).all(|pair| pair[0] > pair[1]))
    }

    /// Removes and returns the top disk of the given rod.
    pub(crate) fn pop(&mut self, rod: Rod) -> Option<Disk> {
        self.rods[rod.index()].pop()
    }

    /// Places a disk on top of the given rod (unchecked).
    pub(crate) fn push(&mut self, rod: Rod, disk: Disk) {
        self.rods[rod.index()].push(disk);
    }

    /// Relocates the top disk of `mv.from` onto `mv.to` (unchecked —
    /// used by playback, where the plan is correct by construction).
    pub(crate) fn transfer(&mut self, mv: Move) -> Option<Disk> {
        let disk = self.pop(mv.from)?;
        self.push(mv.to, disk);
        Some(disk)
    }
}

/// Rejection reasons for a player move.
///
/// The `Display` text doubles as the user-facing status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Source and destination are the same rod.
    #[display("Source and destination rods are the same")]
    SameRod,

    /// The source rod has no disk to move.
    #[display("{} is empty", _0)]
    EmptyRod(Rod),

    /// The moving disk is larger than the destination's top disk.
    #[display("Invalid move! Larger disks cannot go on top.")]
    DiskTooLarge {
        /// The disk being moved.
        disk: Disk,
        /// The smaller disk it would land on.
        onto: Disk,
    },
}

impl std::error::Error for MoveError {}
