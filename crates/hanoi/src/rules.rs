//! Game rules and state machine for Tower of Hanoi.

use crate::playback::Playback;
use crate::solver::solve;
use crate::types::{Board, Disk, MoveError, Rod};
use tracing::{debug, instrument};

/// Number of disks in the standard puzzle.
pub const DISK_COUNT: Disk = 3;

/// Tower of Hanoi game engine.
///
/// Owns the board, the player's rod selection, the move counter, the
/// status message, and the auto-solve plan when one is active. The
/// board is only ever mutated through [`Game::apply_move`] and
/// [`Game::playback_step`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    disks: Disk,
    selected: Option<Rod>,
    move_count: u32,
    status: String,
    playback: Option<Playback>,
}

impl Game {
    /// Creates a new game with [`DISK_COUNT`] disks on the left rod.
    #[instrument]
    pub fn new() -> Self {
        Self::with_disks(DISK_COUNT)
    }

    /// Creates a game with a custom tower height.
    #[instrument]
    pub fn with_disks(disks: Disk) -> Self {
        Self {
            board: Board::new(disks),
            disks,
            selected: None,
            move_count: 0,
            status: "Move all disks to the third rod!".to_string(),
            playback: None,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player's selected source rod, if any.
    pub fn selected(&self) -> Option<Rod> {
        self.selected
    }

    /// Returns the number of successfully applied moves.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Checks whether an auto-solve playback is in progress.
    pub fn is_solving(&self) -> bool {
        self.playback.is_some()
    }

    /// Checks whether the puzzle is solved.
    ///
    /// Suppressed while playback is active so the UI does not flash
    /// "solved" before the final move renders.
    pub fn is_won(&self) -> bool {
        self.board.rod(Rod::Right).len() == self.disks as usize && !self.is_solving()
    }

    /// Validates a move without applying it.
    fn check_move(&self, from: Rod, to: Rod) -> Result<Disk, MoveError> {
        if from == to {
            return Err(MoveError::SameRod);
        }
        let disk = self.board.top(from).ok_or(MoveError::EmptyRod(from))?;
        if let Some(onto) = self.board.top(to) {
            if disk > onto {
                return Err(MoveError::DiskTooLarge { disk, onto });
            }
        }
        Ok(disk)
    }

    /// Attempts to move the top disk of `from` onto `to`.
    ///
    /// Moving from an empty rod, or onto the same rod, fails silently:
    /// the call returns `false` and nothing changes, status included.
    /// Placing a disk on a smaller one is rejected with an
    /// invalid-move status. On success the counter increments and the
    /// status names the disk and destination.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, from: Rod, to: Rod) -> bool {
        let disk = match self.check_move(from, to) {
            Ok(disk) => disk,
            Err(err @ MoveError::DiskTooLarge { .. }) => {
                debug!(%err, "Move rejected");
                self.status = err.to_string();
                return false;
            }
            Err(err) => {
                debug!(%err, "Move rejected silently");
                return false;
            }
        };

        self.board.pop(from);
        self.board.push(to, disk);
        self.move_count += 1;
        self.status = format!("Moved disk {} to {}", disk, to);
        true
    }

    /// Handles a player click on a rod, driving the selection state
    /// machine.
    ///
    /// Unselected: clicking a non-empty rod selects it; clicking an
    /// empty one only reports that it is empty. Selected: clicking the
    /// same rod deselects; clicking another rod attempts the move, and
    /// if the move is rejected the clicked rod becomes the new
    /// selection when it has a disk to offer. Ignored entirely while
    /// auto-solve playback is active.
    #[instrument(skip(self))]
    pub fn click_rod(&mut self, rod: Rod) {
        if self.is_solving() {
            debug!("Click ignored during playback");
            return;
        }

        match self.selected {
            None => {
                if self.board.top(rod).is_some() {
                    self.selected = Some(rod);
                    self.status = format!("Selected {}", rod);
                } else {
                    self.status = format!("{} is empty", rod);
                }
            }
            Some(source) if source == rod => {
                self.selected = None;
                self.status = "Deselected rod.".to_string();
            }
            Some(source) => {
                if self.apply_move(source, rod) {
                    self.selected = None;
                } else if self.board.top(rod).is_some() {
                    // Failed attempt counts as picking a new source.
                    self.selected = Some(rod);
                } else {
                    self.selected = None;
                }
            }
        }
    }

    /// Clears the player's selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Restores the initial arrangement.
    ///
    /// Drops any active playback plan, so a stale timer tick that
    /// fires after the reset finds nothing to apply.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.playback = None;
        self.board = Board::new(self.disks);
        self.selected = None;
        self.move_count = 0;
        self.status = "Game Reset. Good luck!".to_string();
    }

    /// Starts an auto-solve run: resets the game and installs the
    /// optimal move plan.
    ///
    /// Returns `false` without touching anything if a playback is
    /// already active.
    #[instrument(skip(self))]
    pub fn auto_solve(&mut self) -> bool {
        if self.is_solving() {
            debug!("Auto-solve already running");
            return false;
        }
        self.reset();
        let plan = solve(self.disks, Rod::Left, Rod::Right, Rod::Middle);
        debug!(moves = plan.len(), "Auto-solve plan computed");
        self.playback = Some(Playback::new(plan));
        self.status = "Solving recursively...".to_string();
        true
    }

    /// Applies the next planned move, called by the playback driver
    /// once per delay interval.
    ///
    /// Returns `true` while another step should be scheduled. The
    /// playback stays active for one extra step after the final move
    /// so the solved board renders before the completion status (and
    /// before [`Game::is_won`] reports true). A no-op returning
    /// `false` when no playback is active.
    #[instrument(skip(self))]
    pub fn playback_step(&mut self) -> bool {
        let Some(playback) = self.playback.as_mut() else {
            return false;
        };

        match playback.next() {
            Some(mv) => {
                if let Some(disk) = self.board.transfer(mv) {
                    self.move_count += 1;
                    debug!(%mv, disk, "Playback move applied");
                }
                true
            }
            None => {
                self.playback = None;
                self.status = "Recursive solution complete!".to_string();
                false
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
