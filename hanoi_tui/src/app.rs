//! Application state and playback driving.

use hanoi::{Game, Rod, STEP_DELAY_MS};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// Message sent by the playback timer each time the step delay elapses.
#[derive(Debug, Clone, Copy)]
pub struct SolveTick;

/// Main application state.
///
/// Wraps the game engine and owns the auto-solve timer task. At most
/// one timer runs at a time; the game itself holds the move plan, so
/// the timer carries no state and can be aborted at any point.
pub struct App {
    game: Game,
    tick_tx: UnboundedSender<SolveTick>,
    timer: Option<JoinHandle<()>>,
}

impl App {
    /// Creates a new application.
    pub fn new(tick_tx: UnboundedSender<SolveTick>) -> Self {
        Self {
            game: Game::new(),
            tick_tx,
            timer: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Forwards a rod click to the selection state machine.
    pub fn click_rod(&mut self, index: usize) {
        if let Ok(rod) = Rod::try_from(index) {
            debug!(index, "Rod clicked");
            self.game.click_rod(rod);
        }
    }

    /// Resets the game, cancelling any running auto-solve first.
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.cancel_timer();
        self.game.reset();
    }

    /// Starts auto-solve and spawns the step timer.
    pub fn auto_solve(&mut self) {
        if !self.game.auto_solve() {
            debug!("Auto-solve already in progress");
            return;
        }
        self.cancel_timer();
        let tx = self.tick_tx.clone();
        self.timer = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(STEP_DELAY_MS)).await;
                if tx.send(SolveTick).is_err() {
                    break;
                }
            }
        }));
    }

    /// Applies the next planned move when the timer fires.
    pub fn on_tick(&mut self) {
        if !self.game.playback_step() {
            self.cancel_timer();
        }
    }

    /// Stops the timer task before the terminal is torn down.
    pub fn shutdown(&mut self) {
        self.cancel_timer();
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
