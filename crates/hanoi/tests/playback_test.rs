//! Tests for auto-solve playback sequencing and cancellation.

use hanoi::{Board, Game, Playback, Rod, DISK_COUNT};

#[test]
fn test_auto_solve_resets_before_planning() {
    let mut game = Game::new();
    assert!(game.apply_move(Rod::Left, Rod::Right));
    assert_eq!(game.move_count(), 1);

    assert!(game.auto_solve());
    assert!(game.is_solving());
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.board(), &Board::new(DISK_COUNT));
    assert_eq!(game.status(), "Solving recursively...");
}

#[test]
fn test_auto_solve_while_running_is_noop() {
    let mut game = Game::new();
    assert!(game.auto_solve());
    assert!(game.playback_step());

    assert!(!game.auto_solve());
    assert!(game.is_solving());
    assert_eq!(game.move_count(), 1, "re-invocation must not restart the plan");
}

#[test]
fn test_playback_runs_to_completion() {
    let mut game = Game::new();
    assert!(game.auto_solve());

    // Seven planned moves, each asking to be rescheduled.
    for step in 1..=7 {
        assert!(game.playback_step(), "step {} should continue", step);
        assert_eq!(game.move_count(), step);
        assert!(game.board().is_ordered());
    }

    // The board is solved but the run is still active for one more
    // step, so the win stays hidden until the completion status lands.
    assert_eq!(game.board().rod(Rod::Right), &[3, 2, 1]);
    assert!(game.is_solving());
    assert!(!game.is_won());

    assert!(!game.playback_step());
    assert!(!game.is_solving());
    assert!(game.is_won());
    assert_eq!(game.move_count(), 7);
    assert_eq!(game.status(), "Recursive solution complete!");
}

#[test]
fn test_reset_cancels_pending_step() {
    let mut game = Game::new();
    assert!(game.auto_solve());
    assert!(game.playback_step());
    assert!(game.playback_step());

    game.reset();
    assert!(!game.is_solving());
    assert_eq!(game.move_count(), 0);

    // The stale timer fires anyway: nothing may change.
    assert!(!game.playback_step());
    assert_eq!(game.board(), &Board::new(DISK_COUNT));
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.status(), "Game Reset. Good luck!");
}

#[test]
fn test_step_without_playback_is_noop() {
    let mut game = Game::new();
    assert!(!game.playback_step());
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_plan_is_consumed_front_first() {
    let mut playback = Playback::new(hanoi::solve(2, Rod::Left, Rod::Right, Rod::Middle));
    assert_eq!(playback.remaining(), 3);

    let first = playback.next().expect("plan has three moves");
    assert_eq!(first.from, Rod::Left);
    assert_eq!(first.to, Rod::Middle);
    assert_eq!(playback.remaining(), 2);

    playback.next();
    playback.next();
    assert!(playback.is_done());
    assert_eq!(playback.next(), None);
}
