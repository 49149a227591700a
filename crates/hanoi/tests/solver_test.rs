//! Tests for the recursive move generator.

use hanoi::{solve, Game, Move, Rod};

#[test]
fn test_zero_disks_yields_no_moves() {
    assert!(solve(0, Rod::Left, Rod::Right, Rod::Middle).is_empty());
}

#[test]
fn test_move_count_is_power_of_two_minus_one() {
    for n in 0..=10u8 {
        let moves = solve(n, Rod::Left, Rod::Right, Rod::Middle);
        assert_eq!(
            moves.len(),
            (1usize << n) - 1,
            "solve({}) should yield 2^{} - 1 moves",
            n,
            n
        );
    }
}

#[test]
fn test_canonical_three_disk_sequence() {
    use Rod::{Left as L, Middle as M, Right as R};

    let expected = vec![
        Move::new(L, R),
        Move::new(L, M),
        Move::new(R, M),
        Move::new(L, R),
        Move::new(M, L),
        Move::new(M, R),
        Move::new(L, R),
    ];
    assert_eq!(solve(3, L, R, M), expected);
}

#[test]
fn test_moves_never_target_their_source() {
    for n in 1..=8u8 {
        for mv in solve(n, Rod::Left, Rod::Right, Rod::Middle) {
            assert_ne!(mv.from, mv.to, "degenerate move in plan for n={}", n);
        }
    }
}

#[test]
fn test_replay_is_always_legal_and_wins() {
    for n in 1..=6u8 {
        let mut game = Game::with_disks(n);
        for mv in solve(n, Rod::Left, Rod::Right, Rod::Middle) {
            assert!(
                game.apply_move(mv.from, mv.to),
                "generated move {} rejected for n={}",
                mv,
                n
            );
            assert!(game.board().is_ordered());
        }
        assert!(game.is_won(), "replay for n={} did not solve the puzzle", n);
        assert_eq!(game.move_count(), (1u32 << n) - 1);
    }
}

#[test]
fn test_solver_is_deterministic() {
    let first = solve(5, Rod::Middle, Rod::Left, Rod::Right);
    let second = solve(5, Rod::Middle, Rod::Left, Rod::Right);
    assert_eq!(first, second);
}
