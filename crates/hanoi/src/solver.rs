//! Recursive move generation for Tower of Hanoi.

use crate::types::{Move, Rod};
use tracing::instrument;

/// Computes the minimal move sequence relocating a tower of `disks`
/// from `source` to `target` using `auxiliary` as scratch space.
///
/// Standard divide-and-conquer: move the top `n-1` disks out of the
/// way, move the largest disk, move the `n-1` disks back on top of it.
/// The result always has exactly `2^n - 1` moves; `disks == 0` yields
/// an empty sequence.
///
/// Pure function: no board is consulted or mutated.
#[instrument]
pub fn solve(disks: u8, source: Rod, target: Rod, auxiliary: Rod) -> Vec<Move> {
    let mut moves = Vec::new();
    recurse(disks, source, target, auxiliary, &mut moves);
    moves
}

fn recurse(count: u8, source: Rod, target: Rod, auxiliary: Rod, moves: &mut Vec<Move>) {
    if count == 0 {
        return;
    }
    recurse(count - 1, source, auxiliary, target, moves);
    moves.push(Move::new(source, target));
    recurse(count - 1, auxiliary, target, source, moves);
}
