//! Single-ply threat detection
//!
//! Three detectors run ahead of any tree search in the decision policy:
//! immediate wins, high-impact placements, and multi-threat combos. Each
//! probes placements on a private copy of the board and reports "nothing
//! found" as `None` (or a zero score) so the policy can chain them without
//! error handling.

use crate::board::{Board, Pos, Stone};
use crate::eval::heuristic::run_length;
use crate::eval::{completes_line_at, DIRECTIONS};

use super::movegen::generate;

/// Find a move that wins on the spot.
///
/// Scans every empty cell in row-major order, simulates placing `stone`,
/// and returns the first cell that completes a win-length run.
pub fn immediate_win(board: &Board, stone: Stone, win_length: usize) -> Option<Pos> {
    let mut probe = board.clone();
    for row in 0..board.size() as u8 {
        for col in 0..board.size() as u8 {
            let pos = Pos::new(row, col);
            if !probe.is_empty(pos) {
                continue;
            }
            probe.place_stone(pos, stone);
            let wins = completes_line_at(&probe, pos, stone, win_length);
            probe.remove_stone(pos);
            if wins {
                return Some(pos);
            }
        }
    }
    None
}

/// Find the candidate creating the most new near-winning windows.
///
/// The impact of a placement is the number of win-length windows through it
/// that afterwards hold K-1 own stones, one empty cell, and no opponent
/// stone, i.e. sequences one move short of winning. Returns the first candidate
/// (generator order) attaining the maximum impact together with that score,
/// or `(None, 0)` when no candidate creates any threat.
pub fn high_impact_move(
    board: &Board,
    stone: Stone,
    win_length: usize,
    expansion_range: usize,
) -> (Option<Pos>, i32) {
    let mut probe = board.clone();
    let mut best = None;
    let mut best_score = 0;

    for pos in generate(board, expansion_range) {
        probe.place_stone(pos, stone);
        let score = count_near_wins(&probe, pos, stone, win_length);
        probe.remove_stone(pos);

        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    (best, best_score)
}

/// Number of win-length windows through `pos` holding exactly one empty cell
/// and no opponent stone.
fn count_near_wins(board: &Board, pos: Pos, stone: Stone, win_length: usize) -> i32 {
    let k = win_length as i32;
    let mut count = 0;

    for &(dr, dc) in &DIRECTIONS {
        // Windows along this axis containing pos start up to k-1 cells back.
        for back in 0..k {
            let start_r = pos.row as i32 - dr * back;
            let start_c = pos.col as i32 - dc * back;
            if !board.in_bounds(start_r, start_c)
                || !board.in_bounds(start_r + dr * (k - 1), start_c + dc * (k - 1))
            {
                continue;
            }

            let mut own = 0;
            let mut blocked = false;
            for i in 0..k {
                let p = Pos::new((start_r + dr * i) as u8, (start_c + dc * i) as u8);
                match board.get(p) {
                    s if s == stone => own += 1,
                    Stone::Empty => {}
                    _ => {
                        blocked = true;
                        break;
                    }
                }
            }
            if !blocked && own == k - 1 {
                count += 1;
            }
        }
    }

    count
}

/// Find a move that creates two or more simultaneous threats.
///
/// A threat on an axis is either a run one stone short of the win length
/// with an open end, or a run two short that is open on both ends with
/// enough room to reach the win length. Two such threats cannot both be
/// answered by a single opposing stone. Returns the first qualifying
/// candidate in generator order.
pub fn combo_move(
    board: &Board,
    stone: Stone,
    win_length: usize,
    expansion_range: usize,
) -> Option<Pos> {
    let mut probe = board.clone();
    for pos in generate(board, expansion_range) {
        probe.place_stone(pos, stone);
        let threats = count_axis_threats(&probe, pos, stone, win_length);
        probe.remove_stone(pos);
        if threats >= 2 {
            return Some(pos);
        }
    }
    None
}

/// Threats through `pos` after placement, at most one per axis.
fn count_axis_threats(board: &Board, pos: Pos, stone: Stone, win_length: usize) -> u32 {
    let k = win_length as i32;
    let mut threats = 0;

    for &(dr, dc) in &DIRECTIONS {
        let fwd = run_length(board, pos, dr, dc, stone);
        let bwd = run_length(board, pos, -dr, -dc, stone);
        let count = 1 + fwd + bwd;

        let free_fwd = free_beyond(board, pos, dr, dc, fwd);
        let free_bwd = free_beyond(board, pos, -dr, -dc, bwd);
        let open_ends = (free_fwd > 0) as i32 + (free_bwd > 0) as i32;

        if count >= k - 1 && open_ends >= 1 {
            threats += 1;
        } else if count == k - 2 && open_ends == 2 && count + free_fwd + free_bwd >= k {
            threats += 1;
        }
    }

    threats
}

/// Contiguous empty cells just past the friendly run in direction (dr, dc).
fn free_beyond(board: &Board, pos: Pos, dr: i32, dc: i32, run: i32) -> i32 {
    let mut n = 0;
    let mut r = pos.row as i32 + dr * (run + 1);
    let mut c = pos.col as i32 + dc * (run + 1);
    while board.in_bounds(r, c) && board.get(Pos::new(r as u8, c as u8)) == Stone::Empty {
        n += 1;
        r += dr;
        c += dc;
    }
    n
}
