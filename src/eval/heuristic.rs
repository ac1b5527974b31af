//! Windowed line evaluation for connect-K boards
//!
//! The evaluation slides a window of `win_length` cells along every row,
//! every column, and every diagonal in both orientations (all offsets, not
//! only the two main diagonals) and counts, per color, the windows consisting
//! entirely of that color's stones. The same scan underlies the win rule:
//! a color has won exactly when one of its windows is complete.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line scanning (4 axes).
/// Each window is visited exactly once: from its topmost/leftmost cell.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Complete-window counts per color.
///
/// Derived on demand from a board; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineScore {
    pub black: i32,
    pub white: i32,
}

impl LineScore {
    /// Count for one color.
    #[inline]
    pub fn for_stone(self, stone: Stone) -> i32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
            Stone::Empty => 0,
        }
    }

    /// Differential from `stone`'s perspective.
    #[inline]
    pub fn diff(self, stone: Stone) -> i32 {
        self.for_stone(stone) - self.for_stone(stone.opponent())
    }
}

/// Count win-length windows owned entirely by each color.
///
/// A positional heuristic, not a win check: a board with no complete window
/// scores (0, 0) no matter how threatening it is.
pub fn evaluate(board: &Board, win_length: usize) -> LineScore {
    let size = board.size() as i32;
    let k = win_length as i32;
    let mut score = LineScore::default();

    for row in 0..size {
        for col in 0..size {
            for &(dr, dc) in &DIRECTIONS {
                if !board.in_bounds(row + dr * (k - 1), col + dc * (k - 1)) {
                    continue;
                }
                match window_owner(board, row, col, dr, dc, k) {
                    Stone::Black => score.black += 1,
                    Stone::White => score.white += 1,
                    Stone::Empty => {}
                }
            }
        }
    }

    score
}

/// Owner of the window starting at (row, col), or Empty when the window is
/// mixed or holds any empty cell. Bounds are the caller's responsibility.
fn window_owner(board: &Board, row: i32, col: i32, dr: i32, dc: i32, k: i32) -> Stone {
    let first = board.get(Pos::new(row as u8, col as u8));
    if first == Stone::Empty {
        return Stone::Empty;
    }
    for i in 1..k {
        let p = Pos::new((row + dr * i) as u8, (col + dc * i) as u8);
        if board.get(p) != first {
            return Stone::Empty;
        }
    }
    first
}

/// Canonical win rule: `stone` owns some window of `win_length` contiguous
/// cells along a row, column, or diagonal.
///
/// Independent of board fill level; overlines count (they contain a
/// complete window).
pub fn has_line_of(board: &Board, stone: Stone, win_length: usize) -> bool {
    matches!(stone, Stone::Black | Stone::White)
        && board
            .positions(stone)
            .any(|pos| completes_line_at(board, pos, stone, win_length))
}

/// Fast win check at a specific position.
///
/// Counts contiguous same-color stones through `pos` along each axis in
/// both directions. No allocation; used after simulated placements instead
/// of rescanning the whole board.
#[inline]
pub fn completes_line_at(board: &Board, pos: Pos, stone: Stone, win_length: usize) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let count = 1 + run_length(board, pos, dr, dc, stone) + run_length(board, pos, -dr, -dc, stone);
        if count >= win_length as i32 {
            return true;
        }
    }
    false
}

/// Contiguous `stone` cells strictly after `pos` in direction (dr, dc).
pub(crate) fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> i32 {
    let mut n = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while board.in_bounds(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
        n += 1;
        r += dr;
        c += dc;
    }
    n
}

/// Terminal test: either side has a win-length line, or no empty cell remains.
pub fn game_over(board: &Board, win_length: usize) -> bool {
    has_line_of(board, Stone::Black, win_length)
        || has_line_of(board, Stone::White, win_length)
        || board.is_full()
}
