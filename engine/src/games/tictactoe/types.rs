use std::fmt;

use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Side to move after `move_count` plies.
    pub fn for_move_count(move_count: usize) -> Side {
        if move_count % 2 == 0 { Side::First } else { Side::Second }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Mark(side) => Some(side),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    InProgress,
    Win(Side),
    Draw,
}

impl Verdict {
    pub fn is_terminal(self) -> bool {
        self != Verdict::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }
}

/// Rows, then columns, then diagonals. Detection and the heuristic both rely
/// on this scan order.
pub const WINNING_LINES: [WinLine; 8] = [
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VsComputer(Difficulty),
}

impl GameMode {
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsComputer(difficulty) => Some(difficulty),
        }
    }

    /// In computer games the human always plays First.
    pub fn automated_side(self) -> Option<Side> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsComputer(_) => Some(Side::Second),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::TwoPlayer => f.write_str("two-player"),
            GameMode::VsComputer(difficulty) => write!(f, "vs-computer ({})", difficulty),
        }
    }
}
