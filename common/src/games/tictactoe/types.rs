use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the 8 index triples that make a win.
pub type WinLine = [usize; 3];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Seat at the table. Player one always holds X and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn mark(&self) -> Mark {
        match self {
            PlayerSlot::One => Mark::X,
            PlayerSlot::Two => Mark::O,
        }
    }

    pub fn other(&self) -> PlayerSlot {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    pub fn from_mark(mark: Mark) -> Option<PlayerSlot> {
        match mark {
            Mark::X => Some(PlayerSlot::One),
            Mark::O => Some(PlayerSlot::Two),
            Mark::Empty => None,
        }
    }

    fn array_index(&self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    slot: PlayerSlot,
}

impl Player {
    pub fn new(name: impl Into<String>, slot: PlayerSlot) -> Self {
        Self {
            name: name.into(),
            slot,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    pub fn mark(&self) -> Mark {
        self.slot.mark()
    }
}

/// Exactly two players, addressable by slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Players([Player; 2]);

impl Players {
    pub fn new(player_one_name: impl Into<String>, player_two_name: impl Into<String>) -> Self {
        Self([
            Player::new(player_one_name, PlayerSlot::One),
            Player::new(player_two_name, PlayerSlot::Two),
        ])
    }

    pub fn get(&self, slot: PlayerSlot) -> &Player {
        &self.0[slot.array_index()]
    }

    pub fn get_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.0[slot.array_index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerSlot),
    Tied,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn to_index(&self) -> Option<usize> {
        if self.row >= BOARD_SIZE || self.col >= BOARD_SIZE {
            return None;
        }
        Some(self.row * BOARD_SIZE + self.col)
    }
}

/// Maps a point on a square drawing surface to the cell under it.
///
/// The surface is split into three equal rows and columns. Cell edges are
/// inclusive, so a point on a shared edge resolves to the first cell
/// (scanning rows, then columns) that contains it.
pub fn cell_at_point(x: f64, y: f64, side: f64) -> Option<usize> {
    if !x.is_finite() || !y.is_finite() || !side.is_finite() || side <= 0.0 {
        return None;
    }

    let cell_size = side / BOARD_SIZE as f64;
    for row in 0..BOARD_SIZE {
        let top = cell_size * row as f64;
        let bottom = top + cell_size;
        if y < top || y > bottom {
            continue;
        }
        for col in 0..BOARD_SIZE {
            let left = cell_size * col as f64;
            let right = left + cell_size;
            if x >= left && x <= right {
                return Some(row * BOARD_SIZE + col);
            }
        }
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMark {
    pub index: usize,
    pub mark: Mark,
}

impl CellMark {
    pub fn new(index: usize, mark: Mark) -> Self {
        Self { index, mark }
    }
}

/// The line a renderer strikes through on a win, from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: WinLine,
    pub start: usize,
    pub end: usize,
}

impl WinningLine {
    pub fn new(mark: Mark, cells: WinLine) -> Self {
        Self {
            mark,
            cells,
            start: cells[0],
            end: cells[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_round_trips_every_index() {
        for index in 0..CELL_COUNT {
            let pos = Position::from_index(index).unwrap();
            assert_eq!(pos.row, index / 3);
            assert_eq!(pos.col, index % 3);
            assert_eq!(pos.to_index(), Some(index));
        }
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::new(3, 0).to_index(), None);
        assert_eq!(Position::new(0, 3).to_index(), None);
    }

    #[test]
    fn test_cell_at_point_maps_cell_centers() {
        assert_eq!(cell_at_point(50.0, 50.0, 300.0), Some(0));
        assert_eq!(cell_at_point(150.0, 150.0, 300.0), Some(4));
        assert_eq!(cell_at_point(250.0, 50.0, 300.0), Some(2));
        assert_eq!(cell_at_point(50.0, 250.0, 300.0), Some(6));
        assert_eq!(cell_at_point(299.0, 299.0, 300.0), Some(8));
    }

    #[test]
    fn test_cell_at_point_shared_edge_resolves_to_first_cell() {
        assert_eq!(cell_at_point(100.0, 100.0, 300.0), Some(0));
        assert_eq!(cell_at_point(0.0, 0.0, 300.0), Some(0));
        assert_eq!(cell_at_point(300.0, 300.0, 300.0), Some(8));
    }

    #[test]
    fn test_cell_at_point_outside_surface() {
        assert_eq!(cell_at_point(-1.0, 10.0, 300.0), None);
        assert_eq!(cell_at_point(10.0, 301.0, 300.0), None);
        assert_eq!(cell_at_point(10.0, 10.0, 0.0), None);
        assert_eq!(cell_at_point(f64::NAN, 10.0, 300.0), None);
    }

    #[test]
    fn test_player_slot_marks() {
        assert_eq!(PlayerSlot::One.mark(), Mark::X);
        assert_eq!(PlayerSlot::Two.mark(), Mark::O);
        assert_eq!(PlayerSlot::One.other(), PlayerSlot::Two);
        assert_eq!(PlayerSlot::from_mark(Mark::O), Some(PlayerSlot::Two));
        assert_eq!(PlayerSlot::from_mark(Mark::Empty), None);
    }

    #[test]
    fn test_player_name_is_mutable_mark_is_not() {
        let mut players = Players::new("Alice", "Bob");
        players.get_mut(PlayerSlot::Two).set_name("Carol");
        assert_eq!(players.get(PlayerSlot::Two).name(), "Carol");
        assert_eq!(players.get(PlayerSlot::Two).mark(), Mark::O);
        assert_eq!(players.get(PlayerSlot::One).name(), "Alice");
    }

    #[test]
    fn test_winning_line_endpoints() {
        let line = WinningLine::new(Mark::X, [2, 4, 6]);
        assert_eq!(line.start, 2);
        assert_eq!(line.end, 6);
    }
}
