//! The eight ordinal movement directions.

use std::fmt;

use crate::geom::Point;

/// One of the eight grid-adjacent directions (4 orthogonal + 4 diagonal).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    East,
    NorthEast,
}

impl Direction {
    /// All directions, in the order the search engine expands them.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
        Direction::East,
        Direction::NorthEast,
    ];

    /// Unit offset in screen coordinates (Y grows down).
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::NorthWest => Point::new(-1, -1),
            Direction::West => Point::new(-1, 0),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::South => Point::new(0, 1),
            Direction::SouthEast => Point::new(1, 1),
            Direction::East => Point::new(1, 0),
            Direction::NorthEast => Point::new(1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "N",
            Direction::NorthWest => "NW",
            Direction::West => "W",
            Direction::SouthWest => "SW",
            Direction::South => "S",
            Direction::SouthEast => "SE",
            Direction::East => "E",
            Direction::NorthEast => "NE",
        };
        f.write_str(s)
    }
}
