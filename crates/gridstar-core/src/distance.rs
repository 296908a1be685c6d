//! Distance metrics and the heuristics built on them.

use crate::geom::Point;

/// Cost of an orthogonal step, in fixed-point units.
pub const ORTHOGONAL_COST: i32 = 10;

/// Cost of a diagonal step, approximating `10 * sqrt(2)`.
pub const DIAGONAL_COST: i32 = 14;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Exact 8-directional cost between two points on an empty grid.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let diag = dx.min(dy);
    DIAGONAL_COST * diag + ORTHOGONAL_COST * (dx.max(dy) - diag)
}

/// Cost of a single step from `from` to the adjacent cell `to`.
#[inline]
pub fn move_cost(from: Point, to: Point) -> i32 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Estimate of the remaining cost to the goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// `10 * (|dx| + |dy|)`. Overestimates when the best route is diagonal,
    /// so it favours cells closer to the goal axis-wise.
    #[default]
    Manhattan,
    /// `14 * min + 10 * (max - min)`. Admissible and consistent for the
    /// 10/14 cost model.
    Octile,
}

impl Heuristic {
    /// Estimated cost from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: Point, goal: Point) -> i32 {
        match self {
            Heuristic::Manhattan => ORTHOGONAL_COST * manhattan(from, goal),
            Heuristic::Octile => octile(from, goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 3);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(octile(a, b), 14 * 2 + 10);
        assert_eq!(octile(a, a), 0);
    }

    #[test]
    fn step_costs() {
        let p = Point::new(3, 3);
        assert_eq!(move_cost(p, Point::new(4, 4)), DIAGONAL_COST);
        assert_eq!(move_cost(p, Point::new(2, 3)), ORTHOGONAL_COST);
        assert_eq!(move_cost(p, Point::new(3, 2)), ORTHOGONAL_COST);
    }

    #[test]
    fn octile_never_exceeds_manhattan() {
        for x in -4..=4 {
            for y in -4..=4 {
                let p = Point::new(x, y);
                let h_oct = Heuristic::Octile.estimate(p, Point::ZERO);
                let h_man = Heuristic::Manhattan.estimate(p, Point::ZERO);
                assert!(h_oct <= h_man, "{p}");
            }
        }
    }
}
