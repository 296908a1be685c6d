use std::collections::BinaryHeap;

use gridstar_core::Point;

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// A cell position keyed by its total cost at insertion time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct NodeRef {
    pos: Point,
    f: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; on ties the
        // earlier insertion wins.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Min-priority collection of discovered, not yet expanded cells.
///
/// Keys are never updated. A cell whose cost improves is pushed again, so
/// the same position can be present several times with different keys.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    open: BinaryHeap<NodeRef>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, pos: Point, f: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.open.push(NodeRef { pos, f, seq });
    }

    /// Remove the entry with the smallest key, returning it with that key.
    pub(crate) fn pop(&mut self) -> Option<(Point, i32)> {
        self.open.pop().map(|n| (n.pos, n.f))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_key_first() {
        let mut f = Frontier::new();
        f.push(Point::new(0, 0), 40);
        f.push(Point::new(1, 0), 14);
        f.push(Point::new(2, 0), 28);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some((Point::new(1, 0), 14)));
        assert_eq!(f.pop(), Some((Point::new(2, 0), 28)));
        assert_eq!(f.pop(), Some((Point::new(0, 0), 40)));
        assert_eq!(f.pop(), None);
        assert_eq!(f.len(), 0);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut f = Frontier::new();
        for x in 0..5 {
            f.push(Point::new(x, 0), 30);
        }
        f.push(Point::new(9, 9), 10);
        assert_eq!(f.pop(), Some((Point::new(9, 9), 10)));
        for x in 0..5 {
            assert_eq!(f.pop(), Some((Point::new(x, 0), 30)));
        }
    }

    #[test]
    fn duplicate_positions_are_kept() {
        let mut f = Frontier::new();
        f.push(Point::new(1, 1), 20);
        f.push(Point::new(1, 1), 10);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop(), Some((Point::new(1, 1), 10)));
        assert_eq!(f.pop(), Some((Point::new(1, 1), 20)));
    }
}
