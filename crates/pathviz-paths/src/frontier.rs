use std::collections::BinaryHeap;

/// Reference into the node arena, ordered by `cost` then insertion order
/// for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) idx: usize,
    pub(crate) cost: u32,
    seq: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first; among
        // equal costs the earliest insertion wins.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The candidate pool shared by Dijkstra and A*.
///
/// Entries are never updated in place: an improved cost is pushed as a new
/// candidate and the superseded one is discarded when popped (the caller
/// compares `cost` against the node's current value).
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Candidate>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, cost: u32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Candidate { idx, cost, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_cost_first() {
        let mut f = Frontier::new();
        f.push(0, 3);
        f.push(1, 1);
        f.push(2, 2);
        let order: Vec<usize> = std::iter::from_fn(|| f.pop()).map(|c| c.idx).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        let mut f = Frontier::new();
        for idx in [7, 3, 9, 1] {
            f.push(idx, 5);
        }
        assert_eq!(f.len(), 4);
        let order: Vec<usize> = std::iter::from_fn(|| f.pop()).map(|c| c.idx).collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }
}
