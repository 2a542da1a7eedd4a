//! Deferred event timeline.
//!
//! Events are stored in a min-heap keyed by `(offset, insertion_order)`.
//! Earlier offsets are popped first; events at the same offset come out in
//! the order they were pushed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug)]
struct Entry<E> {
    event: E,
    offset: Duration,
    seq: u64,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.offset
            .cmp(&other.offset)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A queue of `(offset, event)` pairs.
///
/// Offsets are measured from the start of the run that scheduled them.
#[derive(Debug)]
pub struct Timeline<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    seq: u64,
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Schedule `event` at `offset`.
    pub fn push(&mut self, offset: Duration, event: E) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { event, offset, seq }));
    }

    /// Offset of the earliest pending event.
    pub fn peek_offset(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse(entry)| entry.offset)
    }

    /// Pop the earliest event, whatever its offset.
    pub fn pop(&mut self) -> Option<(Duration, E)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.offset, entry.event))
    }

    /// Pop the earliest event if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        match self.peek_offset() {
            Some(offset) if offset <= now => self.pop(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_basic_push_pop() {
        let mut t = Timeline::new();
        t.push(ms(30), "a");
        t.push(ms(10), "b");
        t.push(ms(20), "c");

        assert_eq!(t.pop(), Some((ms(10), "b")));
        assert_eq!(t.pop(), Some((ms(20), "c")));
        assert_eq!(t.pop(), Some((ms(30), "a")));
        assert_eq!(t.pop(), None);
    }

    #[test]
    fn test_fifo_same_offset() {
        let mut t = Timeline::new();
        t.push(ms(5), "first");
        t.push(ms(5), "second");
        t.push(ms(5), "third");

        assert_eq!(t.pop().map(|(_, e)| e), Some("first"));
        assert_eq!(t.pop().map(|(_, e)| e), Some("second"));
        assert_eq!(t.pop().map(|(_, e)| e), Some("third"));
    }

    #[test]
    fn test_pop_due_respects_clock() {
        let mut t = Timeline::new();
        t.push(ms(0), 1);
        t.push(ms(10), 2);

        assert_eq!(t.pop_due(ms(5)), Some((ms(0), 1)));
        assert_eq!(t.pop_due(ms(5)), None);
        assert_eq!(t.peek_offset(), Some(ms(10)));
        assert_eq!(t.pop_due(ms(10)), Some((ms(10), 2)));
    }

    #[test]
    fn test_clear_and_len() {
        let mut t = Timeline::<i32>::new();
        assert!(t.is_empty());
        t.push(ms(1), 1);
        t.push(ms(2), 2);
        assert_eq!(t.len(), 2);
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.peek_offset(), None);
    }
}
