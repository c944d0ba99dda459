use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over `num` consecutive integers starting at `start`,
/// walking up or down depending on the order
pub struct SequentialGenerator {
    next: i64,
    step: i64,
    remaining: usize,
}

#[derive(Copy, Clone, Debug)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialGenerator {
    pub fn new(start: i64, num: usize, order: SequentialOrder) -> SequentialGenerator {
        let step = match order {
            SequentialOrder::Ascending => 1,
            SequentialOrder::Descending => -1,
        };
        SequentialGenerator {
            next: start,
            step,
            remaining: num,
        }
    }
}

impl Iterator for SequentialGenerator {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            None
        } else {
            let r = self.next;
            self.next += self.step;
            self.remaining -= 1;
            Some(r)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for SequentialGenerator {}

impl ExactSizeIterator for SequentialGenerator {}
