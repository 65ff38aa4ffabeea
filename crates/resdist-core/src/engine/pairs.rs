/// An ordered pair of positions into a residue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResiduePair {
    pub left: usize,
    pub right: usize,
}

/// Enumerates the full ordered cross product of `n` residues with themselves.
///
/// Pairs come out row-major: for each left residue in order, every right
/// residue in order (the right side varies fastest). Self-pairs and both
/// orientations of every pair are included, so exactly `n²` pairs are produced.
#[derive(Debug, Clone)]
pub struct PairEnumerator {
    n: usize,
    next: usize,
    end: usize,
}

impl PairEnumerator {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            next: 0,
            end: n * n,
        }
    }

    /// Total number of pairs, `n²`.
    pub fn total(&self) -> usize {
        self.n * self.n
    }

    /// The pair at position `index` in enumeration order.
    pub fn pair_at(&self, index: usize) -> Option<ResiduePair> {
        if index >= self.total() {
            return None;
        }
        Some(ResiduePair {
            left: index / self.n,
            right: index % self.n,
        })
    }
}

impl Iterator for PairEnumerator {
    type Item = ResiduePair;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let pair = self.pair_at(self.next);
        self.next += 1;
        pair
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PairEnumerator {}
