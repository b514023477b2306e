/// Binomial coefficient C(n, k).
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}

/// All `K`-element index subsets of `0..N`, in lexicographic order.
///
/// `Combinations::<7, 5>` yields the 21 five-card picks of a Hold'em hand,
/// `Combinations::<4, 2>` and `Combinations::<5, 3>` the Omaha hole pairs and board triples.
#[derive(Debug, Clone)]
pub struct Combinations<const N: usize, const K: usize> {
    indices: [usize; K],
    remaining: usize,
}

impl<const N: usize, const K: usize> Combinations<N, K> {
    pub const COUNT: usize = binomial(N, K);

    pub fn new() -> Self {
        let mut indices = [0; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { indices, remaining: Self::COUNT }
    }

    /// Pick the elements of `items` at `indices`.
    pub fn select<T: Copy>(indices: [usize; K], items: &[T; N]) -> [T; K] {
        indices.map(|i| items[i])
    }
}

impl<const N: usize, const K: usize> Default for Combinations<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const K: usize> Iterator for Combinations<N, K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.indices;

        // Advance the rightmost index that still has room, then pack the rest behind it
        if let Some(i) = (0..K).rev().find(|&i| self.indices[i] < N - K + i) {
            self.indices[i] += 1;
            for j in (i + 1)..K {
                self.indices[j] = self.indices[j - 1] + 1;
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize, const K: usize> ExactSizeIterator for Combinations<N, K> {}
