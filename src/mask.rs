use std::ops::{BitOr, BitOrAssign};

/// Largest board side supported by the engine.
pub const MAX_SIDE: usize = 16;
/// Cell capacity of a mask, enough for a `MAX_SIDE x MAX_SIDE` board.
pub const MAX_CELLS: usize = MAX_SIDE * MAX_SIDE;
const WORDS: usize = MAX_CELLS / 64;

/// Bitboard over row-major cell indices of a board up to 16x16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mask([u64; WORDS]);

impl Mask {
    pub const EMPTY: Self = Self([0; WORDS]);

    pub fn contains(&self, idx: usize) -> bool {
        idx < MAX_CELLS && (self.0[idx / 64] & (1u64 << (idx % 64))) != 0
    }

    pub fn insert(&mut self, idx: usize) {
        if idx < MAX_CELLS {
            self.0[idx / 64] |= 1u64 << (idx % 64);
        }
    }

    pub fn remove(&mut self, idx: usize) {
        if idx < MAX_CELLS {
            self.0[idx / 64] &= !(1u64 << (idx % 64));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&word| word == 0)
    }

    pub fn count(&self) -> u32 {
        self.0.iter().map(|word| word.count_ones()).sum()
    }

    /// Iterates set indices in ascending order.
    pub fn iter(&self) -> MaskIter {
        MaskIter {
            words: self.0,
            word: 0,
        }
    }
}

impl BitOr for Mask {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl BitOrAssign for Mask {
    fn bitor_assign(&mut self, rhs: Self) {
        for (word, rhs) in self.0.iter_mut().zip(rhs.0) {
            *word |= rhs;
        }
    }
}

impl IntoIterator for Mask {
    type Item = usize;
    type IntoIter = MaskIter;

    fn into_iter(self) -> MaskIter {
        self.iter()
    }
}

impl FromIterator<usize> for Mask {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut mask = Self::EMPTY;
        for idx in iter {
            mask.insert(idx);
        }
        mask
    }
}

#[derive(Debug, Clone)]
pub struct MaskIter {
    words: [u64; WORDS],
    word: usize,
}

impl Iterator for MaskIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.word < WORDS {
            let bits = self.words[self.word];
            if bits != 0 {
                let idx = self.word * 64 + bits.trailing_zeros() as usize;
                self.words[self.word] &= bits - 1;
                return Some(idx);
            }
            self.word += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_across_word_boundaries_are_independent() {
        let mask: Mask = [0, 63, 64, 200, 255].into_iter().collect();

        assert_eq!(mask.count(), 5);
        assert!(mask.contains(63));
        assert!(mask.contains(64));
        assert!(!mask.contains(65));
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![0, 63, 64, 200, 255]);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut mask = Mask::EMPTY;
        mask.insert(MAX_CELLS);

        assert!(mask.is_empty());
        assert!(!mask.contains(MAX_CELLS));
    }

    #[test]
    fn union_and_remove() {
        let a: Mask = [1, 2, 3].into_iter().collect();
        let b: Mask = [3, 4].into_iter().collect();

        assert_eq!((a | b).count(), 4);

        let mut c = a;
        c.remove(2);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![1, 3]);
    }
}
