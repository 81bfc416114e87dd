//! Per-position equality of a chunk pair.

use crate::window::{Chunk, CHUNK_SIZE};

/// Equal/not-equal flag for each byte position of a chunk pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification([bool; CHUNK_SIZE]);

impl Classification {
    /// Build from raw flags (`true` = equal).
    pub fn from_flags(flags: [bool; CHUNK_SIZE]) -> Self {
        Self(flags)
    }

    pub fn is_equal(&self, position: usize) -> bool {
        self.0[position]
    }

    /// Every position matches: the pair renders in same-mode.
    pub fn all_equal(&self) -> bool {
        self.0.iter().all(|&eq| eq)
    }

    pub fn differing_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &eq)| (!eq).then_some(i))
    }

    pub fn flags(&self) -> &[bool; CHUNK_SIZE] {
        &self.0
    }
}

/// Compare two chunks position by position.
pub fn classify(left: &Chunk, right: &Chunk) -> Classification {
    Classification(std::array::from_fn(|i| left[i] == right[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_chunks_are_all_equal() {
        let a = *b"ABCDEFGH";
        let class = classify(&a, &a);
        assert!(class.all_equal());
        assert_eq!(class.differing_positions().count(), 0);
    }

    #[test]
    fn test_single_difference() {
        let a = *b"ABCDEFGH";
        let mut b = a;
        b[5] = b'x';
        let class = classify(&a, &b);
        assert!(!class.all_equal());
        assert_eq!(class.differing_positions().collect::<Vec<_>>(), vec![5]);
        assert!(class.is_equal(4));
        assert!(!class.is_equal(5));
    }

    #[test]
    fn test_from_flags_round_trips() {
        let flags = [true, false, true, true, false, false, true, true];
        assert_eq!(Classification::from_flags(flags).flags(), &flags);
    }
}
