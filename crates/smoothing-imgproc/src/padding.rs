/// A border type for the spatial padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingMode {
    /// This border type fills the border with zeros.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant,

    /// This border type reflects the pixel values at the boundary, starting with the pixel 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    #[default]
    Reflect101,
}

impl PaddingMode {
    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i;
            } else if i >= len {
                i = 2 * len - i - 2;
            }
        }
        i as usize
    }

    /// Maps index `i` to a valid index i.e. within `[0, len)` according to the padding mode.
    ///
    /// - `Reflect101`: mirror excluding edge
    /// - `Constant`: `None` outside the valid range, the sample reads as zero
    ///
    /// # Arguments
    /// - `i`: The (possibly out-of-range) coordinate index.
    /// - `len`: The valid length of the dimension, must be non-zero.
    ///
    /// # Returns
    /// A valid mapped index within `[0, len)`, or `None` for a zero-filled sample.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }
        match self {
            PaddingMode::Constant => None,
            PaddingMode::Reflect101 => Some(Self::reflect101(i, len)),
        }
    }

    /// Builds the lookup table of source indices for a sliding window of `window` taps
    /// centered on every position of a dimension of length `len`.
    ///
    /// Entry `pos * window + tap` holds the source index read by tap `tap` when the
    /// window is centered on `pos`.
    pub(crate) fn window_table(&self, len: usize, window: usize) -> Vec<Option<usize>> {
        let half = (window / 2) as isize;
        let mut table = Vec::with_capacity(len * window);
        for pos in 0..len as isize {
            for tap in 0..window as isize {
                table.push(self.map_index(pos + tap - half, len));
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::PaddingMode;

    #[test]
    fn in_range_indices_are_kept() {
        for mode in [PaddingMode::Constant, PaddingMode::Reflect101] {
            for i in 0..5 {
                assert_eq!(mode.map_index(i, 5), Some(i as usize));
            }
        }
    }

    #[test]
    fn reflect101_mapping() {
        let mode = PaddingMode::Reflect101;
        assert_eq!(mode.map_index(-1, 5), Some(1));
        assert_eq!(mode.map_index(-2, 5), Some(2));
        assert_eq!(mode.map_index(5, 5), Some(3));
        assert_eq!(mode.map_index(6, 5), Some(2));
        assert_eq!(mode.map_index(-3, 1), Some(0));
    }

    #[test]
    fn constant_mapping() {
        assert_eq!(PaddingMode::Constant.map_index(-1, 5), None);
        assert_eq!(PaddingMode::Constant.map_index(5, 5), None);
    }

    #[test]
    fn reflect101_far_outside() {
        // windows wider than the dimension bounce more than once
        let mode = PaddingMode::Reflect101;
        assert_eq!(mode.map_index(-5, 3), Some(1));
        assert_eq!(mode.map_index(7, 3), Some(1));
        assert_eq!(mode.map_index(-4, 2), Some(0));
    }

    #[test]
    fn window_table_layout() {
        let table = PaddingMode::Reflect101.window_table(4, 3);
        assert_eq!(table.len(), 12);
        assert_eq!(&table[0..3], &[Some(1), Some(0), Some(1)]);
        assert_eq!(&table[3..6], &[Some(0), Some(1), Some(2)]);
        assert_eq!(&table[9..12], &[Some(2), Some(3), Some(2)]);
    }
}
