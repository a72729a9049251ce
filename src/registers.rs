//! ## Register store
//! Holds `M = 2^P` registers, each storing the maximum rank observed for its bucket.
//!
//! Ranks never exceed `64 - P + 1 <= 61`, so registers are packed using `W = 6` bits each.
//!
//! Slice encoding:
//! - data[0..M * W / 32]   - store register ranks using `W` bits per each register.
//! - data[M * W / 32]      - one extra element for branchless register access
//!   (see `get` and `set` for more details).
use std::mem::size_of_val;

/// Number of bits used by each register
pub(crate) const W: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Registers {
    /// Number of registers
    len: usize,
    /// Packed register ranks
    data: Vec<u32>,
}

impl Registers {
    /// Create zeroed register store of `2^precision` registers
    #[inline]
    pub(crate) fn new(precision: u8) -> Self {
        let len = 1 << precision;
        Self {
            len,
            data: vec![0u32; len * W / 32 + 1],
        }
    }

    /// Return number of registers
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Get `idx` register
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> u8 {
        let bit_idx = idx * W;
        let u32_idx = bit_idx / 32;
        let bit_pos = bit_idx % 32;
        let bits = &self.data[u32_idx..u32_idx + 2];
        let bits_1 = W.min(32 - bit_pos);
        let bits_2 = W - bits_1;
        let mask_1 = (1 << bits_1) - 1;
        let mask_2 = (1 << bits_2) - 1;

        (((bits[0] >> bit_pos) & mask_1) | ((bits[1] & mask_2) << bits_1)) as u8
    }

    /// Set `idx` register to new value `rank`
    #[inline]
    fn set(&mut self, idx: usize, rank: u8) {
        let bit_idx = idx * W;
        let u32_idx = bit_idx / 32;
        let bit_pos = bit_idx % 32;
        let rank = u32::from(rank);
        let bits = &mut self.data[u32_idx..u32_idx + 2];
        let bits_1 = W.min(32 - bit_pos);
        let bits_2 = W - bits_1;
        let mask_1 = (1 << bits_1) - 1;
        let mask_2 = (1 << bits_2) - 1;

        // Unconditionally update two `u32` elements based on `rank` bits and masks
        bits[0] &= !(mask_1 << bit_pos);
        bits[0] |= (rank & mask_1) << bit_pos;
        bits[1] &= !mask_2;
        bits[1] |= (rank >> bits_1) & mask_2;
    }

    /// Raise `idx` register to `rank` if it is larger than the stored one.
    /// Returns whether register has changed.
    #[inline]
    pub(crate) fn update(&mut self, idx: usize, rank: u8) -> bool {
        if rank > self.get(idx) {
            self.set(idx, rank);
            return true;
        }
        false
    }

    /// Iterate over register ranks in bucket order
    pub(crate) fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len).map(move |idx| self.get(idx))
    }

    /// Raise every register to the matching register of `rhs`.
    /// Both stores must have the same number of registers.
    pub(crate) fn merge(&mut self, rhs: &Registers) {
        debug_assert_eq!(self.len, rhs.len);
        for idx in 0..self.len {
            self.update(idx, rhs.get(idx));
        }
    }

    /// Reset all registers to 0
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Return heap memory occupied by packed registers
    #[inline]
    pub(crate) fn heap_size(&self) -> usize {
        size_of_val(self.data.as_slice())
    }
}
