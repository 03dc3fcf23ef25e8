//! Position-based codec between a raw byte and eight boolean flags.
//!
//! Flag `i` of the record always lives at bit `i` of the byte, least
//! significant bit first. Both directions are total: every byte decodes to
//! exactly one record and every record encodes to exactly one byte.

/// Number of flags packed into one register byte.
pub const FLAG_COUNT: usize = 8;

/// The unpacked form of a register byte, indexed by bit position.
pub type Flags = [bool; FLAG_COUNT];

/// Unpacks `byte` into eight flags, bit 0 first.
#[inline]
pub fn decode(byte: u8) -> Flags {
    std::array::from_fn(|i| (byte >> i) & 1 != 0)
}

/// Packs eight flags back into a byte. Inverse of [`decode`].
#[inline]
pub fn encode(flags: Flags) -> u8 {
    flags
        .iter()
        .enumerate()
        .fold(0, |acc, (i, &set)| acc | ((set as u8) << i))
}
