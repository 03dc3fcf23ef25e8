use crate::bits::{self, Flags, FLAG_COUNT};

/// An 8-bit register made of eight named single-bit flags.
///
/// Implementors only describe how their named fields line up with bit
/// positions (`flags` / `from_flags`); the byte conversions and the
/// hardware-write path are shared. A write always replaces the whole
/// register, there is no partial update.
pub trait FlagRegister: Copy + From<u8> + Into<u8> {
    /// Register name used in diagnostics.
    const NAME: &'static str;

    /// Field names by bit position, bit 0 first.
    const FIELDS: [&'static str; FLAG_COUNT];

    /// Current field values, indexed by bit position.
    fn flags(&self) -> Flags;

    /// Builds a register from field values indexed by bit position.
    fn from_flags(flags: Flags) -> Self;

    /// Re-derives every field from a freshly written byte. Previous values
    /// are discarded.
    fn update(&mut self, data: u8) {
        log::trace!("{} <- {:#04x}", Self::NAME, data);
        *self = Self::from_flags(bits::decode(data));
    }

    /// Raw byte representation of the current fields.
    fn bits(&self) -> u8 {
        bits::encode(self.flags())
    }

    /// `(name, value)` pairs in bit order.
    fn named_flags(&self) -> [(&'static str, bool); FLAG_COUNT] {
        let flags = self.flags();
        std::array::from_fn(|i| (Self::FIELDS[i], flags[i]))
    }

    /// Value of the field called `name`, if the register has one.
    fn flag(&self, name: &str) -> Option<bool> {
        Self::FIELDS
            .iter()
            .position(|&field| field == name)
            .map(|i| self.flags()[i])
    }
}
