/// PPUADDR ($2006): 14-bit VRAM address written as two bytes, high first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressRegister {
    value: u16,
    hi_ptr: bool,
}

const ADDRESS_MASK: u16 = 0x3FFF;

impl Default for AddressRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressRegister {
    pub fn new() -> Self {
        Self {
            value: 0,
            hi_ptr: true,
        }
    }

    pub fn update(&mut self, data: u8) {
        let [hi, lo] = self.value.to_be_bytes();
        self.value = if self.hi_ptr {
            u16::from_be_bytes([data, lo])
        } else {
            u16::from_be_bytes([hi, data])
        };
        // Addresses past $3FFF mirror down.
        self.value &= ADDRESS_MASK;
        self.hi_ptr = !self.hi_ptr;
    }

    pub fn increment(&mut self, inc: u16) {
        self.value = self.value.wrapping_add(inc) & ADDRESS_MASK;
    }

    pub fn reset_latch(&mut self) {
        self.hi_ptr = true;
    }

    /// True when the next write lands in the high byte.
    pub fn expects_high_byte(&self) -> bool {
        self.hi_ptr
    }

    pub fn get(&self) -> u16 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_then_low() {
        let mut addr = AddressRegister::new();
        addr.update(0x21);
        assert!(!addr.expects_high_byte());
        addr.update(0x08);
        assert!(addr.expects_high_byte());
        assert_eq!(addr.get(), 0x2108);
    }

    #[test]
    fn mirrors_down_past_3fff() {
        let mut addr = AddressRegister::new();
        addr.update(0x7F);
        addr.update(0xFF);
        assert_eq!(addr.get(), 0x3FFF);
    }

    #[test]
    fn increment_wraps_within_14_bits() {
        let mut addr = AddressRegister::new();
        addr.update(0x3F);
        addr.update(0xFF);
        addr.increment(1);
        assert_eq!(addr.get(), 0x0000);
        addr.increment(32);
        assert_eq!(addr.get(), 0x0020);
    }

    #[test]
    fn reset_latch_restarts_at_high_byte() {
        let mut addr = AddressRegister::new();
        addr.update(0x12);
        addr.reset_latch();
        addr.update(0x23);
        addr.update(0x45);
        assert_eq!(addr.get(), 0x2345);
    }
}
