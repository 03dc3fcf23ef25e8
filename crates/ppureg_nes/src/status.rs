use ppureg_common::{bits, FlagRegister, Flags, FLAG_COUNT};

/// PPUSTATUS ($2002).
///
/// ```text
/// 7  bit  0
/// ---- ----
/// VSO. ....
/// |||| ||||
/// |||+-++++- Unused; stored and replayed as written
/// ||+------- Sprite overflow
/// |+-------- Sprite 0 hit
/// +--------- Vertical blank has started
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusRegister {
    pub unused_1: bool,
    pub unused_2: bool,
    pub unused_3: bool,
    pub unused_4: bool,
    pub unused_5: bool,
    pub sprite_overflow: bool,
    pub sprite_zero_hit: bool,
    pub vblank_started: bool,
}

impl StatusRegister {
    pub fn new() -> Self {
        Self::from(0x00)
    }

    pub fn snapshot(&self) -> u8 {
        self.bits()
    }

    pub fn reset_vblank_status(&mut self) {
        self.vblank_started = false;
    }

    pub fn set_vblank_started(&mut self, value: bool) {
        self.vblank_started = value;
    }

    pub fn set_sprite_zero_hit(&mut self, value: bool) {
        self.sprite_zero_hit = value;
    }

    pub fn set_sprite_overflow(&mut self, value: bool) {
        self.sprite_overflow = value;
    }
}

impl FlagRegister for StatusRegister {
    const NAME: &'static str = "PPUSTATUS";

    const FIELDS: [&'static str; FLAG_COUNT] = [
        "unused_1",
        "unused_2",
        "unused_3",
        "unused_4",
        "unused_5",
        "sprite_overflow",
        "sprite_zero_hit",
        "vblank_started",
    ];

    fn flags(&self) -> Flags {
        [
            self.unused_1,
            self.unused_2,
            self.unused_3,
            self.unused_4,
            self.unused_5,
            self.sprite_overflow,
            self.sprite_zero_hit,
            self.vblank_started,
        ]
    }

    fn from_flags(flags: Flags) -> Self {
        let [
            unused_1,
            unused_2,
            unused_3,
            unused_4,
            unused_5,
            sprite_overflow,
            sprite_zero_hit,
            vblank_started,
        ] = flags;
        Self {
            unused_1,
            unused_2,
            unused_3,
            unused_4,
            unused_5,
            sprite_overflow,
            sprite_zero_hit,
            vblank_started,
        }
    }
}

impl From<u8> for StatusRegister {
    fn from(byte: u8) -> Self {
        Self::from_flags(bits::decode(byte))
    }
}

impl From<StatusRegister> for u8 {
    fn from(reg: StatusRegister) -> Self {
        reg.bits()
    }
}
