use ppureg_common::{bits, FlagRegister, Flags, FLAG_COUNT};

/// PPUCTRL ($2000).
///
/// ```text
/// 7  bit  0
/// ---- ----
/// VPHB SINN
/// |||| ||++- Base nametable address (0 = $2000; 1 = $2400; 2 = $2800; 3 = $2C00)
/// |||| |+--- VRAM address increment per PPUDATA access (0: add 1; 1: add 32)
/// |||| +---- Sprite pattern table for 8x8 sprites (0: $0000; 1: $1000)
/// |||+------ Background pattern table (0: $0000; 1: $1000)
/// ||+------- Sprite size (0: 8x8; 1: 8x16)
/// |+-------- PPU master/slave select
/// +--------- Generate an NMI at the start of vertical blank
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlRegister {
    pub nametable_1: bool,
    pub nametable_2: bool,
    pub vram_address_increment: bool,
    pub sprite_pattern_address: bool,
    pub background_pattern_address: bool,
    pub sprite_size: bool,
    pub master_slave_select: bool,
    pub generate_vblank_nmi: bool,
}

impl ControlRegister {
    pub fn new() -> Self {
        Self::from(0x00)
    }

    pub fn nametable_address(&self) -> u16 {
        match (self.nametable_1, self.nametable_2) {
            (false, false) => 0x2000,
            (true, false) => 0x2400,
            (false, true) => 0x2800,
            (true, true) => 0x2C00,
        }
    }

    pub fn vram_increment(&self) -> u16 {
        if self.vram_address_increment {
            32
        } else {
            1
        }
    }

    /// Ignored by hardware in 8x16 mode.
    pub fn sprite_pattern_table(&self) -> u16 {
        if self.sprite_pattern_address {
            0x1000
        } else {
            0x0000
        }
    }

    pub fn background_pattern_table(&self) -> u16 {
        if self.background_pattern_address {
            0x1000
        } else {
            0x0000
        }
    }

    pub fn sprite_height(&self) -> u8 {
        if self.sprite_size {
            16
        } else {
            8
        }
    }

    /// True when the PPU drives colour onto the EXT pins.
    pub fn is_master(&self) -> bool {
        self.master_slave_select
    }

    pub fn nmi_enabled(&self) -> bool {
        self.generate_vblank_nmi
    }
}

impl FlagRegister for ControlRegister {
    const NAME: &'static str = "PPUCTRL";

    const FIELDS: [&'static str; FLAG_COUNT] = [
        "nametable_1",
        "nametable_2",
        "vram_address_increment",
        "sprite_pattern_address",
        "background_pattern_address",
        "sprite_size",
        "master_slave_select",
        "generate_vblank_nmi",
    ];

    fn flags(&self) -> Flags {
        [
            self.nametable_1,
            self.nametable_2,
            self.vram_address_increment,
            self.sprite_pattern_address,
            self.background_pattern_address,
            self.sprite_size,
            self.master_slave_select,
            self.generate_vblank_nmi,
        ]
    }

    fn from_flags(flags: Flags) -> Self {
        let [
            nametable_1,
            nametable_2,
            vram_address_increment,
            sprite_pattern_address,
            background_pattern_address,
            sprite_size,
            master_slave_select,
            generate_vblank_nmi,
        ] = flags;
        Self {
            nametable_1,
            nametable_2,
            vram_address_increment,
            sprite_pattern_address,
            background_pattern_address,
            sprite_size,
            master_slave_select,
            generate_vblank_nmi,
        }
    }
}

impl From<u8> for ControlRegister {
    fn from(byte: u8) -> Self {
        Self::from_flags(bits::decode(byte))
    }
}

impl From<ControlRegister> for u8 {
    fn from(reg: ControlRegister) -> Self {
        reg.bits()
    }
}
