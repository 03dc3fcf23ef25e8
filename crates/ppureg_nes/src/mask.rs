use ppureg_common::{bits, FlagRegister, Flags, FLAG_COUNT};

/// PPUMASK ($2001).
///
/// ```text
/// 7  bit  0
/// ---- ----
/// BGRs bMmG
/// |||| ||||
/// |||| |||+- Greyscale (0: normal colour, 1: greyscale)
/// |||| ||+-- 1: Show background in leftmost 8 pixels of screen
/// |||| |+--- 1: Show sprites in leftmost 8 pixels of screen
/// |||| +---- 1: Show background
/// |||+------ 1: Show sprites
/// ||+------- Emphasise red
/// |+-------- Emphasise green
/// +--------- Emphasise blue
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaskRegister {
    pub is_grey_scale: bool,
    pub leftmost_8pxl_background: bool,
    pub leftmost_8pxl_sprite: bool,
    pub show_background: bool,
    pub show_sprite: bool,
    pub emphasise_red: bool,
    pub emphasise_green: bool,
    pub emphasise_blue: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Red,
    Green,
    Blue,
}

impl MaskRegister {
    pub fn new() -> Self {
        Self::from(0x00)
    }

    /// Emphasised colour channels, in bit order.
    pub fn emphasis(&self) -> Vec<Emphasis> {
        [
            (self.emphasise_red, Emphasis::Red),
            (self.emphasise_green, Emphasis::Green),
            (self.emphasise_blue, Emphasis::Blue),
        ]
        .into_iter()
        .filter_map(|(on, colour)| on.then_some(colour))
        .collect()
    }

    pub fn rendering_enabled(&self) -> bool {
        self.show_background || self.show_sprite
    }
}

impl FlagRegister for MaskRegister {
    const NAME: &'static str = "PPUMASK";

    const FIELDS: [&'static str; FLAG_COUNT] = [
        "is_grey_scale",
        "leftmost_8pxl_background",
        "leftmost_8pxl_sprite",
        "show_background",
        "show_sprite",
        "emphasise_red",
        "emphasise_green",
        "emphasise_blue",
    ];

    fn flags(&self) -> Flags {
        [
            self.is_grey_scale,
            self.leftmost_8pxl_background,
            self.leftmost_8pxl_sprite,
            self.show_background,
            self.show_sprite,
            self.emphasise_red,
            self.emphasise_green,
            self.emphasise_blue,
        ]
    }

    fn from_flags(flags: Flags) -> Self {
        let [
            is_grey_scale,
            leftmost_8pxl_background,
            leftmost_8pxl_sprite,
            show_background,
            show_sprite,
            emphasise_red,
            emphasise_green,
            emphasise_blue,
        ] = flags;
        Self {
            is_grey_scale,
            leftmost_8pxl_background,
            leftmost_8pxl_sprite,
            show_background,
            show_sprite,
            emphasise_red,
            emphasise_green,
            emphasise_blue,
        }
    }
}

impl From<u8> for MaskRegister {
    fn from(byte: u8) -> Self {
        Self::from_flags(bits::decode(byte))
    }
}

impl From<MaskRegister> for u8 {
    fn from(reg: MaskRegister) -> Self {
        reg.bits()
    }
}
