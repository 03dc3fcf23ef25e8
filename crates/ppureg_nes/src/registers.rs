use ppureg_common::FlagRegister;

use crate::address::AddressRegister;
use crate::control::ControlRegister;
use crate::mask::MaskRegister;
use crate::scroll::ScrollRegister;
use crate::status::StatusRegister;

/// CPU-visible PPU ports, $2000-$2007 mirrored up to $3FFF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PpuPort {
    Control,
    Mask,
    Status,
    OamAddress,
    OamData,
    Scroll,
    Address,
    Data,
}

impl PpuPort {
    pub fn from_address(addr: u16) -> Option<Self> {
        if !(0x2000..=0x3FFF).contains(&addr) {
            return None;
        }
        let port = match addr & 0x0007 {
            0 => PpuPort::Control,
            1 => PpuPort::Mask,
            2 => PpuPort::Status,
            3 => PpuPort::OamAddress,
            4 => PpuPort::OamData,
            5 => PpuPort::Scroll,
            6 => PpuPort::Address,
            _ => PpuPort::Data,
        };
        Some(port)
    }

    pub fn address(self) -> u16 {
        0x2000 + self as u16
    }
}

/// What a port write asks of the rest of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    None,
    /// NMI was enabled while already inside vertical blank.
    Nmi,
}

/// The flag and latch registers behind the PPU's CPU ports.
///
/// OAM and VRAM data ports are not backed here; writes to them only
/// refresh the I/O latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct PpuRegisters {
    pub control: ControlRegister,
    pub mask: MaskRegister,
    pub status: StatusRegister,
    pub scroll: ScrollRegister,
    pub address: AddressRegister,
    /// Last value driven onto the PPU data bus by a CPU write.
    io_latch: u8,
}

impl PpuRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, port: PpuPort, data: u8) -> WriteOutcome {
        self.io_latch = data;
        match port {
            PpuPort::Control => {
                let nmi_was_enabled = self.control.nmi_enabled();
                self.control.update(data);
                if !nmi_was_enabled && self.control.nmi_enabled() && self.status.vblank_started {
                    log::debug!("PPUCTRL enabled NMI during vblank");
                    return WriteOutcome::Nmi;
                }
            }
            PpuPort::Mask => self.mask.update(data),
            PpuPort::Scroll => self.scroll.write(data),
            PpuPort::Address => self.address.update(data),
            PpuPort::Status => {
                log::debug!("Ignoring write of {:#04x} to read-only PPUSTATUS", data);
            }
            PpuPort::OamAddress | PpuPort::OamData | PpuPort::Data => {
                log::debug!(
                    "Write of {:#04x} to {:?} (${:04X}) not handled by register file",
                    data,
                    port,
                    port.address()
                );
            }
        }
        WriteOutcome::None
    }

    /// CPU read. Reading PPUSTATUS clears vblank and both write latches.
    pub fn read(&mut self, port: PpuPort) -> u8 {
        let value = self.peek(port);
        if port == PpuPort::Status {
            self.status.reset_vblank_status();
            self.scroll.reset_latch();
            self.address.reset_latch();
            log::trace!("PPUSTATUS read {:#04x}, latches reset", value);
        }
        value
    }

    /// Same as [`PpuRegisters::read`] without the read side effects.
    pub fn peek(&self, port: PpuPort) -> u8 {
        match port {
            PpuPort::Status => self.status.snapshot(),
            _ => self.io_latch,
        }
    }

    pub fn write_address(&mut self, addr: u16, data: u8) -> Option<WriteOutcome> {
        PpuPort::from_address(addr).map(|port| self.write(port, data))
    }

    pub fn read_address(&mut self, addr: u16) -> Option<u8> {
        PpuPort::from_address(addr).map(|port| self.read(port))
    }
}
