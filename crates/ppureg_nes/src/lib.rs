pub mod address;
pub mod control;
pub mod mask;
pub mod registers;
pub mod scroll;
pub mod status;

pub use address::AddressRegister;
pub use control::ControlRegister;
pub use mask::{Emphasis, MaskRegister};
pub use registers::{PpuPort, PpuRegisters, WriteOutcome};
pub use scroll::ScrollRegister;
pub use status::StatusRegister;
