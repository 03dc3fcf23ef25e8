pub mod bits;
pub mod flag;

pub use bits::{Flags, FLAG_COUNT};
pub use flag::FlagRegister;
