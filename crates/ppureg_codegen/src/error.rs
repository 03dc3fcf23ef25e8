use std::fmt;

use crate::REGISTER_WIDTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The field list did not hold exactly one name per bit.
    FieldCount { register: String, found: usize },
    /// A type or field name is not a usable Rust identifier.
    InvalidIdent(String),
    Format,
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::FieldCount { register, found } => write!(
                f,
                "register '{}' needs exactly {} field names, got {}",
                register, REGISTER_WIDTH, found
            ),
            CodegenError::InvalidIdent(name) => {
                write!(f, "'{}' is not a valid Rust identifier", name)
            }
            CodegenError::Format => write!(f, "failed to format generated source"),
        }
    }
}

impl std::error::Error for CodegenError {}

impl From<fmt::Error> for CodegenError {
    fn from(_: fmt::Error) -> Self {
        CodegenError::Format
    }
}
