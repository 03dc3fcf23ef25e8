//! Emits Rust source for a flag register from a type name and eight field
//! names.
//!
//! The output has the same shape as the hand-written PPU registers: a plain
//! struct of `bool`s, `From<u8>` / `From<Type> for u8` conversions through
//! the shared bit codec, and a `FlagRegister` impl. Field `i` maps to bit `i`.

mod error;
mod ident;

use std::fmt::Write;

use typed_builder::TypedBuilder;

pub use error::CodegenError;

/// Number of field names a register definition must carry.
pub const REGISTER_WIDTH: usize = 8;

/// Input for [`generate`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct RegisterDef {
    #[builder(setter(into))]
    pub name: String,
    /// Field names, bit 0 first.
    #[builder(setter(into))]
    pub fields: Vec<String>,
    /// Emitted as the struct's doc comment, one `///` line per input line.
    #[builder(default, setter(strip_option, into))]
    pub doc: Option<String>,
    #[builder(default = Visibility::Public)]
    pub visibility: Visibility,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Crate,
    Private,
}

impl Visibility {
    fn prefix(self) -> &'static str {
        match self {
            Visibility::Public => "pub ",
            Visibility::Crate => "pub(crate) ",
            Visibility::Private => "",
        }
    }
}

/// Checks the definition without producing any output.
pub fn validate(def: &RegisterDef) -> Result<(), CodegenError> {
    if def.fields.len() != REGISTER_WIDTH {
        return Err(CodegenError::FieldCount {
            register: def.name.clone(),
            found: def.fields.len(),
        });
    }
    if !ident::is_valid_type_name(&def.name) {
        return Err(CodegenError::InvalidIdent(def.name.clone()));
    }
    if let Some(bad) = def.fields.iter().find(|f| !ident::is_valid(f)) {
        return Err(CodegenError::InvalidIdent(bad.clone()));
    }
    Ok(())
}

/// Renders the register definition as Rust source.
pub fn generate(def: &RegisterDef) -> Result<String, CodegenError> {
    validate(def)?;
    log::debug!("Generating {} with fields {:?}", def.name, def.fields);

    let name = &def.name;
    let vis = def.visibility.prefix();
    let mut out = String::new();

    writeln!(out, "use ppureg_common::{{bits, FlagRegister, Flags, FLAG_COUNT}};")?;
    writeln!(out)?;

    if let Some(doc) = &def.doc {
        for line in doc.lines() {
            if line.is_empty() {
                writeln!(out, "///")?;
            } else {
                writeln!(out, "/// {}", line)?;
            }
        }
    }
    writeln!(out, "#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]")?;
    writeln!(out, "{}struct {} {{", vis, name)?;
    for field in &def.fields {
        writeln!(out, "    {}{}: bool,", vis, field)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl FlagRegister for {} {{", name)?;
    writeln!(out, "    const NAME: &'static str = \"{}\";", name)?;
    writeln!(out)?;
    writeln!(out, "    const FIELDS: [&'static str; FLAG_COUNT] = [")?;
    for field in &def.fields {
        writeln!(out, "        \"{}\",", field)?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;
    writeln!(out, "    fn flags(&self) -> Flags {{")?;
    writeln!(out, "        [")?;
    for field in &def.fields {
        writeln!(out, "            self.{},", field)?;
    }
    writeln!(out, "        ]")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    fn from_flags(flags: Flags) -> Self {{")?;
    writeln!(out, "        let [")?;
    for field in &def.fields {
        writeln!(out, "            {},", field)?;
    }
    writeln!(out, "        ] = flags;")?;
    writeln!(out, "        Self {{")?;
    for field in &def.fields {
        writeln!(out, "            {},", field)?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl From<u8> for {} {{", name)?;
    writeln!(out, "    fn from(byte: u8) -> Self {{")?;
    writeln!(out, "        Self::from_flags(bits::decode(byte))")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl From<{}> for u8 {{", name)?;
    writeln!(out, "    fn from(reg: {}) -> Self {{", name)?;
    writeln!(out, "        reg.bits()")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(out)
}

#[cfg(test)]
mod tests;
