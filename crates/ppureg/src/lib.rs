use std::fmt::Write;

use anyhow::{bail, Context, Result};
use ppureg_codegen::RegisterDef;
use ppureg_common::FlagRegister;
use ppureg_nes::{ControlRegister, MaskRegister, StatusRegister};

pub const RADIX_ENV: &str = "PPUREG_RADIX";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterKind {
    Control,
    Mask,
    Status,
}

impl RegisterKind {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "control" | "ctrl" | "PPUCTRL" => Ok(RegisterKind::Control),
            "mask" | "PPUMASK" => Ok(RegisterKind::Mask),
            "status" | "PPUSTATUS" => Ok(RegisterKind::Status),
            other => bail!(
                "Unknown register '{}'. Supported: control, mask, status",
                other
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Radix {
    #[default]
    Hex,
    Bin,
    Dec,
}

impl Radix {
    /// Reads the radix from `PPUREG_RADIX`, falling back to hex.
    pub fn from_env() -> Self {
        match std::env::var(RADIX_ENV) {
            Ok(value) => Self::parse(&value).unwrap_or_else(|| {
                log::warn!("Ignoring {}='{}', using hex", RADIX_ENV, value);
                Radix::Hex
            }),
            Err(_) => Radix::Hex,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hex" | "16" => Some(Radix::Hex),
            "bin" | "2" => Some(Radix::Bin),
            "dec" | "10" => Some(Radix::Dec),
            _ => None,
        }
    }

    pub fn format(self, byte: u8) -> String {
        match self {
            Radix::Hex => format!("{:#04x}", byte),
            Radix::Bin => format!("{:#010b}", byte),
            Radix::Dec => byte.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Decode { kind: RegisterKind, byte: u8 },
    Table { kind: RegisterKind },
    Gen { name: String, fields: Vec<String> },
}

impl Command {
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = args
            .next()
            .context("Missing command. Usage: ppureg <decode|table|gen> ...")?;
        match command.as_str() {
            "decode" => {
                let kind = RegisterKind::parse(&args.next().context("decode needs a register")?)?;
                let byte = parse_byte(&args.next().context("decode needs a byte")?)?;
                Ok(Command::Decode { kind, byte })
            }
            "table" => {
                let kind = RegisterKind::parse(&args.next().context("table needs a register")?)?;
                Ok(Command::Table { kind })
            }
            "gen" => {
                let name = args.next().context("gen needs a type name")?;
                Ok(Command::Gen {
                    name,
                    fields: args.collect(),
                })
            }
            other => bail!("Unknown command '{}'. Supported: decode, table, gen", other),
        }
    }
}

/// Accepts `0x..`, `0b..` or decimal.
pub fn parse_byte(text: &str) -> Result<u8> {
    let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        u8::from_str_radix(&bin.replace('_', ""), 2)
    } else {
        text.parse::<u8>()
    };
    parsed.with_context(|| format!("'{}' is not a byte (0-255)", text))
}

fn describe<R: FlagRegister>(reg: R, radix: Radix) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", R::NAME)?;
    for (bit, (name, value)) in reg.named_flags().iter().enumerate() {
        writeln!(out, "  bit {} {:<28} {}", bit, name, *value as u8)?;
    }
    writeln!(out, "  = {}", radix.format(reg.bits()))?;
    Ok(out)
}

fn table<R: FlagRegister>() -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", R::NAME)?;
    for (bit, name) in R::FIELDS.iter().enumerate() {
        writeln!(out, "  {} {}", bit, name)?;
    }
    Ok(out)
}

/// Runs a command and returns what should be printed.
pub fn run(command: Command, radix: Radix) -> Result<String> {
    match command {
        Command::Decode { kind, byte } => {
            log::info!("Decoding {} as {:?}", radix.format(byte), kind);
            match kind {
                RegisterKind::Control => describe(ControlRegister::from(byte), radix),
                RegisterKind::Mask => describe(MaskRegister::from(byte), radix),
                RegisterKind::Status => describe(StatusRegister::from(byte), radix),
            }
        }
        Command::Table { kind } => match kind {
            RegisterKind::Control => table::<ControlRegister>(),
            RegisterKind::Mask => table::<MaskRegister>(),
            RegisterKind::Status => table::<StatusRegister>(),
        },
        Command::Gen { name, fields } => {
            let def = RegisterDef::builder().name(name.clone()).fields(fields).build();
            ppureg_codegen::generate(&def)
                .with_context(|| format!("Failed to generate register '{}'", name))
        }
    }
}
