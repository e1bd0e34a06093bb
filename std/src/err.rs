use std::{error::Error, fmt::Display};

use bs58_fixed::Bs58String;
use everlend_gp_core::keys::TOKEN_PROGRAM_ID_STR;

use crate::instruction::Role;

// Re-exports so users only need to depend on this crate
pub use everlend_gp_core::err::*;

type Bs58PkString = Bs58String<44>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GpErr {
    AccsLen {
        expected: usize,
        actual: usize,
    },
    FieldOob(FieldOobErr),
    IxData(IxDataErr),
    MissingAcc(MissingAccErr),
    WrongAccRole {
        role: &'static str,
        expected: Role,
        actual: Role,
    },
    WrongProgram {
        actual: [u8; 32],
    },
    WrongTokenProgram {
        actual: [u8; 32],
    },
}

impl Display for GpErr {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccsLen { expected, actual } => {
                f.write_fmt(format_args!("expected {expected} accounts, got {actual}"))
            }
            Self::FieldOob(e) => e.fmt(f),
            Self::IxData(e) => e.fmt(f),
            Self::MissingAcc(e) => e.fmt(f),
            Self::WrongAccRole {
                role,
                expected,
                actual,
            } => f.write_fmt(format_args!(
                "account {role} has role {actual:?}, expected {expected:?}"
            )),
            Self::WrongProgram { actual } => f.write_fmt(format_args!(
                "program {} is not general pool program {}",
                Bs58PkString::encode(actual),
                everlend_gp_core::ID_STR,
            )),
            Self::WrongTokenProgram { actual } => f.write_fmt(format_args!(
                "program {} is not token program {TOKEN_PROGRAM_ID_STR}",
                Bs58PkString::encode(actual),
            )),
        }
    }
}

impl Error for GpErr {}

impl From<FieldOobErr> for GpErr {
    #[inline]
    fn from(e: FieldOobErr) -> Self {
        Self::FieldOob(e)
    }
}

impl From<IxDataErr> for GpErr {
    #[inline]
    fn from(e: IxDataErr) -> Self {
        Self::IxData(e)
    }
}

impl From<MissingAccErr> for GpErr {
    #[inline]
    fn from(e: MissingAccErr) -> Self {
        Self::MissingAcc(e)
    }
}
