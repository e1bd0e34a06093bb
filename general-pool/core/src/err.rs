use core::{error::Error, fmt::Display};

/// An instruction arg value that does not fit in the fixed-width
/// integer type it is encoded as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldOobErr {
    pub field: &'static str,
    pub ty: &'static str,
    pub actual: i128,
}

impl Display for FieldOobErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { field, ty, actual } = self;
        f.write_fmt(format_args!("{field} {actual} out of range of {ty}"))
    }
}

impl Error for FieldOobErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IxDataLenErr {
    pub expected: usize,
    pub actual: usize,
}

impl Display for IxDataLenErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { expected, actual } = self;
        f.write_fmt(format_args!("ix data len {actual} < {expected} (min)"))
    }
}

impl Error for IxDataLenErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrongDiscmErr {
    pub expected: u8,
    pub actual: u8,
}

impl Display for WrongDiscmErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { expected, actual } = self;
        f.write_fmt(format_args!(
            "Expected discm: {expected}. Actual discm: {actual}"
        ))
    }
}

impl Error for WrongDiscmErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IxDataErr {
    Len(IxDataLenErr),
    Discm(WrongDiscmErr),
}

impl Display for IxDataErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Len(e) => f.write_fmt(format_args!("IxDataLen. {e}")),
            Self::Discm(e) => f.write_fmt(format_args!("WrongDiscm. {e}")),
        }
    }
}

impl Error for IxDataErr {}

impl From<IxDataLenErr> for IxDataErr {
    #[inline]
    fn from(e: IxDataLenErr) -> Self {
        Self::Len(e)
    }
}

impl From<WrongDiscmErr> for IxDataErr {
    #[inline]
    fn from(e: WrongDiscmErr) -> Self {
        Self::Discm(e)
    }
}

/// A required account of an instruction was not provided.
///
/// `role` is the snake_case name of the instruction's account slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingAccErr {
    pub role: &'static str,
}

impl Display for MissingAccErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { role } = self;
        f.write_fmt(format_args!("missing account {role}"))
    }
}

impl Error for MissingAccErr {}
