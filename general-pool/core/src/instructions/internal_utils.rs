// Runtime `start` instead of const generic offsets so that `ix_data!`
// can accumulate field offsets without naming an item per field
/// cab = `const_assign_bytes`
///
/// Panics if `start + val.len() > A`
#[inline]
pub(crate) const fn cab<const A: usize>(mut arr: [u8; A], start: usize, val: &[u8]) -> [u8; A] {
    let mut i = 0;
    while i < val.len() {
        arr[start + i] = val[i];
        i += 1;
    }
    arr
}

/// rab = `const_read_byte_array`
///
/// Panics if `start + N > data.len()`
#[inline]
pub(crate) const fn rab<const N: usize>(data: &[u8], start: usize) -> [u8; N] {
    let mut res = [0u8; N];
    let mut i = 0;
    while i < N {
        res[i] = data[start + i];
        i += 1;
    }
    res
}

/// Generates the args struct and fixed-layout ix data type of
/// an instruction from its ordered field list.
///
/// Layout is `[discm: u8, ..fields]`, each field little-endian
/// with the width of its primitive integer type, in declaration order.
///
/// # Generates
/// - `$Args`: the args struct + `$Args::try_new()` for checked conversion
///   from wider/signed integers
/// - `$LEN`: total ix data length, including discm
/// - `$Data`: newtype over `[u8; $LEN]` with const encode (`new`) and
///   decode (`parse`, `parse_no_discm`) fns
macro_rules! ix_data {
    (
        $(#[$data_meta:meta])*
        $Data:ident, $LEN:ident, $DISCM:ident,

        $(#[$args_meta:meta])*
        $Args:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$args_meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $Args {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $Args {
            /// Returns `Err` if any arg does not fit in its field's type
            #[inline]
            pub fn try_new($($field: i128),*) -> Result<Self, $crate::err::FieldOobErr> {
                Ok(Self {
                    $(
                        $field: <$ty>::try_from($field).map_err(|_| $crate::err::FieldOobErr {
                            field: stringify!($field),
                            ty: stringify!($ty),
                            actual: $field,
                        })?,
                    )*
                })
            }
        }

        pub const $LEN: usize = 1 $(+ ::core::mem::size_of::<$ty>())*;

        $(#[$data_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $Data([u8; $LEN]);

        impl $Data {
            pub const DISCM: u8 = $DISCM;
            pub const DATA_LEN: usize = $LEN;

            #[inline]
            pub const fn new($Args { $($field),* }: $Args) -> Self {
                let mut buf = [0u8; $LEN];
                buf[0] = $DISCM;
                let mut _i = 1;
                $(
                    buf = $crate::instructions::internal_utils::cab(buf, _i, &$field.to_le_bytes());
                    _i += ::core::mem::size_of::<$ty>();
                )*
                Self(buf)
            }

            #[inline]
            pub const fn as_buf(&self) -> &[u8; $LEN] {
                &self.0
            }

            #[inline]
            pub const fn to_args(&self) -> $Args {
                Self::parse_no_discm(&$crate::instructions::internal_utils::rab(&self.0, 1))
            }

            #[inline]
            pub const fn parse_no_discm(data: &[u8; $LEN - 1]) -> $Args {
                let mut _i = 0;
                $(
                    let $field = <$ty>::from_le_bytes(
                        $crate::instructions::internal_utils::rab(data, _i)
                    );
                    _i += ::core::mem::size_of::<$ty>();
                )*
                $Args { $($field),* }
            }

            /// Bytes after the first `DATA_LEN` are ignored
            #[inline]
            pub const fn parse(data: &[u8]) -> Result<$Args, $crate::err::IxDataErr> {
                if data.len() < $LEN {
                    return Err($crate::err::IxDataErr::Len($crate::err::IxDataLenErr {
                        expected: $LEN,
                        actual: data.len(),
                    }));
                }
                if data[0] != $DISCM {
                    return Err($crate::err::IxDataErr::Discm($crate::err::WrongDiscmErr {
                        expected: $DISCM,
                        actual: data[0],
                    }));
                }
                Ok(Self::parse_no_discm(
                    &$crate::instructions::internal_utils::rab(data, 1),
                ))
            }

            #[inline]
            pub const fn try_from_buf(data: &[u8]) -> Result<Self, $crate::err::IxDataErr> {
                match Self::parse(data) {
                    Ok(args) => Ok(Self::new(args)),
                    Err(e) => Err(e),
                }
            }
        }

        impl From<$Args> for $Data {
            #[inline]
            fn from(args: $Args) -> Self {
                Self::new(args)
            }
        }
    };
}
pub(crate) use ix_data;
