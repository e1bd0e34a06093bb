/// An instruction ready to be put into a transaction.
///
/// Account order and roles are as the target program expects them,
/// so this should be handed over to the transaction layer as-is
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub program_address: [u8; 32],
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountMeta {
    pub address: [u8; 32],
    pub role: Role,
}

impl AccountMeta {
    #[inline]
    pub const fn new(address: [u8; 32], role: Role) -> Self {
        Self { address, role }
    }
}

/// Represents the role of an account in a transaction.
///
/// Discriminants match `@solana/kit`'s `AccountRole`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Role {
    Readonly = 0,
    Writable = 1,
    ReadonlySigner = 2,
    WritableSigner = 3,
}

impl Role {
    #[inline]
    pub const fn from_signer_writable(signer: bool, writable: bool) -> Self {
        match (signer, writable) {
            (true, true) => Self::WritableSigner,
            (true, false) => Self::ReadonlySigner,
            (false, true) => Self::Writable,
            (false, false) => Self::Readonly,
        }
    }

    #[inline]
    pub const fn is_signer(self) -> bool {
        matches!(self, Self::ReadonlySigner | Self::WritableSigner)
    }

    #[inline]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Writable | Self::WritableSigner)
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_u8(r: u8) -> Option<Self> {
        Some(match r {
            0 => Self::Readonly,
            1 => Self::Writable,
            2 => Self::ReadonlySigner,
            3 => Self::WritableSigner,
            _ => return None,
        })
    }
}

/// All 3 iterators must have the same length
pub fn keys_signer_writable_to_metas<'a>(
    keys: impl Iterator<Item = &'a [u8; 32]>,
    signer: impl Iterator<Item = &'a bool>,
    writable: impl Iterator<Item = &'a bool>,
) -> Vec<AccountMeta> {
    keys.zip(signer)
        .zip(writable)
        .map(|((key, signer), writable)| {
            AccountMeta::new(*key, Role::from_signer_writable(*signer, *writable))
        })
        .collect()
}

/// Combines an instruction's account table with its serialized data.
///
/// `keys`, `is_signer` and `is_writer` are the same account struct
/// (e.g. [`crate::instructions::deposit::DepositIxAccs`]) instantiated over
/// addresses and flags respectively, so their entries line up by position
#[inline]
pub fn build_ix<const N: usize>(
    program_address: [u8; 32],
    keys: &[[u8; 32]; N],
    is_signer: &[bool; N],
    is_writer: &[bool; N],
    data: &[u8],
) -> Instruction {
    Instruction {
        program_address,
        accounts: keys_signer_writable_to_metas(
            keys.iter(),
            is_signer.iter(),
            is_writer.iter(),
        ),
        data: data.to_vec(),
    }
}
