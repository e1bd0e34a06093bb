use generic_array_struct::generic_array_struct;

use crate::{err::MissingAccErr, instructions::internal_utils::ix_data, keys::TOKEN_PROGRAM_ID};

// Accounts

/// The program reads accounts positionally, field order is the account order.
#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct DepositIxAccs<T> {
    pub registry: T,
    pub registry_pool_config: T,
    pub pool_market: T,
    pub pool: T,

    /// Token account to transfer deposited tokens from
    pub source: T,

    /// Pool token account to mint collateral tokens to
    pub destination: T,

    /// The pool's token account that receives deposited tokens
    pub token_account: T,

    pub pool_mint: T,

    /// PDA of the pool market. See [`crate::pda::pool_market_authority_seeds`]
    pub pool_market_authority: T,

    /// Transfer authority of `source`
    pub fee_payer: T,

    pub token_program: T,
}

impl<T: Copy> DepositIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; DEPOSIT_IX_ACCS_LEN])
    }
}

impl<T> AsRef<[T]> for DepositIxAccs<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

pub type DepositIxKeysOwned = DepositIxAccs<[u8; 32]>;

pub type DepositIxAccFlags = DepositIxAccs<bool>;

pub const DEPOSIT_IX_IS_WRITER: DepositIxAccFlags = DepositIxAccFlags::memset(false)
    .const_with_source(true)
    .const_with_destination(true)
    .const_with_token_account(true)
    .const_with_pool_mint(true);

pub const DEPOSIT_IX_IS_SIGNER: DepositIxAccFlags =
    DepositIxAccFlags::memset(false).const_with_fee_payer(true);

pub const DEPOSIT_IX_ACC_NAMES: DepositIxAccs<&str> = DepositIxAccs::memset("")
    .const_with_registry("registry")
    .const_with_registry_pool_config("registry_pool_config")
    .const_with_pool_market("pool_market")
    .const_with_pool("pool")
    .const_with_source("source")
    .const_with_destination("destination")
    .const_with_token_account("token_account")
    .const_with_pool_mint("pool_mint")
    .const_with_pool_market_authority("pool_market_authority")
    .const_with_fee_payer("fee_payer")
    .const_with_token_program("token_program");

/// The accounts of [`DepositIxAccs`] that vary per call and must
/// be provided by the user, in the same order.
///
/// `fee_payer` and `token_program` are filled in by
/// [`DepositIxUserAccs::into_deposit_ix_accs`]
#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct DepositIxUserAccs<T> {
    pub registry: T,
    pub registry_pool_config: T,
    pub pool_market: T,
    pub pool: T,
    pub source: T,
    pub destination: T,
    pub token_account: T,
    pub pool_mint: T,
    pub pool_market_authority: T,
}

impl<T: Copy> DepositIxUserAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; DEPOSIT_IX_USER_ACCS_LEN])
    }
}

impl<T> AsRef<[T]> for DepositIxUserAccs<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> DepositIxUserAccs<T> {
    #[inline]
    pub fn into_deposit_ix_accs(self, fee_payer: T, token_program: T) -> DepositIxAccs<T> {
        let [
            registry,
            registry_pool_config,
            pool_market,
            pool,
            source,
            destination,
            token_account,
            pool_mint,
            pool_market_authority,
        ] = self.0;
        DepositIxAccs([
            registry,
            registry_pool_config,
            pool_market,
            pool,
            source,
            destination,
            token_account,
            pool_mint,
            pool_market_authority,
            fee_payer,
            token_program,
        ])
    }
}

pub type DepositIxUserKeysOwned = DepositIxUserAccs<[u8; 32]>;

/// User accounts as received from an untyped source (js objects, config files),
/// where any of them may be absent
pub type DepositIxUserKeysOpt = DepositIxUserAccs<Option<[u8; 32]>>;

pub const DEPOSIT_IX_USER_ACC_NAMES: DepositIxUserAccs<&str> = DepositIxUserAccs::memset("")
    .const_with_registry("registry")
    .const_with_registry_pool_config("registry_pool_config")
    .const_with_pool_market("pool_market")
    .const_with_pool("pool")
    .const_with_source("source")
    .const_with_destination("destination")
    .const_with_token_account("token_account")
    .const_with_pool_mint("pool_mint")
    .const_with_pool_market_authority("pool_market_authority");

impl DepositIxUserKeysOwned {
    #[inline]
    pub fn into_deposit_ix_keys_owned(self, fee_payer: [u8; 32]) -> DepositIxKeysOwned {
        self.into_deposit_ix_accs(fee_payer, TOKEN_PROGRAM_ID)
    }
}

/// Returns the first missing account in account order
#[inline]
pub fn try_deposit_ix_keys_owned(
    user: &DepositIxUserKeysOpt,
    fee_payer: [u8; 32],
) -> Result<DepositIxKeysOwned, MissingAccErr> {
    let mut keys = DepositIxUserKeysOwned::default();
    for ((k, opt), role) in keys
        .0
        .iter_mut()
        .zip(user.0)
        .zip(DEPOSIT_IX_USER_ACC_NAMES.0)
    {
        *k = opt.ok_or(MissingAccErr { role })?;
    }
    Ok(keys.into_deposit_ix_keys_owned(fee_payer))
}

// Data

pub const DEPOSIT_IX_DISCM: u8 = 5;

ix_data!(
    DepositIxData, DEPOSIT_IX_DATA_LEN, DEPOSIT_IX_DISCM,

    DepositIxArgs {
        /// Amount of the pool's underlying token to deposit
        amount: u64,
    }
);
