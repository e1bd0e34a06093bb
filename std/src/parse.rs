use everlend_gp_core::{
    instructions::deposit::{
        DepositIxAccs, DepositIxArgs, DepositIxData, DepositIxKeysOwned, DEPOSIT_IX_ACC_NAMES,
        DEPOSIT_IX_IS_SIGNER, DEPOSIT_IX_IS_WRITER,
    },
    keys::TOKEN_PROGRAM_ID,
};

use crate::{
    err::GpErr,
    instruction::{AccountMeta, Instruction, Role},
};

/// Checks that `metas` is exactly an account table of length `N`
/// with the given roles, returning its addresses.
///
/// Roles must match exactly, extra privileges are rejected too
pub fn try_keys_from_metas<const N: usize>(
    metas: &[AccountMeta],
    is_signer: &[bool; N],
    is_writer: &[bool; N],
    names: &[&'static str; N],
) -> Result<[[u8; 32]; N], GpErr> {
    let metas: &[AccountMeta; N] = metas.try_into().map_err(|_| GpErr::AccsLen {
        expected: N,
        actual: metas.len(),
    })?;
    let mut keys = [[0u8; 32]; N];
    for (i, AccountMeta { address, role }) in metas.iter().enumerate() {
        let expected = Role::from_signer_writable(is_signer[i], is_writer[i]);
        if *role != expected {
            return Err(GpErr::WrongAccRole {
                role: names[i],
                expected,
                actual: *role,
            });
        }
        keys[i] = *address;
    }
    Ok(keys)
}

/// Parse a deposit instruction that may not have been created by this library
pub fn parse_deposit_ix(
    Instruction {
        program_address,
        accounts,
        data,
    }: &Instruction,
) -> Result<(DepositIxKeysOwned, DepositIxArgs), GpErr> {
    if *program_address != everlend_gp_core::ID {
        return Err(GpErr::WrongProgram {
            actual: *program_address,
        });
    }
    let keys = DepositIxAccs(try_keys_from_metas(
        accounts,
        &DEPOSIT_IX_IS_SIGNER.0,
        &DEPOSIT_IX_IS_WRITER.0,
        &DEPOSIT_IX_ACC_NAMES.0,
    )?);
    if *keys.token_program() != TOKEN_PROGRAM_ID {
        return Err(GpErr::WrongTokenProgram {
            actual: *keys.token_program(),
        });
    }
    let args = DepositIxData::parse(data)?;
    Ok((keys, args))
}
