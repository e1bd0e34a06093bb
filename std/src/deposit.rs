use everlend_gp_core::instructions::deposit::{
    try_deposit_ix_keys_owned, DepositIxArgs, DepositIxData, DepositIxKeysOwned,
    DepositIxUserKeysOpt, DEPOSIT_IX_IS_SIGNER, DEPOSIT_IX_IS_WRITER,
};

use crate::{
    err::GpErr,
    instruction::{build_ix, Instruction},
};

#[inline]
pub fn deposit_ix(keys: &DepositIxKeysOwned, args: DepositIxArgs) -> Instruction {
    build_ix(
        everlend_gp_core::ID,
        &keys.0,
        &DEPOSIT_IX_IS_SIGNER.0,
        &DEPOSIT_IX_IS_WRITER.0,
        DepositIxData::new(args).as_buf(),
    )
}

/// Same as [`deposit_ix`], but for user accounts that may be missing.
///
/// `fee_payer` must sign the transaction as transfer authority of `source`
#[inline]
pub fn try_deposit_ix(
    user: &DepositIxUserKeysOpt,
    fee_payer: [u8; 32],
    args: DepositIxArgs,
) -> Result<Instruction, GpErr> {
    let keys = try_deposit_ix_keys_owned(user, fee_payer)?;
    Ok(deposit_ix(&keys, args))
}

#[cfg(test)]
mod tests {
    use everlend_gp_core::{
        err::MissingAccErr,
        instructions::deposit::{
            DepositIxUserAccs, NewDepositIxUserAccsBuilder, DEPOSIT_IX_USER_ACCS_LEN,
            DEPOSIT_IX_USER_ACC_NAMES,
        },
        keys::TOKEN_PROGRAM_ID,
    };
    use proptest::prelude::*;
    use solana_instruction::AccountMeta as SolAccountMeta;
    use solana_pubkey::Pubkey;

    use crate::instruction::Role;

    use super::*;

    const FEE_PAYER: [u8; 32] = [10; 32];

    fn to_sol_ix(ix: &Instruction) -> solana_instruction::Instruction {
        solana_instruction::Instruction {
            program_id: Pubkey::new_from_array(ix.program_address),
            accounts: ix
                .accounts
                .iter()
                .map(|m| SolAccountMeta {
                    pubkey: Pubkey::new_from_array(m.address),
                    is_signer: m.role.is_signer(),
                    is_writable: m.role.is_writable(),
                })
                .collect(),
            data: ix.data.clone(),
        }
    }

    fn user_keys() -> DepositIxUserKeysOpt {
        DepositIxUserAccs(
            NewDepositIxUserAccsBuilder::start()
                .with_registry([1; 32])
                .with_registry_pool_config([2; 32])
                .with_pool_market([3; 32])
                .with_pool([4; 32])
                .with_source([5; 32])
                .with_destination([6; 32])
                .with_token_account([7; 32])
                .with_pool_mint([8; 32])
                .with_pool_market_authority([9; 32])
                .build()
                .0
                .map(Some),
        )
    }

    #[test]
    fn one_million_sc() {
        let ix = try_deposit_ix(
            &user_keys(),
            FEE_PAYER,
            DepositIxArgs { amount: 1_000_000 },
        )
        .unwrap();

        let pk = |b: u8| Pubkey::new_from_array([b; 32]);
        let expected = solana_instruction::Instruction {
            program_id: Pubkey::new_from_array(everlend_gp_core::ID),
            accounts: vec![
                SolAccountMeta::new_readonly(pk(1), false),
                SolAccountMeta::new_readonly(pk(2), false),
                SolAccountMeta::new_readonly(pk(3), false),
                SolAccountMeta::new_readonly(pk(4), false),
                SolAccountMeta::new(pk(5), false),
                SolAccountMeta::new(pk(6), false),
                SolAccountMeta::new(pk(7), false),
                SolAccountMeta::new(pk(8), false),
                SolAccountMeta::new_readonly(pk(9), false),
                SolAccountMeta::new_readonly(Pubkey::new_from_array(FEE_PAYER), true),
                SolAccountMeta::new_readonly(Pubkey::new_from_array(TOKEN_PROGRAM_ID), false),
            ],
            data: vec![0x05, 0x40, 0x42, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00],
        };
        assert_eq!(to_sol_ix(&ix), expected);
    }

    #[test]
    fn each_missing_user_acc_sc() {
        (0..DEPOSIT_IX_USER_ACCS_LEN).for_each(|i| {
            let mut user = user_keys();
            user.0[i] = None;
            assert_eq!(
                try_deposit_ix(&user, FEE_PAYER, DepositIxArgs::default()),
                Err(GpErr::MissingAcc(MissingAccErr {
                    role: DEPOSIT_IX_USER_ACC_NAMES.0[i]
                }))
            );
        });
    }

    proptest! {
        #[test]
        fn acc_roles_independent_of_args_pt(amount: u64, fee_payer: [u8; 32]) {
            let ix = try_deposit_ix(&user_keys(), fee_payer, DepositIxArgs { amount }).unwrap();
            let roles: Vec<_> = ix.accounts.iter().map(|m| m.role).collect();

            use Role::*;
            prop_assert_eq!(
                roles,
                [
                    Readonly,
                    Readonly,
                    Readonly,
                    Readonly,
                    Writable,
                    Writable,
                    Writable,
                    Writable,
                    Readonly,
                    ReadonlySigner,
                    Readonly,
                ]
            );
            prop_assert_eq!(ix.accounts[9].address, fee_payer);
            prop_assert_eq!(ix.accounts[10].address, TOKEN_PROGRAM_ID);
            prop_assert_eq!(ix.program_address, everlend_gp_core::ID);
            let amount_le = amount.to_le_bytes();
            prop_assert_eq!(&ix.data[1..], amount_le.as_slice());
        }
    }
}
