use bs58_fixed_wasm::Bs58Array;
use everlend_gp_std::{
    deposit::try_deposit_ix,
    instruction::Instruction as StdInstruction,
    instructions::deposit::{DepositIxArgs, DepositIxUserAccs, NewDepositIxUserAccsBuilder},
    parse::parse_deposit_ix,
};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use crate::{err::generic_err, instruction::Instruction, interface::B58PK};

/// Accounts the caller must provide are optional here so that a
/// missing one is reported by name instead of as a deserialization error
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi, large_number_types_as_bigints)]
#[serde(rename_all = "camelCase")]
pub struct DepositIxParams {
    #[tsify(optional)]
    pub registry: Option<B58PK>,

    #[tsify(optional)]
    pub registry_pool_config: Option<B58PK>,

    #[tsify(optional)]
    pub pool_market: Option<B58PK>,

    #[tsify(optional)]
    pub pool: Option<B58PK>,

    #[tsify(optional)]
    pub source: Option<B58PK>,

    #[tsify(optional)]
    pub destination: Option<B58PK>,

    #[tsify(optional)]
    pub token_account: Option<B58PK>,

    #[tsify(optional)]
    pub pool_mint: Option<B58PK>,

    #[tsify(optional)]
    pub pool_market_authority: Option<B58PK>,

    /// Signer, transfer authority of `source`
    pub fee_payer: B58PK,

    /// Must fit in a u64
    pub amount: i128,
}

/// A deposit instruction's accounts by role, and its amount
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi, large_number_types_as_bigints)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDepositIx {
    pub registry: B58PK,
    pub registry_pool_config: B58PK,
    pub pool_market: B58PK,
    pub pool: B58PK,
    pub source: B58PK,
    pub destination: B58PK,
    pub token_account: B58PK,
    pub pool_mint: B58PK,
    pub pool_market_authority: B58PK,
    pub fee_payer: B58PK,
    pub token_program: B58PK,
    pub amount: u64,
}

/// @throws if any account is missing or `amount` is out of range of u64
#[wasm_bindgen(js_name = depositIx)]
pub fn deposit_ix(params: DepositIxParams) -> Result<Instruction, JsError> {
    let DepositIxParams {
        registry,
        registry_pool_config,
        pool_market,
        pool,
        source,
        destination,
        token_account,
        pool_mint,
        pool_market_authority,
        fee_payer: Bs58Array(fee_payer),
        amount,
    } = params;
    let pk = |opt: Option<B58PK>| opt.map(|Bs58Array(pk)| pk);
    let user = DepositIxUserAccs(
        NewDepositIxUserAccsBuilder::start()
            .with_registry(pk(registry))
            .with_registry_pool_config(pk(registry_pool_config))
            .with_pool_market(pk(pool_market))
            .with_pool(pk(pool))
            .with_source(pk(source))
            .with_destination(pk(destination))
            .with_token_account(pk(token_account))
            .with_pool_mint(pk(pool_mint))
            .with_pool_market_authority(pk(pool_market_authority))
            .build()
            .0,
    );
    let args = DepositIxArgs::try_new(amount).map_err(generic_err)?;
    try_deposit_ix(&user, fee_payer, args)
        .map(Instruction::from)
        .map_err(generic_err)
}

/// @throws if `ix` is not a well-formed general pool deposit instruction
#[wasm_bindgen(js_name = parseDepositIx)]
pub fn parse_deposit_ix_js(ix: Instruction) -> Result<ParsedDepositIx, JsError> {
    let ix = StdInstruction::try_from(ix)?;
    let (keys, DepositIxArgs { amount }) = parse_deposit_ix(&ix).map_err(generic_err)?;
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
        fee_payer,
        token_program,
    ] = keys.0.map(B58PK::new);
    Ok(ParsedDepositIx {
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
        amount,
    })
}

#[cfg(test)]
mod tests {
    use everlend_gp_std::keys::TOKEN_PROGRAM_ID;

    use super::*;

    fn params(amount: i128) -> DepositIxParams {
        let pk = |b: u8| Some(B58PK::new([b; 32]));
        DepositIxParams {
            registry: pk(1),
            registry_pool_config: pk(2),
            pool_market: pk(3),
            pool: pk(4),
            source: pk(5),
            destination: pk(6),
            token_account: pk(7),
            pool_mint: pk(8),
            pool_market_authority: pk(9),
            fee_payer: B58PK::new([10; 32]),
            amount,
        }
    }

    #[test]
    fn named_params_in_acc_order_sc() {
        let Ok(ix) = deposit_ix(params(1_000_000)) else {
            panic!("deposit_ix failed");
        };

        let addrs: Vec<_> = ix.accounts.iter().map(|m| m.address.0).collect();
        let mut expected: Vec<_> = (1..=10).map(|b| [b; 32]).collect();
        expected.push(TOKEN_PROGRAM_ID);
        assert_eq!(addrs, expected);
        assert_eq!(
            ix.accounts.iter().map(|m| m.role).collect::<Vec<_>>(),
            [0, 0, 0, 0, 1, 1, 1, 1, 0, 2, 0]
        );
        assert_eq!(
            ix.data.as_slice(),
            &[0x05, 0x40, 0x42, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(ix.program_address, B58PK::new(everlend_gp_std::ID));
    }

    #[test]
    fn parse_inverts_deposit_ix_sc() {
        let Ok(ix) = deposit_ix(params(u64::MAX.into())) else {
            panic!("deposit_ix failed");
        };
        let Ok(parsed) = parse_deposit_ix_js(ix) else {
            panic!("parse_deposit_ix_js failed");
        };

        let pk = |b: u8| B58PK::new([b; 32]);
        assert_eq!(
            parsed,
            ParsedDepositIx {
                registry: pk(1),
                registry_pool_config: pk(2),
                pool_market: pk(3),
                pool: pk(4),
                source: pk(5),
                destination: pk(6),
                token_account: pk(7),
                pool_mint: pk(8),
                pool_market_authority: pk(9),
                fee_payer: pk(10),
                token_program: B58PK::new(TOKEN_PROGRAM_ID),
                amount: u64::MAX,
            }
        );
    }
}
