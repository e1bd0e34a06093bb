use bs58_fixed_wasm::Bs58Array;
use everlend_gp_std::instruction::{
    AccountMeta as StdAccountMeta, Instruction as StdInstruction, Role,
};
use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;
use tsify_next::Tsify;
use wasm_bindgen::JsError;

use crate::{err::unknown_role_err, interface::B58PK};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    #[tsify(type = "Uint8Array")] // Instead of number[]
    pub data: ByteBuf,
    pub accounts: Box<[AccountMeta]>,
    pub program_address: B58PK,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct AccountMeta {
    pub address: B58PK,

    /// Represents the role of an account in a transaction:
    /// - Readonly: 0
    /// - Writable: 1
    /// - ReadonlySigner: 2
    /// - WritableSigner: 3
    #[tsify(type = "0 | 1 | 2 | 3")]
    pub role: u8,
}

impl From<StdInstruction> for Instruction {
    #[inline]
    fn from(
        StdInstruction {
            program_address,
            accounts,
            data,
        }: StdInstruction,
    ) -> Self {
        Self {
            data: ByteBuf::from(data),
            accounts: accounts
                .into_iter()
                .map(|StdAccountMeta { address, role }| AccountMeta {
                    address: B58PK::new(address),
                    role: role.to_u8(),
                })
                .collect(),
            program_address: B58PK::new(program_address),
        }
    }
}

impl TryFrom<Instruction> for StdInstruction {
    type Error = JsError;

    #[inline]
    fn try_from(
        Instruction {
            data,
            accounts,
            program_address: Bs58Array(program_address),
        }: Instruction,
    ) -> Result<Self, Self::Error> {
        let accounts = accounts
            .into_iter()
            .map(|AccountMeta { address, role }| {
                Role::from_u8(role)
                    .map(|role| StdAccountMeta::new(address.0, role))
                    .ok_or_else(|| unknown_role_err(role))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            program_address,
            accounts,
            data: data.into_vec(),
        })
    }
}
