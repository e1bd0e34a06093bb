//! Types to bridge the wasm serde interface

use bs58_fixed_wasm::Bs58Array;
use tsify_next::declare;

#[declare]
pub type B58PK = Bs58Array<32, 44>;
