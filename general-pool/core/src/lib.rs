#![cfg_attr(not(test), no_std)]

pub mod err;
pub mod instructions;
pub mod keys;
pub mod pda;

keys::id_str!(ID_STR, ID, "GenUMNGcWca1GiPLfg89698Gfys1dzk9BAGsyb9aEL2u");
