// Re-exports
pub use everlend_gp_core::*;

pub mod deposit;
pub mod err;
pub mod instruction;
pub mod parse;
