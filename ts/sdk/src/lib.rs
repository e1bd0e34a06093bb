mod deposit;
mod err;
mod instruction;
mod interface;
mod pda;
