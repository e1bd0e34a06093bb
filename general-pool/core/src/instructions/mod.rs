mod internal_utils;

pub mod deposit;
