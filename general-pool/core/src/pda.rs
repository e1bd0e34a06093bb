use const_crypto::ed25519::derive_program_address;

/// The general pool program's signing authority over all pools of a market
/// is the PDA with the market's address as its only seed
#[inline]
pub const fn pool_market_authority_seeds(pool_market: &[u8; 32]) -> [&[u8; 32]; 1] {
    [pool_market]
}

pub const fn const_find_pool_market_authority(
    prog_id: &[u8; 32],
    pool_market: &[u8; 32],
) -> ([u8; 32], u8) {
    let [s] = pool_market_authority_seeds(pool_market);
    derive_program_address(&[s], prog_id)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use solana_pubkey::Pubkey;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn matches_solana_pubkey_pt(pool_market: [u8; 32]) {
            let (expected, expected_bump) = Pubkey::find_program_address(
                &[pool_market.as_slice()],
                &Pubkey::new_from_array(crate::ID),
            );
            let (actual, bump) = const_find_pool_market_authority(&crate::ID, &pool_market);
            prop_assert_eq!(actual, expected.to_bytes());
            prop_assert_eq!(bump, expected_bump);
        }
    }
}
