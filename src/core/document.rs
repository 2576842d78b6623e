use crate::domain::model::DocumentNumber;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates the synthetic document number for a user. The base digits come
/// from an RNG seeded with the user id, so a user always gets the same number.
pub fn generate_for_user(user_id: i64) -> DocumentNumber {
    let mut rng = StdRng::seed_from_u64(user_id as u64);
    let mut base = [0u8; 9];
    for digit in base.iter_mut() {
        *digit = rng.gen_range(0..=9);
    }
    with_check_digits(base)
}

/// Appends the two mod-11 check digits to nine base digits.
pub fn with_check_digits(base: [u8; 9]) -> DocumentNumber {
    let first = check_digit(base.iter().zip((2..=10).rev()));
    let second = check_digit(
        base.iter()
            .chain(std::iter::once(&first))
            .zip((2..=11).rev()),
    );

    let mut digits = [0u8; 11];
    digits[..9].copy_from_slice(&base);
    digits[9] = first;
    digits[10] = second;
    DocumentNumber::from_digits(digits)
}

fn check_digit<'a>(weighted: impl Iterator<Item = (&'a u8, u32)>) -> u8 {
    let sum: u32 = weighted.map(|(&d, w)| u32::from(d) * w).sum();
    match (sum * 10) % 11 {
        10 => 0,
        d => d as u8,
    }
}
