//! Password sampling.
//!
//! Every character is drawn independently and uniformly from the pool, with
//! replacement. Callers must supply a cryptographically secure generator; the
//! `CryptoRng` bound rejects statistical PRNGs at compile time.

use crate::domain::model::{CharPool, GenerationRequest};
use rand::{CryptoRng, Rng};

pub fn generate_password<R>(length: usize, pool: &CharPool, rng: &mut R) -> String
where
    R: Rng + CryptoRng,
{
    let chars = pool.as_bytes();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect()
}

/// Generates `request.count` passwords in order. Duplicates are not filtered.
pub fn generate_batch<R>(request: &GenerationRequest, rng: &mut R) -> Vec<String>
where
    R: Rng + CryptoRng,
{
    tracing::debug!(
        "Generating {} password(s) of length {} from a pool of {} characters",
        request.count,
        request.length,
        request.pool.len()
    );

    (0..request.count)
        .map(|_| generate_password(request.length, &request.pool, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CharClass;
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn pool(classes: &[CharClass]) -> CharPool {
        CharPool::from_classes(classes).unwrap()
    }

    #[test]
    fn test_password_length_and_membership() {
        let mut rng = OsRng;
        let pool = pool(&CharClass::ALL);
        for length in [4, 5, 16, 64] {
            let password = generate_password(length, &pool, &mut rng);
            assert_eq!(password.len(), length);
            assert!(password.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn test_digits_only_pool() {
        let mut rng = OsRng;
        let password = generate_password(32, &pool(&[CharClass::Digits]), &mut rng);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_batch_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let request = GenerationRequest::new(8, 25, pool(&[CharClass::Uppercase])).unwrap();
        let passwords = generate_batch(&request, &mut rng);
        assert_eq!(passwords.len(), 25);
        assert!(passwords
            .iter()
            .all(|p| p.len() == 8 && p.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn test_frequency_is_near_uniform() {
        let mut rng = StdRng::seed_from_u64(1234);
        let pool = pool(&[CharClass::Digits]);
        let password = generate_password(100_000, &pool, &mut rng);

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in password.chars() {
            *counts.entry(c).or_default() += 1;
        }

        assert_eq!(counts.len(), 10);
        // Expected 10_000 each; a 10% band is far outside sampling noise.
        for (c, count) in counts {
            assert!((9_000..=11_000).contains(&count), "{} drawn {} times", c, count);
        }
    }

    #[test]
    fn test_all_classes_eventually_appear() {
        let mut rng = StdRng::seed_from_u64(99);
        let password = generate_password(2_000, &pool(&CharClass::ALL), &mut rng);
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(|c| c.is_ascii_punctuation()));
    }
}
