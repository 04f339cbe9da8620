//! Trial-division primality check.
//!
//! A candidate `n` is prime when it is at least 2 and no integer in
//! `2..=floor(sqrt(n))` divides it. The check here:
//!
//! - answers `false` for `0` and `1` (neither is prime),
//! - answers `true` for `2`, the only even prime,
//! - answers `false` for every other even number without dividing,
//! - otherwise divides by the odd numbers `3, 5, 7, ...` while
//!   `divisor <= n / divisor`, returning `false` at the first divisor that
//!   leaves no remainder (a *witness*) and `true` if none is found.
//!
//! The loop bound is written as a division so that `divisor * divisor` is
//! never computed; it holds for every `u64` including values near
//! [`u64::MAX`]. Running time is `O(sqrt(n))` with no early abort.

/// Returns `true` if `candidate` is prime.
///
/// Total over `u64`: never panics, never allocates, no side effects.
///
/// | candidate        | result |
/// |------------------|--------|
/// | `0`, `1`         | `false` |
/// | `2`              | `true`  |
/// | even, `> 2`      | `false` |
/// | odd, `>= 3`      | `true` iff no odd divisor `d` with `d * d <= candidate` divides it |
///
/// # Examples
///
/// ```
/// use primality_core::is_prime;
///
/// assert!(!is_prime(0));
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(!is_prime(100));
/// assert!(is_prime(104_729)); // the 10000th prime
/// ```
pub fn is_prime(candidate: u64) -> bool {
    if candidate < 2 {
        return false;
    }
    if candidate == 2 {
        return true;
    }
    if candidate % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor <= candidate / divisor {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Returns the smallest divisor that proves `candidate` composite.
///
/// `Some(2)` for even composites, the smallest odd factor for odd
/// composites, and `None` for primes as well as `0` and `1`. Any returned
/// witness `w` satisfies `1 < w` and `w * w <= candidate`.
///
/// ```
/// use primality_core::smallest_witness;
///
/// assert_eq!(smallest_witness(91), Some(7));
/// assert_eq!(smallest_witness(104_730), Some(2));
/// assert_eq!(smallest_witness(97), None);
/// assert_eq!(smallest_witness(1), None);
/// ```
pub fn smallest_witness(candidate: u64) -> Option<u64> {
    if candidate < 4 {
        return None;
    }
    if candidate % 2 == 0 {
        return Some(2);
    }

    let mut divisor = 3;
    while divisor <= candidate / divisor {
        if candidate % divisor == 0 {
            return Some(divisor);
        }
        divisor += 2;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The first 100 primes.
    const FIRST_PRIMES: [u64; 100] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179,
        181, 191, 193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277,
        281, 283, 293, 307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389,
        397, 401, 409, 419, 421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499,
        503, 509, 521, 523, 541,
    ];

    /// The first 100 non-negative integers that are not prime.
    const FIRST_NON_PRIMES: [u64; 100] = [
        0, 1, 4, 6, 8, 9, 10, 12, 14, 15, 16, 18, 20, 21, 22, 24, 25, 26, 27, 28, 30, 32, 33, 34,
        35, 36, 38, 39, 40, 42, 44, 45, 46, 48, 49, 50, 51, 52, 54, 55, 56, 57, 58, 60, 62, 63,
        64, 65, 66, 68, 69, 70, 72, 74, 75, 76, 77, 78, 80, 81, 82, 84, 85, 86, 87, 88, 90, 91,
        92, 93, 94, 95, 96, 98, 99, 100, 102, 104, 105, 106, 108, 110, 111, 112, 114, 115, 116,
        117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 128, 129, 130,
    ];

    #[test]
    fn below_two_is_not_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
    }

    #[test]
    fn two_is_the_only_even_prime() {
        assert!(is_prime(2));
        for n in (4..10_000u64).step_by(2) {
            assert!(!is_prime(n), "{n} is even");
        }
        assert!(!is_prime(u64::MAX - 1));
    }

    #[test]
    fn first_hundred_primes() {
        for p in FIRST_PRIMES {
            assert!(is_prime(p), "{p} should be prime");
        }
    }

    #[test]
    fn first_hundred_non_primes() {
        for n in FIRST_NON_PRIMES {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn boundary_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(97));
        assert!(!is_prime(100));
    }

    #[test]
    fn large_values() {
        assert!(is_prime(104_729));
        assert!(!is_prime(104_730));
    }

    #[test]
    fn repeated_calls_agree() {
        for n in [0, 1, 2, 9, 97, 104_729, 104_730, u64::MAX] {
            let first = is_prime(n);
            for _ in 0..8 {
                assert_eq!(is_prime(n), first);
            }
        }
    }

    // Squares of primes are the tightest case for the loop bound: the only
    // witness sits exactly at sqrt(n).
    #[test]
    fn prime_squares_are_composite() {
        for p in [3u64, 5, 7, 11, 13, 65_521] {
            assert!(!is_prime(p * p), "{p}^2");
            assert_eq!(smallest_witness(p * p), Some(p));
        }
    }

    #[test]
    fn top_of_range_terminates() {
        // 2^64 - 1 = 3 * 5 * 17 * 257 * 641 * 65537 * 6700417
        assert!(!is_prime(u64::MAX));
        assert_eq!(smallest_witness(u64::MAX), Some(3));
        // largest 32-bit prime, and its product with a small prime
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(4_294_967_291 * 3));
    }

    #[test]
    fn witness_for_small_inputs() {
        assert_eq!(smallest_witness(0), None);
        assert_eq!(smallest_witness(1), None);
        assert_eq!(smallest_witness(2), None);
        assert_eq!(smallest_witness(3), None);
        assert_eq!(smallest_witness(4), Some(2));
        assert_eq!(smallest_witness(9), Some(3));
        assert_eq!(smallest_witness(25), Some(5));
    }

    #[test]
    fn witness_agrees_with_is_prime() {
        for n in 2..50_000u64 {
            match smallest_witness(n) {
                None => assert!(is_prime(n), "{n}: no witness but not prime"),
                Some(w) => {
                    assert!(!is_prime(n), "{n}: witness {w} but prime");
                    assert!(w > 1 && w * w <= n && n % w == 0, "{n}: bad witness {w}");
                    assert!((2..w).all(|d| n % d != 0), "{n}: {w} is not the smallest");
                }
            }
        }
    }
}
