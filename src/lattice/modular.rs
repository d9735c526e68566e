/// Number of bits needed to write any residue mod q: l = ⌈log2 q⌉.
///
/// Every gadget length in the crate is derived from this one function, so
/// bit-decomposition and powers-of-two always agree on l.
#[inline]
pub fn bit_length(q: u64) -> usize {
    debug_assert!(q > 1, "modulus must be > 1");
    (64 - (q - 1).leading_zeros()) as usize
}

/// Modular addition: (a + b) mod m, assumes a, b < m
#[inline(always)]
pub fn mod_add(a: u64, b: u64, m: u64) -> u64 {
    let sum = a as u128 + b as u128;
    let r = sum as u64;
    if sum >= m as u128 { r.wrapping_sub(m) } else { r }
}

/// Modular subtraction: (a - b) mod m, assumes a, b < m
#[inline(always)]
pub fn mod_sub(a: u64, b: u64, m: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        m - b + a
    }
}

/// Modular negation: (-a) mod m, assumes a < m
#[inline(always)]
pub fn mod_neg(a: u64, m: u64) -> u64 {
    if a == 0 { 0 } else { m - a }
}

/// Modular multiplication through a 128-bit product.
#[inline(always)]
pub fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Map a signed integer into [0, m).
#[inline]
pub fn reduce_signed(x: i64, m: u64) -> u64 {
    let r = (x as i128).rem_euclid(m as i128);
    r as u64
}

/// Centered representative of a in (-m/2, m/2].
#[inline]
pub fn centered(a: u64, m: u64) -> i64 {
    if a > m / 2 {
        a as i64 - m as i64
    } else {
        a as i64
    }
}

/// Integer division rounded to nearest, ties to even.
///
/// Both decryption and the multiplication rescale round `2x/q` this way.
#[inline]
pub fn round_div(num: u128, den: u128) -> u128 {
    let quot = num / den;
    let twice_rem = 2 * (num % den);
    if twice_rem > den || (twice_rem == den && quot & 1 == 1) {
        quot + 1
    } else {
        quot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(2), 1);
        assert_eq!(bit_length(3), 2);
        assert_eq!(bit_length(4), 2);
        assert_eq!(bit_length(5), 3);
        assert_eq!(bit_length(1 << 16), 16);
        assert_eq!(bit_length((1 << 16) + 1), 17);
        assert_eq!(bit_length(65537), 17);
    }

    #[test]
    fn test_mod_add_sub() {
        let m = 65536u64;
        assert_eq!(mod_add(100, 200, m), 300);
        assert_eq!(mod_add(m - 1, 2, m), 1);
        assert_eq!(mod_sub(200, 100, m), 100);
        assert_eq!(mod_sub(100, 200, m), m - 100);
    }

    #[test]
    fn test_mod_neg() {
        let m = 65536u64;
        assert_eq!(mod_neg(0, m), 0);
        assert_eq!(mod_neg(1, m), m - 1);
        assert_eq!(mod_add(100, mod_neg(100, m), m), 0);
    }

    #[test]
    fn test_mod_mul() {
        let m = 65537u64;
        assert_eq!(mod_mul(1234, 5678, m), ((1234u128 * 5678) % m as u128) as u64);
        assert_eq!(mod_mul(m - 1, m - 1, m), 1);
    }

    #[test]
    fn test_reduce_and_center() {
        let m = 17u64;
        assert_eq!(reduce_signed(-1, m), 16);
        assert_eq!(reduce_signed(-18, m), 16);
        assert_eq!(reduce_signed(20, m), 3);
        assert_eq!(centered(16, m), -1);
        assert_eq!(centered(8, m), 8);
        assert_eq!(centered(9, m), -8);
    }

    #[test]
    fn test_round_div_ties_to_even() {
        assert_eq!(round_div(5, 10), 0); // 0.5 -> 0
        assert_eq!(round_div(15, 10), 2); // 1.5 -> 2
        assert_eq!(round_div(25, 10), 2); // 2.5 -> 2
        assert_eq!(round_div(14, 10), 1);
        assert_eq!(round_div(16, 10), 2);
        assert_eq!(round_div(0, 10), 0);
    }
}
