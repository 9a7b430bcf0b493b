//! Integer helpers with floor semantics.
//!
//! Rust's `/` and `%` truncate toward zero, which puts tile `-1` into chunk `0`.
//! Grid conversions need the quotient rounded toward negative infinity and a
//! remainder carrying the sign of the divisor, so they go through these helpers.
use crate::error::{Error, Result};

/// Floor division: the quotient rounded toward negative infinity.
///
/// Fails with [`Error::InvalidScalar`] for `n == 0` and with [`Error::Overflow`]
/// for `i64::MIN / -1`.
pub fn floor_div(a: i64, n: i64) -> Result<i64> {
    if n == 0 {
        return Err(Error::division_by_zero(a));
    }
    let q = a
        .checked_div(n)
        .ok_or_else(|| Error::overflow(format!("{a} / {n}")))?;
    // checked_div succeeded, so the remainder cannot overflow either.
    let r = a % n;
    if r != 0 && ((r < 0) != (n < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

/// Floor modulo: the remainder matching [`floor_div`], with the sign of `n`.
///
/// For `n > 0` the result always lies in `[0, n)`.
pub fn floor_mod(a: i64, n: i64) -> Result<i64> {
    if n == 0 {
        return Err(Error::division_by_zero(a));
    }
    if n == -1 {
        return Ok(0);
    }
    let r = a % n;
    if r != 0 && ((r < 0) != (n < 0)) {
        Ok(r + n)
    } else {
        Ok(r)
    }
}

/// Floor division of a 128-bit intermediate, used by the fixed-point and
/// projection code. `n` must be non-zero.
#[inline]
pub(crate) fn floor_div_wide(a: i128, n: i128) -> i128 {
    debug_assert!(n != 0, "floor_div_wide divisor must be non-zero");
    let q = a / n;
    let r = a % n;
    if r != 0 && ((r < 0) != (n < 0)) {
        q - 1
    } else {
        q
    }
}

/// Ceiling division of a 128-bit intermediate. `n` must be non-zero.
#[inline]
pub(crate) fn ceil_div_wide(a: i128, n: i128) -> i128 {
    -floor_div_wide(-a, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(7, 2).unwrap(), 3);
        assert_eq!(floor_div(-7, 2).unwrap(), -4);
        assert_eq!(floor_div(-1, 16).unwrap(), -1);
        assert_eq!(floor_div(-16, 16).unwrap(), -1);
        assert_eq!(floor_div(-17, 16).unwrap(), -2);
        assert_eq!(floor_div(7, -2).unwrap(), -4);
        assert_eq!(floor_div(-7, -2).unwrap(), 3);
    }

    #[test]
    fn floor_mod_takes_sign_of_divisor() {
        assert_eq!(floor_mod(-1, 16).unwrap(), 15);
        assert_eq!(floor_mod(-47, 16).unwrap(), 1);
        assert_eq!(floor_mod(33, 16).unwrap(), 1);
        assert_eq!(floor_mod(7, -2).unwrap(), -1);
        assert_eq!(floor_mod(i64::MIN, -1).unwrap(), 0);
    }

    #[test]
    fn div_and_mod_recombine() {
        for a in -40..40 {
            for n in [-7, -3, 1, 4, 16] {
                let q = floor_div(a, n).unwrap();
                let r = floor_mod(a, n).unwrap();
                assert_eq!(q * n + r, a, "a={a} n={n}");
            }
        }
    }

    #[test]
    fn zero_divisor_is_invalid_scalar() {
        assert!(matches!(floor_div(5, 0), Err(Error::InvalidScalar(_))));
        assert!(matches!(floor_mod(5, 0), Err(Error::InvalidScalar(_))));
    }

    #[test]
    fn min_over_minus_one_overflows() {
        assert!(matches!(floor_div(i64::MIN, -1), Err(Error::Overflow(_))));
    }

    #[test]
    fn wide_division_floors() {
        assert_eq!(floor_div_wide(-65_536, 48), -1366);
        assert_eq!(floor_div_wide(65_536, 48), 1365);
        assert_eq!(floor_div_wide(-3, -2), 1);
    }

    #[test]
    fn wide_division_ceils() {
        assert_eq!(ceil_div_wide(65_536, 48), 1366);
        assert_eq!(ceil_div_wide(-65_536, 48), -1365);
        assert_eq!(ceil_div_wide(65_536 * 48, 48), 65_536);
        assert_eq!(ceil_div_wide(0, 24), 0);
    }
}
