use std::{cmp::Ordering, fmt};

use crate::fraction::error::Error;

pub mod error;
mod ops;

// always stored in canonical form: den > 0 and gcd(|num|, den) == 1,
// zero is stored as 0/1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { num: 0, den: 1 };
    pub const ONE: Fraction = Fraction { num: 1, den: 1 };

    /// Creates a fraction in lowest terms with the sign carried by the numerator.
    ///
    /// Fails with [`Error::DivisionByZero`] when `denominator` is zero and with
    /// [`Error::Overflow`] when the reduced value does not fit in `i64`
    /// (e.g. `i64::MIN / -1`).
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, Error> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    pub const fn from_integer(value: i64) -> Self {
        Fraction { num: value, den: 1 }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    // builds a fraction from unreduced intermediate products
    pub(crate) fn from_wide(num: i128, den: i128) -> Result<Self, Error> {
        let (num, den) = canonicalize(num, den)?;
        Ok(Fraction { num, den })
    }

    pub(crate) fn widen(self) -> (i128, i128) {
        (self.num as i128, self.den as i128)
    }

    // overwrites both fields only once the new value is known to be valid
    pub(crate) fn assign_wide(&mut self, num: i128, den: i128) -> Result<(), Error> {
        let (num, den) = canonicalize(num, den)?;
        self.num = num;
        self.den = den;
        Ok(())
    }
}

// sign normalization followed by gcd reduction, then narrowing back to i64
fn canonicalize(mut num: i128, mut den: i128) -> Result<(i64, i64), Error> {
    if den == 0 {
        return Err(Error::DivisionByZero);
    }
    if den < 0 {
        num = num.checked_neg().ok_or(Error::Overflow)?;
        den = den.checked_neg().ok_or(Error::Overflow)?;
    }
    let divisor = gcd(num.unsigned_abs(), den.unsigned_abs());
    if divisor > 1 {
        // divisor <= den, so it fits in i128
        num /= divisor as i128;
        den /= divisor as i128;
    }
    let num = i64::try_from(num).map_err(|_| Error::Overflow)?;
    let den = i64::try_from(den).map_err(|_| Error::Overflow)?;
    Ok((num, den))
}

// Euclidean algorithm, gcd(0, y) == y
fn gcd(mut x: u128, mut y: u128) -> u128 {
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::from_integer(value)
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = Error;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        Fraction::new(numerator, denominator)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    // denominators are positive, so clearing them keeps the order
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num == 0 {
            write!(f, "0")
        } else if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num, den).unwrap()
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 1), 1);
    }

    #[test]
    fn test_new_rejects_zero_denominator() {
        assert_eq!(Fraction::new(1, 0), Err(Error::DivisionByZero));
        assert_eq!(Fraction::new(0, 0), Err(Error::DivisionByZero));
        assert_eq!(Fraction::new(i64::MIN, 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_new_moves_sign_to_numerator() {
        let f = frac(1, -2);
        assert_eq!(f.numerator(), -1);
        assert_eq!(f.denominator(), 2);
        assert_eq!(f.to_string(), "-1/2");

        let f = frac(-3, -9);
        assert_eq!(f.numerator(), 1);
        assert_eq!(f.denominator(), 3);
    }

    #[test]
    fn test_new_reduces() {
        assert_eq!(frac(5, 10).to_string(), "1/2");
        assert_eq!(frac(8, 4).to_string(), "2");
        assert_eq!(frac(-12, 18), frac(-2, 3));
        assert_eq!(frac(1, 2), frac(5, 10));
    }

    #[test]
    fn test_zero_is_zero_over_one() {
        for den in [1, 7, -7, i64::MAX] {
            let f = frac(0, den);
            assert_eq!(f.numerator(), 0);
            assert_eq!(f.denominator(), 1);
            assert_eq!(f, Fraction::ZERO);
            assert_eq!(f.to_string(), "0");
        }
    }

    #[test]
    fn test_new_extremes() {
        assert_eq!(Fraction::new(i64::MIN, -1), Err(Error::Overflow));
        assert_eq!(Fraction::new(1, i64::MIN), Err(Error::Overflow));
        assert_eq!(frac(i64::MIN, 1).numerator(), i64::MIN);
        // 2^63 reduces away
        assert_eq!(frac(i64::MIN, i64::MIN), Fraction::ONE);
        assert_eq!(frac(2, i64::MIN).to_string(), "-1/4611686018427387904");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Fraction::from(3), frac(6, 2));
        assert_eq!(Fraction::try_from((2, -4)), Ok(frac(-1, 2)));
        assert_eq!(Fraction::try_from((2, 0)), Err(Error::DivisionByZero));
        assert_eq!(Fraction::default(), Fraction::ZERO);
        assert!(frac(4, 2).is_integer());
        assert!(frac(-1, 3).is_negative());
        assert!(!frac(1, 3).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::ZERO.to_string(), "0");
        assert_eq!(frac(-4, 2).to_string(), "-2");
        assert_eq!(frac(3, 16).to_string(), "3/16");
        assert_eq!(frac(-3, 4).to_string(), "-3/4");
    }

    #[test]
    fn test_ordering() {
        let half = frac(1, 2);
        let quarter = frac(1, 4);
        assert!(quarter < half);
        assert!(!(half < quarter));
        assert!(half > quarter);
        assert!(quarter <= half);
        assert!(half <= frac(5, 10));
        assert!(half >= quarter);
        assert!(half >= frac(5, 10));
        assert!(frac(-1, 2) < frac(-1, 3));
        assert!(half != quarter);
        assert_eq!(half.cmp(&frac(2, 4)), Ordering::Equal);
    }

    #[test]
    fn test_ordering_extremes() {
        let big = frac(i64::MAX, 1);
        let almost = frac(i64::MAX - 1, i64::MAX);
        assert!(almost < Fraction::ONE);
        assert!(big > almost);
        assert!(frac(i64::MIN, 1) < frac(-i64::MAX, 1));
    }
}
