use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::fraction::{Fraction, error::Error};

// i64 x i64 products and their sums always fit in i128,
// so only the final narrowing can overflow
impl Fraction {
    pub fn checked_add(self, rhs: Fraction) -> Result<Fraction, Error> {
        let (an, ad) = self.widen();
        let (bn, bd) = rhs.widen();
        Fraction::from_wide(an * bd + ad * bn, ad * bd)
    }

    /// Adds `rhs` to `self` in place and returns `self` for chaining.
    ///
    /// On error `self` is left unchanged.
    pub fn checked_add_assign(&mut self, rhs: Fraction) -> Result<&mut Self, Error> {
        let (an, ad) = self.widen();
        let (bn, bd) = rhs.widen();
        self.assign_wide(an * bd + ad * bn, ad * bd)?;
        Ok(self)
    }

    pub fn checked_sub(self, rhs: Fraction) -> Result<Fraction, Error> {
        let (an, ad) = self.widen();
        let (bn, bd) = rhs.widen();
        Fraction::from_wide(an * bd - ad * bn, ad * bd)
    }

    pub fn checked_mul(self, rhs: Fraction) -> Result<Fraction, Error> {
        let (an, ad) = self.widen();
        let (bn, bd) = rhs.widen();
        Fraction::from_wide(an * bn, ad * bd)
    }

    /// Fails with [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div(self, rhs: Fraction) -> Result<Fraction, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (an, ad) = self.widen();
        let (bn, bd) = rhs.widen();
        Fraction::from_wide(an * bd, ad * bn)
    }
}

// operators panic on error the same way integer operators do
impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        self.checked_add(rhs)
            .unwrap_or_else(|err| panic!("Fraction addition failed: {err}"))
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Fraction) {
        if let Err(err) = self.checked_add_assign(rhs) {
            panic!("Fraction addition failed: {err}");
        }
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self.checked_sub(rhs)
            .unwrap_or_else(|err| panic!("Fraction subtraction failed: {err}"))
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        self.checked_mul(rhs)
            .unwrap_or_else(|err| panic!("Fraction multiplication failed: {err}"))
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        self.checked_div(rhs)
            .unwrap_or_else(|err| panic!("Fraction division failed: {err}"))
    }
}
