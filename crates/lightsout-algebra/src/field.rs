//! The field contract and prime fields.

use std::fmt::Debug;

use crate::AlgebraError;

/// The algebraic contract for a finite field.
///
/// A `Field` value identifies one specific field (for [`PrimeField`], one
/// modulus); elements are opaque values that only have meaning relative to
/// the field that produced them. All operations are total over legal
/// elements; offering an illegal element fails with
/// [`AlgebraError::NotAnElement`] rather than producing a wrong answer.
///
/// The [`Matrix`](crate::Matrix) engine is generic over this trait, which
/// keeps Gauss–Jordan elimination independent of any particular field and
/// lets tests exercise it with several small primes.
pub trait Field {
    /// An element of this field.
    type Elem: Clone + PartialEq + Debug;

    /// Returns the additive identity.
    fn zero(&self) -> Self::Elem;

    /// Returns the multiplicative identity.
    fn one(&self) -> Self::Elem;

    /// Returns `x + y`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotAnElement`] if an operand is not a legal
    /// element of this field.
    fn add(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem, AlgebraError>;

    /// Returns `x - y`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotAnElement`] if an operand is not a legal
    /// element of this field.
    fn sub(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem, AlgebraError>;

    /// Returns `-x`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotAnElement`] if the operand is not a legal
    /// element of this field.
    fn neg(&self, x: &Self::Elem) -> Result<Self::Elem, AlgebraError>;

    /// Returns `x * y`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotAnElement`] if an operand is not a legal
    /// element of this field.
    fn mul(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem, AlgebraError>;

    /// Returns the multiplicative inverse of `x`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for the zero element, and
    /// [`AlgebraError::NotInvertible`] if no inverse exists (which for
    /// [`PrimeField`] means the modulus was not prime).
    fn reciprocal(&self, x: &Self::Elem) -> Result<Self::Elem, AlgebraError>;
}

/// The field of integers modulo a prime `p`.
///
/// Elements are integers in `[0, p)`, represented as `u64`. The field and
/// its elements are immutable; one `PrimeField` value is shared by all
/// cells of a matrix computation.
///
/// The constructor rejects moduli below 2 but does **not** check primality:
/// a composite modulus yields a ring in which some inversions fail, and
/// that failure surfaces as [`AlgebraError::NotInvertible`] the first time
/// an elimination needs the missing reciprocal.
///
/// # Examples
///
/// ```
/// use lightsout_algebra::{Field, PrimeField};
///
/// let f = PrimeField::new(5)?;
/// assert_eq!(f.add(&3, &4)?, 2);
/// assert_eq!(f.mul(&3, &4)?, 2);
/// assert_eq!(f.reciprocal(&3)?, 2); // 3 * 2 = 6 = 1 (mod 5)
/// # Ok::<(), lightsout_algebra::AlgebraError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Creates the field of integers modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidModulus`] if `modulus < 2`.
    pub fn new(modulus: u64) -> Result<Self, AlgebraError> {
        if modulus < 2 {
            return Err(AlgebraError::InvalidModulus { modulus });
        }
        Ok(Self { modulus })
    }

    /// Returns the modulus of this field.
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    fn check(&self, x: u64) -> Result<u64, AlgebraError> {
        if x < self.modulus {
            Ok(x)
        } else {
            Err(AlgebraError::NotAnElement {
                value: x,
                modulus: self.modulus,
            })
        }
    }
}

impl Field for PrimeField {
    type Elem = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1
    }

    fn add(&self, x: &u64, y: &u64) -> Result<u64, AlgebraError> {
        let sum = u128::from(self.check(*x)?) + u128::from(self.check(*y)?);
        #[expect(clippy::cast_possible_truncation)]
        Ok((sum % u128::from(self.modulus)) as u64)
    }

    fn sub(&self, x: &u64, y: &u64) -> Result<u64, AlgebraError> {
        let diff =
            u128::from(self.check(*x)?) + u128::from(self.modulus) - u128::from(self.check(*y)?);
        #[expect(clippy::cast_possible_truncation)]
        Ok((diff % u128::from(self.modulus)) as u64)
    }

    fn neg(&self, x: &u64) -> Result<u64, AlgebraError> {
        Ok((self.modulus - self.check(*x)?) % self.modulus)
    }

    fn mul(&self, x: &u64, y: &u64) -> Result<u64, AlgebraError> {
        let product = u128::from(self.check(*x)?) * u128::from(self.check(*y)?);
        #[expect(clippy::cast_possible_truncation)]
        Ok((product % u128::from(self.modulus)) as u64)
    }

    fn reciprocal(&self, w: &u64) -> Result<u64, AlgebraError> {
        // Extended Euclidean GCD.
        let mut x = i128::from(self.modulus);
        let mut y = i128::from(self.check(*w)?);
        if y == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        let (mut a, mut b) = (0_i128, 1_i128);
        while y != 0 {
            let z = x % y;
            let c = a - x / y * b;
            x = y;
            y = z;
            a = b;
            b = c;
        }
        if x != 1 {
            // Every nonzero element of a prime field is invertible.
            return Err(AlgebraError::NotInvertible {
                modulus: self.modulus,
            });
        }
        let modulus = i128::from(self.modulus);
        #[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        Ok(((a % modulus + modulus) % modulus) as u64)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_modulus_must_be_at_least_two() {
        assert_eq!(
            PrimeField::new(0),
            Err(AlgebraError::InvalidModulus { modulus: 0 })
        );
        assert_eq!(
            PrimeField::new(1),
            Err(AlgebraError::InvalidModulus { modulus: 1 })
        );
        assert!(PrimeField::new(2).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_elements() {
        let f = PrimeField::new(5).unwrap();
        assert_eq!(
            f.add(&5, &0),
            Err(AlgebraError::NotAnElement {
                value: 5,
                modulus: 5
            })
        );
        assert_eq!(
            f.reciprocal(&7),
            Err(AlgebraError::NotAnElement {
                value: 7,
                modulus: 5
            })
        );
    }

    #[test]
    fn test_reciprocal_of_zero_fails() {
        let f = PrimeField::new(7).unwrap();
        assert_eq!(f.reciprocal(&0), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_composite_modulus_detected_on_inversion() {
        // 2 shares a factor with 6, so it has no reciprocal mod 6.
        let f = PrimeField::new(6).unwrap();
        assert_eq!(
            f.reciprocal(&2),
            Err(AlgebraError::NotInvertible { modulus: 6 })
        );
        // 5 is coprime to 6, so its reciprocal still exists.
        assert_eq!(f.reciprocal(&5).unwrap(), 5);
    }

    #[test]
    fn test_gf2_arithmetic_is_xor_like() {
        let f = PrimeField::new(2).unwrap();
        assert_eq!(f.add(&1, &1).unwrap(), 0);
        assert_eq!(f.sub(&0, &1).unwrap(), 1);
        assert_eq!(f.neg(&1).unwrap(), 1);
        assert_eq!(f.reciprocal(&1).unwrap(), 1);
    }

    const TEST_PRIMES: [u64; 5] = [2, 3, 5, 7, 13];

    proptest! {
        #[test]
        fn prop_field_axioms(
            p_index in 0usize..TEST_PRIMES.len(),
            a in 0u64..13,
            b in 0u64..13,
            c in 0u64..13,
        ) {
            let p = TEST_PRIMES[p_index];
            let f = PrimeField::new(p).unwrap();
            let (a, b, c) = (a % p, b % p, c % p);

            // Commutativity and associativity.
            prop_assert_eq!(f.add(&a, &b).unwrap(), f.add(&b, &a).unwrap());
            prop_assert_eq!(f.mul(&a, &b).unwrap(), f.mul(&b, &a).unwrap());
            let ab_c = f.add(&f.add(&a, &b).unwrap(), &c).unwrap();
            let a_bc = f.add(&a, &f.add(&b, &c).unwrap()).unwrap();
            prop_assert_eq!(ab_c, a_bc);

            // Identities and inverses.
            prop_assert_eq!(f.add(&a, &f.zero()).unwrap(), a);
            prop_assert_eq!(f.mul(&a, &f.one()).unwrap(), a);
            prop_assert_eq!(f.add(&a, &f.neg(&a).unwrap()).unwrap(), 0);
            prop_assert_eq!(f.sub(&a, &b).unwrap(), f.add(&a, &f.neg(&b).unwrap()).unwrap());

            // Distributivity.
            let left = f.mul(&a, &f.add(&b, &c).unwrap()).unwrap();
            let right = f.add(&f.mul(&a, &b).unwrap(), &f.mul(&a, &c).unwrap()).unwrap();
            prop_assert_eq!(left, right);

            // Reciprocal really inverts.
            if a != 0 {
                let inv = f.reciprocal(&a).unwrap();
                prop_assert_eq!(f.mul(&a, &inv).unwrap(), 1);
            }
        }
    }
}
