use std::{
    fmt,
    ops::{Add, AddAssign, Mul},
};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// An exact rational number kept in lowest terms with a positive denominator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rational {
    nom: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates a new rational number `nom / denom`, or `None` if the
    /// denominator is zero.
    pub fn new(nom: BigInt, denom: BigInt) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }

        let mut r = Self { nom, denom };
        r.reduce();
        Some(r)
    }

    /// Returns the nominator.
    pub fn nom(&self) -> &BigInt {
        &self.nom
    }

    /// Returns the denominator, which is always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Returns true if the number is an integer.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Converts the number into an integer, if it is one.
    pub fn into_integer(self) -> Option<BigInt> {
        match self.is_integer() {
            true => Some(self.nom),
            false => None,
        }
    }

    fn reduce(&mut self) {
        if self.denom.is_negative() {
            self.nom = -&self.nom;
            self.denom = -&self.denom;
        }

        let gcd = self.nom.gcd(&self.denom);
        if !gcd.is_one() {
            self.nom /= &gcd;
            self.denom /= &gcd;
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            nom: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.nom.is_zero()
    }
}

impl From<BigInt> for Rational {
    fn from(nom: BigInt) -> Self {
        Self {
            nom,
            denom: BigInt::one(),
        }
    }
}

impl<'a> AddAssign<&'a Rational> for Rational {
    fn add_assign(&mut self, other: &Rational) {
        self.nom = &self.nom * &other.denom + &other.nom * &self.denom;
        self.denom *= &other.denom;
        self.reduce();
    }
}

impl AddAssign<Rational> for Rational {
    fn add_assign(&mut self, other: Rational) {
        *self += &other;
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(mut self, other: Rational) -> Rational {
        self += &other;
        self
    }
}

impl<'a> Mul<&'a BigInt> for Rational {
    type Output = Rational;

    fn mul(mut self, rhs: &BigInt) -> Rational {
        self.nom *= rhs;
        self.reduce();
        self
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.is_integer() {
            true => fmt::Display::fmt(&self.nom, f),
            false => write!(f, "{}/{}", self.nom, self.denom),
        }
    }
}
