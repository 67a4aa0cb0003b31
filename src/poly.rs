//! Polynomials with coefficients in a Galois field
//!
//! [`GfPoly`] is an immutable value: every arithmetic operation returns a
//! new polynomial. Representation is always normalized — the leading
//! coefficient is non-zero unless the polynomial is the canonical zero
//! polynomial (a single `0` coefficient).

use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::error::{Result, RsError};
use crate::galois::GaloisField;

/// Coefficient storage, highest degree first
///
/// Syndrome and locator polynomials stay inline; message-sized polynomials
/// spill to the heap.
pub(crate) type Coeffs = SmallVec<[u16; 8]>;

/// A polynomial over GF(2^m), bound to the field its coefficients live in
#[derive(Debug, Clone)]
pub struct GfPoly<'f> {
    field: &'f GaloisField,
    coefficients: Coeffs,
}

impl<'f> GfPoly<'f> {
    /// Build a polynomial from coefficients, highest degree first
    ///
    /// Leading zero coefficients are stripped; an all-zero (or empty) slice
    /// collapses to the zero polynomial.
    pub fn new(field: &'f GaloisField, coefficients: &[u16]) -> Self {
        Self::from_raw(field, SmallVec::from_slice(coefficients))
    }

    pub(crate) fn from_raw(field: &'f GaloisField, coefficients: Coeffs) -> Self {
        let coefficients = match coefficients.iter().position(|&c| c != 0) {
            Some(0) => coefficients,
            Some(first) => SmallVec::from_slice(&coefficients[first..]),
            None => smallvec![0],
        };
        GfPoly { field, coefficients }
    }

    /// The additive identity
    pub fn zero(field: &'f GaloisField) -> Self {
        GfPoly { field, coefficients: smallvec![0] }
    }

    /// The multiplicative identity
    pub fn one(field: &'f GaloisField) -> Self {
        GfPoly { field, coefficients: smallvec![1] }
    }

    /// The field this polynomial's coefficients live in
    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// Degree of the polynomial; the zero polynomial has degree 0
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficient of the `x^degree` term
    pub fn coefficient(&self, degree: usize) -> u16 {
        self.coefficients[self.coefficients.len() - 1 - degree]
    }

    /// All coefficients, highest degree first
    pub fn coefficients(&self) -> &[u16] {
        &self.coefficients
    }

    fn check_same_field(&self, other: &GfPoly<'f>) {
        assert!(
            std::ptr::eq(self.field, other.field),
            "polynomials belong to different fields"
        );
    }

    /// Sum (and difference) of two polynomials
    pub fn add(&self, other: &GfPoly<'f>) -> GfPoly<'f> {
        self.check_same_field(other);
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let (smaller, larger) = if self.coefficients.len() <= other.coefficients.len() {
            (&self.coefficients, &other.coefficients)
        } else {
            (&other.coefficients, &self.coefficients)
        };
        let offset = larger.len() - smaller.len();
        let mut sum: Coeffs = SmallVec::with_capacity(larger.len());
        sum.extend_from_slice(&larger[..offset]);
        for (i, &c) in smaller.iter().enumerate() {
            sum.push(c ^ larger[offset + i]);
        }
        Self::from_raw(self.field, sum)
    }

    /// Product of two polynomials (convolution of coefficients)
    pub fn multiply(&self, other: &GfPoly<'f>) -> GfPoly<'f> {
        self.check_same_field(other);
        if self.is_zero() || other.is_zero() {
            return GfPoly::zero(self.field);
        }
        let a = &self.coefficients;
        let b = &other.coefficients;
        let mut product: Coeffs = smallvec![0; a.len() + b.len() - 1];
        for (i, &ac) in a.iter().enumerate() {
            for (j, &bc) in b.iter().enumerate() {
                product[i + j] ^= self.field.multiply(ac, bc);
            }
        }
        Self::from_raw(self.field, product)
    }

    /// Coefficient-wise scaling by a field element
    pub fn multiply_scalar(&self, coefficient: u16) -> GfPoly<'f> {
        match coefficient {
            0 => GfPoly::zero(self.field),
            1 => self.clone(),
            _ => {
                let product = self
                    .coefficients
                    .iter()
                    .map(|&c| self.field.multiply(c, coefficient))
                    .collect();
                Self::from_raw(self.field, product)
            }
        }
    }

    /// Product with the monomial `coefficient * x^degree`
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: u16) -> GfPoly<'f> {
        if coefficient == 0 || self.is_zero() {
            return GfPoly::zero(self.field);
        }
        let mut product: Coeffs = SmallVec::with_capacity(self.coefficients.len() + degree);
        product.extend(
            self.coefficients
                .iter()
                .map(|&c| self.field.multiply(c, coefficient)),
        );
        product.extend(std::iter::repeat(0).take(degree));
        Self::from_raw(self.field, product)
    }

    /// Synthetic long division, returning `(quotient, remainder)`
    pub fn divide(&self, divisor: &GfPoly<'f>) -> Result<(GfPoly<'f>, GfPoly<'f>)> {
        self.check_same_field(divisor);
        if divisor.is_zero() {
            return Err(RsError::DivisionByZeroPoly);
        }
        let mut quotient = GfPoly::zero(self.field);
        let mut remainder = self.clone();
        let inverse_leading = self.field.inverse(divisor.coefficient(divisor.degree()))?;
        while remainder.degree() >= divisor.degree() && !remainder.is_zero() {
            let degree_diff = remainder.degree() - divisor.degree();
            let scale = self
                .field
                .multiply(remainder.coefficient(remainder.degree()), inverse_leading);
            quotient = quotient.add(&self.field.build_monomial(degree_diff, scale));
            remainder = remainder.add(&divisor.multiply_by_monomial(degree_diff, scale));
        }
        Ok((quotient, remainder))
    }

    /// Evaluate the polynomial at `x` by Horner's method
    pub fn evaluate_at(&self, x: u16) -> u16 {
        if x == 0 {
            return self.coefficient(0);
        }
        if x == 1 {
            // the value is just the sum of the coefficients
            return self.coefficients.iter().fold(0, |sum, &c| sum ^ c);
        }
        let mut result = 0u16;
        for &c in &self.coefficients {
            result = self.field.multiply(result, x) ^ c;
        }
        result
    }
}

impl fmt::Display for GfPoly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for degree in (0..=self.degree()).rev() {
            let c = self.coefficient(degree);
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match (c, degree) {
                (c, 0) => write!(f, "{c}")?,
                (1, 1) => write!(f, "x")?,
                (1, d) => write!(f, "x^{d}")?,
                (c, 1) => write!(f, "{c}x")?,
                (c, d) => write!(f, "{c}x^{d}")?,
            }
        }
        Ok(())
    }
}
