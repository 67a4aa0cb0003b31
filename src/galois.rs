//! Galois field GF(2^m) arithmetic for Reed-Solomon coding
//!
//! A [`GaloisField`] represents GF(2^m) for a chosen primitive polynomial.
//! Construction fills exponential and logarithm tables once; after that the
//! field is read-only and can be shared across threads without
//! synchronization. Ready-made fields for the common barcode formats are
//! exposed as process-wide statics behind accessor functions.

use std::fmt;
use std::sync::OnceLock;

use smallvec::smallvec;

use crate::error::{Result, RsError};
use crate::poly::{Coeffs, GfPoly};

/// GF(2^m) with precomputed log/antilog tables
///
/// The multiplicative generator is fixed at 2. The `exp` table is allocated
/// at twice the field size with a periodic second half, so products of two
/// logs index it directly without a modulo.
pub struct GaloisField {
    primitive: u32,
    size: usize,
    generator_base: u16,
    exp: Vec<u16>,
    log: Vec<u16>,
}

impl GaloisField {
    /// Create a representation of GF(`size`) using the given primitive
    /// polynomial
    ///
    /// `primitive` is the irreducible polynomial with coefficients in the
    /// bits of the integer, least-significant bit holding the constant
    /// term. `size` must be a power of two matching the polynomial's bit
    /// width; this is the caller's responsibility and is not validated.
    /// `generator_base` picks the first root of the generator polynomial,
    /// `g(x) = (x - a^b)(x - a^(b+1))...` — 1 for most formats, 0 for QR.
    pub fn new(primitive: u32, size: usize, generator_base: u16) -> Self {
        let mut field = GaloisField {
            primitive,
            size,
            generator_base,
            exp: vec![0; 2 * size],
            log: vec![0; size],
        };
        field.build_tables();
        field
    }

    fn build_tables(&mut self) {
        let mut x = 1u32;
        for i in 0..self.size {
            self.exp[i] = x as u16;
            x <<= 1;
            if x >= self.size as u32 {
                x ^= self.primitive;
                x &= self.size as u32 - 1;
            }
        }
        for i in 0..self.size - 1 {
            self.log[self.exp[i] as usize] = i as u16;
        }
        // log[0] stays zero and is never read: log()/inverse() reject zero
        // first. The second half of exp mirrors the first (period size-1)
        // so multiply and syndrome evaluation skip the modulo.
        for i in self.size..2 * self.size {
            self.exp[i] = self.exp[i - (self.size - 1)];
        }
    }

    /// Add two field elements — XOR, since the field has characteristic 2
    #[inline]
    pub fn add(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    /// Subtract two field elements — identical to addition
    #[inline]
    pub fn sub(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    /// `a`-th power of the generator element 2
    ///
    /// Valid for `i < 2 * (size - 1)`; the table is periodic with period
    /// `size - 1`.
    #[inline]
    pub fn exp(&self, i: usize) -> u16 {
        self.exp[i]
    }

    /// Base-2 discrete logarithm of `a`
    #[inline]
    pub fn log(&self, a: u16) -> Result<u16> {
        if a == 0 {
            return Err(RsError::LogOfZero);
        }
        Ok(self.log[a as usize])
    }

    /// Multiplicative inverse of `a`
    #[inline]
    pub fn inverse(&self, a: u16) -> Result<u16> {
        if a == 0 {
            return Err(RsError::InverseOfZero);
        }
        Ok(self.exp[self.size - 1 - self.log[a as usize] as usize])
    }

    /// Product of `a` and `b`
    #[inline]
    pub fn multiply(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// The monomial `coefficient * x^degree` as a polynomial over this field
    pub fn build_monomial(&self, degree: usize, coefficient: u16) -> GfPoly<'_> {
        if coefficient == 0 {
            return GfPoly::zero(self);
        }
        let mut coefficients: Coeffs = smallvec![0; degree + 1];
        coefficients[0] = coefficient;
        GfPoly::from_raw(self, coefficients)
    }

    /// Number of elements in the field
    pub fn size(&self) -> usize {
        self.size
    }

    /// First exponent used for the generator polynomial's roots (0 or 1)
    pub fn generator_base(&self) -> u16 {
        self.generator_base
    }

    /// The primitive polynomial this field reduces by
    pub fn primitive(&self) -> u32 {
        self.primitive
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(0x{:x},{})", self.primitive, self.size)
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GaloisField(0x{:x},{},b={})", self.primitive, self.size, self.generator_base)
    }
}

/// GF(8) with x^3 + x + 1
pub fn gf8() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    FIELD.get_or_init(|| GaloisField::new(0xB, 8, 1))
}

/// GF(16) with x^4 + x + 1, used for the Aztec mode word
pub fn aztec_param() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    FIELD.get_or_init(|| GaloisField::new(0x13, 16, 1))
}

/// GF(64) with x^6 + x + 1, used for 6-bit Aztec data and MaxiCode
pub fn aztec_data_6() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    FIELD.get_or_init(|| GaloisField::new(0x43, 64, 1))
}

/// GF(256) with x^8 + x^4 + x^3 + x^2 + 1 and 0-based generator roots,
/// used by QR codes
pub fn qr_code_field_256() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    FIELD.get_or_init(|| GaloisField::new(0x11D, 256, 0))
}

/// GF(256) with x^8 + x^5 + x^3 + x^2 + 1, used by Data Matrix and 8-bit
/// Aztec data
pub fn data_matrix_field_256() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    FIELD.get_or_init(|| GaloisField::new(0x12D, 256, 1))
}

/// GF(1024) with x^10 + x^3 + 1, used for 10-bit Aztec data
pub fn aztec_data_10() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    FIELD.get_or_init(|| GaloisField::new(0x409, 1024, 1))
}

/// GF(4096) with x^12 + x^6 + x^5 + x^3 + 1, used for 12-bit Aztec data
pub fn aztec_data_12() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    FIELD.get_or_init(|| GaloisField::new(0x1069, 4096, 1))
}
