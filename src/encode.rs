//! Systematic Reed-Solomon encoding
//!
//! The encoder leaves the message symbols untouched and fills the trailing
//! parity slots with the remainder of the shifted message polynomial
//! divided by the generator polynomial.

use log::trace;

use crate::error::{Result, RsError};
use crate::galois::GaloisField;
use crate::poly::GfPoly;

/// Reed-Solomon encoder bound to one Galois field
///
/// Owns a cache of generator polynomials indexed by degree, grown
/// monotonically and never recomputed. `encode` and `build_generator` take
/// `&mut self`, so exclusive access to the cache is enforced by the borrow
/// checker; share an encoder across threads behind a lock, or give each
/// thread its own.
pub struct Encoder<'f> {
    field: &'f GaloisField,
    cached_generators: Vec<GfPoly<'f>>,
}

impl<'f> Encoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Encoder {
            field,
            cached_generators: vec![GfPoly::one(field)],
        }
    }

    /// The field this encoder produces codewords for
    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Generator polynomial of the given degree,
    /// `g(x) = (x - a^b)(x - a^(b+1)) ... (x - a^(b+degree-1))`
    ///
    /// Extends the cache upward if needed; lower-degree entries are reused
    /// as-is.
    pub fn build_generator(&mut self, degree: usize) -> &GfPoly<'f> {
        if degree >= self.cached_generators.len() {
            trace!(
                "{}: extending generator cache from degree {} to {}",
                self.field,
                self.cached_generators.len() - 1,
                degree
            );
            for d in self.cached_generators.len()..=degree {
                let root = self.field.exp(d - 1 + self.field.generator_base() as usize);
                let next = self.cached_generators[d - 1]
                    .multiply(&GfPoly::new(self.field, &[1, root]));
                self.cached_generators.push(next);
            }
        }
        &self.cached_generators[degree]
    }

    /// Encode in place: fill the trailing `parity` slots of `codeword` with
    /// parity symbols computed over the leading data symbols
    ///
    /// Fails before touching the buffer if `parity` is zero or leaves no
    /// room for data.
    pub fn encode(&mut self, codeword: &mut [u16], parity: usize) -> Result<()> {
        if parity == 0 {
            return Err(RsError::NoParitySymbols);
        }
        if codeword.len() <= parity {
            return Err(RsError::NoDataSymbols {
                len: codeword.len(),
                parity,
            });
        }
        let data_len = codeword.len() - parity;
        let field = self.field;
        let generator = self.build_generator(parity);

        let info = GfPoly::new(field, &codeword[..data_len]);
        let shifted = info.multiply_by_monomial(parity, 1);
        let (_, remainder) = shifted.divide(generator)?;

        // the remainder's degree is below `parity`; write it right-aligned
        // and zero-fill the gap
        let parity_slots = &mut codeword[data_len..];
        parity_slots.fill(0);
        if !remainder.is_zero() {
            let coefficients = remainder.coefficients();
            let pad = parity - coefficients.len();
            parity_slots[pad..].copy_from_slice(coefficients);
        }
        Ok(())
    }
}
