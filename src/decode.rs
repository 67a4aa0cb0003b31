//! Syndrome-based Reed-Solomon decoding
//!
//! Decoding runs the textbook pipeline: syndrome computation, error
//! locator via the extended Euclidean algorithm, root finding by Chien
//! search, error magnitudes by Forney's algorithm, then in-place
//! correction. A received word that cannot be brought back to a valid
//! codeword is reported as an error, never silently "corrected".

use log::debug;
use smallvec::{smallvec, SmallVec};

use crate::error::{Result, RsError};
use crate::galois::GaloisField;
use crate::poly::GfPoly;

/// Outcome of a successful decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// All syndromes were zero; the buffer was not modified
    Clean,
    /// Errors were located and corrected in place
    Corrected { errors: usize },
}

/// Reed-Solomon decoder bound to one Galois field
///
/// Holds no mutable state; one instance can be shared across threads
/// without synchronization.
pub struct Decoder<'f> {
    field: &'f GaloisField,
}

impl<'f> Decoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Decoder { field }
    }

    /// The field this decoder checks codewords against
    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Correct up to `max_errors` symbol errors in `received` in place
    ///
    /// `max_errors` must be consistent with the codeword's redundancy
    /// (`parity / 2`). On failure the buffer may be partially modified.
    pub fn decode(&self, received: &mut [u16], max_errors: usize) -> Result<Decoded> {
        let field = self.field;
        let word = GfPoly::new(field, received);
        let check_count = 2 * max_errors;
        let base = field.generator_base() as usize;

        let mut syndromes: SmallVec<[u16; 8]> = smallvec![0; check_count];
        let mut no_error = true;
        for i in 0..check_count {
            let eval = word.evaluate_at(field.exp(i + base));
            syndromes[check_count - 1 - i] = eval;
            if eval != 0 {
                no_error = false;
            }
        }
        if no_error {
            debug!("{}: syndromes clean for {} symbols", field, received.len());
            return Ok(Decoded::Clean);
        }

        let syndrome = GfPoly::new(field, &syndromes);
        let (locator, evaluator) =
            self.run_euclidean(field.build_monomial(check_count, 1), syndrome, check_count)?;
        let locations = self.find_error_locations(&locator)?;
        let magnitudes = self.find_error_magnitudes(&evaluator, &locations)?;
        debug!(
            "{}: correcting {} errors in {} symbols",
            field,
            locations.len(),
            received.len()
        );

        for (&location, &magnitude) in locations.iter().zip(&magnitudes) {
            let log = field.log(location)? as usize;
            if log + 1 > received.len() {
                return Err(RsError::ErrorLocationOutOfRange {
                    log,
                    len: received.len(),
                });
            }
            let position = received.len() - 1 - log;
            received[position] ^= magnitude;
        }
        Ok(Decoded::Corrected {
            errors: locations.len(),
        })
    }

    /// Extended Euclidean algorithm over (`x^2t`, syndrome polynomial)
    ///
    /// Iterates until the remainder's degree drops below `target / 2`,
    /// yielding the error locator and error evaluator polynomials.
    fn run_euclidean(
        &self,
        a: GfPoly<'f>,
        b: GfPoly<'f>,
        target: usize,
    ) -> Result<(GfPoly<'f>, GfPoly<'f>)> {
        let field = self.field;
        let (mut r_last, mut r) = if a.degree() < b.degree() { (b, a) } else { (a, b) };
        let mut t_last = GfPoly::zero(field);
        let mut t = GfPoly::one(field);

        while 2 * r.degree() >= target {
            std::mem::swap(&mut r_last, &mut r);
            let t_last_last = std::mem::replace(&mut t_last, t);
            if r_last.is_zero() {
                // an earlier remainder vanished entirely
                return Err(RsError::EuclideanStalled);
            }

            let mut quotient = GfPoly::zero(field);
            let denominator_inverse = field.inverse(r_last.coefficient(r_last.degree()))?;
            while r.degree() >= r_last.degree() && !r.is_zero() {
                let degree_diff = r.degree() - r_last.degree();
                let scale = field.multiply(r.coefficient(r.degree()), denominator_inverse);
                quotient = quotient.add(&field.build_monomial(degree_diff, scale));
                r = r.add(&r_last.multiply_by_monomial(degree_diff, scale));
            }
            t = quotient.multiply(&t_last).add(&t_last_last);

            if r.degree() >= r_last.degree() && !r.is_zero() {
                return Err(RsError::EuclideanStalled);
            }
        }

        let sigma_tilde_at_zero = t.coefficient(0);
        if sigma_tilde_at_zero == 0 {
            return Err(RsError::DegenerateLocator);
        }
        let scale = field.inverse(sigma_tilde_at_zero)?;
        Ok((t.multiply_scalar(scale), r.multiply_scalar(scale)))
    }

    /// Chien search: the locator's roots' inverses are the error locations
    fn find_error_locations(&self, locator: &GfPoly<'f>) -> Result<SmallVec<[u16; 8]>> {
        let num_errors = locator.degree();
        if num_errors == 0 {
            // non-zero syndromes but nothing to locate
            return Err(RsError::DegenerateLocator);
        }
        if num_errors == 1 {
            return Ok(smallvec![locator.coefficient(1)]);
        }
        let mut locations: SmallVec<[u16; 8]> = SmallVec::with_capacity(num_errors);
        for x in 1..self.field.size() as u16 {
            if locations.len() >= num_errors {
                break;
            }
            if locator.evaluate_at(x) == 0 {
                locations.push(self.field.inverse(x)?);
            }
        }
        if locations.len() != num_errors {
            return Err(RsError::LocatorDegreeMismatch {
                degree: num_errors,
                found: locations.len(),
            });
        }
        Ok(locations)
    }

    /// Forney's algorithm: magnitude at each located error position
    fn find_error_magnitudes(
        &self,
        evaluator: &GfPoly<'f>,
        locations: &[u16],
    ) -> Result<SmallVec<[u16; 8]>> {
        let field = self.field;
        let mut magnitudes: SmallVec<[u16; 8]> = SmallVec::with_capacity(locations.len());
        for (i, &location) in locations.iter().enumerate() {
            let x_inverse = field.inverse(location)?;
            // the locator's formal derivative at x_inverse, in product form
            let mut denominator = 1u16;
            for (j, &other) in locations.iter().enumerate() {
                if i != j {
                    denominator = field.multiply(denominator, 1 ^ field.multiply(other, x_inverse));
                }
            }
            let mut magnitude =
                field.multiply(evaluator.evaluate_at(x_inverse), field.inverse(denominator)?);
            if field.generator_base() != 0 {
                magnitude = field.multiply(magnitude, x_inverse);
            }
            magnitudes.push(magnitude);
        }
        Ok(magnitudes)
    }
}
