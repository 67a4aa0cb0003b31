//! Reed-Solomon error-correcting codes over configurable GF(2^m) fields
//!
//! Systematic encoding and syndrome-based decoding on in-memory symbol
//! buffers, with ready-made field configurations for the common barcode
//! formats.
//!
//! ```
//! use rscodec::{gf8, Decoded, Decoder, Encoder};
//!
//! let field = gf8();
//! let mut codeword = [4, 2, 1, 0, 0, 0, 0];
//! Encoder::new(field).encode(&mut codeword, 4)?;
//! assert_eq!(codeword, [4, 2, 1, 5, 7, 6, 3]);
//!
//! codeword[3] ^= 5;
//! let outcome = Decoder::new(field).decode(&mut codeword, 2)?;
//! assert_eq!(outcome, Decoded::Corrected { errors: 1 });
//! assert_eq!(codeword, [4, 2, 1, 5, 7, 6, 3]);
//! # Ok::<(), rscodec::RsError>(())
//! ```

pub mod bits;
pub mod decode;
pub mod encode;
pub mod error;
pub mod galois;
pub mod poly;

pub use decode::{Decoded, Decoder};
pub use encode::Encoder;
pub use error::{Result, RsError};
pub use galois::{
    aztec_data_10, aztec_data_12, aztec_data_6, aztec_param, data_matrix_field_256, gf8,
    qr_code_field_256, GaloisField,
};
pub use poly::GfPoly;
