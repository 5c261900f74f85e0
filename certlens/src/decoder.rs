//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts a source type `T` into a destination type
//! `D`. It is used by every certlens crate to move between representations
//! of the same key or certificate material.
//!
//! The trait is paired with the `DecodableFrom<T>` marker so that only the
//! conversions a crate explicitly declares are possible:
//!
//! ```no_run
//! use certlens::decoder::{Decoder, DecodableFrom};
//!
//! struct SourceType(Vec<u8>);
//! struct DestType(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<SourceType> for DestType {}
//!
//! impl Decoder<SourceType, DestType> for SourceType {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<DestType, Self::Error> {
//!         Ok(DestType(String::from_utf8_lossy(&self.0).to_string()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type. The destination type must implement
/// `DecodableFrom<T>`.
///
/// ```ignore
/// use certlens::decoder::Decoder;
/// use certlens_pem::Pem;
///
/// let pem: Pem = "-----BEGIN CERTIFICATE-----\n...".decode()?;
/// let der: Vec<u8> = pem.decode()?;
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods. Implement it for each destination type alongside the
/// matching `Decoder` implementation.
pub trait DecodableFrom<T> {}
