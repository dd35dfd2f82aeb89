#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]
//! DICOM text encoding primitives.
//!
//! Attribute values are kept as decoded text.
//! This crate converts that text to and from the bytes
//! prescribed by a data set's _Specific Character Set_ (0008,0005),
//! so that the exact length of a text value on the wire can be known.

pub mod text;

pub use text::{SpecificCharacterSet, TextCodec};
