#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOM toolkit,
//! containing the attribute model and the rules
//! for laying out attributes in a DICOM stream.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] holds the attribute tag and the value representation.
//! - [`vr`] describes the capabilities of each value representation.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing relevant information about the attribute.
//! - [`attribute`] holds the typed attribute model,
//!   with text, binary, sequence and encapsulated values.
//! - [`value`] contains the storage types behind attribute values,
//!   including the shared binary buffer and fragment sequences.
//! - [`transfer_syntax`] and [`write`] decide
//!   how many bytes an attribute takes once written.
//! - [`error`] contains crate-level error and result types.

pub mod attribute;
pub mod dictionary;
pub mod error;
pub mod header;
pub mod transfer_syntax;
pub mod value;
pub mod vr;
pub mod write;

pub use attribute::{Attribute, AttributeValue, BinaryValues, EmptyObject};
pub use dictionary::DataDictionary;
pub use error::{Error, Result};
pub use header::{Tag, VR};
pub use transfer_syntax::TransferSyntax;
pub use write::{WriteLength, WriteOptions};

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;
