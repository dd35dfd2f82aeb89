//! This crate contains the attribute collection,
//! the in-memory representation of a DICOM data set.
//!
//! An [`AttributeCollection`] is an ordered map from tags to attributes.
//! Attributes are created on demand with the value representation
//! declared by the data dictionary,
//! so filling a data set reads much like filling a table:
//!
//! ```
//! use dicom_dictionary_std::tags;
//! use dicom_object::AttributeCollection;
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut obj = AttributeCollection::new();
//! obj.get_or_insert(tags::PATIENT_NAME)?
//!     .set_string_value("Doe^John")?;
//! obj.get_or_insert(tags::ROWS)?.set_u16(0, 512)?;
//!
//! assert_eq!(obj.len(), 2);
//! assert_eq!(
//!     obj.get(tags::PATIENT_NAME).and_then(|a| a.try_get_string(0)).as_deref(),
//!     Some("Doe^John"),
//! );
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! Sequence attributes hold nested collections as their items.
//! The _Specific Character Set_ of a collection
//! applies to the text of its nested items,
//! unless an item declares its own.
//!
//! Collections may be copied with a selection of their attributes
//! (see [`CopyOptions`]),
//! compared with per-attribute diagnostics
//! (see [`AttributeCollection::compare`]),
//! and measured for the number of bytes they take once encoded
//! in a given transfer syntax.
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

pub mod collection;
pub mod compare;
pub mod copy;

pub use crate::collection::{AttributeCollection, CollectionAttribute, CollectionOptions};
pub use crate::compare::{ComparisonResult, ComparisonResultType};
pub use crate::copy::CopyOptions;
pub use dicom_core::Tag;
pub use dicom_dictionary_std::StandardDataDictionary;

use dicom_core::VR;
use snafu::{Backtrace, Snafu};

/// An error which may occur when accessing or filling an attribute collection.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The tag lies outside of the tag range accepted by the collection.
    #[snafu(display(
        "Tag {} is out of range for collection ({} to {})",
        tag,
        start,
        end
    ))]
    OutOfRangeTag {
        tag: Tag,
        start: Tag,
        end: Tag,
        backtrace: Backtrace,
    },

    /// The attribute already exists with another value representation.
    #[snafu(display("Attribute {} already exists with VR {}, not {}", tag, existing, vr))]
    ExistingVr {
        tag: Tag,
        vr: VR,
        existing: VR,
        backtrace: Backtrace,
    },

    /// The attribute could not be created or modified.
    #[snafu(display("Invalid attribute {}", tag))]
    Attribute {
        tag: Tag,
        #[snafu(backtrace)]
        source: dicom_core::Error,
    },
}

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
