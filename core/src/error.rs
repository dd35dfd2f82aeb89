//! Crate-level error and result types.
//!
//! All attribute setters and constructors validate their input
//! before touching any state,
//! so an error always leaves the attribute as it was.

use crate::dictionary::VirtualVr;
use crate::header::{Tag, VR};
use snafu::{Backtrace, Snafu};

/// The main data type for errors in the attribute model.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The requested value representation conflicts
    /// with the one declared by the data dictionary.
    #[snafu(display("Attribute {} cannot have VR {} (expected {})", tag, vr, expected))]
    VrMismatch {
        /// The attribute tag.
        tag: Tag,
        /// The value representation of the attribute.
        vr: VR,
        /// The VR declared by the dictionary.
        expected: VirtualVr,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },

    /// The text could not be parsed according to the VR grammar.
    #[snafu(display("Invalid {} value `{}`: {}", vr, value, reason))]
    Format {
        /// The value representation of the attribute.
        vr: VR,
        /// The offending text.
        value: String,
        /// What the grammar expected.
        reason: &'static str,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },

    /// The value violates the numeric, sign, range,
    /// length, or emptiness rules of the VR.
    #[snafu(display("Invalid value for {} attribute {}: {}", vr, tag, message))]
    Data {
        /// The attribute tag.
        tag: Tag,
        /// The value representation of the attribute.
        vr: VR,
        /// Description of the violated rule.
        message: String,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },

    /// The value index is outside the valid range.
    #[snafu(display("Value index {} out of range for {} values", index, count))]
    Index {
        /// The requested index.
        index: usize,
        /// The number of values held.
        count: usize,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },

    /// The value type is not supported by the VR.
    #[snafu(display("{} attribute {} cannot hold values of type {}", vr, tag, type_name))]
    InvalidType {
        /// The attribute tag.
        tag: Tag,
        /// The value representation of the attribute.
        vr: VR,
        /// The name of the requested value type.
        type_name: &'static str,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
}

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
