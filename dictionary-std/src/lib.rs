//! This crate implements the standard DICOM data element dictionary
//! and tag constants.
//!
//! - [`data_element`] contains information about the DICOM attributes
//!   known to this toolkit: their tag or tag range, keyword,
//!   value representation, value multiplicity and retirement status.
//!   The dictionary is queried whenever an attribute is created by tag alone,
//!   or whenever an attribute's VR must be checked against its definition.
//! - [`tags`] maps each attribute keyword to a DICOM tag at compile time,
//!   thus without incurring a look-up cost.
//!
//! The records are collected from [DICOM PS3.6].
//! The dictionary is provided as a singleton
//! behind the unit type [`StandardDataDictionary`].
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
pub mod data_element;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
