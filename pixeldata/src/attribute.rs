//! Utility module for fetching key image attributes from a collection.

use dicom_core::Tag;
use dicom_dictionary_std::tags;
use dicom_object::{AttributeCollection, CollectionAttribute};
use snafu::{OptionExt, ResultExt};

use crate::{AttributeValueSnafu, InvalidValueSnafu, MissingAttributeSnafu, Result};

/// Get the Rows from the collection
pub fn rows<D>(obj: &AttributeCollection<D>) -> Result<u16> {
    retrieve_required_u16(obj, tags::ROWS, "Rows")
}

/// Get the Columns from the collection
pub fn cols<D>(obj: &AttributeCollection<D>) -> Result<u16> {
    retrieve_required_u16(obj, tags::COLUMNS, "Columns")
}

/// Get the BitsAllocated from the collection
pub fn bits_allocated<D>(obj: &AttributeCollection<D>) -> Result<u16> {
    retrieve_required_u16(obj, tags::BITS_ALLOCATED, "BitsAllocated")
}

/// Get the BitsStored from the collection
pub fn bits_stored<D>(obj: &AttributeCollection<D>) -> Result<u16> {
    retrieve_required_u16(obj, tags::BITS_STORED, "BitsStored")
}

/// Get the HighBit from the collection
pub fn high_bit<D>(obj: &AttributeCollection<D>) -> Result<u16> {
    retrieve_required_u16(obj, tags::HIGH_BIT, "HighBit")
}

/// Get the SamplesPerPixel from the collection
pub fn samples_per_pixel<D>(obj: &AttributeCollection<D>) -> Result<u16> {
    retrieve_required_u16(obj, tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")
}

/// Get the PlanarConfiguration from the collection,
/// defaulting to interleaved samples (0).
pub fn planar_configuration<D>(obj: &AttributeCollection<D>) -> Result<u16> {
    let value = match present(obj, tags::PLANAR_CONFIGURATION) {
        Some(attr) => attr.get_u16(0).context(AttributeValueSnafu {
            name: "PlanarConfiguration",
        })?,
        None => return Ok(0),
    };
    match value {
        0 | 1 => Ok(value),
        _ => InvalidValueSnafu {
            name: "PlanarConfiguration",
            value: value.to_string(),
        }
        .fail(),
    }
}

/// Get the NumberOfFrames from the collection,
/// defaulting to a single frame.
pub fn number_of_frames<D>(obj: &AttributeCollection<D>) -> Result<u32> {
    match present(obj, tags::NUMBER_OF_FRAMES) {
        Some(attr) => attr.get_u32(0).context(AttributeValueSnafu {
            name: "NumberOfFrames",
        }),
        None => Ok(1),
    }
}

/// Get the PhotometricInterpretation from the collection, if present
pub fn photometric_interpretation<D>(obj: &AttributeCollection<D>) -> Option<String> {
    present(obj, tags::PHOTOMETRIC_INTERPRETATION)
        .and_then(|attr| attr.try_get_string(0))
        .map(|pi| pi.trim_end().to_string())
        .filter(|pi| !pi.is_empty())
}

/// An interpreted representation of the DICOM _Pixel Representation_ attribute.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum PixelRepresentation {
    /// unsigned pixel data sample values
    Unsigned,
    /// signed pixel data sample values
    Signed,
}

impl PixelRepresentation {
    /// Whether samples are signed (two's complement).
    pub fn is_signed(self) -> bool {
        self == PixelRepresentation::Signed
    }

    /// The attribute value of this representation.
    pub fn value(self) -> u16 {
        match self {
            PixelRepresentation::Unsigned => 0,
            PixelRepresentation::Signed => 1,
        }
    }
}

/// Get the PixelRepresentation from the collection
pub fn pixel_representation<D>(obj: &AttributeCollection<D>) -> Result<PixelRepresentation> {
    let p = retrieve_required_u16(obj, tags::PIXEL_REPRESENTATION, "PixelRepresentation")?;

    match p {
        0 => Ok(PixelRepresentation::Unsigned),
        1 => Ok(PixelRepresentation::Signed),
        _ => InvalidValueSnafu {
            name: "PixelRepresentation",
            value: p.to_string(),
        }
        .fail(),
    }
}

/// An attribute which is in the collection and has a value.
fn present<D>(obj: &AttributeCollection<D>, tag: Tag) -> Option<&CollectionAttribute<D>> {
    obj.get(tag).filter(|attr| !attr.is_empty() && !attr.is_null())
}

#[inline]
fn retrieve_required_u16<D>(
    obj: &AttributeCollection<D>,
    tag: Tag,
    name: &'static str,
) -> Result<u16> {
    present(obj, tag)
        .context(MissingAttributeSnafu { name })?
        .get_u16(0)
        .context(AttributeValueSnafu { name })
}
