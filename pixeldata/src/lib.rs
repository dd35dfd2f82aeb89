//! This crate contains the uncompressed pixel data handler,
//! a frame oriented view over the image attributes of a collection.
//!
//! [`UncompressedPixelData`] reads the image geometry
//! (_Rows_, _Columns_, _Bits Allocated_, and so on)
//! and splits _Pixel Data_ into frames,
//! which may then be read, replaced, added or removed
//! before being written back to the collection.
//!
//! The [`bits`] module holds the bit-level normalization functions
//! for samples which do not fill their allocated width,
//! and [`transform`] holds planar configuration and color space conversions.
//!
//! # Examples
//! ```
//! # use std::error::Error;
//! use dicom_dictionary_std::tags;
//! use dicom_object::AttributeCollection;
//! use dicom_pixeldata::UncompressedPixelData;
//!
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let mut obj = AttributeCollection::new();
//! for (tag, value) in [
//!     (tags::ROWS, 2),
//!     (tags::COLUMNS, 2),
//!     (tags::BITS_ALLOCATED, 16),
//!     (tags::BITS_STORED, 12),
//!     (tags::HIGH_BIT, 12),
//!     (tags::PIXEL_REPRESENTATION, 0),
//!     (tags::SAMPLES_PER_PIXEL, 1),
//! ] {
//!     obj.get_or_insert(tag)?.set_u16(0, value)?;
//! }
//!
//! let mut pixels = UncompressedPixelData::from_collection(&obj)?;
//! assert_eq!(pixels.uncompressed_frame_size(), 8);
//! pixels.append_frame(&[0xFF; 8])?;
//! pixels.zero_unused_bits();
//! pixels.right_align();
//! assert_eq!(pixels.frame(0)?, &[0xFF, 0x0F, 0xFF, 0x0F, 0xFF, 0x0F, 0xFF, 0x0F]);
//!
//! pixels.update_attribute_collection(&mut obj)?;
//! assert!(obj.contains(tags::PIXEL_DATA));
//! #   Ok(())
//! # }
//! ```
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

use dicom_core::dictionary::DataDictionary;
use dicom_core::value::BinaryBuffer;
use dicom_core::{Attribute, AttributeValue, BinaryValues, Tag, VR};
use dicom_dictionary_std::tags;
use dicom_object::AttributeCollection;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use tracing::{debug, trace};

#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

pub mod attribute;
pub mod bits;
pub mod transform;

pub use attribute::PixelRepresentation;
pub use bits::{
    is_valid_geometry, low_bit, max_pixel_value, min_pixel_value, normalize_pixel_data, right_align,
    toggle_pixel_representation, zero_unused_bits,
};
pub use dicom_core::transfer_syntax::Endianness;
pub use transform::{
    toggle_planar_configuration, ybr_full_422_to_rgb, ybr_full_to_rgb, ybr_ict_to_rgb,
    ybr_partial_422_to_rgb, ybr_rct_to_rgb,
};

/// An error which may occur when building or updating a pixel data view.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A mandatory image attribute is missing or has no value.
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingAttribute {
        name: &'static str,
        backtrace: Backtrace,
    },

    /// An image attribute could not be read or written.
    #[snafu(display("Could not access value of attribute `{}`", name))]
    AttributeValue {
        name: &'static str,
        #[snafu(backtrace)]
        source: dicom_core::Error,
    },

    /// An image attribute could not be put in the collection.
    #[snafu(display("Could not update attribute `{}`", name))]
    UpdateAttribute {
        name: &'static str,
        #[snafu(backtrace)]
        source: dicom_object::Error,
    },

    #[snafu(display("Semantically invalid value `{}` for attribute `{}`", value, name))]
    InvalidValue {
        name: &'static str,
        value: String,
        backtrace: Backtrace,
    },

    #[snafu(display(
        "Invalid bit geometry: {} bits allocated, {} bits stored, high bit {}",
        bits_allocated,
        bits_stored,
        high_bit
    ))]
    InvalidBitGeometry {
        bits_allocated: u16,
        bits_stored: u16,
        high_bit: u16,
        backtrace: Backtrace,
    },

    /// Pixel data is encapsulated and cannot be split into frames.
    #[snafu(display("Pixel data is encapsulated"))]
    Encapsulated { backtrace: Backtrace },

    #[snafu(display(
        "Pixel data has {} bytes, but {} frames need {} bytes",
        len,
        frames,
        expected
    ))]
    PixelDataLength {
        len: usize,
        frames: u32,
        expected: usize,
        backtrace: Backtrace,
    },

    /// The frame number is out of bounds.
    #[snafu(display("Frame {} is out of bounds ({} frames)", index, count))]
    FrameIndex {
        index: usize,
        count: usize,
        backtrace: Backtrace,
    },

    /// The frame data does not have the uncompressed frame size.
    #[snafu(display("Frame data has {} bytes, expected {}", len, expected))]
    FrameLength {
        len: usize,
        expected: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A frame oriented view over uncompressed pixel data.
///
/// The view owns a copy of the frames,
/// the collection it was built from is only changed by
/// [`update_attribute_collection`](UncompressedPixelData::update_attribute_collection).
///
/// Every frame holds [`uncompressed_frame_size`](Self::uncompressed_frame_size) bytes,
/// which is the packed frame size rounded up to an even number.
/// In the pixel data attribute,
/// frames are packed one after the other
/// and a single pad byte completes an odd total length.
#[derive(Debug, Clone, PartialEq)]
pub struct UncompressedPixelData {
    rows: u16,
    cols: u16,
    bits_allocated: u16,
    bits_stored: u16,
    high_bit: u16,
    pixel_representation: PixelRepresentation,
    samples_per_pixel: u16,
    planar_configuration: u16,
    photometric_interpretation: Option<String>,
    frames: Vec<Vec<u8>>,
}

impl UncompressedPixelData {
    /// Read the image geometry and pixel data from a collection.
    ///
    /// _Planar Configuration_ defaults to 0
    /// and _Number of Frames_ defaults to 1.
    /// A collection without _Pixel Data_ gives a view with no frames.
    pub fn from_collection<D>(obj: &AttributeCollection<D>) -> Result<Self> {
        let rows = attribute::rows(obj)?;
        let cols = attribute::cols(obj)?;
        let bits_allocated = attribute::bits_allocated(obj)?;
        let bits_stored = attribute::bits_stored(obj)?;
        let high_bit = attribute::high_bit(obj)?;
        let pixel_representation = attribute::pixel_representation(obj)?;
        let samples_per_pixel = attribute::samples_per_pixel(obj)?;
        let planar_configuration = attribute::planar_configuration(obj)?;
        let number_of_frames = attribute::number_of_frames(obj)?;
        let photometric_interpretation = attribute::photometric_interpretation(obj);

        ensure!(
            is_valid_geometry(bits_allocated, bits_stored, high_bit),
            InvalidBitGeometrySnafu {
                bits_allocated,
                bits_stored,
                high_bit,
            }
        );

        let mut pixels = UncompressedPixelData {
            rows,
            cols,
            bits_allocated,
            bits_stored,
            high_bit,
            pixel_representation,
            samples_per_pixel,
            planar_configuration,
            photometric_interpretation,
            frames: Vec::new(),
        };

        let data = match obj.get(tags::PIXEL_DATA).map(|attr| attr.value()) {
            None => return Ok(pixels),
            Some(AttributeValue::Fragments(_)) => return EncapsulatedSnafu.fail(),
            Some(AttributeValue::Binary(values)) => {
                values.create_byte_buffer(Endianness::Little)
            }
            Some(_) => {
                return InvalidValueSnafu {
                    name: "PixelData",
                    value: "non-binary value",
                }
                .fail()
            }
        };

        let packed = pixels.packed_frame_size();
        let expected = packed * number_of_frames as usize;
        ensure!(
            data.len() >= expected,
            PixelDataLengthSnafu {
                len: data.len(),
                frames: number_of_frames,
                expected,
            }
        );
        let frame_size = pixels.uncompressed_frame_size();
        if packed > 0 {
            pixels.frames = data[..expected]
                .chunks_exact(packed)
                .map(|chunk| {
                    let mut frame = chunk.to_vec();
                    frame.resize(frame_size, 0);
                    frame
                })
                .collect();
        }
        debug!(
            "Read {} frames of {} bytes from pixel data",
            pixels.frames.len(),
            frame_size
        );
        Ok(pixels)
    }

    /// The number of bytes of one frame as it is packed in _Pixel Data_.
    ///
    /// `YBR_FULL_422` images store two samples per pixel.
    pub fn packed_frame_size(&self) -> usize {
        let samples = match self.photometric_interpretation.as_deref() {
            Some("YBR_FULL_422") => 2,
            _ => usize::from(self.samples_per_pixel),
        };
        let bits = usize::from(self.rows)
            * usize::from(self.cols)
            * samples
            * usize::from(self.bits_allocated);
        (bits + 7) / 8
    }

    /// The number of bytes of each frame of this view,
    /// which is the packed frame size rounded up to an even number.
    pub fn uncompressed_frame_size(&self) -> usize {
        let size = self.packed_frame_size();
        size + (size & 1)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.cols
    }

    pub fn bits_allocated(&self) -> u16 {
        self.bits_allocated
    }

    pub fn bits_stored(&self) -> u16 {
        self.bits_stored
    }

    pub fn high_bit(&self) -> u16 {
        self.high_bit
    }

    /// The position of the least significant stored bit.
    pub fn low_bit(&self) -> u16 {
        low_bit(self.bits_stored, self.high_bit)
    }

    pub fn pixel_representation(&self) -> PixelRepresentation {
        self.pixel_representation
    }

    pub fn samples_per_pixel(&self) -> u16 {
        self.samples_per_pixel
    }

    pub fn planar_configuration(&self) -> u16 {
        self.planar_configuration
    }

    pub fn photometric_interpretation(&self) -> Option<&str> {
        self.photometric_interpretation.as_deref()
    }

    /// The number of frames in this view.
    pub fn number_of_frames(&self) -> usize {
        self.frames.len()
    }

    /// The smallest sample value of this image's geometry.
    pub fn min_pixel_value(&self) -> i64 {
        min_pixel_value(self.bits_stored, self.pixel_representation.is_signed())
    }

    /// The largest sample value of this image's geometry.
    pub fn max_pixel_value(&self) -> i64 {
        max_pixel_value(self.bits_stored, self.pixel_representation.is_signed())
    }

    /// Retrieve the bytes of a frame.
    pub fn frame(&self, index: usize) -> Result<&[u8]> {
        self.check_index(index)?;
        Ok(&self.frames[index])
    }

    /// Iterate over the frames of this view.
    pub fn frames(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.frames.iter().map(Vec::as_slice)
    }

    /// Replace the bytes of a frame.
    ///
    /// The data must have exactly the uncompressed frame size.
    pub fn set_frame(&mut self, index: usize, data: &[u8]) -> Result<()> {
        self.check_index(index)?;
        self.check_length(data)?;
        self.frames[index].copy_from_slice(data);
        trace!("Replaced frame {}", index);
        Ok(())
    }

    /// Add a frame after the last one.
    pub fn append_frame(&mut self, data: &[u8]) -> Result<()> {
        self.check_length(data)?;
        self.frames.push(data.to_vec());
        trace!("Appended frame {}", self.frames.len() - 1);
        Ok(())
    }

    /// Add a frame at the given position,
    /// moving the following frames one position up.
    pub fn insert_frame(&mut self, index: usize, data: &[u8]) -> Result<()> {
        let count = self.frames.len();
        ensure!(index <= count, FrameIndexSnafu { index, count });
        self.check_length(data)?;
        self.frames.insert(index, data.to_vec());
        trace!("Inserted frame {}", index);
        Ok(())
    }

    /// Remove a frame, returning its bytes.
    pub fn remove_frame(&mut self, index: usize) -> Result<Vec<u8>> {
        self.check_index(index)?;
        trace!("Removed frame {}", index);
        Ok(self.frames.remove(index))
    }

    /// Clear the bits outside of the stored field in every frame.
    ///
    /// Returns whether any bit was changed.
    pub fn zero_unused_bits(&mut self) -> bool {
        let (ba, bs, hb) = (self.bits_allocated, self.bits_stored, self.high_bit);
        for_each_frame(&mut self.frames, |frame| {
            zero_unused_bits(frame, ba, bs, hb, Endianness::Little)
        })
    }

    /// Shift the stored field of every sample down to bit 0.
    ///
    /// The high bit of the view becomes `bits_stored - 1`.
    /// Returns whether any sample was changed.
    pub fn right_align(&mut self) -> bool {
        let (ba, bs, hb) = (self.bits_allocated, self.bits_stored, self.high_bit);
        let changed = for_each_frame(&mut self.frames, |frame| {
            right_align(frame, ba, bs, hb, Endianness::Little)
        });
        self.realign();
        changed
    }

    /// Sign-fill or zero-fill the unused bits of every sample,
    /// right aligning the stored field.
    pub fn normalize(&mut self) {
        let (ba, bs, hb) = (self.bits_allocated, self.bits_stored, self.high_bit);
        let signed = self.pixel_representation.is_signed();
        for_each_frame(&mut self.frames, |frame| {
            normalize_pixel_data(frame, ba, bs, hb, signed, Endianness::Little);
            false
        });
        self.realign();
    }

    /// Switch between signed and unsigned samples
    /// by adding `2^(bits_stored - 1)` to every sample.
    ///
    /// Samples end up right aligned.
    /// Returns the rescale constant which was added,
    /// or 0 if the samples do not fill 8, 16 or 32 bit units.
    pub fn toggle_pixel_representation(&mut self) -> i64 {
        let (ba, bs, hb) = (self.bits_allocated, self.bits_stored, self.high_bit);
        if !is_valid_geometry(ba, bs, hb) {
            return 0;
        }
        for_each_frame(&mut self.frames, |frame| {
            toggle_pixel_representation(frame, hb, bs, ba);
            false
        });
        self.realign();
        self.pixel_representation = match self.pixel_representation {
            PixelRepresentation::Signed => PixelRepresentation::Unsigned,
            PixelRepresentation::Unsigned => PixelRepresentation::Signed,
        };
        -min_pixel_value(bs, true)
    }

    /// Switch every frame between interleaved and planar samples.
    pub fn toggle_planar_configuration(&mut self) {
        let (ba, spp, pc) = (
            self.bits_allocated,
            self.samples_per_pixel,
            self.planar_configuration,
        );
        for_each_frame(&mut self.frames, |frame| {
            let toggled = transform::toggle_planar_configuration(frame, ba, spp, pc);
            frame.copy_from_slice(&toggled);
            false
        });
        self.planar_configuration = 1 - pc;
    }

    /// Write the frames back to the collection.
    ///
    /// _Pixel Data_ is replaced with the frames packed one after the other,
    /// padded to an even length,
    /// as `OW` for samples wider than 8 bits and `OB` otherwise.
    /// _Number of Frames_ is written if it was present or there is more than one frame,
    /// _Planar Configuration_ if it was present.
    /// The high bit and pixel representation are written as well.
    pub fn update_attribute_collection<D>(&self, obj: &mut AttributeCollection<D>) -> Result<()>
    where
        D: DataDictionary,
    {
        let packed = self.packed_frame_size();
        let mut data = Vec::with_capacity(packed * self.frames.len() + 1);
        for frame in &self.frames {
            data.extend_from_slice(&frame[..packed]);
        }
        if data.len() % 2 == 1 {
            data.push(0);
        }
        let len = data.len();

        let (vr, values) = if self.bits_allocated > 8 {
            (VR::OW, BinaryValues::U16(BinaryBuffer::from_le_bytes(data)))
        } else {
            (VR::OB, BinaryValues::U8(BinaryBuffer::from(data)))
        };
        let mut pixel_data = Attribute::new(tags::PIXEL_DATA, vr);
        pixel_data
            .set_binary(values)
            .context(AttributeValueSnafu { name: "PixelData" })?;
        obj.put(pixel_data)
            .context(UpdateAttributeSnafu { name: "PixelData" })?;

        let frames = self.frames.len();
        if obj.contains(tags::NUMBER_OF_FRAMES) || frames > 1 {
            set_attribute(obj, tags::NUMBER_OF_FRAMES, "NumberOfFrames", |attr| {
                attr.set_string_value(&frames.to_string())
            })?;
        }
        if obj.contains(tags::PLANAR_CONFIGURATION) {
            let pc = self.planar_configuration;
            set_attribute(obj, tags::PLANAR_CONFIGURATION, "PlanarConfiguration", |attr| {
                attr.set_u16(0, pc)
            })?;
        }
        let hb = self.high_bit;
        set_attribute(obj, tags::HIGH_BIT, "HighBit", |attr| attr.set_u16(0, hb))?;
        let pr = self.pixel_representation.value();
        set_attribute(obj, tags::PIXEL_REPRESENTATION, "PixelRepresentation", |attr| {
            attr.set_u16(0, pr)
        })?;

        debug!("Wrote {} frames ({} bytes) to pixel data", frames, len);
        Ok(())
    }

    /// Record that samples were shifted down to bit 0.
    fn realign(&mut self) {
        if is_valid_geometry(self.bits_allocated, self.bits_stored, self.high_bit) {
            self.high_bit = self.bits_stored - 1;
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let count = self.frames.len();
        ensure!(index < count, FrameIndexSnafu { index, count });
        Ok(())
    }

    fn check_length(&self, data: &[u8]) -> Result<()> {
        let expected = self.uncompressed_frame_size();
        ensure!(
            data.len() == expected,
            FrameLengthSnafu {
                len: data.len(),
                expected,
            }
        );
        Ok(())
    }
}

fn set_attribute<D, F>(
    obj: &mut AttributeCollection<D>,
    tag: Tag,
    name: &'static str,
    f: F,
) -> Result<()>
where
    D: DataDictionary,
    F: FnOnce(&mut dicom_object::CollectionAttribute<D>) -> dicom_core::Result<()>,
{
    let attr = obj
        .get_or_insert(tag)
        .context(UpdateAttributeSnafu { name })?;
    f(attr).context(AttributeValueSnafu { name })
}

/// Apply a function to every frame,
/// returning whether it returned `true` for any of them.
#[cfg(feature = "rayon")]
fn for_each_frame<F>(frames: &mut [Vec<u8>], f: F) -> bool
where
    F: Fn(&mut [u8]) -> bool + Send + Sync,
{
    frames
        .par_iter_mut()
        .map(|frame| f(frame.as_mut_slice()))
        .reduce(|| false, |a, b| a || b)
}

/// Apply a function to every frame,
/// returning whether it returned `true` for any of them.
#[cfg(not(feature = "rayon"))]
fn for_each_frame<F>(frames: &mut [Vec<u8>], f: F) -> bool
where
    F: Fn(&mut [u8]) -> bool,
{
    frames
        .iter_mut()
        .map(|frame| f(frame.as_mut_slice()))
        .fold(false, |a, b| a || b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::value::BinaryBuffer;
    use rstest::rstest;

    fn image(rows: u16, cols: u16, ba: u16, bs: u16, hb: u16) -> AttributeCollection {
        let mut obj = AttributeCollection::new();
        for (tag, value) in [
            (tags::ROWS, rows),
            (tags::COLUMNS, cols),
            (tags::BITS_ALLOCATED, ba),
            (tags::BITS_STORED, bs),
            (tags::HIGH_BIT, hb),
            (tags::PIXEL_REPRESENTATION, 0),
            (tags::SAMPLES_PER_PIXEL, 1),
        ] {
            obj.get_or_insert(tag).unwrap().set_u16(0, value).unwrap();
        }
        obj
    }

    #[test]
    fn missing_geometry() {
        let mut obj = image(2, 2, 16, 12, 11);
        obj.remove(tags::BITS_STORED);
        assert!(matches!(
            UncompressedPixelData::from_collection(&obj),
            Err(Error::MissingAttribute {
                name: "BitsStored",
                ..
            })
        ));
    }

    #[rstest]
    #[case(16, 12, 10)]
    #[case(12, 10, 10)]
    #[case(1, 1, 0)]
    #[case(24, 12, 11)]
    #[case(8, 0, 7)]
    fn invalid_geometry(#[case] ba: u16, #[case] bs: u16, #[case] hb: u16) {
        let obj = image(2, 2, ba, bs, hb);
        assert!(matches!(
            UncompressedPixelData::from_collection(&obj),
            Err(Error::InvalidBitGeometry { .. })
        ));
    }

    #[test]
    fn frame_sizes() {
        let pixels = UncompressedPixelData::from_collection(&image(3, 3, 8, 8, 7)).unwrap();
        assert_eq!(pixels.packed_frame_size(), 9);
        assert_eq!(pixels.uncompressed_frame_size(), 10);
        assert_eq!(pixels.number_of_frames(), 0);

        let pixels = UncompressedPixelData::from_collection(&image(4, 5, 16, 12, 11)).unwrap();
        assert_eq!(pixels.uncompressed_frame_size(), 40);

        let mut obj = image(2, 2, 8, 8, 7);
        obj.get_or_insert(tags::SAMPLES_PER_PIXEL)
            .unwrap()
            .set_u16(0, 3)
            .unwrap();
        let pi = Attribute::with_str(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "YBR_FULL_422");
        obj.put(pi.unwrap()).unwrap();
        let pixels = UncompressedPixelData::from_collection(&obj).unwrap();
        assert_eq!(pixels.uncompressed_frame_size(), 8);
    }

    #[test]
    fn reads_frames_from_pixel_data() {
        let mut obj = image(2, 2, 16, 16, 15);
        obj.put(Attribute::with_str(tags::NUMBER_OF_FRAMES, VR::IS, "2").unwrap())
            .unwrap();
        let values: Vec<u16> = (1..=8).collect();
        obj.get_or_insert_with_vr(tags::PIXEL_DATA, VR::OW)
            .unwrap()
            .set_binary(BinaryValues::U16(BinaryBuffer::from(values)))
            .unwrap();

        let pixels = UncompressedPixelData::from_collection(&obj).unwrap();
        assert_eq!(pixels.number_of_frames(), 2);
        assert_eq!(pixels.frame(0).unwrap(), &[1, 0, 2, 0, 3, 0, 4, 0]);
        assert_eq!(pixels.frame(1).unwrap(), &[5, 0, 6, 0, 7, 0, 8, 0]);
        assert!(matches!(
            pixels.frame(2),
            Err(Error::FrameIndex {
                index: 2,
                count: 2,
                ..
            })
        ));
    }

    #[test]
    fn short_pixel_data() {
        let mut obj = image(2, 2, 8, 8, 7);
        obj.get_or_insert_with_vr(tags::PIXEL_DATA, VR::OB)
            .unwrap()
            .set_binary(BinaryValues::U8(BinaryBuffer::from(vec![0u8; 3])))
            .unwrap();
        assert!(matches!(
            UncompressedPixelData::from_collection(&obj),
            Err(Error::PixelDataLength { len: 3, .. })
        ));
    }

    #[test]
    fn frame_editing() {
        let obj = image(1, 2, 8, 8, 7);
        let mut pixels = UncompressedPixelData::from_collection(&obj).unwrap();
        pixels.append_frame(&[1, 2]).unwrap();
        pixels.append_frame(&[5, 6]).unwrap();
        pixels.insert_frame(1, &[3, 4]).unwrap();
        assert_eq!(pixels.number_of_frames(), 3);
        pixels.set_frame(2, &[7, 8]).unwrap();
        assert_eq!(pixels.remove_frame(0).unwrap(), vec![1, 2]);
        assert_eq!(
            pixels.frames().collect::<Vec<_>>(),
            vec![&[3u8, 4][..], &[7, 8][..]]
        );

        assert!(matches!(
            pixels.set_frame(0, &[1, 2, 3]),
            Err(Error::FrameLength {
                len: 3,
                expected: 2,
                ..
            })
        ));
        assert!(matches!(
            pixels.set_frame(2, &[1, 2]),
            Err(Error::FrameIndex { .. })
        ));
        assert!(matches!(
            pixels.insert_frame(3, &[1, 2]),
            Err(Error::FrameIndex { .. })
        ));
        assert!(pixels.insert_frame(2, &[9, 9]).is_ok());
    }

    #[test]
    fn toggles_update_geometry() {
        let mut obj = image(1, 2, 8, 8, 7);
        obj.get_or_insert(tags::PIXEL_REPRESENTATION)
            .unwrap()
            .set_u16(0, 1)
            .unwrap();
        let mut pixels = UncompressedPixelData::from_collection(&obj).unwrap();
        pixels.append_frame(&[0x80, 0x7F]).unwrap();
        assert_eq!(pixels.min_pixel_value(), -128);
        assert_eq!(pixels.toggle_pixel_representation(), 128);
        assert_eq!(pixels.frame(0).unwrap(), &[0, 255]);
        assert_eq!(pixels.pixel_representation(), PixelRepresentation::Unsigned);
        assert_eq!(pixels.max_pixel_value(), 255);
    }
}
