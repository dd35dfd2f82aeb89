//! Bit-level normalization of uncompressed pixel samples.
//!
//! Pixel samples are laid out in allocated units of
//! _Bits Allocated_ bits (8, 16 or 32),
//! of which only the _Bits Stored_ bits ending at _High Bit_ are meaningful.
//! The functions in this module operate in place on raw sample bytes.
//! Multi-byte units are read and written in the given byte order,
//! so that pixel data does not need to be converted to the host order first.
//!
//! These functions do not fail.
//! A geometry which does not describe a valid allocated unit
//! (see [`is_valid_geometry`]) leaves the buffer untouched.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use dicom_core::transfer_syntax::Endianness;

/// Check whether the given bit geometry describes
/// a stored field within an 8, 16 or 32 bit allocated unit.
pub fn is_valid_geometry(bits_allocated: u16, bits_stored: u16, high_bit: u16) -> bool {
    Layout::new(bits_allocated, bits_stored, high_bit).is_some()
}

/// The position of the least significant stored bit.
///
/// Equal to `high_bit - bits_stored + 1`.
pub fn low_bit(bits_stored: u16, high_bit: u16) -> u16 {
    high_bit.saturating_add(1).saturating_sub(bits_stored)
}

/// The smallest value a sample of `bits_stored` bits can hold.
///
/// Widths beyond 32 bits are taken as 32 bits.
pub fn min_pixel_value(bits_stored: u16, signed: bool) -> i64 {
    let bits_stored = bits_stored.min(32);
    if signed && bits_stored > 0 {
        -(1i64 << (bits_stored - 1))
    } else {
        0
    }
}

/// The largest value a sample of `bits_stored` bits can hold.
///
/// Widths beyond 32 bits are taken as 32 bits.
pub fn max_pixel_value(bits_stored: u16, signed: bool) -> i64 {
    match bits_stored.min(32) {
        0 => 0,
        bits if signed => (1i64 << (bits - 1)) - 1,
        bits => (1i64 << bits) - 1,
    }
}

/// Clear every bit outside of `[low_bit, high_bit]` in each allocated unit.
///
/// Returns whether any bit was actually changed.
pub fn zero_unused_bits(
    buffer: &mut [u8],
    bits_allocated: u16,
    bits_stored: u16,
    high_bit: u16,
    endianness: Endianness,
) -> bool {
    let layout = match Layout::new(bits_allocated, bits_stored, high_bit) {
        Some(layout) => layout,
        None => return false,
    };
    let mask = layout.stored_mask();
    if mask == layout.unit_mask() {
        return false;
    }
    let mut changed = false;
    for unit in buffer.chunks_exact_mut(layout.unit_bytes) {
        let value = layout.read(unit, endianness);
        let masked = value & mask;
        if masked != value {
            layout.write(unit, masked, endianness);
            changed = true;
        }
    }
    changed
}

/// Shift the stored field of each allocated unit down to bit 0,
/// discarding the bits above the high bit.
///
/// Unused bits are expected to be cleared beforehand
/// (see [`zero_unused_bits`]).
/// Returns whether any unit was changed.
pub fn right_align(
    buffer: &mut [u8],
    bits_allocated: u16,
    bits_stored: u16,
    high_bit: u16,
    endianness: Endianness,
) -> bool {
    let layout = match Layout::new(bits_allocated, bits_stored, high_bit) {
        Some(layout) => layout,
        None => return false,
    };
    if layout.low_bit == 0 {
        return false;
    }
    let mut changed = false;
    for unit in buffer.chunks_exact_mut(layout.unit_bytes) {
        let value = layout.read(unit, endianness);
        // plenty of pixel data is zero
        if value == 0 {
            continue;
        }
        layout.write(unit, value >> layout.low_bit, endianness);
        changed = true;
    }
    changed
}

/// Reinterpret signed stored samples as unsigned ones,
/// by adding `2^(bits_stored - 1)` to every sample.
///
/// Samples are read as little endian units.
/// The resulting values are right aligned.
/// Returns the rescale constant which was added,
/// so that the rescale intercept of the image can be corrected,
/// or 0 if the geometry is not valid.
///
/// Toggling twice with the stored field starting at bit 0
/// restores the original samples.
pub fn toggle_pixel_representation(
    buffer: &mut [u8],
    high_bit: u16,
    bits_stored: u16,
    bits_allocated: u16,
) -> i64 {
    let layout = match Layout::new(bits_allocated, bits_stored, high_bit) {
        Some(layout) => layout,
        None => return 0,
    };
    let rescale = -min_pixel_value(bits_stored, true);
    let field_mask = (1u64 << bits_stored) - 1;
    let sign_bit = 1u64 << (bits_stored - 1);
    for unit in buffer.chunks_exact_mut(layout.unit_bytes) {
        let raw = u64::from(layout.read(unit, Endianness::Little));
        let field = (raw >> layout.low_bit) & field_mask;
        let signed = if field & sign_bit != 0 {
            field as i64 - (1i64 << bits_stored)
        } else {
            field as i64
        };
        let value = (signed + rescale) as u64 & field_mask;
        layout.write(unit, value as u32, Endianness::Little);
    }
    rescale
}

/// Sign-fill (for signed samples) or zero-fill the unused bits
/// of each allocated unit, while right aligning the stored field.
///
/// Unlike [`right_align`],
/// signed samples keep their value when read
/// as signed integers of the allocated width.
pub fn normalize_pixel_data(
    buffer: &mut [u8],
    bits_allocated: u16,
    bits_stored: u16,
    high_bit: u16,
    signed: bool,
    endianness: Endianness,
) {
    let layout = match Layout::new(bits_allocated, bits_stored, high_bit) {
        Some(layout) => layout,
        None => return,
    };
    let unused_high = u32::from(bits_allocated - 1 - high_bit);
    let left_shift = unused_high;
    let right_shift = unused_high + layout.low_bit;
    if right_shift == 0 {
        return;
    }
    let width = u32::from(bits_allocated);
    let unit_mask = u64::from(layout.unit_mask());
    for unit in buffer.chunks_exact_mut(layout.unit_bytes) {
        let shifted = (u64::from(layout.read(unit, endianness)) << left_shift) & unit_mask;
        let value = if signed && shifted >> (width - 1) != 0 {
            ((shifted as i64 - (1i64 << width)) >> right_shift) as u64 & unit_mask
        } else {
            shifted >> right_shift
        };
        layout.write(unit, value as u32, endianness);
    }
}

/// A validated allocated unit geometry.
#[derive(Debug, Copy, Clone)]
struct Layout {
    unit_bytes: usize,
    bits_stored: u32,
    low_bit: u32,
}

impl Layout {
    fn new(bits_allocated: u16, bits_stored: u16, high_bit: u16) -> Option<Self> {
        let unit_bytes = match bits_allocated {
            8 => 1,
            16 => 2,
            32 => 4,
            _ => return None,
        };
        if bits_stored == 0 || bits_stored > bits_allocated || high_bit >= bits_allocated {
            return None;
        }
        if high_bit + 1 < bits_stored {
            return None;
        }
        Some(Layout {
            unit_bytes,
            bits_stored: u32::from(bits_stored),
            low_bit: u32::from(low_bit(bits_stored, high_bit)),
        })
    }

    fn unit_mask(&self) -> u32 {
        (u64::MAX >> (64 - 8 * self.unit_bytes)) as u32
    }

    fn stored_mask(&self) -> u32 {
        (((1u64 << self.bits_stored) - 1) << self.low_bit) as u32
    }

    fn read(&self, unit: &[u8], endianness: Endianness) -> u32 {
        match (self.unit_bytes, endianness) {
            (1, _) => u32::from(unit[0]),
            (2, Endianness::Little) => u32::from(LittleEndian::read_u16(unit)),
            (2, Endianness::Big) => u32::from(BigEndian::read_u16(unit)),
            (_, Endianness::Little) => LittleEndian::read_u32(unit),
            (_, Endianness::Big) => BigEndian::read_u32(unit),
        }
    }

    fn write(&self, unit: &mut [u8], value: u32, endianness: Endianness) {
        match (self.unit_bytes, endianness) {
            (1, _) => unit[0] = value as u8,
            (2, Endianness::Little) => LittleEndian::write_u16(unit, value as u16),
            (2, Endianness::Big) => BigEndian::write_u16(unit, value as u16),
            (_, Endianness::Little) => LittleEndian::write_u32(unit, value),
            (_, Endianness::Big) => BigEndian::write_u32(unit, value),
        }
    }
}
