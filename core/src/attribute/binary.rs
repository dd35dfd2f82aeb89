//! Typed storage of binary attribute values.

use std::borrow::Cow;

use num_traits::{NumCast, ToPrimitive};

use crate::error::{DataSnafu, FormatSnafu, Result};
use crate::header::{Tag, VR};
use crate::transfer_syntax::Endianness;
use crate::value::{BinaryBuffer, BinaryValue};

/// The values of an attribute with a binary value representation,
/// kept in a buffer of the VR's native number type.
#[derive(Debug, Clone, PartialEq)]
pub enum BinaryValues {
    /// `OB` and `UN`.
    U8(BinaryBuffer<u8>),
    /// `SS`.
    I16(BinaryBuffer<i16>),
    /// `US` and `OW`.
    U16(BinaryBuffer<u16>),
    /// `SL`.
    I32(BinaryBuffer<i32>),
    /// `UL`, `OL` and `AT`.
    U32(BinaryBuffer<u32>),
    /// `SV`.
    I64(BinaryBuffer<i64>),
    /// `UV` and `OV`.
    U64(BinaryBuffer<u64>),
    /// `FL` and `OF`.
    F32(BinaryBuffer<f32>),
    /// `FD` and `OD`.
    F64(BinaryBuffer<f64>),
}

macro_rules! dispatch {
    ($values: expr, |$buf: ident| $e: expr) => {
        match $values {
            BinaryValues::U8($buf) => $e,
            BinaryValues::I16($buf) => $e,
            BinaryValues::U16($buf) => $e,
            BinaryValues::I32($buf) => $e,
            BinaryValues::U32($buf) => $e,
            BinaryValues::I64($buf) => $e,
            BinaryValues::U64($buf) => $e,
            BinaryValues::F32($buf) => $e,
            BinaryValues::F64($buf) => $e,
        }
    };
}

macro_rules! map_buffer {
    ($values: expr, |$buf: ident| $e: expr) => {
        match $values {
            BinaryValues::U8($buf) => BinaryValues::U8($e),
            BinaryValues::I16($buf) => BinaryValues::I16($e),
            BinaryValues::U16($buf) => BinaryValues::U16($e),
            BinaryValues::I32($buf) => BinaryValues::I32($e),
            BinaryValues::U32($buf) => BinaryValues::U32($e),
            BinaryValues::I64($buf) => BinaryValues::I64($e),
            BinaryValues::U64($buf) => BinaryValues::U64($e),
            BinaryValues::F32($buf) => BinaryValues::F32($e),
            BinaryValues::F64($buf) => BinaryValues::F64($e),
        }
    };
}

impl BinaryValues {
    /// Create an empty value container for the given VR,
    /// or `None` if the VR is not binary.
    pub fn empty_for(vr: VR) -> Option<Self> {
        use VR::*;
        Some(match vr {
            OB | UN => BinaryValues::U8(BinaryBuffer::new()),
            SS => BinaryValues::I16(BinaryBuffer::new()),
            US | OW => BinaryValues::U16(BinaryBuffer::new()),
            SL => BinaryValues::I32(BinaryBuffer::new()),
            UL | OL | AT => BinaryValues::U32(BinaryBuffer::new()),
            SV => BinaryValues::I64(BinaryBuffer::new()),
            UV | OV => BinaryValues::U64(BinaryBuffer::new()),
            FL | OF => BinaryValues::F32(BinaryBuffer::new()),
            FD | OD => BinaryValues::F64(BinaryBuffer::new()),
            _ => return None,
        })
    }

    /// Whether both containers hold the same number type.
    pub fn same_kind(&self, other: &BinaryValues) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        dispatch!(self, |buf| buf.len())
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of bytes taken by all values.
    pub fn byte_len(&self) -> usize {
        dispatch!(self, |buf| buf.byte_len())
    }

    /// Whether the values were moved to a shared byte buffer.
    pub fn is_buffered(&self) -> bool {
        dispatch!(self, |buf| buf.is_buffered())
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        dispatch!(self, |buf| buf.clear())
    }

    /// Copy the values into storage not shared with any other container.
    pub fn deep_clone(&self) -> Self {
        map_buffer!(self, |buf| buf.deep_clone())
    }

    /// Encode all values with the given byte order.
    pub fn create_byte_buffer(&self, endianness: Endianness) -> Vec<u8> {
        dispatch!(self, |buf| buf.create_byte_buffer(endianness))
    }

    /// Encode all values with the given byte order,
    /// padded with a zero byte to an even length.
    pub fn create_even_length_byte_buffer(&self, endianness: Endianness) -> Vec<u8> {
        dispatch!(self, |buf| buf.create_even_length_byte_buffer(endianness))
    }

    /// Retrieve the value at `index` converted to the requested type,
    /// or `None` if it is out of bounds or would not be read back exactly.
    pub fn try_get_as<N: BinaryValue>(&self, index: usize) -> Option<N> {
        dispatch!(self, |buf| buf.try_get(index).and_then(convert::<N, _>))
    }

    /// Set the value at `index` from a number of any type.
    ///
    /// Returns `Ok(false)` and leaves the values untouched
    /// if the number cannot be represented by the stored type.
    pub(crate) fn set_converted<N>(&mut self, index: usize, value: N) -> Result<bool>
    where
        N: ToPrimitive + Copy,
    {
        dispatch!(self, |buf| match convert(value) {
            Some(v) => buf.set(index, v).map(|_| true),
            None => Ok(false),
        })
    }

    /// Parse and set a single value at `index`.
    pub(crate) fn set_parsed(&mut self, tag: Tag, vr: VR, index: usize, text: &str) -> Result<()> {
        dispatch!(self, |buf| {
            let value = parse_one(tag, vr, text)?;
            buf.set(index, value)
        })
    }

    /// Parse a backslash separated list of values
    /// into a new container of the same kind.
    pub(crate) fn parse_all(&self, tag: Tag, vr: VR, text: &str) -> Result<Self> {
        Ok(map_buffer!(self, |_buf| {
            text.split('\\')
                .map(|part| parse_one(tag, vr, part))
                .collect::<Result<_>>()?
        }))
    }

    /// Render the value at `index` as text.
    pub(crate) fn format(&self, vr: VR, index: usize) -> Option<Cow<'static, str>> {
        dispatch!(self, |buf| buf.try_get(index).map(|v| format_one(vr, v)))
    }

    /// Compare values numerically,
    /// regardless of how each container stores them.
    pub fn compare_values(&self, other: &BinaryValues) -> bool {
        self == other
    }
}

/// Convert a number to another numeric type,
/// failing if the value would change.
///
/// Integers reject fractional and non-finite inputs.
/// Floating point targets reject finite values beyond their range.
pub(crate) fn convert<T, N>(value: N) -> Option<T>
where
    T: BinaryValue,
    N: ToPrimitive + Copy,
{
    let as_float = value.to_f64()?;
    if T::IS_FLOAT {
        let out = <T as NumCast>::from(value)?;
        if as_float.is_finite() && !out.to_f64()?.is_finite() {
            return None;
        }
        Some(out)
    } else {
        if as_float.fract() != 0.0 {
            return None;
        }
        <T as NumCast>::from(value)
    }
}

fn parse_one<T: BinaryValue>(tag: Tag, vr: VR, text: &str) -> Result<T> {
    let text = text.trim_matches(|c: char| c == ' ' || c == '\0');
    if text.is_empty() {
        return DataSnafu {
            tag,
            vr,
            message: "empty values are not allowed",
        }
        .fail();
    }

    if vr == VR::AT {
        let tag_value = u32::from_str_radix(text, 16)
            .ok()
            .filter(|_| text.len() <= 8);
        return match tag_value {
            Some(v) => <T as NumCast>::from(v).ok_or_else(|| {
                DataSnafu {
                    tag,
                    vr,
                    message: format!("{} is not representable", text),
                }
                .build()
            }),
            None => FormatSnafu {
                vr,
                value: text,
                reason: "expected a tag in hexadecimal form",
            }
            .fail(),
        };
    }

    if let Ok(v) = text.parse::<T>() {
        return Ok(v);
    }
    match text.parse::<f64>() {
        Ok(_) => DataSnafu {
            tag,
            vr,
            message: format!("{} is out of range", text),
        }
        .fail(),
        Err(_) => FormatSnafu {
            vr,
            value: text,
            reason: "not a number",
        }
        .fail(),
    }
}

fn format_one<T: BinaryValue>(vr: VR, value: T) -> Cow<'static, str> {
    match (vr, value.to_u32()) {
        (VR::AT, Some(tag)) => Cow::Owned(format!("{:08X}", tag)),
        _ => Cow::Owned(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const TAG: Tag = Tag(0x0028, 0x0010);

    #[test]
    fn buffer_kind_per_vr() {
        assert!(matches!(BinaryValues::empty_for(VR::OW), Some(BinaryValues::U16(_))));
        assert!(matches!(BinaryValues::empty_for(VR::AT), Some(BinaryValues::U32(_))));
        assert!(matches!(BinaryValues::empty_for(VR::OD), Some(BinaryValues::F64(_))));
        assert!(BinaryValues::empty_for(VR::LO).is_none());
        assert!(BinaryValues::empty_for(VR::SQ).is_none());
    }

    #[test]
    fn conversions() {
        assert_eq!(convert::<u16, i32>(512), Some(512));
        assert_eq!(convert::<u16, i32>(-1), None);
        assert_eq!(convert::<u16, i32>(70_000), None);
        assert_eq!(convert::<i32, f64>(3.0), Some(3));
        assert_eq!(convert::<i32, f64>(3.5), None);
        assert_eq!(convert::<i32, f64>(f64::NAN), None);
        assert_eq!(convert::<f32, f64>(0.5), Some(0.5));
        assert_eq!(convert::<f32, f64>(1e300), None);
        assert_eq!(convert::<f64, u64>(u64::MAX), Some(u64::MAX as f64));
    }

    #[test]
    fn parse_and_format() {
        let values = BinaryValues::empty_for(VR::US).unwrap();
        let values = values.parse_all(TAG, VR::US, "512\\ 1024 ").unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.try_get_as::<u16>(1), Some(1024));
        assert_eq!(values.format(VR::US, 0).as_deref(), Some("512"));

        let err = values.parse_all(TAG, VR::US, "1\\-1").unwrap_err();
        assert!(matches!(err, Error::Data { .. }));
        let err = values.parse_all(TAG, VR::US, "1\\x").unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
        let err = values.parse_all(TAG, VR::US, "1\\").unwrap_err();
        assert!(matches!(err, Error::Data { .. }));
    }

    #[test]
    fn tags_in_hexadecimal() {
        let values = BinaryValues::empty_for(VR::AT).unwrap();
        let values = values.parse_all(TAG, VR::AT, "7fe00010").unwrap();
        assert_eq!(values.try_get_as::<u32>(0), Some(0x7FE0_0010));
        assert_eq!(values.format(VR::AT, 0).as_deref(), Some("7FE00010"));
        assert!(values.parse_all(TAG, VR::AT, "7fe000100").is_err());
        assert!(values.parse_all(TAG, VR::AT, "(7fe0,0010)").is_err());
    }

    #[test]
    fn set_with_conversion() {
        let mut values = BinaryValues::empty_for(VR::SS).unwrap();
        assert!(values.set_converted(0, -5_i64).unwrap());
        assert!(!values.set_converted(1, 40_000_u32).unwrap());
        assert_eq!(values.len(), 1);
        assert!(matches!(
            values.set_converted(3, 1_u8),
            Err(Error::Index { .. })
        ));
        assert_eq!(values.try_get_as::<i32>(0), Some(-5));
        assert_eq!(values.try_get_as::<u16>(0), None);
    }

    #[test]
    fn reads_do_not_truncate() {
        let values = BinaryValues::empty_for(VR::FD).unwrap();
        let values = values.parse_all(TAG, VR::FD, "1.5\\1e300\\-2").unwrap();
        assert_eq!(values.try_get_as::<f64>(0), Some(1.5));
        assert_eq!(values.try_get_as::<i32>(0), None);
        assert_eq!(values.try_get_as::<i16>(0), None);
        assert_eq!(values.try_get_as::<f32>(1), None);
        assert_eq!(values.try_get_as::<f64>(1), Some(1e300));
        assert_eq!(values.try_get_as::<i16>(2), Some(-2));
        assert_eq!(values.try_get_as::<u32>(2), None);
    }
}
