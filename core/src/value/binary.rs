//! Storage for fixed width binary values.
//!
//! A [`BinaryBuffer`] begins as a plain vector of values.
//! Once its byte size exceeds [`PROMOTION_THRESHOLD`],
//! it is converted to a shared little endian byte buffer
//! which is accessed by stride.
//! The conversion is one-way,
//! and it is never observable through the public API,
//! save for [`BinaryBuffer::is_buffered`].
//!
//! Clones of a promoted buffer share the same bytes
//! until one of them is modified.

use std::fmt;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::str::FromStr;
use std::sync::Arc;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use num_traits::NumCast;

use snafu::ensure;

use crate::error::{IndexSnafu, Result};
use crate::transfer_syntax::Endianness;

/// The byte size above which values are moved to a shared byte buffer.
pub const PROMOTION_THRESHOLD: usize = 16 * 1024;

/// A primitive number which can be kept in a [`BinaryBuffer`].
pub trait BinaryValue:
    Copy + PartialEq + Default + fmt::Debug + fmt::Display + FromStr + NumCast + Send + Sync + 'static
{
    /// The size of one value in bytes.
    const SIZE: usize;

    /// Whether this is a floating point type.
    const IS_FLOAT: bool;

    /// Read one value from the start of `bytes`.
    fn read_bytes<B: ByteOrder>(bytes: &[u8]) -> Self;

    /// Write this value to the start of `out`.
    fn write_bytes<B: ByteOrder>(self, out: &mut [u8]);

    /// Value equality in which `NaN` matches `NaN`.
    #[inline]
    #[allow(clippy::eq_op)]
    fn same_value(self, other: Self) -> bool {
        self == other || (Self::IS_FLOAT && self != self && other != other)
    }
}

impl BinaryValue for u8 {
    const SIZE: usize = 1;
    const IS_FLOAT: bool = false;

    #[inline]
    fn read_bytes<B: ByteOrder>(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn write_bytes<B: ByteOrder>(self, out: &mut [u8]) {
        out[0] = self;
    }
}

macro_rules! impl_binary_value {
    ($t: ty, $size: expr, $float: expr, $read: ident, $write: ident) => {
        impl BinaryValue for $t {
            const SIZE: usize = $size;
            const IS_FLOAT: bool = $float;

            #[inline]
            fn read_bytes<B: ByteOrder>(bytes: &[u8]) -> Self {
                B::$read(bytes)
            }

            #[inline]
            fn write_bytes<B: ByteOrder>(self, out: &mut [u8]) {
                B::$write(out, self)
            }
        }
    };
}

impl_binary_value!(i16, 2, false, read_i16, write_i16);
impl_binary_value!(u16, 2, false, read_u16, write_u16);
impl_binary_value!(i32, 4, false, read_i32, write_i32);
impl_binary_value!(u32, 4, false, read_u32, write_u32);
impl_binary_value!(i64, 8, false, read_i64, write_i64);
impl_binary_value!(u64, 8, false, read_u64, write_u64);
impl_binary_value!(f32, 4, true, read_f32, write_f32);
impl_binary_value!(f64, 8, true, read_f64, write_f64);

#[derive(Debug, Clone)]
enum Storage<T> {
    Inline(Vec<T>),
    /// little endian bytes, always a multiple of `T::SIZE` long
    Buffered(Arc<Vec<u8>>),
}

/// A growable sequence of fixed width binary values.
#[derive(Debug, Clone)]
pub struct BinaryBuffer<T> {
    storage: Storage<T>,
}

impl<T: BinaryValue> Default for BinaryBuffer<T> {
    fn default() -> Self {
        BinaryBuffer::new()
    }
}

impl<T: BinaryValue> BinaryBuffer<T> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        BinaryBuffer {
            storage: Storage::Inline(Vec::new()),
        }
    }

    /// Create a buffer holding the given values.
    pub fn from_vec(values: Vec<T>) -> Self {
        let mut buffer = BinaryBuffer {
            storage: Storage::Inline(values),
        };
        buffer.promote_if_needed();
        buffer
    }

    /// Create a buffer from raw little endian bytes.
    ///
    /// A trailing incomplete value is completed with zeros.
    pub fn from_le_bytes(mut bytes: Vec<u8>) -> Self {
        let rem = bytes.len() % T::SIZE;
        if rem != 0 {
            bytes.resize(bytes.len() + T::SIZE - rem, 0);
        }
        let mut buffer = BinaryBuffer {
            storage: Storage::Buffered(Arc::new(bytes)),
        };
        if buffer.byte_len() <= PROMOTION_THRESHOLD {
            // small enough to be kept as plain values
            buffer.storage = Storage::Inline(buffer.to_vec());
        }
        buffer
    }

    /// The number of values in the buffer.
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Inline(values) => values.len(),
            Storage::Buffered(bytes) => bytes.len() / T::SIZE,
        }
    }

    /// Whether the buffer holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of bytes taken by the values.
    pub fn byte_len(&self) -> usize {
        self.len() * T::SIZE
    }

    /// Whether the values were moved to a shared byte buffer.
    pub fn is_buffered(&self) -> bool {
        matches!(self.storage, Storage::Buffered(_))
    }

    /// Whether this buffer and `other` share the same underlying bytes.
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Storage::Buffered(a), Storage::Buffered(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Create an independent copy of this buffer,
    /// duplicating the underlying bytes if they are shared.
    pub fn deep_clone(&self) -> Self {
        match &self.storage {
            Storage::Inline(values) => BinaryBuffer {
                storage: Storage::Inline(values.clone()),
            },
            Storage::Buffered(bytes) => BinaryBuffer {
                storage: Storage::Buffered(Arc::new(bytes.as_ref().clone())),
            },
        }
    }

    #[inline]
    fn value_at(&self, index: usize) -> T {
        match &self.storage {
            Storage::Inline(values) => values[index],
            Storage::Buffered(bytes) => T::read_bytes::<LittleEndian>(&bytes[index * T::SIZE..]),
        }
    }

    /// Retrieve the value at the given index,
    /// or `None` if it is out of bounds.
    pub fn try_get(&self, index: usize) -> Option<T> {
        if index < self.len() {
            Some(self.value_at(index))
        } else {
            None
        }
    }

    /// Retrieve the value at the given index.
    pub fn get(&self, index: usize) -> Result<T> {
        let count = self.len();
        self.try_get(index)
            .ok_or_else(|| IndexSnafu { index, count }.build())
    }

    /// Replace the value at the given index.
    ///
    /// Setting the value at index `len()` appends it.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let count = self.len();
        if index == count {
            self.append(value);
            return Ok(());
        }
        ensure!(index < count, IndexSnafu { index, count });
        match &mut self.storage {
            Storage::Inline(values) => values[index] = value,
            Storage::Buffered(bytes) => {
                let bytes = Arc::make_mut(bytes);
                value.write_bytes::<LittleEndian>(&mut bytes[index * T::SIZE..]);
            }
        }
        Ok(())
    }

    /// Add a value to the end of the buffer.
    pub fn append(&mut self, value: T) {
        match &mut self.storage {
            Storage::Inline(values) => values.push(value),
            Storage::Buffered(bytes) => {
                let bytes = Arc::make_mut(bytes);
                let start = bytes.len();
                bytes.resize(start + T::SIZE, 0);
                value.write_bytes::<LittleEndian>(&mut bytes[start..]);
            }
        }
        self.promote_if_needed();
    }

    /// Remove all values, keeping the current representation.
    pub fn clear(&mut self) {
        match &mut self.storage {
            Storage::Inline(values) => values.clear(),
            Storage::Buffered(bytes) => *bytes = Arc::new(Vec::new()),
        }
    }

    /// Iterate over all values.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).map(move |i| self.value_at(i))
    }

    /// Materialize all values into a flat vector.
    pub fn to_vec(&self) -> Vec<T> {
        match &self.storage {
            Storage::Inline(values) => values.clone(),
            Storage::Buffered(_) => self.iter().collect(),
        }
    }

    /// Check whether both buffers hold the same values,
    /// regardless of their internal representation.
    pub fn compare_values(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if let (Storage::Buffered(a), Storage::Buffered(b)) = (&self.storage, &other.storage) {
            if Arc::ptr_eq(a, b) {
                return true;
            }
        }
        self.iter().zip(other.iter()).all(|(a, b)| a.same_value(b))
    }

    /// Encode all values in the given byte order.
    pub fn create_byte_buffer(&self, endianness: Endianness) -> Vec<u8> {
        match (&self.storage, endianness) {
            (Storage::Buffered(bytes), Endianness::Little) => bytes.as_ref().clone(),
            (_, Endianness::Little) => self.encode::<LittleEndian>(),
            (_, Endianness::Big) => self.encode::<BigEndian>(),
        }
    }

    /// Encode all values in the given byte order,
    /// appending a zero byte if the result has an odd length.
    pub fn create_even_length_byte_buffer(&self, endianness: Endianness) -> Vec<u8> {
        let mut out = self.create_byte_buffer(endianness);
        if out.len() % 2 == 1 {
            out.push(0);
        }
        out
    }

    fn encode<B: ByteOrder>(&self) -> Vec<u8> {
        let mut out = vec![0; self.byte_len()];
        for (value, chunk) in self.iter().zip(out.chunks_exact_mut(T::SIZE)) {
            value.write_bytes::<B>(chunk);
        }
        out
    }

    /// Obtain a byte stream over the little endian encoding of the values.
    ///
    /// Each reader has its own position,
    /// so any number of them may coexist.
    pub fn reader(&self) -> BinaryReader<'_, T> {
        BinaryReader {
            buffer: self,
            position: 0,
        }
    }

    /// Obtain a writable byte stream over the little endian encoding
    /// of the values.
    ///
    /// Writing past the end grows the buffer,
    /// filling any gap with zeros.
    pub fn writer(&mut self) -> BinaryWriter<'_, T> {
        BinaryWriter {
            buffer: self,
            position: 0,
        }
    }

    fn read_bytes_at(&self, position: usize, out: &mut [u8]) -> usize {
        let total = self.byte_len();
        if position >= total {
            return 0;
        }
        let n = out.len().min(total - position);
        match &self.storage {
            Storage::Buffered(bytes) => out[..n].copy_from_slice(&bytes[position..position + n]),
            Storage::Inline(values) => {
                let mut tmp = [0u8; 8];
                let mut done = 0;
                while done < n {
                    let pos = position + done;
                    let offset = pos % T::SIZE;
                    values[pos / T::SIZE].write_bytes::<LittleEndian>(&mut tmp);
                    let chunk = (T::SIZE - offset).min(n - done);
                    out[done..done + chunk].copy_from_slice(&tmp[offset..offset + chunk]);
                    done += chunk;
                }
            }
        }
        n
    }

    fn write_bytes_at(&mut self, position: usize, data: &[u8]) {
        let end = position + data.len();
        let needed = (end + T::SIZE - 1) / T::SIZE;
        match &mut self.storage {
            Storage::Inline(values) => {
                if values.len() < needed {
                    values.resize(needed, T::default());
                }
                let mut tmp = [0u8; 8];
                let mut done = 0;
                while done < data.len() {
                    let pos = position + done;
                    let index = pos / T::SIZE;
                    let offset = pos % T::SIZE;
                    let chunk = (T::SIZE - offset).min(data.len() - done);
                    values[index].write_bytes::<LittleEndian>(&mut tmp);
                    tmp[offset..offset + chunk].copy_from_slice(&data[done..done + chunk]);
                    values[index] = T::read_bytes::<LittleEndian>(&tmp);
                    done += chunk;
                }
            }
            Storage::Buffered(bytes) => {
                let bytes = Arc::make_mut(bytes);
                if bytes.len() < needed * T::SIZE {
                    bytes.resize(needed * T::SIZE, 0);
                }
                bytes[position..end].copy_from_slice(data);
            }
        }
        self.promote_if_needed();
    }

    fn promote_if_needed(&mut self) {
        if let Storage::Inline(values) = &self.storage {
            if values.len() * T::SIZE > PROMOTION_THRESHOLD {
                let mut bytes = vec![0; values.len() * T::SIZE];
                for (value, chunk) in values.iter().zip(bytes.chunks_exact_mut(T::SIZE)) {
                    value.write_bytes::<LittleEndian>(chunk);
                }
                self.storage = Storage::Buffered(Arc::new(bytes));
            }
        }
    }
}

impl<T: BinaryValue> PartialEq for BinaryBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare_values(other)
    }
}

impl<T: BinaryValue> From<Vec<T>> for BinaryBuffer<T> {
    fn from(values: Vec<T>) -> Self {
        BinaryBuffer::from_vec(values)
    }
}

impl<T: BinaryValue> std::iter::FromIterator<T> for BinaryBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BinaryBuffer::from_vec(iter.into_iter().collect())
    }
}

fn seek_position(current: u64, end: u64, pos: SeekFrom) -> io::Result<u64> {
    let target = match pos {
        SeekFrom::Start(p) => Some(p),
        SeekFrom::End(delta) => offset(end, delta),
        SeekFrom::Current(delta) => offset(current, delta),
    };
    target.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "invalid seek to a negative or overflowing position",
        )
    })
}

fn offset(base: u64, delta: i64) -> Option<u64> {
    if delta >= 0 {
        base.checked_add(delta as u64)
    } else {
        base.checked_sub(delta.unsigned_abs())
    }
}

/// A readable byte stream over a [`BinaryBuffer`].
#[derive(Debug)]
pub struct BinaryReader<'a, T> {
    buffer: &'a BinaryBuffer<T>,
    position: u64,
}

impl<T: BinaryValue> Read for BinaryReader<'_, T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.buffer.read_bytes_at(self.position as usize, buf);
        self.position += n as u64;
        Ok(n)
    }
}

impl<T: BinaryValue> Seek for BinaryReader<'_, T> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.position = seek_position(self.position, self.buffer.byte_len() as u64, pos)?;
        Ok(self.position)
    }
}

/// A writable byte stream over a [`BinaryBuffer`].
#[derive(Debug)]
pub struct BinaryWriter<'a, T> {
    buffer: &'a mut BinaryBuffer<T>,
    position: u64,
}

impl<T: BinaryValue> Write for BinaryWriter<'_, T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.write_bytes_at(self.position as usize, buf);
        self.position += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: BinaryValue> Seek for BinaryWriter<'_, T> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.position = seek_position(self.position, self.buffer.byte_len() as u64, pos)?;
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const THRESHOLD_U16: usize = PROMOTION_THRESHOLD / 2;

    fn reference(n: usize) -> Vec<u16> {
        (0..n).map(|i| (i * 7 % 65521) as u16).collect()
    }

    #[rstest]
    #[case(THRESHOLD_U16 - 1, false)]
    #[case(THRESHOLD_U16, false)]
    #[case(THRESHOLD_U16 + 1, true)]
    fn views_agree_around_threshold(#[case] n: usize, #[case] buffered: bool) {
        let expected = reference(n);
        let mut buffer = BinaryBuffer::new();
        for v in &expected {
            buffer.append(*v);
        }
        assert_eq!(buffer.is_buffered(), buffered);
        assert_eq!(buffer.len(), n);
        assert_eq!(buffer.to_vec(), expected);
        for i in [0, n / 2, n - 1] {
            assert_eq!(buffer.get(i).unwrap(), expected[i]);
        }

        let mut bytes = Vec::new();
        buffer.reader().read_to_end(&mut bytes).unwrap();
        let expected_bytes: Vec<u8> = expected.iter().flat_map(|v| v.to_le_bytes()).collect();
        assert_eq!(bytes, expected_bytes);
        assert_eq!(buffer.create_byte_buffer(Endianness::Little), expected_bytes);
    }

    #[test]
    fn set_and_get_past_threshold() {
        let expected = reference(10_000);
        let mut buffer = BinaryBuffer::from_vec(expected.clone());
        assert!(buffer.is_buffered());

        buffer.set(5000, 0xBEEF).unwrap();
        assert_eq!(buffer.get(5000).unwrap(), 0xBEEF);

        let mut expected = expected;
        expected[5000] = 0xBEEF;
        assert_eq!(buffer.to_vec(), expected);
    }

    #[test]
    fn nan_values_match_themselves() {
        let buffer = BinaryBuffer::from_vec(vec![f64::NAN, 1.5]);
        assert!(buffer.compare_values(&buffer.clone()));
        assert!(buffer == buffer.deep_clone());
        let other = BinaryBuffer::from_vec(vec![f64::NAN, 2.5]);
        assert!(!buffer.compare_values(&other));
        let zeros = BinaryBuffer::from_vec(vec![0.0f32]);
        assert!(zeros.compare_values(&BinaryBuffer::from_vec(vec![-0.0f32])));
    }

    #[test]
    fn index_errors() {
        let mut buffer = BinaryBuffer::from_vec(vec![1u32, 2, 3]);
        assert!(buffer.get(3).is_err());
        assert_eq!(buffer.try_get(3), None);
        assert!(buffer.set(4, 9).is_err());
        assert_eq!(buffer.len(), 3);
        buffer.set(3, 4).unwrap();
        assert_eq!(buffer.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn independent_reader_positions() {
        let buffer = BinaryBuffer::from_vec(vec![0x0102u16, 0x0304]);
        let mut a = buffer.reader();
        let mut b = buffer.reader();
        let mut one = [0u8; 1];
        a.read_exact(&mut one).unwrap();
        assert_eq!(one, [0x02]);
        b.seek(SeekFrom::End(-1)).unwrap();
        b.read_exact(&mut one).unwrap();
        assert_eq!(one, [0x03]);
        a.read_exact(&mut one).unwrap();
        assert_eq!(one, [0x01]);
    }

    #[test]
    fn writer_patches_and_grows() {
        let mut buffer = BinaryBuffer::from_vec(vec![0u16; 2]);
        {
            let mut w = buffer.writer();
            w.seek(SeekFrom::Start(1)).unwrap();
            w.write_all(&[0xAA, 0xBB, 0xCC, 0xDD]).unwrap();
        }
        assert_eq!(buffer.to_vec(), vec![0xAA00, 0xCCBB, 0x00DD]);
    }

    #[test]
    fn writer_on_buffered_storage() {
        let mut buffer = BinaryBuffer::from_vec(vec![0u8; PROMOTION_THRESHOLD + 2]);
        assert!(buffer.is_buffered());
        buffer.writer().write_all(&[1, 2, 3]).unwrap();
        assert_eq!(buffer.get(2).unwrap(), 3);
        assert_eq!(buffer.len(), PROMOTION_THRESHOLD + 2);
    }

    #[test]
    fn copy_on_write_sharing() {
        let original = BinaryBuffer::from_vec(reference(10_000));
        let shallow = original.clone();
        assert!(shallow.shares_buffer_with(&original));
        let deep = original.deep_clone();
        assert!(!deep.shares_buffer_with(&original));
        assert!(deep.compare_values(&original));

        let mut modified = original.clone();
        modified.set(0, 42).unwrap();
        assert!(!modified.shares_buffer_with(&original));
        assert_eq!(original.get(0).unwrap(), 0);
    }

    #[test]
    fn compare_across_representations() {
        let values = reference(10_000);
        let buffered = BinaryBuffer::from_vec(values.clone());
        let mut inline = BinaryBuffer::<u16>::new();
        // `from_le_bytes` of a small buffer stays inline
        assert!(!BinaryBuffer::<u16>::from_le_bytes(vec![1, 0]).is_buffered());
        for v in values {
            inline.append(v);
        }
        assert!(buffered.compare_values(&inline));
        assert_eq!(buffered, inline);
    }

    #[test]
    fn byte_buffers() {
        let buffer = BinaryBuffer::from_vec(vec![0x0102u16]);
        assert_eq!(buffer.create_byte_buffer(Endianness::Big), vec![0x01, 0x02]);
        let odd = BinaryBuffer::from_vec(vec![1u8, 2, 3]);
        assert_eq!(odd.create_byte_buffer(Endianness::Little), vec![1, 2, 3]);
        assert_eq!(
            odd.create_even_length_byte_buffer(Endianness::Little),
            vec![1, 2, 3, 0]
        );
    }

    #[test]
    fn from_le_bytes_completes_last_value() {
        let buffer = BinaryBuffer::<u16>::from_le_bytes(vec![1, 0, 2]);
        assert_eq!(buffer.to_vec(), vec![1, 2]);
    }
}
