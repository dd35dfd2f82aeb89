//! Encapsulated pixel data: a basic offset table followed by fragments.

use crate::transfer_syntax::TransferSyntax;
use crate::value::C;
use crate::write::{even_length, WriteOptions, ITEM_HEADER_LEN};

/// A pixel data fragment sequence,
/// as found in encapsulated (compressed) pixel data.
///
/// It is always written with an undefined length
/// and terminated with a sequence delimiter.
/// The first item is the basic offset table,
/// followed by one item per fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentSequence {
    offset_table: C<u32>,
    fragments: C<Vec<u8>>,
}

impl FragmentSequence {
    /// Create a fragment sequence from its parts.
    pub fn new<T, F>(offset_table: T, fragments: F) -> Self
    where
        T: Into<C<u32>>,
        F: Into<C<Vec<u8>>>,
    {
        FragmentSequence {
            offset_table: offset_table.into(),
            fragments: fragments.into(),
        }
    }

    /// Encapsulate whole frames, one fragment per frame,
    /// filling the basic offset table accordingly.
    ///
    /// Odd length frames are padded with a zero byte.
    pub fn from_frames<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut offset_table = C::new();
        let mut fragments = C::new();
        let mut offset = 0u32;
        for mut frame in frames {
            if frame.len() % 2 == 1 {
                frame.push(0);
            }
            offset_table.push(offset);
            offset += ITEM_HEADER_LEN + frame.len() as u32;
            fragments.push(frame);
        }
        FragmentSequence {
            offset_table,
            fragments,
        }
    }

    /// The basic offset table.
    pub fn offset_table(&self) -> &[u32] {
        &self.offset_table
    }

    /// Mutable access to the basic offset table.
    pub fn offset_table_mut(&mut self) -> &mut C<u32> {
        &mut self.offset_table
    }

    /// The fragments.
    pub fn fragments(&self) -> &[Vec<u8>] {
        &self.fragments
    }

    /// Mutable access to the fragments.
    pub fn fragments_mut(&mut self) -> &mut C<Vec<u8>> {
        &mut self.fragments
    }

    /// Add a fragment to the end of the sequence.
    pub fn push_fragment(&mut self, fragment: Vec<u8>) {
        self.fragments.push(fragment);
    }

    /// Whether there are no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The value length of the sequence once written,
    /// excluding the pixel data element header.
    ///
    /// This covers the basic offset table item,
    /// each fragment item, and the sequence delimiter.
    /// The offset table entries are only written
    /// when [`WriteOptions::write_fragment_offset_table`] is set.
    pub fn value_length(&self, options: &WriteOptions) -> u32 {
        let offset_table = if options.write_fragment_offset_table {
            4 * self.offset_table.len() as u32
        } else {
            0
        };
        ITEM_HEADER_LEN
            + offset_table
            + self
                .fragments
                .iter()
                .map(|f| ITEM_HEADER_LEN + even_length(f.len() as u32))
                .sum::<u32>()
            + ITEM_HEADER_LEN
    }

    /// The full length of a pixel data element holding this sequence.
    pub fn write_length(&self, ts: &TransferSyntax, options: &WriteOptions) -> u32 {
        let header = if ts.is_explicit_vr() { 12 } else { 8 };
        header + self.value_length(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer_syntax::{EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN};
    use rstest::rstest;

    fn two_fragments() -> FragmentSequence {
        FragmentSequence::new(C::<u32>::new(), vec![vec![0u8; 16], vec![0u8; 12]])
    }

    #[rstest]
    #[case(false, 24, 28)]
    #[case(true, 24, 28)]
    fn empty_sequence(#[case] write_table: bool, #[case] implicit: u32, #[case] explicit: u32) {
        let options = WriteOptions::new().write_fragment_offset_table(write_table);
        let seq = FragmentSequence::default();
        assert_eq!(seq.write_length(&IMPLICIT_VR_LITTLE_ENDIAN, &options), implicit);
        assert_eq!(seq.write_length(&EXPLICIT_VR_LITTLE_ENDIAN, &options), explicit);
    }

    #[rstest]
    #[case(false, 68, 72)]
    #[case(true, 76, 80)]
    fn with_offset_table(#[case] write_table: bool, #[case] implicit: u32, #[case] explicit: u32) {
        let options = WriteOptions::new().write_fragment_offset_table(write_table);
        let mut seq = two_fragments();
        seq.offset_table_mut().extend([0, 24]);
        assert_eq!(seq.write_length(&IMPLICIT_VR_LITTLE_ENDIAN, &options), implicit);
        assert_eq!(seq.write_length(&EXPLICIT_VR_LITTLE_ENDIAN, &options), explicit);
    }

    #[test]
    fn sequence_options_do_not_apply() {
        let options = WriteOptions::new()
            .explicit_length_sequence(true)
            .explicit_length_sequence_item(true);
        assert_eq!(
            two_fragments().write_length(&IMPLICIT_VR_LITTLE_ENDIAN, &options),
            68
        );
    }

    #[test]
    fn frames_to_fragments() {
        let seq = FragmentSequence::from_frames(vec![vec![1, 2, 3], vec![4, 5, 6, 7]]);
        assert_eq!(seq.offset_table(), &[0, 12]);
        assert_eq!(seq.fragments().len(), 2);
        assert_eq!(seq.fragments()[0], vec![1, 2, 3, 0]);
        assert_eq!(seq.fragments()[1].len(), 4);
    }
}
