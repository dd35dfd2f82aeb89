//! Wire length calculation of data elements,
//! sequences and encapsulated pixel data.
//!
//! Lengths are byte exact:
//! they match what an encoder would produce
//! for the given transfer syntax and [`WriteOptions`].

use crate::transfer_syntax::TransferSyntax;

/// Length of an item, item delimiter or sequence delimiter header.
pub const ITEM_HEADER_LEN: u32 = 8;

/// Length of a group length element `(gggg,0000)`,
/// a 4-byte `UL` value in any transfer syntax.
pub const GROUP_LENGTH_ELEMENT_LEN: u32 = 12;

/// Options affecting how sequences, items and groups are laid out
/// when writing a data set.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct WriteOptions {
    /// Write sequences with an explicit length
    /// instead of terminating them with a sequence delimiter.
    pub explicit_length_sequence: bool,
    /// Write sequence items with an explicit length
    /// instead of terminating them with an item delimiter.
    pub explicit_length_sequence_item: bool,
    /// Write a group length element at the start of each group.
    pub calculate_group_lengths: bool,
    /// Fill the basic offset table of encapsulated pixel data.
    /// When unset, an empty offset table item is written.
    pub write_fragment_offset_table: bool,
}

impl WriteOptions {
    /// Create the default set of options:
    /// undefined length sequences and items,
    /// no group lengths and an empty basic offset table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether sequences are written with an explicit length.
    pub fn explicit_length_sequence(mut self, value: bool) -> Self {
        self.explicit_length_sequence = value;
        self
    }

    /// Set whether sequence items are written with an explicit length.
    pub fn explicit_length_sequence_item(mut self, value: bool) -> Self {
        self.explicit_length_sequence_item = value;
        self
    }

    /// Set whether group length elements are accounted for.
    pub fn calculate_group_lengths(mut self, value: bool) -> Self {
        self.calculate_group_lengths = value;
        self
    }

    /// Set whether the basic offset table is written.
    pub fn write_fragment_offset_table(mut self, value: bool) -> Self {
        self.write_fragment_offset_table = value;
        self
    }
}

/// Trait for entities with a known length when written to a DICOM stream.
///
/// This is implemented by sequence items,
/// so that a sequence can compute its own length
/// without knowing the item type.
pub trait WriteLength {
    /// Calculate the number of bytes that this entity
    /// would take once written with the given transfer syntax and options,
    /// excluding any item header or delimiter around it.
    fn write_length(&self, ts: &TransferSyntax, options: &WriteOptions) -> u32;
}

impl<T: ?Sized> WriteLength for &T
where
    T: WriteLength,
{
    fn write_length(&self, ts: &TransferSyntax, options: &WriteOptions) -> u32 {
        (**self).write_length(ts, options)
    }
}

/// Calculate the length of a whole sequence element,
/// header included,
/// given the content length of each of its items.
///
/// An empty sequence is always written with a zero explicit length,
/// regardless of options.
pub fn sequence_length<I>(ts: &TransferSyntax, options: &WriteOptions, item_lengths: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let header = if ts.is_explicit_vr() { 12 } else { 8 };
    let mut items = item_lengths.into_iter().peekable();
    if items.peek().is_none() {
        return header;
    }

    let item_delimiter = if options.explicit_length_sequence_item {
        0
    } else {
        ITEM_HEADER_LEN
    };
    let sequence_delimiter = if options.explicit_length_sequence {
        0
    } else {
        ITEM_HEADER_LEN
    };

    header
        + items
            .map(|len| ITEM_HEADER_LEN + len + item_delimiter)
            .sum::<u32>()
        + sequence_delimiter
}

/// Round a length up to the next even number.
#[inline]
pub fn even_length(len: u32) -> u32 {
    len + (len & 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer_syntax::{EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN};
    use rstest::rstest;

    fn options(els: bool, elsi: bool) -> WriteOptions {
        WriteOptions::new()
            .explicit_length_sequence(els)
            .explicit_length_sequence_item(elsi)
    }

    #[rstest]
    #[case(false, false, 76, 80)]
    #[case(true, false, 68, 72)]
    #[case(false, true, 60, 64)]
    #[case(true, true, 52, 56)]
    fn two_item_sequence(
        #[case] els: bool,
        #[case] elsi: bool,
        #[case] implicit: u32,
        #[case] explicit: u32,
    ) {
        let options = options(els, elsi);
        assert_eq!(
            sequence_length(&IMPLICIT_VR_LITTLE_ENDIAN, &options, [16, 12]),
            implicit
        );
        assert_eq!(
            sequence_length(&EXPLICIT_VR_LITTLE_ENDIAN, &options, [16, 12]),
            explicit
        );
    }

    #[rstest]
    #[case(false, false)]
    #[case(true, false)]
    #[case(false, true)]
    #[case(true, true)]
    fn empty_sequence_has_no_delimiters(#[case] els: bool, #[case] elsi: bool) {
        let options = options(els, elsi);
        assert_eq!(
            sequence_length(&IMPLICIT_VR_LITTLE_ENDIAN, &options, std::iter::empty()),
            8
        );
        assert_eq!(
            sequence_length(&EXPLICIT_VR_LITTLE_ENDIAN, &options, std::iter::empty()),
            12
        );
    }

    #[test]
    fn even_lengths() {
        assert_eq!(even_length(0), 0);
        assert_eq!(even_length(7), 8);
        assert_eq!(even_length(8), 8);
    }
}
