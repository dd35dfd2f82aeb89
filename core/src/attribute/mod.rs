//! The attribute model: a tag, a value representation,
//! and the values held under them.
//!
//! An [`Attribute`] keeps its values in the storage
//! fitting its value representation:
//! strings for text VRs,
//! a typed [`BinaryValues`] buffer for binary VRs,
//! nested items for sequences,
//! and a [`FragmentSequence`] for encapsulated pixel data.
//!
//! Every attribute is in one of three states:
//! it holds values (`count() > 0`),
//! it is _empty_ (never given a value),
//! or it is _null_ (explicitly given a zero length value).
//! Empty attributes are skipped when writing a data set,
//! while null attributes are written with a zero length.
//!
//! Setters validate their input before any change,
//! so a failed call leaves the attribute as it was.

pub mod binary;
pub(crate) mod text;

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use itertools::Itertools;
use num_traits::ToPrimitive;
use snafu::{ensure, OptionExt};

use crate::dictionary::{DataDictionary, DataDictionaryEntry, VirtualVr};
use crate::error::{DataSnafu, IndexSnafu, InvalidTypeSnafu, Result, VrMismatchSnafu};
use crate::header::{Tag, VR};
use crate::transfer_syntax::{TransferSyntax, EXPLICIT_VR_LITTLE_ENDIAN};
use crate::value::{BinaryValue, FragmentSequence, C};
use crate::vr::ValueKind;
use crate::write::{even_length, sequence_length, WriteLength, WriteOptions};

pub use self::binary::BinaryValues;

/// An empty item type,
/// for attributes which are known to never hold a sequence.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum EmptyObject {}

impl WriteLength for EmptyObject {
    fn write_length(&self, _: &TransferSyntax, _: &WriteOptions) -> u32 {
        match *self {}
    }
}

/// The values of an attribute.
#[derive(Debug, Clone)]
pub enum AttributeValue<I> {
    /// Text values, one string per value.
    Text(C<String>),
    /// Fixed width binary values.
    Binary(BinaryValues),
    /// Sequence items.
    Sequence(Vec<I>),
    /// Encapsulated pixel data.
    Fragments(FragmentSequence),
}

impl<I> AttributeValue<I> {
    /// Create an empty value of the storage class of the given VR.
    pub fn empty_for(vr: VR) -> Self {
        match vr.info().kind {
            ValueKind::Text => AttributeValue::Text(C::new()),
            ValueKind::Sequence => AttributeValue::Sequence(Vec::new()),
            ValueKind::Binary => match BinaryValues::empty_for(vr) {
                Some(values) => AttributeValue::Binary(values),
                None => AttributeValue::Binary(BinaryValues::U8(Default::default())),
            },
        }
    }

    /// The number of values, items, or fragments.
    pub fn len(&self) -> usize {
        match self {
            AttributeValue::Text(values) => values.len(),
            AttributeValue::Binary(values) => values.len(),
            AttributeValue::Sequence(items) => items.len(),
            AttributeValue::Fragments(fragments) => fragments.fragments().len(),
        }
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self) {
        match self {
            AttributeValue::Text(values) => values.clear(),
            AttributeValue::Binary(values) => values.clear(),
            AttributeValue::Sequence(items) => items.clear(),
            AttributeValue::Fragments(fragments) => *fragments = FragmentSequence::default(),
        }
    }
}

impl<I: PartialEq> PartialEq for AttributeValue<I> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttributeValue::Text(a), AttributeValue::Text(b)) => a == b,
            (AttributeValue::Binary(a), AttributeValue::Binary(b)) => a.compare_values(b),
            (AttributeValue::Sequence(a), AttributeValue::Sequence(b)) => a == b,
            (AttributeValue::Fragments(a), AttributeValue::Fragments(b)) => a == b,
            _ => false,
        }
    }
}

/// A DICOM attribute.
///
/// The type parameter `I` is the type of the items
/// of sequence attributes,
/// usually an attribute collection.
#[derive(Debug, Clone)]
pub struct Attribute<I = EmptyObject> {
    tag: Tag,
    vr: VR,
    value: AttributeValue<I>,
    null: bool,
}

macro_rules! numeric_accessors {
    ($($t: ty: $set: ident, $append: ident, $try_get: ident, $get: ident;)*) => {
        $(
            #[doc = concat!("Set the value at `index` from a `", stringify!($t), "`.")]
            ///
            /// Binary VRs store the number if it fits their value type.
            /// The numeric text VRs `DS` and `IS` store its text form.
            /// Setting the value at index `count()` appends it.
            pub fn $set(&mut self, index: usize, value: $t) -> Result<()> {
                self.set_number(index, value, stringify!($t))
            }

            #[doc = concat!("Append a `", stringify!($t), "` value.")]
            pub fn $append(&mut self, value: $t) -> Result<()> {
                self.set_number(self.count(), value, stringify!($t))
            }

            #[doc = concat!("Retrieve the value at `index` as a `", stringify!($t), "`,")]
            /// or `None` if there is no such value
            /// or it cannot be represented by that type.
            pub fn $try_get(&self, index: usize) -> Option<$t> {
                self.number_at(index)
            }

            #[doc = concat!("Retrieve the value at `index` as a `", stringify!($t), "`.")]
            pub fn $get(&self, index: usize) -> Result<$t> {
                self.get_number(index, stringify!($t))
            }
        )*
    };
}

impl<I> Attribute<I> {
    /// Create an empty attribute,
    /// without checking the VR against a dictionary.
    pub fn new(tag: Tag, vr: VR) -> Self {
        Attribute {
            tag,
            vr,
            value: AttributeValue::empty_for(vr),
            null: false,
        }
    }

    /// Create an empty attribute,
    /// checking that the dictionary admits the given VR for this tag.
    ///
    /// Private tags and tags unknown to the dictionary accept any VR,
    /// and `UN` is always accepted.
    pub fn new_in<D>(dict: &D, tag: Tag, vr: VR) -> Result<Self>
    where
        D: DataDictionary,
    {
        if !tag.is_private() {
            if let Some(entry) = dict.by_tag(tag) {
                let expected = entry.vr();
                ensure!(
                    expected.admits(vr),
                    VrMismatchSnafu { tag, vr, expected }
                );
            }
        }
        Ok(Self::new(tag, vr))
    }

    /// Create an empty attribute with the VR
    /// which the dictionary declares for this tag,
    /// or `UN` if the tag is unknown.
    pub fn from_dictionary<D>(dict: &D, tag: Tag) -> Self
    where
        D: DataDictionary,
    {
        let vr = dict
            .by_tag(tag)
            .map(|entry| entry.vr())
            .unwrap_or(VirtualVr::Exact(VR::UN))
            .relaxed();
        Self::new(tag, vr)
    }

    /// Create a sequence attribute with the given items.
    pub fn new_sequence(tag: Tag, items: Vec<I>) -> Self {
        Attribute {
            tag,
            vr: VR::SQ,
            value: AttributeValue::Sequence(items),
            null: false,
        }
    }

    /// Create an attribute holding encapsulated pixel data.
    pub fn from_fragments(tag: Tag, vr: VR, fragments: FragmentSequence) -> Self {
        Attribute {
            tag,
            vr,
            value: AttributeValue::Fragments(fragments),
            null: false,
        }
    }

    /// Create an attribute and set its values from their text form.
    pub fn with_str(tag: Tag, vr: VR, value: &str) -> Result<Self> {
        let mut attribute = Self::new(tag, vr);
        attribute.set_string_value(value)?;
        Ok(attribute)
    }

    /// The attribute tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// The attribute value.
    pub fn value(&self) -> &AttributeValue<I> {
        &self.value
    }

    /// The number of values.
    /// For sequences this is the number of items.
    pub fn count(&self) -> usize {
        self.value.len()
    }

    /// Whether the attribute was explicitly given a zero length value.
    pub fn is_null(&self) -> bool {
        self.null && self.value.is_empty()
    }

    /// Whether the attribute was never given a value.
    pub fn is_empty(&self) -> bool {
        !self.null && self.value.is_empty()
    }

    /// Remove all values, leaving the attribute empty.
    pub fn set_empty_value(&mut self) {
        self.value.clear();
        self.null = false;
    }

    /// Remove all values, leaving the attribute null.
    pub fn set_null_value(&mut self) {
        self.value.clear();
        self.null = true;
    }

    /// Set the string at `index`.
    ///
    /// Setting the string at index `count()` appends it.
    /// Binary VRs parse the string into their value type.
    /// Text VRs check it against the VR grammar and length limit,
    /// and keep it verbatim.
    pub fn set_string(&mut self, index: usize, value: &str) -> Result<()> {
        let (tag, vr) = (self.tag, self.vr);
        let count = self.count();
        ensure!(index <= count, IndexSnafu { index, count });
        match &mut self.value {
            AttributeValue::Text(values) => {
                ensure!(
                    index == 0 || vr.info().multi_valued,
                    DataSnafu {
                        tag,
                        vr,
                        message: "the VR holds a single value",
                    }
                );
                text::validate(tag, vr, value)?;
                if index == count {
                    values.push(value.to_string());
                } else {
                    values[index] = value.to_string();
                }
            }
            AttributeValue::Binary(values) => values.set_parsed(tag, vr, index, value)?,
            _ => return InvalidTypeSnafu { tag, vr, type_name: "str" }.fail(),
        }
        self.null = false;
        Ok(())
    }

    /// Append a string value.
    pub fn append_string(&mut self, value: &str) -> Result<()> {
        self.set_string(self.count(), value)
    }

    /// Replace all values with the ones in a backslash separated string.
    ///
    /// An empty string makes the attribute null.
    /// Values are replaced only if all of them are valid.
    pub fn set_string_value(&mut self, value: &str) -> Result<()> {
        let (tag, vr) = (self.tag, self.vr);
        let primitive = matches!(
            self.value,
            AttributeValue::Text(_) | AttributeValue::Binary(_)
        );
        if primitive && value.is_empty() {
            self.set_null_value();
            return Ok(());
        }
        match &mut self.value {
            AttributeValue::Text(values) => {
                let parts: C<String> = if vr.info().multi_valued {
                    value.split('\\').map(str::to_string).collect()
                } else {
                    std::iter::once(value.to_string()).collect()
                };
                for part in &parts {
                    text::validate(tag, vr, part)?;
                }
                *values = parts;
                self.null = false;
            }
            AttributeValue::Binary(values) => {
                *values = values.parse_all(tag, vr, value)?;
                self.null = false;
            }
            _ => return InvalidTypeSnafu { tag, vr, type_name: "str" }.fail(),
        }
        Ok(())
    }

    /// Retrieve the value at `index` in text form,
    /// or `None` if there is no such value.
    ///
    /// Strings of formatted VRs, such as numbers, dates and UIDs,
    /// are trimmed of their padding.
    pub fn try_get_string(&self, index: usize) -> Option<Cow<'_, str>> {
        match &self.value {
            AttributeValue::Text(values) => values
                .get(index)
                .map(|v| Cow::Borrowed(text::trim_value(self.vr, v))),
            AttributeValue::Binary(values) => values.format(self.vr, index),
            _ => None,
        }
    }

    /// Retrieve the value at `index` in text form.
    pub fn get_string(&self, index: usize) -> Result<Cow<'_, str>> {
        if matches!(
            self.value,
            AttributeValue::Sequence(_) | AttributeValue::Fragments(_)
        ) {
            return InvalidTypeSnafu {
                tag: self.tag,
                vr: self.vr,
                type_name: "str",
            }
            .fail();
        }
        let count = self.count();
        self.try_get_string(index)
            .context(IndexSnafu { index, count })
    }

    /// Render all values as a single backslash separated string.
    ///
    /// Sequences and encapsulated pixel data render as an empty string.
    pub fn to_value_string(&self) -> String {
        match &self.value {
            AttributeValue::Text(values) => values.iter().join("\\"),
            AttributeValue::Binary(values) => (0..values.len())
                .filter_map(|i| values.format(self.vr, i))
                .join("\\"),
            _ => String::new(),
        }
    }

    numeric_accessors! {
        i16: set_i16, append_i16, try_get_i16, get_i16;
        u16: set_u16, append_u16, try_get_u16, get_u16;
        i32: set_i32, append_i32, try_get_i32, get_i32;
        u32: set_u32, append_u32, try_get_u32, get_u32;
        i64: set_i64, append_i64, try_get_i64, get_i64;
        u64: set_u64, append_u64, try_get_u64, get_u64;
        f32: set_f32, append_f32, try_get_f32, get_f32;
        f64: set_f64, append_f64, try_get_f64, get_f64;
    }

    fn set_number<N>(&mut self, index: usize, value: N, type_name: &'static str) -> Result<()>
    where
        N: ToPrimitive + std::fmt::Display + Copy,
    {
        let (tag, vr) = (self.tag, self.vr);
        let count = self.count();
        ensure!(index <= count, IndexSnafu { index, count });
        match &mut self.value {
            AttributeValue::Binary(values) => {
                let stored = values.set_converted(index, value)?;
                ensure!(
                    stored,
                    DataSnafu {
                        tag,
                        vr,
                        message: format!("{} is not representable as {}", value, vr),
                    }
                );
            }
            AttributeValue::Text(values) => {
                let formatted = match vr {
                    VR::DS => text::format_decimal(value),
                    VR::IS => text::format_integer(value),
                    _ => return InvalidTypeSnafu { tag, vr, type_name }.fail(),
                };
                let formatted = formatted.context(DataSnafu {
                    tag,
                    vr,
                    message: format!("{} is not representable as {}", value, vr),
                })?;
                if index == count {
                    values.push(formatted);
                } else {
                    values[index] = formatted;
                }
            }
            _ => return InvalidTypeSnafu { tag, vr, type_name }.fail(),
        }
        self.null = false;
        Ok(())
    }

    fn number_at<N: BinaryValue>(&self, index: usize) -> Option<N> {
        match &self.value {
            AttributeValue::Binary(values) => values.try_get_as(index),
            AttributeValue::Text(values) if matches!(self.vr, VR::DS | VR::IS) => {
                values.get(index).and_then(|v| text::parse_number(v))
            }
            _ => None,
        }
    }

    fn get_number<N: BinaryValue>(&self, index: usize, type_name: &'static str) -> Result<N> {
        let (tag, vr) = (self.tag, self.vr);
        let numeric = match &self.value {
            AttributeValue::Binary(_) => true,
            AttributeValue::Text(_) => matches!(vr, VR::DS | VR::IS),
            _ => false,
        };
        ensure!(numeric, InvalidTypeSnafu { tag, vr, type_name });
        let count = self.count();
        ensure!(index < count, IndexSnafu { index, count });
        self.number_at(index).context(DataSnafu {
            tag,
            vr,
            message: format!("value {} is not representable as {}", index, type_name),
        })
    }

    /// Set the tag at `index` of an `AT` attribute.
    pub fn set_tag(&mut self, index: usize, value: Tag) -> Result<()> {
        ensure!(
            self.vr == VR::AT,
            InvalidTypeSnafu {
                tag: self.tag,
                vr: self.vr,
                type_name: "Tag",
            }
        );
        self.set_number(index, value.to_u32(), "Tag")
    }

    /// Append a tag to an `AT` attribute.
    pub fn append_tag(&mut self, value: Tag) -> Result<()> {
        self.set_tag(self.count(), value)
    }

    /// Retrieve the tag at `index` of an `AT` attribute.
    pub fn try_get_tag(&self, index: usize) -> Option<Tag> {
        if self.vr != VR::AT {
            return None;
        }
        self.number_at::<u32>(index).map(Tag::from)
    }

    /// Set the date at `index`.
    /// Supported by `DA` and `DT` attributes.
    pub fn set_date(&mut self, index: usize, date: NaiveDate) -> Result<()> {
        self.set_temporal(index, &[VR::DA, VR::DT], "NaiveDate", text::format_date(date))
    }

    /// Set the time at `index` of a `TM` attribute.
    pub fn set_time(&mut self, index: usize, time: NaiveTime) -> Result<()> {
        self.set_temporal(index, &[VR::TM], "NaiveTime", text::format_time(time))
    }

    /// Set the date and time at `index` of a `DT` attribute.
    pub fn set_datetime(&mut self, index: usize, datetime: NaiveDateTime) -> Result<()> {
        self.set_temporal(
            index,
            &[VR::DT],
            "NaiveDateTime",
            text::format_datetime(datetime),
        )
    }

    fn set_temporal(
        &mut self,
        index: usize,
        vrs: &[VR],
        type_name: &'static str,
        value: String,
    ) -> Result<()> {
        ensure!(
            vrs.contains(&self.vr),
            InvalidTypeSnafu {
                tag: self.tag,
                vr: self.vr,
                type_name,
            }
        );
        self.set_string(index, &value)
    }

    /// Retrieve the date at `index` of a `DA` or `DT` attribute.
    pub fn try_get_date(&self, index: usize) -> Option<NaiveDate> {
        let value = self.text_at(index)?;
        match self.vr {
            VR::DA => text::parse_date(value),
            VR::DT => text::parse_datetime(value).map(|dt| dt.date()),
            _ => None,
        }
    }

    /// Retrieve the time at `index` of a `TM` or `DT` attribute.
    pub fn try_get_time(&self, index: usize) -> Option<NaiveTime> {
        let value = self.text_at(index)?;
        match self.vr {
            VR::TM => text::parse_time(value),
            VR::DT => text::parse_datetime(value).map(|dt| dt.time()),
            _ => None,
        }
    }

    /// Retrieve the date and time at `index` of a `DT` attribute.
    pub fn try_get_datetime(&self, index: usize) -> Option<NaiveDateTime> {
        match self.vr {
            VR::DT => text::parse_datetime(self.text_at(index)?),
            _ => None,
        }
    }

    fn text_at(&self, index: usize) -> Option<&str> {
        match &self.value {
            AttributeValue::Text(values) => values
                .get(index)
                .map(|v| text::trim_value(self.vr, v)),
            _ => None,
        }
    }

    /// The binary values, if this attribute has a binary VR.
    pub fn binary(&self) -> Option<&BinaryValues> {
        match &self.value {
            AttributeValue::Binary(values) => Some(values),
            _ => None,
        }
    }

    /// Replace all binary values at once.
    ///
    /// The values must be of the number type of the attribute's VR.
    pub fn set_binary(&mut self, values: BinaryValues) -> Result<()> {
        let (tag, vr) = (self.tag, self.vr);
        match &mut self.value {
            AttributeValue::Binary(current) if current.same_kind(&values) => {
                *current = values;
                self.null = false;
                Ok(())
            }
            _ => InvalidTypeSnafu {
                tag,
                vr,
                type_name: "BinaryValues",
            }
            .fail(),
        }
    }

    /// The sequence items, if this is a sequence attribute.
    pub fn items(&self) -> Option<&[I]> {
        match &self.value {
            AttributeValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable access to the sequence items,
    /// if this is a sequence attribute.
    pub fn items_mut(&mut self) -> Option<&mut Vec<I>> {
        match &mut self.value {
            AttributeValue::Sequence(items) => {
                self.null = false;
                Some(items)
            }
            _ => None,
        }
    }

    /// Add an item to a sequence attribute.
    pub fn push_item(&mut self, item: I) -> Result<()> {
        let (tag, vr) = (self.tag, self.vr);
        let items = self.items_mut().context(InvalidTypeSnafu {
            tag,
            vr,
            type_name: "sequence item",
        })?;
        items.push(item);
        Ok(())
    }

    /// The encapsulated pixel data fragments, if any.
    pub fn fragments(&self) -> Option<&FragmentSequence> {
        match &self.value {
            AttributeValue::Fragments(fragments) => Some(fragments),
            _ => None,
        }
    }

    /// Mutable access to the encapsulated pixel data fragments, if any.
    pub fn fragments_mut(&mut self) -> Option<&mut FragmentSequence> {
        match &mut self.value {
            AttributeValue::Fragments(fragments) => Some(fragments),
            _ => None,
        }
    }

    /// The length of the text values once joined and padded,
    /// where `encoded_len` gives the encoded byte length of each value.
    /// Values for which it returns `None` count their UTF-8 length.
    ///
    /// Returns `None` if this attribute does not hold text.
    pub fn text_length_with<F>(&self, encoded_len: F) -> Option<u32>
    where
        F: Fn(&str) -> Option<usize>,
    {
        match &self.value {
            AttributeValue::Text(values) => {
                if values.is_empty() {
                    return Some(0);
                }
                let content: usize = values
                    .iter()
                    .map(|v| encoded_len(v).unwrap_or(v.len()))
                    .sum();
                Some(even_length((content + values.len() - 1) as u32))
            }
            _ => None,
        }
    }

    /// Copy the attribute,
    /// cloning binary values into storage of their own.
    ///
    /// Sequence items are cloned with their own `Clone` implementation.
    pub fn deep_clone(&self) -> Self
    where
        I: Clone,
    {
        let value = match &self.value {
            AttributeValue::Binary(values) => AttributeValue::Binary(values.deep_clone()),
            other => other.clone(),
        };
        Attribute {
            tag: self.tag,
            vr: self.vr,
            value,
            null: self.null,
        }
    }

    /// Transform the items of a sequence attribute,
    /// keeping everything else.
    pub fn map_items<J, F>(&self, f: F) -> Attribute<J>
    where
        F: FnMut(&I) -> J,
    {
        let value = match &self.value {
            AttributeValue::Text(values) => AttributeValue::Text(values.clone()),
            AttributeValue::Binary(values) => AttributeValue::Binary(values.clone()),
            AttributeValue::Sequence(items) => {
                AttributeValue::Sequence(items.iter().map(f).collect())
            }
            AttributeValue::Fragments(fragments) => AttributeValue::Fragments(fragments.clone()),
        };
        Attribute {
            tag: self.tag,
            vr: self.vr,
            value,
            null: self.null,
        }
    }
}

impl<I> Attribute<I>
where
    I: WriteLength,
{
    /// The length of the value once written, padded to an even length.
    ///
    /// Text is measured by its UTF-8 length.
    /// Sequences are measured with undefined lengths
    /// in explicit VR little endian.
    pub fn stream_length(&self) -> u32 {
        match &self.value {
            AttributeValue::Text(_) => self.text_length_with(|_| None).unwrap_or(0),
            AttributeValue::Binary(values) => even_length(values.byte_len() as u32),
            AttributeValue::Sequence(_) => {
                let ts = EXPLICIT_VR_LITTLE_ENDIAN;
                self.write_length(&ts, &WriteOptions::default())
                    - self.vr.header_len(ts.is_explicit_vr())
            }
            AttributeValue::Fragments(fragments) => {
                fragments.value_length(&WriteOptions::default())
            }
        }
    }

    /// The length of the whole data element once written,
    /// header included.
    pub fn write_length(&self, ts: &TransferSyntax, options: &WriteOptions) -> u32 {
        match &self.value {
            AttributeValue::Sequence(items) => sequence_length(
                ts,
                options,
                items.iter().map(|item| item.write_length(ts, options)),
            ),
            AttributeValue::Fragments(fragments) => fragments.write_length(ts, options),
            _ => self.vr.header_len(ts.is_explicit_vr()) + self.stream_length(),
        }
    }
}

impl<I> WriteLength for Attribute<I>
where
    I: WriteLength,
{
    fn write_length(&self, ts: &TransferSyntax, options: &WriteOptions) -> u32 {
        Attribute::write_length(self, ts, options)
    }
}

impl<I: PartialEq> PartialEq for Attribute<I> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.vr == other.vr
            && self.is_null() == other.is_null()
            && self.is_empty() == other.is_empty()
            && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::EmptyDictionary;
    use crate::error::Error;
    use crate::transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN;

    type Attr = Attribute<EmptyObject>;

    const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
    const ROWS: Tag = Tag(0x0028, 0x0010);

    #[test]
    fn text_slots() {
        let mut attr = Attr::new(PATIENT_NAME, VR::PN);
        assert!(attr.is_empty());
        attr.set_string(0, "Doe^John").unwrap();
        attr.set_string(1, "").unwrap();
        assert_eq!(attr.count(), 2);
        attr.set_string(0, "Doe^Jane").unwrap();
        assert_eq!(attr.count(), 2);
        assert!(matches!(
            attr.set_string(3, "x"),
            Err(Error::Index { index: 3, count: 2, .. })
        ));
        assert_eq!(attr.to_value_string(), "Doe^Jane\\");
        assert_eq!(attr.stream_length(), 10);
    }

    #[test]
    fn null_and_empty_states() {
        let mut attr = Attr::new(PATIENT_NAME, VR::PN);
        attr.set_string_value("").unwrap();
        assert!(attr.is_null());
        assert!(!attr.is_empty());
        assert_eq!(attr.count(), 0);

        attr.set_string_value("A\\B").unwrap();
        assert!(!attr.is_null());
        assert_eq!(attr.count(), 2);

        attr.set_empty_value();
        assert!(attr.is_empty());
        assert!(!attr.is_null());

        attr.set_null_value();
        assert!(attr.is_null());
        assert_ne!(attr, Attr::new(PATIENT_NAME, VR::PN));
    }

    #[test]
    fn failed_set_keeps_values() {
        let mut attr = Attr::with_str(ROWS, VR::US, "512\\512").unwrap();
        let err = attr.set_string_value("1\\-1000").unwrap_err();
        assert!(matches!(err, Error::Data { .. }));
        assert_eq!(attr.to_value_string(), "512\\512");

        let mut attr = Attr::with_str(Tag(0x0008, 0x0060), VR::CS, "MR").unwrap();
        assert!(attr.set_string_value("CT\\mr").is_err());
        assert_eq!(attr.to_value_string(), "MR");
    }

    #[test]
    fn numbers_in_binary_vrs() {
        let mut attr = Attr::new(ROWS, VR::US);
        attr.append_u16(256).unwrap();
        attr.append_i32(512).unwrap();
        assert!(matches!(attr.append_i16(-1), Err(Error::Data { .. })));
        assert!(matches!(attr.set_f64(0, 1.5), Err(Error::Data { .. })));
        assert_eq!(attr.try_get_u16(1), Some(512));
        assert_eq!(attr.get_i64(0).unwrap(), 256);
        assert_eq!(attr.try_get_i16(5), None);
        assert!(matches!(attr.get_u16(5), Err(Error::Index { .. })));
        assert_eq!(attr.to_value_string(), "256\\512");
        assert_eq!(attr.stream_length(), 4);
    }

    #[test]
    fn numbers_in_text_vrs() {
        let mut attr = Attr::new(Tag(0x0028, 0x1050), VR::DS);
        attr.append_f64(40.5).unwrap();
        attr.append_i32(-3).unwrap();
        assert_eq!(attr.to_value_string(), "40.5\\-3");
        assert_eq!(attr.try_get_f32(0), Some(40.5));
        assert_eq!(attr.try_get_i32(1), Some(-3));
        assert_eq!(attr.try_get_i32(0), None);
        assert!(matches!(attr.append_f64(f64::INFINITY), Err(Error::Data { .. })));

        let mut attr = Attr::new(Tag(0x0020, 0x0013), VR::IS);
        attr.set_u32(0, 7).unwrap();
        assert!(matches!(attr.append_f32(0.5), Err(Error::Data { .. })));
        assert_eq!(attr.to_value_string(), "7");

        let mut attr = Attr::new(PATIENT_NAME, VR::PN);
        assert!(matches!(
            attr.append_i32(1),
            Err(Error::InvalidType { .. })
        ));
        assert!(matches!(
            attr.get_i32(0),
            Err(Error::InvalidType { .. })
        ));
    }

    #[test]
    fn narrowing_reads_of_doubles() {
        let attr = Attr::with_str(Tag(0x0018, 0x9087), VR::FD, "1.5\\1e300").unwrap();
        assert_eq!(attr.try_get_f64(0), Some(1.5));
        assert_eq!(attr.try_get_i32(0), None);
        assert!(matches!(attr.get_i16(0), Err(Error::Data { .. })));
        assert_eq!(attr.try_get_f32(1), None);
        assert!(matches!(attr.get_f32(1), Err(Error::Data { .. })));

        let nan = Attr::with_str(Tag(0x0018, 0x9087), VR::FD, "NaN").unwrap();
        assert_eq!(nan, nan.clone());
    }

    #[test]
    fn time_ranges() {
        let mut attr = Attr::new(Tag(0x0008, 0x0030), VR::TM);
        attr.set_string(0, "080000-170000").unwrap();
        assert!(matches!(
            attr.set_string(1, "1-1-1-1-1-1-1-1-1-1-1-1-1-1-1"),
            Err(Error::Format { .. })
        ));
        assert_eq!(attr.count(), 1);
    }

    #[test]
    fn single_valued_text() {
        let mut attr = Attr::with_str(Tag(0x0020, 0x4000), VR::LT, "a\\b").unwrap();
        assert_eq!(attr.count(), 1);
        assert_eq!(attr.try_get_string(0).as_deref(), Some("a\\b"));
        assert!(matches!(attr.set_string(1, "c"), Err(Error::Data { .. })));
    }

    #[test]
    fn whitespace_handling() {
        let attr = Attr::with_str(Tag(0x0008, 0x0018), VR::UI, "1.2.3\0").unwrap();
        assert_eq!(attr.try_get_string(0).as_deref(), Some("1.2.3"));
        let attr = Attr::with_str(Tag(0x0010, 0x0020), VR::LO, " ID ").unwrap();
        assert_eq!(attr.try_get_string(0).as_deref(), Some(" ID "));
    }

    #[test]
    fn tags() {
        let mut attr = Attr::new(Tag(0x0020, 0x5000), VR::AT);
        attr.append_tag(Tag(0x7FE0, 0x0010)).unwrap();
        attr.append_string("00100010").unwrap();
        assert_eq!(attr.try_get_tag(1), Some(Tag(0x0010, 0x0010)));
        assert_eq!(attr.to_value_string(), "7FE00010\\00100010");
        assert!(matches!(attr.append_i16(-1), Err(Error::Data { .. })));
        assert!(matches!(
            Attr::new(ROWS, VR::US).set_tag(0, Tag(0, 0)),
            Err(Error::InvalidType { .. })
        ));
    }

    #[test]
    fn dates_and_times() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();
        let mut attr = Attr::new(Tag(0x0008, 0x0020), VR::DA);
        attr.set_date(0, date).unwrap();
        assert_eq!(attr.to_value_string(), "20231224");
        assert_eq!(attr.try_get_date(0), Some(date));
        assert!(attr.try_get_time(0).is_none());

        let time = NaiveTime::from_hms_opt(13, 45, 0).unwrap();
        let mut attr = Attr::new(Tag(0x0008, 0x0030), VR::TM);
        attr.set_time(0, time).unwrap();
        assert_eq!(attr.to_value_string(), "134500");
        assert_eq!(attr.try_get_time(0), Some(time));
        assert!(matches!(
            attr.set_date(0, date),
            Err(Error::InvalidType { .. })
        ));

        let mut attr = Attr::new(Tag(0x0008, 0x002A), VR::DT);
        attr.set_datetime(0, NaiveDateTime::new(date, time)).unwrap();
        assert_eq!(attr.try_get_date(0), Some(date));
        assert_eq!(attr.try_get_time(0), Some(time));
    }

    #[test]
    fn dictionary_checks() {
        assert!(Attr::new_in(&EmptyDictionary, ROWS, VR::LO).is_ok());
        let attr = Attr::from_dictionary(&EmptyDictionary, ROWS);
        assert_eq!(attr.vr(), VR::UN);
    }

    #[test]
    fn equality() {
        let a = Attr::with_str(ROWS, VR::US, "512").unwrap();
        let b = Attr::with_str(ROWS, VR::US, "0512").unwrap();
        assert_eq!(a, b);
        let c = Attr::with_str(ROWS, VR::SS, "512").unwrap();
        assert_ne!(a, c);
        let d = Attr::with_str(PATIENT_NAME, VR::PN, "A ").unwrap();
        let e = Attr::with_str(PATIENT_NAME, VR::PN, "A").unwrap();
        assert_ne!(d, e);
    }

    #[test]
    fn binary_replacement() {
        let mut attr = Attr::new(Tag(0x7FE0, 0x0010), VR::OW);
        attr.set_binary(BinaryValues::U16(vec![1, 2, 3].into()))
            .unwrap();
        assert_eq!(attr.count(), 3);
        assert!(attr
            .set_binary(BinaryValues::U8(vec![1].into()))
            .is_err());
        assert_eq!(
            attr.write_length(&IMPLICIT_VR_LITTLE_ENDIAN, &WriteOptions::default()),
            8 + 6
        );
        assert_eq!(
            attr.write_length(&EXPLICIT_VR_LITTLE_ENDIAN, &WriteOptions::default()),
            12 + 6
        );
    }

    #[test]
    fn deep_clone_detaches_buffers() {
        let mut attr = Attr::new(Tag(0x7FE0, 0x0010), VR::OB);
        attr.set_binary(BinaryValues::U8(vec![0u8; 20_000].into()))
            .unwrap();
        let shallow = attr.clone();
        let deep = attr.deep_clone();
        match (attr.binary(), shallow.binary(), deep.binary()) {
            (Some(BinaryValues::U8(a)), Some(BinaryValues::U8(s)), Some(BinaryValues::U8(d))) => {
                assert!(a.shares_buffer_with(s));
                assert!(!a.shares_buffer_with(d));
            }
            _ => unreachable!(),
        }
        assert_eq!(attr, deep);
    }
}
