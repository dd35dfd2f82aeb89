//! This module contains the attribute collection,
//! a data set held in memory.

use std::borrow::Cow;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_core::header::GroupNumber;
use dicom_core::transfer_syntax::TransferSyntax;
use dicom_core::write::{sequence_length, GROUP_LENGTH_ELEMENT_LEN};
use dicom_core::{Attribute, Tag, WriteLength, WriteOptions, VR};
use dicom_dictionary_std::{tags, StandardDataDictionary};
use dicom_encoding::text::{SpecificCharacterSet, TextCodec};
use smallvec::SmallVec;
use snafu::{ensure, ResultExt};
use tracing::{debug, warn};

use crate::{AttributeSnafu, ExistingVrSnafu, OutOfRangeTagSnafu, Result};

/// An attribute of a collection,
/// whose sequence items are collections themselves.
pub type CollectionAttribute<D = StandardDataDictionary> = Attribute<AttributeCollection<D>>;

/// Options for creating an attribute collection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CollectionOptions {
    /// The lowest tag accepted by the collection.
    pub start: Tag,
    /// The highest tag accepted by the collection.
    pub end: Tag,
    /// Accept tags outside of `[start, end]` with a warning
    /// instead of failing.
    pub ignore_out_of_range_tags: bool,
    /// The character set of the collection's text.
    /// When `None`, it is taken from the _Specific Character Set_ attribute
    /// or from the enclosing collection.
    pub specific_character_set: Option<SpecificCharacterSet>,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        CollectionOptions {
            start: Tag::MIN,
            end: Tag::MAX,
            ignore_out_of_range_tags: false,
            specific_character_set: None,
        }
    }
}

impl CollectionOptions {
    /// Create the default options:
    /// every tag is accepted
    /// and the character set is taken from the data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept tags within `[start, end]`.
    pub fn tag_range(mut self, start: Tag, end: Tag) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set whether tags out of range are accepted with a warning.
    pub fn ignore_out_of_range_tags(mut self, ignore: bool) -> Self {
        self.ignore_out_of_range_tags = ignore;
        self
    }

    /// Fix the character set of the collection.
    pub fn specific_character_set(mut self, charset: SpecificCharacterSet) -> Self {
        self.specific_character_set = Some(charset);
        self
    }

    pub(crate) fn check_range(&self, tag: Tag) -> Result<()> {
        let CollectionOptions { start, end, .. } = *self;
        if tag >= start && tag <= end {
            return Ok(());
        }
        ensure!(
            self.ignore_out_of_range_tags,
            OutOfRangeTagSnafu { tag, start, end }
        );
        warn!(
            "Accepting tag {} out of collection range {} to {}",
            tag, start, end
        );
        Ok(())
    }
}

/// A DICOM data set fully contained in memory:
/// attributes ordered by tag.
#[derive(Debug, Clone)]
pub struct AttributeCollection<D = StandardDataDictionary> {
    entries: BTreeMap<Tag, CollectionAttribute<D>>,
    dict: D,
    options: CollectionOptions,
}

impl AttributeCollection<StandardDataDictionary> {
    /// Create an empty collection using the standard data dictionary.
    pub fn new() -> Self {
        Self::new_with_dict(StandardDataDictionary)
    }

    /// Create an empty collection using the standard data dictionary
    /// and the given options.
    pub fn with_options(options: CollectionOptions) -> Self {
        Self::new_with_dict_and_options(StandardDataDictionary, options)
    }
}

impl Default for AttributeCollection<StandardDataDictionary> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> AttributeCollection<D> {
    /// Create an empty collection using the given data dictionary.
    pub fn new_with_dict(dict: D) -> Self {
        Self::new_with_dict_and_options(dict, CollectionOptions::default())
    }

    /// Create an empty collection using the given data dictionary and options.
    pub fn new_with_dict_and_options(dict: D, options: CollectionOptions) -> Self {
        AttributeCollection {
            entries: BTreeMap::new(),
            dict,
            options,
        }
    }

    /// The options of this collection.
    pub fn options(&self) -> &CollectionOptions {
        &self.options
    }

    /// The lowest tag accepted by this collection.
    pub fn start_tag(&self) -> Tag {
        self.options.start
    }

    /// The highest tag accepted by this collection.
    pub fn end_tag(&self) -> Tag {
        self.options.end
    }

    /// Whether tags out of range are accepted.
    pub fn ignore_out_of_range_tags(&self) -> bool {
        self.options.ignore_out_of_range_tags
    }

    /// Set whether tags out of range are accepted with a warning.
    pub fn set_ignore_out_of_range_tags(&mut self, ignore: bool) {
        self.options.ignore_out_of_range_tags = ignore;
    }

    /// Fix the character set of this collection,
    /// or let it be taken from the data again with `None`.
    ///
    /// The _Specific Character Set_ attribute is not modified.
    pub fn set_specific_character_set(&mut self, charset: Option<SpecificCharacterSet>) {
        self.options.specific_character_set = charset;
    }

    /// The character set declared by this collection,
    /// either fixed through its options
    /// or read from its _Specific Character Set_ attribute.
    ///
    /// `None` means that the collection inherits the character set
    /// of its enclosing collection.
    pub fn specific_character_set(&self) -> Option<SpecificCharacterSet> {
        self.options.specific_character_set.or_else(|| {
            let attr = self.entries.get(&tags::SPECIFIC_CHARACTER_SET)?;
            if attr.count() == 0 {
                return None;
            }
            let codes: SmallVec<[Cow<str>; 2]> =
                (0..attr.count()).filter_map(|i| attr.try_get_string(i)).collect();
            let charset = SpecificCharacterSet::from_codes(codes.iter().map(|c| c.as_ref()));
            if charset.is_none() {
                warn!(
                    "Unsupported specific character set `{}`, ignoring it",
                    attr.to_value_string()
                );
            }
            charset
        })
    }

    /// The number of attributes, including empty ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every attribute of the collection is empty.
    pub fn has_no_values(&self) -> bool {
        self.entries.values().all(|attr| attr.is_empty())
    }

    /// Whether an attribute with this tag exists.
    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Retrieve the attribute with the given tag, if it exists.
    pub fn get(&self, tag: Tag) -> Option<&CollectionAttribute<D>> {
        self.entries.get(&tag)
    }

    /// Retrieve the attribute with the given tag for modification,
    /// if it exists.
    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut CollectionAttribute<D>> {
        self.entries.get_mut(&tag)
    }

    /// Remove the attribute with the given tag,
    /// returning it if it existed.
    pub fn remove(&mut self, tag: Tag) -> Option<CollectionAttribute<D>> {
        self.entries.remove(&tag)
    }

    /// Remove all attributes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Insert an attribute, replacing the one with the same tag.
    ///
    /// Returns the replaced attribute, if any.
    pub fn put(&mut self, attr: CollectionAttribute<D>) -> Result<Option<CollectionAttribute<D>>> {
        let tag = attr.tag();
        self.options.check_range(tag)?;
        Ok(self.entries.insert(tag, attr))
    }

    /// Iterate over all attributes in tag order.
    pub fn iter(&self) -> impl Iterator<Item = &CollectionAttribute<D>> + '_ {
        self.entries.values()
    }

    /// Iterate over the tags of all attributes in order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over the attributes which count for comparison and encoding:
    /// neither empty nor group length elements.
    pub(crate) fn present(&self) -> impl Iterator<Item = &CollectionAttribute<D>> + '_ {
        self.entries
            .values()
            .filter(|attr| !attr.is_empty() && !attr.tag().is_group_length())
    }

    pub(crate) fn with_entries(&self, entries: BTreeMap<Tag, CollectionAttribute<D>>) -> Self
    where
        D: Clone,
    {
        AttributeCollection {
            entries,
            dict: self.dict.clone(),
            options: self.options,
        }
    }
}

impl<D> AttributeCollection<D>
where
    D: DataDictionary,
{
    /// Retrieve the attribute with the given tag,
    /// creating an empty one if it does not exist yet.
    ///
    /// The new attribute takes the VR declared by the data dictionary,
    /// or [`UN`](VR::UN) if the tag is unknown.
    /// Use [`get_or_insert_with_vr`](Self::get_or_insert_with_vr)
    /// for private attributes.
    pub fn get_or_insert(&mut self, tag: Tag) -> Result<&mut CollectionAttribute<D>> {
        match self.entries.entry(tag) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                self.options.check_range(tag)?;
                let attr = Attribute::from_dictionary(&self.dict, tag);
                debug!("Creating attribute {} with VR {}", tag, attr.vr());
                Ok(e.insert(attr))
            }
        }
    }

    /// Retrieve the attribute with the given tag,
    /// creating an empty one with the given VR if it does not exist yet.
    ///
    /// Fails if the data dictionary declares another VR for a standard tag,
    /// or if the attribute already exists with another VR.
    pub fn get_or_insert_with_vr(
        &mut self,
        tag: Tag,
        vr: VR,
    ) -> Result<&mut CollectionAttribute<D>> {
        match self.entries.entry(tag) {
            Entry::Occupied(e) => {
                let existing = e.get().vr();
                ensure!(existing == vr, ExistingVrSnafu { tag, vr, existing });
                Ok(e.into_mut())
            }
            Entry::Vacant(e) => {
                self.options.check_range(tag)?;
                let attr =
                    Attribute::new_in(&self.dict, tag, vr).context(AttributeSnafu { tag })?;
                debug!("Creating attribute {} with VR {}", tag, vr);
                Ok(e.insert(attr))
            }
        }
    }

    /// The keyword of the given tag according to the data dictionary.
    pub fn tag_name(&self, tag: Tag) -> Option<&str> {
        self.dict.by_tag(tag).map(|entry| entry.alias())
    }
}

impl<D> AttributeCollection<D>
where
    D: Clone,
{
    /// Create an empty collection suitable as a sequence item of this one,
    /// with the same data dictionary.
    ///
    /// The item accepts every tag,
    /// and inherits the character set of this collection
    /// unless it declares its own.
    pub fn new_item(&self) -> Self {
        AttributeCollection {
            entries: BTreeMap::new(),
            dict: self.dict.clone(),
            options: CollectionOptions {
                ignore_out_of_range_tags: self.options.ignore_out_of_range_tags,
                ..CollectionOptions::default()
            },
        }
    }
}

impl<D> AttributeCollection<D> {
    /// The length of the value of the attribute with the given tag
    /// once encoded with the collection's character set,
    /// padded to an even length.
    ///
    /// Returns `None` if there is no such attribute.
    pub fn stream_length(&self, tag: Tag) -> Option<u32> {
        let charset = self.effective_charset(None);
        self.entries
            .get(&tag)
            .map(|attr| attr_stream_length(attr, charset))
    }

    /// The number of bytes taken by all non-empty attributes in the group,
    /// excluding its group length element.
    pub fn group_write_length(
        &self,
        group: GroupNumber,
        ts: &TransferSyntax,
        options: &WriteOptions,
    ) -> u32 {
        let charset = self.effective_charset(None);
        self.present()
            .filter(|attr| attr.tag().group() == group)
            .map(|attr| attr_write_length(attr, ts, options, charset))
            .sum()
    }

    /// The number of bytes taken by the attributes within `[start, stop]`
    /// once encoded.
    ///
    /// Empty attributes and group length elements are skipped.
    /// If group lengths are requested by the options,
    /// a group length element is accounted for at the start of each group.
    pub fn write_length_range(
        &self,
        start: Tag,
        stop: Tag,
        ts: &TransferSyntax,
        options: &WriteOptions,
    ) -> u32 {
        self.write_length_in(start, stop, ts, options, None)
    }

    fn effective_charset(&self, inherited: Option<SpecificCharacterSet>) -> SpecificCharacterSet {
        self.specific_character_set()
            .or(inherited)
            .unwrap_or_default()
    }

    fn write_length_in(
        &self,
        start: Tag,
        stop: Tag,
        ts: &TransferSyntax,
        options: &WriteOptions,
        inherited: Option<SpecificCharacterSet>,
    ) -> u32 {
        let charset = self.effective_charset(inherited);
        let mut length = 0;
        let mut group = None;
        for attr in self.present() {
            let tag = attr.tag();
            if tag < start {
                continue;
            }
            if tag > stop {
                break;
            }
            if group != Some(tag.group()) {
                group = Some(tag.group());
                if options.calculate_group_lengths {
                    length += GROUP_LENGTH_ELEMENT_LEN;
                }
            }
            length += attr_write_length(attr, ts, options, charset);
        }
        length
    }
}

impl<D> WriteLength for AttributeCollection<D> {
    fn write_length(&self, ts: &TransferSyntax, options: &WriteOptions) -> u32 {
        self.write_length_range(Tag::MIN, Tag::MAX, ts, options)
    }
}

fn attr_stream_length<D>(attr: &CollectionAttribute<D>, charset: SpecificCharacterSet) -> u32 {
    if attr.vr().info().specific_character_set {
        if let Some(len) = attr.text_length_with(|s| charset.encoded_len(s)) {
            return len;
        }
    }
    attr.stream_length()
}

fn attr_write_length<D>(
    attr: &CollectionAttribute<D>,
    ts: &TransferSyntax,
    options: &WriteOptions,
    charset: SpecificCharacterSet,
) -> u32 {
    match attr.items() {
        Some(items) => sequence_length(
            ts,
            options,
            items.iter().map(|item| {
                item.write_length_in(Tag::MIN, Tag::MAX, ts, options, Some(charset))
            }),
        ),
        None if attr.fragments().is_some() => attr.write_length(ts, options),
        None => attr.vr().header_len(ts.is_explicit_vr()) + attr_stream_length(attr, charset),
    }
}

impl<D> PartialEq for AttributeCollection<D> {
    /// Compares the attributes which are not empty,
    /// ignoring group length elements,
    /// the data dictionary and the collection options.
    fn eq(&self, other: &Self) -> bool {
        self.present().eq(other.present())
    }
}

impl<D> Extend<CollectionAttribute<D>> for AttributeCollection<D> {
    /// Insert the attributes, replacing existing ones.
    ///
    /// Attributes out of range are skipped
    /// unless the collection accepts them.
    fn extend<T: IntoIterator<Item = CollectionAttribute<D>>>(&mut self, iter: T) {
        for attr in iter {
            if let Err(e) = self.put(attr) {
                warn!("Skipping attribute: {}", e);
            }
        }
    }
}

impl<'a, D> IntoIterator for &'a AttributeCollection<D> {
    type Item = &'a CollectionAttribute<D>;
    type IntoIter = std::collections::btree_map::Values<'a, Tag, CollectionAttribute<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
