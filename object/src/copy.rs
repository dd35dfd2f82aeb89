//! Copying attribute collections with a selection of their attributes.

use dicom_core::{AttributeValue, Tag, VR};
use tracing::debug;

use crate::collection::{AttributeCollection, CollectionAttribute};

/// Options for copying an attribute collection.
///
/// By default every attribute is copied,
/// and large binary values share their storage with the source.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct CopyOptions {
    /// Copy bulk binary attributes
    /// (`OB`, `OD`, `OF`, `OL`, `OV`, `OW` and encapsulated pixel data).
    pub binary: bool,
    /// Copy sequence attributes.
    pub sequences: bool,
    /// Copy attributes of private groups.
    pub private: bool,
    /// Copy attributes with the `UN` value representation.
    pub unknown: bool,
    /// Duplicate binary value buffers
    /// instead of sharing them with the source.
    pub deep: bool,
    /// Stop copying at this tag, excluding it.
    pub stop_tag: Option<Tag>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        CopyOptions {
            binary: true,
            sequences: true,
            private: true,
            unknown: true,
            deep: false,
            stop_tag: None,
        }
    }
}

impl CopyOptions {
    /// Create the default copy options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether bulk binary attributes are copied.
    pub fn binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Set whether sequence attributes are copied.
    pub fn sequences(mut self, sequences: bool) -> Self {
        self.sequences = sequences;
        self
    }

    /// Set whether private attributes are copied.
    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Set whether `UN` attributes are copied.
    pub fn unknown(mut self, unknown: bool) -> Self {
        self.unknown = unknown;
        self
    }

    /// Set whether binary value buffers are duplicated.
    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Stop copying at the given tag.
    pub fn stop_tag(mut self, tag: Tag) -> Self {
        self.stop_tag = Some(tag);
        self
    }

    fn admits<D>(&self, attr: &CollectionAttribute<D>) -> bool {
        let vr = attr.vr();
        if !self.private && attr.tag().is_private() {
            return false;
        }
        if !self.unknown && vr == VR::UN {
            return false;
        }
        if !self.sequences && vr == VR::SQ {
            return false;
        }
        if !self.binary && is_bulk_binary(attr) {
            return false;
        }
        true
    }
}

fn is_bulk_binary<D>(attr: &CollectionAttribute<D>) -> bool {
    matches!(attr.value(), AttributeValue::Fragments(_))
        || matches!(
            attr.vr(),
            VR::OB | VR::OD | VR::OF | VR::OL | VR::OV | VR::OW
        )
}

impl<D> AttributeCollection<D>
where
    D: Clone,
{
    /// Copy the collection.
    ///
    /// Bulk binary attributes and sequences may be left out.
    /// A deep copy duplicates binary value buffers,
    /// whereas a shallow copy shares them with this collection
    /// until either side modifies them.
    pub fn copy(&self, include_binary: bool, include_sequences: bool, deep: bool) -> Self {
        self.copy_with(
            &CopyOptions::new()
                .binary(include_binary)
                .sequences(include_sequences)
                .deep(deep),
        )
    }

    /// Copy the collection with the given selection of attributes.
    ///
    /// The options apply to sequence items as well.
    pub fn copy_with(&self, options: &CopyOptions) -> Self {
        let stop = options.stop_tag.unwrap_or(Tag::MAX);
        let entries = self
            .iter()
            .take_while(|attr| options.stop_tag.is_none() || attr.tag() < stop)
            .filter(|attr| options.admits(attr))
            .map(|attr| {
                let copied = if attr.items().is_some() {
                    attr.map_items(|item| item.copy_with(options))
                } else if options.deep {
                    attr.deep_clone()
                } else {
                    attr.clone()
                };
                (attr.tag(), copied)
            })
            .collect();
        let copy = self.with_entries(entries);
        debug!(
            "Copied {} of {} attributes{}",
            copy.len(),
            self.len(),
            if options.deep { " (deep)" } else { "" }
        );
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::value::PROMOTION_THRESHOLD;
    use dicom_core::{Attribute, BinaryValues};
    use dicom_dictionary_std::tags;

    fn sample() -> AttributeCollection {
        let mut obj = AttributeCollection::new();
        obj.get_or_insert(tags::PATIENT_NAME)
            .unwrap()
            .set_string_value("Doe^John")
            .unwrap();
        obj.get_or_insert_with_vr(Tag(0x0009, 0x1001), VR::LO)
            .unwrap()
            .set_string_value("private")
            .unwrap();
        obj.put(Attribute::with_str(Tag(0x0011, 0x0010), VR::UN, "1\\2").unwrap())
            .unwrap();

        let mut item = obj.new_item();
        item.get_or_insert(tags::REFERENCED_SOP_INSTANCE_UID)
            .unwrap()
            .set_string_value("1.2.3.4")
            .unwrap();
        item.get_or_insert_with_vr(tags::PIXEL_DATA, VR::OB)
            .unwrap()
            .set_string_value("1\\2\\3\\4")
            .unwrap();
        obj.put(Attribute::new_sequence(
            tags::REFERENCED_IMAGE_SEQUENCE,
            vec![item],
        ))
        .unwrap();

        let pixels: Vec<u16> = (0..PROMOTION_THRESHOLD as u16).collect();
        let attr = obj.get_or_insert_with_vr(tags::PIXEL_DATA, VR::OW).unwrap();
        attr.set_binary(BinaryValues::U16(pixels.into())).unwrap();
        obj
    }

    #[test]
    fn full_copy_is_equal() {
        let obj = sample();
        let copy = obj.copy(true, true, false);
        assert_eq!(copy, obj);
        assert_eq!(copy.len(), obj.len());
        let copy = obj.copy(true, true, true);
        assert_eq!(copy, obj);
    }

    #[test]
    fn shallow_copy_shares_buffers() {
        let obj = sample();
        let buffer = |o: &AttributeCollection| match o.get(tags::PIXEL_DATA).and_then(|a| a.binary())
        {
            Some(BinaryValues::U16(buf)) => buf.clone(),
            other => panic!("unexpected value {:?}", other),
        };
        let original = buffer(&obj);
        assert!(original.is_buffered());

        let shallow = obj.copy(true, true, false);
        assert!(buffer(&shallow).shares_buffer_with(&original));
        let deep = obj.copy(true, true, true);
        assert!(!buffer(&deep).shares_buffer_with(&original));
        assert_eq!(buffer(&deep).to_vec(), original.to_vec());
    }

    #[test]
    fn selective_copy() {
        let obj = sample();

        let copy = obj.copy(false, true, false);
        assert!(!copy.contains(tags::PIXEL_DATA));
        let items = copy
            .get(tags::REFERENCED_IMAGE_SEQUENCE)
            .and_then(|a| a.items())
            .unwrap();
        assert!(!items[0].contains(tags::PIXEL_DATA));
        assert!(items[0].contains(tags::REFERENCED_SOP_INSTANCE_UID));

        let copy = obj.copy(true, false, false);
        assert!(!copy.contains(tags::REFERENCED_IMAGE_SEQUENCE));
        assert!(copy.contains(tags::PIXEL_DATA));

        let copy = obj.copy_with(&CopyOptions::new().private(false).unknown(false));
        assert!(!copy.contains(Tag(0x0009, 0x1001)));
        assert!(!copy.contains(Tag(0x0011, 0x0010)));
        assert!(copy.contains(tags::PATIENT_NAME));

        let copy = obj.copy_with(&CopyOptions::new().stop_tag(Tag(0x0009, 0x1001)));
        assert_eq!(copy.tags().collect::<Vec<_>>(), vec![tags::REFERENCED_IMAGE_SEQUENCE]);
    }
}
