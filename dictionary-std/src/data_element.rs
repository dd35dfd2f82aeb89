//! The standard attribute dictionary.

use crate::tags::ENTRIES;
use dicom_core::dictionary::{
    DataDictionary, DataDictionaryEntryRef, Multiplicity, TagRange, VirtualVr,
};
use dicom_core::header::Tag;
use dicom_core::VR;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

type Entry = DataDictionaryEntryRef<'static>;

static REGISTRY: Lazy<StandardDataDictionaryRegistry> =
    Lazy::new(StandardDataDictionaryRegistry::build);

/// The lazily built index behind [`StandardDataDictionary`].
///
/// Most code does not need this,
/// as the dictionary type already queries it.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &REGISTRY
}

/// Index over the standard attribute table.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    keywords: HashMap<&'static str, &'static Entry>,
    single: HashMap<Tag, &'static Entry>,
    /// `(ggxx,eeee)` and `(gggg,eexx)` entries, tried in table order
    repeating: Vec<&'static Entry>,
}

/// `(gggg,0000)` of groups without a dedicated entry.
static GROUP_LENGTH: Entry = DataDictionaryEntryRef {
    tag: TagRange::GroupLength,
    alias: "GenericGroupLength",
    vr: VirtualVr::Exact(VR::UL),
    vm: Multiplicity::ONE,
    retired: false,
};

/// `(gggg,0010-00FF)` of odd groups.
static PRIVATE_CREATOR: Entry = DataDictionaryEntryRef {
    tag: TagRange::PrivateCreator,
    alias: "PrivateCreator",
    vr: VirtualVr::Exact(VR::LO),
    vm: Multiplicity::ONE,
    retired: false,
};

impl StandardDataDictionaryRegistry {
    fn build() -> Self {
        let mut keywords = HashMap::with_capacity(ENTRIES.len() + 2);
        let mut single = HashMap::with_capacity(ENTRIES.len());
        let mut repeating = Vec::new();
        for entry in ENTRIES {
            keywords.insert(entry.alias, entry);
            match entry.tag {
                TagRange::Single(tag) => {
                    single.insert(tag, entry);
                }
                _ => repeating.push(entry),
            }
        }
        for generic in [&GROUP_LENGTH, &PRIVATE_CREATOR] {
            keywords.insert(generic.alias, generic);
        }
        StandardDataDictionaryRegistry {
            keywords,
            single,
            repeating,
        }
    }

    fn lookup(&self, tag: Tag) -> Option<&'static Entry> {
        if let Some(&entry) = self.single.get(&tag) {
            return Some(entry);
        }
        if let Some(&entry) = self.repeating.iter().find(|e| e.tag.contains(tag)) {
            return Some(entry);
        }
        if tag.is_private_creator() {
            Some(&PRIVATE_CREATOR)
        } else if tag.is_group_length() {
            Some(&GROUP_LENGTH)
        } else {
            None
        }
    }

    /// The number of attributes in the table.
    pub fn len(&self) -> usize {
        ENTRIES.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        ENTRIES.is_empty()
    }

    /// All attributes of the table, in tag order.
    pub fn entries(&self) -> impl Iterator<Item = &'static Entry> {
        ENTRIES.iter()
    }
}

/// The dictionary of standard DICOM attributes.
///
/// Repeating groups such as overlays resolve to their `(60xx,eeee)` entry.
/// Any group length and any private creator element
/// resolve to a generic entry.
/// The index is built on first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    type Entry = Entry;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().keywords.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        registry().lookup(tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use crate::tags;
    use dicom_core::dictionary::{
        DataDictionary, DataDictionaryEntry, DataDictionaryEntryRef, Multiplicity, TagRange::*,
        VirtualVr,
    };
    use dicom_core::header::{Tag, VR};

    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DataDictionaryEntryRef {
                tag: Single(Tag(0x0010, 0x0010)),
                alias: "PatientName",
                vr: VirtualVr::Exact(VR::PN),
                vm: Multiplicity::ONE,
                retired: false,
            })
        );

        let pixel_data = dict
            .by_tag(tags::PIXEL_DATA)
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.tag, Single(Tag(0x7FE0, 0x0010)));
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, VirtualVr::Px);
        assert!(pixel_data.vr.admits(VR::OB));
        assert!(pixel_data.vr.admits(VR::OW));
        assert!(!pixel_data.vr.admits(VR::US));
    }

    #[test]
    fn repeating_groups() {
        let dict = StandardDataDictionary;

        let overlay_data = dict
            .by_tag(Tag(0x6000, 0x3000))
            .expect("Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Group100(Tag(0x6000, 0x3000)));
        assert_eq!(overlay_data.alias, "OverlayData");
        assert_eq!(overlay_data.vr, VirtualVr::Ox);

        let overlay_data = dict
            .by_tag(Tag(0x60EE, 0x3000))
            .expect("Repeated Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Group100(Tag(0x6000, 0x3000)));
        assert_eq!(overlay_data.tag(), Tag(0x6000, 0x3000));

        let origin = dict.by_tag(Tag(0x6002, 0x0050)).unwrap();
        assert_eq!(origin.vm(), Multiplicity::new(2, 2));
        assert_eq!(origin.vr().relaxed(), VR::SS);

        assert_eq!(dict.by_tag(Tag(0x6102, 0x0050)), None);
    }

    #[test]
    fn multiplicity_and_retirement() {
        let dict = StandardDataDictionary;

        let charset = dict.by_tag(tags::SPECIFIC_CHARACTER_SET).unwrap();
        assert_eq!(charset.vm(), Multiplicity::ONE_OR_MORE);
        assert!(!charset.is_retired());

        let image_type = dict.by_tag(tags::IMAGE_TYPE).unwrap();
        assert_eq!(image_type.vm().to_string(), "2-n");
        assert!(!image_type.vm().admits(1));

        let other_ids = dict.by_name("OtherPatientIDs").unwrap();
        assert!(other_ids.is_retired());

        let smallest = dict.by_tag(tags::SMALLEST_IMAGE_PIXEL_VALUE).unwrap();
        assert_eq!(smallest.vr(), VirtualVr::Xs);
        assert_eq!(smallest.vr().relaxed(), VR::US);
    }

    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(STATUS, Tag(0x0000, 0x0900));
        assert_eq!(OVERLAY_DATA, Tag(0x6000, 0x3000));
    }

    #[test]
    fn every_entry_is_indexed() {
        let dict = StandardDataDictionary;
        let registry = super::registry();
        assert!(!registry.is_empty());
        for entry in registry.entries() {
            assert_eq!(dict.by_name(entry.alias), Some(entry));
            assert_eq!(dict.by_tag(entry.tag.inner()), Some(entry));
        }
    }

    #[test]
    fn can_parse_tags() {
        let dict = StandardDataDictionary;

        assert_eq!(dict.parse_tag("(7FE0,0010)"), Some(tags::PIXEL_DATA));
        assert_eq!(dict.parse_tag("0010,21C0"), Some(Tag(0x0010, 0x21C0)));
        assert_eq!(dict.parse_tag("OperatorsName"), Some(tags::OPERATORS_NAME));

        assert_eq!(dict.parse_tag(""), None);
        assert_eq!(dict.parse_tag("1111,2222,3333"), None);
        assert_eq!(dict.parse_tag("OperatorNickname"), None);
    }

    #[test]
    fn can_query_by_expression() {
        let dict = StandardDataDictionary;

        let entry = dict.by_expr("(0008,0050)").unwrap();
        assert_eq!(entry.alias, "AccessionNumber");
        assert_eq!(entry.vr, VirtualVr::Exact(VR::SH));

        let entry = dict.by_expr("OperatorsName").unwrap();
        assert_eq!(entry.tag, Single(tags::OPERATORS_NAME));
        assert_eq!(entry.vm, Multiplicity::ONE_OR_MORE);

        assert_eq!(dict.by_expr("0080 0010"), None);
        assert_eq!(dict.by_expr("OPERATORSNAME"), None);
    }

    #[test]
    fn has_group_length_tags() {
        let dict = StandardDataDictionary;

        let entry = dict.by_tag(tags::FILE_META_INFORMATION_GROUP_LENGTH).unwrap();
        assert_eq!(entry.alias, "FileMetaInformationGroupLength");
        assert_eq!(entry.tag, Single(Tag(0x0002, 0x0000)));

        let entry = dict.by_tag(tags::COMMAND_GROUP_LENGTH).unwrap();
        assert_eq!(entry.alias, "CommandGroupLength");

        let generic = DataDictionaryEntryRef {
            tag: GroupLength,
            alias: "GenericGroupLength",
            vr: VirtualVr::Exact(VR::UL),
            vm: Multiplicity::ONE,
            retired: false,
        };
        assert_eq!(dict.by_tag(Tag(0x7FE0, 0x0000)), Some(&generic));
        assert_eq!(dict.by_name("GenericGroupLength"), Some(&generic));
    }

    #[test]
    fn has_private_creator() {
        let dict = StandardDataDictionary;

        let private_creator = DataDictionaryEntryRef {
            tag: PrivateCreator,
            alias: "PrivateCreator",
            vr: VirtualVr::Exact(VR::LO),
            vm: Multiplicity::ONE,
            retired: false,
        };

        assert_eq!(dict.by_tag(Tag(0x0009, 0x0010)), Some(&private_creator));
        assert_eq!(dict.by_tag(Tag(0x000B, 0x0010)), Some(&private_creator));
        assert_eq!(dict.by_tag(Tag(0x00ED, 0x00FF)), Some(&private_creator));
        // private data elements are not known
        assert_eq!(dict.by_tag(Tag(0x0009, 0x1000)), None);
    }
}
