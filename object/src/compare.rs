//! Attribute collection comparison with diagnostics.

use std::fmt;

use dicom_core::dictionary::DataDictionary;
use itertools::{EitherOrBoth, Itertools};

use crate::collection::{AttributeCollection, CollectionAttribute};

/// Attributes with a stream length under this many bytes
/// have their values printed in comparison details.
const DETAILS_MAX_LENGTH: u32 = 64;

/// The kind of difference found between two collections.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ComparisonResultType {
    /// An attribute is present in only one of the collections.
    DifferentAttributeSet,
    /// An attribute has different values in each collection.
    DifferentValues,
}

/// A difference found between two attribute collections.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    /// The kind of difference.
    pub result_type: ComparisonResultType,
    /// The keyword of the attribute, if known to the dictionary.
    pub tag_name: Option<String>,
    /// A human readable description of the difference.
    pub details: String,
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.tag_name {
            Some(name) => write!(f, "{}: {}", name, self.details),
            None => f.write_str(&self.details),
        }
    }
}

impl<D> AttributeCollection<D>
where
    D: DataDictionary,
{
    /// Compare this collection with another one,
    /// returning a diagnostic for each attribute which differs.
    ///
    /// As with equality,
    /// empty attributes and group length elements are not compared.
    /// An empty list means that the collections are equal.
    pub fn compare(&self, other: &AttributeCollection<D>) -> Vec<ComparisonResult> {
        self.present()
            .merge_join_by(other.present(), |a, b| a.tag().cmp(&b.tag()))
            .filter_map(|pair| match pair {
                EitherOrBoth::Left(attr) => Some(self.missing(attr, "comparison")),
                EitherOrBoth::Right(attr) => Some(self.missing(attr, "base")),
                EitherOrBoth::Both(a, b) if a != b => Some(self.different(a, b)),
                EitherOrBoth::Both(..) => None,
            })
            .collect()
    }

    fn missing(&self, attr: &CollectionAttribute<D>, side: &str) -> ComparisonResult {
        ComparisonResult {
            result_type: ComparisonResultType::DifferentAttributeSet,
            tag_name: self.tag_name(attr.tag()).map(String::from),
            details: format!("Tag {} is missing in the {} collection", attr.tag(), side),
        }
    }

    fn different(&self, a: &CollectionAttribute<D>, b: &CollectionAttribute<D>) -> ComparisonResult {
        let tag = a.tag();
        let details = if a.vr() != b.vr() {
            format!("Tag {} has VR {} in base and {} in comparison", tag, a.vr(), b.vr())
        } else if let (Some(x), Some(y)) = (a.items(), b.items()) {
            match x.iter().zip(y).position(|(x, y)| x != y) {
                Some(i) => format!("Tag {} differs in sequence item {}", tag, i),
                None => format!(
                    "Tag {} has {} items in base and {} in comparison",
                    tag,
                    x.len(),
                    y.len()
                ),
            }
        } else if a.stream_length() < DETAILS_MAX_LENGTH && b.stream_length() < DETAILS_MAX_LENGTH
        {
            format!(
                "Tag {} values not equal, base value: '{}', comparison value: '{}'",
                tag,
                a.to_value_string(),
                b.to_value_string()
            )
        } else {
            format!("Tag {} values not equal", tag)
        };
        ComparisonResult {
            result_type: ComparisonResultType::DifferentValues,
            tag_name: self.tag_name(tag).map(String::from),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{Attribute, Tag, VR};
    use dicom_dictionary_std::tags;

    fn with_name(name: &str) -> AttributeCollection {
        let mut obj = AttributeCollection::new();
        obj.get_or_insert(tags::PATIENT_NAME)
            .unwrap()
            .set_string_value(name)
            .unwrap();
        obj
    }

    #[test]
    fn equal_collections_have_no_diagnostics() {
        let a = with_name("Doe^John");
        let mut b = with_name("Doe^John");
        b.get_or_insert(tags::PATIENT_ID).unwrap();
        assert!(a.compare(&b).is_empty());
    }

    #[test]
    fn value_differences() {
        let a = with_name("Doe^John");
        let b = with_name("Doe^Jane");
        let results = a.compare(&b);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].result_type, ComparisonResultType::DifferentValues);
        assert_eq!(results[0].tag_name.as_deref(), Some("PatientName"));
        assert!(results[0].details.contains("'Doe^John'"));
        assert!(results[0].details.contains("'Doe^Jane'"));

        let long_a = with_name(&"A".repeat(70));
        let long_b = with_name(&"B".repeat(70));
        let results = long_a.compare(&long_b);
        assert_eq!(results[0].details, "Tag (0010,0010) values not equal");
    }

    #[test]
    fn attribute_set_differences() {
        let mut a = with_name("Doe^John");
        let mut b = with_name("Doe^John");
        a.get_or_insert(tags::MODALITY)
            .unwrap()
            .set_string_value("MR")
            .unwrap();
        b.put(Attribute::with_str(Tag(0x0009, 0x1001), VR::LO, "x").unwrap())
            .unwrap();

        let results = a.compare(&b);
        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .all(|r| r.result_type == ComparisonResultType::DifferentAttributeSet));
        assert_eq!(results[0].tag_name.as_deref(), Some("Modality"));
        assert_eq!(results[1].tag_name, None);
        assert_eq!(
            results[1].to_string(),
            "Tag (0009,1001) is missing in the base collection"
        );
    }

    #[test]
    fn sequence_differences() {
        let mut a = AttributeCollection::new();
        let mut b = AttributeCollection::new();
        let item_a = with_name("Doe^John");
        let item_b = with_name("Doe^Jane");
        a.put(Attribute::new_sequence(
            tags::REFERENCED_STUDY_SEQUENCE,
            vec![item_a.clone(), item_a.clone()],
        ))
        .unwrap();
        b.put(Attribute::new_sequence(
            tags::REFERENCED_STUDY_SEQUENCE,
            vec![item_a, item_b],
        ))
        .unwrap();

        let results = a.compare(&b);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].details,
            "Tag (0008,1110) differs in sequence item 1"
        );
    }
}
