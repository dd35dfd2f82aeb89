//! Attribute dictionaries.
//!
//! The attribute model consults a dictionary to learn
//! which value representation an attribute is declared with
//! when it is created from its tag alone.
//! A dictionary entry also holds the attribute keyword,
//! its value multiplicity and whether it is retired.
//! The standard dictionary lives in the `dicom-dictionary-std` crate.

use std::fmt;
use std::str::FromStr;

use snafu::{ensure, Backtrace, OptionExt, Snafu};

use crate::header::{Tag, VR};

/// The tags covered by a dictionary entry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TagRange {
    /// Exactly one tag.
    Single(Tag),
    /// A repeating group, `(ggxx,eeee)`.
    /// The low byte of the group in the inner tag is zero.
    Group100(Tag),
    /// A repeating element, `(gggg,eexx)`.
    /// The low byte of the element in the inner tag is zero.
    Element100(Tag),
    /// Any group length element, `(gggg,0000)`.
    GroupLength,
    /// Any private creator element,
    /// `(gggg,0010)` to `(gggg,00FF)` of an odd group.
    PrivateCreator,
}

impl TagRange {
    /// A representative tag of the range.
    ///
    /// Open digits are zero.
    /// Group lengths give `(0000,0000)`
    /// and private creators give `(0009,0010)`.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) | TagRange::Group100(tag) | TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag::MIN,
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Whether the range covers the given tag.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => tag.group() & 0xFF00 == t.group() && tag.element() == t.element(),
            TagRange::Element100(t) => tag.group() == t.group() && tag.element() & 0xFF00 == t.element(),
            TagRange::GroupLength => tag.is_group_length(),
            TagRange::PrivateCreator => tag.is_private_creator(),
        }
    }
}

/// The text is not a tag range expression.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagRangeError {
    /// Not of the form `gggg,eeee`, with optional parentheses.
    #[snafu(display("Expected `gggg,eeee`, got `{}`", text))]
    Syntax {
        /// The text given.
        text: String,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
    /// A component is not hexadecimal.
    #[snafu(display("Invalid tag component `{}`", component))]
    Component {
        /// The offending group or element.
        component: String,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
    /// Both group and element are open.
    #[snafu(display("Unsupported tag range `{}`", text))]
    Unsupported {
        /// The text given.
        text: String,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
}

/// Parse one tag component of four characters.
/// The last two may be `xx`, leaving the low byte open.
/// Gives the value with open digits as zero,
/// and whether they were open.
fn parse_component(component: &str) -> Result<(u16, bool), ParseTagRangeError> {
    let (digits, open) = match component.strip_suffix("xx") {
        Some(high) => (high, true),
        None => (component, false),
    };
    let valid = digits.len() == if open { 2 } else { 4 }
        && digits.bytes().all(|c| c.is_ascii_hexdigit());
    ensure!(valid, ComponentSnafu { component });
    let value = u16::from_str_radix(digits, 16)
        .ok()
        .context(ComponentSnafu { component })?;
    Ok(if open { (value << 8, true) } else { (value, false) })
}

impl FromStr for TagRange {
    type Err = ParseTagRangeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let inner = text
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(text);
        let (group, element) = inner.split_once(',').context(SyntaxSnafu { text })?;
        ensure!(!element.contains(','), SyntaxSnafu { text });
        let (group, open_group) = parse_component(group.trim())?;
        let (element, open_element) = parse_component(element.trim())?;
        match (open_group, open_element) {
            (false, false) => Ok(TagRange::Single(Tag(group, element))),
            (true, false) => Ok(TagRange::Group100(Tag(group, element))),
            (false, true) => Ok(TagRange::Element100(Tag(group, element))),
            (true, true) => UnsupportedSnafu { text }.fail(),
        }
    }
}

/// The value representation declared by a dictionary entry,
/// which for some attributes depends on the context of the data set.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum VirtualVr {
    /// Always this value representation.
    Exact(VR),
    /// `US` or `SS`, following _Pixel Representation_.
    Xs,
    /// Overlay data, `OB` or `OW`.
    Ox,
    /// Pixel data, `OB` or `OW`.
    Px,
    /// LUT data, `US` or `OW`.
    Lt,
}

impl From<VR> for VirtualVr {
    fn from(vr: VR) -> Self {
        VirtualVr::Exact(vr)
    }
}

impl VirtualVr {
    /// The value representation, if it does not depend on context.
    pub fn exact(self) -> Option<VR> {
        match self {
            VirtualVr::Exact(vr) => Some(vr),
            _ => None,
        }
    }

    /// The value representation,
    /// using `US` for `Xs` and `OW` for the other context dependent ones.
    pub fn relaxed(self) -> VR {
        match self {
            VirtualVr::Exact(vr) => vr,
            VirtualVr::Xs => VR::US,
            VirtualVr::Ox | VirtualVr::Px | VirtualVr::Lt => VR::OW,
        }
    }

    /// Whether an attribute declared with this descriptor
    /// may have the given value representation.
    /// `UN` is always admitted.
    pub fn admits(self, vr: VR) -> bool {
        vr == VR::UN
            || match self {
                VirtualVr::Exact(v) => v == vr,
                VirtualVr::Xs => matches!(vr, VR::US | VR::SS),
                VirtualVr::Ox | VirtualVr::Px => matches!(vr, VR::OB | VR::OW),
                VirtualVr::Lt => matches!(vr, VR::US | VR::OW),
            }
    }
}

impl fmt::Display for VirtualVr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VirtualVr::Exact(vr) => fmt::Display::fmt(vr, f),
            VirtualVr::Xs => f.write_str("US or SS"),
            VirtualVr::Ox | VirtualVr::Px => f.write_str("OB or OW"),
            VirtualVr::Lt => f.write_str("US or OW"),
        }
    }
}

/// Value multiplicity bounds of an attribute.
///
/// An unbounded multiplicity such as `1-n` has no maximum.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct Multiplicity {
    /// The least number of values.
    pub min: u32,
    /// The greatest number of values, if bounded.
    pub max: Option<u32>,
}

impl Multiplicity {
    /// `1`
    pub const ONE: Multiplicity = Multiplicity::new(1, 1);

    /// `1-n`
    pub const ONE_OR_MORE: Multiplicity = Multiplicity { min: 1, max: None };

    /// `min-max`
    pub const fn new(min: u32, max: u32) -> Self {
        Multiplicity {
            min,
            max: Some(max),
        }
    }

    /// Whether the given number of values is within bounds.
    pub fn admits(self, count: u32) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", max),
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}-n", self.min),
        }
    }
}

/// A dictionary of DICOM attributes.
///
/// Entries are looked up by tag or by keyword.
/// Both return `None` for attributes unknown to the dictionary.
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Look up an attribute by tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Look up an attribute by keyword, such as "PatientName".
    /// Keywords are case sensitive.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Look up an attribute by keyword
    /// or by tag expression, `(gggg,eeee)` or `gggg,eeee`.
    fn by_expr(&self, expr: &str) -> Option<&Self::Entry> {
        match expr.parse() {
            Ok(TagRange::Single(tag)) => self.by_tag(tag),
            Ok(_) => None,
            Err(_) => self.by_name(expr),
        }
    }

    /// Resolve a keyword or tag expression to a tag.
    ///
    /// Tag expressions are accepted even if the dictionary
    /// does not know the attribute.
    fn parse_tag(&self, expr: &str) -> Option<Tag> {
        match expr.parse() {
            Ok(TagRange::Single(tag)) => Some(tag),
            Ok(_) => None,
            Err(_) => self.by_name(expr).map(|e| e.tag()),
        }
    }
}

impl<T> DataDictionary for &T
where
    T: DataDictionary,
{
    type Entry = T::Entry;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }
}

/// An attribute as described by a dictionary.
pub trait DataDictionaryEntry {
    /// The tags covered by this entry.
    fn tag_range(&self) -> TagRange;

    /// A representative tag of this entry.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }

    /// The attribute keyword.
    fn alias(&self) -> &str;

    /// The declared value representation.
    fn vr(&self) -> VirtualVr;

    /// The value multiplicity bounds.
    fn vm(&self) -> Multiplicity;

    /// Whether the attribute was retired from the standard.
    fn is_retired(&self) -> bool;
}

/// A dictionary entry borrowing its keyword,
/// suitable for static tables.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The tags covered by the entry.
    pub tag: TagRange,
    /// The attribute keyword.
    pub alias: &'a str,
    /// The declared value representation.
    pub vr: VirtualVr,
    /// The value multiplicity bounds.
    pub vm: Multiplicity,
    /// Whether the attribute is retired.
    pub retired: bool,
}

impl DataDictionaryEntry for DataDictionaryEntryRef<'_> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VirtualVr {
        self.vr
    }
    fn vm(&self) -> Multiplicity {
        self.vm
    }
    fn is_retired(&self) -> bool {
        self.retired
    }
}

/// A dictionary without entries.
///
/// Attributes created against it accept any VR.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyDictionary;

impl DataDictionary for EmptyDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_tag(&self, _: Tag) -> Option<&Self::Entry> {
        None
    }

    fn by_name(&self, _: &str) -> Option<&Self::Entry> {
        None
    }
}
