//! Attribute header types: the tag and the value representation.

use std::fmt;
use std::str::FromStr;

macro_rules! value_representations {
    ($($vr: ident => $name: literal,)*) => {
        /// A DICOM value representation.
        ///
        /// Variants are named after their two letter code,
        /// and are ordered alphabetically.
        #[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
        pub enum VR {
            $(
                #[doc = $name]
                $vr,
            )*
        }

        impl VR {
            /// Every value representation, in alphabetical order.
            pub const ALL: &'static [VR] = &[$(VR::$vr),*];

            /// The two letter code of this value representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(VR::$vr => stringify!($vr),)*
                }
            }

            /// The full name of this value representation,
            /// such as "Decimal String" for `DS`.
            pub fn name(self) -> &'static str {
                match self {
                    $(VR::$vr => $name,)*
                }
            }
        }
    };
}

value_representations! {
    AE => "Application Entity",
    AS => "Age String",
    AT => "Attribute Tag",
    CS => "Code String",
    DA => "Date",
    DS => "Decimal String",
    DT => "Date Time",
    FD => "Floating Point Double",
    FL => "Floating Point Single",
    IS => "Integer String",
    LO => "Long String",
    LT => "Long Text",
    OB => "Other Byte",
    OD => "Other Double",
    OF => "Other Float",
    OL => "Other Long",
    OV => "Other 64-bit Very Long",
    OW => "Other Word",
    PN => "Person Name",
    SH => "Short String",
    SL => "Signed Long",
    SQ => "Sequence of Items",
    SS => "Signed Short",
    ST => "Short Text",
    SV => "Signed 64-bit Very Long",
    TM => "Time",
    UC => "Unlimited Characters",
    UI => "Unique Identifier",
    UL => "Unsigned Long",
    UN => "Unknown",
    UR => "Universal Resource Identifier",
    US => "Unsigned Short",
    UT => "Unlimited Text",
    UV => "Unsigned 64-bit Very Long",
}

impl VR {
    /// Obtain the value representation from its two letter code
    /// as found in explicit VR headers.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        VR::ALL
            .iter()
            .copied()
            .find(|vr| vr.as_str().as_bytes() == chars)
    }

    /// The two letter code of this value representation, as bytes.
    pub fn to_bytes(self) -> [u8; 2] {
        let code = self.as_str().as_bytes();
        [code[0], code[1]]
    }
}

/// The given text did not name a value representation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ParseVrError;

impl fmt::Display for ParseVrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("no such value representation")
    }
}

impl std::error::Error for ParseVrError {}

impl FromStr for VR {
    type Err = ParseVrError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.as_bytes() {
            &[a, b] => VR::from_binary([a, b]).ok_or(ParseVrError),
            _ => Err(ParseVrError),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alias for a tag's group number.
pub type GroupNumber = u16;
/// Alias for a tag's element number.
pub type ElementNumber = u16;

/// A DICOM attribute tag, `(group, element)`.
///
/// Tags are ordered by group, then by element,
/// which is the order of attributes in a data set.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// `(0000,0000)`
    pub const MIN: Tag = Tag(0x0000, 0x0000);
    /// `(FFFF,FFFF)`
    pub const MAX: Tag = Tag(0xFFFF, 0xFFFF);

    /// The group number.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// The element number.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// The tag as the number `0xGGGGEEEE`.
    #[inline]
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | u32::from(self.1)
    }

    /// Whether this tag belongs to a private group:
    /// an odd group above `0008`.
    pub fn is_private(self) -> bool {
        self.0 % 2 == 1 && self.0 > 0x0008
    }

    /// Whether this tag reserves a block of a private group,
    /// `(gggg,0010)` to `(gggg,00FF)`.
    pub fn is_private_creator(self) -> bool {
        self.is_private() && self.1 >= 0x0010 && self.1 <= 0x00FF
    }

    /// Whether this is the group length tag `(gggg,0000)`.
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag(0x{:04X}, 0x{:04X})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<(GroupNumber, ElementNumber)> for Tag {
    #[inline]
    fn from((group, element): (GroupNumber, ElementNumber)) -> Tag {
        Tag(group, element)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from([group, element]: [u16; 2]) -> Tag {
        Tag(group, element)
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(value: u32) -> Tag {
        Tag((value >> 16) as u16, value as u16)
    }
}

impl From<Tag> for u32 {
    #[inline]
    fn from(tag: Tag) -> u32 {
        tag.to_u32()
    }
}
