//! Description of the uncompressed transfer syntaxes,
//! which decide the data element header layout and the byte order.

pub use byteordered::Endianness;

/// A DICOM transfer syntax specifier,
/// restricted to the properties needed to lay out data element headers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
}

/// Implicit VR Little Endian: the default transfer syntax.
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2",
    name: "Implicit VR Little Endian",
    byte_order: Endianness::Little,
    explicit_vr: false,
};

/// Explicit VR Little Endian.
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2.1",
    name: "Explicit VR Little Endian",
    byte_order: Endianness::Little,
    explicit_vr: true,
};

/// Explicit VR Big Endian (retired).
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2.2",
    name: "Explicit VR Big Endian",
    byte_order: Endianness::Big,
    explicit_vr: true,
};

impl TransferSyntax {
    /// Obtain one of the supported transfer syntaxes by its UID.
    ///
    /// Trailing null characters and spaces in `uid` are ignored.
    pub fn from_uid(uid: &str) -> Option<TransferSyntax> {
        let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
        [
            IMPLICIT_VR_LITTLE_ENDIAN,
            EXPLICIT_VR_LITTLE_ENDIAN,
            EXPLICIT_VR_BIG_ENDIAN,
        ]
        .iter()
        .find(|ts| ts.uid == uid)
        .copied()
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Check whether this transfer syntax expects an explicit VR.
    pub const fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }
}

impl Default for TransferSyntax {
    fn default() -> Self {
        IMPLICIT_VR_LITTLE_ENDIAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_uid() {
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2.1\0"),
            Some(EXPLICIT_VR_LITTLE_ENDIAN)
        );
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2.2"),
            Some(EXPLICIT_VR_BIG_ENDIAN)
        );
        assert_eq!(TransferSyntax::from_uid("1.2.840.10008.1.2.4.50"), None);
        assert_eq!(TransferSyntax::default(), IMPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(EXPLICIT_VR_BIG_ENDIAN.endianness(), Endianness::Big);
        assert!(!IMPLICIT_VR_LITTLE_ENDIAN.is_explicit_vr());
    }
}
