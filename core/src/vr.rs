//! Capability table of the standard value representations.
//!
//! Each [`VR`] is described by a [`VrInfo`] record,
//! retrieved through [`VR::info`].
//! The record tells how values of that representation are stored
//! in memory (text or fixed width binary),
//! how they are laid out on the wire,
//! and which constraints apply to them.

use crate::header::VR;

/// The storage class of a value representation.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// Values are strings separated by a backslash.
    Text,
    /// Values are fixed width numbers.
    Binary,
    /// A sequence of nested data sets.
    Sequence,
}

/// Static description of a value representation.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct VrInfo {
    /// The value representation described.
    pub vr: VR,
    /// How the values are stored.
    pub kind: ValueKind,
    /// Size in bytes of each value for binary representations,
    /// `0` for text and sequences.
    pub unit_size: usize,
    /// Maximum length of each value in characters.
    /// `0` stands for no limit.
    pub max_len: usize,
    /// Whether the explicit VR header of this representation
    /// has a 16-bit length field.
    /// Otherwise, two reserved bytes are followed by a 32-bit length.
    pub length16: bool,
    /// Byte used to pad values to an even length.
    pub pad: u8,
    /// Whether the attribute may hold more than one value.
    pub multi_valued: bool,
    /// Whether the text is subject to the specific character set.
    pub specific_character_set: bool,
}

macro_rules! text {
    ($vr: ident, $max: expr, $multi: expr, $charset: expr) => {
        VrInfo {
            vr: VR::$vr,
            kind: ValueKind::Text,
            unit_size: 0,
            max_len: $max,
            length16: true,
            pad: b' ',
            multi_valued: $multi,
            specific_character_set: $charset,
        }
    };
}

macro_rules! binary {
    ($vr: ident, $size: expr, $length16: expr) => {
        VrInfo {
            vr: VR::$vr,
            kind: ValueKind::Binary,
            unit_size: $size,
            max_len: 0,
            length16: $length16,
            pad: 0,
            multi_valued: true,
            specific_character_set: false,
        }
    };
}

static AE_INFO: VrInfo = text!(AE, 16, true, false);
static AS_INFO: VrInfo = text!(AS, 4, true, false);
static AT_INFO: VrInfo = binary!(AT, 4, true);
static CS_INFO: VrInfo = text!(CS, 16, true, false);
static DA_INFO: VrInfo = text!(DA, 8, true, false);
static DS_INFO: VrInfo = text!(DS, 16, true, false);
static DT_INFO: VrInfo = text!(DT, 26, true, false);
static FL_INFO: VrInfo = binary!(FL, 4, true);
static FD_INFO: VrInfo = binary!(FD, 8, true);
static IS_INFO: VrInfo = text!(IS, 12, true, false);
static LO_INFO: VrInfo = text!(LO, 64, true, true);
static LT_INFO: VrInfo = text!(LT, 10240, false, true);
static OB_INFO: VrInfo = binary!(OB, 1, false);
static OD_INFO: VrInfo = binary!(OD, 8, false);
static OF_INFO: VrInfo = binary!(OF, 4, false);
static OL_INFO: VrInfo = binary!(OL, 4, false);
static OV_INFO: VrInfo = binary!(OV, 8, false);
static OW_INFO: VrInfo = binary!(OW, 2, false);
static PN_INFO: VrInfo = text!(PN, 320, true, true);
static SH_INFO: VrInfo = text!(SH, 16, true, true);
static SL_INFO: VrInfo = binary!(SL, 4, true);
static SQ_INFO: VrInfo = VrInfo {
    vr: VR::SQ,
    kind: ValueKind::Sequence,
    unit_size: 0,
    max_len: 0,
    length16: false,
    pad: 0,
    multi_valued: true,
    specific_character_set: false,
};
static SS_INFO: VrInfo = binary!(SS, 2, true);
static ST_INFO: VrInfo = text!(ST, 1024, false, true);
static SV_INFO: VrInfo = binary!(SV, 8, false);
static TM_INFO: VrInfo = text!(TM, 16, true, false);
static UC_INFO: VrInfo = VrInfo {
    length16: false,
    ..text!(UC, 0, true, true)
};
static UI_INFO: VrInfo = VrInfo {
    pad: 0,
    ..text!(UI, 64, true, false)
};
static UL_INFO: VrInfo = binary!(UL, 4, true);
static UN_INFO: VrInfo = binary!(UN, 1, false);
static UR_INFO: VrInfo = VrInfo {
    length16: false,
    ..text!(UR, 0, false, false)
};
static US_INFO: VrInfo = binary!(US, 2, true);
static UT_INFO: VrInfo = VrInfo {
    length16: false,
    ..text!(UT, 0, false, true)
};
static UV_INFO: VrInfo = binary!(UV, 8, false);

impl VR {
    /// Retrieve the capability record of this value representation.
    pub fn info(self) -> &'static VrInfo {
        use VR::*;
        match self {
            AE => &AE_INFO,
            AS => &AS_INFO,
            AT => &AT_INFO,
            CS => &CS_INFO,
            DA => &DA_INFO,
            DS => &DS_INFO,
            DT => &DT_INFO,
            FL => &FL_INFO,
            FD => &FD_INFO,
            IS => &IS_INFO,
            LO => &LO_INFO,
            LT => &LT_INFO,
            OB => &OB_INFO,
            OD => &OD_INFO,
            OF => &OF_INFO,
            OL => &OL_INFO,
            OV => &OV_INFO,
            OW => &OW_INFO,
            PN => &PN_INFO,
            SH => &SH_INFO,
            SL => &SL_INFO,
            SQ => &SQ_INFO,
            SS => &SS_INFO,
            ST => &ST_INFO,
            SV => &SV_INFO,
            TM => &TM_INFO,
            UC => &UC_INFO,
            UI => &UI_INFO,
            UL => &UL_INFO,
            UN => &UN_INFO,
            UR => &UR_INFO,
            US => &US_INFO,
            UT => &UT_INFO,
            UV => &UV_INFO,
        }
    }

    /// Whether values of this representation are stored as text.
    #[inline]
    pub fn is_text(self) -> bool {
        self.info().kind == ValueKind::Text
    }

    /// Whether values of this representation are fixed width binary numbers.
    #[inline]
    pub fn is_binary(self) -> bool {
        self.info().kind == ValueKind::Binary
    }

    /// Length in bytes of a data element header with this representation.
    ///
    /// Implicit VR headers are always 8 bytes long.
    /// Explicit VR headers are 8 bytes long for representations
    /// with a 16-bit length field, and 12 bytes long otherwise.
    pub fn header_len(self, explicit_vr: bool) -> u32 {
        if !explicit_vr || self.info().length16 {
            8
        } else {
            12
        }
    }
}
