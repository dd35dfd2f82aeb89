//! This module contains reusable components for encoding and decoding text
//! according to the character repertoires supported by DICOM.
//!
//! The character set of a data set is declared by the
//! _Specific Character Set_ attribute (0008,0005).
//! Values may name a single repertoire,
//! or several code extensions separated by a backslash,
//! in which case the first one applies by default.
//!
//! Please see [`SpecificCharacterSet`] for a complete enumeration
//! of all supported text encodings.

use encoding::all::{
    GB18030, GBK, ISO_8859_1, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5, ISO_8859_6,
    ISO_8859_7, ISO_8859_8, UTF_8,
};
use encoding::{DecoderTrap, EncoderTrap, EncodingRef};
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;

/// An error type for text encoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum EncodeTextError {
    /// The text contains characters
    /// which the character set cannot represent.
    #[snafu(display("Could not encode text in {}: {}", charset, message))]
    Unrepresentable {
        /// The name of the character set.
        charset: &'static str,
        /// The error message of the underlying encoder.
        message: Cow<'static, str>,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
}

/// An error type for text decoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DecodeTextError {
    /// The bytes are not valid in the character set.
    #[snafu(display("Could not decode text in {}: {}", charset, message))]
    Malformed {
        /// The name of the character set.
        charset: &'static str,
        /// The error message of the underlying decoder.
        message: Cow<'static, str>,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
}

type EncodeResult<T> = Result<T, EncodeTextError>;
type DecodeResult<T> = Result<T, DecodeTextError>;

/// A holder of encoding and decoding mechanisms for text in DICOM content,
/// which according to the standard, depends on the specific character set.
pub trait TextCodec {
    /// Obtain the defined term of the text encoding,
    /// as found in the Specific Character Set attribute.
    fn name(&self) -> &'static str;

    /// Decode the given byte buffer as a single string.
    /// The resulting string may contain backslash characters
    /// delimiting individual values.
    fn decode(&self, text: &[u8]) -> DecodeResult<String>;

    /// Encode a text value into a byte vector.
    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>>;

    /// The number of bytes taken by the text once encoded,
    /// or `None` if it cannot be encoded.
    fn encoded_len(&self, text: &str) -> Option<usize> {
        self.encode(text).ok().map(|bytes| bytes.len())
    }
}

impl<T: ?Sized> TextCodec for &T
where
    T: TextCodec,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        (**self).decode(text)
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        (**self).encode(text)
    }

    fn encoded_len(&self, text: &str) -> Option<usize> {
        (**self).encoded_len(text)
    }
}

/// An enum type for all currently supported character sets.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum SpecificCharacterSet {
    /// **ISO-IR 6**: the default character set.
    #[default]
    Default,
    /// **ISO-IR 100** (ISO-8859-1): the Western Europe character set.
    IsoIr100,
    /// **ISO-IR 101** (ISO-8859-2): the Central/Eastern Europe character set.
    IsoIr101,
    /// **ISO-IR 109** (ISO-8859-3): the South Europe character set.
    IsoIr109,
    /// **ISO-IR 110** (ISO-8859-4): the North Europe character set.
    IsoIr110,
    /// **ISO-IR 144** (ISO-8859-5): the Latin/Cyrillic character set.
    IsoIr144,
    /// **ISO-IR 127** (ISO-8859-6): the Latin/Arabic character set.
    IsoIr127,
    /// **ISO-IR 126** (ISO-8859-7): the Latin/Greek character set.
    IsoIr126,
    /// **ISO-IR 138** (ISO-8859-8): the Latin/Hebrew character set.
    IsoIr138,
    /// **ISO-IR 192**: the Unicode character set in UTF-8.
    IsoIr192,
    /// **GB18030**: the Simplified Chinese character set.
    Gb18030,
    /// **GBK**: a subset of GB18030.
    Gbk,
}

impl SpecificCharacterSet {
    /// Obtain the specific character set identified by the given code string.
    ///
    /// Supported code strings include the possible values
    /// in the respective DICOM element (0008, 0005).
    /// An empty code stands for the default character set.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicom_encoding::text::SpecificCharacterSet;
    /// let character_set = SpecificCharacterSet::from_code("ISO_IR 100");
    /// assert_eq!(character_set, Some(SpecificCharacterSet::IsoIr100));
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        use self::SpecificCharacterSet::*;
        match code.trim_matches(|c: char| c == ' ' || c == '\0') {
            "" | "ISO_IR 6" | "ISO 2022 IR 6" => Some(Default),
            "ISO_IR 100" | "ISO 2022 IR 100" => Some(IsoIr100),
            "ISO_IR 101" | "ISO 2022 IR 101" => Some(IsoIr101),
            "ISO_IR 109" | "ISO 2022 IR 109" => Some(IsoIr109),
            "ISO_IR 110" | "ISO 2022 IR 110" => Some(IsoIr110),
            "ISO_IR 144" | "ISO 2022 IR 144" => Some(IsoIr144),
            "ISO_IR 127" | "ISO 2022 IR 127" => Some(IsoIr127),
            "ISO_IR 126" | "ISO 2022 IR 126" => Some(IsoIr126),
            "ISO_IR 138" | "ISO 2022 IR 138" => Some(IsoIr138),
            "ISO_IR 192" => Some(IsoIr192),
            "GB18030" => Some(Gb18030),
            "GBK" => Some(Gbk),
            _ => None,
        }
    }

    /// Obtain the character set from all values
    /// of a Specific Character Set attribute.
    ///
    /// The first value decides the repertoire.
    /// When it is empty, the first code extension
    /// which is not the default repertoire is taken.
    pub fn from_codes<'a, I>(codes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut charset = SpecificCharacterSet::Default;
        for (i, code) in codes.into_iter().enumerate() {
            let candidate = Self::from_code(code)?;
            if i == 0 || charset == SpecificCharacterSet::Default {
                charset = candidate;
            }
        }
        Some(charset)
    }

    fn encoding(self) -> EncodingRef {
        use self::SpecificCharacterSet::*;
        match self {
            // ISO 8859-1 is a superset of the default repertoire
            Default | IsoIr100 => ISO_8859_1,
            IsoIr101 => ISO_8859_2,
            IsoIr109 => ISO_8859_3,
            IsoIr110 => ISO_8859_4,
            IsoIr144 => ISO_8859_5,
            IsoIr127 => ISO_8859_6,
            IsoIr126 => ISO_8859_7,
            IsoIr138 => ISO_8859_8,
            IsoIr192 => UTF_8,
            Gb18030 => GB18030,
            Gbk => GBK,
        }
    }

    /// Whether every character is encoded in a single byte.
    pub fn is_single_byte(self) -> bool {
        !matches!(
            self,
            SpecificCharacterSet::IsoIr192
                | SpecificCharacterSet::Gb18030
                | SpecificCharacterSet::Gbk
        )
    }
}

impl TextCodec for SpecificCharacterSet {
    fn name(&self) -> &'static str {
        use self::SpecificCharacterSet::*;
        match self {
            Default => "ISO_IR 6",
            IsoIr100 => "ISO_IR 100",
            IsoIr101 => "ISO_IR 101",
            IsoIr109 => "ISO_IR 109",
            IsoIr110 => "ISO_IR 110",
            IsoIr144 => "ISO_IR 144",
            IsoIr127 => "ISO_IR 127",
            IsoIr126 => "ISO_IR 126",
            IsoIr138 => "ISO_IR 138",
            IsoIr192 => "ISO_IR 192",
            Gb18030 => "GB18030",
            Gbk => "GBK",
        }
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        self.encoding()
            .decode(text, DecoderTrap::Replace)
            .map_err(|message| {
                MalformedSnafu {
                    charset: self.name(),
                    message,
                }
                .build()
            })
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        self.encoding()
            .encode(text, EncoderTrap::Strict)
            .map_err(|message| {
                UnrepresentableSnafu {
                    charset: self.name(),
                    message,
                }
                .build()
            })
    }

    fn encoded_len(&self, text: &str) -> Option<usize> {
        if self.is_single_byte() {
            // one byte per character, if representable at all
            return self.encode(text).ok().map(|_| text.chars().count());
        }
        if *self == SpecificCharacterSet::IsoIr192 {
            return Some(text.len());
        }
        self.encode(text).ok().map(|bytes| bytes.len())
    }
}
