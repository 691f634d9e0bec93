//! Declared-charset resolution for character columns.
//!
//! Change records name charsets the way the source database does
//! (`utf8mb4`, `AL32UTF8`, `ZHS16GBK`, ...). Those vendor names are mapped
//! onto `encoding_rs` encodings; anything else is tried as a WHATWG label.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::error::ConvertError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// 7-bit US-ASCII. Strict: any byte >= 0x80 is malformed.
    Ascii,
    Encoded(&'static Encoding),
}

impl Charset {
    /// Resolve a vendor or WHATWG charset name, case-insensitively.
    pub fn resolve(name: &str) -> Option<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        let encoding = match lowered.as_str() {
            "ascii" | "us7ascii" | "us-ascii" => return Some(Charset::Ascii),
            "utf8" | "utf8mb3" | "utf8mb4" | "al32utf8" | "utf-8" => encoding_rs::UTF_8,
            "latin1" | "we8iso8859p1" | "we8mswin1252" => encoding_rs::WINDOWS_1252,
            "gbk" | "zhs16gbk" | "gb2312" => encoding_rs::GBK,
            "gb18030" | "zhs32gb18030" => encoding_rs::GB18030,
            "big5" | "zht16big5" => encoding_rs::BIG5,
            "utf16" | "al16utf16" | "utf-16be" => encoding_rs::UTF_16BE,
            "utf16le" | "utf-16le" => encoding_rs::UTF_16LE,
            other => Encoding::for_label(other.as_bytes())?,
        };
        Some(Charset::Encoded(encoding))
    }

    /// Decode `bytes` without replacement characters; `None` when malformed.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            Charset::Ascii => bytes
                .is_ascii()
                .then(|| std::str::from_utf8(bytes).ok().map(Cow::Borrowed))
                .flatten(),
            Charset::Encoded(encoding) => {
                encoding.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }
    }
}

/// Check that `bytes` decode cleanly under `charset_name`.
///
/// Unknown charsets and malformed input are both `CharsetDecodingFailure`;
/// nothing is truncated or replaced.
pub fn validate(bytes: &[u8], charset_name: &str) -> Result<(), ConvertError> {
    let charset = Charset::resolve(charset_name).ok_or_else(|| {
        ConvertError::CharsetDecodingFailure {
            charset: charset_name.to_string(),
            reason: "unknown charset",
        }
    })?;
    match charset.decode(bytes) {
        Some(_) => Ok(()),
        None => Err(ConvertError::CharsetDecodingFailure {
            charset: charset_name.to_string(),
            reason: "malformed byte sequence",
        }),
    }
}
