//! Character encoding handling.
//!
//! Input bytes are turned into parser text before the tree walk, but the
//! declared charset is only known once the walk has scanned `<head>`. To keep
//! that order, input that is not valid UTF-8 is decoded byte-for-byte with
//! `x-user-defined`, which maps every high byte to its own private-use code
//! point. After serialization the source bytes are recovered and decoded
//! with the declared legacy encoding; characters the parser produced from
//! references have no source bytes and are kept as they are.
//!
//! Only two legacy charsets are transcoded: EUC-JP and Shift_JIS. Anything
//! else is passed through.

use std::borrow::Cow;

use encoding_rs::{Encoding, EUC_JP, SHIFT_JIS, UTF_8, X_USER_DEFINED};

use crate::error::Error;

/// How the input bytes were turned into parser text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEncoding {
    /// Input was valid UTF-8 and parsed as-is.
    Utf8,
    /// Input was decoded with `x-user-defined`; the text round-trips to the
    /// original bytes.
    BytePreserving,
}

/// Legacy Japanese charsets the converter transcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JapaneseCharset {
    EucJp,
    ShiftJis,
}

impl JapaneseCharset {
    /// Resolve a charset label case-insensitively.
    ///
    /// Accepts any WHATWG label of the two encodings (`euc-jp`, `x-euc-jp`,
    /// `shift_jis`, `sjis`, `ms_kanji`, ...).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let encoding = Encoding::for_label(label.as_bytes())?;
        if encoding == EUC_JP {
            Some(Self::EucJp)
        } else if encoding == SHIFT_JIS {
            Some(Self::ShiftJis)
        } else {
            None
        }
    }

    #[must_use]
    pub fn encoding(self) -> &'static Encoding {
        match self {
            Self::EucJp => EUC_JP,
            Self::ShiftJis => SHIFT_JIS,
        }
    }
}

/// Turn input bytes into text the HTML parser accepts.
///
/// # Examples
///
/// ```
/// use rs_extract::encoding::{decode_input, InputEncoding};
///
/// let (text, how) = decode_input(b"<p>plain</p>");
/// assert_eq!(text, "<p>plain</p>");
/// assert_eq!(how, InputEncoding::Utf8);
/// ```
#[must_use]
pub fn decode_input(html: &[u8]) -> (Cow<'_, str>, InputEncoding) {
    if let Ok(text) = std::str::from_utf8(html) {
        return (Cow::Borrowed(text), InputEncoding::Utf8);
    }

    let (text, _had_errors) = X_USER_DEFINED.decode_without_bom_handling(html);
    (text, InputEncoding::BytePreserving)
}

/// Map a character of byte-preserved text back to its source byte.
///
/// ASCII maps to itself and `x-user-defined` puts every high byte at
/// `U+F700 + byte`. Anything else was produced by the parser, typically from
/// a character reference, and has no source byte.
fn preserved_byte(c: char) -> Option<u8> {
    match u32::from(c) {
        code @ 0x00..=0x7F => u8::try_from(code).ok(),
        code @ 0xF780..=0xF7FF => u8::try_from(code - 0xF700).ok(),
        _ => None,
    }
}

/// Outcome of converting one extracted field.
#[derive(Debug)]
pub struct Converted {
    /// The field as UTF-8.
    pub text: String,
    /// Set when malformed sequences in the declared charset were replaced
    /// with U+FFFD.
    pub error: Option<Error>,
}

/// Convert one extracted field to UTF-8 according to the declared charset.
///
/// EUC-JP and Shift_JIS fields are decoded from their source bytes with
/// replacement: malformed sequences become U+FFFD and are reported through
/// [`Converted::error`]. Fields with any other or no charset are passed
/// through. Characters the parser decoded from references are kept as
/// they are.
///
/// # Examples
///
/// ```
/// use encoding_rs::SHIFT_JIS;
/// use rs_extract::encoding::{convert_charset, decode_input};
///
/// let (bytes, _, _) = SHIFT_JIS.encode("日本語");
/// let (text, how) = decode_input(&bytes);
/// let converted = convert_charset(&text, how, Some("Shift_JIS"));
/// assert_eq!(converted.text, "日本語");
/// assert!(converted.error.is_none());
/// ```
#[must_use]
pub fn convert_charset(text: &str, input: InputEncoding, charset: Option<&str>) -> Converted {
    let japanese = charset.and_then(JapaneseCharset::from_label);
    let encoding = japanese.map_or(UTF_8, JapaneseCharset::encoding);

    let (text, had_errors) = match input {
        InputEncoding::Utf8 if japanese.is_none() => (text.to_string(), false),
        InputEncoding::Utf8 => {
            let (decoded, had_errors) = encoding.decode_without_bom_handling(text.as_bytes());
            (decoded.into_owned(), had_errors)
        }
        InputEncoding::BytePreserving => decode_preserved(text, encoding),
    };

    let error = (had_errors && japanese.is_some()).then(|| Error::EncodingError {
        charset: encoding.name().to_string(),
        reason: "malformed byte sequence replaced with U+FFFD".to_string(),
    });

    Converted { text, error }
}

/// Decode runs of source bytes with `encoding`, copying parser-produced
/// characters between them unchanged.
fn decode_preserved(text: &str, encoding: &'static Encoding) -> (String, bool) {
    let mut out = String::with_capacity(text.len());
    let mut pending = Vec::new();
    let mut had_errors = false;

    let mut flush = |pending: &mut Vec<u8>, out: &mut String| {
        if pending.is_empty() {
            return;
        }
        let (decoded, errors) = encoding.decode_without_bom_handling(pending);
        out.push_str(&decoded);
        had_errors |= errors;
        pending.clear();
    };

    for c in text.chars() {
        if let Some(byte) = preserved_byte(c) {
            pending.push(byte);
        } else {
            flush(&mut pending, &mut out);
            out.push(c);
        }
    }
    flush(&mut pending, &mut out);

    (out, had_errors)
}
