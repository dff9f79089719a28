//! Input decoding helpers.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::{Error, Result};

/// Decode stylesheet bytes to a string.
///
/// Resolution order follows CSS Syntax 3 "determine the fallback encoding":
/// 1. A byte order mark
/// 2. The `label` override (from the command line), if given
/// 3. An `@charset "...";` rule at the very start of the file
/// 4. UTF-8, falling back to Windows-1252 if the bytes are malformed
///
/// An unknown `label` is an error; an unknown `@charset` is ignored.
pub fn decode_stylesheet<'a>(bytes: &'a [u8], label: Option<&str>) -> Result<Cow<'a, str>> {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_with_bom_removal(bytes);
        return Ok(text);
    }

    if let Some(label) = label {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))?;
        let (text, _, _) = encoding.decode(bytes);
        return Ok(text);
    }

    if let Some(encoding) = charset_rule(bytes).and_then(|l| Encoding::for_label(l.as_bytes())) {
        // A UTF-16 @charset can only be read from ASCII-compatible bytes,
        // which means the declaration is wrong; CSS says use UTF-8.
        let encoding = encoding.output_encoding();
        let (text, _, _) = encoding.decode(bytes);
        return Ok(text);
    }

    let (text, _, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return Ok(text);
    }

    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    Ok(text)
}

/// Extract the label of a leading `@charset "label";` rule.
fn charset_rule(bytes: &[u8]) -> Option<&str> {
    const PREFIX: &[u8] = b"@charset \"";
    let rest = bytes.strip_prefix(PREFIX)?;
    let end = rest.iter().take(64).position(|&b| b == b'"')?;
    if rest.get(end + 1) != Some(&b';') {
        return None;
    }
    std::str::from_utf8(&rest[..end]).ok()
}
