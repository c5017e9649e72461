use std::borrow::Cow;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::SplitError;

/// Resolve a WHATWG encoding label like `utf-8` or `cp1252`.
///
/// Labels whose encoder differs from the decoder (the UTF-16 family)
/// are rejected up front: chapters must be written back in the input's
/// encoding.
pub fn resolve(label: &str) -> Result<&'static Encoding, SplitError> {
    let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) else {
        return Err(SplitError::UnknownEncoding(label.to_string()));
    };
    if encoding.output_encoding() != encoding {
        return Err(SplitError::UnsupportedEncoding(encoding.name().to_string()));
    }
    Ok(encoding)
}

/// Decode `bytes` strictly. Malformed input is an error, never a
/// silent U+FFFD; BOMs are left in place so re-encoding reproduces
/// the input bytes.
pub fn decode(
    bytes: &[u8],
    encoding: &'static Encoding,
    path: &Path,
) -> Result<String, SplitError> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(SplitError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}

/// Encode `text` for writing in the run's encoding.
pub fn encode<'a>(text: &'a str, encoding: &'static Encoding) -> Cow<'a, [u8]> {
    let (bytes, _, _) = encoding.encode(text);
    bytes
}
