//! C-style comment stripping for relaxed JSON input
//!
//! `// line` and `/* block */` comments outside string literals are blanked
//! out with spaces before the text reaches the strict parser. Newlines are
//! kept, so line and column numbers in parse errors still point at the
//! caller's original text.

use std::borrow::Cow;

use crate::error::{JsonError, JsonResult};

/// Blank out comments in `text`
///
/// Returns the input untouched when it contains no `/` at all.
///
/// # Errors
///
/// Fails with [`JsonError::Decode`] on an unterminated block comment.
pub(crate) fn strip(text: &str) -> JsonResult<Cow<'_, str>> {
    if !text.contains('/') {
        return Ok(Cow::Borrowed(text));
    }

    // Scanning bytes is safe for UTF-8: no continuation byte can equal any
    // of the ASCII delimiters matched below.
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut in_string = false;
    let mut stripped = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if in_string {
            out.push(b);
            match b {
                b'\\' => {
                    if let Some(&escaped) = bytes.get(i + 1) {
                        out.push(escaped);
                        i += 1;
                    }
                }
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        match (b, bytes.get(i + 1)) {
            (b'"', _) => {
                in_string = true;
                out.push(b);
                i += 1;
            }
            (b'/', Some(b'/')) => {
                stripped += 1;
                while i < bytes.len() && bytes[i] != b'\n' {
                    out.push(b' ');
                    i += 1;
                }
            }
            (b'/', Some(b'*')) => {
                stripped += 1;
                let start = i;
                out.extend_from_slice(b"  ");
                i += 2;
                loop {
                    match bytes.get(i) {
                        None => {
                            return Err(JsonError::decode(format!(
                                "unterminated block comment starting at byte {start}"
                            )));
                        }
                        Some(b'*') if bytes.get(i + 1) == Some(&b'/') => {
                            out.extend_from_slice(b"  ");
                            i += 2;
                            break;
                        }
                        Some(b'\n') => {
                            out.push(b'\n');
                            i += 1;
                        }
                        Some(_) => {
                            out.push(b' ');
                            i += 1;
                        }
                    }
                }
            }
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }

    if stripped == 0 {
        return Ok(Cow::Borrowed(text));
    }
    tracing::trace!(comments = stripped, "stripped comments from json input");

    String::from_utf8(out)
        .map(Cow::Owned)
        .map_err(|e| JsonError::decode(e.to_string()))
}
