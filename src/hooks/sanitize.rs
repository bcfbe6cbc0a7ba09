//! Stripping of terminal escape sequences from captured output.

use once_cell::sync::Lazy;
use regex::Regex;

// ESC followed by either a single byte in @-Z \ ] ^ _ (two-character
// sequences) or a full CSI sequence: '[' , parameter bytes 0x30-0x3F,
// intermediate bytes 0x20-0x2F, one final byte 0x40-0x7E.
static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").unwrap());

/// Remove ANSI escape sequences from text.
///
/// Text without an ESC byte is returned unchanged; literal characters that
/// merely resemble escape fragments (e.g. `[31m` with no ESC prefix) are not
/// touched.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}
