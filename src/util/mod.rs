//! Small utility helpers for URL encoding, text fitting and desktop integration.
//!
//! Browser and clipboard helpers spawn external programs; they are the only
//! places where Diiwaan talks to the desktop session.

pub mod config;

use std::fmt::Write as _;
use std::io::Write as _;
use std::process::{Command, Stdio};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Environment variable that disables terminal setup and desktop side effects.
pub const HEADLESS_ENV: &str = "DIIWAAN_TEST_HEADLESS";

/// Whether the process runs without a terminal (integration tests, CI).
#[must_use]
pub fn is_headless() -> bool {
    std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1")
}

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`), matching what share endpoints expect.
/// - Operates on raw bytes, so Somali and Arabic names are UTF-8 hex-escaped.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

/// What: Truncate `text` so it fits in `max_width` terminal columns.
///
/// Inputs:
/// - `text`: Text to fit
/// - `max_width`: Available columns
///
/// Output:
/// - The text itself when it fits, otherwise a prefix ending in `…`.
///
/// Details:
/// - Widths come from `unicode-width`, so wide glyphs count as two columns.
#[must_use]
pub fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// What: Open a URL in the default browser.
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Details:
/// - Uses `xdg-open` with `open` (macOS) as fallback, on a background thread.
/// - Errors are logged and otherwise ignored.
/// - No-op in tests and headless mode.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        if is_headless() {
            return;
        }
        let url = url.to_string();
        std::thread::spawn(move || {
            let spawned = Command::new("xdg-open")
                .arg(&url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .or_else(|_| {
                    Command::new("open")
                        .arg(&url)
                        .stdin(Stdio::null())
                        .stdout(Stdio::null())
                        .stderr(Stdio::null())
                        .spawn()
                });
            if let Err(e) = spawned {
                tracing::warn!(error = %e, url = %url, "failed to open browser");
            }
        });
    }
}

/// What: Pick the clipboard program available in this session.
///
/// Output:
/// - Program and arguments, or `None` when neither `wl-copy` nor `xclip` exists.
///
/// Details:
/// - Wayland sessions prefer `wl-copy`; everything else falls back to `xclip`.
fn clipboard_command() -> Option<(&'static str, &'static [&'static str])> {
    let wayland = std::env::var("WAYLAND_DISPLAY").is_ok();
    if wayland && which::which("wl-copy").is_ok() {
        return Some(("wl-copy", &[]));
    }
    if which::which("xclip").is_ok() {
        return Some(("xclip", &["-selection", "clipboard"]));
    }
    None
}

/// What: Write `text` to the system clipboard.
///
/// Inputs:
/// - `text`: Payload to copy
///
/// Output:
/// - `Ok(())` when the clipboard program accepted the text; `Err(message)` otherwise.
///
/// Details:
/// - Blocks until the helper exits; `wl-copy` and `xclip` return immediately
///   after forking their selection owner.
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    if is_headless() {
        return Err("clipboard unavailable in headless mode".to_string());
    }
    let (program, args) =
        clipboard_command().ok_or_else(|| "no clipboard program (wl-copy, xclip)".to_string())?;
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("{program}: {e}"))?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| format!("{program}: {e}"))?;
    }
    let status = child.wait().map_err(|e| format!("{program}: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{program} exited with {status}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Reserved characters and non-ASCII bytes are escaped
    fn percent_encode_escapes_reserved_and_utf8() {
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");
        assert_eq!(percent_encode("A-z_0.~"), "A-z_0.~");
        assert_eq!(percent_encode("Cé"), "C%C3%A9");
        assert_eq!(
            percent_encode("https://x.so/?profileId=1"),
            "https%3A%2F%2Fx.so%2F%3FprofileId%3D1"
        );
    }

    #[test]
    fn fit_width_truncates_with_ellipsis() {
        assert_eq!(fit_width("short", 10), "short");
        assert_eq!(fit_width("abcdefgh", 5), "abcd…");
        assert_eq!(fit_width("abc", 0), "");
    }
}
