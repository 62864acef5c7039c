//! Keypress decoding.
//!
//! Turns the bytes of one blocking read from a raw-mode terminal into a
//! single logical [`KeyEvent`]. Recognized sequences:
//!
//! | Bytes        | Event                  |
//! |--------------|------------------------|
//! | `ESC [ A`    | [`KeyEvent::ArrowUp`]    |
//! | `ESC [ B`    | [`KeyEvent::ArrowDown`]  |
//! | `ESC [ C`    | [`KeyEvent::ArrowRight`] |
//! | `ESC [ D`    | [`KeyEvent::ArrowLeft`]  |
//! | `ESC [ 5 ~`  | [`KeyEvent::PageUp`]     |
//! | `ESC [ 6 ~`  | [`KeyEvent::PageDown`]   |
//! | `ESC`        | literal Escape         |
//! | `0x11`       | [`KeyEvent::Quit`]       |
//!
//! Each call takes an immutable slice, so bytes from an earlier read can
//! never leak into the next decode.

/// Escape byte that starts every control sequence.
pub const ESC: u8 = 0x1b;

/// Ctrl+Q. Ctrl+letter is the letter masked with `0x1f`.
pub const QUIT_BYTE: u8 = ctrl(b'q');

/// Longest sequence the decoder looks at; also the read chunk size.
pub const MAX_SEQUENCE_LEN: usize = 4;

/// Byte produced by holding Ctrl with `key`.
pub const fn ctrl(key: u8) -> u8 {
    key & 0x1f
}

/// A logical key produced from one read of raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Ctrl+Q
    Quit,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    /// A printable byte, or a bare Escape (`0x1b`)
    PrintableOrOther(u8),
    /// Control bytes and unrecognized escape sequences
    Ignored,
}

impl KeyEvent {
    /// The event for a lone Escape keypress.
    pub const ESCAPE: Self = Self::PrintableOrOther(ESC);

    /// Whether this event ends the session.
    pub const fn is_quit(self) -> bool {
        matches!(self, Self::Quit)
    }
}

/// Decode up to [`MAX_SEQUENCE_LEN`] bytes into a key event.
///
/// Missing trailing bytes are treated as `0`. An empty slice decodes to
/// [`KeyEvent::Ignored`]. Bytes past the fourth are not inspected.
///
/// # Example
///
/// ```
/// use tilde::input::{decode, KeyEvent};
///
/// assert_eq!(decode(b"\x1b[A"), KeyEvent::ArrowUp);
/// assert_eq!(decode(b"\x1b[5~"), KeyEvent::PageUp);
/// assert_eq!(decode(b"\x1b"), KeyEvent::ESCAPE);
/// assert_eq!(decode(&[0x11, b'x']), KeyEvent::Quit);
/// ```
pub fn decode(bytes: &[u8]) -> KeyEvent {
    let Some(&first) = bytes.first() else {
        return KeyEvent::Ignored;
    };
    if first == ESC {
        return decode_escape(bytes);
    }
    classify_byte(first)
}

/// Map a single non-escape byte to its event.
pub const fn classify_byte(byte: u8) -> KeyEvent {
    match byte {
        QUIT_BYTE => KeyEvent::Quit,
        // 0-31 and DEL are control characters; 32-126 are printable.
        0..=31 | 127 => KeyEvent::Ignored,
        _ => KeyEvent::PrintableOrOther(byte),
    }
}

fn decode_escape(bytes: &[u8]) -> KeyEvent {
    let at = |i: usize| bytes.get(i).copied().unwrap_or(0);

    // Anything but a CSI introducer is taken as a bare Escape. A sequence
    // split across two reads therefore loses its tail.
    if at(1) != b'[' {
        return KeyEvent::ESCAPE;
    }

    match at(2) {
        b'A' => KeyEvent::ArrowUp,
        b'B' => KeyEvent::ArrowDown,
        b'C' => KeyEvent::ArrowRight,
        b'D' => KeyEvent::ArrowLeft,
        digit @ b'0'..=b'9' => decode_numeric(digit, at(3)),
        _ => KeyEvent::Ignored,
    }
}

const fn decode_numeric(digit: u8, terminator: u8) -> KeyEvent {
    match (digit, terminator) {
        (b'5', b'~') => KeyEvent::PageUp,
        (b'6', b'~') => KeyEvent::PageDown,
        _ => KeyEvent::Ignored,
    }
}
