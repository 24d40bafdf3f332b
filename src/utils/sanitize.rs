//! Sanitization of catalog text before it reaches the terminal
//!
//! # Security: Terminal Injection Prevention
//!
//! Record fields come from a remote JSON file and are drawn straight into the
//! terminal. Escape sequences embedded in them could clear the screen, move the
//! cursor, retitle the window or recolour the UI, so every field shown in the
//! browser or printed by `list` passes through [`sanitize_text`] or [`sanitize_line`].

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Remove ANSI escape sequences and control characters, keeping newlines and tabs
///
/// Handles CSI sequences (`ESC [ ... letter`) and OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`). Zero-width joiners and variation selectors are not control
/// characters and survive, so multi-codepoint emoji stay intact.
///
/// # Examples
///
/// ```
/// use emoji_catalog_explorer::utils::sanitize_text;
///
/// assert_eq!(sanitize_text("\x1b[31mRed heart\x1b[0m"), "Red heart");
/// ```
pub fn sanitize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // CSI ends at the first letter
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    // OSC ends at BEL or at the ST terminator ESC '\'
                    while let Some(next_ch) = chars.next() {
                        if next_ch == BEL {
                            break;
                        }
                        if next_ch == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize and flatten text onto a single line
///
/// Used for names, categories and glyphs, which are laid out in fixed one-row slots.
pub fn sanitize_line(text: &str) -> String {
    sanitize_text(text).split_whitespace().collect::<Vec<_>>().join(" ")
}
