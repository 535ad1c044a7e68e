//! The whitespace set the form rules strip and reject.
//!
//! This is the ECMAScript `\s` set: Unicode `Space_Separator` plus tab, the
//! line terminators and U+FEFF. It differs from `char::is_whitespace` in two
//! places: U+FEFF is whitespace here, U+0085 is not.

/// Regex character-class body for the same set, for use inside `[...]`.
pub(crate) const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Whether `c` counts as whitespace for the form rules.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
