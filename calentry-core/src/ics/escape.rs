//! TEXT value escaping per the RFC 5545 content-line rules.

/// Escape a description for use as an ICS TEXT value.
///
/// Backslash, comma, and semicolon are backslash-escaped; newlines (in any
/// of the `\r\n`, `\n`, `\r` spellings) become the literal two-character
/// sequence `\n`. Any other control character cannot be represented and is
/// returned as the error rather than stripped; HTAB is the one control
/// character TEXT permits.
pub fn escape_text(input: &str) -> Result<String, char> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {
                // CRLF collapses into a single escaped newline
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\t' => out.push(c),
            c if c.is_control() => return Err(c),
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Invert [`escape_text`]: `\n`/`\N` become newlines, any other escaped
/// character stands for itself.
pub fn unescape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            // Trailing lone backslash, kept as-is
            None => out.push('\\'),
        }
    }

    out
}
