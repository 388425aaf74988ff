//! Shared text formatting for reports.

/// Render names as a bracketed, quoted, comma-separated list.
///
/// Names are single-quoted. A name containing a single quote but no
/// double quote is double-quoted instead; otherwise the quote character
/// and backslashes are escaped. Tabs, line breaks and other unprintable
/// characters are written as escapes (`\n`, `\x1b`, `\u2028`) so every
/// list stays on one line.
///
/// # Examples
///
/// ```
/// use stop_validator::report::quoted_list;
///
/// assert_eq!(quoted_list(["Elm Street", "Oak Road"]), "['Elm Street', 'Oak Road']");
/// assert_eq!(quoted_list(Vec::<&str>::new()), "[]");
/// assert_eq!(quoted_list(["St John's Road"]), "[\"St John's Road\"]");
/// ```
pub fn quoted_list<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = names.into_iter().map(|name| quote(name.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote(name: &str) -> String {
    let delimiter = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(delimiter);
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if is_unprintable(c) => {
                let code = u32::from(c);
                let escaped = if code < 0x100 {
                    format!("\\x{code:02x}")
                } else if code < 0x10000 {
                    format!("\\u{code:04x}")
                } else {
                    format!("\\U{code:08x}")
                };
                out.push_str(&escaped);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

/// Control characters and any whitespace other than a plain space.
fn is_unprintable(c: char) -> bool {
    c.is_control() || (c.is_whitespace() && c != ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(quoted_list(Vec::<String>::new()), "[]");
    }

    #[test]
    fn single() {
        assert_eq!(quoted_list(["Sample Street"]), "['Sample Street']");
    }

    #[test]
    fn keeps_given_order() {
        assert_eq!(quoted_list(["B Road", "A Road"]), "['B Road', 'A Road']");
    }

    #[test]
    fn both_quote_kinds_are_escaped() {
        assert_eq!(quoted_list([r#"a'b"c"#]), r#"['a\'b"c']"#);
    }

    #[test]
    fn line_breaks_are_escaped() {
        assert_eq!(quoted_list(["Elm Street\n"]), r"['Elm Street\n']");
        assert_eq!(quoted_list(["a\r\tb"]), r"['a\r\tb']");
        assert!(!quoted_list(["Elm Street\n", "Oak Road\r\n"]).contains('\n'));
    }

    #[test]
    fn unprintable_characters_are_escaped() {
        assert_eq!(quoted_list(["a\u{1b}b"]), r"['a\x1bb']");
        assert_eq!(quoted_list(["a\u{7f}"]), r"['a\x7f']");
        assert_eq!(quoted_list(["a\u{a0}b"]), r"['a\xa0b']");
        assert_eq!(quoted_list(["a\u{2028}b"]), r"['a\u2028b']");
    }

    #[test]
    fn printable_unicode_is_kept() {
        assert_eq!(quoted_list(["Żelazna Street"]), "['Żelazna Street']");
    }

    #[test]
    fn backslash_is_escaped() {
        assert_eq!(quoted_list([r"a\b"]), r"['a\\b']");
    }
}
