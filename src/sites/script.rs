//! Restricted scanner for literals inside inline player scripts.
//!
//! Pages set their players up with code like
//!
//! ```text
//! var player = new Clappr.Player({ sources: ["https://cdn/x.m3u8", "..."] })
//! ```
//!
//! Nothing here evaluates code. The scanner only understands a property name,
//! a colon and an array literal, and collects the array's string elements.

/// The part of `source` starting at `marker`, if present.
pub fn block_after<'a>(source: &'a str, marker: &str) -> Option<&'a str> {
    source.find(marker).map(|index| &source[index..])
}

/// String elements of the first `key: [ ... ]` array in `source`.
///
/// `key` may be bare or quoted. Non-string elements are skipped. Returns
/// `None` when no well-formed array follows the key.
pub fn array_strings(source: &str, key: &str) -> Option<Vec<String>> {
    let mut offset = 0;
    while let Some(found) = source[offset..].find(key) {
        let after_key = offset + found + key.len();
        if is_key_start(source, offset + found) {
            if let Some(strings) = parse_property_array(&source[after_key..]) {
                return Some(strings);
            }
        }
        offset = after_key;
    }
    None
}

/// First string element of the first `key: [ ... ]` array in `source`.
pub fn first_string(source: &str, key: &str) -> Option<String> {
    array_strings(source, key)?.into_iter().next()
}

/// `key` must not be the tail of a longer identifier (`datasources`).
fn is_key_start(source: &str, index: usize) -> bool {
    source[..index]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '$'))
}

fn parse_property_array(rest: &str) -> Option<Vec<String>> {
    let mut chars = rest.char_indices().peekable();

    // Closing quote of a quoted key.
    chars.next_if(|&(_, c)| c == '"' || c == '\'');
    skip_whitespace(&mut chars);
    if chars.next()?.1 != ':' {
        return None;
    }
    skip_whitespace(&mut chars);
    if chars.next()?.1 != '[' {
        return None;
    }

    let mut strings = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        let next = chars.peek()?.1;
        match next {
            ']' => return Some(strings),
            quote @ ('"' | '\'') => {
                chars.next();
                strings.push(parse_string(&mut chars, quote)?);
            }
            _ => skip_element(&mut chars)?,
        }

        skip_whitespace(&mut chars);
        match chars.next()?.1 {
            ',' => continue,
            ']' => return Some(strings),
            _ => return None,
        }
    }
}

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

fn skip_whitespace(chars: &mut Chars<'_>) {
    while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
}

/// Read a string literal whose opening quote was already consumed.
fn parse_string(chars: &mut Chars<'_>, quote: char) -> Option<String> {
    let mut value = String::new();
    loop {
        let (_, c) = chars.next()?;
        match c {
            c if c == quote => return Some(value),
            '\n' => return None,
            '\\' => {
                let (_, escaped) = chars.next()?;
                match escaped {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    'u' => value.push(parse_unicode_escape(chars)?),
                    // \" \' \\ \/ and anything else stand for themselves
                    other => value.push(other),
                }
            }
            c => value.push(c),
        }
    }
}

/// Four hex digits after `\u`.
fn parse_hex4(chars: &mut Chars<'_>) -> Option<u32> {
    let hex: String = (0..4).filter_map(|_| chars.next().map(|(_, c)| c)).collect();
    if hex.len() != 4 {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok()
}

/// Decode a `\u` escape whose `\u` was already consumed. A high surrogate
/// is joined with a following `\uDC00`-`\uDFFF` escape; unpaired surrogates
/// become U+FFFD.
fn parse_unicode_escape(chars: &mut Chars<'_>) -> Option<char> {
    let code = parse_hex4(chars)?;
    if !(0xD800..=0xDBFF).contains(&code) {
        return Some(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    let mut lookahead = chars.clone();
    let low = match (lookahead.next(), lookahead.next()) {
        (Some((_, '\\')), Some((_, 'u'))) => parse_hex4(&mut lookahead),
        _ => None,
    };
    match low {
        Some(low) if (0xDC00..=0xDFFF).contains(&low) => {
            *chars = lookahead;
            let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
            Some(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER))
        }
        _ => Some(char::REPLACEMENT_CHARACTER),
    }
}

/// Skip a non-string element up to the next top-level `,` or `]`.
fn skip_element(chars: &mut Chars<'_>) -> Option<()> {
    let mut depth = 0usize;
    loop {
        let &(_, c) = chars.peek()?;
        match c {
            ',' | ']' if depth == 0 => return Some(()),
            '[' | '{' | '(' => depth += 1,
            ']' | '}' | ')' => depth = depth.checked_sub(1)?,
            '"' | '\'' => {
                chars.next();
                parse_string(chars, c)?;
                continue;
            }
            _ => {}
        }
        chars.next();
    }
}
