//! Directive syntax recognition: `:name`, `::name`, `:::name`.

use super::DirectiveArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedDirective {
    /// `:name[content]{attrs}` anywhere in a line.
    Inline { name: String, args: DirectiveArgs },
    /// `::name[content]{attrs}` at the start of a line.
    Leaf { name: String, args: DirectiveArgs },
    /// `:::name[content]{attrs}` on its own line.
    ContainerStart { name: String, args: DirectiveArgs },
    /// `:::` on its own line.
    ContainerEnd { colon_count: usize },
}

/// A directive located in a line, with its byte span.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Located {
    pub(crate) directive: ParsedDirective,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Find the first inline or leaf directive at or after byte `from`.
///
/// A candidate must not follow an alphanumeric character (so `10:30` and
/// `std::fmt` stay text), must carry `[...]` or `{...}`, and must not sit
/// inside an inline code span. Leaf directives are only recognized when
/// nothing but whitespace precedes them.
pub(crate) fn find_directive(line: &str, from: usize) -> Option<Located> {
    let bytes = line.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        match bytes[i] {
            b'`' => i = skip_code_span(line, i),
            b':' => {
                let colons = bytes[i..].iter().take_while(|&&b| b == b':').count();
                if let Some(located) = try_directive_at(line, i, colons) {
                    return Some(located);
                }
                i += colons;
            }
            _ => i += 1,
        }
    }
    None
}

fn try_directive_at(line: &str, start: usize, colons: usize) -> Option<Located> {
    if colons > 2 {
        return None;
    }
    let follows_word = line[..start]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric);
    if follows_word {
        return None;
    }
    if colons == 2 && !line[..start].trim().is_empty() {
        return None;
    }

    let (name, args, consumed) = parse_head(&line[start + colons..])?;
    if consumed == name.len() {
        return None;
    }

    let directive = if colons == 1 {
        ParsedDirective::Inline { name, args }
    } else {
        ParsedDirective::Leaf { name, args }
    };
    Some(Located {
        directive,
        start,
        end: start + colons + consumed,
    })
}

/// Byte index just past the code span opening at `start`, or past the
/// backtick run when the span never closes.
fn skip_code_span(line: &str, start: usize) -> usize {
    let run = line[start..].bytes().take_while(|&b| b == b'`').count();
    let after = start + run;
    let fence = &line[start..after];

    let mut search = after;
    while let Some(rel) = line[search..].find(fence) {
        let close = search + rel;
        let close_run = line[close..].bytes().take_while(|&b| b == b'`').count();
        if close_run == run {
            return close + run;
        }
        search = close + close_run;
    }
    after
}

/// Parse a whole line as a container opener or closer.
pub(crate) fn parse_container_line(line: &str) -> Option<ParsedDirective> {
    let trimmed = line.trim();
    let colon_count = trimmed.bytes().take_while(|&b| b == b':').count();
    if colon_count < 3 {
        return None;
    }

    let after = trimmed[colon_count..].trim_start();
    if after.is_empty() {
        return Some(ParsedDirective::ContainerEnd { colon_count });
    }

    let (name, args, consumed) = parse_head(after)?;
    if !after[consumed..].trim().is_empty() {
        return None;
    }
    Some(ParsedDirective::ContainerStart { name, args })
}

/// Parse `name[content]{attrs}` at the start of `s`.
///
/// Returns the name, the parsed arguments and the number of bytes consumed.
fn parse_head(s: &str) -> Option<(String, DirectiveArgs, usize)> {
    let name_len = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(s.len());
    let name = &s[..name_len];
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut pos = name_len;
    let content = match take_balanced(&s[pos..], '[', ']') {
        Balanced::Found(inner, used) => {
            pos += used;
            inner
        }
        Balanced::Absent => "",
        Balanced::Unclosed => return None,
    };
    let attrs = match take_balanced(&s[pos..], '{', '}') {
        Balanced::Found(inner, used) => {
            pos += used;
            inner
        }
        Balanced::Absent => "",
        Balanced::Unclosed => return None,
    };

    Some((name.to_owned(), DirectiveArgs::parse(content, attrs), pos))
}

enum Balanced<'a> {
    Found(&'a str, usize),
    Absent,
    Unclosed,
}

/// Take `open ... close` from the start of `s`, honoring nesting.
fn take_balanced(s: &str, open: char, close: char) -> Balanced<'_> {
    if !s.starts_with(open) {
        return Balanced::Absent;
    }
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Balanced::Found(&s[open.len_utf8()..i], i + close.len_utf8());
            }
        }
    }
    Balanced::Unclosed
}
