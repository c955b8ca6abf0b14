//! Code block tracking so directives inside code stay literal.

/// Columns of indentation that turn a line into indented code.
const CODE_INDENT: usize = 4;

/// Line-by-line tracker for fenced and indented code blocks.
///
/// A fence closes on a line made only of the same character, at least as
/// long as the opener. Indented code starts with a line indented four or more
/// columns after a blank line, outside a list, and runs until a less
/// indented line.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
    indented: bool,
    in_list: bool,
    prev_text: bool,
}

impl FenceTracker {
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line. Returns `true` when the line is code or a fence
    /// delimiter and must be left untouched.
    pub(crate) fn is_literal(&mut self, line: &str) -> bool {
        let was_in_fence = self.in_fence();
        let literal = if self.update(line) || was_in_fence {
            self.indented = false;
            true
        } else {
            self.update_indented(line)
        };
        self.prev_text = !line.trim().is_empty();
        literal
    }

    fn update_indented(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return self.indented;
        }

        if indent_width(line) >= CODE_INDENT {
            if !self.indented && !self.prev_text && !self.in_list {
                self.indented = true;
            }
            return self.indented;
        }

        self.indented = false;
        let trimmed = line.trim_start();
        if starts_list_item(trimmed) {
            self.in_list = true;
        } else if !self.prev_text && indent_width(line) == 0 {
            self.in_list = false;
        }
        false
    }

    /// Feed the next line. Returns `true` when the line opens or closes a fence.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        if indent_width(line) >= CODE_INDENT {
            return false;
        }
        let trimmed = line.trim_start();
        match self.open {
            Some((ch, len)) => {
                let run = run_length(trimmed, ch);
                let closes = run >= len && trimmed[run..].trim().is_empty();
                if closes {
                    self.open = None;
                }
                closes
            }
            None => {
                let Some(ch) = trimmed.chars().next().filter(|c| matches!(c, '`' | '~')) else {
                    return false;
                };
                let run = run_length(trimmed, ch);
                // Backtick fences may not carry backticks in their info string.
                let valid = run >= 3 && !(ch == '`' && trimmed[run..].contains('`'));
                if valid {
                    self.open = Some((ch, run));
                }
                valid
            }
        }
    }
}

fn run_length(s: &str, ch: char) -> usize {
    s.chars().take_while(|&c| c == ch).count() * ch.len_utf8()
}

/// Leading whitespace width, tabs advancing to the next multiple of four.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += CODE_INDENT - width % CODE_INDENT,
            _ => break,
        }
    }
    width
}

/// `- `, `* `, `+ `, `1. ` or `1) ` list markers.
fn starts_list_item(trimmed: &str) -> bool {
    let rest = if let Some(rest) = trimmed.strip_prefix(['-', '*', '+']) {
        rest
    } else {
        let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 || digits > 9 {
            return false;
        }
        match trimmed[digits..].strip_prefix(['.', ')']) {
            Some(rest) => rest,
            None => return false,
        }
    };
    rest.is_empty() || rest.starts_with([' ', '\t'])
}
