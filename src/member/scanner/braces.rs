use log::trace;

use crate::member::types::BraceMode;

/// Lexer context carried between lines in lexical mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexState {
    #[default]
    Code,
    BlockComment,
    StringLiteral,
    VerbatimString,
    CharLiteral,
}

/// Tracks `{`/`}` nesting depth across a sequence of lines.
///
/// A block counts as closed once a `{` has been seen and the depth is back at
/// zero at the end of a line. The check happens per line, not per character,
/// so `{ } {` on one line leaves the block open.
///
/// In [`BraceMode::Lexical`] braces inside `//` and `/* */` comments, regular,
/// verbatim and interpolated string literals, and char literals are skipped.
/// Interpolation holes are skipped with the rest of the string, so a hole that
/// itself contains a quote ends the string early. Only brace counting is
/// lexical: a method declaration sitting inside a `/* */` block between
/// methods is still matched by the declaration pattern and moved like live code.
#[derive(Debug, Clone)]
pub struct BraceCounter {
    mode: BraceMode,
    depth: i64,
    opened: bool,
    state: LexState,
}

impl BraceCounter {
    pub fn new(mode: BraceMode) -> Self {
        Self {
            mode,
            depth: 0,
            opened: false,
            state: LexState::Code,
        }
    }

    /// Current nesting depth; negative when more `}` than `{` have been seen
    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// Whether any structural `{` has been counted
    pub fn has_opened(&self) -> bool {
        self.opened
    }

    /// Whether the block has been entered and fully closed
    pub fn is_closed(&self) -> bool {
        self.has_opened() && self.depth == 0
    }

    /// Count the braces of one line
    pub fn feed_line(&mut self, line: &str) {
        match self.mode {
            BraceMode::Textual => self.feed_textual(line),
            BraceMode::Lexical => self.feed_lexical(line),
        }
    }

    fn open(&mut self) {
        self.depth += 1;
        self.opened = true;
    }

    fn close(&mut self) {
        self.depth -= 1;
    }

    fn feed_textual(&mut self, line: &str) {
        for c in line.chars() {
            match c {
                '{' => self.open(),
                '}' => self.close(),
                _ => {}
            }
        }
    }

    fn feed_lexical(&mut self, line: &str) {
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();
            let after_next = chars.get(i + 2).copied();

            match self.state {
                LexState::Code => match c {
                    '{' => self.open(),
                    '}' => self.close(),
                    '/' if next == Some('/') => break,
                    '/' if next == Some('*') => {
                        self.state = LexState::BlockComment;
                        i += 1;
                    }
                    '"' => self.state = LexState::StringLiteral,
                    '\'' => self.state = LexState::CharLiteral,
                    '@' if next == Some('"') => {
                        self.state = LexState::VerbatimString;
                        i += 1;
                    }
                    '$' if next == Some('"') => {
                        self.state = LexState::StringLiteral;
                        i += 1;
                    }
                    '$' | '@' if matches!(next, Some('@') | Some('$')) && after_next == Some('"') => {
                        self.state = LexState::VerbatimString;
                        i += 2;
                    }
                    _ => {}
                },
                LexState::BlockComment => {
                    if c == '*' && next == Some('/') {
                        self.state = LexState::Code;
                        i += 1;
                    }
                }
                LexState::StringLiteral => match c {
                    '\\' => i += 1,
                    '"' => self.state = LexState::Code,
                    _ => {}
                },
                LexState::CharLiteral => match c {
                    '\\' => i += 1,
                    '\'' => self.state = LexState::Code,
                    _ => {}
                },
                LexState::VerbatimString => {
                    if c == '"' {
                        if next == Some('"') {
                            i += 1;
                        } else {
                            self.state = LexState::Code;
                        }
                    }
                }
            }
            i += 1;
        }

        // Regular strings and char literals cannot span lines
        if matches!(self.state, LexState::StringLiteral | LexState::CharLiteral) {
            trace!("Unterminated literal at end of line: {}", line.trim_end());
            self.state = LexState::Code;
        }
    }
}

/// Find the line on which the block starting at `start` closes.
///
/// Returns `None` when the depth never returns to zero after a `{`.
pub fn find_block_end(lines: &[String], start: usize, mode: BraceMode) -> Option<usize> {
    let mut counter = BraceCounter::new(mode);

    for (offset, line) in lines.iter().enumerate().skip(start) {
        counter.feed_line(line);
        if counter.is_closed() {
            return Some(offset);
        }
    }

    trace!("Block starting at line {} never closes (depth {})", start, counter.depth());
    None
}
