//! Spacing and indentation rules.
//!
//! The compiler emits bare tokens. Whitespace between them is decided here,
//! and both the compressor and the binder run the same state machine. That
//! keeps the text of a raw template and the text of its compressed form
//! byte-identical.

use crate::node::DelimiterKind;

const INDENT: &str = "    ";

/// What the output written so far ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    /// Nothing written in this scope, or a fresh line
    Start,

    /// Whitespace
    Space,

    /// `(` or `.`
    Open,

    /// Anything else, including rendered placeholders
    Word,

    /// A qualification prefix the next token attaches to
    Glue,
}

impl Tail {
    fn after(text: &str) -> Tail {
        match text.chars().next_back() {
            None => Tail::Start,
            Some(ch) if ch.is_whitespace() => Tail::Space,
            Some('(' | '.') => Tail::Open,
            Some(_) => Tail::Word,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Spacer {
    tail: Tail,
    pretty: bool,
    indent: usize,

    /// True when the current line has no tokens yet
    line_start: bool,
}

impl Spacer {
    pub(crate) fn new(pretty: bool) -> Spacer {
        Spacer {
            tail: Tail::Start,
            pretty,
            indent: 0,
            line_start: true,
        }
    }

    /// A spacer for a separately rendered fragment (a cycle body) at the
    /// current indentation.
    pub(crate) fn fresh(&self) -> Spacer {
        Spacer {
            indent: self.indent,
            ..Spacer::new(self.pretty)
        }
    }

    /// Appends a token, inserting a separating space when neither side
    /// already provides one.
    pub(crate) fn text(&mut self, dst: &mut String, text: &str) {
        let Some(first) = text.chars().next() else {
            return;
        };

        if first == ')' {
            erase_trailing_space(dst);
        } else if self.tail == Tail::Word
            && !first.is_whitespace()
            && !matches!(first, ',' | '.' | ';')
        {
            dst.push(' ');
        }

        dst.push_str(text);
        self.tail = Tail::after(text);
        self.line_start = false;
    }

    /// Called before a node whose text is only known at bind time.
    pub(crate) fn before_opaque(&mut self, dst: &mut String) {
        if self.tail == Tail::Word {
            dst.push(' ');
            self.tail = Tail::Space;
        }
    }

    /// Called after a node whose text is only known at bind time. Prefix
    /// placeholders glue to the following token.
    pub(crate) fn after_opaque(&mut self, glue: bool) {
        self.tail = if glue { Tail::Glue } else { Tail::Word };
        self.line_start = false;
    }

    pub(crate) fn delimiter(&mut self, dst: &mut String, text: &str, kind: DelimiterKind) {
        self.text(dst, text);

        if self.pretty && kind.breaks_line() {
            self.newline(dst);
        }
    }

    pub(crate) fn enter(&mut self, dst: &mut String, requires_indent: bool) {
        if self.pretty && requires_indent {
            self.indent += 1;
            self.newline(dst);
        }
    }

    pub(crate) fn exit(&mut self, dst: &mut String, requires_indent: bool) {
        if self.pretty && requires_indent {
            self.indent = self.indent.saturating_sub(1);

            if self.line_start {
                self.reindent(dst);
            } else {
                self.newline(dst);
            }
        }
    }

    fn newline(&mut self, dst: &mut String) {
        if self.line_start {
            return;
        }

        dst.push('\n');
        self.push_indent(dst);
        self.tail = Tail::Start;
        self.line_start = true;
    }

    /// Replaces the indentation of a line that has no tokens yet.
    fn reindent(&mut self, dst: &mut String) {
        let Some(pos) = dst.rfind('\n') else {
            return;
        };

        if dst[pos + 1..].bytes().all(|b| b == b' ') {
            dst.truncate(pos + 1);
            self.push_indent(dst);
        }
    }

    fn push_indent(&self, dst: &mut String) {
        for _ in 0..self.indent {
            dst.push_str(INDENT);
        }
    }
}

/// A closing parenthesis swallows a single separating space before it.
fn erase_trailing_space(dst: &mut String) {
    let mut chars = dst.chars().rev();
    if chars.next() == Some(' ') && chars.next().is_some_and(|ch| !ch.is_whitespace()) {
        dst.pop();
    }
}
