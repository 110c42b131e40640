//! K&R ("Egyptian brace") block strategy.
//!
//! Honors the printer's spacing recommendations, indents statement bodies,
//! and keeps opening braces on the line of their statement head. Tokens
//! flagged as following a statement body (`else`, `catch`, the `while` of
//! `do..while`) continue on the closing brace's line when the body was a
//! block, and are forced onto their own line otherwise.
//!
//! Recommended trailing spaces are deferred until the next token arrives; a
//! line break in between cancels them, so no line ever ends in whitespace.

use super::{PunctPosition, TextWriter};
use crate::flags::TokenFlags;

#[derive(Debug, Clone)]
pub struct KnROptions {
    /// Render an empty block body as `{ }` on one line instead of an
    /// opening and closing brace on separate lines.
    pub keep_empty_block_on_line: bool,
    /// One level of indentation.
    pub indent_unit: String,
}

impl Default for KnROptions {
    fn default() -> KnROptions {
        KnROptions {
            keep_empty_block_on_line: true,
            indent_unit: "    ".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct KnRWriter {
    out: String,
    options: KnROptions,
    indent: usize,
    pending_newline: bool,
    pending_space: bool,
    /// The last emitted token was the closing brace of a statement body.
    after_block: bool,
}

impl KnRWriter {
    pub fn new(options: KnROptions) -> KnRWriter {
        KnRWriter {
            out: String::new(),
            options,
            indent: 0,
            pending_newline: false,
            pending_space: false,
            after_block: false,
        }
    }

    fn flush_line(&mut self) {
        if self.pending_newline {
            self.pending_newline = false;
            self.pending_space = false;
            if !self.out.is_empty() {
                self.out.push('\n');
            }
            for _ in 0..self.indent {
                self.out.push_str(&self.options.indent_unit);
            }
        }
    }

    fn space_needed(&self) -> bool {
        match self.out.chars().last() {
            None => false,
            Some(c) => !matches!(c, ' ' | '\n' | '(' | '['),
        }
    }

    fn push(&mut self, text: &str, flags: TokenFlags) {
        self.flush_line();
        if (self.pending_space || flags.contains(TokenFlags::LEADING_SPACE_RECOMMENDED))
            && self.space_needed()
        {
            self.out.push(' ');
        }
        self.pending_space = false;
        self.out.push_str(text);
        if flags.contains(TokenFlags::TRAILING_SPACE_RECOMMENDED) {
            self.pending_space = true;
        }
        self.after_block = false;
    }
}

impl TextWriter for KnRWriter {
    fn write_token(&mut self, token: &str) {
        self.push(token, TokenFlags::empty());
    }

    fn write_keyword(&mut self, keyword: &str, flags: TokenFlags) {
        if flags.contains(TokenFlags::FOLLOWS_STATEMENT_BODY) {
            if self.after_block {
                // Continue on the `}` line: `} else`, `} while (...)`.
                self.pending_newline = false;
                self.pending_space = true;
            } else {
                self.pending_newline = true;
            }
        }
        self.push(keyword, flags);
    }

    fn write_punct(&mut self, punct: &str, _position: PunctPosition, flags: TokenFlags) {
        self.push(punct, flags);
    }

    fn write_semicolon(&mut self, _optional: bool) {
        self.pending_space = false;
        self.out.push(';');
        self.after_block = false;
    }

    fn write_space(&mut self) {
        self.flush_line();
        self.pending_space = false;
        if self.space_needed() {
            self.out.push(' ');
        }
    }

    fn open_block(&mut self, empty: bool) {
        self.flush_line();
        self.pending_space = false;
        if self.space_needed() {
            self.out.push(' ');
        }
        self.out.push('{');
        self.after_block = false;
        if !(empty && self.options.keep_empty_block_on_line) {
            self.indent += 1;
            self.pending_newline = true;
        }
    }

    fn close_block(&mut self, empty: bool) {
        if empty && self.options.keep_empty_block_on_line {
            self.out.push_str(" }");
        } else {
            self.indent -= 1;
            self.pending_newline = true;
            self.flush_line();
            self.out.push('}');
        }
        self.pending_newline = true;
        self.after_block = true;
    }

    fn open_body(&mut self) {
        self.indent += 1;
        self.pending_newline = true;
        self.after_block = false;
    }

    fn close_body(&mut self) {
        self.indent -= 1;
        self.pending_newline = true;
    }

    fn end_statement(&mut self) {
        self.pending_newline = true;
    }

    fn finish(self) -> String {
        self.out
    }
}
