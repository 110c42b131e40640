//! Compact (single-line) strategy.
//!
//! Honors only the required separations: a space is inserted exactly where
//! two tokens would otherwise merge into a different lexeme (`a+ +b`,
//! `a- --b`, identifier-keyword adjacency, `/` before a regex). Recommended
//! spacing, indentation, and optional semicolons are all dropped.

use super::{PunctPosition, TextWriter};
use crate::flags::TokenFlags;

#[derive(Debug, Default)]
pub struct CompactWriter {
    out: String,
}

impl CompactWriter {
    pub fn new() -> CompactWriter {
        CompactWriter { out: String::new() }
    }

    fn push(&mut self, text: &str) {
        let Some(first) = text.chars().next() else {
            return;
        };
        if let Some(last) = self.out.chars().last()
            && needs_separator(last, first)
        {
            self.out.push(' ');
        }
        self.out.push_str(text);
    }
}

/// Whether `last` directly followed by `next` would change the token
/// stream: identifier characters run together, `+ +`/`- -` collapse into
/// update operators, and `/ /` opens a line comment.
fn needs_separator(last: char, next: char) -> bool {
    let ident = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    (ident(last) && ident(next))
        || (last == '+' && next == '+')
        || (last == '-' && next == '-')
        || (last == '/' && next == '/')
}

impl TextWriter for CompactWriter {
    fn write_token(&mut self, token: &str) {
        self.push(token);
    }

    fn write_keyword(&mut self, keyword: &str, _flags: TokenFlags) {
        self.push(keyword);
    }

    fn write_punct(&mut self, punct: &str, _position: PunctPosition, _flags: TokenFlags) {
        self.push(punct);
    }

    fn write_semicolon(&mut self, optional: bool) {
        if !optional {
            self.out.push(';');
        }
    }

    fn write_space(&mut self) {
        if !self.out.ends_with(' ') {
            self.out.push(' ');
        }
    }

    fn open_block(&mut self, _empty: bool) {
        self.out.push('{');
    }

    fn close_block(&mut self, _empty: bool) {
        self.out.push('}');
    }

    fn open_body(&mut self) {}

    fn close_body(&mut self) {}

    fn end_statement(&mut self) {}

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_merging_signs() {
        let mut w = CompactWriter::new();
        w.write_token("a");
        w.write_punct("+", PunctPosition::InBetween, TokenFlags::empty());
        w.write_punct("+", PunctPosition::Leading, TokenFlags::empty());
        w.write_token("b");
        assert_eq!(w.finish(), "a+ +b");
    }

    #[test]
    fn separates_keyword_from_identifier() {
        let mut w = CompactWriter::new();
        w.write_keyword("typeof", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        w.write_token("x");
        assert_eq!(w.finish(), "typeof x");
    }

    #[test]
    fn no_space_where_tokens_cannot_merge() {
        let mut w = CompactWriter::new();
        w.write_token("a");
        w.write_punct("+", PunctPosition::InBetween, TokenFlags::SPACE_AROUND_RECOMMENDED);
        w.write_token("b");
        assert_eq!(w.finish(), "a+b");
    }

    #[test]
    fn drops_optional_semicolons() {
        let mut w = CompactWriter::new();
        w.write_token("x");
        w.write_semicolon(false);
        w.write_token("y");
        w.write_semicolon(true);
        assert_eq!(w.finish(), "x;y");
    }
}
