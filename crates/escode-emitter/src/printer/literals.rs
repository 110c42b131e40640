use std::fmt::Write as _;

use escode_ast::ast::{Literal, LiteralValue, TemplateLiteral};
use escode_ast::kind::NodeKind;

use super::{EmitResult, Printer, Side};
use crate::error::EmitError;
use crate::flags::{ExprContext, TokenFlags};
use crate::precedence::Precedence;
use crate::writer::{PunctPosition, TextWriter};

impl<W: TextWriter> Printer<W> {
    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn emit_literal(&mut self, node: &Literal) -> EmitResult {
        // The raw source form, when present, is authoritative.
        if let Some(raw) = &node.raw {
            self.writer.write_token(raw);
            return Ok(());
        }
        match &node.value {
            LiteralValue::Null => {
                self.writer.write_keyword("null", TokenFlags::empty());
                Ok(())
            }
            LiteralValue::Boolean(value) => {
                self.writer
                    .write_keyword(if *value { "true" } else { "false" }, TokenFlags::empty());
                Ok(())
            }
            LiteralValue::Number(_) => {
                let text = self.format_number(node).ok_or(EmitError::invalid(
                    NodeKind::Literal,
                    "numeric literal has no source form",
                ))?;
                self.writer.write_token(&text);
                Ok(())
            }
            LiteralValue::String(value) => {
                let quoted = quote_string(value, self.single_quote);
                self.writer.write_token(&quoted);
                Ok(())
            }
            LiteralValue::BigInt(digits) => {
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(EmitError::invalid(
                        NodeKind::Literal,
                        "malformed bigint digits",
                    ));
                }
                self.writer.write_token(&format!("{digits}n"));
                Ok(())
            }
            LiteralValue::Regex { pattern, flags } => {
                // An empty pattern would produce `//`, a line comment.
                let pattern = if pattern.is_empty() { "(?:)" } else { pattern };
                self.writer.write_token(&format!("/{pattern}/{flags}"));
                Ok(())
            }
        }
    }

    /// Source text for a numeric literal value; `None` when the value has
    /// no literal spelling (negative, NaN, infinite).
    pub(super) fn format_number(&self, node: &Literal) -> Option<String> {
        let LiteralValue::Number(value) = node.value else {
            return None;
        };
        if !value.is_finite() || value.is_sign_negative() {
            return None;
        }
        Some(format!("{value}"))
    }

    // =========================================================================
    // Templates
    // =========================================================================

    pub(super) fn emit_template_literal(&mut self, node: &TemplateLiteral) -> EmitResult {
        if node.quasis.len() != node.expressions.len() + 1 {
            return Err(EmitError::invalid(
                NodeKind::TemplateLiteral,
                "quasi count must be one more than expression count",
            ));
        }
        self.writer
            .write_punct("`", PunctPosition::Leading, TokenFlags::empty());
        for (index, quasi) in node.quasis.iter().enumerate() {
            if !quasi.raw.is_empty() {
                self.writer.write_token(&quasi.raw);
            }
            if let Some(expression) = node.expressions.get(index) {
                self.writer
                    .write_punct("${", PunctPosition::Leading, TokenFlags::empty());
                self.emit_operand(
                    expression,
                    Precedence::UNDEFINED,
                    Side::Neither,
                    ExprContext::isolated(),
                )?;
                self.writer
                    .write_punct("}", PunctPosition::Trailing, TokenFlags::empty());
            }
        }
        self.writer
            .write_punct("`", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }
}

/// Quote and escape a cooked string value.
fn quote_string(value: &str, single_quote: bool) -> String {
    let quote = if single_quote { '\'' } else { '"' };
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            // `\0` followed by a digit would read as a legacy octal escape.
            '\0' => {
                if chars.peek().is_some_and(|next| next.is_ascii_digit()) {
                    out.push_str("\\u0000");
                } else {
                    out.push_str("\\0");
                }
            }
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\x7F' => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
