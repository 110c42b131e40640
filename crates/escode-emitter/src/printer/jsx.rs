use escode_ast::ast::*;
use escode_ast::kind::NodeKind;

use super::{EmitResult, Printer, Side};
use crate::error::EmitError;
use crate::flags::{ExprContext, TokenFlags};
use crate::precedence::Precedence;
use crate::writer::{PunctPosition, TextWriter};

impl<W: TextWriter> Printer<W> {
    // =========================================================================
    // JSX
    // =========================================================================

    pub(super) fn emit_jsx_element(&mut self, node: &JsxElement) -> EmitResult {
        self.emit_jsx_opening_element(&node.opening)?;
        self.emit_jsx_children(&node.children)?;
        if let Some(closing) = &node.closing {
            self.emit_jsx_closing_element(closing)?;
        }
        Ok(())
    }

    pub(super) fn emit_jsx_fragment(&mut self, node: &JsxFragment) -> EmitResult {
        self.writer
            .write_punct("<>", PunctPosition::Leading, TokenFlags::empty());
        self.emit_jsx_children(&node.children)?;
        self.writer
            .write_punct("</>", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }

    fn emit_jsx_opening_element(&mut self, node: &JsxOpeningElement) -> EmitResult {
        self.writer
            .write_punct("<", PunctPosition::Leading, TokenFlags::empty());
        self.emit_jsx_element_name(&node.name)?;
        for attribute in &node.attributes {
            self.writer.write_space();
            match attribute {
                JsxAttributeItem::Attribute(attr) => self.emit_jsx_attribute(attr)?,
                JsxAttributeItem::Spread(spread) => self.emit_jsx_spread_attribute(spread)?,
            }
        }
        if node.self_closing {
            self.writer.write_space();
            self.writer
                .write_punct("/>", PunctPosition::Trailing, TokenFlags::empty());
        } else {
            self.writer
                .write_punct(">", PunctPosition::Trailing, TokenFlags::empty());
        }
        Ok(())
    }

    fn emit_jsx_closing_element(&mut self, node: &JsxClosingElement) -> EmitResult {
        self.writer
            .write_punct("</", PunctPosition::Leading, TokenFlags::empty());
        self.emit_jsx_element_name(&node.name)?;
        self.writer
            .write_punct(">", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }

    fn emit_jsx_children(&mut self, children: &[JsxChild]) -> EmitResult {
        for child in children {
            match child {
                JsxChild::Text(text) => self.writer.write_token(&text.value),
                JsxChild::Element(element) => self.emit_jsx_element(element)?,
                JsxChild::Fragment(fragment) => self.emit_jsx_fragment(fragment)?,
                JsxChild::Container(container) => self.emit_jsx_expression_container(container)?,
            }
        }
        Ok(())
    }

    fn emit_jsx_expression_container(&mut self, node: &JsxExpressionContainer) -> EmitResult {
        self.writer
            .write_punct("{", PunctPosition::Leading, TokenFlags::empty());
        if let Some(expression) = &node.expression {
            self.emit_operand(
                expression,
                Precedence::UNDEFINED,
                Side::Neither,
                ExprContext::isolated(),
            )?;
        }
        self.writer
            .write_punct("}", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }

    fn emit_jsx_element_name(&mut self, name: &JsxElementName) -> EmitResult {
        match name {
            JsxElementName::Identifier(identifier) => self.emit_jsx_identifier(identifier),
            JsxElementName::Member(member) => {
                self.emit_jsx_element_name(&member.object)?;
                self.writer
                    .write_punct(".", PunctPosition::InBetween, TokenFlags::empty());
                self.emit_jsx_identifier(&member.property)
            }
            JsxElementName::Namespaced(namespaced) => self.emit_jsx_namespaced_name(namespaced),
        }
    }

    fn emit_jsx_namespaced_name(&mut self, name: &JsxNamespacedName) -> EmitResult {
        self.emit_jsx_identifier(&name.namespace)?;
        self.writer
            .write_punct(":", PunctPosition::InBetween, TokenFlags::empty());
        self.emit_jsx_identifier(&name.name)
    }

    fn emit_jsx_identifier(&mut self, identifier: &JsxIdentifier) -> EmitResult {
        if identifier.name.is_empty() {
            return Err(EmitError::invalid(NodeKind::JsxIdentifier, "empty name"));
        }
        self.writer.write_token(&identifier.name);
        Ok(())
    }

    fn emit_jsx_attribute(&mut self, node: &JsxAttribute) -> EmitResult {
        match &node.name {
            JsxAttributeName::Identifier(identifier) => self.emit_jsx_identifier(identifier)?,
            JsxAttributeName::Namespaced(namespaced) => self.emit_jsx_namespaced_name(namespaced)?,
        }
        if let Some(value) = &node.value {
            self.writer
                .write_punct("=", PunctPosition::InBetween, TokenFlags::empty());
            match value {
                JsxAttributeValue::String(literal) => self.emit_jsx_attribute_string(literal)?,
                JsxAttributeValue::Container(container) => {
                    self.emit_jsx_expression_container(container)?;
                }
                JsxAttributeValue::Element(element) => self.emit_jsx_element(element)?,
                JsxAttributeValue::Fragment(fragment) => self.emit_jsx_fragment(fragment)?,
            }
        }
        Ok(())
    }

    fn emit_jsx_spread_attribute(&mut self, node: &JsxSpreadAttribute) -> EmitResult {
        self.writer
            .write_punct("{...", PunctPosition::Leading, TokenFlags::empty());
        self.emit_operand(
            &node.argument,
            Precedence::UNDEFINED,
            Side::Neither,
            ExprContext::isolated(),
        )?;
        self.writer
            .write_punct("}", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }

    /// JSX attribute strings are literal text: no backslash escapes exist,
    /// so the value must fit the chosen quote.
    fn emit_jsx_attribute_string(&mut self, literal: &Literal) -> EmitResult {
        if let Some(raw) = &literal.raw {
            self.writer.write_token(raw);
            return Ok(());
        }
        let LiteralValue::String(value) = &literal.value else {
            return Err(EmitError::invalid(
                NodeKind::JsxAttribute,
                "attribute value must be a string literal",
            ));
        };
        let quote = if value.contains('"') {
            if value.contains('\'') {
                return Err(EmitError::invalid(
                    NodeKind::JsxAttribute,
                    "attribute value mixes both quote characters",
                ));
            }
            '\''
        } else {
            '"'
        };
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push(quote);
        quoted.push_str(value);
        quoted.push(quote);
        self.writer.write_token(&quoted);
        Ok(())
    }
}
