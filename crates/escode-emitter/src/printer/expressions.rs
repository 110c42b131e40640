use std::rc::Rc;

use escode_ast::ast::*;
use escode_ast::kind::NodeKind;
use escode_ast::ops::LogicalOperator;

use super::{EmitResult, Printer, Side};
use crate::error::EmitError;
use crate::flags::{ExprContext, TokenFlags};
use crate::precedence::{Associativity, Precedence, binary_precedence, logical_precedence, rank};
use crate::writer::{PunctPosition, TextWriter};

impl<W: TextWriter> Printer<W> {
    // =========================================================================
    // Expressions
    // =========================================================================

    pub(super) fn emit_identifier(&mut self, node: &Identifier) -> EmitResult {
        if node.name.is_empty() {
            return Err(EmitError::invalid(NodeKind::Identifier, "empty name"));
        }
        self.writer.write_token(&node.name);
        Ok(())
    }

    pub(super) fn emit_private_identifier(&mut self, node: &PrivateIdentifier) -> EmitResult {
        if node.name.is_empty() {
            return Err(EmitError::invalid(NodeKind::PrivateIdentifier, "empty name"));
        }
        self.writer.write_punct("#", PunctPosition::Leading, TokenFlags::empty());
        self.writer.write_token(&node.name);
        Ok(())
    }

    pub(super) fn emit_array_expression(&mut self, node: &ArrayExpression) -> EmitResult {
        self.writer
            .write_punct("[", PunctPosition::Leading, TokenFlags::empty());
        for (index, element) in node.elements.iter().enumerate() {
            if index > 0 {
                self.writer.write_punct(
                    ",",
                    PunctPosition::InBetween,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
            }
            match element {
                ArrayElement::Expression(e) => {
                    self.emit_operand(e, assignment_position(), Side::Neither, ExprContext::isolated())?;
                }
                ArrayElement::Spread(spread) => self.emit_spread_element(spread)?,
                ArrayElement::Hole => {}
            }
        }
        // A trailing elision needs its own comma to survive reparsing.
        if matches!(node.elements.last(), Some(ArrayElement::Hole)) {
            self.writer
                .write_punct(",", PunctPosition::InBetween, TokenFlags::empty());
        }
        self.writer
            .write_punct("]", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }

    pub(super) fn emit_spread_element(&mut self, node: &SpreadElement) -> EmitResult {
        self.writer
            .write_punct("...", PunctPosition::Leading, TokenFlags::empty());
        self.emit_operand(
            &node.argument,
            assignment_position(),
            Side::Neither,
            ExprContext::isolated(),
        )
    }

    pub(super) fn emit_object_expression(&mut self, node: &ObjectExpression) -> EmitResult {
        let empty = node.properties.is_empty();
        self.writer.write_punct(
            "{",
            PunctPosition::Leading,
            if empty {
                TokenFlags::empty()
            } else {
                TokenFlags::TRAILING_SPACE_RECOMMENDED
            },
        );
        for (index, member) in node.properties.iter().enumerate() {
            if index > 0 {
                self.writer.write_punct(
                    ",",
                    PunctPosition::InBetween,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
            }
            match member {
                ObjectMember::Property(property) => self.emit_object_property(property)?,
                ObjectMember::Spread(spread) => self.emit_spread_element(spread)?,
            }
        }
        self.writer.write_punct(
            "}",
            PunctPosition::Trailing,
            if empty {
                TokenFlags::empty()
            } else {
                TokenFlags::LEADING_SPACE_RECOMMENDED
            },
        );
        Ok(())
    }

    fn emit_object_property(&mut self, node: &Property) -> EmitResult {
        match node.kind {
            PropertyKind::Get | PropertyKind::Set => {
                let Expression::Function(function) = &node.value else {
                    return Err(EmitError::invalid(
                        NodeKind::Property,
                        "accessor value must be a function expression",
                    ));
                };
                let keyword = if node.kind == PropertyKind::Get { "get" } else { "set" };
                self.writer
                    .write_keyword(keyword, TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.emit_property_key(&node.key)?;
                return self.emit_function_params_and_body(function);
            }
            PropertyKind::Init => {}
        }

        if node.method {
            let Expression::Function(function) = &node.value else {
                return Err(EmitError::invalid(
                    NodeKind::Property,
                    "method value must be a function expression",
                ));
            };
            return self.emit_method_shorthand(&node.key, function);
        }

        if node.shorthand && !matches!(node.key, PropertyKey::Computed(_)) {
            return self.emit_property_key(&node.key);
        }

        self.emit_property_key(&node.key)?;
        self.writer.write_punct(
            ":",
            PunctPosition::InBetween,
            TokenFlags::TRAILING_SPACE_RECOMMENDED,
        );
        self.emit_operand(
            &node.value,
            assignment_position(),
            Side::Neither,
            ExprContext::isolated(),
        )
    }

    /// `*name(params) { ... }` with async/generator markers, shared by
    /// object methods and class methods.
    pub(super) fn emit_method_shorthand(
        &mut self,
        key: &PropertyKey,
        function: &Function,
    ) -> EmitResult {
        if function.is_async {
            self.writer
                .write_keyword("async", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        }
        if function.is_generator {
            self.writer
                .write_punct("*", PunctPosition::Leading, TokenFlags::empty());
        }
        self.emit_property_key(key)?;
        self.emit_function_params_and_body(function)
    }

    pub(super) fn emit_property_key(&mut self, key: &PropertyKey) -> EmitResult {
        match key {
            PropertyKey::Identifier(n) => self.emit_identifier(n),
            PropertyKey::Private(n) => self.emit_private_identifier(n),
            PropertyKey::Literal(n) => self.emit_literal(n),
            PropertyKey::Computed(e) => {
                self.writer
                    .write_punct("[", PunctPosition::Leading, TokenFlags::empty());
                self.emit_operand(e, assignment_position(), Side::Neither, ExprContext::isolated())?;
                self.writer
                    .write_punct("]", PunctPosition::Trailing, TokenFlags::empty());
                Ok(())
            }
        }
    }

    pub(super) fn emit_member_expression(
        &mut self,
        node: &MemberExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        // `1.x` lexes the dot into the number; a bare integer object needs
        // brackets regardless of precedence.
        if self.is_bare_integer_literal(&node.object) {
            self.writer
                .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
            self.emit_expression(&node.object, ExprContext::isolated())?;
            self.writer
                .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
        } else {
            self.emit_operand(
                &node.object,
                member_position(),
                Side::Left,
                ctx.leftmost_child(),
            )?;
        }
        match &node.property {
            MemberProperty::Identifier(n) => {
                self.writer.write_punct(
                    if node.optional { "?." } else { "." },
                    PunctPosition::InBetween,
                    TokenFlags::empty(),
                );
                self.emit_identifier(n)
            }
            MemberProperty::Private(n) => {
                self.writer.write_punct(
                    if node.optional { "?." } else { "." },
                    PunctPosition::InBetween,
                    TokenFlags::empty(),
                );
                self.emit_private_identifier(n)
            }
            MemberProperty::Computed(e) => {
                self.writer.write_punct(
                    if node.optional { "?.[" } else { "[" },
                    PunctPosition::Leading,
                    TokenFlags::empty(),
                );
                self.emit_operand(e, Precedence::UNDEFINED, Side::Neither, ExprContext::isolated())?;
                self.writer
                    .write_punct("]", PunctPosition::Trailing, TokenFlags::empty());
                Ok(())
            }
        }
    }

    pub(super) fn emit_call_expression(
        &mut self,
        node: &CallExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        self.emit_operand(
            &node.callee,
            member_position(),
            Side::Left,
            ctx.leftmost_child(),
        )?;
        if node.optional {
            self.writer
                .write_punct("?.", PunctPosition::InBetween, TokenFlags::empty());
        }
        self.emit_arguments(&node.arguments)
    }

    pub(super) fn emit_new_expression(
        &mut self,
        node: &NewExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("new", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        let callee_ctx = ExprContext::LEFTMOST
            | ExprContext::IN_NEW_CALLEE
            | (ctx & ExprContext::IN_FOR_INIT);
        self.emit_operand(&node.callee, member_position(), Side::Left, callee_ctx)?;
        if node.explicit_arguments || !node.arguments.is_empty() {
            self.emit_arguments(&node.arguments)?;
        }
        Ok(())
    }

    pub(super) fn emit_arguments(&mut self, arguments: &[Argument]) -> EmitResult {
        self.writer
            .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
        for (index, argument) in arguments.iter().enumerate() {
            if index > 0 {
                self.writer.write_punct(
                    ",",
                    PunctPosition::InBetween,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
            }
            match argument {
                Argument::Expression(e) => {
                    self.emit_operand(e, assignment_position(), Side::Neither, ExprContext::isolated())?;
                }
                Argument::Spread(spread) => self.emit_spread_element(spread)?,
            }
        }
        self.writer
            .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }

    pub(super) fn emit_import_expression(&mut self, node: &ImportExpression) -> EmitResult {
        self.writer.write_keyword("import", TokenFlags::empty());
        self.writer
            .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
        self.emit_operand(
            &node.source,
            assignment_position(),
            Side::Neither,
            ExprContext::isolated(),
        )?;
        self.writer
            .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }

    pub(super) fn emit_meta_property(&mut self, node: &MetaProperty) -> EmitResult {
        self.emit_identifier(&node.meta)?;
        self.writer
            .write_punct(".", PunctPosition::InBetween, TokenFlags::empty());
        self.emit_identifier(&node.property)
    }

    pub(super) fn emit_sequence_expression(
        &mut self,
        node: &SequenceExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        let prec = Precedence::new(rank::SEQUENCE, Associativity::Left);
        for (index, expression) in node.expressions.iter().enumerate() {
            if index > 0 {
                self.writer.write_punct(
                    ",",
                    PunctPosition::InBetween,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
            }
            let (side, child_ctx) = if index == 0 {
                (Side::Left, ctx.leftmost_child())
            } else {
                (Side::Right, ctx.operand())
            };
            self.emit_operand(expression, prec, side, child_ctx)?;
        }
        Ok(())
    }

    pub(super) fn emit_unary_expression(
        &mut self,
        node: &UnaryExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        if node.operator.is_keyword() {
            self.writer
                .write_keyword(node.operator.as_str(), TokenFlags::TRAILING_SPACE_RECOMMENDED);
        } else {
            self.writer
                .write_punct(node.operator.as_str(), PunctPosition::Leading, TokenFlags::empty());
        }
        self.emit_operand(&node.argument, unary_position(), Side::Neither, ctx.operand())
    }

    pub(super) fn emit_update_expression(
        &mut self,
        node: &UpdateExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        if node.prefix {
            self.writer.write_punct(
                node.operator.as_str(),
                PunctPosition::Leading,
                TokenFlags::empty(),
            );
            self.emit_operand(&node.argument, unary_position(), Side::Neither, ctx.operand())
        } else {
            self.emit_operand(
                &node.argument,
                Precedence::new(rank::POSTFIX, Associativity::Neither),
                Side::Neither,
                ctx.leftmost_child(),
            )?;
            self.writer.write_punct(
                node.operator.as_str(),
                PunctPosition::Trailing,
                TokenFlags::empty(),
            );
            Ok(())
        }
    }

    pub(super) fn emit_binary_expression(
        &mut self,
        node: &BinaryExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        let prec = binary_precedence(node.operator);
        self.emit_operand(&node.left, prec, Side::Left, ctx.leftmost_child())?;
        if node.operator.is_keyword() {
            self.writer.write_keyword(
                node.operator.as_str(),
                TokenFlags::SPACE_AROUND_RECOMMENDED,
            );
        } else {
            self.writer.write_punct(
                node.operator.as_str(),
                PunctPosition::InBetween,
                TokenFlags::SPACE_AROUND_RECOMMENDED,
            );
        }
        self.emit_operand(&node.right, prec, Side::Right, ctx.operand())
    }

    pub(super) fn emit_logical_expression(
        &mut self,
        node: &LogicalExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        let prec = logical_precedence(node.operator);
        self.emit_logical_operand(node.operator, &node.left, prec, Side::Left, ctx.leftmost_child())?;
        self.writer.write_punct(
            node.operator.as_str(),
            PunctPosition::InBetween,
            TokenFlags::SPACE_AROUND_RECOMMENDED,
        );
        self.emit_logical_operand(node.operator, &node.right, prec, Side::Right, ctx.operand())
    }

    /// `??` may not share an unbracketed operand with `&&`/`||` in either
    /// direction; precedence ranks alone cannot express that restriction.
    fn emit_logical_operand(
        &mut self,
        parent: LogicalOperator,
        child: &Expression,
        prec: Precedence,
        side: Side,
        ctx: ExprContext,
    ) -> EmitResult {
        let mixes_nullish = match child {
            Expression::Logical(inner) => matches!(
                (parent, inner.operator),
                (
                    LogicalOperator::NullishCoalescing,
                    LogicalOperator::And | LogicalOperator::Or
                ) | (
                    LogicalOperator::And | LogicalOperator::Or,
                    LogicalOperator::NullishCoalescing
                )
            ),
            _ => false,
        };
        if mixes_nullish {
            self.writer
                .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
            self.emit_expression(child, ExprContext::isolated())?;
            self.writer
                .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
            Ok(())
        } else {
            self.emit_operand(child, prec, side, ctx)
        }
    }

    pub(super) fn emit_assignment_expression(
        &mut self,
        node: &AssignmentExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        self.emit_pattern(&node.left, ctx.leftmost_child())?;
        self.writer.write_punct(
            node.operator.as_str(),
            PunctPosition::InBetween,
            TokenFlags::SPACE_AROUND_RECOMMENDED,
        );
        self.emit_operand(&node.right, assignment_position(), Side::Right, ctx.operand())
    }

    pub(super) fn emit_conditional_expression(
        &mut self,
        node: &ConditionalExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        let prec = assignment_position();
        self.emit_operand(&node.test, prec, Side::Left, ctx.leftmost_child())?;
        self.writer.write_punct(
            "?",
            PunctPosition::InBetween,
            TokenFlags::SPACE_AROUND_RECOMMENDED,
        );
        // The middle operand is bracketed by `? :` on both sides; even the
        // `for`-head `in` restriction does not reach it.
        self.emit_operand(&node.consequent, prec, Side::Neither, ExprContext::isolated())?;
        self.writer.write_punct(
            ":",
            PunctPosition::InBetween,
            TokenFlags::SPACE_AROUND_RECOMMENDED,
        );
        self.emit_operand(&node.alternate, prec, Side::Right, ctx.operand())
    }

    pub(super) fn emit_yield_expression(
        &mut self,
        node: &YieldExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        if node.delegate {
            self.writer.write_keyword("yield", TokenFlags::empty());
            self.writer.write_punct(
                "*",
                PunctPosition::InBetween,
                TokenFlags::TRAILING_SPACE_RECOMMENDED,
            );
        } else if node.argument.is_some() {
            self.writer
                .write_keyword("yield", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        } else {
            self.writer.write_keyword("yield", TokenFlags::empty());
        }
        if let Some(argument) = &node.argument {
            self.emit_operand(argument, assignment_position(), Side::Right, ctx.operand())?;
        }
        Ok(())
    }

    pub(super) fn emit_await_expression(
        &mut self,
        node: &AwaitExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("await", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.emit_operand(&node.argument, unary_position(), Side::Neither, ctx.operand())
    }

    pub(super) fn emit_arrow_function(
        &mut self,
        node: &ArrowFunctionExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        if node.is_async {
            self.writer
                .write_keyword("async", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        }
        self.writer
            .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
        for (index, param) in node.params.iter().enumerate() {
            if index > 0 {
                self.writer.write_punct(
                    ",",
                    PunctPosition::InBetween,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
            }
            self.emit_pattern(param, ExprContext::isolated())?;
        }
        self.writer
            .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
        self.writer.write_punct(
            "=>",
            PunctPosition::InBetween,
            TokenFlags::SPACE_AROUND_RECOMMENDED,
        );
        match &node.body {
            ArrowBody::Block(block) => self.emit_block(block),
            ArrowBody::Expression(expression) => {
                let body_ctx = ExprContext::LEFTMOST
                    | ExprContext::IN_ARROW_BODY
                    | (ctx & ExprContext::IN_FOR_INIT);
                self.emit_operand(expression, assignment_position(), Side::Right, body_ctx)
            }
        }
    }

    pub(super) fn emit_tagged_template(
        &mut self,
        node: &TaggedTemplateExpression,
        ctx: ExprContext,
    ) -> EmitResult {
        self.emit_operand(&node.tag, member_position(), Side::Left, ctx.leftmost_child())?;
        self.emit_template_literal(&node.quasi)
    }

    // =========================================================================
    // Patterns
    // =========================================================================

    pub(super) fn emit_pattern(&mut self, pattern: &Pattern, ctx: ExprContext) -> EmitResult {
        match pattern {
            Pattern::Identifier(n) => self.emit_identifier(n),
            Pattern::Member(n) => self.emit_member_expression(n, ctx),
            Pattern::Array(n) => self.emit_array_pattern(n),
            Pattern::Object(n) => self.emit_object_pattern(n),
            Pattern::Assignment(n) => self.emit_assignment_pattern(n, ctx),
            Pattern::Rest(n) => self.emit_rest_element(n),
        }
    }

    fn emit_array_pattern(&mut self, node: &ArrayPattern) -> EmitResult {
        self.writer
            .write_punct("[", PunctPosition::Leading, TokenFlags::empty());
        for (index, element) in node.elements.iter().enumerate() {
            if index > 0 {
                self.writer.write_punct(
                    ",",
                    PunctPosition::InBetween,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
            }
            if let Some(pattern) = element {
                self.emit_pattern(pattern, ExprContext::isolated())?;
            }
        }
        if matches!(node.elements.last(), Some(None)) {
            self.writer
                .write_punct(",", PunctPosition::InBetween, TokenFlags::empty());
        }
        self.writer
            .write_punct("]", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }

    fn emit_object_pattern(&mut self, node: &ObjectPattern) -> EmitResult {
        let empty = node.properties.is_empty();
        self.writer.write_punct(
            "{",
            PunctPosition::Leading,
            if empty {
                TokenFlags::empty()
            } else {
                TokenFlags::TRAILING_SPACE_RECOMMENDED
            },
        );
        for (index, property) in node.properties.iter().enumerate() {
            if index > 0 {
                self.writer.write_punct(
                    ",",
                    PunctPosition::InBetween,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
            }
            match property {
                ObjectPatternProperty::Property(p) => {
                    if p.shorthand && !matches!(p.key, PropertyKey::Computed(_)) {
                        self.emit_pattern(&p.value, ExprContext::isolated())?;
                    } else {
                        self.emit_property_key(&p.key)?;
                        self.writer.write_punct(
                            ":",
                            PunctPosition::InBetween,
                            TokenFlags::TRAILING_SPACE_RECOMMENDED,
                        );
                        self.emit_pattern(&p.value, ExprContext::isolated())?;
                    }
                }
                ObjectPatternProperty::Rest(rest) => self.emit_rest_element(rest)?,
            }
        }
        self.writer.write_punct(
            "}",
            PunctPosition::Trailing,
            if empty {
                TokenFlags::empty()
            } else {
                TokenFlags::LEADING_SPACE_RECOMMENDED
            },
        );
        Ok(())
    }

    fn emit_assignment_pattern(&mut self, node: &AssignmentPattern, ctx: ExprContext) -> EmitResult {
        self.emit_pattern(&node.left, ctx.leftmost_child())?;
        self.writer.write_punct(
            "=",
            PunctPosition::InBetween,
            TokenFlags::SPACE_AROUND_RECOMMENDED,
        );
        self.emit_operand(&node.right, assignment_position(), Side::Right, ctx.operand())
    }

    fn emit_rest_element(&mut self, node: &RestElement) -> EmitResult {
        self.writer
            .write_punct("...", PunctPosition::Leading, TokenFlags::empty());
        self.emit_pattern(&node.argument, ExprContext::isolated())
    }

    fn is_bare_integer_literal(&self, expr: &Expression) -> bool {
        let Expression::Literal(literal) = expr else {
            return false;
        };
        let Literal {
            value: LiteralValue::Number(_),
            raw,
        } = Rc::as_ref(literal)
        else {
            return false;
        };
        match raw {
            Some(text) => !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()),
            None => {
                let text = self.format_number(literal);
                text.map_or(false, |t| t.bytes().all(|b| b.is_ascii_digit()))
            }
        }
    }
}

/// Parent precedence of positions that accept one assignment expression
/// (call arguments, array elements, property values, defaults).
pub(super) fn assignment_position() -> Precedence {
    Precedence::new(rank::ASSIGNMENT, Associativity::Right)
}

/// Parent precedence of member objects, callees, and template tags.
pub(super) fn member_position() -> Precedence {
    Precedence::new(rank::MEMBER_CALL, Associativity::Left)
}

fn unary_position() -> Precedence {
    Precedence::new(rank::UNARY, Associativity::Neither)
}
