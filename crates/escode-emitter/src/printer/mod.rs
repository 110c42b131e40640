//! Recursive-descent unparser.
//!
//! # Architecture
//!
//! `Printer` walks the tree once, exhaustively dispatching on node kind;
//! adding a kind without a handler is a compile error. It decides
//! parenthesization from the precedence table plus the propagated
//! [`ExprContext`] bits, decides semicolons from per-kind [`StmtContext`]
//! bits, and reports everything else as intent to the [`TextWriter`]; the
//! writer strategy owns whitespace, newlines, and optional-semicolon
//! omission.
//!
//! The per-kind emitters are split across submodules the way the
//! constructs group: `expressions`, `statements` (including declarations),
//! `literals`, and `jsx`.

mod expressions;
mod jsx;
mod literals;
mod statements;

use escode_ast::ast::{BlockStatement, Expression, Pattern, Program, Statement};
use escode_ast::ops::BinaryOperator;

use crate::error::EmitError;
use crate::flags::{ExprContext, StmtContext, TokenFlags};
use crate::precedence::{Associativity, Precedence, rank};
use crate::writer::{CompactWriter, KnROptions, KnRWriter, PunctPosition, TextWriter};

pub(crate) type EmitResult = Result<(), EmitError>;

// =============================================================================
// Options and entry points
// =============================================================================

/// Formatting strategy selection.
#[derive(Debug, Clone, Default)]
pub enum Format {
    /// Minimal whitespace, optional semicolons dropped.
    #[default]
    Compact,
    /// Indented K&R-brace output.
    KnR(KnROptions),
}

#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    pub format: Format,
    /// Quote string literals with `'` instead of `"` when the literal has
    /// no raw source form.
    pub single_quote: bool,
}

/// Render `program` with the default compact strategy.
pub fn render(program: &Program) -> Result<String, EmitError> {
    render_with(program, &EmitOptions::default())
}

/// Render `program` with an explicit strategy and options.
#[tracing::instrument(level = "trace", skip_all, fields(statements = program.body.len()))]
pub fn render_with(program: &Program, options: &EmitOptions) -> Result<String, EmitError> {
    match &options.format {
        Format::Compact => {
            let mut printer = Printer::new(CompactWriter::new(), options);
            printer.print_program(program)?;
            Ok(printer.into_output())
        }
        Format::KnR(knr) => {
            let mut printer = Printer::new(KnRWriter::new(knr.clone()), options);
            printer.print_program(program)?;
            Ok(printer.into_output())
        }
    }
}

/// Render a single expression outside any statement context.
pub fn render_expression(
    expression: &Expression,
    options: &EmitOptions,
) -> Result<String, EmitError> {
    match &options.format {
        Format::Compact => {
            let mut printer = Printer::new(CompactWriter::new(), options);
            printer.print_expression(expression)?;
            Ok(printer.into_output())
        }
        Format::KnR(knr) => {
            let mut printer = Printer::new(KnRWriter::new(knr.clone()), options);
            printer.print_expression(expression)?;
            Ok(printer.into_output())
        }
    }
}

// =============================================================================
// Printer
// =============================================================================

/// Which side of its parent operator an operand occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
    /// Standalone operand position (unary argument, list item).
    Neither,
}

pub struct Printer<W: TextWriter> {
    writer: W,
    single_quote: bool,
}

impl<W: TextWriter> Printer<W> {
    pub fn new(writer: W, options: &EmitOptions) -> Printer<W> {
        Printer {
            writer,
            single_quote: options.single_quote,
        }
    }

    pub fn print_program(&mut self, program: &Program) -> EmitResult {
        self.emit_statement_list(&program.body, StmtContext::RIGHTMOST)
    }

    pub fn print_expression(&mut self, expression: &Expression) -> EmitResult {
        self.emit_operand(
            expression,
            Precedence::UNDEFINED,
            Side::Neither,
            ExprContext::empty(),
        )
    }

    pub fn into_output(self) -> String {
        self.writer.finish()
    }

    // =========================================================================
    // Expression dispatch and parenthesization
    // =========================================================================

    /// Emit `expr` in operand position, bracketing it when the precedence
    /// comparison against the parent or a propagated ambiguity bit demands
    /// it. Emitted parentheses isolate the subtree from the inherited
    /// context.
    pub(super) fn emit_operand(
        &mut self,
        expr: &Expression,
        parent: Precedence,
        side: Side,
        ctx: ExprContext,
    ) -> EmitResult {
        if needs_parens(expr, parent, side, ctx) {
            self.writer
                .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
            self.emit_expression(expr, ExprContext::isolated())?;
            self.writer
                .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
            Ok(())
        } else {
            self.emit_expression(expr, ctx)
        }
    }

    pub(super) fn emit_expression(&mut self, expr: &Expression, ctx: ExprContext) -> EmitResult {
        match expr {
            Expression::Array(n) => self.emit_array_expression(n),
            Expression::Arrow(n) => self.emit_arrow_function(n, ctx),
            Expression::Assignment(n) => self.emit_assignment_expression(n, ctx),
            Expression::Await(n) => self.emit_await_expression(n, ctx),
            Expression::Binary(n) => self.emit_binary_expression(n, ctx),
            Expression::Call(n) => self.emit_call_expression(n, ctx),
            Expression::Chain(n) => self.emit_expression(&n.expression, ctx),
            Expression::Class(n) => self.emit_class(n),
            Expression::Conditional(n) => self.emit_conditional_expression(n, ctx),
            Expression::Function(n) => self.emit_function(n),
            Expression::Identifier(n) => self.emit_identifier(n),
            Expression::Import(n) => self.emit_import_expression(n),
            Expression::Literal(n) => self.emit_literal(n),
            Expression::Logical(n) => self.emit_logical_expression(n, ctx),
            Expression::Member(n) => self.emit_member_expression(n, ctx),
            Expression::MetaProperty(n) => self.emit_meta_property(n),
            Expression::New(n) => self.emit_new_expression(n, ctx),
            Expression::Object(n) => self.emit_object_expression(n),
            Expression::Sequence(n) => self.emit_sequence_expression(n, ctx),
            Expression::Super(_) => {
                self.writer.write_keyword("super", TokenFlags::empty());
                Ok(())
            }
            Expression::TaggedTemplate(n) => self.emit_tagged_template(n, ctx),
            Expression::Template(n) => self.emit_template_literal(n),
            Expression::This(_) => {
                self.writer.write_keyword("this", TokenFlags::empty());
                Ok(())
            }
            Expression::Unary(n) => self.emit_unary_expression(n, ctx),
            Expression::Update(n) => self.emit_update_expression(n, ctx),
            Expression::Yield(n) => self.emit_yield_expression(n, ctx),
            Expression::JsxElement(n) => self.emit_jsx_element(n),
            Expression::JsxFragment(n) => self.emit_jsx_fragment(n),
        }
    }

    // =========================================================================
    // Statement dispatch
    // =========================================================================

    pub(super) fn emit_statement(&mut self, stmt: &Statement, ctx: StmtContext) -> EmitResult {
        let flags = statement_flags(stmt, ctx);
        match stmt {
            Statement::Block(n) => self.emit_block(n),
            Statement::Break(n) => self.emit_break_statement(n, flags),
            Statement::ClassDeclaration(n) => self.emit_class(n),
            Statement::Continue(n) => self.emit_continue_statement(n, flags),
            Statement::Debugger(_) => {
                self.writer.write_keyword("debugger", TokenFlags::empty());
                self.write_statement_semicolon(flags);
                Ok(())
            }
            Statement::DoWhile(n) => self.emit_do_while_statement(n, flags),
            Statement::Empty(_) => {
                // An empty statement is its own terminator; it is never
                // subject to rightmost omission.
                self.writer
                    .write_punct(";", PunctPosition::Trailing, TokenFlags::empty());
                Ok(())
            }
            Statement::Expression(n) => self.emit_expression_statement(n, flags),
            Statement::For(n) => self.emit_for_statement(n, flags),
            Statement::ForIn(n) => self.emit_for_in_statement(n, flags),
            Statement::ForOf(n) => self.emit_for_of_statement(n, flags),
            Statement::FunctionDeclaration(n) => self.emit_function(n),
            Statement::If(n) => self.emit_if_statement(n, flags),
            Statement::Labeled(n) => self.emit_labeled_statement(n, flags),
            Statement::Return(n) => self.emit_return_statement(n, flags),
            Statement::Switch(n) => self.emit_switch_statement(n, flags),
            Statement::Throw(n) => self.emit_throw_statement(n, flags),
            Statement::Try(n) => self.emit_try_statement(n),
            Statement::Variable(n) => {
                self.emit_variable_declaration(n, ExprContext::empty())?;
                self.write_statement_semicolon(flags);
                Ok(())
            }
            Statement::While(n) => self.emit_while_statement(n, flags),
            Statement::With(n) => self.emit_with_statement(n, flags),
            Statement::ImportDeclaration(n) => self.emit_import_declaration(n, flags),
            Statement::ExportNamed(n) => self.emit_export_named_declaration(n, flags),
            Statement::ExportDefault(n) => self.emit_export_default_declaration(n, flags),
            Statement::ExportAll(n) => self.emit_export_all_declaration(n, flags),
        }
    }

    /// Emit a statement list, recombining rightmost-ness per member: a
    /// statement is rightmost only when it is last and the list itself is.
    pub(super) fn emit_statement_list(
        &mut self,
        list: &[Statement],
        ctx: StmtContext,
    ) -> EmitResult {
        for (index, stmt) in list.iter().enumerate() {
            let mut child = StmtContext::empty();
            if index + 1 == list.len() && ctx.contains(StmtContext::RIGHTMOST) {
                child |= StmtContext::RIGHTMOST;
            }
            self.emit_statement(stmt, child)?;
            self.writer.end_statement();
        }
        Ok(())
    }

    /// Emit a block statement body. The interior list is always rightmost:
    /// the closing brace supplies the terminator the grammar needs.
    pub(super) fn emit_block(&mut self, block: &BlockStatement) -> EmitResult {
        let empty = block.body.is_empty();
        self.writer.open_block(empty);
        self.emit_statement_list(&block.body, StmtContext::RIGHTMOST)?;
        self.writer.close_block(empty);
        Ok(())
    }

    /// Emit the body of a control statement: blocks keep their braces,
    /// anything else becomes an indented single-statement body.
    pub(super) fn emit_statement_body(&mut self, body: &Statement, rightmost: bool) -> EmitResult {
        match body {
            Statement::Block(block) => self.emit_block(block),
            _ => {
                let mut ctx = StmtContext::STATEMENT_BODY;
                if rightmost {
                    ctx |= StmtContext::RIGHTMOST;
                }
                self.writer.open_body();
                self.emit_statement(body, ctx)?;
                self.writer.close_body();
                Ok(())
            }
        }
    }

    pub(super) fn write_statement_semicolon(&mut self, flags: StmtContext) {
        if flags.contains(StmtContext::NEEDS_SEMICOLON) {
            self.writer
                .write_semicolon(flags.contains(StmtContext::MAY_OMIT_SEMICOLON));
        }
    }
}

// =============================================================================
// Statement semicolon classification
// =============================================================================

/// Combine the inherited context with the statement's own terminator bits.
pub(super) fn statement_flags(stmt: &Statement, ctx: StmtContext) -> StmtContext {
    let mut flags = ctx;
    if kind_needs_semicolon(stmt) {
        flags |= StmtContext::NEEDS_SEMICOLON;
        if ctx.contains(StmtContext::RIGHTMOST) {
            flags |= StmtContext::MAY_OMIT_SEMICOLON;
        }
    }
    flags
}

fn kind_needs_semicolon(stmt: &Statement) -> bool {
    match stmt {
        Statement::Expression(_)
        | Statement::Variable(_)
        | Statement::Return(_)
        | Statement::Break(_)
        | Statement::Continue(_)
        | Statement::Throw(_)
        | Statement::Debugger(_)
        | Statement::DoWhile(_)
        | Statement::ImportDeclaration(_)
        | Statement::ExportAll(_) => true,
        Statement::ExportNamed(n) => n.declaration.is_none(),
        Statement::ExportDefault(n) => matches!(
            n.declaration,
            escode_ast::ast::ExportDefault::Expression(_)
        ),
        _ => false,
    }
}

// =============================================================================
// Parenthesization
// =============================================================================

/// Whether `expr` must be bracketed in this operand position.
pub(super) fn needs_parens(
    expr: &Expression,
    parent: Precedence,
    side: Side,
    ctx: ExprContext,
) -> bool {
    if ambiguity_parens(expr, ctx) {
        return true;
    }

    // A chain kept outside a member/call position must be bracketed so its
    // `?.` links do not read as a continuation of the outer access.
    if matches!(expr, Expression::Chain(_))
        && side == Side::Left
        && (parent.rank == rank::MEMBER_CALL || parent.rank == rank::NEW_WITHOUT_ARGUMENTS)
    {
        return true;
    }

    let child = Precedence::of(expr);
    if !child.is_defined() || !parent.is_defined() {
        return false;
    }

    // `**` admits no unparenthesized unary/await on its left.
    if parent.rank == rank::EXPONENTIATION && side == Side::Left && child.rank == rank::UNARY {
        return true;
    }

    if child.rank < parent.rank {
        return true;
    }
    if child.rank > parent.rank {
        return false;
    }
    match parent.assoc {
        Associativity::Left => side == Side::Right,
        Associativity::Right => side == Side::Left,
        Associativity::Neither => false,
    }
}

/// Grammar ambiguities precedence cannot express. Each bit was set at the
/// construct that created the hazard and survives only down the leftmost
/// descendant chain (`IN_FOR_INIT` survives every operand position).
fn ambiguity_parens(expr: &Expression, ctx: ExprContext) -> bool {
    match expr {
        // A leading `{` would parse as a block statement or arrow body.
        Expression::Object(_) => {
            ctx.is_leftmost_in(ExprContext::IN_STMT_EXPR)
                || ctx.is_leftmost_in(ExprContext::IN_ARROW_BODY)
        }
        // A leading `function`/`class` would parse as a declaration.
        Expression::Function(_) | Expression::Class(_) => {
            ctx.is_leftmost_in(ExprContext::IN_STMT_EXPR)
        }
        // A destructuring assignment to an object pattern must be wrapped
        // whole; parenthesizing just the pattern is an early error.
        Expression::Assignment(assignment) => {
            matches!(assignment.left, Pattern::Object(_))
                && (ctx.is_leftmost_in(ExprContext::IN_STMT_EXPR)
                    || ctx.is_leftmost_in(ExprContext::IN_ARROW_BODY))
        }
        // A call in `new` callee position would hand its arguments to `new`.
        Expression::Call(_) => ctx.is_leftmost_in(ExprContext::IN_NEW_CALLEE),
        // A bare `in` inside a `for` head would be read as `for..in`.
        Expression::Binary(binary) => {
            binary.operator == BinaryOperator::In && ctx.contains(ExprContext::IN_FOR_INIT)
        }
        _ => false,
    }
}
