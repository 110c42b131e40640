use std::rc::Rc;

use escode_ast::ast::*;

use super::expressions::assignment_position;
use super::{EmitResult, Printer, Side};
use crate::flags::{ExprContext, StmtContext, TokenFlags};
use crate::precedence::{Associativity, Precedence, rank};
use crate::writer::{PunctPosition, TextWriter};

impl<W: TextWriter> Printer<W> {
    // =========================================================================
    // Statements
    // =========================================================================

    pub(super) fn emit_expression_statement(
        &mut self,
        node: &ExpressionStatement,
        flags: StmtContext,
    ) -> EmitResult {
        self.emit_operand(
            &node.expression,
            Precedence::UNDEFINED,
            Side::Neither,
            ExprContext::LEFTMOST | ExprContext::IN_STMT_EXPR,
        )?;
        self.write_statement_semicolon(flags);
        Ok(())
    }

    pub(super) fn emit_return_statement(
        &mut self,
        node: &ReturnStatement,
        flags: StmtContext,
    ) -> EmitResult {
        match &node.argument {
            Some(argument) => {
                self.writer
                    .write_keyword("return", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.emit_operand(
                    argument,
                    Precedence::UNDEFINED,
                    Side::Neither,
                    ExprContext::empty(),
                )?;
            }
            None => self.writer.write_keyword("return", TokenFlags::empty()),
        }
        self.write_statement_semicolon(flags);
        Ok(())
    }

    pub(super) fn emit_break_statement(
        &mut self,
        node: &BreakStatement,
        flags: StmtContext,
    ) -> EmitResult {
        match &node.label {
            Some(label) => {
                self.writer
                    .write_keyword("break", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.emit_identifier(label)?;
            }
            None => self.writer.write_keyword("break", TokenFlags::empty()),
        }
        self.write_statement_semicolon(flags);
        Ok(())
    }

    pub(super) fn emit_continue_statement(
        &mut self,
        node: &ContinueStatement,
        flags: StmtContext,
    ) -> EmitResult {
        match &node.label {
            Some(label) => {
                self.writer
                    .write_keyword("continue", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.emit_identifier(label)?;
            }
            None => self.writer.write_keyword("continue", TokenFlags::empty()),
        }
        self.write_statement_semicolon(flags);
        Ok(())
    }

    pub(super) fn emit_throw_statement(
        &mut self,
        node: &ThrowStatement,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("throw", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.emit_operand(
            &node.argument,
            Precedence::UNDEFINED,
            Side::Neither,
            ExprContext::empty(),
        )?;
        self.write_statement_semicolon(flags);
        Ok(())
    }

    pub(super) fn emit_if_statement(&mut self, node: &IfStatement, flags: StmtContext) -> EmitResult {
        self.writer
            .write_keyword("if", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.emit_parenthesized_head(&node.test)?;
        let rightmost = flags.contains(StmtContext::RIGHTMOST);
        match &node.alternate {
            None => self.emit_statement_body(&node.consequent, rightmost),
            Some(alternate) => {
                self.emit_statement_body(&node.consequent, false)?;
                self.writer.write_keyword(
                    "else",
                    TokenFlags::FOLLOWS_STATEMENT_BODY | TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
                if matches!(alternate, Statement::If(_)) {
                    // `else if` continues on the same line.
                    let mut ctx = StmtContext::STATEMENT_BODY;
                    if rightmost {
                        ctx |= StmtContext::RIGHTMOST;
                    }
                    self.emit_statement(alternate, ctx)
                } else {
                    self.emit_statement_body(alternate, rightmost)
                }
            }
        }
    }

    pub(super) fn emit_switch_statement(
        &mut self,
        node: &SwitchStatement,
        _flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("switch", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.emit_parenthesized_head(&node.discriminant)?;
        let empty = node.cases.is_empty();
        self.writer.open_block(empty);
        for (index, case) in node.cases.iter().enumerate() {
            match &case.test {
                Some(test) => {
                    self.writer
                        .write_keyword("case", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                    self.emit_operand(
                        test,
                        Precedence::UNDEFINED,
                        Side::Neither,
                        ExprContext::isolated(),
                    )?;
                }
                None => self.writer.write_keyword("default", TokenFlags::empty()),
            }
            self.writer
                .write_punct(":", PunctPosition::Trailing, TokenFlags::empty());
            // The last case's tail sits against the closing brace, so it is
            // a rightmost position; any earlier case is followed by a
            // `case` keyword that demands the separator.
            let ctx = if index + 1 == node.cases.len() {
                StmtContext::RIGHTMOST
            } else {
                StmtContext::empty()
            };
            self.writer.open_body();
            self.emit_statement_list(&case.consequent, ctx)?;
            self.writer.close_body();
            self.writer.end_statement();
        }
        self.writer.close_block(empty);
        Ok(())
    }

    pub(super) fn emit_try_statement(&mut self, node: &TryStatement) -> EmitResult {
        self.writer.write_keyword("try", TokenFlags::empty());
        self.emit_block(&node.block)?;
        if let Some(handler) = &node.handler {
            self.writer.write_keyword(
                "catch",
                TokenFlags::FOLLOWS_STATEMENT_BODY | TokenFlags::TRAILING_SPACE_RECOMMENDED,
            );
            if let Some(param) = &handler.param {
                self.writer
                    .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
                self.emit_pattern(param, ExprContext::isolated())?;
                self.writer
                    .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
            }
            self.emit_block(&handler.body)?;
        }
        if let Some(finalizer) = &node.finalizer {
            self.writer
                .write_keyword("finally", TokenFlags::FOLLOWS_STATEMENT_BODY);
            self.emit_block(finalizer)?;
        }
        Ok(())
    }

    pub(super) fn emit_while_statement(
        &mut self,
        node: &WhileStatement,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("while", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.emit_parenthesized_head(&node.test)?;
        self.emit_statement_body(&node.body, flags.contains(StmtContext::RIGHTMOST))
    }

    pub(super) fn emit_do_while_statement(
        &mut self,
        node: &DoWhileStatement,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("do", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.emit_statement_body(&node.body, false)?;
        self.writer.write_keyword(
            "while",
            TokenFlags::FOLLOWS_STATEMENT_BODY | TokenFlags::TRAILING_SPACE_RECOMMENDED,
        );
        self.emit_parenthesized_head(&node.test)?;
        self.write_statement_semicolon(flags);
        Ok(())
    }

    pub(super) fn emit_for_statement(
        &mut self,
        node: &ForStatement,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("for", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.writer
            .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
        match &node.init {
            Some(ForInit::Variable(declaration)) => {
                self.emit_variable_declaration(declaration, ExprContext::IN_FOR_INIT)?;
            }
            Some(ForInit::Expression(expression)) => {
                self.emit_operand(
                    expression,
                    Precedence::UNDEFINED,
                    Side::Neither,
                    ExprContext::IN_FOR_INIT,
                )?;
            }
            None => {}
        }
        self.write_for_head_semicolon(node.test.is_some() || node.update.is_some());
        if let Some(test) = &node.test {
            self.emit_operand(test, Precedence::UNDEFINED, Side::Neither, ExprContext::empty())?;
        }
        self.write_for_head_semicolon(node.update.is_some());
        if let Some(update) = &node.update {
            self.emit_operand(update, Precedence::UNDEFINED, Side::Neither, ExprContext::empty())?;
        }
        self.writer
            .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
        self.emit_statement_body(&node.body, flags.contains(StmtContext::RIGHTMOST))
    }

    fn write_for_head_semicolon(&mut self, followed: bool) {
        self.writer.write_punct(
            ";",
            PunctPosition::InBetween,
            if followed {
                TokenFlags::TRAILING_SPACE_RECOMMENDED
            } else {
                TokenFlags::empty()
            },
        );
    }

    pub(super) fn emit_for_in_statement(
        &mut self,
        node: &ForInStatement,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("for", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.writer
            .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
        self.emit_for_target(&node.left)?;
        self.writer
            .write_keyword("in", TokenFlags::SPACE_AROUND_RECOMMENDED);
        self.emit_operand(
            &node.right,
            Precedence::UNDEFINED,
            Side::Neither,
            ExprContext::empty(),
        )?;
        self.writer
            .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
        self.emit_statement_body(&node.body, flags.contains(StmtContext::RIGHTMOST))
    }

    pub(super) fn emit_for_of_statement(
        &mut self,
        node: &ForOfStatement,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("for", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        if node.is_await {
            self.writer
                .write_keyword("await", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        }
        self.writer
            .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
        self.emit_for_target(&node.left)?;
        self.writer
            .write_keyword("of", TokenFlags::SPACE_AROUND_RECOMMENDED);
        self.emit_operand(
            &node.right,
            assignment_position(),
            Side::Neither,
            ExprContext::empty(),
        )?;
        self.writer
            .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
        self.emit_statement_body(&node.body, flags.contains(StmtContext::RIGHTMOST))
    }

    fn emit_for_target(&mut self, target: &ForTarget) -> EmitResult {
        match target {
            ForTarget::Variable(declaration) => {
                self.emit_variable_declaration(declaration, ExprContext::empty())
            }
            ForTarget::Pattern(pattern) => self.emit_pattern(pattern, ExprContext::empty()),
        }
    }

    pub(super) fn emit_labeled_statement(
        &mut self,
        node: &LabeledStatement,
        flags: StmtContext,
    ) -> EmitResult {
        self.emit_identifier(&node.label)?;
        self.writer.write_punct(
            ":",
            PunctPosition::InBetween,
            TokenFlags::TRAILING_SPACE_RECOMMENDED,
        );
        match &node.body {
            Statement::Block(block) => self.emit_block(block),
            body => {
                let mut ctx = StmtContext::STATEMENT_BODY;
                if flags.contains(StmtContext::RIGHTMOST) {
                    ctx |= StmtContext::RIGHTMOST;
                }
                self.emit_statement(body, ctx)
            }
        }
    }

    pub(super) fn emit_with_statement(
        &mut self,
        node: &WithStatement,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("with", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.emit_parenthesized_head(&node.object)?;
        self.emit_statement_body(&node.body, flags.contains(StmtContext::RIGHTMOST))
    }

    /// `( expr )` head of `if`/`while`/`switch`/`with`.
    fn emit_parenthesized_head(&mut self, expression: &Expression) -> EmitResult {
        self.writer
            .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
        self.emit_operand(
            expression,
            Precedence::UNDEFINED,
            Side::Neither,
            ExprContext::isolated(),
        )?;
        self.writer
            .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
        Ok(())
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Emit a declaration without its terminator; the enclosing construct
    /// (statement or `for` head) supplies one.
    pub(super) fn emit_variable_declaration(
        &mut self,
        node: &VariableDeclaration,
        ctx: ExprContext,
    ) -> EmitResult {
        self.writer
            .write_keyword(node.kind.as_str(), TokenFlags::TRAILING_SPACE_RECOMMENDED);
        for (index, declarator) in node.declarations.iter().enumerate() {
            if index > 0 {
                self.writer.write_punct(
                    ",",
                    PunctPosition::InBetween,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
            }
            self.emit_pattern(&declarator.id, ExprContext::empty())?;
            if let Some(init) = &declarator.init {
                self.writer.write_punct(
                    "=",
                    PunctPosition::InBetween,
                    TokenFlags::SPACE_AROUND_RECOMMENDED,
                );
                self.emit_operand(init, assignment_position(), Side::Right, ctx.operand())?;
            }
        }
        Ok(())
    }

    pub(super) fn emit_function(&mut self, node: &Function) -> EmitResult {
        if node.is_async {
            self.writer
                .write_keyword("async", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        }
        if node.is_generator {
            self.writer.write_keyword("function", TokenFlags::empty());
            self.writer.write_punct(
                "*",
                PunctPosition::InBetween,
                TokenFlags::TRAILING_SPACE_RECOMMENDED,
            );
        } else {
            self.writer
                .write_keyword("function", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        }
        if let Some(id) = &node.id {
            self.emit_identifier(id)?;
        }
        self.emit_function_params_and_body(node)
    }

    pub(super) fn emit_function_params_and_body(&mut self, node: &Function) -> EmitResult {
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
        self.emit_block(&node.body)
    }

    pub(super) fn emit_class(&mut self, node: &Class) -> EmitResult {
        self.writer
            .write_keyword("class", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        if let Some(id) = &node.id {
            self.emit_identifier(id)?;
        }
        if let Some(super_class) = &node.super_class {
            self.writer
                .write_keyword("extends", TokenFlags::SPACE_AROUND_RECOMMENDED);
            self.emit_operand(
                super_class,
                Precedence::new(rank::NEW_WITHOUT_ARGUMENTS, Associativity::Left),
                Side::Neither,
                ExprContext::isolated(),
            )?;
        }
        let empty = node.body.is_empty();
        self.writer.open_block(empty);
        for (index, member) in node.body.iter().enumerate() {
            self.emit_class_member(member, index + 1 == node.body.len())?;
            self.writer.end_statement();
        }
        self.writer.close_block(empty);
        Ok(())
    }

    fn emit_class_member(&mut self, member: &ClassMember, is_last: bool) -> EmitResult {
        match member {
            ClassMember::Method(method) => {
                if method.is_static {
                    self.writer
                        .write_keyword("static", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                }
                match method.kind {
                    MethodKind::Get => {
                        self.writer
                            .write_keyword("get", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                        self.emit_property_key(&method.key)?;
                        self.emit_function_params_and_body(&method.value)
                    }
                    MethodKind::Set => {
                        self.writer
                            .write_keyword("set", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                        self.emit_property_key(&method.key)?;
                        self.emit_function_params_and_body(&method.value)
                    }
                    MethodKind::Constructor | MethodKind::Method => {
                        self.emit_method_shorthand(&method.key, &method.value)
                    }
                }
            }
            ClassMember::Property(property) => {
                if property.is_static {
                    self.writer
                        .write_keyword("static", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                }
                self.emit_property_key(&property.key)?;
                if let Some(value) = &property.value {
                    self.writer.write_punct(
                        "=",
                        PunctPosition::InBetween,
                        TokenFlags::SPACE_AROUND_RECOMMENDED,
                    );
                    self.emit_operand(value, assignment_position(), Side::Neither, ExprContext::isolated())?;
                }
                self.writer.write_semicolon(is_last);
                Ok(())
            }
            ClassMember::StaticBlock(block) => {
                self.writer
                    .write_keyword("static", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                let empty = block.body.is_empty();
                self.writer.open_block(empty);
                self.emit_statement_list(&block.body, StmtContext::RIGHTMOST)?;
                self.writer.close_block(empty);
                Ok(())
            }
        }
    }

    // =========================================================================
    // Modules
    // =========================================================================

    pub(super) fn emit_import_declaration(
        &mut self,
        node: &ImportDeclaration,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("import", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        if !node.specifiers.is_empty() {
            let mut wrote_any = false;
            let mut named: Vec<&Rc<ImportNamedSpecifier>> = Vec::new();
            for specifier in &node.specifiers {
                match specifier {
                    ImportSpecifier::Default(default) => {
                        if wrote_any {
                            self.writer.write_punct(
                                ",",
                                PunctPosition::InBetween,
                                TokenFlags::TRAILING_SPACE_RECOMMENDED,
                            );
                        }
                        self.emit_identifier(&default.local)?;
                        wrote_any = true;
                    }
                    ImportSpecifier::Namespace(namespace) => {
                        if wrote_any {
                            self.writer.write_punct(
                                ",",
                                PunctPosition::InBetween,
                                TokenFlags::TRAILING_SPACE_RECOMMENDED,
                            );
                        }
                        self.writer
                            .write_punct("*", PunctPosition::Leading, TokenFlags::empty());
                        self.writer
                            .write_keyword("as", TokenFlags::SPACE_AROUND_RECOMMENDED);
                        self.emit_identifier(&namespace.local)?;
                        wrote_any = true;
                    }
                    ImportSpecifier::Named(named_specifier) => named.push(named_specifier),
                }
            }
            if !named.is_empty() {
                if wrote_any {
                    self.writer.write_punct(
                        ",",
                        PunctPosition::InBetween,
                        TokenFlags::TRAILING_SPACE_RECOMMENDED,
                    );
                }
                self.writer.write_punct(
                    "{",
                    PunctPosition::Leading,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
                for (index, specifier) in named.iter().enumerate() {
                    if index > 0 {
                        self.writer.write_punct(
                            ",",
                            PunctPosition::InBetween,
                            TokenFlags::TRAILING_SPACE_RECOMMENDED,
                        );
                    }
                    let collapse = matches!(
                        &specifier.imported,
                        ModuleExportName::Identifier(imported)
                            if imported.name == specifier.local.name
                    );
                    if collapse {
                        self.emit_identifier(&specifier.local)?;
                    } else {
                        self.emit_module_export_name(&specifier.imported)?;
                        self.writer
                            .write_keyword("as", TokenFlags::SPACE_AROUND_RECOMMENDED);
                        self.emit_identifier(&specifier.local)?;
                    }
                }
                self.writer.write_punct(
                    "}",
                    PunctPosition::Trailing,
                    TokenFlags::LEADING_SPACE_RECOMMENDED,
                );
            }
            self.writer
                .write_keyword("from", TokenFlags::SPACE_AROUND_RECOMMENDED);
        }
        self.emit_literal(&node.source)?;
        self.write_statement_semicolon(flags);
        Ok(())
    }

    pub(super) fn emit_export_named_declaration(
        &mut self,
        node: &ExportNamedDeclaration,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("export", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        if let Some(declaration) = &node.declaration {
            return self.emit_statement(
                declaration,
                flags & (StmtContext::RIGHTMOST | StmtContext::STATEMENT_BODY),
            );
        }
        self.writer.write_punct(
            "{",
            PunctPosition::Leading,
            if node.specifiers.is_empty() {
                TokenFlags::empty()
            } else {
                TokenFlags::TRAILING_SPACE_RECOMMENDED
            },
        );
        for (index, specifier) in node.specifiers.iter().enumerate() {
            if index > 0 {
                self.writer.write_punct(
                    ",",
                    PunctPosition::InBetween,
                    TokenFlags::TRAILING_SPACE_RECOMMENDED,
                );
            }
            let collapse = module_export_names_equal(&specifier.local, &specifier.exported);
            self.emit_module_export_name(&specifier.local)?;
            if !collapse {
                self.writer
                    .write_keyword("as", TokenFlags::SPACE_AROUND_RECOMMENDED);
                self.emit_module_export_name(&specifier.exported)?;
            }
        }
        self.writer.write_punct(
            "}",
            PunctPosition::Trailing,
            if node.specifiers.is_empty() {
                TokenFlags::empty()
            } else {
                TokenFlags::LEADING_SPACE_RECOMMENDED
            },
        );
        if let Some(source) = &node.source {
            self.writer
                .write_keyword("from", TokenFlags::SPACE_AROUND_RECOMMENDED);
            self.emit_literal(source)?;
        }
        self.write_statement_semicolon(flags);
        Ok(())
    }

    pub(super) fn emit_export_default_declaration(
        &mut self,
        node: &ExportDefaultDeclaration,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("export", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.writer
            .write_keyword("default", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        match &node.declaration {
            ExportDefault::Function(function) => self.emit_function(function),
            ExportDefault::Class(class) => self.emit_class(class),
            ExportDefault::Expression(expression) => {
                // A function or class expression here must keep its
                // expression-ness; unbracketed it reparses as a declaration.
                if matches!(expression, Expression::Function(_) | Expression::Class(_)) {
                    self.writer
                        .write_punct("(", PunctPosition::Leading, TokenFlags::empty());
                    self.emit_expression(expression, ExprContext::isolated())?;
                    self.writer
                        .write_punct(")", PunctPosition::Trailing, TokenFlags::empty());
                } else {
                    self.emit_operand(
                        expression,
                        assignment_position(),
                        Side::Neither,
                        ExprContext::empty(),
                    )?;
                }
                self.write_statement_semicolon(flags);
                Ok(())
            }
        }
    }

    pub(super) fn emit_export_all_declaration(
        &mut self,
        node: &ExportAllDeclaration,
        flags: StmtContext,
    ) -> EmitResult {
        self.writer
            .write_keyword("export", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.writer
            .write_punct("*", PunctPosition::Leading, TokenFlags::empty());
        if let Some(exported) = &node.exported {
            self.writer
                .write_keyword("as", TokenFlags::SPACE_AROUND_RECOMMENDED);
            self.emit_module_export_name(exported)?;
        }
        self.writer
            .write_keyword("from", TokenFlags::SPACE_AROUND_RECOMMENDED);
        self.emit_literal(&node.source)?;
        self.write_statement_semicolon(flags);
        Ok(())
    }

    fn emit_module_export_name(&mut self, name: &ModuleExportName) -> EmitResult {
        match name {
            ModuleExportName::Identifier(identifier) => self.emit_identifier(identifier),
            ModuleExportName::Literal(literal) => self.emit_literal(literal),
        }
    }
}

fn module_export_names_equal(a: &ModuleExportName, b: &ModuleExportName) -> bool {
    match (a, b) {
        (ModuleExportName::Identifier(a), ModuleExportName::Identifier(b)) => a.name == b.name,
        _ => false,
    }
}
