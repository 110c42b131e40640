//! Read-only depth-first traversal.
//!
//! `Visitor` has one method per node kind, each defaulting to the matching
//! free `walk_*` function, which recurses into every child slot in source
//! order. Overrides decide per node whether to descend: an override that
//! does not call its `walk_*` stops the walk below that node.
//!
//! `EventVisitor` adapts the trait into enter/leave notifications keyed by
//! `NodeKind` for external subscribers.

use crate::ast::*;
use crate::kind::NodeKind;

/// Walk `program` with `visitor`.
pub fn visit<V: Visitor + ?Sized>(program: &Program, visitor: &mut V) {
    visitor.visit_program(program);
}

pub trait Visitor {
    fn visit_program(&mut self, node: &Program) {
        walk_program(self, node);
    }

    // =========================================================================
    // Dispatchers
    // =========================================================================

    fn visit_statement(&mut self, node: &Statement) {
        walk_statement(self, node);
    }

    fn visit_expression(&mut self, node: &Expression) {
        walk_expression(self, node);
    }

    fn visit_pattern(&mut self, node: &Pattern) {
        walk_pattern(self, node);
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn visit_identifier(&mut self, _node: &Identifier) {}

    fn visit_private_identifier(&mut self, _node: &PrivateIdentifier) {}

    fn visit_literal(&mut self, _node: &Literal) {}

    fn visit_this_expression(&mut self, _node: &ThisExpression) {}

    fn visit_super(&mut self, _node: &Super) {}

    fn visit_array_expression(&mut self, node: &ArrayExpression) {
        walk_array_expression(self, node);
    }

    fn visit_object_expression(&mut self, node: &ObjectExpression) {
        walk_object_expression(self, node);
    }

    fn visit_property(&mut self, node: &Property) {
        walk_property(self, node);
    }

    fn visit_spread_element(&mut self, node: &SpreadElement) {
        walk_spread_element(self, node);
    }

    fn visit_template_literal(&mut self, node: &TemplateLiteral) {
        walk_template_literal(self, node);
    }

    fn visit_template_element(&mut self, _node: &TemplateElement) {}

    fn visit_tagged_template_expression(&mut self, node: &TaggedTemplateExpression) {
        walk_tagged_template_expression(self, node);
    }

    fn visit_member_expression(&mut self, node: &MemberExpression) {
        walk_member_expression(self, node);
    }

    fn visit_call_expression(&mut self, node: &CallExpression) {
        walk_call_expression(self, node);
    }

    fn visit_new_expression(&mut self, node: &NewExpression) {
        walk_new_expression(self, node);
    }

    fn visit_chain_expression(&mut self, node: &ChainExpression) {
        walk_chain_expression(self, node);
    }

    fn visit_import_expression(&mut self, node: &ImportExpression) {
        walk_import_expression(self, node);
    }

    fn visit_meta_property(&mut self, node: &MetaProperty) {
        walk_meta_property(self, node);
    }

    fn visit_sequence_expression(&mut self, node: &SequenceExpression) {
        walk_sequence_expression(self, node);
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression) {
        walk_unary_expression(self, node);
    }

    fn visit_update_expression(&mut self, node: &UpdateExpression) {
        walk_update_expression(self, node);
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression) {
        walk_binary_expression(self, node);
    }

    fn visit_logical_expression(&mut self, node: &LogicalExpression) {
        walk_logical_expression(self, node);
    }

    fn visit_assignment_expression(&mut self, node: &AssignmentExpression) {
        walk_assignment_expression(self, node);
    }

    fn visit_conditional_expression(&mut self, node: &ConditionalExpression) {
        walk_conditional_expression(self, node);
    }

    fn visit_yield_expression(&mut self, node: &YieldExpression) {
        walk_yield_expression(self, node);
    }

    fn visit_await_expression(&mut self, node: &AwaitExpression) {
        walk_await_expression(self, node);
    }

    fn visit_arrow_function_expression(&mut self, node: &ArrowFunctionExpression) {
        walk_arrow_function_expression(self, node);
    }

    fn visit_function(&mut self, node: &Function) {
        walk_function(self, node);
    }

    fn visit_class(&mut self, node: &Class) {
        walk_class(self, node);
    }

    fn visit_method_definition(&mut self, node: &MethodDefinition) {
        walk_method_definition(self, node);
    }

    fn visit_property_definition(&mut self, node: &PropertyDefinition) {
        walk_property_definition(self, node);
    }

    fn visit_static_block(&mut self, node: &StaticBlock) {
        walk_static_block(self, node);
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn visit_block_statement(&mut self, node: &BlockStatement) {
        walk_block_statement(self, node);
    }

    fn visit_expression_statement(&mut self, node: &ExpressionStatement) {
        walk_expression_statement(self, node);
    }

    fn visit_empty_statement(&mut self, _node: &EmptyStatement) {}

    fn visit_debugger_statement(&mut self, _node: &DebuggerStatement) {}

    fn visit_return_statement(&mut self, node: &ReturnStatement) {
        walk_return_statement(self, node);
    }

    fn visit_break_statement(&mut self, node: &BreakStatement) {
        walk_break_statement(self, node);
    }

    fn visit_continue_statement(&mut self, node: &ContinueStatement) {
        walk_continue_statement(self, node);
    }

    fn visit_if_statement(&mut self, node: &IfStatement) {
        walk_if_statement(self, node);
    }

    fn visit_switch_statement(&mut self, node: &SwitchStatement) {
        walk_switch_statement(self, node);
    }

    fn visit_switch_case(&mut self, node: &SwitchCase) {
        walk_switch_case(self, node);
    }

    fn visit_throw_statement(&mut self, node: &ThrowStatement) {
        walk_throw_statement(self, node);
    }

    fn visit_try_statement(&mut self, node: &TryStatement) {
        walk_try_statement(self, node);
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        walk_catch_clause(self, node);
    }

    fn visit_while_statement(&mut self, node: &WhileStatement) {
        walk_while_statement(self, node);
    }

    fn visit_do_while_statement(&mut self, node: &DoWhileStatement) {
        walk_do_while_statement(self, node);
    }

    fn visit_for_statement(&mut self, node: &ForStatement) {
        walk_for_statement(self, node);
    }

    fn visit_for_in_statement(&mut self, node: &ForInStatement) {
        walk_for_in_statement(self, node);
    }

    fn visit_for_of_statement(&mut self, node: &ForOfStatement) {
        walk_for_of_statement(self, node);
    }

    fn visit_labeled_statement(&mut self, node: &LabeledStatement) {
        walk_labeled_statement(self, node);
    }

    fn visit_with_statement(&mut self, node: &WithStatement) {
        walk_with_statement(self, node);
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        walk_variable_declaration(self, node);
    }

    fn visit_variable_declarator(&mut self, node: &VariableDeclarator) {
        walk_variable_declarator(self, node);
    }

    // =========================================================================
    // Modules
    // =========================================================================

    fn visit_import_declaration(&mut self, node: &ImportDeclaration) {
        walk_import_declaration(self, node);
    }

    fn visit_import_named_specifier(&mut self, node: &ImportNamedSpecifier) {
        walk_import_named_specifier(self, node);
    }

    fn visit_import_default_specifier(&mut self, node: &ImportDefaultSpecifier) {
        self.visit_identifier(&node.local);
    }

    fn visit_import_namespace_specifier(&mut self, node: &ImportNamespaceSpecifier) {
        self.visit_identifier(&node.local);
    }

    fn visit_export_named_declaration(&mut self, node: &ExportNamedDeclaration) {
        walk_export_named_declaration(self, node);
    }

    fn visit_export_specifier(&mut self, node: &ExportSpecifier) {
        walk_export_specifier(self, node);
    }

    fn visit_export_default_declaration(&mut self, node: &ExportDefaultDeclaration) {
        walk_export_default_declaration(self, node);
    }

    fn visit_export_all_declaration(&mut self, node: &ExportAllDeclaration) {
        walk_export_all_declaration(self, node);
    }

    // =========================================================================
    // Patterns
    // =========================================================================

    fn visit_array_pattern(&mut self, node: &ArrayPattern) {
        walk_array_pattern(self, node);
    }

    fn visit_object_pattern(&mut self, node: &ObjectPattern) {
        walk_object_pattern(self, node);
    }

    fn visit_pattern_property(&mut self, node: &PatternProperty) {
        walk_pattern_property(self, node);
    }

    fn visit_assignment_pattern(&mut self, node: &AssignmentPattern) {
        walk_assignment_pattern(self, node);
    }

    fn visit_rest_element(&mut self, node: &RestElement) {
        walk_rest_element(self, node);
    }

    // =========================================================================
    // JSX
    // =========================================================================

    fn visit_jsx_element(&mut self, node: &JsxElement) {
        walk_jsx_element(self, node);
    }

    fn visit_jsx_fragment(&mut self, node: &JsxFragment) {
        walk_jsx_fragment(self, node);
    }

    fn visit_jsx_opening_element(&mut self, node: &JsxOpeningElement) {
        walk_jsx_opening_element(self, node);
    }

    fn visit_jsx_closing_element(&mut self, node: &JsxClosingElement) {
        walk_jsx_closing_element(self, node);
    }

    fn visit_jsx_text(&mut self, _node: &JsxText) {}

    fn visit_jsx_expression_container(&mut self, node: &JsxExpressionContainer) {
        walk_jsx_expression_container(self, node);
    }

    fn visit_jsx_identifier(&mut self, _node: &JsxIdentifier) {}

    fn visit_jsx_member_expression(&mut self, node: &JsxMemberExpression) {
        walk_jsx_member_expression(self, node);
    }

    fn visit_jsx_namespaced_name(&mut self, node: &JsxNamespacedName) {
        walk_jsx_namespaced_name(self, node);
    }

    fn visit_jsx_attribute(&mut self, node: &JsxAttribute) {
        walk_jsx_attribute(self, node);
    }

    fn visit_jsx_spread_attribute(&mut self, node: &JsxSpreadAttribute) {
        walk_jsx_spread_attribute(self, node);
    }
}

// =============================================================================
// Walk functions
// =============================================================================

pub fn walk_program<V: Visitor + ?Sized>(v: &mut V, node: &Program) {
    for stmt in &node.body {
        v.visit_statement(stmt);
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(v: &mut V, node: &Statement) {
    match node {
        Statement::Block(n) => v.visit_block_statement(n),
        Statement::Break(n) => v.visit_break_statement(n),
        Statement::ClassDeclaration(n) => v.visit_class(n),
        Statement::Continue(n) => v.visit_continue_statement(n),
        Statement::Debugger(n) => v.visit_debugger_statement(n),
        Statement::DoWhile(n) => v.visit_do_while_statement(n),
        Statement::Empty(n) => v.visit_empty_statement(n),
        Statement::Expression(n) => v.visit_expression_statement(n),
        Statement::For(n) => v.visit_for_statement(n),
        Statement::ForIn(n) => v.visit_for_in_statement(n),
        Statement::ForOf(n) => v.visit_for_of_statement(n),
        Statement::FunctionDeclaration(n) => v.visit_function(n),
        Statement::If(n) => v.visit_if_statement(n),
        Statement::Labeled(n) => v.visit_labeled_statement(n),
        Statement::Return(n) => v.visit_return_statement(n),
        Statement::Switch(n) => v.visit_switch_statement(n),
        Statement::Throw(n) => v.visit_throw_statement(n),
        Statement::Try(n) => v.visit_try_statement(n),
        Statement::Variable(n) => v.visit_variable_declaration(n),
        Statement::While(n) => v.visit_while_statement(n),
        Statement::With(n) => v.visit_with_statement(n),
        Statement::ImportDeclaration(n) => v.visit_import_declaration(n),
        Statement::ExportNamed(n) => v.visit_export_named_declaration(n),
        Statement::ExportDefault(n) => v.visit_export_default_declaration(n),
        Statement::ExportAll(n) => v.visit_export_all_declaration(n),
    }
}

pub fn walk_expression<V: Visitor + ?Sized>(v: &mut V, node: &Expression) {
    match node {
        Expression::Array(n) => v.visit_array_expression(n),
        Expression::Arrow(n) => v.visit_arrow_function_expression(n),
        Expression::Assignment(n) => v.visit_assignment_expression(n),
        Expression::Await(n) => v.visit_await_expression(n),
        Expression::Binary(n) => v.visit_binary_expression(n),
        Expression::Call(n) => v.visit_call_expression(n),
        Expression::Chain(n) => v.visit_chain_expression(n),
        Expression::Class(n) => v.visit_class(n),
        Expression::Conditional(n) => v.visit_conditional_expression(n),
        Expression::Function(n) => v.visit_function(n),
        Expression::Identifier(n) => v.visit_identifier(n),
        Expression::Import(n) => v.visit_import_expression(n),
        Expression::Literal(n) => v.visit_literal(n),
        Expression::Logical(n) => v.visit_logical_expression(n),
        Expression::Member(n) => v.visit_member_expression(n),
        Expression::MetaProperty(n) => v.visit_meta_property(n),
        Expression::New(n) => v.visit_new_expression(n),
        Expression::Object(n) => v.visit_object_expression(n),
        Expression::Sequence(n) => v.visit_sequence_expression(n),
        Expression::Super(n) => v.visit_super(n),
        Expression::TaggedTemplate(n) => v.visit_tagged_template_expression(n),
        Expression::Template(n) => v.visit_template_literal(n),
        Expression::This(n) => v.visit_this_expression(n),
        Expression::Unary(n) => v.visit_unary_expression(n),
        Expression::Update(n) => v.visit_update_expression(n),
        Expression::Yield(n) => v.visit_yield_expression(n),
        Expression::JsxElement(n) => v.visit_jsx_element(n),
        Expression::JsxFragment(n) => v.visit_jsx_fragment(n),
    }
}

pub fn walk_pattern<V: Visitor + ?Sized>(v: &mut V, node: &Pattern) {
    match node {
        Pattern::Identifier(n) => v.visit_identifier(n),
        Pattern::Array(n) => v.visit_array_pattern(n),
        Pattern::Object(n) => v.visit_object_pattern(n),
        Pattern::Assignment(n) => v.visit_assignment_pattern(n),
        Pattern::Rest(n) => v.visit_rest_element(n),
        Pattern::Member(n) => v.visit_member_expression(n),
    }
}

fn walk_property_key<V: Visitor + ?Sized>(v: &mut V, key: &PropertyKey) {
    match key {
        PropertyKey::Identifier(n) => v.visit_identifier(n),
        PropertyKey::Private(n) => v.visit_private_identifier(n),
        PropertyKey::Literal(n) => v.visit_literal(n),
        PropertyKey::Computed(e) => v.visit_expression(e),
    }
}

fn walk_arguments<V: Visitor + ?Sized>(v: &mut V, arguments: &[Argument]) {
    for arg in arguments {
        match arg {
            Argument::Expression(e) => v.visit_expression(e),
            Argument::Spread(n) => v.visit_spread_element(n),
        }
    }
}

pub fn walk_array_expression<V: Visitor + ?Sized>(v: &mut V, node: &ArrayExpression) {
    for element in &node.elements {
        match element {
            ArrayElement::Expression(e) => v.visit_expression(e),
            ArrayElement::Spread(n) => v.visit_spread_element(n),
            ArrayElement::Hole => {}
        }
    }
}

pub fn walk_object_expression<V: Visitor + ?Sized>(v: &mut V, node: &ObjectExpression) {
    for member in &node.properties {
        match member {
            ObjectMember::Property(n) => v.visit_property(n),
            ObjectMember::Spread(n) => v.visit_spread_element(n),
        }
    }
}

pub fn walk_property<V: Visitor + ?Sized>(v: &mut V, node: &Property) {
    walk_property_key(v, &node.key);
    v.visit_expression(&node.value);
}

pub fn walk_spread_element<V: Visitor + ?Sized>(v: &mut V, node: &SpreadElement) {
    v.visit_expression(&node.argument);
}

pub fn walk_template_literal<V: Visitor + ?Sized>(v: &mut V, node: &TemplateLiteral) {
    for quasi in &node.quasis {
        v.visit_template_element(quasi);
    }
    for expr in &node.expressions {
        v.visit_expression(expr);
    }
}

pub fn walk_tagged_template_expression<V: Visitor + ?Sized>(
    v: &mut V,
    node: &TaggedTemplateExpression,
) {
    v.visit_expression(&node.tag);
    v.visit_template_literal(&node.quasi);
}

pub fn walk_member_expression<V: Visitor + ?Sized>(v: &mut V, node: &MemberExpression) {
    v.visit_expression(&node.object);
    match &node.property {
        MemberProperty::Identifier(n) => v.visit_identifier(n),
        MemberProperty::Private(n) => v.visit_private_identifier(n),
        MemberProperty::Computed(e) => v.visit_expression(e),
    }
}

pub fn walk_call_expression<V: Visitor + ?Sized>(v: &mut V, node: &CallExpression) {
    v.visit_expression(&node.callee);
    walk_arguments(v, &node.arguments);
}

pub fn walk_new_expression<V: Visitor + ?Sized>(v: &mut V, node: &NewExpression) {
    v.visit_expression(&node.callee);
    walk_arguments(v, &node.arguments);
}

pub fn walk_chain_expression<V: Visitor + ?Sized>(v: &mut V, node: &ChainExpression) {
    v.visit_expression(&node.expression);
}

pub fn walk_import_expression<V: Visitor + ?Sized>(v: &mut V, node: &ImportExpression) {
    v.visit_expression(&node.source);
}

pub fn walk_meta_property<V: Visitor + ?Sized>(v: &mut V, node: &MetaProperty) {
    v.visit_identifier(&node.meta);
    v.visit_identifier(&node.property);
}

pub fn walk_sequence_expression<V: Visitor + ?Sized>(v: &mut V, node: &SequenceExpression) {
    for expr in &node.expressions {
        v.visit_expression(expr);
    }
}

pub fn walk_unary_expression<V: Visitor + ?Sized>(v: &mut V, node: &UnaryExpression) {
    v.visit_expression(&node.argument);
}

pub fn walk_update_expression<V: Visitor + ?Sized>(v: &mut V, node: &UpdateExpression) {
    v.visit_expression(&node.argument);
}

pub fn walk_binary_expression<V: Visitor + ?Sized>(v: &mut V, node: &BinaryExpression) {
    v.visit_expression(&node.left);
    v.visit_expression(&node.right);
}

pub fn walk_logical_expression<V: Visitor + ?Sized>(v: &mut V, node: &LogicalExpression) {
    v.visit_expression(&node.left);
    v.visit_expression(&node.right);
}

pub fn walk_assignment_expression<V: Visitor + ?Sized>(v: &mut V, node: &AssignmentExpression) {
    v.visit_pattern(&node.left);
    v.visit_expression(&node.right);
}

pub fn walk_conditional_expression<V: Visitor + ?Sized>(v: &mut V, node: &ConditionalExpression) {
    v.visit_expression(&node.test);
    v.visit_expression(&node.consequent);
    v.visit_expression(&node.alternate);
}

pub fn walk_yield_expression<V: Visitor + ?Sized>(v: &mut V, node: &YieldExpression) {
    if let Some(argument) = &node.argument {
        v.visit_expression(argument);
    }
}

pub fn walk_await_expression<V: Visitor + ?Sized>(v: &mut V, node: &AwaitExpression) {
    v.visit_expression(&node.argument);
}

pub fn walk_arrow_function_expression<V: Visitor + ?Sized>(
    v: &mut V,
    node: &ArrowFunctionExpression,
) {
    for param in &node.params {
        v.visit_pattern(param);
    }
    match &node.body {
        ArrowBody::Block(n) => v.visit_block_statement(n),
        ArrowBody::Expression(e) => v.visit_expression(e),
    }
}

pub fn walk_function<V: Visitor + ?Sized>(v: &mut V, node: &Function) {
    if let Some(id) = &node.id {
        v.visit_identifier(id);
    }
    for param in &node.params {
        v.visit_pattern(param);
    }
    v.visit_block_statement(&node.body);
}

pub fn walk_class<V: Visitor + ?Sized>(v: &mut V, node: &Class) {
    if let Some(id) = &node.id {
        v.visit_identifier(id);
    }
    if let Some(super_class) = &node.super_class {
        v.visit_expression(super_class);
    }
    for member in &node.body {
        match member {
            ClassMember::Method(n) => v.visit_method_definition(n),
            ClassMember::Property(n) => v.visit_property_definition(n),
            ClassMember::StaticBlock(n) => v.visit_static_block(n),
        }
    }
}

pub fn walk_method_definition<V: Visitor + ?Sized>(v: &mut V, node: &MethodDefinition) {
    walk_property_key(v, &node.key);
    v.visit_function(&node.value);
}

pub fn walk_property_definition<V: Visitor + ?Sized>(v: &mut V, node: &PropertyDefinition) {
    walk_property_key(v, &node.key);
    if let Some(value) = &node.value {
        v.visit_expression(value);
    }
}

pub fn walk_static_block<V: Visitor + ?Sized>(v: &mut V, node: &StaticBlock) {
    for stmt in &node.body {
        v.visit_statement(stmt);
    }
}

pub fn walk_block_statement<V: Visitor + ?Sized>(v: &mut V, node: &BlockStatement) {
    for stmt in &node.body {
        v.visit_statement(stmt);
    }
}

pub fn walk_expression_statement<V: Visitor + ?Sized>(v: &mut V, node: &ExpressionStatement) {
    v.visit_expression(&node.expression);
}

pub fn walk_return_statement<V: Visitor + ?Sized>(v: &mut V, node: &ReturnStatement) {
    if let Some(argument) = &node.argument {
        v.visit_expression(argument);
    }
}

pub fn walk_break_statement<V: Visitor + ?Sized>(v: &mut V, node: &BreakStatement) {
    if let Some(label) = &node.label {
        v.visit_identifier(label);
    }
}

pub fn walk_continue_statement<V: Visitor + ?Sized>(v: &mut V, node: &ContinueStatement) {
    if let Some(label) = &node.label {
        v.visit_identifier(label);
    }
}

pub fn walk_if_statement<V: Visitor + ?Sized>(v: &mut V, node: &IfStatement) {
    v.visit_expression(&node.test);
    v.visit_statement(&node.consequent);
    if let Some(alternate) = &node.alternate {
        v.visit_statement(alternate);
    }
}

pub fn walk_switch_statement<V: Visitor + ?Sized>(v: &mut V, node: &SwitchStatement) {
    v.visit_expression(&node.discriminant);
    for case in &node.cases {
        v.visit_switch_case(case);
    }
}

pub fn walk_switch_case<V: Visitor + ?Sized>(v: &mut V, node: &SwitchCase) {
    if let Some(test) = &node.test {
        v.visit_expression(test);
    }
    for stmt in &node.consequent {
        v.visit_statement(stmt);
    }
}

pub fn walk_throw_statement<V: Visitor + ?Sized>(v: &mut V, node: &ThrowStatement) {
    v.visit_expression(&node.argument);
}

pub fn walk_try_statement<V: Visitor + ?Sized>(v: &mut V, node: &TryStatement) {
    v.visit_block_statement(&node.block);
    if let Some(handler) = &node.handler {
        v.visit_catch_clause(handler);
    }
    if let Some(finalizer) = &node.finalizer {
        v.visit_block_statement(finalizer);
    }
}

pub fn walk_catch_clause<V: Visitor + ?Sized>(v: &mut V, node: &CatchClause) {
    if let Some(param) = &node.param {
        v.visit_pattern(param);
    }
    v.visit_block_statement(&node.body);
}

pub fn walk_while_statement<V: Visitor + ?Sized>(v: &mut V, node: &WhileStatement) {
    v.visit_expression(&node.test);
    v.visit_statement(&node.body);
}

pub fn walk_do_while_statement<V: Visitor + ?Sized>(v: &mut V, node: &DoWhileStatement) {
    v.visit_statement(&node.body);
    v.visit_expression(&node.test);
}

pub fn walk_for_statement<V: Visitor + ?Sized>(v: &mut V, node: &ForStatement) {
    match &node.init {
        Some(ForInit::Variable(n)) => v.visit_variable_declaration(n),
        Some(ForInit::Expression(e)) => v.visit_expression(e),
        None => {}
    }
    if let Some(test) = &node.test {
        v.visit_expression(test);
    }
    if let Some(update) = &node.update {
        v.visit_expression(update);
    }
    v.visit_statement(&node.body);
}

fn walk_for_target<V: Visitor + ?Sized>(v: &mut V, target: &ForTarget) {
    match target {
        ForTarget::Variable(n) => v.visit_variable_declaration(n),
        ForTarget::Pattern(p) => v.visit_pattern(p),
    }
}

pub fn walk_for_in_statement<V: Visitor + ?Sized>(v: &mut V, node: &ForInStatement) {
    walk_for_target(v, &node.left);
    v.visit_expression(&node.right);
    v.visit_statement(&node.body);
}

pub fn walk_for_of_statement<V: Visitor + ?Sized>(v: &mut V, node: &ForOfStatement) {
    walk_for_target(v, &node.left);
    v.visit_expression(&node.right);
    v.visit_statement(&node.body);
}

pub fn walk_labeled_statement<V: Visitor + ?Sized>(v: &mut V, node: &LabeledStatement) {
    v.visit_identifier(&node.label);
    v.visit_statement(&node.body);
}

pub fn walk_with_statement<V: Visitor + ?Sized>(v: &mut V, node: &WithStatement) {
    v.visit_expression(&node.object);
    v.visit_statement(&node.body);
}

pub fn walk_variable_declaration<V: Visitor + ?Sized>(v: &mut V, node: &VariableDeclaration) {
    for declarator in &node.declarations {
        v.visit_variable_declarator(declarator);
    }
}

pub fn walk_variable_declarator<V: Visitor + ?Sized>(v: &mut V, node: &VariableDeclarator) {
    v.visit_pattern(&node.id);
    if let Some(init) = &node.init {
        v.visit_expression(init);
    }
}

fn walk_module_export_name<V: Visitor + ?Sized>(v: &mut V, name: &ModuleExportName) {
    match name {
        ModuleExportName::Identifier(n) => v.visit_identifier(n),
        ModuleExportName::Literal(n) => v.visit_literal(n),
    }
}

pub fn walk_import_declaration<V: Visitor + ?Sized>(v: &mut V, node: &ImportDeclaration) {
    for specifier in &node.specifiers {
        match specifier {
            ImportSpecifier::Named(n) => v.visit_import_named_specifier(n),
            ImportSpecifier::Default(n) => v.visit_import_default_specifier(n),
            ImportSpecifier::Namespace(n) => v.visit_import_namespace_specifier(n),
        }
    }
    v.visit_literal(&node.source);
}

pub fn walk_import_named_specifier<V: Visitor + ?Sized>(v: &mut V, node: &ImportNamedSpecifier) {
    walk_module_export_name(v, &node.imported);
    v.visit_identifier(&node.local);
}

pub fn walk_export_named_declaration<V: Visitor + ?Sized>(
    v: &mut V,
    node: &ExportNamedDeclaration,
) {
    if let Some(declaration) = &node.declaration {
        v.visit_statement(declaration);
    }
    for specifier in &node.specifiers {
        v.visit_export_specifier(specifier);
    }
    if let Some(source) = &node.source {
        v.visit_literal(source);
    }
}

pub fn walk_export_specifier<V: Visitor + ?Sized>(v: &mut V, node: &ExportSpecifier) {
    walk_module_export_name(v, &node.local);
    walk_module_export_name(v, &node.exported);
}

pub fn walk_export_default_declaration<V: Visitor + ?Sized>(
    v: &mut V,
    node: &ExportDefaultDeclaration,
) {
    match &node.declaration {
        ExportDefault::Function(n) => v.visit_function(n),
        ExportDefault::Class(n) => v.visit_class(n),
        ExportDefault::Expression(e) => v.visit_expression(e),
    }
}

pub fn walk_export_all_declaration<V: Visitor + ?Sized>(v: &mut V, node: &ExportAllDeclaration) {
    if let Some(exported) = &node.exported {
        walk_module_export_name(v, exported);
    }
    v.visit_literal(&node.source);
}

pub fn walk_array_pattern<V: Visitor + ?Sized>(v: &mut V, node: &ArrayPattern) {
    for element in node.elements.iter().flatten() {
        v.visit_pattern(element);
    }
}

pub fn walk_object_pattern<V: Visitor + ?Sized>(v: &mut V, node: &ObjectPattern) {
    for property in &node.properties {
        match property {
            ObjectPatternProperty::Property(n) => v.visit_pattern_property(n),
            ObjectPatternProperty::Rest(n) => v.visit_rest_element(n),
        }
    }
}

pub fn walk_pattern_property<V: Visitor + ?Sized>(v: &mut V, node: &PatternProperty) {
    walk_property_key(v, &node.key);
    v.visit_pattern(&node.value);
}

pub fn walk_assignment_pattern<V: Visitor + ?Sized>(v: &mut V, node: &AssignmentPattern) {
    v.visit_pattern(&node.left);
    v.visit_expression(&node.right);
}

pub fn walk_rest_element<V: Visitor + ?Sized>(v: &mut V, node: &RestElement) {
    v.visit_pattern(&node.argument);
}

fn walk_jsx_children<V: Visitor + ?Sized>(v: &mut V, children: &[JsxChild]) {
    for child in children {
        match child {
            JsxChild::Text(n) => v.visit_jsx_text(n),
            JsxChild::Element(n) => v.visit_jsx_element(n),
            JsxChild::Fragment(n) => v.visit_jsx_fragment(n),
            JsxChild::Container(n) => v.visit_jsx_expression_container(n),
        }
    }
}

fn walk_jsx_element_name<V: Visitor + ?Sized>(v: &mut V, name: &JsxElementName) {
    match name {
        JsxElementName::Identifier(n) => v.visit_jsx_identifier(n),
        JsxElementName::Member(n) => v.visit_jsx_member_expression(n),
        JsxElementName::Namespaced(n) => v.visit_jsx_namespaced_name(n),
    }
}

pub fn walk_jsx_element<V: Visitor + ?Sized>(v: &mut V, node: &JsxElement) {
    v.visit_jsx_opening_element(&node.opening);
    walk_jsx_children(v, &node.children);
    if let Some(closing) = &node.closing {
        v.visit_jsx_closing_element(closing);
    }
}

pub fn walk_jsx_fragment<V: Visitor + ?Sized>(v: &mut V, node: &JsxFragment) {
    walk_jsx_children(v, &node.children);
}

pub fn walk_jsx_opening_element<V: Visitor + ?Sized>(v: &mut V, node: &JsxOpeningElement) {
    walk_jsx_element_name(v, &node.name);
    for attribute in &node.attributes {
        match attribute {
            JsxAttributeItem::Attribute(n) => v.visit_jsx_attribute(n),
            JsxAttributeItem::Spread(n) => v.visit_jsx_spread_attribute(n),
        }
    }
}

pub fn walk_jsx_closing_element<V: Visitor + ?Sized>(v: &mut V, node: &JsxClosingElement) {
    walk_jsx_element_name(v, &node.name);
}

pub fn walk_jsx_expression_container<V: Visitor + ?Sized>(
    v: &mut V,
    node: &JsxExpressionContainer,
) {
    if let Some(expression) = &node.expression {
        v.visit_expression(expression);
    }
}

pub fn walk_jsx_member_expression<V: Visitor + ?Sized>(v: &mut V, node: &JsxMemberExpression) {
    walk_jsx_element_name(v, &node.object);
    v.visit_jsx_identifier(&node.property);
}

pub fn walk_jsx_namespaced_name<V: Visitor + ?Sized>(v: &mut V, node: &JsxNamespacedName) {
    v.visit_jsx_identifier(&node.namespace);
    v.visit_jsx_identifier(&node.name);
}

pub fn walk_jsx_attribute<V: Visitor + ?Sized>(v: &mut V, node: &JsxAttribute) {
    match &node.name {
        JsxAttributeName::Identifier(n) => v.visit_jsx_identifier(n),
        JsxAttributeName::Namespaced(n) => v.visit_jsx_namespaced_name(n),
    }
    match &node.value {
        Some(JsxAttributeValue::String(n)) => v.visit_literal(n),
        Some(JsxAttributeValue::Container(n)) => v.visit_jsx_expression_container(n),
        Some(JsxAttributeValue::Element(n)) => v.visit_jsx_element(n),
        Some(JsxAttributeValue::Fragment(n)) => v.visit_jsx_fragment(n),
        None => {}
    }
}

pub fn walk_jsx_spread_attribute<V: Visitor + ?Sized>(v: &mut V, node: &JsxSpreadAttribute) {
    v.visit_expression(&node.argument);
}

// =============================================================================
// Event-emitting traversal
// =============================================================================

/// Which side of a node an event notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Leave,
}

/// Adapter that fires a callback when entering and leaving every statement,
/// expression, and pattern during a default walk.
pub struct EventVisitor<F: FnMut(Phase, NodeKind)> {
    callback: F,
}

impl<F: FnMut(Phase, NodeKind)> EventVisitor<F> {
    pub fn new(callback: F) -> EventVisitor<F> {
        EventVisitor { callback }
    }
}

impl<F: FnMut(Phase, NodeKind)> Visitor for EventVisitor<F> {
    fn visit_program(&mut self, node: &Program) {
        (self.callback)(Phase::Enter, NodeKind::Program);
        walk_program(self, node);
        (self.callback)(Phase::Leave, NodeKind::Program);
    }

    fn visit_statement(&mut self, node: &Statement) {
        (self.callback)(Phase::Enter, node.kind());
        walk_statement(self, node);
        (self.callback)(Phase::Leave, node.kind());
    }

    fn visit_expression(&mut self, node: &Expression) {
        (self.callback)(Phase::Enter, node.kind());
        walk_expression(self, node);
        (self.callback)(Phase::Leave, node.kind());
    }

    fn visit_pattern(&mut self, node: &Pattern) {
        (self.callback)(Phase::Enter, node.kind());
        walk_pattern(self, node);
        (self.callback)(Phase::Leave, node.kind());
    }
}
