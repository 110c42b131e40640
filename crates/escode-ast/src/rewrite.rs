//! Update-if-changed tree reconstruction.
//!
//! `Rewriter` mirrors [`crate::visit::Visitor`] but every method returns a
//! (possibly new) node. The default `walk_*` reconstruction rewrites each
//! child slot, compares old and new children by identity, and returns the
//! original allocation when nothing underneath changed. A changed leaf
//! therefore rebuilds exactly the ancestor path up to the root; every
//! sibling subtree off that path is shared with the input tree.
//!
//! The per-kind boilerplate collapses into two combinators:
//! [`rewrite_list`], which walks a sequence without allocating until the
//! first diff is observed, and [`rewrite_option`] for optional slots. Child
//! slots are typed, so an override cannot return a node of the wrong kind
//! for a slot; the compiler performs the reconstruction-time check.

use std::rc::Rc;

use crate::ast::*;

/// Rewrite `program`, returning a tree that shares every unchanged subtree
/// with the input.
pub fn rewrite<R: Rewriter + ?Sized>(program: &Program, rewriter: &mut R) -> Program {
    tracing::trace!(statements = program.body.len(), "rewriting program");
    rewriter.rewrite_program(program)
}

// =============================================================================
// Combinators
// =============================================================================

/// Identity comparison for `Rc` slots.
pub fn rc_same<T>(a: &Rc<T>, b: &Rc<T>) -> bool {
    Rc::ptr_eq(a, b)
}

/// Rewrite a sequence slot. Returns `None` when no element changed; the
/// output vector is only materialized once a first diff is found, and the
/// unchanged prefix is back-filled from the original by cheap clones.
pub fn rewrite_list<T: Clone>(
    items: &[T],
    same: impl Fn(&T, &T) -> bool,
    mut f: impl FnMut(&T) -> T,
) -> Option<Vec<T>> {
    let mut rebuilt: Option<Vec<T>> = None;
    for (index, item) in items.iter().enumerate() {
        let new_item = f(item);
        match &mut rebuilt {
            Some(list) => list.push(new_item),
            None => {
                if !same(&new_item, item) {
                    let mut list = Vec::with_capacity(items.len());
                    list.extend_from_slice(&items[..index]);
                    list.push(new_item);
                    rebuilt = Some(list);
                }
            }
        }
    }
    rebuilt
}

/// Rewrite an optional slot. Returns the new slot plus whether it changed.
pub fn rewrite_option<T>(
    slot: &Option<T>,
    same: impl FnOnce(&T, &T) -> bool,
    f: impl FnOnce(&T) -> T,
) -> (Option<T>, bool) {
    match slot {
        None => (None, false),
        Some(old) => {
            let new = f(old);
            let changed = !same(&new, old);
            (Some(new), changed)
        }
    }
}

// =============================================================================
// Rewriter trait
// =============================================================================

pub trait Rewriter {
    fn rewrite_program(&mut self, node: &Program) -> Program {
        rewrite_program(self, node)
    }

    fn rewrite_statement(&mut self, node: &Statement) -> Statement {
        rewrite_statement(self, node)
    }

    fn rewrite_expression(&mut self, node: &Expression) -> Expression {
        rewrite_expression(self, node)
    }

    fn rewrite_pattern(&mut self, node: &Pattern) -> Pattern {
        rewrite_pattern(self, node)
    }

    // =========================================================================
    // Leaves
    // =========================================================================

    fn rewrite_identifier(&mut self, node: &Rc<Identifier>) -> Rc<Identifier> {
        Rc::clone(node)
    }

    fn rewrite_private_identifier(&mut self, node: &Rc<PrivateIdentifier>) -> Rc<PrivateIdentifier> {
        Rc::clone(node)
    }

    fn rewrite_literal(&mut self, node: &Rc<Literal>) -> Rc<Literal> {
        Rc::clone(node)
    }

    fn rewrite_template_element(&mut self, node: &Rc<TemplateElement>) -> Rc<TemplateElement> {
        Rc::clone(node)
    }

    fn rewrite_jsx_identifier(&mut self, node: &Rc<JsxIdentifier>) -> Rc<JsxIdentifier> {
        Rc::clone(node)
    }

    fn rewrite_jsx_text(&mut self, node: &Rc<JsxText>) -> Rc<JsxText> {
        Rc::clone(node)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn rewrite_array_expression(&mut self, node: &Rc<ArrayExpression>) -> Expression {
        rewrite_array_expression(self, node)
    }

    fn rewrite_object_expression(&mut self, node: &Rc<ObjectExpression>) -> Expression {
        rewrite_object_expression(self, node)
    }

    fn rewrite_property(&mut self, node: &Rc<Property>) -> Rc<Property> {
        rewrite_property(self, node)
    }

    fn rewrite_spread_element(&mut self, node: &Rc<SpreadElement>) -> Rc<SpreadElement> {
        rewrite_spread_element(self, node)
    }

    fn rewrite_template_literal(&mut self, node: &Rc<TemplateLiteral>) -> Rc<TemplateLiteral> {
        rewrite_template_literal(self, node)
    }

    fn rewrite_tagged_template_expression(
        &mut self,
        node: &Rc<TaggedTemplateExpression>,
    ) -> Expression {
        rewrite_tagged_template_expression(self, node)
    }

    fn rewrite_member_expression(&mut self, node: &Rc<MemberExpression>) -> Rc<MemberExpression> {
        rewrite_member_expression(self, node)
    }

    fn rewrite_call_expression(&mut self, node: &Rc<CallExpression>) -> Expression {
        rewrite_call_expression(self, node)
    }

    fn rewrite_new_expression(&mut self, node: &Rc<NewExpression>) -> Expression {
        rewrite_new_expression(self, node)
    }

    fn rewrite_chain_expression(&mut self, node: &Rc<ChainExpression>) -> Expression {
        rewrite_chain_expression(self, node)
    }

    fn rewrite_import_expression(&mut self, node: &Rc<ImportExpression>) -> Expression {
        rewrite_import_expression(self, node)
    }

    fn rewrite_meta_property(&mut self, node: &Rc<MetaProperty>) -> Expression {
        rewrite_meta_property(self, node)
    }

    fn rewrite_sequence_expression(&mut self, node: &Rc<SequenceExpression>) -> Expression {
        rewrite_sequence_expression(self, node)
    }

    fn rewrite_unary_expression(&mut self, node: &Rc<UnaryExpression>) -> Expression {
        rewrite_unary_expression(self, node)
    }

    fn rewrite_update_expression(&mut self, node: &Rc<UpdateExpression>) -> Expression {
        rewrite_update_expression(self, node)
    }

    fn rewrite_binary_expression(&mut self, node: &Rc<BinaryExpression>) -> Expression {
        rewrite_binary_expression(self, node)
    }

    fn rewrite_logical_expression(&mut self, node: &Rc<LogicalExpression>) -> Expression {
        rewrite_logical_expression(self, node)
    }

    fn rewrite_assignment_expression(&mut self, node: &Rc<AssignmentExpression>) -> Expression {
        rewrite_assignment_expression(self, node)
    }

    fn rewrite_conditional_expression(&mut self, node: &Rc<ConditionalExpression>) -> Expression {
        rewrite_conditional_expression(self, node)
    }

    fn rewrite_yield_expression(&mut self, node: &Rc<YieldExpression>) -> Expression {
        rewrite_yield_expression(self, node)
    }

    fn rewrite_await_expression(&mut self, node: &Rc<AwaitExpression>) -> Expression {
        rewrite_await_expression(self, node)
    }

    fn rewrite_arrow_function_expression(
        &mut self,
        node: &Rc<ArrowFunctionExpression>,
    ) -> Expression {
        rewrite_arrow_function_expression(self, node)
    }

    fn rewrite_function(&mut self, node: &Rc<Function>) -> Rc<Function> {
        rewrite_function(self, node)
    }

    fn rewrite_class(&mut self, node: &Rc<Class>) -> Rc<Class> {
        rewrite_class(self, node)
    }

    fn rewrite_method_definition(&mut self, node: &Rc<MethodDefinition>) -> Rc<MethodDefinition> {
        rewrite_method_definition(self, node)
    }

    fn rewrite_property_definition(
        &mut self,
        node: &Rc<PropertyDefinition>,
    ) -> Rc<PropertyDefinition> {
        rewrite_property_definition(self, node)
    }

    fn rewrite_static_block(&mut self, node: &Rc<StaticBlock>) -> Rc<StaticBlock> {
        rewrite_static_block(self, node)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn rewrite_block_statement(&mut self, node: &Rc<BlockStatement>) -> Rc<BlockStatement> {
        rewrite_block_statement(self, node)
    }

    fn rewrite_expression_statement(&mut self, node: &Rc<ExpressionStatement>) -> Statement {
        rewrite_expression_statement(self, node)
    }

    fn rewrite_return_statement(&mut self, node: &Rc<ReturnStatement>) -> Statement {
        rewrite_return_statement(self, node)
    }

    fn rewrite_break_statement(&mut self, node: &Rc<BreakStatement>) -> Statement {
        rewrite_break_statement(self, node)
    }

    fn rewrite_continue_statement(&mut self, node: &Rc<ContinueStatement>) -> Statement {
        rewrite_continue_statement(self, node)
    }

    fn rewrite_if_statement(&mut self, node: &Rc<IfStatement>) -> Statement {
        rewrite_if_statement(self, node)
    }

    fn rewrite_switch_statement(&mut self, node: &Rc<SwitchStatement>) -> Statement {
        rewrite_switch_statement(self, node)
    }

    fn rewrite_switch_case(&mut self, node: &Rc<SwitchCase>) -> Rc<SwitchCase> {
        rewrite_switch_case(self, node)
    }

    fn rewrite_throw_statement(&mut self, node: &Rc<ThrowStatement>) -> Statement {
        rewrite_throw_statement(self, node)
    }

    fn rewrite_try_statement(&mut self, node: &Rc<TryStatement>) -> Statement {
        rewrite_try_statement(self, node)
    }

    fn rewrite_catch_clause(&mut self, node: &Rc<CatchClause>) -> Rc<CatchClause> {
        rewrite_catch_clause(self, node)
    }

    fn rewrite_while_statement(&mut self, node: &Rc<WhileStatement>) -> Statement {
        rewrite_while_statement(self, node)
    }

    fn rewrite_do_while_statement(&mut self, node: &Rc<DoWhileStatement>) -> Statement {
        rewrite_do_while_statement(self, node)
    }

    fn rewrite_for_statement(&mut self, node: &Rc<ForStatement>) -> Statement {
        rewrite_for_statement(self, node)
    }

    fn rewrite_for_in_statement(&mut self, node: &Rc<ForInStatement>) -> Statement {
        rewrite_for_in_statement(self, node)
    }

    fn rewrite_for_of_statement(&mut self, node: &Rc<ForOfStatement>) -> Statement {
        rewrite_for_of_statement(self, node)
    }

    fn rewrite_labeled_statement(&mut self, node: &Rc<LabeledStatement>) -> Statement {
        rewrite_labeled_statement(self, node)
    }

    fn rewrite_with_statement(&mut self, node: &Rc<WithStatement>) -> Statement {
        rewrite_with_statement(self, node)
    }

    fn rewrite_variable_declaration(
        &mut self,
        node: &Rc<VariableDeclaration>,
    ) -> Rc<VariableDeclaration> {
        rewrite_variable_declaration(self, node)
    }

    fn rewrite_variable_declarator(
        &mut self,
        node: &Rc<VariableDeclarator>,
    ) -> Rc<VariableDeclarator> {
        rewrite_variable_declarator(self, node)
    }

    // =========================================================================
    // Modules
    // =========================================================================

    fn rewrite_import_declaration(&mut self, node: &Rc<ImportDeclaration>) -> Statement {
        rewrite_import_declaration(self, node)
    }

    fn rewrite_import_named_specifier(
        &mut self,
        node: &Rc<ImportNamedSpecifier>,
    ) -> Rc<ImportNamedSpecifier> {
        rewrite_import_named_specifier(self, node)
    }

    fn rewrite_import_default_specifier(
        &mut self,
        node: &Rc<ImportDefaultSpecifier>,
    ) -> Rc<ImportDefaultSpecifier> {
        rewrite_import_default_specifier(self, node)
    }

    fn rewrite_import_namespace_specifier(
        &mut self,
        node: &Rc<ImportNamespaceSpecifier>,
    ) -> Rc<ImportNamespaceSpecifier> {
        rewrite_import_namespace_specifier(self, node)
    }

    fn rewrite_export_named_declaration(&mut self, node: &Rc<ExportNamedDeclaration>) -> Statement {
        rewrite_export_named_declaration(self, node)
    }

    fn rewrite_export_specifier(&mut self, node: &Rc<ExportSpecifier>) -> Rc<ExportSpecifier> {
        rewrite_export_specifier(self, node)
    }

    fn rewrite_export_default_declaration(
        &mut self,
        node: &Rc<ExportDefaultDeclaration>,
    ) -> Statement {
        rewrite_export_default_declaration(self, node)
    }

    fn rewrite_export_all_declaration(&mut self, node: &Rc<ExportAllDeclaration>) -> Statement {
        rewrite_export_all_declaration(self, node)
    }

    // =========================================================================
    // Patterns
    // =========================================================================

    fn rewrite_array_pattern(&mut self, node: &Rc<ArrayPattern>) -> Pattern {
        rewrite_array_pattern(self, node)
    }

    fn rewrite_object_pattern(&mut self, node: &Rc<ObjectPattern>) -> Pattern {
        rewrite_object_pattern(self, node)
    }

    fn rewrite_pattern_property(&mut self, node: &Rc<PatternProperty>) -> Rc<PatternProperty> {
        rewrite_pattern_property(self, node)
    }

    fn rewrite_assignment_pattern(&mut self, node: &Rc<AssignmentPattern>) -> Pattern {
        rewrite_assignment_pattern(self, node)
    }

    fn rewrite_rest_element(&mut self, node: &Rc<RestElement>) -> Rc<RestElement> {
        rewrite_rest_element(self, node)
    }

    // =========================================================================
    // JSX
    // =========================================================================

    fn rewrite_jsx_element(&mut self, node: &Rc<JsxElement>) -> Rc<JsxElement> {
        rewrite_jsx_element(self, node)
    }

    fn rewrite_jsx_fragment(&mut self, node: &Rc<JsxFragment>) -> Rc<JsxFragment> {
        rewrite_jsx_fragment(self, node)
    }

    fn rewrite_jsx_opening_element(
        &mut self,
        node: &Rc<JsxOpeningElement>,
    ) -> Rc<JsxOpeningElement> {
        rewrite_jsx_opening_element(self, node)
    }

    fn rewrite_jsx_closing_element(
        &mut self,
        node: &Rc<JsxClosingElement>,
    ) -> Rc<JsxClosingElement> {
        rewrite_jsx_closing_element(self, node)
    }

    fn rewrite_jsx_expression_container(
        &mut self,
        node: &Rc<JsxExpressionContainer>,
    ) -> Rc<JsxExpressionContainer> {
        rewrite_jsx_expression_container(self, node)
    }

    fn rewrite_jsx_member_expression(
        &mut self,
        node: &Rc<JsxMemberExpression>,
    ) -> Rc<JsxMemberExpression> {
        rewrite_jsx_member_expression(self, node)
    }

    fn rewrite_jsx_namespaced_name(
        &mut self,
        node: &Rc<JsxNamespacedName>,
    ) -> Rc<JsxNamespacedName> {
        rewrite_jsx_namespaced_name(self, node)
    }

    fn rewrite_jsx_attribute(&mut self, node: &Rc<JsxAttribute>) -> Rc<JsxAttribute> {
        rewrite_jsx_attribute(self, node)
    }

    fn rewrite_jsx_spread_attribute(
        &mut self,
        node: &Rc<JsxSpreadAttribute>,
    ) -> Rc<JsxSpreadAttribute> {
        rewrite_jsx_spread_attribute(self, node)
    }
}

// =============================================================================
// Dispatchers
// =============================================================================

pub fn rewrite_program<R: Rewriter + ?Sized>(r: &mut R, node: &Program) -> Program {
    match rewrite_list(&node.body, Statement::same, |s| r.rewrite_statement(s)) {
        Some(body) => Program {
            source_type: node.source_type,
            body,
        },
        None => node.clone(),
    }
}

pub fn rewrite_statement<R: Rewriter + ?Sized>(r: &mut R, node: &Statement) -> Statement {
    match node {
        Statement::Block(n) => Statement::Block(r.rewrite_block_statement(n)),
        Statement::Break(n) => r.rewrite_break_statement(n),
        Statement::ClassDeclaration(n) => Statement::ClassDeclaration(r.rewrite_class(n)),
        Statement::Continue(n) => r.rewrite_continue_statement(n),
        Statement::Debugger(n) => Statement::Debugger(Rc::clone(n)),
        Statement::DoWhile(n) => r.rewrite_do_while_statement(n),
        Statement::Empty(n) => Statement::Empty(Rc::clone(n)),
        Statement::Expression(n) => r.rewrite_expression_statement(n),
        Statement::For(n) => r.rewrite_for_statement(n),
        Statement::ForIn(n) => r.rewrite_for_in_statement(n),
        Statement::ForOf(n) => r.rewrite_for_of_statement(n),
        Statement::FunctionDeclaration(n) => Statement::FunctionDeclaration(r.rewrite_function(n)),
        Statement::If(n) => r.rewrite_if_statement(n),
        Statement::Labeled(n) => r.rewrite_labeled_statement(n),
        Statement::Return(n) => r.rewrite_return_statement(n),
        Statement::Switch(n) => r.rewrite_switch_statement(n),
        Statement::Throw(n) => r.rewrite_throw_statement(n),
        Statement::Try(n) => r.rewrite_try_statement(n),
        Statement::Variable(n) => Statement::Variable(r.rewrite_variable_declaration(n)),
        Statement::While(n) => r.rewrite_while_statement(n),
        Statement::With(n) => r.rewrite_with_statement(n),
        Statement::ImportDeclaration(n) => r.rewrite_import_declaration(n),
        Statement::ExportNamed(n) => r.rewrite_export_named_declaration(n),
        Statement::ExportDefault(n) => r.rewrite_export_default_declaration(n),
        Statement::ExportAll(n) => r.rewrite_export_all_declaration(n),
    }
}

pub fn rewrite_expression<R: Rewriter + ?Sized>(r: &mut R, node: &Expression) -> Expression {
    match node {
        Expression::Array(n) => r.rewrite_array_expression(n),
        Expression::Arrow(n) => r.rewrite_arrow_function_expression(n),
        Expression::Assignment(n) => r.rewrite_assignment_expression(n),
        Expression::Await(n) => r.rewrite_await_expression(n),
        Expression::Binary(n) => r.rewrite_binary_expression(n),
        Expression::Call(n) => r.rewrite_call_expression(n),
        Expression::Chain(n) => r.rewrite_chain_expression(n),
        Expression::Class(n) => Expression::Class(r.rewrite_class(n)),
        Expression::Conditional(n) => r.rewrite_conditional_expression(n),
        Expression::Function(n) => Expression::Function(r.rewrite_function(n)),
        Expression::Identifier(n) => Expression::Identifier(r.rewrite_identifier(n)),
        Expression::Import(n) => r.rewrite_import_expression(n),
        Expression::Literal(n) => Expression::Literal(r.rewrite_literal(n)),
        Expression::Logical(n) => r.rewrite_logical_expression(n),
        Expression::Member(n) => Expression::Member(r.rewrite_member_expression(n)),
        Expression::MetaProperty(n) => r.rewrite_meta_property(n),
        Expression::New(n) => r.rewrite_new_expression(n),
        Expression::Object(n) => r.rewrite_object_expression(n),
        Expression::Sequence(n) => r.rewrite_sequence_expression(n),
        Expression::Super(n) => Expression::Super(Rc::clone(n)),
        Expression::TaggedTemplate(n) => r.rewrite_tagged_template_expression(n),
        Expression::Template(n) => Expression::Template(r.rewrite_template_literal(n)),
        Expression::This(n) => Expression::This(Rc::clone(n)),
        Expression::Unary(n) => r.rewrite_unary_expression(n),
        Expression::Update(n) => r.rewrite_update_expression(n),
        Expression::Yield(n) => r.rewrite_yield_expression(n),
        Expression::JsxElement(n) => Expression::JsxElement(r.rewrite_jsx_element(n)),
        Expression::JsxFragment(n) => Expression::JsxFragment(r.rewrite_jsx_fragment(n)),
    }
}

pub fn rewrite_pattern<R: Rewriter + ?Sized>(r: &mut R, node: &Pattern) -> Pattern {
    match node {
        Pattern::Identifier(n) => Pattern::Identifier(r.rewrite_identifier(n)),
        Pattern::Array(n) => r.rewrite_array_pattern(n),
        Pattern::Object(n) => r.rewrite_object_pattern(n),
        Pattern::Assignment(n) => r.rewrite_assignment_pattern(n),
        Pattern::Rest(n) => Pattern::Rest(r.rewrite_rest_element(n)),
        Pattern::Member(n) => Pattern::Member(r.rewrite_member_expression(n)),
    }
}

// =============================================================================
// Slot helpers
// =============================================================================

fn rewrite_property_key<R: Rewriter + ?Sized>(r: &mut R, key: &PropertyKey) -> PropertyKey {
    match key {
        PropertyKey::Identifier(n) => PropertyKey::Identifier(r.rewrite_identifier(n)),
        PropertyKey::Private(n) => PropertyKey::Private(r.rewrite_private_identifier(n)),
        PropertyKey::Literal(n) => PropertyKey::Literal(r.rewrite_literal(n)),
        PropertyKey::Computed(e) => PropertyKey::Computed(r.rewrite_expression(e)),
    }
}

fn rewrite_member_property<R: Rewriter + ?Sized>(
    r: &mut R,
    property: &MemberProperty,
) -> MemberProperty {
    match property {
        MemberProperty::Identifier(n) => MemberProperty::Identifier(r.rewrite_identifier(n)),
        MemberProperty::Private(n) => MemberProperty::Private(r.rewrite_private_identifier(n)),
        MemberProperty::Computed(e) => MemberProperty::Computed(r.rewrite_expression(e)),
    }
}

fn rewrite_argument<R: Rewriter + ?Sized>(r: &mut R, argument: &Argument) -> Argument {
    match argument {
        Argument::Expression(e) => Argument::Expression(r.rewrite_expression(e)),
        Argument::Spread(n) => Argument::Spread(r.rewrite_spread_element(n)),
    }
}

fn rewrite_module_export_name<R: Rewriter + ?Sized>(
    r: &mut R,
    name: &ModuleExportName,
) -> ModuleExportName {
    match name {
        ModuleExportName::Identifier(n) => ModuleExportName::Identifier(r.rewrite_identifier(n)),
        ModuleExportName::Literal(n) => ModuleExportName::Literal(r.rewrite_literal(n)),
    }
}

fn rewrite_for_target<R: Rewriter + ?Sized>(r: &mut R, target: &ForTarget) -> ForTarget {
    match target {
        ForTarget::Variable(n) => ForTarget::Variable(r.rewrite_variable_declaration(n)),
        ForTarget::Pattern(p) => ForTarget::Pattern(r.rewrite_pattern(p)),
    }
}

fn rewrite_jsx_child<R: Rewriter + ?Sized>(r: &mut R, child: &JsxChild) -> JsxChild {
    match child {
        JsxChild::Text(n) => JsxChild::Text(r.rewrite_jsx_text(n)),
        JsxChild::Element(n) => JsxChild::Element(r.rewrite_jsx_element(n)),
        JsxChild::Fragment(n) => JsxChild::Fragment(r.rewrite_jsx_fragment(n)),
        JsxChild::Container(n) => JsxChild::Container(r.rewrite_jsx_expression_container(n)),
    }
}

fn rewrite_jsx_element_name<R: Rewriter + ?Sized>(
    r: &mut R,
    name: &JsxElementName,
) -> JsxElementName {
    match name {
        JsxElementName::Identifier(n) => JsxElementName::Identifier(r.rewrite_jsx_identifier(n)),
        JsxElementName::Member(n) => JsxElementName::Member(r.rewrite_jsx_member_expression(n)),
        JsxElementName::Namespaced(n) => {
            JsxElementName::Namespaced(r.rewrite_jsx_namespaced_name(n))
        }
    }
}

// =============================================================================
// Expression reconstruction
// =============================================================================

pub fn rewrite_array_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ArrayExpression>,
) -> Expression {
    let elements = rewrite_list(&node.elements, ArrayElement::same, |element| match element {
        ArrayElement::Expression(e) => ArrayElement::Expression(r.rewrite_expression(e)),
        ArrayElement::Spread(n) => ArrayElement::Spread(r.rewrite_spread_element(n)),
        ArrayElement::Hole => ArrayElement::Hole,
    });
    match elements {
        None => Expression::Array(Rc::clone(node)),
        Some(elements) => Expression::Array(Rc::new(ArrayExpression { elements })),
    }
}

pub fn rewrite_object_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ObjectExpression>,
) -> Expression {
    let properties = rewrite_list(&node.properties, ObjectMember::same, |member| match member {
        ObjectMember::Property(n) => ObjectMember::Property(r.rewrite_property(n)),
        ObjectMember::Spread(n) => ObjectMember::Spread(r.rewrite_spread_element(n)),
    });
    match properties {
        None => Expression::Object(Rc::clone(node)),
        Some(properties) => Expression::Object(Rc::new(ObjectExpression { properties })),
    }
}

pub fn rewrite_property<R: Rewriter + ?Sized>(r: &mut R, node: &Rc<Property>) -> Rc<Property> {
    let key = rewrite_property_key(r, &node.key);
    let value = r.rewrite_expression(&node.value);
    if key.same(&node.key) && value.same(&node.value) {
        Rc::clone(node)
    } else {
        Rc::new(Property {
            key,
            value,
            kind: node.kind,
            shorthand: node.shorthand,
            method: node.method,
        })
    }
}

pub fn rewrite_spread_element<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<SpreadElement>,
) -> Rc<SpreadElement> {
    let argument = r.rewrite_expression(&node.argument);
    if argument.same(&node.argument) {
        Rc::clone(node)
    } else {
        Rc::new(SpreadElement { argument })
    }
}

pub fn rewrite_template_literal<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<TemplateLiteral>,
) -> Rc<TemplateLiteral> {
    let quasis = rewrite_list(&node.quasis, rc_same, |q| r.rewrite_template_element(q));
    let expressions = rewrite_list(&node.expressions, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    if quasis.is_none() && expressions.is_none() {
        Rc::clone(node)
    } else {
        Rc::new(TemplateLiteral {
            quasis: quasis.unwrap_or_else(|| node.quasis.clone()),
            expressions: expressions.unwrap_or_else(|| node.expressions.clone()),
        })
    }
}

pub fn rewrite_tagged_template_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<TaggedTemplateExpression>,
) -> Expression {
    let tag = r.rewrite_expression(&node.tag);
    let quasi = r.rewrite_template_literal(&node.quasi);
    if tag.same(&node.tag) && rc_same(&quasi, &node.quasi) {
        Expression::TaggedTemplate(Rc::clone(node))
    } else {
        Expression::TaggedTemplate(Rc::new(TaggedTemplateExpression { tag, quasi }))
    }
}

pub fn rewrite_member_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<MemberExpression>,
) -> Rc<MemberExpression> {
    let object = r.rewrite_expression(&node.object);
    let property = rewrite_member_property(r, &node.property);
    if object.same(&node.object) && property.same(&node.property) {
        Rc::clone(node)
    } else {
        Rc::new(MemberExpression {
            object,
            property,
            optional: node.optional,
        })
    }
}

pub fn rewrite_call_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<CallExpression>,
) -> Expression {
    let callee = r.rewrite_expression(&node.callee);
    let arguments = rewrite_list(&node.arguments, Argument::same, |a| rewrite_argument(r, a));
    if callee.same(&node.callee) && arguments.is_none() {
        Expression::Call(Rc::clone(node))
    } else {
        Expression::Call(Rc::new(CallExpression {
            callee,
            arguments: arguments.unwrap_or_else(|| node.arguments.clone()),
            optional: node.optional,
        }))
    }
}

pub fn rewrite_new_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<NewExpression>,
) -> Expression {
    let callee = r.rewrite_expression(&node.callee);
    let arguments = rewrite_list(&node.arguments, Argument::same, |a| rewrite_argument(r, a));
    if callee.same(&node.callee) && arguments.is_none() {
        Expression::New(Rc::clone(node))
    } else {
        Expression::New(Rc::new(NewExpression {
            callee,
            arguments: arguments.unwrap_or_else(|| node.arguments.clone()),
            explicit_arguments: node.explicit_arguments,
        }))
    }
}

pub fn rewrite_chain_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ChainExpression>,
) -> Expression {
    let expression = r.rewrite_expression(&node.expression);
    if expression.same(&node.expression) {
        Expression::Chain(Rc::clone(node))
    } else {
        Expression::Chain(Rc::new(ChainExpression { expression }))
    }
}

pub fn rewrite_import_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ImportExpression>,
) -> Expression {
    let source = r.rewrite_expression(&node.source);
    if source.same(&node.source) {
        Expression::Import(Rc::clone(node))
    } else {
        Expression::Import(Rc::new(ImportExpression { source }))
    }
}

pub fn rewrite_meta_property<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<MetaProperty>,
) -> Expression {
    let meta = r.rewrite_identifier(&node.meta);
    let property = r.rewrite_identifier(&node.property);
    if rc_same(&meta, &node.meta) && rc_same(&property, &node.property) {
        Expression::MetaProperty(Rc::clone(node))
    } else {
        Expression::MetaProperty(Rc::new(MetaProperty { meta, property }))
    }
}

pub fn rewrite_sequence_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<SequenceExpression>,
) -> Expression {
    match rewrite_list(&node.expressions, Expression::same, |e| {
        r.rewrite_expression(e)
    }) {
        None => Expression::Sequence(Rc::clone(node)),
        Some(expressions) => Expression::Sequence(Rc::new(SequenceExpression { expressions })),
    }
}

pub fn rewrite_unary_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<UnaryExpression>,
) -> Expression {
    let argument = r.rewrite_expression(&node.argument);
    if argument.same(&node.argument) {
        Expression::Unary(Rc::clone(node))
    } else {
        Expression::Unary(Rc::new(UnaryExpression {
            operator: node.operator,
            argument,
        }))
    }
}

pub fn rewrite_update_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<UpdateExpression>,
) -> Expression {
    let argument = r.rewrite_expression(&node.argument);
    if argument.same(&node.argument) {
        Expression::Update(Rc::clone(node))
    } else {
        Expression::Update(Rc::new(UpdateExpression {
            operator: node.operator,
            argument,
            prefix: node.prefix,
        }))
    }
}

pub fn rewrite_binary_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<BinaryExpression>,
) -> Expression {
    let left = r.rewrite_expression(&node.left);
    let right = r.rewrite_expression(&node.right);
    if left.same(&node.left) && right.same(&node.right) {
        Expression::Binary(Rc::clone(node))
    } else {
        Expression::Binary(Rc::new(BinaryExpression {
            operator: node.operator,
            left,
            right,
        }))
    }
}

pub fn rewrite_logical_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<LogicalExpression>,
) -> Expression {
    let left = r.rewrite_expression(&node.left);
    let right = r.rewrite_expression(&node.right);
    if left.same(&node.left) && right.same(&node.right) {
        Expression::Logical(Rc::clone(node))
    } else {
        Expression::Logical(Rc::new(LogicalExpression {
            operator: node.operator,
            left,
            right,
        }))
    }
}

pub fn rewrite_assignment_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<AssignmentExpression>,
) -> Expression {
    let left = r.rewrite_pattern(&node.left);
    let right = r.rewrite_expression(&node.right);
    if left.same(&node.left) && right.same(&node.right) {
        Expression::Assignment(Rc::clone(node))
    } else {
        Expression::Assignment(Rc::new(AssignmentExpression {
            operator: node.operator,
            left,
            right,
        }))
    }
}

pub fn rewrite_conditional_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ConditionalExpression>,
) -> Expression {
    let test = r.rewrite_expression(&node.test);
    let consequent = r.rewrite_expression(&node.consequent);
    let alternate = r.rewrite_expression(&node.alternate);
    if test.same(&node.test) && consequent.same(&node.consequent) && alternate.same(&node.alternate)
    {
        Expression::Conditional(Rc::clone(node))
    } else {
        Expression::Conditional(Rc::new(ConditionalExpression {
            test,
            consequent,
            alternate,
        }))
    }
}

pub fn rewrite_yield_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<YieldExpression>,
) -> Expression {
    let (argument, changed) = rewrite_option(&node.argument, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    if !changed {
        Expression::Yield(Rc::clone(node))
    } else {
        Expression::Yield(Rc::new(YieldExpression {
            argument,
            delegate: node.delegate,
        }))
    }
}

pub fn rewrite_await_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<AwaitExpression>,
) -> Expression {
    let argument = r.rewrite_expression(&node.argument);
    if argument.same(&node.argument) {
        Expression::Await(Rc::clone(node))
    } else {
        Expression::Await(Rc::new(AwaitExpression { argument }))
    }
}

pub fn rewrite_arrow_function_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ArrowFunctionExpression>,
) -> Expression {
    let params = rewrite_list(&node.params, Pattern::same, |p| r.rewrite_pattern(p));
    let body = match &node.body {
        ArrowBody::Block(n) => ArrowBody::Block(r.rewrite_block_statement(n)),
        ArrowBody::Expression(e) => ArrowBody::Expression(r.rewrite_expression(e)),
    };
    if params.is_none() && body.same(&node.body) {
        Expression::Arrow(Rc::clone(node))
    } else {
        Expression::Arrow(Rc::new(ArrowFunctionExpression {
            params: params.unwrap_or_else(|| node.params.clone()),
            body,
            is_async: node.is_async,
        }))
    }
}

pub fn rewrite_function<R: Rewriter + ?Sized>(r: &mut R, node: &Rc<Function>) -> Rc<Function> {
    let (id, id_changed) = rewrite_option(&node.id, rc_same, |i| r.rewrite_identifier(i));
    let params = rewrite_list(&node.params, Pattern::same, |p| r.rewrite_pattern(p));
    let body = r.rewrite_block_statement(&node.body);
    if !id_changed && params.is_none() && rc_same(&body, &node.body) {
        Rc::clone(node)
    } else {
        Rc::new(Function {
            id,
            params: params.unwrap_or_else(|| node.params.clone()),
            body,
            is_async: node.is_async,
            is_generator: node.is_generator,
        })
    }
}

pub fn rewrite_class<R: Rewriter + ?Sized>(r: &mut R, node: &Rc<Class>) -> Rc<Class> {
    let (id, id_changed) = rewrite_option(&node.id, rc_same, |i| r.rewrite_identifier(i));
    let (super_class, super_changed) = rewrite_option(&node.super_class, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    let body = rewrite_list(&node.body, ClassMember::same, |member| match member {
        ClassMember::Method(n) => ClassMember::Method(r.rewrite_method_definition(n)),
        ClassMember::Property(n) => ClassMember::Property(r.rewrite_property_definition(n)),
        ClassMember::StaticBlock(n) => ClassMember::StaticBlock(r.rewrite_static_block(n)),
    });
    if !id_changed && !super_changed && body.is_none() {
        Rc::clone(node)
    } else {
        Rc::new(Class {
            id,
            super_class,
            body: body.unwrap_or_else(|| node.body.clone()),
        })
    }
}

pub fn rewrite_method_definition<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<MethodDefinition>,
) -> Rc<MethodDefinition> {
    let key = rewrite_property_key(r, &node.key);
    let value = r.rewrite_function(&node.value);
    if key.same(&node.key) && rc_same(&value, &node.value) {
        Rc::clone(node)
    } else {
        Rc::new(MethodDefinition {
            key,
            value,
            kind: node.kind,
            is_static: node.is_static,
        })
    }
}

pub fn rewrite_property_definition<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<PropertyDefinition>,
) -> Rc<PropertyDefinition> {
    let key = rewrite_property_key(r, &node.key);
    let (value, value_changed) = rewrite_option(&node.value, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    if key.same(&node.key) && !value_changed {
        Rc::clone(node)
    } else {
        Rc::new(PropertyDefinition {
            key,
            value,
            is_static: node.is_static,
        })
    }
}

pub fn rewrite_static_block<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<StaticBlock>,
) -> Rc<StaticBlock> {
    match rewrite_list(&node.body, Statement::same, |s| r.rewrite_statement(s)) {
        None => Rc::clone(node),
        Some(body) => Rc::new(StaticBlock { body }),
    }
}

// =============================================================================
// Statement reconstruction
// =============================================================================

pub fn rewrite_block_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<BlockStatement>,
) -> Rc<BlockStatement> {
    match rewrite_list(&node.body, Statement::same, |s| r.rewrite_statement(s)) {
        None => Rc::clone(node),
        Some(body) => Rc::new(BlockStatement { body }),
    }
}

pub fn rewrite_expression_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ExpressionStatement>,
) -> Statement {
    let expression = r.rewrite_expression(&node.expression);
    if expression.same(&node.expression) {
        Statement::Expression(Rc::clone(node))
    } else {
        Statement::Expression(Rc::new(ExpressionStatement { expression }))
    }
}

pub fn rewrite_return_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ReturnStatement>,
) -> Statement {
    let (argument, changed) = rewrite_option(&node.argument, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    if !changed {
        Statement::Return(Rc::clone(node))
    } else {
        Statement::Return(Rc::new(ReturnStatement { argument }))
    }
}

pub fn rewrite_break_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<BreakStatement>,
) -> Statement {
    let (label, changed) = rewrite_option(&node.label, rc_same, |l| r.rewrite_identifier(l));
    if !changed {
        Statement::Break(Rc::clone(node))
    } else {
        Statement::Break(Rc::new(BreakStatement { label }))
    }
}

pub fn rewrite_continue_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ContinueStatement>,
) -> Statement {
    let (label, changed) = rewrite_option(&node.label, rc_same, |l| r.rewrite_identifier(l));
    if !changed {
        Statement::Continue(Rc::clone(node))
    } else {
        Statement::Continue(Rc::new(ContinueStatement { label }))
    }
}

pub fn rewrite_if_statement<R: Rewriter + ?Sized>(r: &mut R, node: &Rc<IfStatement>) -> Statement {
    let test = r.rewrite_expression(&node.test);
    let consequent = r.rewrite_statement(&node.consequent);
    let (alternate, alternate_changed) =
        rewrite_option(&node.alternate, Statement::same, |s| r.rewrite_statement(s));
    if test.same(&node.test) && consequent.same(&node.consequent) && !alternate_changed {
        Statement::If(Rc::clone(node))
    } else {
        Statement::If(Rc::new(IfStatement {
            test,
            consequent,
            alternate,
        }))
    }
}

pub fn rewrite_switch_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<SwitchStatement>,
) -> Statement {
    let discriminant = r.rewrite_expression(&node.discriminant);
    let cases = rewrite_list(&node.cases, rc_same, |c| r.rewrite_switch_case(c));
    if discriminant.same(&node.discriminant) && cases.is_none() {
        Statement::Switch(Rc::clone(node))
    } else {
        Statement::Switch(Rc::new(SwitchStatement {
            discriminant,
            cases: cases.unwrap_or_else(|| node.cases.clone()),
        }))
    }
}

pub fn rewrite_switch_case<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<SwitchCase>,
) -> Rc<SwitchCase> {
    let (test, test_changed) = rewrite_option(&node.test, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    let consequent = rewrite_list(&node.consequent, Statement::same, |s| {
        r.rewrite_statement(s)
    });
    if !test_changed && consequent.is_none() {
        Rc::clone(node)
    } else {
        Rc::new(SwitchCase {
            test,
            consequent: consequent.unwrap_or_else(|| node.consequent.clone()),
        })
    }
}

pub fn rewrite_throw_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ThrowStatement>,
) -> Statement {
    let argument = r.rewrite_expression(&node.argument);
    if argument.same(&node.argument) {
        Statement::Throw(Rc::clone(node))
    } else {
        Statement::Throw(Rc::new(ThrowStatement { argument }))
    }
}

pub fn rewrite_try_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<TryStatement>,
) -> Statement {
    let block = r.rewrite_block_statement(&node.block);
    let (handler, handler_changed) =
        rewrite_option(&node.handler, rc_same, |h| r.rewrite_catch_clause(h));
    let (finalizer, finalizer_changed) =
        rewrite_option(&node.finalizer, rc_same, |f| r.rewrite_block_statement(f));
    if rc_same(&block, &node.block) && !handler_changed && !finalizer_changed {
        Statement::Try(Rc::clone(node))
    } else {
        Statement::Try(Rc::new(TryStatement {
            block,
            handler,
            finalizer,
        }))
    }
}

pub fn rewrite_catch_clause<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<CatchClause>,
) -> Rc<CatchClause> {
    let (param, param_changed) =
        rewrite_option(&node.param, Pattern::same, |p| r.rewrite_pattern(p));
    let body = r.rewrite_block_statement(&node.body);
    if !param_changed && rc_same(&body, &node.body) {
        Rc::clone(node)
    } else {
        Rc::new(CatchClause { param, body })
    }
}

pub fn rewrite_while_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<WhileStatement>,
) -> Statement {
    let test = r.rewrite_expression(&node.test);
    let body = r.rewrite_statement(&node.body);
    if test.same(&node.test) && body.same(&node.body) {
        Statement::While(Rc::clone(node))
    } else {
        Statement::While(Rc::new(WhileStatement { test, body }))
    }
}

pub fn rewrite_do_while_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<DoWhileStatement>,
) -> Statement {
    let body = r.rewrite_statement(&node.body);
    let test = r.rewrite_expression(&node.test);
    if body.same(&node.body) && test.same(&node.test) {
        Statement::DoWhile(Rc::clone(node))
    } else {
        Statement::DoWhile(Rc::new(DoWhileStatement { body, test }))
    }
}

pub fn rewrite_for_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ForStatement>,
) -> Statement {
    let (init, init_changed) = rewrite_option(&node.init, ForInit::same, |init| match init {
        ForInit::Variable(n) => ForInit::Variable(r.rewrite_variable_declaration(n)),
        ForInit::Expression(e) => ForInit::Expression(r.rewrite_expression(e)),
    });
    let (test, test_changed) = rewrite_option(&node.test, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    let (update, update_changed) = rewrite_option(&node.update, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    let body = r.rewrite_statement(&node.body);
    if !init_changed && !test_changed && !update_changed && body.same(&node.body) {
        Statement::For(Rc::clone(node))
    } else {
        Statement::For(Rc::new(ForStatement {
            init,
            test,
            update,
            body,
        }))
    }
}

pub fn rewrite_for_in_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ForInStatement>,
) -> Statement {
    let left = rewrite_for_target(r, &node.left);
    let right = r.rewrite_expression(&node.right);
    let body = r.rewrite_statement(&node.body);
    if left.same(&node.left) && right.same(&node.right) && body.same(&node.body) {
        Statement::ForIn(Rc::clone(node))
    } else {
        Statement::ForIn(Rc::new(ForInStatement { left, right, body }))
    }
}

pub fn rewrite_for_of_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ForOfStatement>,
) -> Statement {
    let left = rewrite_for_target(r, &node.left);
    let right = r.rewrite_expression(&node.right);
    let body = r.rewrite_statement(&node.body);
    if left.same(&node.left) && right.same(&node.right) && body.same(&node.body) {
        Statement::ForOf(Rc::clone(node))
    } else {
        Statement::ForOf(Rc::new(ForOfStatement {
            left,
            right,
            body,
            is_await: node.is_await,
        }))
    }
}

pub fn rewrite_labeled_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<LabeledStatement>,
) -> Statement {
    let label = r.rewrite_identifier(&node.label);
    let body = r.rewrite_statement(&node.body);
    if rc_same(&label, &node.label) && body.same(&node.body) {
        Statement::Labeled(Rc::clone(node))
    } else {
        Statement::Labeled(Rc::new(LabeledStatement { label, body }))
    }
}

pub fn rewrite_with_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<WithStatement>,
) -> Statement {
    let object = r.rewrite_expression(&node.object);
    let body = r.rewrite_statement(&node.body);
    if object.same(&node.object) && body.same(&node.body) {
        Statement::With(Rc::clone(node))
    } else {
        Statement::With(Rc::new(WithStatement { object, body }))
    }
}

pub fn rewrite_variable_declaration<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<VariableDeclaration>,
) -> Rc<VariableDeclaration> {
    match rewrite_list(&node.declarations, rc_same, |d| {
        r.rewrite_variable_declarator(d)
    }) {
        None => Rc::clone(node),
        Some(declarations) => Rc::new(VariableDeclaration {
            kind: node.kind,
            declarations,
        }),
    }
}

pub fn rewrite_variable_declarator<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<VariableDeclarator>,
) -> Rc<VariableDeclarator> {
    let id = r.rewrite_pattern(&node.id);
    let (init, init_changed) = rewrite_option(&node.init, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    if id.same(&node.id) && !init_changed {
        Rc::clone(node)
    } else {
        Rc::new(VariableDeclarator { id, init })
    }
}

// =============================================================================
// Module reconstruction
// =============================================================================

pub fn rewrite_import_declaration<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ImportDeclaration>,
) -> Statement {
    let specifiers = rewrite_list(&node.specifiers, ImportSpecifier::same, |s| match s {
        ImportSpecifier::Named(n) => ImportSpecifier::Named(r.rewrite_import_named_specifier(n)),
        ImportSpecifier::Default(n) => {
            ImportSpecifier::Default(r.rewrite_import_default_specifier(n))
        }
        ImportSpecifier::Namespace(n) => {
            ImportSpecifier::Namespace(r.rewrite_import_namespace_specifier(n))
        }
    });
    let source = r.rewrite_literal(&node.source);
    if specifiers.is_none() && rc_same(&source, &node.source) {
        Statement::ImportDeclaration(Rc::clone(node))
    } else {
        Statement::ImportDeclaration(Rc::new(ImportDeclaration {
            specifiers: specifiers.unwrap_or_else(|| node.specifiers.clone()),
            source,
        }))
    }
}

pub fn rewrite_import_named_specifier<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ImportNamedSpecifier>,
) -> Rc<ImportNamedSpecifier> {
    let imported = rewrite_module_export_name(r, &node.imported);
    let local = r.rewrite_identifier(&node.local);
    if imported.same(&node.imported) && rc_same(&local, &node.local) {
        Rc::clone(node)
    } else {
        Rc::new(ImportNamedSpecifier { imported, local })
    }
}

pub fn rewrite_import_default_specifier<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ImportDefaultSpecifier>,
) -> Rc<ImportDefaultSpecifier> {
    let local = r.rewrite_identifier(&node.local);
    if rc_same(&local, &node.local) {
        Rc::clone(node)
    } else {
        Rc::new(ImportDefaultSpecifier { local })
    }
}

pub fn rewrite_import_namespace_specifier<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ImportNamespaceSpecifier>,
) -> Rc<ImportNamespaceSpecifier> {
    let local = r.rewrite_identifier(&node.local);
    if rc_same(&local, &node.local) {
        Rc::clone(node)
    } else {
        Rc::new(ImportNamespaceSpecifier { local })
    }
}

pub fn rewrite_export_named_declaration<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ExportNamedDeclaration>,
) -> Statement {
    let (declaration, declaration_changed) =
        rewrite_option(&node.declaration, Statement::same, |s| {
            r.rewrite_statement(s)
        });
    let specifiers = rewrite_list(&node.specifiers, rc_same, |s| r.rewrite_export_specifier(s));
    let (source, source_changed) = rewrite_option(&node.source, rc_same, |l| r.rewrite_literal(l));
    if !declaration_changed && specifiers.is_none() && !source_changed {
        Statement::ExportNamed(Rc::clone(node))
    } else {
        Statement::ExportNamed(Rc::new(ExportNamedDeclaration {
            declaration,
            specifiers: specifiers.unwrap_or_else(|| node.specifiers.clone()),
            source,
        }))
    }
}

pub fn rewrite_export_specifier<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ExportSpecifier>,
) -> Rc<ExportSpecifier> {
    let local = rewrite_module_export_name(r, &node.local);
    let exported = rewrite_module_export_name(r, &node.exported);
    if local.same(&node.local) && exported.same(&node.exported) {
        Rc::clone(node)
    } else {
        Rc::new(ExportSpecifier { local, exported })
    }
}

pub fn rewrite_export_default_declaration<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ExportDefaultDeclaration>,
) -> Statement {
    let declaration = match &node.declaration {
        ExportDefault::Function(n) => ExportDefault::Function(r.rewrite_function(n)),
        ExportDefault::Class(n) => ExportDefault::Class(r.rewrite_class(n)),
        ExportDefault::Expression(e) => ExportDefault::Expression(r.rewrite_expression(e)),
    };
    if declaration.same(&node.declaration) {
        Statement::ExportDefault(Rc::clone(node))
    } else {
        Statement::ExportDefault(Rc::new(ExportDefaultDeclaration { declaration }))
    }
}

pub fn rewrite_export_all_declaration<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ExportAllDeclaration>,
) -> Statement {
    let (exported, exported_changed) =
        rewrite_option(&node.exported, ModuleExportName::same, |n| {
            rewrite_module_export_name(r, n)
        });
    let source = r.rewrite_literal(&node.source);
    if !exported_changed && rc_same(&source, &node.source) {
        Statement::ExportAll(Rc::clone(node))
    } else {
        Statement::ExportAll(Rc::new(ExportAllDeclaration { exported, source }))
    }
}

// =============================================================================
// Pattern reconstruction
// =============================================================================

pub fn rewrite_array_pattern<R: Rewriter + ?Sized>(r: &mut R, node: &Rc<ArrayPattern>) -> Pattern {
    let elements = rewrite_list(
        &node.elements,
        |a, b| match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a.same(b),
            _ => false,
        },
        |element| element.as_ref().map(|p| r.rewrite_pattern(p)),
    );
    match elements {
        None => Pattern::Array(Rc::clone(node)),
        Some(elements) => Pattern::Array(Rc::new(ArrayPattern { elements })),
    }
}

pub fn rewrite_object_pattern<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<ObjectPattern>,
) -> Pattern {
    let properties = rewrite_list(
        &node.properties,
        ObjectPatternProperty::same,
        |property| match property {
            ObjectPatternProperty::Property(n) => {
                ObjectPatternProperty::Property(r.rewrite_pattern_property(n))
            }
            ObjectPatternProperty::Rest(n) => {
                ObjectPatternProperty::Rest(r.rewrite_rest_element(n))
            }
        },
    );
    match properties {
        None => Pattern::Object(Rc::clone(node)),
        Some(properties) => Pattern::Object(Rc::new(ObjectPattern { properties })),
    }
}

pub fn rewrite_pattern_property<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<PatternProperty>,
) -> Rc<PatternProperty> {
    let key = rewrite_property_key(r, &node.key);
    let value = r.rewrite_pattern(&node.value);
    if key.same(&node.key) && value.same(&node.value) {
        Rc::clone(node)
    } else {
        Rc::new(PatternProperty {
            key,
            value,
            shorthand: node.shorthand,
        })
    }
}

pub fn rewrite_assignment_pattern<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<AssignmentPattern>,
) -> Pattern {
    let left = r.rewrite_pattern(&node.left);
    let right = r.rewrite_expression(&node.right);
    if left.same(&node.left) && right.same(&node.right) {
        Pattern::Assignment(Rc::clone(node))
    } else {
        Pattern::Assignment(Rc::new(AssignmentPattern { left, right }))
    }
}

pub fn rewrite_rest_element<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<RestElement>,
) -> Rc<RestElement> {
    let argument = r.rewrite_pattern(&node.argument);
    if argument.same(&node.argument) {
        Rc::clone(node)
    } else {
        Rc::new(RestElement { argument })
    }
}

// =============================================================================
// JSX reconstruction
// =============================================================================

pub fn rewrite_jsx_element<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<JsxElement>,
) -> Rc<JsxElement> {
    let opening = r.rewrite_jsx_opening_element(&node.opening);
    let children = rewrite_list(&node.children, JsxChild::same, |c| rewrite_jsx_child(r, c));
    let (closing, closing_changed) = rewrite_option(&node.closing, rc_same, |c| {
        r.rewrite_jsx_closing_element(c)
    });
    if rc_same(&opening, &node.opening) && children.is_none() && !closing_changed {
        Rc::clone(node)
    } else {
        Rc::new(JsxElement {
            opening,
            children: children.unwrap_or_else(|| node.children.clone()),
            closing,
        })
    }
}

pub fn rewrite_jsx_fragment<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<JsxFragment>,
) -> Rc<JsxFragment> {
    match rewrite_list(&node.children, JsxChild::same, |c| rewrite_jsx_child(r, c)) {
        None => Rc::clone(node),
        Some(children) => Rc::new(JsxFragment { children }),
    }
}

pub fn rewrite_jsx_opening_element<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<JsxOpeningElement>,
) -> Rc<JsxOpeningElement> {
    let name = rewrite_jsx_element_name(r, &node.name);
    let attributes = rewrite_list(&node.attributes, JsxAttributeItem::same, |a| match a {
        JsxAttributeItem::Attribute(n) => JsxAttributeItem::Attribute(r.rewrite_jsx_attribute(n)),
        JsxAttributeItem::Spread(n) => JsxAttributeItem::Spread(r.rewrite_jsx_spread_attribute(n)),
    });
    if name.same(&node.name) && attributes.is_none() {
        Rc::clone(node)
    } else {
        Rc::new(JsxOpeningElement {
            name,
            attributes: attributes.unwrap_or_else(|| node.attributes.clone()),
            self_closing: node.self_closing,
        })
    }
}

pub fn rewrite_jsx_closing_element<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<JsxClosingElement>,
) -> Rc<JsxClosingElement> {
    let name = rewrite_jsx_element_name(r, &node.name);
    if name.same(&node.name) {
        Rc::clone(node)
    } else {
        Rc::new(JsxClosingElement { name })
    }
}

pub fn rewrite_jsx_expression_container<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<JsxExpressionContainer>,
) -> Rc<JsxExpressionContainer> {
    let (expression, changed) = rewrite_option(&node.expression, Expression::same, |e| {
        r.rewrite_expression(e)
    });
    if !changed {
        Rc::clone(node)
    } else {
        Rc::new(JsxExpressionContainer { expression })
    }
}

pub fn rewrite_jsx_member_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<JsxMemberExpression>,
) -> Rc<JsxMemberExpression> {
    let object = rewrite_jsx_element_name(r, &node.object);
    let property = r.rewrite_jsx_identifier(&node.property);
    if object.same(&node.object) && rc_same(&property, &node.property) {
        Rc::clone(node)
    } else {
        Rc::new(JsxMemberExpression { object, property })
    }
}

pub fn rewrite_jsx_namespaced_name<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<JsxNamespacedName>,
) -> Rc<JsxNamespacedName> {
    let namespace = r.rewrite_jsx_identifier(&node.namespace);
    let name = r.rewrite_jsx_identifier(&node.name);
    if rc_same(&namespace, &node.namespace) && rc_same(&name, &node.name) {
        Rc::clone(node)
    } else {
        Rc::new(JsxNamespacedName { namespace, name })
    }
}

pub fn rewrite_jsx_attribute<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<JsxAttribute>,
) -> Rc<JsxAttribute> {
    let name = match &node.name {
        JsxAttributeName::Identifier(n) => JsxAttributeName::Identifier(r.rewrite_jsx_identifier(n)),
        JsxAttributeName::Namespaced(n) => {
            JsxAttributeName::Namespaced(r.rewrite_jsx_namespaced_name(n))
        }
    };
    let (value, value_changed) =
        rewrite_option(&node.value, JsxAttributeValue::same, |v| match v {
            JsxAttributeValue::String(n) => JsxAttributeValue::String(r.rewrite_literal(n)),
            JsxAttributeValue::Container(n) => {
                JsxAttributeValue::Container(r.rewrite_jsx_expression_container(n))
            }
            JsxAttributeValue::Element(n) => JsxAttributeValue::Element(r.rewrite_jsx_element(n)),
            JsxAttributeValue::Fragment(n) => {
                JsxAttributeValue::Fragment(r.rewrite_jsx_fragment(n))
            }
        });
    if name.same(&node.name) && !value_changed {
        Rc::clone(node)
    } else {
        Rc::new(JsxAttribute { name, value })
    }
}

pub fn rewrite_jsx_spread_attribute<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &Rc<JsxSpreadAttribute>,
) -> Rc<JsxSpreadAttribute> {
    let argument = r.rewrite_expression(&node.argument);
    if argument.same(&node.argument) {
        Rc::clone(node)
    } else {
        Rc::new(JsxSpreadAttribute { argument })
    }
}
