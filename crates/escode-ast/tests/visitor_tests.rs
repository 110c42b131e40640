//! Default traversal order and override behavior.

use std::rc::Rc;

use escode_ast::ast::*;
use escode_ast::kind::NodeKind;
use escode_ast::visit::{EventVisitor, Phase, Visitor, visit, walk_function};

fn script(body: Vec<Statement>) -> Program {
    Program {
        source_type: SourceType::Script,
        body,
    }
}

fn sample_function() -> Statement {
    // function f(a, b) { return a + b; }
    Statement::FunctionDeclaration(Rc::new(Function {
        id: Some(Rc::new(Identifier { name: "f".into() })),
        params: vec![Pattern::ident("a"), Pattern::ident("b")],
        body: Rc::new(BlockStatement {
            body: vec![Statement::ret(Some(Expression::binary(
                Expression::ident("a"),
                escode_ast::ops::BinaryOperator::Addition,
                Expression::ident("b"),
            )))],
        }),
        is_async: false,
        is_generator: false,
    }))
}

#[derive(Default)]
struct CountIdentifiers {
    count: usize,
}

impl Visitor for CountIdentifiers {
    fn visit_identifier(&mut self, _node: &Identifier) {
        self.count += 1;
    }
}

#[test]
fn default_walk_reaches_every_identifier() {
    let program = script(vec![sample_function()]);
    let mut counter = CountIdentifiers::default();
    visit(&program, &mut counter);
    // f, a, b in the header plus a, b in the body.
    assert_eq!(counter.count, 5);
}

#[test]
fn override_decides_whether_to_descend() {
    struct SkipFunctionBodies {
        identifiers: usize,
    }

    impl Visitor for SkipFunctionBodies {
        fn visit_function(&mut self, node: &Function) {
            // Walk the header only; the body stays unvisited.
            for param in &node.params {
                self.visit_pattern(param);
            }
        }

        fn visit_identifier(&mut self, _node: &Identifier) {
            self.identifiers += 1;
        }
    }

    let program = script(vec![sample_function()]);
    let mut visitor = SkipFunctionBodies { identifiers: 0 };
    visit(&program, &mut visitor);
    assert_eq!(visitor.identifiers, 2, "only the parameters are visited");
}

#[test]
fn full_walk_still_available_from_override() {
    struct CountFunctions {
        functions: usize,
        identifiers: usize,
    }

    impl Visitor for CountFunctions {
        fn visit_function(&mut self, node: &Function) {
            self.functions += 1;
            walk_function(self, node);
        }

        fn visit_identifier(&mut self, _node: &Identifier) {
            self.identifiers += 1;
        }
    }

    let program = script(vec![sample_function()]);
    let mut visitor = CountFunctions {
        functions: 0,
        identifiers: 0,
    };
    visit(&program, &mut visitor);
    assert_eq!(visitor.functions, 1);
    assert_eq!(visitor.identifiers, 5);
}

#[test]
fn event_visitor_fires_balanced_enter_leave_pairs() {
    let program = script(vec![Statement::expr(Expression::binary(
        Expression::ident("a"),
        escode_ast::ops::BinaryOperator::Multiplication,
        Expression::ident("b"),
    ))]);

    let mut events: Vec<(Phase, NodeKind)> = Vec::new();
    let mut visitor = EventVisitor::new(|phase, kind| events.push((phase, kind)));
    visit(&program, &mut visitor);

    assert_eq!(
        events,
        vec![
            (Phase::Enter, NodeKind::Program),
            (Phase::Enter, NodeKind::ExpressionStatement),
            (Phase::Enter, NodeKind::BinaryExpression),
            (Phase::Enter, NodeKind::Identifier),
            (Phase::Leave, NodeKind::Identifier),
            (Phase::Enter, NodeKind::Identifier),
            (Phase::Leave, NodeKind::Identifier),
            (Phase::Leave, NodeKind::BinaryExpression),
            (Phase::Leave, NodeKind::ExpressionStatement),
            (Phase::Leave, NodeKind::Program),
        ]
    );
}
