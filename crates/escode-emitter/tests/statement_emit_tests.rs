//! Statement and declaration rendering with the compact strategy,
//! including semicolon placement and omission.

use std::rc::Rc;

use escode_ast::ast::*;
use escode_ast::ops::*;
use escode_emitter::render;

fn script(body: Vec<Statement>) -> Program {
    Program {
        source_type: SourceType::Script,
        body,
    }
}

fn compact(body: Vec<Statement>) -> String {
    render(&script(body)).expect("render")
}

fn expr_stmt(name: &str) -> Statement {
    Statement::expr(Expression::ident(name))
}

#[test]
fn semicolons_separate_but_do_not_terminate() {
    assert_eq!(compact(vec![expr_stmt("a"), expr_stmt("b")]), "a;b");
}

#[test]
fn block_interior_is_a_rightmost_position() {
    assert_eq!(
        compact(vec![Statement::block(vec![expr_stmt("a"), expr_stmt("b")])]),
        "{a;b}"
    );
}

#[test]
fn empty_statement_keeps_its_semicolon() {
    assert_eq!(
        compact(vec![Statement::Empty(Rc::new(EmptyStatement)), expr_stmt("x")]),
        ";x"
    );
    assert_eq!(compact(vec![Statement::Empty(Rc::new(EmptyStatement))]), ";");
}

#[test]
fn if_else() {
    let stmt = Statement::If(Rc::new(IfStatement {
        test: Expression::ident("a"),
        consequent: expr_stmt("x"),
        alternate: Some(expr_stmt("y")),
    }));
    assert_eq!(compact(vec![stmt]), "if(a)x;else y");
}

#[test]
fn else_if_chains() {
    let stmt = Statement::If(Rc::new(IfStatement {
        test: Expression::ident("a"),
        consequent: expr_stmt("x"),
        alternate: Some(Statement::If(Rc::new(IfStatement {
            test: Expression::ident("b"),
            consequent: expr_stmt("y"),
            alternate: None,
        }))),
    }));
    assert_eq!(compact(vec![stmt]), "if(a)x;else if(b)y");
}

#[test]
fn empty_statement_as_if_body_survives() {
    let stmt = Statement::If(Rc::new(IfStatement {
        test: Expression::ident("a"),
        consequent: Statement::Empty(Rc::new(EmptyStatement)),
        alternate: None,
    }));
    assert_eq!(compact(vec![stmt]), "if(a);");
}

#[test]
fn while_and_do_while() {
    let while_stmt = Statement::While(Rc::new(WhileStatement {
        test: Expression::ident("a"),
        body: Statement::block(vec![expr_stmt("b")]),
    }));
    assert_eq!(compact(vec![while_stmt]), "while(a){b}");

    let do_stmt = Statement::DoWhile(Rc::new(DoWhileStatement {
        body: expr_stmt("x"),
        test: Expression::ident("a"),
    }));
    // The body semicolon separates it from `while`; the statement's own
    // terminator is rightmost and dropped.
    assert_eq!(compact(vec![do_stmt]), "do x;while(a)");
}

#[test]
fn classic_for_loop() {
    let stmt = Statement::For(Rc::new(ForStatement {
        init: Some(ForInit::Variable(Rc::new(VariableDeclaration {
            kind: VariableKind::Var,
            declarations: vec![Rc::new(VariableDeclarator {
                id: Pattern::ident("i"),
                init: Some(Expression::number(0.0)),
            })],
        }))),
        test: Some(Expression::binary(
            Expression::ident("i"),
            BinaryOperator::LessThan,
            Expression::number(10.0),
        )),
        update: Some(Expression::Update(Rc::new(UpdateExpression {
            operator: UpdateOperator::Increment,
            argument: Expression::ident("i"),
            prefix: false,
        }))),
        body: Statement::expr(Expression::call(
            Expression::ident("f"),
            vec![Expression::ident("i")],
        )),
    }));
    assert_eq!(compact(vec![stmt]), "for(var i=0;i<10;i++)f(i)");
}

#[test]
fn for_of_and_for_await() {
    let left = ForTarget::Variable(Rc::new(VariableDeclaration {
        kind: VariableKind::Const,
        declarations: vec![Rc::new(VariableDeclarator {
            id: Pattern::ident("x"),
            init: None,
        })],
    }));
    let body = Statement::expr(Expression::call(
        Expression::ident("f"),
        vec![Expression::ident("x")],
    ));

    let for_of = Statement::ForOf(Rc::new(ForOfStatement {
        left: left.clone(),
        right: Expression::ident("xs"),
        body: body.clone(),
        is_await: false,
    }));
    assert_eq!(compact(vec![for_of]), "for(const x of xs)f(x)");

    let for_await = Statement::ForOf(Rc::new(ForOfStatement {
        left,
        right: Expression::ident("xs"),
        body,
        is_await: true,
    }));
    assert_eq!(compact(vec![for_await]), "for await(const x of xs)f(x)");
}

#[test]
fn for_in_loop() {
    let stmt = Statement::ForIn(Rc::new(ForInStatement {
        left: ForTarget::Pattern(Pattern::ident("k")),
        right: Expression::ident("o"),
        body: expr_stmt("x"),
    }));
    assert_eq!(compact(vec![stmt]), "for(k in o)x");
}

#[test]
fn switch_cases_keep_interior_semicolons() {
    let stmt = Statement::Switch(Rc::new(SwitchStatement {
        discriminant: Expression::ident("x"),
        cases: vec![
            Rc::new(SwitchCase {
                test: Some(Expression::number(1.0)),
                consequent: vec![expr_stmt("a")],
            }),
            Rc::new(SwitchCase {
                test: None,
                consequent: vec![expr_stmt("b")],
            }),
        ],
    }));
    assert_eq!(compact(vec![stmt]), "switch(x){case 1:a;default:b}");
}

#[test]
fn try_catch_finally() {
    let call = |name: &str| Statement::expr(Expression::call(Expression::ident(name), vec![]));
    let stmt = Statement::Try(Rc::new(TryStatement {
        block: Rc::new(BlockStatement {
            body: vec![call("f")],
        }),
        handler: Some(Rc::new(CatchClause {
            param: Some(Pattern::ident("e")),
            body: Rc::new(BlockStatement {
                body: vec![call("g")],
            }),
        })),
        finalizer: Some(Rc::new(BlockStatement {
            body: vec![call("h")],
        })),
    }));
    assert_eq!(compact(vec![stmt]), "try{f()}catch(e){g()}finally{h()}");
}

#[test]
fn catch_binding_is_optional() {
    let stmt = Statement::Try(Rc::new(TryStatement {
        block: Rc::new(BlockStatement { body: vec![] }),
        handler: Some(Rc::new(CatchClause {
            param: None,
            body: Rc::new(BlockStatement { body: vec![] }),
        })),
        finalizer: None,
    }));
    assert_eq!(compact(vec![stmt]), "try{}catch{}");
}

#[test]
fn labels_and_break() {
    let label = Rc::new(Identifier {
        name: "loop1".into(),
    });
    let stmt = Statement::Labeled(Rc::new(LabeledStatement {
        label: Rc::clone(&label),
        body: Statement::While(Rc::new(WhileStatement {
            test: Expression::boolean(true),
            body: Statement::block(vec![Statement::Break(Rc::new(BreakStatement {
                label: Some(label),
            }))]),
        })),
    }));
    assert_eq!(compact(vec![stmt]), "loop1:while(true){break loop1}");
}

#[test]
fn throw_and_return() {
    let throw_stmt = Statement::Throw(Rc::new(ThrowStatement {
        argument: Expression::New(Rc::new(NewExpression {
            callee: Expression::ident("Error"),
            arguments: vec![Argument::Expression(Expression::string("x"))],
            explicit_arguments: true,
        })),
    }));
    assert_eq!(compact(vec![throw_stmt]), "throw new Error(\"x\")");

    let function = Statement::FunctionDeclaration(Rc::new(Function {
        id: Some(Rc::new(Identifier { name: "f".into() })),
        params: vec![],
        body: Rc::new(BlockStatement {
            body: vec![Statement::ret(Some(Expression::ident("x")))],
        }),
        is_async: false,
        is_generator: false,
    }));
    assert_eq!(compact(vec![function]), "function f(){return x}");
}

#[test]
fn variable_declarations() {
    let multi = Statement::Variable(Rc::new(VariableDeclaration {
        kind: VariableKind::Var,
        declarations: vec![
            Rc::new(VariableDeclarator {
                id: Pattern::ident("a"),
                init: Some(Expression::number(1.0)),
            }),
            Rc::new(VariableDeclarator {
                id: Pattern::ident("b"),
                init: None,
            }),
        ],
    }));
    assert_eq!(compact(vec![multi, expr_stmt("x")]), "var a=1,b;x");

    assert_eq!(
        compact(vec![Statement::var(
            VariableKind::Const,
            "c",
            Some(Expression::number(2.0)),
        )]),
        "const c=2"
    );
}

#[test]
fn destructuring_declarations() {
    let stmt = Statement::Variable(Rc::new(VariableDeclaration {
        kind: VariableKind::Let,
        declarations: vec![Rc::new(VariableDeclarator {
            id: Pattern::Object(Rc::new(ObjectPattern {
                properties: vec![
                    ObjectPatternProperty::Property(Rc::new(PatternProperty {
                        key: PropertyKey::Identifier(Rc::new(Identifier { name: "a".into() })),
                        value: Pattern::ident("a"),
                        shorthand: true,
                    })),
                    ObjectPatternProperty::Rest(Rc::new(RestElement {
                        argument: Pattern::ident("rest"),
                    })),
                ],
            })),
            init: Some(Expression::ident("o")),
        })],
    }));
    assert_eq!(compact(vec![stmt]), "let{a,...rest}=o");
}

#[test]
fn function_parameter_shapes() {
    let function = Statement::FunctionDeclaration(Rc::new(Function {
        id: Some(Rc::new(Identifier { name: "f".into() })),
        params: vec![
            Pattern::ident("a"),
            Pattern::Assignment(Rc::new(AssignmentPattern {
                left: Pattern::ident("b"),
                right: Expression::number(1.0),
            })),
            Pattern::Rest(Rc::new(RestElement {
                argument: Pattern::ident("rest"),
            })),
        ],
        body: Rc::new(BlockStatement { body: vec![] }),
        is_async: false,
        is_generator: false,
    }));
    assert_eq!(compact(vec![function]), "function f(a,b=1,...rest){}");
}

#[test]
fn generator_and_async_functions() {
    let generator = Statement::FunctionDeclaration(Rc::new(Function {
        id: Some(Rc::new(Identifier { name: "g".into() })),
        params: vec![],
        body: Rc::new(BlockStatement {
            body: vec![Statement::expr(Expression::Yield(Rc::new(
                YieldExpression {
                    argument: Some(Expression::number(1.0)),
                    delegate: false,
                },
            )))],
        }),
        is_async: false,
        is_generator: true,
    }));
    assert_eq!(compact(vec![generator]), "function*g(){yield 1}");

    let async_function = Statement::FunctionDeclaration(Rc::new(Function {
        id: Some(Rc::new(Identifier { name: "f".into() })),
        params: vec![],
        body: Rc::new(BlockStatement {
            body: vec![Statement::expr(Expression::Await(Rc::new(
                AwaitExpression {
                    argument: Expression::call(Expression::ident("g"), vec![]),
                },
            )))],
        }),
        is_async: true,
        is_generator: false,
    }));
    assert_eq!(compact(vec![async_function]), "async function f(){await g()}");
}

#[test]
fn class_declarations() {
    let method = |name: &str, kind: MethodKind, is_static: bool| {
        ClassMember::Method(Rc::new(MethodDefinition {
            key: PropertyKey::Identifier(Rc::new(Identifier { name: name.into() })),
            value: Rc::new(Function {
                id: None,
                params: vec![],
                body: Rc::new(BlockStatement { body: vec![] }),
                is_async: false,
                is_generator: false,
            }),
            kind,
            is_static,
        }))
    };
    let stmt = Statement::ClassDeclaration(Rc::new(Class {
        id: Some(Rc::new(Identifier { name: "A".into() })),
        super_class: Some(Expression::ident("B")),
        body: vec![
            method("constructor", MethodKind::Constructor, false),
            method("m", MethodKind::Method, false),
            method("s", MethodKind::Method, true),
            method("g", MethodKind::Get, false),
            ClassMember::Property(Rc::new(PropertyDefinition {
                key: PropertyKey::Identifier(Rc::new(Identifier { name: "p".into() })),
                value: Some(Expression::number(1.0)),
                is_static: false,
            })),
        ],
    }));
    assert_eq!(
        compact(vec![stmt]),
        "class A extends B{constructor(){}m(){}static s(){}get g(){}p=1}"
    );
}

#[test]
fn class_fields_keep_interior_semicolons() {
    let field = |name: &str, value: f64| {
        ClassMember::Property(Rc::new(PropertyDefinition {
            key: PropertyKey::Identifier(Rc::new(Identifier { name: name.into() })),
            value: Some(Expression::number(value)),
            is_static: false,
        }))
    };
    let stmt = Statement::ClassDeclaration(Rc::new(Class {
        id: Some(Rc::new(Identifier { name: "A".into() })),
        super_class: None,
        body: vec![field("x", 1.0), field("y", 2.0)],
    }));
    assert_eq!(compact(vec![stmt]), "class A{x=1;y=2}");
}

#[test]
fn import_declarations() {
    let source = Rc::new(Literal {
        value: LiteralValue::String("m".into()),
        raw: None,
    });

    let bare = Statement::ImportDeclaration(Rc::new(ImportDeclaration {
        specifiers: vec![],
        source: Rc::clone(&source),
    }));
    assert_eq!(compact(vec![bare]), "import\"m\"");

    let mixed = Statement::ImportDeclaration(Rc::new(ImportDeclaration {
        specifiers: vec![
            ImportSpecifier::Default(Rc::new(ImportDefaultSpecifier {
                local: Rc::new(Identifier { name: "d".into() }),
            })),
            ImportSpecifier::Named(Rc::new(ImportNamedSpecifier {
                imported: ModuleExportName::Identifier(Rc::new(Identifier { name: "a".into() })),
                local: Rc::new(Identifier { name: "b".into() }),
            })),
            ImportSpecifier::Named(Rc::new(ImportNamedSpecifier {
                imported: ModuleExportName::Identifier(Rc::new(Identifier { name: "c".into() })),
                local: Rc::new(Identifier { name: "c".into() }),
            })),
        ],
        source: Rc::clone(&source),
    }));
    assert_eq!(compact(vec![mixed]), "import d,{a as b,c}from\"m\"");

    let namespace = Statement::ImportDeclaration(Rc::new(ImportDeclaration {
        specifiers: vec![ImportSpecifier::Namespace(Rc::new(
            ImportNamespaceSpecifier {
                local: Rc::new(Identifier { name: "ns".into() }),
            },
        ))],
        source,
    }));
    assert_eq!(compact(vec![namespace]), "import*as ns from\"m\"");
}

#[test]
fn export_declarations() {
    let source = Rc::new(Literal {
        value: LiteralValue::String("m".into()),
        raw: None,
    });

    let named = Statement::ExportNamed(Rc::new(ExportNamedDeclaration {
        declaration: None,
        specifiers: vec![Rc::new(ExportSpecifier {
            local: ModuleExportName::Identifier(Rc::new(Identifier { name: "a".into() })),
            exported: ModuleExportName::Identifier(Rc::new(Identifier { name: "a".into() })),
        })],
        source: None,
    }));
    assert_eq!(compact(vec![named]), "export{a}");

    let reexport = Statement::ExportNamed(Rc::new(ExportNamedDeclaration {
        declaration: None,
        specifiers: vec![Rc::new(ExportSpecifier {
            local: ModuleExportName::Identifier(Rc::new(Identifier { name: "a".into() })),
            exported: ModuleExportName::Identifier(Rc::new(Identifier { name: "b".into() })),
        })],
        source: Some(Rc::clone(&source)),
    }));
    assert_eq!(compact(vec![reexport]), "export{a as b}from\"m\"");

    let declaration = Statement::ExportNamed(Rc::new(ExportNamedDeclaration {
        declaration: Some(Statement::var(
            VariableKind::Var,
            "x",
            Some(Expression::number(1.0)),
        )),
        specifiers: vec![],
        source: None,
    }));
    assert_eq!(compact(vec![declaration]), "export var x=1");

    let default_expr = Statement::ExportDefault(Rc::new(ExportDefaultDeclaration {
        declaration: ExportDefault::Expression(Expression::number(42.0)),
    }));
    assert_eq!(compact(vec![default_expr]), "export default 42");

    let all = Statement::ExportAll(Rc::new(ExportAllDeclaration {
        exported: Some(ModuleExportName::Identifier(Rc::new(Identifier {
            name: "ns".into(),
        }))),
        source,
    }));
    assert_eq!(compact(vec![all]), "export*as ns from\"m\"");
}

#[test]
fn export_default_function_expression_keeps_expression_form() {
    let stmt = Statement::ExportDefault(Rc::new(ExportDefaultDeclaration {
        declaration: ExportDefault::Expression(Expression::Function(Rc::new(Function {
            id: None,
            params: vec![],
            body: Rc::new(BlockStatement { body: vec![] }),
            is_async: false,
            is_generator: false,
        }))),
    }));
    assert_eq!(compact(vec![stmt]), "export default(function(){})");
}

#[test]
fn with_statement() {
    let stmt = Statement::With(Rc::new(WithStatement {
        object: Expression::ident("o"),
        body: expr_stmt("x"),
    }));
    assert_eq!(compact(vec![stmt]), "with(o)x");
}

#[test]
fn debugger_statement() {
    assert_eq!(
        compact(vec![
            Statement::Debugger(Rc::new(DebuggerStatement)),
            expr_stmt("x"),
        ]),
        "debugger;x"
    );
}
