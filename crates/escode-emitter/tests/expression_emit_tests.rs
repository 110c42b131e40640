//! Expression rendering with the compact strategy.

use std::rc::Rc;

use escode_ast::ast::*;
use escode_ast::ops::*;
use escode_emitter::{EmitOptions, render_expression};

fn emit(expression: &Expression) -> String {
    render_expression(expression, &EmitOptions::default()).expect("emit")
}

#[test]
fn literals() {
    assert_eq!(emit(&Expression::number(42.0)), "42");
    assert_eq!(emit(&Expression::number(0.5)), "0.5");
    assert_eq!(emit(&Expression::string("hello")), "\"hello\"");
    assert_eq!(emit(&Expression::boolean(true)), "true");
    assert_eq!(emit(&Expression::boolean(false)), "false");
    assert_eq!(emit(&Expression::null()), "null");
}

#[test]
fn raw_literal_text_wins() {
    let literal = Expression::Literal(Rc::new(Literal {
        value: LiteralValue::Number(255.0),
        raw: Some("0xFF".into()),
    }));
    assert_eq!(emit(&literal), "0xFF");
}

#[test]
fn bigint_and_regex_literals() {
    let bigint = Expression::Literal(Rc::new(Literal {
        value: LiteralValue::BigInt("123".into()),
        raw: None,
    }));
    assert_eq!(emit(&bigint), "123n");

    let regex = Expression::Literal(Rc::new(Literal {
        value: LiteralValue::Regex {
            pattern: "a+".into(),
            flags: "gi".into(),
        },
        raw: None,
    }));
    assert_eq!(emit(&regex), "/a+/gi");

    let empty = Expression::Literal(Rc::new(Literal {
        value: LiteralValue::Regex {
            pattern: String::new(),
            flags: String::new(),
        },
        raw: None,
    }));
    assert_eq!(emit(&empty), "/(?:)/");
}

#[test]
fn single_quote_option() {
    let options = EmitOptions {
        single_quote: true,
        ..EmitOptions::default()
    };
    let out = render_expression(&Expression::string("it's"), &options).expect("emit");
    assert_eq!(out, "'it\\'s'");
}

#[test]
fn member_access() {
    let chained = Expression::member(Expression::member(Expression::ident("a"), "b"), "c");
    assert_eq!(emit(&chained), "a.b.c");

    let computed = Expression::Member(Rc::new(MemberExpression {
        object: Expression::ident("arr"),
        property: MemberProperty::Computed(Expression::number(0.0)),
        optional: false,
    }));
    assert_eq!(emit(&computed), "arr[0]");
}

#[test]
fn integer_object_of_member_is_bracketed() {
    let on_int = Expression::member(Expression::number(1.0), "toString");
    assert_eq!(emit(&on_int), "(1).toString");

    let on_fraction = Expression::member(Expression::number(1.5), "toString");
    assert_eq!(emit(&on_fraction), "1.5.toString");
}

#[test]
fn calls_and_arguments() {
    let call = Expression::call(
        Expression::ident("f"),
        vec![Expression::number(1.0), Expression::string("x")],
    );
    assert_eq!(emit(&call), "f(1,\"x\")");

    let spread = Expression::Call(Rc::new(CallExpression {
        callee: Expression::ident("f"),
        arguments: vec![Argument::Spread(Rc::new(SpreadElement {
            argument: Expression::ident("xs"),
        }))],
        optional: false,
    }));
    assert_eq!(emit(&spread), "f(...xs)");
}

#[test]
fn new_with_and_without_arguments() {
    let with_args = Expression::New(Rc::new(NewExpression {
        callee: Expression::ident("X"),
        arguments: vec![],
        explicit_arguments: true,
    }));
    assert_eq!(emit(&with_args), "new X()");

    let bare = Expression::New(Rc::new(NewExpression {
        callee: Expression::ident("X"),
        arguments: vec![],
        explicit_arguments: false,
    }));
    assert_eq!(emit(&bare), "new X");

    // `new X().y` binds the member to the construction result; without
    // arguments the `new` must be isolated first.
    assert_eq!(emit(&Expression::member(with_args, "y")), "new X().y");
    assert_eq!(emit(&Expression::member(bare, "y")), "(new X).y");
}

#[test]
fn array_literals_preserve_holes() {
    let array = Expression::Array(Rc::new(ArrayExpression {
        elements: vec![
            ArrayElement::Expression(Expression::number(1.0)),
            ArrayElement::Hole,
            ArrayElement::Expression(Expression::number(2.0)),
        ],
    }));
    assert_eq!(emit(&array), "[1,,2]");

    let trailing_hole = Expression::Array(Rc::new(ArrayExpression {
        elements: vec![
            ArrayElement::Expression(Expression::number(1.0)),
            ArrayElement::Hole,
        ],
    }));
    assert_eq!(emit(&trailing_hole), "[1,,]");
}

#[test]
fn object_literals() {
    assert_eq!(
        emit(&Expression::object(vec![("a", Expression::number(1.0))])),
        "{a:1}"
    );

    let shorthand = Expression::Object(Rc::new(ObjectExpression {
        properties: vec![ObjectMember::Property(Rc::new(Property {
            key: PropertyKey::Identifier(Rc::new(Identifier { name: "a".into() })),
            value: Expression::ident("a"),
            kind: PropertyKind::Init,
            shorthand: true,
            method: false,
        }))],
    }));
    assert_eq!(emit(&shorthand), "{a}");

    let computed = Expression::Object(Rc::new(ObjectExpression {
        properties: vec![ObjectMember::Property(Rc::new(Property {
            key: PropertyKey::Computed(Expression::ident("k")),
            value: Expression::number(1.0),
            kind: PropertyKind::Init,
            shorthand: false,
            method: false,
        }))],
    }));
    assert_eq!(emit(&computed), "{[k]:1}");
}

#[test]
fn object_methods_and_accessors() {
    let function = Rc::new(Function {
        id: None,
        params: vec![],
        body: Rc::new(BlockStatement { body: vec![] }),
        is_async: false,
        is_generator: false,
    });
    let object = Expression::Object(Rc::new(ObjectExpression {
        properties: vec![
            ObjectMember::Property(Rc::new(Property {
                key: PropertyKey::Identifier(Rc::new(Identifier { name: "m".into() })),
                value: Expression::Function(Rc::clone(&function)),
                kind: PropertyKind::Init,
                shorthand: false,
                method: true,
            })),
            ObjectMember::Property(Rc::new(Property {
                key: PropertyKey::Identifier(Rc::new(Identifier { name: "g".into() })),
                value: Expression::Function(function),
                kind: PropertyKind::Get,
                shorthand: false,
                method: false,
            })),
        ],
    }));
    assert_eq!(emit(&object), "{m(){},get g(){}}");
}

#[test]
fn template_literals() {
    let template = Expression::Template(Rc::new(TemplateLiteral {
        quasis: vec![
            Rc::new(TemplateElement {
                raw: "a".into(),
                cooked: Some("a".into()),
                tail: false,
            }),
            Rc::new(TemplateElement {
                raw: "c".into(),
                cooked: Some("c".into()),
                tail: true,
            }),
        ],
        expressions: vec![Expression::ident("b")],
    }));
    assert_eq!(emit(&template), "`a${b}c`");

    let tagged = Expression::TaggedTemplate(Rc::new(TaggedTemplateExpression {
        tag: Expression::ident("tag"),
        quasi: Rc::new(TemplateLiteral {
            quasis: vec![Rc::new(TemplateElement {
                raw: "x".into(),
                cooked: Some("x".into()),
                tail: true,
            })],
            expressions: vec![],
        }),
    }));
    assert_eq!(emit(&tagged), "tag`x`");
}

#[test]
fn unary_and_update() {
    assert_eq!(
        emit(&Expression::unary(UnaryOperator::Typeof, Expression::ident("x"))),
        "typeof x"
    );
    assert_eq!(
        emit(&Expression::unary(UnaryOperator::Minus, Expression::ident("x"))),
        "-x"
    );
    assert_eq!(
        emit(&Expression::unary(UnaryOperator::Void, Expression::number(0.0))),
        "void 0"
    );

    let postfix = Expression::Update(Rc::new(UpdateExpression {
        operator: UpdateOperator::Increment,
        argument: Expression::ident("x"),
        prefix: false,
    }));
    assert_eq!(emit(&postfix), "x++");

    let prefix = Expression::Update(Rc::new(UpdateExpression {
        operator: UpdateOperator::Decrement,
        argument: Expression::ident("x"),
        prefix: true,
    }));
    assert_eq!(emit(&prefix), "--x");
}

#[test]
fn adjacent_signs_stay_apart() {
    let sum = Expression::binary(
        Expression::ident("a"),
        BinaryOperator::Addition,
        Expression::unary(UnaryOperator::Plus, Expression::ident("b")),
    );
    assert_eq!(emit(&sum), "a+ +b");

    let diff = Expression::binary(
        Expression::ident("a"),
        BinaryOperator::Subtraction,
        Expression::Update(Rc::new(UpdateExpression {
            operator: UpdateOperator::Decrement,
            argument: Expression::ident("b"),
            prefix: true,
        })),
    );
    assert_eq!(emit(&diff), "a- --b");
}

#[test]
fn logical_operators() {
    let and_or = Expression::logical(
        Expression::logical(
            Expression::ident("a"),
            LogicalOperator::And,
            Expression::ident("b"),
        ),
        LogicalOperator::Or,
        Expression::ident("c"),
    );
    assert_eq!(emit(&and_or), "a&&b||c");
}

#[test]
fn nullish_never_mixes_bare_with_other_logicals() {
    let or_in_nullish = Expression::logical(
        Expression::logical(
            Expression::ident("a"),
            LogicalOperator::Or,
            Expression::ident("b"),
        ),
        LogicalOperator::NullishCoalescing,
        Expression::ident("c"),
    );
    assert_eq!(emit(&or_in_nullish), "(a||b)??c");

    let nullish_in_or = Expression::logical(
        Expression::ident("a"),
        LogicalOperator::Or,
        Expression::logical(
            Expression::ident("b"),
            LogicalOperator::NullishCoalescing,
            Expression::ident("c"),
        ),
    );
    assert_eq!(emit(&nullish_in_or), "a||(b??c)");
}

#[test]
fn conditional_expressions() {
    let nested_alternate = Expression::Conditional(Rc::new(ConditionalExpression {
        test: Expression::ident("a"),
        consequent: Expression::ident("b"),
        alternate: Expression::Conditional(Rc::new(ConditionalExpression {
            test: Expression::ident("c"),
            consequent: Expression::ident("d"),
            alternate: Expression::ident("e"),
        })),
    }));
    assert_eq!(emit(&nested_alternate), "a?b:c?d:e");
}

#[test]
fn arrows() {
    let simple = Expression::Arrow(Rc::new(ArrowFunctionExpression {
        params: vec![Pattern::ident("a")],
        body: ArrowBody::Expression(Expression::binary(
            Expression::ident("a"),
            BinaryOperator::Addition,
            Expression::number(1.0),
        )),
        is_async: false,
    }));
    assert_eq!(emit(&simple), "(a)=>a+1");

    let async_block = Expression::Arrow(Rc::new(ArrowFunctionExpression {
        params: vec![],
        body: ArrowBody::Block(Rc::new(BlockStatement { body: vec![] })),
        is_async: true,
    }));
    assert_eq!(emit(&async_block), "async()=>{}");
}

#[test]
fn await_and_yield() {
    let awaited = Expression::Await(Rc::new(AwaitExpression {
        argument: Expression::call(Expression::ident("f"), vec![]),
    }));
    assert_eq!(emit(&awaited), "await f()");

    let delegated = Expression::Yield(Rc::new(YieldExpression {
        argument: Some(Expression::ident("xs")),
        delegate: true,
    }));
    assert_eq!(emit(&delegated), "yield*xs");

    let bare = Expression::Yield(Rc::new(YieldExpression {
        argument: None,
        delegate: false,
    }));
    assert_eq!(emit(&bare), "yield");
}

#[test]
fn assignments() {
    assert_eq!(
        emit(&Expression::assign(
            Pattern::ident("x"),
            Expression::number(1.0)
        )),
        "x=1"
    );

    let compound = Expression::Assignment(Rc::new(AssignmentExpression {
        operator: AssignmentOperator::AdditionAssign,
        left: Pattern::ident("x"),
        right: Expression::number(2.0),
    }));
    assert_eq!(emit(&compound), "x+=2");

    let member_target = Expression::Assignment(Rc::new(AssignmentExpression {
        operator: AssignmentOperator::Assign,
        left: Pattern::Member(Rc::new(MemberExpression {
            object: Expression::ident("o"),
            property: MemberProperty::Identifier(Rc::new(Identifier { name: "p".into() })),
            optional: false,
        })),
        right: Expression::number(1.0),
    }));
    assert_eq!(emit(&member_target), "o.p=1");
}

#[test]
fn optional_chains() {
    let member = Expression::Chain(Rc::new(ChainExpression {
        expression: Expression::Member(Rc::new(MemberExpression {
            object: Expression::ident("a"),
            property: MemberProperty::Identifier(Rc::new(Identifier { name: "b".into() })),
            optional: true,
        })),
    }));
    assert_eq!(emit(&member), "a?.b");

    let call_in_chain = Expression::Chain(Rc::new(ChainExpression {
        expression: Expression::Call(Rc::new(CallExpression {
            callee: Expression::Member(Rc::new(MemberExpression {
                object: Expression::ident("a"),
                property: MemberProperty::Identifier(Rc::new(Identifier { name: "b".into() })),
                optional: true,
            })),
            arguments: vec![],
            optional: false,
        })),
    }));
    assert_eq!(emit(&call_in_chain), "a?.b()");
}

#[test]
fn sequences() {
    let sequence = Expression::Sequence(Rc::new(SequenceExpression {
        expressions: vec![Expression::ident("a"), Expression::ident("b")],
    }));
    assert_eq!(emit(&sequence), "a,b");

    // A sequence in argument position is not a comma-separated list.
    let call = Expression::call(Expression::ident("f"), vec![sequence]);
    assert_eq!(emit(&call), "f((a,b))");
}

#[test]
fn meta_properties_and_dynamic_import() {
    let meta = Expression::MetaProperty(Rc::new(MetaProperty {
        meta: Rc::new(Identifier { name: "new".into() }),
        property: Rc::new(Identifier {
            name: "target".into(),
        }),
    }));
    assert_eq!(emit(&meta), "new.target");

    let import = Expression::Import(Rc::new(ImportExpression {
        source: Expression::string("mod"),
    }));
    assert_eq!(emit(&import), "import(\"mod\")");
}

#[test]
fn empty_identifier_fails_loudly() {
    let bad = Expression::ident("");
    let err = render_expression(&bad, &EmitOptions::default()).unwrap_err();
    assert!(err.to_string().contains("Identifier"));
}

#[test]
fn non_finite_number_fails_loudly() {
    let bad = Expression::number(f64::NAN);
    assert!(render_expression(&bad, &EmitOptions::default()).is_err());
}
