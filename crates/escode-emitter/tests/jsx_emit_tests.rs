//! JSX rendering.

use std::rc::Rc;

use escode_ast::ast::*;
use escode_emitter::{EmitOptions, render, render_expression};

fn emit(expression: &Expression) -> String {
    render_expression(expression, &EmitOptions::default()).expect("emit")
}

fn jsx_name(name: &str) -> JsxElementName {
    JsxElementName::Identifier(Rc::new(JsxIdentifier { name: name.into() }))
}

fn element(
    name: &str,
    attributes: Vec<JsxAttributeItem>,
    children: Vec<JsxChild>,
) -> Rc<JsxElement> {
    Rc::new(JsxElement {
        opening: Rc::new(JsxOpeningElement {
            name: jsx_name(name),
            attributes,
            self_closing: false,
        }),
        children,
        closing: Some(Rc::new(JsxClosingElement {
            name: jsx_name(name),
        })),
    })
}

fn self_closing(name: &str, attributes: Vec<JsxAttributeItem>) -> Rc<JsxElement> {
    Rc::new(JsxElement {
        opening: Rc::new(JsxOpeningElement {
            name: jsx_name(name),
            attributes,
            self_closing: true,
        }),
        children: vec![],
        closing: None,
    })
}

fn text(value: &str) -> JsxChild {
    JsxChild::Text(Rc::new(JsxText {
        value: value.into(),
    }))
}

fn string_attribute(name: &str, value: &str) -> JsxAttributeItem {
    JsxAttributeItem::Attribute(Rc::new(JsxAttribute {
        name: JsxAttributeName::Identifier(Rc::new(JsxIdentifier { name: name.into() })),
        value: Some(JsxAttributeValue::String(Rc::new(Literal {
            value: LiteralValue::String(value.into()),
            raw: None,
        }))),
    }))
}

#[test]
fn element_with_text_child() {
    let expr = Expression::JsxElement(element("div", vec![], vec![text("hi")]));
    assert_eq!(emit(&expr), "<div>hi</div>");
}

#[test]
fn attributes_are_space_separated() {
    let bare = JsxAttributeItem::Attribute(Rc::new(JsxAttribute {
        name: JsxAttributeName::Identifier(Rc::new(JsxIdentifier {
            name: "active".into(),
        })),
        value: None,
    }));
    let expr = Expression::JsxElement(element(
        "a",
        vec![string_attribute("href", "x"), bare],
        vec![text("link")],
    ));
    assert_eq!(emit(&expr), "<a href=\"x\" active>link</a>");
}

#[test]
fn self_closing_elements() {
    let expr = Expression::JsxElement(self_closing("br", vec![]));
    assert_eq!(emit(&expr), "<br />");
}

#[test]
fn expression_containers() {
    let expr = Expression::JsxElement(element(
        "div",
        vec![],
        vec![JsxChild::Container(Rc::new(JsxExpressionContainer {
            expression: Some(Expression::ident("x")),
        }))],
    ));
    assert_eq!(emit(&expr), "<div>{x}</div>");

    let empty = Expression::JsxElement(element(
        "div",
        vec![],
        vec![JsxChild::Container(Rc::new(JsxExpressionContainer {
            expression: None,
        }))],
    ));
    assert_eq!(emit(&empty), "<div>{}</div>");
}

#[test]
fn container_attribute_values() {
    let attribute = JsxAttributeItem::Attribute(Rc::new(JsxAttribute {
        name: JsxAttributeName::Identifier(Rc::new(JsxIdentifier { name: "b".into() })),
        value: Some(JsxAttributeValue::Container(Rc::new(
            JsxExpressionContainer {
                expression: Some(Expression::ident("c")),
            },
        ))),
    }));
    let expr = Expression::JsxElement(self_closing("a", vec![attribute]));
    assert_eq!(emit(&expr), "<a b={c} />");
}

#[test]
fn spread_attributes() {
    let spread = JsxAttributeItem::Spread(Rc::new(JsxSpreadAttribute {
        argument: Expression::ident("props"),
    }));
    let expr = Expression::JsxElement(self_closing("a", vec![spread]));
    assert_eq!(emit(&expr), "<a {...props} />");
}

#[test]
fn fragments() {
    let expr = Expression::JsxFragment(Rc::new(JsxFragment {
        children: vec![
            JsxChild::Element(self_closing("a", vec![])),
            JsxChild::Element(self_closing("b", vec![])),
        ],
    }));
    assert_eq!(emit(&expr), "<><a /><b /></>");
}

#[test]
fn member_and_namespaced_names() {
    let name = JsxElementName::Member(Rc::new(JsxMemberExpression {
        object: jsx_name("Mod"),
        property: Rc::new(JsxIdentifier {
            name: "Comp".into(),
        }),
    }));
    let attribute = JsxAttributeItem::Attribute(Rc::new(JsxAttribute {
        name: JsxAttributeName::Namespaced(Rc::new(JsxNamespacedName {
            namespace: Rc::new(JsxIdentifier { name: "ns".into() }),
            name: Rc::new(JsxIdentifier { name: "attr".into() }),
        })),
        value: Some(JsxAttributeValue::String(Rc::new(Literal {
            value: LiteralValue::String("v".into()),
            raw: None,
        }))),
    }));
    let expr = Expression::JsxElement(Rc::new(JsxElement {
        opening: Rc::new(JsxOpeningElement {
            name: name.clone(),
            attributes: vec![attribute],
            self_closing: true,
        }),
        children: vec![],
        closing: None,
    }));
    assert_eq!(emit(&expr), "<Mod.Comp ns:attr=\"v\" />");
}

#[test]
fn nested_elements_and_object_children() {
    let inner = element("b", vec![], vec![text("x")]);
    let with_object = element(
        "a",
        vec![],
        vec![
            JsxChild::Element(inner),
            JsxChild::Container(Rc::new(JsxExpressionContainer {
                expression: Some(Expression::object(vec![("k", Expression::number(1.0))])),
            })),
        ],
    );
    assert_eq!(
        emit(&Expression::JsxElement(with_object)),
        "<a><b>x</b>{{k:1}}</a>"
    );
}

#[test]
fn jsx_as_a_statement_expression_needs_no_brackets() {
    let program = Program {
        source_type: SourceType::Module,
        body: vec![Statement::expr(Expression::JsxElement(element(
            "div",
            vec![],
            vec![text("hi")],
        )))],
    };
    assert_eq!(render(&program).expect("render"), "<div>hi</div>");
}

#[test]
fn attribute_strings_pick_a_workable_quote() {
    let attribute = string_attribute("title", "say \"hi\"");
    let expr = Expression::JsxElement(self_closing("a", vec![attribute]));
    assert_eq!(emit(&expr), "<a title='say \"hi\"' />");
}
