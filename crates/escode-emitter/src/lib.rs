//! JavaScript and JSX code generation for the escode toolkit.
//!
//! Turns an [`escode_ast`] tree back into syntactically valid, correctly
//! parenthesized source text. The pieces compose bottom-up:
//!
//! - [`precedence`] - operator rank/associativity table
//! - [`flags`] - context bitsets threaded through the recursion
//! - [`writer`] - formatting strategies behind the `TextWriter` trait
//! - [`printer`] - the recursive-descent unparser and the [`render`] /
//!   [`render_with`] entry points
//!
//! ```
//! use escode_ast::ast::{Expression, Program, SourceType, Statement};
//! use escode_ast::ops::BinaryOperator;
//!
//! let program = Program {
//!     source_type: SourceType::Script,
//!     body: vec![Statement::expr(Expression::binary(
//!         Expression::ident("a"),
//!         BinaryOperator::Addition,
//!         Expression::ident("b"),
//!     ))],
//! };
//! assert_eq!(escode_emitter::render(&program).unwrap(), "a+b");
//! ```

pub mod error;
pub mod flags;
pub mod precedence;
pub mod printer;
pub mod writer;

pub use error::EmitError;
pub use flags::{ExprContext, StmtContext, TokenFlags};
pub use precedence::{Associativity, Precedence};
pub use printer::{EmitOptions, Format, Printer, render, render_expression, render_with};
pub use writer::{CompactWriter, KnROptions, KnRWriter, PunctPosition, TextWriter};
