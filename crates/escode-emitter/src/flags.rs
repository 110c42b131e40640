//! Context bitsets threaded through the printer.
//!
//! All three sets are plain value types passed by value into each recursive
//! call; there is no shared mutable flag state. `ExprContext` and
//! `StmtContext` flow top-down from parents, `TokenFlags` flows outward to
//! the formatting writer as spacing hints.

use bitflags::bitflags;

bitflags! {
    /// Where an expression sits inside the surrounding expression/statement.
    ///
    /// The ambiguity bits only have an effect while `LEFTMOST` is still set:
    /// they describe hazards caused by the *first token* of the rendered
    /// expression, and stop mattering once some token of an enclosing
    /// construct has been emitted to the left. `IN_FOR_INIT` is the
    /// exception; the `in` restriction of a `for` head applies to every
    /// operand position until a bracketed construct is entered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ExprContext: u8 {
        /// No token of the enclosing expression statement has been written
        /// yet; this expression produces the leftmost token.
        const LEFTMOST = 1 << 0;
        /// Inside an expression statement.
        const IN_STMT_EXPR = 1 << 1;
        /// Inside the expression body of an arrow function.
        const IN_ARROW_BODY = 1 << 2;
        /// Inside the callee of a `new` expression.
        const IN_NEW_CALLEE = 1 << 3;
        /// Inside the head initializer of a `for` statement, where a bare
        /// `in` operator would be misparsed as a `for..in`.
        const IN_FOR_INIT = 1 << 4;
        /// Union of the context bits that can force parentheses.
        const AMBIGUOUS = Self::IN_STMT_EXPR.bits()
            | Self::IN_ARROW_BODY.bits()
            | Self::IN_NEW_CALLEE.bits()
            | Self::IN_FOR_INIT.bits();
    }
}

impl ExprContext {
    /// Context for a child that stays leftmost (e.g. the left operand of a
    /// binary expression): every inherited bit survives.
    pub fn leftmost_child(self) -> ExprContext {
        self
    }

    /// Context for a child that is no longer leftmost. Only the `for`-head
    /// restriction survives; everything else is cleared.
    pub fn operand(self) -> ExprContext {
        self & ExprContext::IN_FOR_INIT
    }

    /// Context inside emitted brackets of any kind (parentheses, call
    /// arguments, computed member access, literals): nothing propagates.
    pub fn isolated() -> ExprContext {
        ExprContext::empty()
    }

    /// True when `bit` applies to the leftmost token being emitted here.
    pub fn is_leftmost_in(self, bit: ExprContext) -> bool {
        self.contains(ExprContext::LEFTMOST | bit)
    }
}

bitflags! {
    /// Where a statement sits inside the surrounding statement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StmtContext: u8 {
        /// The statement kind terminates with a semicolon.
        const NEEDS_SEMICOLON = 1 << 0;
        /// Only meaningful with `NEEDS_SEMICOLON`: the statement is
        /// rightmost, so a compact strategy may drop the terminator.
        const MAY_OMIT_SEMICOLON = 1 << 1;
        /// Rightmost in the enclosing statement list, transitively: a
        /// statement is rightmost only if it is last in its list and its
        /// parent is rightmost.
        const RIGHTMOST = 1 << 2;
        /// The statement is the body of another statement (`if`, `for`,
        /// `while`, ...), not a member of a statement list.
        const STATEMENT_BODY = 1 << 3;
    }
}

bitflags! {
    /// Writer-level hints attached to emitted tokens. The compact strategy
    /// ignores the recommendations; the block strategy honors them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TokenFlags: u8 {
        const LEADING_SPACE_RECOMMENDED = 1 << 0;
        const TRAILING_SPACE_RECOMMENDED = 1 << 1;
        /// The token follows the body of a statement (`else`, the `while`
        /// of `do..while`, `catch`, `finally`); the block strategy decides
        /// between a same-line space and a forced newline.
        const FOLLOWS_STATEMENT_BODY = 1 << 2;
        const SPACE_AROUND_RECOMMENDED = Self::LEADING_SPACE_RECOMMENDED.bits()
            | Self::TRAILING_SPACE_RECOMMENDED.bits();
    }
}
