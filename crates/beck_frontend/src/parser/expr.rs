use super::{ParseError, ParseErrorKind, ParseResult, Parser};
use crate::ast::*;
use crate::token::TokenKind;

impl Parser<'_> {
    /// Dispatch on the front token, and for identifiers on the token after
    /// it: `f(` starts a call, `x +` starts an addition chain, anything else
    /// is a plain variable reference. A call can therefore never be a chain
    /// operand, and a chain can never feed a further addition.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        match self.tokens.peek() {
            Some(t) if t.kind == TokenKind::Integer => self.parse_integer(),

            Some(t) if t.kind == TokenKind::Identifier => match self.tokens.peek_second() {
                Some(t2) if t2.kind == TokenKind::OParen => self.parse_call(),
                Some(t2) if t2.kind == TokenKind::Addition => self.parse_operation(),
                _ => self.parse_var_ref(),
            },

            _ => self.parse_var_ref(),
        }
    }

    fn parse_integer(&mut self) -> ParseResult<Expr> {
        let token = self.expect(TokenKind::Integer)?;

        // The text is all digits, so the only way this fails is overflow.
        let value = token
            .text(self.source)
            .parse::<i64>()
            .map_err(|_| ParseError {
                kind: ParseErrorKind::IntegerOutOfRange,
                span: token.span,
            })?;

        Ok(Expr::new(ExprKind::Integer(value), token.span))
    }

    /// Parse `identifier { '+' identifier }` into a left-associative tree:
    /// `x+y+z` becomes `(x+y)+z`.
    fn parse_operation(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_var_ref()?;

        while self.tokens.eat(TokenKind::Addition) {
            let rhs = self.parse_var_ref()?;
            let span = expr.span.union(rhs.span);
            expr = Expr::new(
                ExprKind::BinOp {
                    op: BinOp::Add,
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(expr)
    }

    fn parse_call(&mut self) -> ParseResult<Expr> {
        let callee = self.parse_ident()?;
        let args = self.parse_arg_exprs()?;

        let span = callee.span.union(self.tokens.prev_span());
        Ok(Expr::new(ExprKind::Call { callee, args }, span))
    }

    fn parse_arg_exprs(&mut self) -> ParseResult<Vec<Expr>> {
        self.expect(TokenKind::OParen)?;

        let mut args = vec![];
        if self
            .tokens
            .peek()
            .is_some_and(|t| t.kind != TokenKind::CParen)
        {
            args.push(self.parse_expr()?);
            while self.tokens.eat(TokenKind::Comma) {
                args.push(self.parse_expr()?);
            }
        }

        self.expect(TokenKind::CParen)?;
        Ok(args)
    }

    fn parse_var_ref(&mut self) -> ParseResult<Expr> {
        let ident = self.parse_ident()?;
        let span = ident.span;
        Ok(Expr::new(ExprKind::Var(ident), span))
    }
}
