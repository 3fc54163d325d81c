//! Lexing rules for the calculator.

use crate::token::{CalcToken, CalcTokenKind};
use lexer_framework::{DefaultContext, LexContext, Lexer, LexingRule};

pub type CalcLexer = Lexer<DefaultContext, CalcToken>;
pub type CalcLexerRules = Vec<Box<dyn LexingRule<DefaultContext, CalcToken>>>;

pub fn rules() -> CalcLexerRules {
    vec![
        Box::new(WhitespaceRule),
        Box::new(NumberRule),
        Box::new(IdentRule),
        Box::new(OperatorRule),
    ]
}

pub fn lexer(input: &str) -> CalcLexer {
    Lexer::from_str(input, rules())
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

struct WhitespaceRule;

impl<Ctx> LexingRule<Ctx, CalcToken> for WhitespaceRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<CalcToken> {
        let position = ctx.position();
        let text = ctx.consume_while(is_blank);
        if text.is_empty() {
            return None;
        }
        Some(CalcToken::new(CalcTokenKind::Whitespace, text, position))
    }

    fn priority(&self) -> i32 {
        30
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char.is_some_and(is_blank))
    }
}

/// `digit+ ('.' digit+)?`. A trailing `.` with no digits after it makes the
/// whole literal an `Error` token.
struct NumberRule;

impl<Ctx> LexingRule<Ctx, CalcToken> for NumberRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<CalcToken> {
        let start = ctx.checkpoint();
        if ctx.consume_while(|c| c.is_ascii_digit()).is_empty() {
            return None;
        }

        let mut kind = CalcTokenKind::Number;
        if ctx.peek() == Some('.') {
            ctx.advance();
            if ctx.consume_while(|c| c.is_ascii_digit()).is_empty() {
                kind = CalcTokenKind::Error;
            }
        }

        let text = ctx.text_since(start);
        if kind == CalcTokenKind::Error {
            log::warn!("malformed number {:?} at {}", text.as_str(), start.position());
        }
        Some(CalcToken::new(kind, text, start.position()))
    }

    fn priority(&self) -> i32 {
        20
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char.is_some_and(|c| c.is_ascii_digit()))
    }
}

/// `alpha alnum*`, ASCII only.
struct IdentRule;

impl<Ctx> LexingRule<Ctx, CalcToken> for IdentRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<CalcToken> {
        let start = ctx.checkpoint();
        if !ctx.peek()?.is_ascii_alphabetic() {
            return None;
        }
        ctx.consume_while(|c| c.is_ascii_alphanumeric());
        Some(CalcToken::new(
            CalcTokenKind::Id,
            ctx.text_since(start),
            start.position(),
        ))
    }

    fn priority(&self) -> i32 {
        10
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char.is_some_and(|c| c.is_ascii_alphabetic()))
    }
}

struct OperatorRule;

impl<Ctx> LexingRule<Ctx, CalcToken> for OperatorRule
where
    Ctx: LexContext,
{
    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        match first_char? {
            '+' | '-' | '*' | '/' | '=' | '(' | ')' | ';' => Some(true),
            _ => Some(false),
        }
    }

    fn try_match(&mut self, ctx: &mut Ctx) -> Option<CalcToken> {
        let start = ctx.checkpoint();
        let kind = match ctx.advance()? {
            '+' => CalcTokenKind::Plus,
            '-' => CalcTokenKind::Minus,
            '*' => CalcTokenKind::Multiply,
            '/' => CalcTokenKind::Divide,
            '=' => CalcTokenKind::Equals,
            '(' => CalcTokenKind::OpenParen,
            ')' => CalcTokenKind::CloseParen,
            ';' => CalcTokenKind::Semicolon,
            _ => return None,
        };
        Some(CalcToken::new(kind, ctx.text_since(start), start.position()))
    }

    fn priority(&self) -> i32 {
        10
    }
}
