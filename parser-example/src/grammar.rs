//! The calculator grammar.
//!
//! ```text
//! program    := statement ( ';' statement )* EOF
//! statement  := ( ID '=' )? expression | ε
//! expression := term ( ( '+' | '-' ) term )*
//! term       := operand ( ( '*' | '/' ) operand )*
//! operand    := NUMBER | ID | '(' expression ')'
//! ```
//!
//! Each statement is evaluated as it is parsed. Expression statements emit
//! their value, assignments update the [`CalcEnv`]. Bad input is reported
//! as a diagnostic and the parser skips to the next `;`.
//! Parentheses nest at most [`MAX_NESTING`] deep.

use crate::env::CalcEnv;
use crate::token::{CalcToken, CalcTokenKind as Kind};
use parser_framework::{
    EngineError, Grammar, ParseContext, StateContext, TokenSource, Transition,
};

/// Deepest parenthesis nesting accepted in one expression.
pub const MAX_NESTING: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Statement,
}

#[derive(Debug, Clone, Default)]
pub struct CalcGrammar {
    statements: usize,
}

impl CalcGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements run so far, including ones that failed.
    pub fn statements(&self) -> usize {
        self.statements
    }
}

/// Why a production stopped early.
#[derive(Debug)]
enum Halt {
    /// Bad input. Already reported to the environment.
    Rejected,
    Engine(EngineError),
}

impl From<EngineError> for Halt {
    fn from(err: EngineError) -> Self {
        Halt::Engine(err)
    }
}

type Parsed<T> = Result<T, Halt>;

type Ctx<'a, S> = StateContext<'a, S, f64, CalcEnv>;

impl Grammar for CalcGrammar {
    type Token = CalcToken;
    type State = State;
    type Output = f64;
    type Env = CalcEnv;

    fn step<S>(
        &mut self,
        state: State,
        ctx: &mut StateContext<'_, S, f64, CalcEnv>,
    ) -> Result<Transition<State>, EngineError>
    where
        S: TokenSource<Token = Self::Token>,
    {
        match state {
            State::Statement => {
                skip_errors(ctx);
                if ctx.peek_kind(0) == Kind::Eof {
                    return Ok(Transition::Done);
                }

                self.statements += 1;
                match statement(ctx) {
                    Ok(Some(value)) => {
                        log::debug!("statement {} = {}", self.statements, value);
                        ctx.emit(value)?;
                    }
                    Ok(None) => {}
                    Err(Halt::Rejected) => resync(ctx),
                    Err(Halt::Engine(err)) => return Err(err),
                }

                ctx.compact();
                Ok(Transition::Next(State::Statement))
            }
        }
    }
}

fn statement<S>(ctx: &mut Ctx<'_, S>) -> Parsed<Option<f64>>
where
    S: TokenSource<Token = CalcToken>,
{
    if ctx.peek_kind(0) == Kind::Semicolon {
        ctx.consume();
        return Ok(None);
    }

    let target = if ctx.peek_kind(0) == Kind::Id && ctx.peek_kind(1) == Kind::Equals {
        let id = ctx.consume();
        ctx.skip(1);
        Some(id.text)
    } else {
        None
    };

    let value = expression(ctx, 0)?;
    terminator(ctx)?;

    match target {
        Some(name) => {
            ctx.env().set(name.as_str(), value);
            Ok(None)
        }
        None => Ok(Some(value)),
    }
}

/// The statement must end at `;` or end of stream.
fn terminator<S>(ctx: &mut Ctx<'_, S>) -> Parsed<()>
where
    S: TokenSource<Token = CalcToken>,
{
    skip_errors(ctx);
    match ctx.peek_kind(0) {
        Kind::Semicolon => {
            ctx.consume();
            Ok(())
        }
        Kind::Eof => Ok(()),
        _ => {
            let token = ctx.peek(0).clone();
            reject(ctx, &token, "Expecting operator")
        }
    }
}

fn expression<S>(ctx: &mut Ctx<'_, S>, depth: usize) -> Parsed<f64>
where
    S: TokenSource<Token = CalcToken>,
{
    let mut value = term(ctx, depth)?;
    loop {
        skip_errors(ctx);
        match ctx.peek_kind(0) {
            Kind::Plus => {
                ctx.consume();
                value += term(ctx, depth)?;
            }
            Kind::Minus => {
                ctx.consume();
                value -= term(ctx, depth)?;
            }
            _ => return Ok(value),
        }
    }
}

fn term<S>(ctx: &mut Ctx<'_, S>, depth: usize) -> Parsed<f64>
where
    S: TokenSource<Token = CalcToken>,
{
    let mut value = operand(ctx, depth)?;
    loop {
        skip_errors(ctx);
        match ctx.peek_kind(0) {
            Kind::Multiply => {
                ctx.consume();
                value *= operand(ctx, depth)?;
            }
            Kind::Divide => {
                ctx.consume();
                value /= operand(ctx, depth)?;
            }
            _ => return Ok(value),
        }
    }
}

/// A failed operand leaves the cursor where the operand started.
fn operand<S>(ctx: &mut Ctx<'_, S>, depth: usize) -> Parsed<f64>
where
    S: TokenSource<Token = CalcToken>,
{
    skip_errors(ctx);
    let marker = ctx.mark();
    let token = ctx.consume();

    let result = match token.kind {
        Kind::Id => Ok(lookup(ctx, &token)),
        Kind::Number => number(ctx, &token),
        Kind::OpenParen if depth >= MAX_NESTING => reject(ctx, &token, "Nesting too deep"),
        Kind::OpenParen => parenthesized(ctx, &token, depth + 1),
        Kind::Eof => reject(ctx, &token, "Unexpected EOF - expecting operand"),
        _ => reject(ctx, &token, "Expecting operand"),
    };

    if let Err(Halt::Rejected) = result {
        ctx.reset(marker)?;
    }
    result
}

/// Undefined names are reported and read as zero.
fn lookup<S>(ctx: &mut Ctx<'_, S>, token: &CalcToken) -> f64
where
    S: TokenSource<Token = CalcToken>,
{
    let name = token.text.as_str();
    match ctx.env().get(name) {
        Some(value) => value,
        None => {
            let message = format!("id '{}' not defined", name);
            ctx.env().report(token.position, message);
            0.0
        }
    }
}

fn number<S>(ctx: &mut Ctx<'_, S>, token: &CalcToken) -> Parsed<f64>
where
    S: TokenSource<Token = CalcToken>,
{
    match token.text.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(err) => {
            let message = format!("Error reading number: {}", err);
            reject(ctx, token, message)
        }
    }
}

fn parenthesized<S>(ctx: &mut Ctx<'_, S>, open: &CalcToken, depth: usize) -> Parsed<f64>
where
    S: TokenSource<Token = CalcToken>,
{
    let value = expression(ctx, depth)?;
    skip_errors(ctx);
    if ctx.peek_kind(0) == Kind::CloseParen {
        ctx.consume();
        Ok(value)
    } else {
        reject(ctx, open, "Unbalanced paren")
    }
}

fn reject<S, T>(ctx: &mut Ctx<'_, S>, token: &CalcToken, message: impl Into<String>) -> Parsed<T>
where
    S: TokenSource<Token = CalcToken>,
{
    ctx.env().report(token.position, message);
    Err(Halt::Rejected)
}

/// Reports and drops tokens the lexer could not make sense of.
fn skip_errors<S>(ctx: &mut Ctx<'_, S>)
where
    S: TokenSource<Token = CalcToken>,
{
    while ctx.peek_kind(0) == Kind::Error {
        let token = ctx.consume();
        if let Some(message) = token.error_message() {
            ctx.env().report(token.position, message);
        }
    }
}

/// Drops the rest of a failed statement, up to and including its `;`.
fn resync<S>(ctx: &mut Ctx<'_, S>)
where
    S: TokenSource<Token = CalcToken>,
{
    let mut skipped = 0;
    loop {
        match ctx.peek_kind(0) {
            Kind::Eof => break,
            Kind::Semicolon => {
                ctx.consume();
                break;
            }
            _ => {
                ctx.consume();
                skipped += 1;
            }
        }
    }
    log::debug!("skipped {} tokens after failed statement", skipped);
}
