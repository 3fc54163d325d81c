use crate::context::LexContext;
use common_framework::{Position, TextSlice, Token};

/// A token the [`Lexer`](crate::Lexer) knows how to build on its own.
///
/// Rules build ordinary tokens. The lexer itself only needs to make the
/// end-of-stream token and a token for characters no rule accepts.
pub trait LexToken: Token {
    fn end_of_input(position: Position) -> Self;

    /// Token for text no rule matched. It should be an error kind so the
    /// grammar can report it.
    fn invalid(text: TextSlice, position: Position) -> Self;

    /// Trivia (whitespace, comments) is dropped by the lexer and never
    /// reaches the parser.
    fn is_trivia(&self) -> bool {
        false
    }
}

/// A lexing rule that operates on a context.
///
/// Rules are generic over the context, so the same rule works with any
/// [`LexContext`] implementation.
pub trait LexingRule<Ctx, Tok>
where
    Ctx: LexContext,
{
    /// Attempts to match and consume a token. The lexer restores the cursor
    /// when this returns `None`.
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<Tok>;

    /// Higher priority rules are tried first.
    fn priority(&self) -> i32 {
        0
    }

    /// Cheap first-character test.
    ///
    /// - `Some(true)`  - this rule might match
    /// - `Some(false)` - this rule definitely won't match
    /// - `None`        - unknown, try the full match
    #[inline]
    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        let _ = first_char;
        None
    }
}
