use crate::Position;
use std::fmt::Debug;

/// A token as seen by the parser.
///
/// Tokens are immutable once produced. The parser only needs the kind tag to
/// make decisions, the raw text to build values, and the position to report
/// diagnostics. One kind must be reserved for end of stream, and
/// [`is_eof`](Token::is_eof) must be true exactly for tokens of that kind.
pub trait Token: Clone + Debug {
    /// The enumerated type tag.
    type Kind: Copy + Eq + Debug;

    fn kind(&self) -> Self::Kind;

    /// The raw source text the token was made from.
    fn text(&self) -> &str;

    /// Where the token starts (1-based line and column).
    fn position(&self) -> Position;

    /// Returns true if this token represents end of stream.
    fn is_eof(&self) -> bool;

    fn line(&self) -> usize {
        self.position().line
    }

    fn column(&self) -> usize {
        self.position().column
    }
}

/// A pull-based producer of tokens.
///
/// `next_token` is the only operation a source has to support; lookahead and
/// backtracking are layered on top by the parser's token buffer. Once the
/// source is exhausted it must keep returning an end-of-stream token. It never
/// fails: malformed input is reported as an error-kind token instead.
pub trait TokenSource {
    type Token: Token;

    fn next_token(&mut self) -> Self::Token;
}

impl<S> TokenSource for &mut S
where
    S: TokenSource + ?Sized,
{
    type Token = S::Token;

    fn next_token(&mut self) -> Self::Token {
        (**self).next_token()
    }
}

impl<S> TokenSource for Box<S>
where
    S: TokenSource + ?Sized,
{
    type Token = S::Token;

    fn next_token(&mut self) -> Self::Token {
        (**self).next_token()
    }
}
