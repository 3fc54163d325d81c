use common_framework::{Token, TokenSource};
use std::iter::Fuse;

/// Turns any iterator of tokens into a [`TokenSource`].
///
/// Tokens are passed through until the iterator yields an end-of-stream token
/// or runs dry. From then on the source returns `eof` forever.
#[derive(Debug, Clone)]
pub struct IterSource<I>
where
    I: Iterator,
    I::Item: Token,
{
    iter: Fuse<I>,
    eof: I::Item,
    finished: bool,
}

impl<I> IterSource<I>
where
    I: Iterator,
    I::Item: Token,
{
    /// `eof` is returned once `tokens` is exhausted. It should be an
    /// end-of-stream token (`is_eof()` true).
    pub fn new<T>(tokens: T, eof: I::Item) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        debug_assert!(eof.is_eof());
        Self {
            iter: tokens.into_iter().fuse(),
            eof,
            finished: false,
        }
    }
}

impl<I> TokenSource for IterSource<I>
where
    I: Iterator,
    I::Item: Token,
{
    type Token = I::Item;

    fn next_token(&mut self) -> Self::Token {
        if !self.finished {
            match self.iter.next() {
                Some(token) if token.is_eof() => {
                    self.finished = true;
                    self.eof = token.clone();
                    return token;
                }
                Some(token) => return token,
                None => self.finished = true,
            }
        }
        self.eof.clone()
    }
}
