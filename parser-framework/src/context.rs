use crate::buffer::TokenBuffer;
use crate::error::EngineError;
use crate::mailbox::Mailbox;
use crate::marker::Marker;
use common_framework::{Token, TokenSource};

/// Token access for grammar code.
///
/// Grammar helpers are written against this trait so they work the same on a
/// bare [`TokenBuffer`] and on the [`StateContext`] the driver hands to each
/// state. Implementors only provide access to the buffer.
pub trait ParseContext {
    type Source: TokenSource;

    fn buffer(&self) -> &TokenBuffer<Self::Source>;

    fn buffer_mut(&mut self) -> &mut TokenBuffer<Self::Source>;

    /// Looks `offset` tokens past the cursor without consuming anything.
    fn peek(&mut self, offset: usize) -> &<Self::Source as TokenSource>::Token {
        self.buffer_mut().peek(offset)
    }

    fn peek_kind(
        &mut self,
        offset: usize,
    ) -> <<Self::Source as TokenSource>::Token as Token>::Kind {
        self.buffer_mut().peek_kind(offset)
    }

    /// Consumes and returns the next token.
    fn consume(&mut self) -> <Self::Source as TokenSource>::Token {
        self.buffer_mut().consume()
    }

    /// Consumes `n` tokens without returning them, if they are available.
    fn skip(&mut self, n: usize) -> bool {
        self.buffer_mut().skip(n)
    }

    /// Un-consumes the last `n` tokens.
    fn rewind(&mut self, n: usize) -> Result<(), EngineError> {
        self.buffer_mut().rewind(n)
    }

    fn backup(&mut self) -> Result<(), EngineError> {
        self.buffer_mut().backup()
    }

    fn mark(&self) -> Marker {
        self.buffer().mark()
    }

    fn reset(&mut self, marker: Marker) -> Result<(), EngineError> {
        self.buffer_mut().reset(marker)
    }

    /// Forgets consumed tokens. Outstanding markers become invalid.
    fn compact(&mut self) {
        self.buffer_mut().compact()
    }

    fn line(&mut self) -> usize {
        self.buffer_mut().line()
    }

    fn column(&mut self) -> usize {
        self.buffer_mut().column()
    }

    fn at_end(&mut self) -> bool {
        self.buffer_mut().at_end()
    }
}

impl<S> ParseContext for TokenBuffer<S>
where
    S: TokenSource,
{
    type Source = S;

    fn buffer(&self) -> &TokenBuffer<S> {
        self
    }

    fn buffer_mut(&mut self) -> &mut TokenBuffer<S> {
        self
    }
}

/// What a grammar state sees while it runs: the token buffer, the mailbox to
/// emit into, and the caller's environment.
pub struct StateContext<'a, S, T, E>
where
    S: TokenSource,
{
    buffer: &'a mut TokenBuffer<S>,
    mailbox: &'a mut Mailbox<T>,
    env: &'a mut E,
}

impl<'a, S, T, E> StateContext<'a, S, T, E>
where
    S: TokenSource,
{
    pub fn new(
        buffer: &'a mut TokenBuffer<S>,
        mailbox: &'a mut Mailbox<T>,
        env: &'a mut E,
    ) -> Self {
        Self {
            buffer,
            mailbox,
            env,
        }
    }

    /// Hands `value` to the caller. Values are delivered in emit order.
    pub fn emit(&mut self, value: T) -> Result<(), EngineError> {
        self.mailbox.emit(value)
    }

    /// Values emitted but not yet pulled.
    pub fn pending(&self) -> usize {
        self.mailbox.len()
    }

    pub fn env(&mut self) -> &mut E {
        &mut *self.env
    }
}

impl<S, T, E> ParseContext for StateContext<'_, S, T, E>
where
    S: TokenSource,
{
    type Source = S;

    fn buffer(&self) -> &TokenBuffer<S> {
        &*self.buffer
    }

    fn buffer_mut(&mut self) -> &mut TokenBuffer<S> {
        &mut *self.buffer
    }
}
