use crate::error::EngineError;
use crate::marker::Marker;
use common_framework::{Token, TokenSource};
use std::collections::VecDeque;

/// Counters describing how a [`TokenBuffer`] has been used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferStats {
    /// Tokens pulled from the token source, end-of-stream included.
    pub pulled: usize,
    /// Tokens dropped from the front by `compact`.
    pub discarded: usize,
    pub compactions: usize,
    pub rewinds: usize,
    pub resets: usize,
    /// Largest number of tokens held at once.
    pub peak_len: usize,
}

/// Lookahead buffer over a pull-based [`TokenSource`].
///
/// Tokens are pulled from the source only when a peek or consume reaches past
/// what is already buffered, and stay buffered until [`compact`] drops the
/// consumed prefix. The cursor is an index into the buffer and can be moved
/// back with [`rewind`] or [`reset`] for as long as the tokens are kept.
///
/// When the source reports end of stream, that token is stored like any other
/// and a copy is cached as the sentinel. Every read past the end returns the
/// sentinel and the source is never called again.
///
/// [`compact`]: TokenBuffer::compact
/// [`rewind`]: TokenBuffer::rewind
/// [`reset`]: TokenBuffer::reset
pub struct TokenBuffer<S>
where
    S: TokenSource,
{
    source: S,
    tokens: VecDeque<S::Token>,
    /// Tokens consumed since the last compaction.
    pos: usize,
    /// Bumped by every compaction; markers from older generations are stale.
    generation: u64,
    eof: Option<S::Token>,
    stats: BufferStats,
}

impl<S> TokenBuffer<S>
where
    S: TokenSource,
{
    /// Creates an empty buffer over `source`. Nothing is pulled yet.
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, 4)
    }

    /// Creates an empty buffer with room for `capacity` tokens before it grows.
    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self {
            source,
            tokens: VecDeque::with_capacity(capacity),
            pos: 0,
            generation: 0,
            eof: None,
            stats: BufferStats::default(),
        }
    }

    /// Makes sure at least `n` tokens are buffered, pulling from the source as
    /// needed. Returns false if the source ran out first.
    pub fn ensure(&mut self, n: usize) -> bool {
        while self.eof.is_none() && self.tokens.len() < n {
            let token = self.source.next_token();
            log::trace!("pulled {:?} (buffered {})", token, self.tokens.len() + 1);
            if token.is_eof() {
                self.eof = Some(token.clone());
            }
            self.tokens.push_back(token);
            self.stats.pulled += 1;
            self.stats.peak_len = self.stats.peak_len.max(self.tokens.len());
        }
        self.tokens.len() >= n
    }

    /// Returns the token `offset` places past the cursor without consuming it.
    /// Any offset past the end of the stream yields the end-of-stream token.
    pub fn peek(&mut self, offset: usize) -> &S::Token {
        match self.pos.checked_add(offset) {
            Some(index) if index < usize::MAX && self.ensure(index + 1) => &self.tokens[index],
            _ => {
                self.ensure(usize::MAX);
                self.sentinel()
            }
        }
    }

    pub fn peek_kind(&mut self, offset: usize) -> <S::Token as Token>::Kind {
        self.peek(offset).kind()
    }

    /// Returns the token at the cursor and moves past it.
    ///
    /// Once the stored end-of-stream token has been consumed, every further
    /// call returns the sentinel and leaves the cursor where it is.
    pub fn consume(&mut self) -> S::Token {
        if self.ensure(self.pos + 1) {
            let token = self.tokens[self.pos].clone();
            self.pos += 1;
            token
        } else {
            self.sentinel().clone()
        }
    }

    /// Moves the cursor forward by `n` if that many tokens are available.
    /// Returns whether it moved.
    pub fn skip(&mut self, n: usize) -> bool {
        match self.pos.checked_add(n) {
            Some(target) if self.ensure(target) => {
                self.pos = target;
                true
            }
            _ => false,
        }
    }

    /// Moves the cursor back by `n` tokens.
    pub fn rewind(&mut self, n: usize) -> Result<(), EngineError> {
        if n > self.pos {
            return Err(EngineError::RewindUnderflow {
                requested: n,
                available: self.pos,
            });
        }
        self.pos -= n;
        self.stats.rewinds += 1;
        log::trace!("rewind {} -> cursor {}", n, self.pos);
        Ok(())
    }

    /// Un-consumes the last token.
    pub fn backup(&mut self) -> Result<(), EngineError> {
        self.rewind(1)
    }

    /// Drops every token before the cursor and starts a new generation.
    ///
    /// Markers taken before this call can no longer be used with `reset`.
    pub fn compact(&mut self) {
        let discarded = self.pos;
        self.tokens.drain(..discarded);
        self.pos = 0;
        self.generation += 1;
        self.stats.discarded += discarded;
        self.stats.compactions += 1;
        log::trace!(
            "compact: dropped {} tokens, {} kept, generation {}",
            discarded,
            self.tokens.len(),
            self.generation
        );
    }

    /// Captures the cursor so it can be restored with [`reset`](TokenBuffer::reset).
    pub fn mark(&self) -> Marker {
        Marker::new(self.generation, self.pos)
    }

    /// Moves the cursor back (or forward) to where `marker` was taken.
    pub fn reset(&mut self, marker: Marker) -> Result<(), EngineError> {
        if marker.generation() != self.generation || marker.position() > self.tokens.len() {
            return Err(EngineError::InvalidMarker {
                marker_generation: marker.generation(),
                generation: self.generation,
                position: marker.position(),
                len: self.tokens.len(),
            });
        }
        self.pos = marker.position();
        self.stats.resets += 1;
        log::trace!("reset -> cursor {}", self.pos);
        Ok(())
    }

    /// Line of the next token.
    pub fn line(&mut self) -> usize {
        self.peek(0).line()
    }

    /// Column of the next token.
    pub fn column(&mut self) -> usize {
        self.peek(0).column()
    }

    /// Returns true if the next token is the end-of-stream token.
    pub fn at_end(&mut self) -> bool {
        self.peek(0).is_eof()
    }

    /// Returns true once the source has produced its end-of-stream token.
    pub fn source_exhausted(&self) -> bool {
        self.eof.is_some()
    }

    /// Number of tokens currently buffered.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are buffered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens consumed since the last compaction.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Number of compactions so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> BufferStats {
        self.stats.clone()
    }

    /// The underlying token source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn sentinel(&self) -> &S::Token {
        match &self.eof {
            Some(token) => token,
            None => unreachable!("token buffer ran dry before end of stream"),
        }
    }
}

impl<S> std::fmt::Debug for TokenBuffer<S>
where
    S: TokenSource,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenBuffer")
            .field("tokens", &self.tokens)
            .field("pos", &self.pos)
            .field("generation", &self.generation)
            .field("exhausted", &self.eof.is_some())
            .finish()
    }
}
