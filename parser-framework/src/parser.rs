use crate::buffer::TokenBuffer;
use crate::context::StateContext;
use crate::error::EngineError;
use crate::mailbox::Mailbox;
use crate::traits::{Grammar, Transition};
use common_framework::TokenSource;
use std::iter::FusedIterator;

/// Construction-time settings for a [`Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// How many emitted values may wait for the caller at once. At least 1.
    pub mailbox_capacity: usize,
    /// Initial token buffer allocation. The buffer grows past it as needed.
    pub buffer_capacity: usize,
}

impl ParserConfig {
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity;
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 2,
            buffer_capacity: 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    /// Grammar states run.
    pub steps: usize,
    /// Values handed to the caller.
    pub delivered: usize,
}

#[derive(Debug, Clone, Copy)]
enum Phase<St> {
    Running(St),
    /// The grammar returned `Done`; end of sequence is reported once the
    /// mailbox is drained.
    Finishing,
    Terminated,
    Poisoned,
}

/// Drives a [`Grammar`] over a token source and hands out what it emits.
///
/// Nothing runs until a value is pulled. Each pull runs grammar states on the
/// caller's thread until a value is waiting in the mailbox or the grammar is
/// done, so a single parser can produce an open-ended sequence of results,
/// one per top-level construct.
pub struct Parser<G, S>
where
    G: Grammar,
    S: TokenSource<Token = G::Token>,
{
    grammar: G,
    buffer: TokenBuffer<S>,
    mailbox: Mailbox<G::Output>,
    phase: Phase<G::State>,
    stats: ParserStats,
}

impl<G, S> Parser<G, S>
where
    G: Grammar,
    S: TokenSource<Token = G::Token>,
{
    /// Creates a parser that starts in `start` and buffers up to
    /// `mailbox_capacity` emitted values.
    pub fn try_new(
        grammar: G,
        start: G::State,
        source: S,
        mailbox_capacity: usize,
    ) -> Result<Self, EngineError> {
        let config = ParserConfig::default().with_mailbox_capacity(mailbox_capacity);
        Self::with_config(grammar, start, source, config)
    }

    pub fn with_config(
        grammar: G,
        start: G::State,
        source: S,
        config: ParserConfig,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            grammar,
            buffer: TokenBuffer::with_capacity(source, config.buffer_capacity),
            mailbox: Mailbox::with_capacity(config.mailbox_capacity)?,
            phase: Phase::Running(start),
            stats: ParserStats::default(),
        })
    }

    /// Returns the next emitted value, or `None` at the end of the sequence.
    ///
    /// `None` is returned exactly once. Pulling again after that is
    /// [`EngineError::Terminated`]. An error from a grammar state is returned
    /// as is and poisons the parser.
    pub fn try_next_with(
        &mut self,
        env: &mut G::Env,
    ) -> Result<Option<G::Output>, EngineError> {
        loop {
            if let Phase::Poisoned = self.phase {
                return Err(EngineError::Poisoned);
            }
            if let Some(value) = self.mailbox.try_take() {
                self.stats.delivered += 1;
                return Ok(Some(value));
            }
            match self.phase {
                Phase::Running(state) => {
                    log::debug!("step {:?}", state);
                    let mut ctx =
                        StateContext::new(&mut self.buffer, &mut self.mailbox, &mut *env);
                    let transition = self.grammar.step(state, &mut ctx);
                    self.stats.steps += 1;
                    match transition {
                        Ok(Transition::Next(next)) => self.phase = Phase::Running(next),
                        Ok(Transition::Done) => {
                            log::debug!("done after {:?}", state);
                            self.phase = Phase::Finishing;
                        }
                        Err(err) => {
                            log::debug!("step {:?} failed: {}", state, err);
                            self.phase = Phase::Poisoned;
                            return Err(err);
                        }
                    }
                }
                Phase::Finishing => {
                    self.phase = Phase::Terminated;
                    return Ok(None);
                }
                Phase::Terminated => return Err(EngineError::Terminated),
                Phase::Poisoned => return Err(EngineError::Poisoned),
            }
        }
    }

    /// Iterates over emitted values, stopping after the end of the sequence
    /// or after the first error.
    pub fn iter_with<'p>(&'p mut self, env: &'p mut G::Env) -> ParseIter<'p, G, S> {
        ParseIter {
            parser: self,
            env,
            done: false,
        }
    }

    /// Returns true once the end of the sequence has been reported or the
    /// parser is poisoned.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Terminated | Phase::Poisoned)
    }

    pub fn is_poisoned(&self) -> bool {
        matches!(self.phase, Phase::Poisoned)
    }

    /// The token buffer, for inspection between pulls.
    pub fn tokens(&self) -> &TokenBuffer<S> {
        &self.buffer
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }
}

impl<G, S> Parser<G, S>
where
    G: Grammar<Env = ()>,
    S: TokenSource<Token = G::Token>,
{
    /// [`try_next_with`](Parser::try_next_with) for grammars without an
    /// environment.
    pub fn try_next(&mut self) -> Result<Option<G::Output>, EngineError> {
        self.try_next_with(&mut ())
    }
}

impl<G, S> Iterator for Parser<G, S>
where
    G: Grammar<Env = ()>,
    S: TokenSource<Token = G::Token>,
{
    type Item = Result<G::Output, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        self.try_next().transpose()
    }
}

/// Iterator returned by [`Parser::iter_with`].
pub struct ParseIter<'p, G, S>
where
    G: Grammar,
    S: TokenSource<Token = G::Token>,
{
    parser: &'p mut Parser<G, S>,
    env: &'p mut G::Env,
    done: bool,
}

impl<G, S> Iterator for ParseIter<'_, G, S>
where
    G: Grammar,
    S: TokenSource<Token = G::Token>,
{
    type Item = Result<G::Output, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.parser.is_finished() {
            self.done = true;
            return None;
        }
        match self.parser.try_next_with(self.env) {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<G, S> FusedIterator for ParseIter<'_, G, S>
where
    G: Grammar,
    S: TokenSource<Token = G::Token>,
{
}
