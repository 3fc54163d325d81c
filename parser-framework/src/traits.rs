use crate::context::StateContext;
use crate::error::EngineError;
use common_framework::{Token, TokenSource};
use std::fmt::Debug;

/// Result of running one grammar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<St> {
    /// Run this state next.
    Next(St),
    /// No states remain. The parser ends its result sequence once the values
    /// already emitted have been pulled.
    Done,
}

/// A grammar written as a state machine.
///
/// The set of states is closed: `State` is usually a small `Copy` enum and
/// [`step`](Grammar::step) matches on it. Each step reads tokens through the
/// [`StateContext`], may emit any number of values (bounded by the mailbox
/// capacity), and says which state comes next.
///
/// Input errors are not `Err`. A step that meets bad input reports it through
/// its environment and recovers by skipping tokens or resetting to a marker.
/// `Err` is reserved for engine contract violations, which `?` passes up from
/// `rewind`, `reset` and `emit`.
pub trait Grammar {
    type Token: Token;
    type State: Copy + Debug;
    /// Values handed to the caller.
    type Output;
    /// Caller-owned context passed into every pull, e.g. a symbol table.
    type Env;

    fn step<S>(
        &mut self,
        state: Self::State,
        ctx: &mut StateContext<'_, S, Self::Output, Self::Env>,
    ) -> Result<Transition<Self::State>, EngineError>
    where
        S: TokenSource<Token = Self::Token>;
}
