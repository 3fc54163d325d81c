//! Contract violations raised by the parsing engine.
//!
//! None of these describe bad input. Malformed input is the grammar's business
//! and is reported as a [`Diagnostic`](common_framework::Diagnostic) while
//! parsing continues. An [`EngineError`] means the grammar (or the code
//! driving the parser) broke a rule of the engine, and the parser that
//! returned it refuses further work.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A marker from an earlier buffer generation, or one pointing past the
    /// materialized tokens, was passed to `reset`.
    #[error(
        "invalid marker: generation {marker_generation} position {position} \
         (buffer generation {generation}, {len} tokens)"
    )]
    InvalidMarker {
        marker_generation: u64,
        generation: u64,
        position: usize,
        len: usize,
    },

    /// `rewind` asked to move back further than the tokens consumed since the
    /// last compaction.
    #[error("rewind underflow: requested {requested}, only {available} consumed")]
    RewindUnderflow { requested: usize, available: usize },

    /// More values were emitted than the mailbox can hold before a pull
    /// drains it.
    #[error("mailbox overflow: capacity {capacity} exceeded")]
    MailboxOverflow { capacity: usize },

    /// A parser was configured with a mailbox that can hold nothing.
    #[error("mailbox capacity must be at least 1")]
    ZeroCapacity,

    /// The parser already reported the end of its result sequence.
    #[error("parser pulled after end of sequence")]
    Terminated,

    /// An earlier contract violation left the parser unusable.
    #[error("parser is poisoned by an earlier error")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_details() {
        let err = EngineError::RewindUnderflow {
            requested: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "rewind underflow: requested 3, only 1 consumed"
        );

        let err = EngineError::InvalidMarker {
            marker_generation: 0,
            generation: 2,
            position: 4,
            len: 1,
        };
        assert!(err.to_string().contains("buffer generation 2"));
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn engine_error_is_send_sync_static() {
        _assert_send_sync_static::<EngineError>();
    }
}
