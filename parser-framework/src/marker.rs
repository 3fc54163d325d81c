/// A saved cursor position in a [`TokenBuffer`](crate::TokenBuffer).
///
/// Markers are cheap to copy and carry the buffer generation they were taken
/// in. `compact()` starts a new generation, so a marker survives only as long
/// as the tokens it points at are still in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    generation: u64,
    position: usize,
}

impl Marker {
    pub(crate) fn new(generation: u64, position: usize) -> Self {
        Self {
            generation,
            position,
        }
    }

    /// The buffer generation this marker belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The cursor value at capture time, relative to the buffer origin of
    /// that generation.
    pub fn position(&self) -> usize {
        self.position
    }
}
