//! Character ceiling enforcement.

use tracing::debug;

use super::{CharSource, ReadError};

/// Size of one pull when draining a source, in characters.
const CHUNK_CHARS: usize = 4096;

/// Lets at most `ceiling` characters through from its delegate.
///
/// Once the ceiling is reached, the next read fails unless the delegate is
/// already exhausted; no partial read is attempted. When the character check is
/// disabled, callers read the delegate directly instead of wrapping it.
#[derive(Debug)]
pub struct BoundedCharGate<S> {
    delegate: S,
    ceiling: u32,
    consumed: usize,
}

impl<S: CharSource> BoundedCharGate<S> {
    pub fn new(delegate: S, ceiling: u32) -> Self {
        Self {
            delegate,
            ceiling,
            consumed: 0,
        }
    }

    /// Characters admitted so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn into_inner(self) -> S {
        self.delegate
    }
}

impl<S: CharSource> CharSource for BoundedCharGate<S> {
    fn read(&mut self, buf: &mut String, max_chars: usize) -> Result<usize, ReadError> {
        let ceiling = self.ceiling as usize;
        if self.consumed >= ceiling {
            if self.delegate.is_exhausted() {
                return Ok(0);
            }
            debug!(ceiling = self.ceiling, "character ceiling reached");
            return Err(ReadError::CharacterLimitExceeded {
                ceiling: self.ceiling,
            });
        }

        let allowed = max_chars.min(ceiling - self.consumed);
        let n = self.delegate.read(buf, allowed)?;
        self.consumed += n;
        Ok(n)
    }

    fn is_exhausted(&self) -> bool {
        self.delegate.is_exhausted()
    }
}

/// Pulls `source` to the end and returns everything it produced.
pub fn drain<S: CharSource>(mut source: S) -> Result<String, ReadError> {
    let mut text = String::new();
    while source.read(&mut text, CHUNK_CHARS)? > 0 {}
    Ok(text)
}
