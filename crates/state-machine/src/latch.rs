//! One-shot latch.

/// Guards an effect so it runs at most once per state visit.
///
/// A state rebuilt on every visit gets a fresh latch for free; a state that
/// can be re-entered as the same instance (after a revert) must call
/// [`Latch::reset`] from its `enter`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Latch {
    tripped: bool,
}

impl Latch {
    pub const fn new() -> Self {
        Self { tripped: false }
    }

    /// Trips the latch. Returns `true` only on the first call.
    #[inline]
    pub fn trip(&mut self) -> bool {
        !core::mem::replace(&mut self.tripped, true)
    }

    #[inline]
    pub fn is_tripped(&self) -> bool {
        self.tripped
    }

    /// Re-arms the latch, for states that are re-entered without being rebuilt.
    #[inline]
    pub fn reset(&mut self) {
        self.tripped = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_once() {
        let mut latch = Latch::new();
        assert!(!latch.is_tripped());
        assert!(latch.trip());
        assert!(!latch.trip());
        assert!(!latch.trip());
        assert!(latch.is_tripped());
    }

    #[test]
    fn reset_rearms() {
        let mut latch = Latch::new();
        latch.trip();
        latch.reset();
        assert!(latch.trip());
    }
}
