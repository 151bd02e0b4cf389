//! One-shot visibility latch for landing page sections.

/// A flag that flips to `true` the first time a section is seen and then
/// stays there. Only governs entrance rendering, never data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest in-view observation. Returns the latched value.
    pub fn observe(&mut self, in_view: bool) -> bool {
        self.revealed |= in_view;
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!RevealLatch::new().is_revealed());
    }

    #[test]
    fn stays_hidden_until_seen() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
    }

    #[test]
    fn never_reverts_once_seen() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.is_revealed());
    }
}
