//! Dex number navigation.

/// First national dex number.
pub const FIRST_INDEX: u32 = 1;

/// Tracks the dex number previous/next step from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    index: u32,
}

impl Default for Navigator {
    fn default() -> Self {
        Self { index: FIRST_INDEX }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current dex number.
    pub fn current(&self) -> u32 {
        self.index
    }

    /// Steps back one entry. Returns `None` at the first entry.
    pub fn previous(&mut self) -> Option<u32> {
        if self.index <= FIRST_INDEX {
            return None;
        }
        self.index -= 1;
        Some(self.index)
    }

    /// Steps forward one entry. There is no upper bound.
    pub fn next(&mut self) -> u32 {
        self.index = self.index.saturating_add(1);
        self.index
    }

    /// Moves to an explicit dex number, e.g. after a search by name.
    pub fn jump_to(&mut self, index: u32) {
        self.index = index.max(FIRST_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_at_floor_is_noop() {
        let mut nav = Navigator::new();
        assert_eq!(nav.previous(), None);
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_next_then_previous() {
        let mut nav = Navigator::new();
        assert_eq!(nav.next(), 2);
        assert_eq!(nav.next(), 3);
        assert_eq!(nav.previous(), Some(2));
    }

    #[test]
    fn test_jump_to_clamps_to_floor() {
        let mut nav = Navigator::new();
        nav.jump_to(151);
        assert_eq!(nav.current(), 151);
        assert_eq!(nav.next(), 152);

        nav.jump_to(0);
        assert_eq!(nav.current(), 1);
    }
}
