/// Outcome of running an escape-time recurrence for one point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationResult {
    /// `|z|² >= 4` first held after this many iterations.
    Escaped(u32),
    /// Still bounded when the iteration budget ran out; treated as inside the set.
    Bounded,
}

impl IterationResult {
    #[must_use]
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bounded() {
        assert!(IterationResult::Bounded.is_bounded());
        assert!(!IterationResult::Escaped(0).is_bounded());
    }
}
