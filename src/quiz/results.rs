//! Quiz result types

/// Outcome of one play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: u32,
    pub total: u32,
}

impl QuizSummary {
    /// Share of correct answers in percent. Zero when no questions were asked.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(QuizSummary { score: 7, total: 7 }.percentage(), 100.0);
        assert_eq!(QuizSummary { score: 1, total: 4 }.percentage(), 25.0);
        assert_eq!(QuizSummary { score: 0, total: 0 }.percentage(), 0.0);
    }
}
