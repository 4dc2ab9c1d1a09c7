use serde::Serialize;

/// Display band of a score, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    #[must_use]
    pub const fn of(score: u32) -> Self {
        match score {
            70.. => Self::High,
            40..=69 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// CSS class for text colour.
    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::High => "score-high",
            Self::Medium => "score-medium",
            Self::Low => "score-low",
        }
    }

    /// CSS class for a tinted background box.
    #[must_use]
    pub const fn background_class(self) -> &'static str {
        match self {
            Self::High => "score-bg-high",
            Self::Medium => "score-bg-medium",
            Self::Low => "score-bg-low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(ScoreBand::of(100), ScoreBand::High);
        assert_eq!(ScoreBand::of(70), ScoreBand::High);
        assert_eq!(ScoreBand::of(69), ScoreBand::Medium);
        assert_eq!(ScoreBand::of(40), ScoreBand::Medium);
        assert_eq!(ScoreBand::of(39), ScoreBand::Low);
        assert_eq!(ScoreBand::of(0), ScoreBand::Low);
    }
}
