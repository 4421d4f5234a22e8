use std::fmt;
use std::str::FromStr;

pub const POSITIVE_THRESHOLD: f64 = 0.3;
pub const NEGATIVE_THRESHOLD: f64 = -0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Thresholds are inclusive on the positive and negative side.
    pub fn classify(compound_score: f64) -> Self {
        if compound_score >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound_score <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(format!("Unknown sentiment label: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Sentiment::classify(0.3), Sentiment::Positive);
        assert_eq!(Sentiment::classify(-0.3), Sentiment::Negative);
        assert_eq!(Sentiment::classify(0.2999), Sentiment::Neutral);
        assert_eq!(Sentiment::classify(-0.2999), Sentiment::Neutral);
        assert_eq!(Sentiment::classify(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::classify(1.0), Sentiment::Positive);
        assert_eq!(Sentiment::classify(-1.0), Sentiment::Negative);
    }

    #[test]
    fn test_classify_sweep_has_no_gap() {
        for i in -100..=100 {
            let score = i as f64 / 100.0;
            let expected = if score >= 0.3 {
                Sentiment::Positive
            } else if score <= -0.3 {
                Sentiment::Negative
            } else {
                Sentiment::Neutral
            };
            assert_eq!(Sentiment::classify(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("POSITIVE".parse::<Sentiment>(), Ok(Sentiment::Positive));
        assert_eq!("Negative".parse::<Sentiment>(), Ok(Sentiment::Negative));
        assert_eq!("neutral".parse::<Sentiment>(), Ok(Sentiment::Neutral));
        assert!("happy".parse::<Sentiment>().is_err());
    }
}
