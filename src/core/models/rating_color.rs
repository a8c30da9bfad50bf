use crate::global_constants;

/// Display bucket for a book rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingColor {
    Low,
    Fair,
    Good,
    High,
}

impl Default for RatingColor {
    fn default() -> Self {
        RatingColor::Low
    }
}

impl RatingColor {
    /// Total mapping from the raw rating text. "N/A", unparseable and
    /// out-of-range ratings all land on the default bucket.
    pub fn from_rating(rating: &str) -> Self {
        let rating = rating.trim();

        if rating == global_constants::RATING_NOT_AVAILABLE {
            return Self::default();
        }

        match rating.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::from_rating_bucket(value.floor() as i64),
            Ok(value) => {
                log::warn!("[RATING] Non-finite rating {}, using default color", value);
                Self::default()
            }
            Err(error) => {
                log::warn!(
                    "[RATING] Could not parse rating '{}': {}, using default color",
                    rating,
                    error
                );
                Self::default()
            }
        }
    }

    fn from_rating_bucket(bucket: i64) -> Self {
        match bucket {
            0 | 1 => RatingColor::Low,
            2 => RatingColor::Fair,
            3 => RatingColor::Good,
            4 | 5 => RatingColor::High,
            _ => Self::default(),
        }
    }

    pub fn rgb(&self) -> (f32, f32, f32) {
        match self {
            RatingColor::Low => (0.827, 0.184, 0.184),
            RatingColor::Fair => (0.961, 0.486, 0.0),
            RatingColor::Good => (0.851, 0.643, 0.047),
            RatingColor::High => (0.263, 0.627, 0.278),
        }
    }
}
