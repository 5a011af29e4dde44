use crate::error::ErrorKind;
use crate::random::RandomSource;

/// Faces of the die that decides a simulated payment outcome.
pub const OUTCOME_DIE_FACES: u32 = 10;

/// Simulated result of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderResultType {
    Success,
    NetworkError,
    CardLimitExceeded,
    MagneticNotRecognized,
    ResponseDelay,
}

impl OrderResultType {
    /// Maps a roll of the outcome die to a result.
    ///
    /// Rolls 1 through 7 succeed, 8 is a network error, 9 exceeds the card
    /// limit, and anything else is an unreadable card.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            1..=7 => OrderResultType::Success,
            8 => OrderResultType::NetworkError,
            9 => OrderResultType::CardLimitExceeded,
            _ => OrderResultType::MagneticNotRecognized,
        }
    }

    /// Weighted draw: 70% success, 10% for each payment failure.
    pub fn draw(random: &dyn RandomSource) -> Self {
        Self::from_roll(random.roll(OUTCOME_DIE_FACES))
    }

    /// Error reported when this outcome does not complete the order.
    ///
    /// Total over the enum: anything without a dedicated kind is reported
    /// as a delayed response.
    pub fn error_kind(self) -> ErrorKind {
        match self {
            OrderResultType::CardLimitExceeded => ErrorKind::CardLimitExceeded,
            OrderResultType::MagneticNotRecognized => ErrorKind::MagneticNotRecognized,
            OrderResultType::NetworkError => ErrorKind::NetworkFail,
            _ => ErrorKind::ResponseDelay,
        }
    }

    pub fn is_success(self) -> bool {
        self == OrderResultType::Success
    }
}
