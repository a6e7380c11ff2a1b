use serde::{Deserialize, Serialize};

/// Raised when a stored or submitted tag is not a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid enum value for {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Mood {
    Great => "great",
    Good => "good",
    Okay => "okay",
    Low => "low",
    Difficult => "difficult",
});

str_enum!(BookingStatus {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

str_enum!(MessageRole {
    User => "user",
    Assistant => "assistant",
});

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Great,
        Mood::Good,
        Mood::Okay,
        Mood::Low,
        Mood::Difficult,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Great => "😊",
            Self::Good => "🙂",
            Self::Okay => "😐",
            Self::Low => "😔",
            Self::Difficult => "😢",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn mood_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_str(mood.as_str()).unwrap(), mood);
            let json = serde_json::to_string(&mood).unwrap();
            assert_eq!(json, format!("\"{}\"", mood.as_str()));
        }
    }

    #[test]
    fn booking_status_round_trip() {
        for (variant, s) in [
            (BookingStatus::Scheduled, "scheduled"),
            (BookingStatus::Completed, "completed"),
            (BookingStatus::Cancelled, "cancelled"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(BookingStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn message_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MessageRole::Assistant).unwrap(), "\"assistant\"");
    }

    #[test]
    fn invalid_value_names_the_enum() {
        let err = Mood::from_str("ecstatic").unwrap_err();
        assert_eq!(err.field, "Mood");
        assert_eq!(err.value, "ecstatic");
        assert_eq!(err.to_string(), "Invalid enum value for Mood: ecstatic");
    }
}
