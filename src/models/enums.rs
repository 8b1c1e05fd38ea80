use crate::models::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(TestStatus {
    Pending => "pending",
    Sampling => "sampling",
    Processing => "processing",
    Reporting => "reporting",
    Completed => "completed",
    Cancelled => "cancelled",
});

str_enum!(TestCategory {
    Pathology => "pathology",
    Radiology => "radiology",
    Other => "other",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for (variant, s) in [
            (TestStatus::Pending, "pending"),
            (TestStatus::Sampling, "sampling"),
            (TestStatus::Processing, "processing"),
            (TestStatus::Reporting, "reporting"),
            (TestStatus::Completed, "completed"),
            (TestStatus::Cancelled, "cancelled"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TestStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn test_category_round_trip() {
        for (variant, s) in [
            (TestCategory::Pathology, "pathology"),
            (TestCategory::Radiology, "radiology"),
            (TestCategory::Other, "other"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TestCategory::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(TestStatus::from_str("archived").is_err());
        assert!(TestCategory::from_str("").is_err());
    }
}
