use serde::{Deserialize, Serialize};

use crate::model::election::VoterId;

/// A voter record as supplied for registration.
///
/// `age` is a plain number so that malformed values (non-finite) can be
/// rejected by validation rather than being unrepresentable; consequently
/// this type is `PartialEq` but not `Eq`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    /// Voter unique ID.
    pub id: VoterId,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: f64,
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Voter {
        pub fn example() -> Self {
            Self {
                id: "V1".to_string(),
                name: "Ron Measley".to_string(),
                age: 21.0,
            }
        }

        pub fn underage_example() -> Self {
            Self {
                id: "V2".to_string(),
                name: "Jinny Weasley".to_string(),
                age: 16.0,
            }
        }

        /// A valid adult voter with the given id.
        pub fn with_id(id: &str) -> Self {
            Self {
                id: id.to_string(),
                name: format!("Voter {id}"),
                age: 34.0,
            }
        }
    }
}
