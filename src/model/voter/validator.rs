use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Voter;

/// Why a voter record failed validation.
///
/// As with vote rejections, the `Display` strings are the stable reporting
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidVoter {
    /// A required field is absent or empty.
    #[error("missing field: {0}")]
    MissingField(String),
    /// Age below the configured minimum.
    #[error("underage")]
    Underage,
    /// The record is malformed (non-finite age).
    #[error("invalid voter")]
    Malformed,
}

/// Validation rules for [`validator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Minimum age to pass validation.
    pub min_age: f64,
    /// Fields that must be present and non-empty.
    pub required_fields: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_age: 18.0,
            required_fields: Vec::new(),
        }
    }
}

/// Build a pure validation predicate closed over `rules`.
///
/// Required field names resolve against the string fields of [`Voter`]; a
/// name matching no field is reported missing, while numeric fields are
/// never missing (zero is a value, not an absence). Checks report the first
/// failure, in order: required fields, record shape, then minimum age.
pub fn validator(rules: Rules) -> impl Fn(&Voter) -> Result<(), InvalidVoter> {
    move |voter| {
        for field in &rules.required_fields {
            let value = match field.as_str() {
                "id" => voter.id.as_str(),
                "name" => voter.name.as_str(),
                "age" => continue,
                _ => "",
            };
            if value.is_empty() {
                return Err(InvalidVoter::MissingField(field.clone()));
            }
        }
        if !voter.age.is_finite() {
            return Err(InvalidVoter::Malformed);
        }
        if voter.age < rules.min_age {
            return Err(InvalidVoter::Underage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_only_gate_on_age() {
        let check = validator(Rules::default());

        assert_eq!(check(&Voter::example()), Ok(()));
        assert_eq!(check(&Voter::underage_example()), Err(InvalidVoter::Underage));
        // Without required fields, even an empty id passes.
        let mut anonymous = Voter::example();
        anonymous.id = String::new();
        assert_eq!(check(&anonymous), Ok(()));
    }

    #[test]
    fn required_fields_must_be_present_and_non_empty() {
        let check = validator(Rules {
            min_age: 18.0,
            required_fields: vec!["id".to_string(), "name".to_string()],
        });

        let mut voter = Voter::example();
        assert_eq!(check(&voter), Ok(()));

        voter.name = String::new();
        assert_eq!(
            check(&voter),
            Err(InvalidVoter::MissingField("name".to_string()))
        );

        // First failing field wins.
        voter.id = String::new();
        assert_eq!(
            check(&voter),
            Err(InvalidVoter::MissingField("id".to_string()))
        );
    }

    #[test]
    fn unknown_field_names_are_always_missing() {
        let check = validator(Rules {
            min_age: 18.0,
            required_fields: vec!["email".to_string()],
        });
        assert_eq!(
            check(&Voter::example()),
            Err(InvalidVoter::MissingField("email".to_string()))
        );
    }

    #[test]
    fn numeric_zero_is_a_value_not_an_absence() {
        let check = validator(Rules {
            min_age: 18.0,
            required_fields: vec!["age".to_string()],
        });

        let mut newborn = Voter::example();
        newborn.age = 0.0;
        // Zero passes the presence check and then fails on age.
        assert_eq!(check(&newborn), Err(InvalidVoter::Underage));
    }

    #[test]
    fn non_finite_ages_are_malformed() {
        let check = validator(Rules::default());

        for age in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut voter = Voter::example();
            voter.age = age;
            assert_eq!(check(&voter), Err(InvalidVoter::Malformed));
        }
    }

    #[test]
    fn custom_minimum_ages_apply() {
        let check = validator(Rules {
            min_age: 25.0,
            required_fields: Vec::new(),
        });

        assert_eq!(check(&Voter::example()), Err(InvalidVoter::Underage));
        assert_eq!(check(&Voter::with_id("V5")), Ok(()));
    }

    #[test]
    fn reason_strings_are_stable() {
        assert_eq!(
            InvalidVoter::MissingField("name".to_string()).to_string(),
            "missing field: name"
        );
        assert_eq!(InvalidVoter::Underage.to_string(), "underage");
        assert_eq!(InvalidVoter::Malformed.to_string(), "invalid voter");
    }
}
