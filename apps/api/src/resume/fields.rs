use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller bugs raised by résumé operations. The form only ever sends indices
/// and field names it rendered itself, so none of these are user errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("{collection} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("unknown {collection} field '{field}'")]
    UnknownField {
        collection: &'static str,
        field: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    Name,
    Email,
    Phone,
    Address,
    Summary,
}

impl FromStr for ScalarField {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ScalarField::Name),
            "email" => Ok(ScalarField::Email),
            "phone" => Ok(ScalarField::Phone),
            "address" => Ok(ScalarField::Address),
            "summary" => Ok(ScalarField::Summary),
            other => Err(StateError::UnknownField {
                collection: "personal",
                field: other.to_string(),
            }),
        }
    }
}

/// Collections whose entries are records with named fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Education,
    Experience,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Education => "education",
            CollectionKind::Experience => "experience",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    Year,
}

impl FromStr for EducationField {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "school" => Ok(EducationField::School),
            "degree" => Ok(EducationField::Degree),
            "year" => Ok(EducationField::Year),
            other => Err(StateError::UnknownField {
                collection: "education",
                field: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

impl FromStr for ExperienceField {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(ExperienceField::Company),
            "position" => Ok(ExperienceField::Position),
            "duration" => Ok(ExperienceField::Duration),
            "description" => Ok(ExperienceField::Description),
            other => Err(StateError::UnknownField {
                collection: "experience",
                field: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_names() {
        assert_eq!("email".parse::<ScalarField>(), Ok(ScalarField::Email));
        assert_eq!("summary".parse::<ScalarField>(), Ok(ScalarField::Summary));
        assert!(matches!(
            "Email".parse::<ScalarField>(),
            Err(StateError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_entry_field_sets_are_closed() {
        assert_eq!("year".parse::<EducationField>(), Ok(EducationField::Year));
        assert_eq!(
            "description".parse::<ExperienceField>(),
            Ok(ExperienceField::Description)
        );
        // Each kind only accepts its own names.
        assert!("company".parse::<EducationField>().is_err());
        assert!("school".parse::<ExperienceField>().is_err());
    }

    #[test]
    fn test_unknown_field_message() {
        let err = "schol".parse::<EducationField>().unwrap_err();
        assert_eq!(err.to_string(), "unknown education field 'schol'");
    }

    #[test]
    fn test_collection_kind_serde() {
        let kind: CollectionKind = serde_json::from_str("\"experience\"").unwrap();
        assert_eq!(kind, CollectionKind::Experience);
        assert_eq!(kind.to_string(), "experience");
    }
}
