use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Medical specialization shared by the doctor directory and the symptom matcher.
///
/// Declaration order is significant: the matcher walks specialties in this
/// order and earlier variants win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    Dermatologist,
    Neurologist,
    Psychiatrist,
    #[serde(rename = "General Physician")]
    GeneralPhysician,
    Cardiologist,
    Pediatrician,
}

impl Specialty {
    pub const ALL: [Specialty; 6] = [
        Specialty::Dermatologist,
        Specialty::Neurologist,
        Specialty::Psychiatrist,
        Specialty::GeneralPhysician,
        Specialty::Cardiologist,
        Specialty::Pediatrician,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Dermatologist => "Dermatologist",
            Specialty::Neurologist => "Neurologist",
            Specialty::Psychiatrist => "Psychiatrist",
            Specialty::GeneralPhysician => "General Physician",
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Pediatrician => "Pediatrician",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpecialty(pub String);

impl fmt::Display for UnknownSpecialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown specialty: {}", self.0)
    }
}

impl std::error::Error for UnknownSpecialty {}

impl FromStr for Specialty {
    type Err = UnknownSpecialty;

    /// Accepts the display name case-insensitively, with or without the space
    /// ("general physician", "GeneralPhysician").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        Specialty::ALL
            .into_iter()
            .find(|specialty| specialty.as_str().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| UnknownSpecialty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_display_names() {
        let json = serde_json::to_string(&Specialty::GeneralPhysician).unwrap();
        assert_eq!(json, "\"General Physician\"");

        let parsed: Specialty = serde_json::from_str("\"Cardiologist\"").unwrap();
        assert_eq!(parsed, Specialty::Cardiologist);
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!("general physician".parse::<Specialty>(), Ok(Specialty::GeneralPhysician));
        assert_eq!("General_Physician".parse::<Specialty>(), Ok(Specialty::GeneralPhysician));
        assert_eq!("PEDIATRICIAN".parse::<Specialty>(), Ok(Specialty::Pediatrician));
        assert!("Dentist".parse::<Specialty>().is_err());
    }

    #[test]
    fn test_all_is_declaration_order() {
        assert_eq!(Specialty::ALL[0], Specialty::Dermatologist);
        assert_eq!(Specialty::ALL[3], Specialty::GeneralPhysician);
        assert_eq!(Specialty::ALL[5], Specialty::Pediatrician);
    }
}
