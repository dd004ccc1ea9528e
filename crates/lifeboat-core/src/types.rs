use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmbarkPort {
    C,
    Q,
    S,
}

impl EmbarkPort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Q => "Q",
            Self::S => "S",
        }
    }

    /// Full port name, for form display.
    pub fn label(self) -> &'static str {
        match self {
            Self::C => "Cherbourg",
            Self::Q => "Queenstown",
            Self::S => "Southampton",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    Mr,
    Mrs,
    Miss,
    Master,
    Rare,
}

impl Title {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mr => "Mr",
            Self::Mrs => "Mrs",
            Self::Miss => "Miss",
            Self::Master => "Master",
            Self::Rare => "Rare",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mr => "Mr (adult man)",
            Self::Mrs => "Mrs (married woman)",
            Self::Miss => "Miss (unmarried woman)",
            Self::Master => "Master (boy)",
            Self::Rare => "Rare (Dr, Rev, nobility, ...)",
        }
    }

    /// Titles a passenger of the given sex may carry. The 1912 honorifics
    /// are sex-specific; "Rare" covers both.
    pub fn allowed_for(sex: Sex) -> &'static [Title] {
        match sex {
            Sex::Male => &[Title::Mr, Title::Master, Title::Rare],
            Sex::Female => &[Title::Miss, Title::Mrs, Title::Rare],
        }
    }

    pub fn valid_for(self, sex: Sex) -> bool {
        Self::allowed_for(sex).contains(&self)
    }
}

/// Raw passenger attributes as collected by the form. Field domains are
/// enforced by `validate`, not by the encoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerInput {
    /// Socioeconomic stratum 1–6, mapped to passenger class by the encoder.
    pub stratum: u8,
    pub sex: Sex,
    pub embarked: EmbarkPort,
    /// Ticket fare in USD, 0.0–600.0.
    pub fare: f64,
    /// Age in whole years, 0–100.
    pub age: u8,
    /// Siblings + spouse aboard, 0–10.
    pub siblings_spouses: u8,
    /// Parents + children aboard, 0–10.
    pub parents_children: u8,
    pub title: Title,
}

impl Default for PassengerInput {
    // Mirrors the form's initial widget values.
    fn default() -> Self {
        Self {
            stratum: 3,
            sex: Sex::Female,
            embarked: EmbarkPort::C,
            fare: 32.0,
            age: 25,
            siblings_spouses: 0,
            parents_children: 0,
            title: Title::Miss,
        }
    }
}

impl PassengerInput {
    /// Check every field against its declared domain. Callers must reject
    /// invalid input here, before encoding; the encoder assumes a validated
    /// input and never re-checks.
    pub fn validate(&self) -> Result<(), InputError> {
        if !(1..=6).contains(&self.stratum) {
            return Err(InputError::StratumOutOfRange(self.stratum));
        }
        if !self.fare.is_finite() || !(0.0..=600.0).contains(&self.fare) {
            return Err(InputError::FareOutOfRange(self.fare));
        }
        if self.age > 100 {
            return Err(InputError::AgeOutOfRange(self.age));
        }
        if self.siblings_spouses > 10 {
            return Err(InputError::SiblingsOutOfRange(self.siblings_spouses));
        }
        if self.parents_children > 10 {
            return Err(InputError::ParentsOutOfRange(self.parents_children));
        }
        if !self.title.valid_for(self.sex) {
            return Err(InputError::TitleSexMismatch {
                title: self.title,
                sex: self.sex,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    StratumOutOfRange(u8),
    FareOutOfRange(f64),
    AgeOutOfRange(u8),
    SiblingsOutOfRange(u8),
    ParentsOutOfRange(u8),
    TitleSexMismatch { title: Title, sex: Sex },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StratumOutOfRange(v) => write!(f, "stratum {v} not in 1-6"),
            Self::FareOutOfRange(v) => write!(f, "fare {v} not in 0.0-600.0"),
            Self::AgeOutOfRange(v) => write!(f, "age {v} not in 0-100"),
            Self::SiblingsOutOfRange(v) => {
                write!(f, "siblings/spouses count {v} not in 0-10")
            }
            Self::ParentsOutOfRange(v) => {
                write!(f, "parents/children count {v} not in 0-10")
            }
            Self::TitleSexMismatch { title, sex } => {
                write!(
                    f,
                    "title {} not valid for sex {}",
                    title.as_str(),
                    sex.as_str()
                )
            }
        }
    }
}

impl std::error::Error for InputError {}
