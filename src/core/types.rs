use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Capture-device protocols, in query order
pub const PROTOCOLS: [&str; 4] = ["Biometrika", "CrossMatch", "Italdata", "Swipe"];

/// Train/test groups, in query order
pub const GROUPS: [&str; 2] = ["train", "test"];

/// Sample classes, in query order
pub const CLASSES: [&str; 2] = ["live", "spoof"];

/// Error returned when a string is not one of the fixed enumeration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {parameter} \"{value}\". Valid values are {}, or lists of those", .valid.join(", "))]
pub struct UnknownValue {
    pub parameter: &'static str,
    pub value: String,
    pub valid: &'static [&'static str],
}

/// Capture device a sample was acquired with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    Biometrika,
    CrossMatch,
    Italdata,
    Swipe,
}

impl Protocol {
    pub const ALL: [Self; 4] = [Self::Biometrika, Self::CrossMatch, Self::Italdata, Self::Swipe];

    /// Directory name used on disk
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Biometrika => PROTOCOLS[0],
            Self::CrossMatch => PROTOCOLS[1],
            Self::Italdata => PROTOCOLS[2],
            Self::Swipe => PROTOCOLS[3],
        }
    }
}

/// Train/test split designator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Train,
    Test,
}

impl Group {
    pub const ALL: [Self; 2] = [Self::Train, Self::Test];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Train => GROUPS[0],
            Self::Test => GROUPS[1],
        }
    }
}

/// Live or spoof (fake) sample label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Class {
    Live,
    Spoof,
}

impl Class {
    pub const ALL: [Self; 2] = [Self::Live, Self::Spoof];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => CLASSES[0],
            Self::Spoof => CLASSES[1],
        }
    }
}

/// Shared plumbing for the three fixed enumerations
pub trait Enumeration: Copy + Sized + 'static {
    /// Parameter name used in error messages
    const PARAMETER: &'static str;

    /// On-disk spellings, in the same order as `variants()`
    const VALID: &'static [&'static str];

    fn variants() -> &'static [Self];

    /// Match `value` exactly against the on-disk spellings.
    ///
    /// # Errors
    ///
    /// Returns `UnknownValue` naming the parameter and the legal set.
    fn parse_value(value: &str) -> Result<Self, UnknownValue> {
        Self::VALID
            .iter()
            .position(|v| *v == value)
            .map(|idx| Self::variants()[idx])
            .ok_or_else(|| UnknownValue {
                parameter: Self::PARAMETER,
                value: value.to_string(),
                valid: Self::VALID,
            })
    }
}

impl Enumeration for Protocol {
    const PARAMETER: &'static str = "protocol";
    const VALID: &'static [&'static str] = &PROTOCOLS;

    fn variants() -> &'static [Self] {
        &Self::ALL
    }
}

impl Enumeration for Group {
    const PARAMETER: &'static str = "group";
    const VALID: &'static [&'static str] = &GROUPS;

    fn variants() -> &'static [Self] {
        &Self::ALL
    }
}

impl Enumeration for Class {
    const PARAMETER: &'static str = "class";
    const VALID: &'static [&'static str] = &CLASSES;

    fn variants() -> &'static [Self] {
        &Self::ALL
    }
}

macro_rules! impl_display_from_str {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownValue;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::parse_value(s)
                }
            }
        )*
    };
}

impl_display_from_str!(Protocol, Group, Class);
