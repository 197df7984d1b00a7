use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColourMapKinds {
    #[default]
    HueCycle,
    FireGradient,
    BlueWhiteGradient,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour map '{0}', expected one of: hue-cycle, fire-gradient, blue-white-gradient")]
pub struct UnknownColourMapKind(pub String);

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::HueCycle, Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HueCycle => "Hue cycle",
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::HueCycle => "hue-cycle",
            Self::FireGradient => "fire-gradient",
            Self::BlueWhiteGradient => "blue-white-gradient",
        }
    }
}

impl std::fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourMapKinds {
    type Err = UnknownColourMapKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug() == normalised)
            .ok_or_else(|| UnknownColourMapKind(value.to_string()))
    }
}
