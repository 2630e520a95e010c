use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Ancestral genomes offered by the resurrection chamber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Species {
    #[default]
    WoollyMammoth,
    StellersSeaCow,
    DodoBird,
    Utahraptor,
    AncientLeviathan,
    /// Any free-text label outside the catalogue
    Other(String),
}

impl Species {
    /// The catalogued species, in display order.
    pub fn catalogue() -> [Species; 5] {
        [
            Species::WoollyMammoth,
            Species::StellersSeaCow,
            Species::DodoBird,
            Species::Utahraptor,
            Species::AncientLeviathan,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            Species::WoollyMammoth => "Woolly Mammoth",
            Species::StellersSeaCow => "Steller's Sea Cow",
            Species::DodoBird => "Dodo Bird",
            Species::Utahraptor => "Utahraptor",
            Species::AncientLeviathan => "Ancient Leviathan",
            Species::Other(name) => name,
        }
    }

    pub fn is_catalogued(&self) -> bool {
        !matches!(self, Species::Other(_))
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for Species {
    /// Catalogue names match case-insensitively; anything else is kept as-is.
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        Species::catalogue()
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Species::Other(trimmed.to_string()))
    }
}

impl From<String> for Species {
    fn from(value: String) -> Self {
        Species::from(value.as_str())
    }
}

impl From<Species> for String {
    fn from(value: Species) -> Self {
        value.name().to_string()
    }
}
