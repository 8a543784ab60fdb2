use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColourModes {
    BlackAndWhite,
    #[default]
    Original,
    ShadesOfGrey,
    Sky,
    Fire,
    Electrical,
    Gold,
}

impl ColourModes {
    pub const ALL: &'static [Self] = &[
        Self::BlackAndWhite,
        Self::Original,
        Self::ShadesOfGrey,
        Self::Sky,
        Self::Fire,
        Self::Electrical,
        Self::Gold,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BlackAndWhite => "Black and White",
            Self::Original => "Original",
            Self::ShadesOfGrey => "Shades of Grey",
            Self::Sky => "Sky",
            Self::Fire => "Fire",
            Self::Electrical => "Electrical",
            Self::Gold => "Gold",
        }
    }

    #[must_use]
    pub const fn shader_index(self) -> i32 {
        match self {
            Self::BlackAndWhite => 0,
            Self::Original => 1,
            Self::ShadesOfGrey => 2,
            Self::Sky => 3,
            Self::Fire => 4,
            Self::Electrical => 5,
            Self::Gold => 6,
        }
    }

    #[must_use]
    pub const fn config_name(self) -> &'static str {
        match self {
            Self::BlackAndWhite => "black_and_white",
            Self::Original => "original",
            Self::ShadesOfGrey => "shades_of_grey",
            Self::Sky => "sky",
            Self::Fire => "fire",
            Self::Electrical => "electrical",
            Self::Gold => "gold",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.config_name() == name)
    }
}

impl std::fmt::Display for ColourModes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
