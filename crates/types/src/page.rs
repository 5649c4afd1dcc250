use crate::units::mm_to_points;
use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Physical page size of the generated document, portrait orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f64, height: f64 },
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions_pt(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (mm_to_points(210.0), mm_to_points(297.0)),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn width_pt(&self) -> f64 {
        self.dimensions_pt().0
    }

    pub fn height_pt(&self) -> f64 {
        self.dimensions_pt().1
    }
}

pub const DEFAULT_PAGE_MARGIN_PT: f64 = 36.0;
pub const DEFAULT_HEADER_PT: f64 = 24.0;

/// Page geometry for the printed document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub size: PageSize,
    /// Margin on every side, in points.
    pub margin_pt: f64,
    /// Extra space reserved below the top margin for the title, in points.
    pub header_pt: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margin_pt: DEFAULT_PAGE_MARGIN_PT,
            header_pt: DEFAULT_HEADER_PT,
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f64, height: f64 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => s.parse().map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}
