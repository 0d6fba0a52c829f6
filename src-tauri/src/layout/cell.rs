//! Grid cells and content categories
//!
//! A cell is derived state: blank padding, the category marker heading
//! a content column, or one segmented glyph unit.

use serde::{Deserialize, Deserializer, Serialize};

use crate::layout::segment::Unit;

/// Category of a content column, shown as the marker in cell 0.
///
/// Unknown tags from older stored documents deserialize to `Empty`, so
/// a bad category degrades to a blank marker instead of failing the
/// whole day's render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Handout,
    Homework,
    Normal,
    Contact,
    Belongings,
    Empty,
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Category::from_tag(&tag))
    }
}

impl Category {
    /// Resolve a stored tag, degrading unknown values to `Empty`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "handout" => Category::Handout,
            "homework" => Category::Homework,
            "normal" => Category::Normal,
            "contact" => Category::Contact,
            "belongings" => Category::Belongings,
            _ => Category::Empty,
        }
    }

    /// Marker glyph drawn in the header cell. `None` renders blank.
    pub fn marker_glyph(self) -> Option<char> {
        match self {
            Category::Handout => Some('お'),
            Category::Homework => Some('宿'),
            Category::Normal => Some('○'),
            Category::Contact => Some('連'),
            Category::Belongings => Some('持'),
            Category::Empty => None,
        }
    }

    /// Color token the renderer resolves for the marker background.
    pub fn color_token(self) -> Option<&'static str> {
        match self {
            Category::Handout => Some("marker-handout"),
            Category::Homework => Some("marker-homework"),
            Category::Normal => Some("marker-normal"),
            Category::Contact => Some("marker-contact"),
            Category::Belongings => Some("marker-belongings"),
            Category::Empty => None,
        }
    }
}

/// One cell of a notebook column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Padding with no content.
    Blank,
    /// Category marker heading a content column.
    Marker { category: Category },
    /// One segmented display unit.
    ///
    /// `paired` marks a two-digit unit rendered rotated horizontal;
    /// `upright` marks a single ASCII alphanumeric set upright inside
    /// the otherwise vertical flow.
    Glyph {
        text: String,
        paired: bool,
        upright: bool,
    },
}

impl Cell {
    pub fn glyph(unit: &Unit) -> Self {
        Cell::Glyph {
            text: unit.text.to_string(),
            paired: unit.paired,
            upright: unit.is_upright(),
        }
    }
}
