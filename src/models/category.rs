//! Category model
//!
//! Categories are display labels for expenses. Color and icon are hints for
//! whoever renders them; nothing in the engine looks at them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Maximum category name length
pub const MAX_NAME_LEN: usize = 50;

/// Color used when none is given
pub const DEFAULT_COLOR: &str = "#6b7280";

/// Icon used when none is given
pub const DEFAULT_ICON: &str = "📝";

/// An expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name, unique among categories
    pub name: String,

    /// Display color (CSS hex)
    #[serde(default = "default_color")]
    pub color: String,

    /// Display icon
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Category {
    /// Create a new category with default display hints
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_display(name, DEFAULT_COLOR, DEFAULT_ICON)
    }

    /// Create a new category with explicit color and icon
    pub fn with_display(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into().trim().to_string(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

/// The six categories a fresh installation starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Food,
    Transport,
    Shopping,
    Culture,
    Medical,
    Other,
}

impl DefaultCategory {
    /// Get all default categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Culture,
            Self::Medical,
            Self::Other,
        ]
    }

    /// Get the name for this default category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Culture => "Culture",
            Self::Medical => "Medical",
            Self::Other => "Other",
        }
    }

    /// Display color
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#ef4444",
            Self::Transport => "#3b82f6",
            Self::Shopping => "#8b5cf6",
            Self::Culture => "#f59e0b",
            Self::Medical => "#10b981",
            Self::Other => "#6b7280",
        }
    }

    /// Display icon
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍽️",
            Self::Transport => "🚌",
            Self::Shopping => "🛍️",
            Self::Culture => "🎬",
            Self::Medical => "🏥",
            Self::Other => "📝",
        }
    }

    /// Create a Category from this default
    pub fn to_category(&self) -> Category {
        Category::with_display(self.name(), self.color(), self.icon())
    }

    /// The full seed set
    pub fn seed() -> Vec<Category> {
        Self::all().iter().map(Self::to_category).collect()
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::InvalidColor(color) => write!(f, "Invalid category color: {}", color),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
