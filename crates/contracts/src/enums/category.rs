use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Books,
    Sports,
    Beauty,
    Toys,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Clothing,
        Category::HomeAndGarden,
        Category::Books,
        Category::Sports,
        Category::Beauty,
        Category::Toys,
    ];

    /// Human readable name, also used as the wire value
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::HomeAndGarden => "Home & Garden",
            Category::Books => "Books",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
            Category::Toys => "Toys",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.display_name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
