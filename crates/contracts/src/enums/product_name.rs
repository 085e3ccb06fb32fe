use serde::{Deserialize, Serialize};
use std::fmt;

/// Product sold in an order.
///
/// Products are not tied to a [`super::Category`]: the generator draws both
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductName {
    #[serde(rename = "Wireless Headphones")]
    WirelessHeadphones,
    Smartphone,
    Laptop,
    #[serde(rename = "T-Shirt")]
    TShirt,
    Jeans,
    Dress,
    #[serde(rename = "Garden Tools")]
    GardenTools,
    Sofa,
    Lamp,
    Novel,
    Textbook,
    #[serde(rename = "Running Shoes")]
    RunningShoes,
    Bicycle,
    #[serde(rename = "Makeup Kit")]
    MakeupKit,
    #[serde(rename = "Skincare Set")]
    SkincareSet,
    #[serde(rename = "Action Figure")]
    ActionFigure,
    #[serde(rename = "Board Game")]
    BoardGame,
}

impl ProductName {
    pub const ALL: [ProductName; 17] = [
        ProductName::WirelessHeadphones,
        ProductName::Smartphone,
        ProductName::Laptop,
        ProductName::TShirt,
        ProductName::Jeans,
        ProductName::Dress,
        ProductName::GardenTools,
        ProductName::Sofa,
        ProductName::Lamp,
        ProductName::Novel,
        ProductName::Textbook,
        ProductName::RunningShoes,
        ProductName::Bicycle,
        ProductName::MakeupKit,
        ProductName::SkincareSet,
        ProductName::ActionFigure,
        ProductName::BoardGame,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductName::WirelessHeadphones => "Wireless Headphones",
            ProductName::Smartphone => "Smartphone",
            ProductName::Laptop => "Laptop",
            ProductName::TShirt => "T-Shirt",
            ProductName::Jeans => "Jeans",
            ProductName::Dress => "Dress",
            ProductName::GardenTools => "Garden Tools",
            ProductName::Sofa => "Sofa",
            ProductName::Lamp => "Lamp",
            ProductName::Novel => "Novel",
            ProductName::Textbook => "Textbook",
            ProductName::RunningShoes => "Running Shoes",
            ProductName::Bicycle => "Bicycle",
            ProductName::MakeupKit => "Makeup Kit",
            ProductName::SkincareSet => "Skincare Set",
            ProductName::ActionFigure => "Action Figure",
            ProductName::BoardGame => "Board Game",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.display_name() == name)
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
