use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerSegment {
    Premium,
    Regular,
    Budget,
}

impl CustomerSegment {
    pub const ALL: [CustomerSegment; 3] = [
        CustomerSegment::Premium,
        CustomerSegment::Regular,
        CustomerSegment::Budget,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerSegment::Premium => "Premium",
            CustomerSegment::Regular => "Regular",
            CustomerSegment::Budget => "Budget",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.display_name() == name)
    }
}

impl fmt::Display for CustomerSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
