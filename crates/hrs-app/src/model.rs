// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabKind {
    Home,
    Services,
    Products,
    Inventory,
    Faq,
    Locations,
    Contact,
    About,
}

impl TabKind {
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::Services,
        Self::Products,
        Self::Inventory,
        Self::Faq,
        Self::Locations,
        Self::Contact,
        Self::About,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Products => "products",
            Self::Inventory => "inventory",
            Self::Faq => "faq",
            Self::Locations => "locations",
            Self::Contact => "contact",
            Self::About => "about",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Self::Home),
            "services" => Some(Self::Services),
            "products" => Some(Self::Products),
            "inventory" => Some(Self::Inventory),
            "faq" | "faqs" => Some(Self::Faq),
            "locations" => Some(Self::Locations),
            "contact" => Some(Self::Contact),
            "about" => Some(Self::About),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Products => "Products",
            Self::Inventory => "Inventory",
            Self::Faq => "FAQs",
            Self::Locations => "Locations",
            Self::Contact => "Contact",
            Self::About => "About",
        }
    }

    pub fn position(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    Nav,
    Search,
    Contact,
}

/// One catalog item from the inventory dataset.
///
/// Text fields hold the string form of whatever the source carried; money
/// fields are millionths of a dollar and `None` when the source value was
/// missing or not numeric.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub model: String,
    pub serial: String,
    pub brand: String,
    pub description: String,
    pub cost_micros: Option<i64>,
    pub list_price_micros: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::TabKind;

    #[test]
    fn tab_parse_accepts_labels_and_keys() {
        for tab in TabKind::ALL {
            assert_eq!(TabKind::parse(tab.as_str()), Some(tab));
            assert_eq!(TabKind::parse(tab.label()), Some(tab));
        }
        assert_eq!(TabKind::parse("  Inventory "), Some(TabKind::Inventory));
        assert_eq!(TabKind::parse("dashboard"), None);
    }

    #[test]
    fn tab_position_follows_site_order() {
        assert_eq!(TabKind::Home.position(), 0);
        assert_eq!(TabKind::Inventory.position(), 3);
        assert_eq!(TabKind::About.position(), TabKind::ALL.len() - 1);
    }
}
