// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Precomposed copy for the static tabs, plus the actions their buttons
//! trigger. Nothing here changes at runtime.

use crate::TabKind;

pub const BRAND_MARK: &str = "HRS";
pub const COMPANY_NAME: &str = "Home Renovation Solutions";
pub const TAGLINE: &str = "Kitchens • Baths • Appliances • Design";
pub const FOOTER_LINKS: [&str; 3] = ["Privacy", "Terms", "Employee Login (placeholder)"];
pub const FAQ_DISPLAY_LIMIT: usize = 12;
pub const INVENTORY_NOTE: &str =
    "Dataset imported from HRS-Inventory-List-1.xlsx. Toggle pricing for public vs. internal view.";
pub const FAQ_NOTE: &str = "Full FAQ content sourced from HDS-FAQs.docx.";
pub const CONTACT_NOTE: &str =
    "This is a static form placeholder. Connect to your backend/email later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTarget {
    OpenTab(TabKind),
    SearchInventory(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub target: ActionTarget,
}

impl Action {
    const fn open(label: &'static str, tab: TabKind) -> Self {
        Self {
            label,
            target: ActionTarget::OpenTab(tab),
        }
    }

    const fn search(label: &'static str) -> Self {
        Self {
            label,
            target: ActionTarget::SearchInventory(label),
        }
    }
}

pub const REQUEST_CONSULT: Action = Action::open("Request a Consult", TabKind::Contact);

const HOME_ACTIONS: [Action; 2] = [
    Action::open("Browse Inventory", TabKind::Inventory),
    Action::open("Get a Quote", TabKind::Contact),
];

const CONSULT_ACTIONS: [Action; 1] = [Action::open("Schedule a Free Consult", TabKind::Contact)];

pub const PRODUCT_CATEGORIES: [Action; 5] = [
    Action::search("Appliances"),
    Action::search("Cabinets"),
    Action::search("Lighting"),
    Action::search("Plumbing"),
    Action::search("Countertops & Tile"),
];

pub const FEATURED_BRANDS: [Action; 8] = [
    Action::search("GE"),
    Action::search("Bosch"),
    Action::search("Sub-Zero"),
    Action::search("Viking"),
    Action::search("Miele"),
    Action::search("Jenn-Air"),
    Action::search("Thermador"),
    Action::search("Amana"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Steps(&'static [&'static str]),
    Chips(&'static [Action]),
    Buttons(&'static [Action]),
    Note(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub blocks: &'static [ContentBlock],
}

const HOME: &[Section] = &[
    Section {
        title: "Design • Build • Install",
        blocks: &[
            ContentBlock::Paragraph(
                "We specialize in kitchen and bath remodels across Phoenix, Scottsdale, Tucson, Las Vegas, and Albuquerque. Explore appliances, cabinets, lighting, and fixtures, all in one place.",
            ),
            ContentBlock::Buttons(&HOME_ACTIONS),
        ],
    },
    Section {
        title: "Project Portal (coming soon)",
        blocks: &[ContentBlock::Paragraph(
            "Customers will be able to view estimates, invoices, schedules, and delivery windows here.",
        )],
    },
];

const SERVICES: &[Section] = &[
    Section {
        title: "Remodeling & Trades",
        blocks: &[
            ContentBlock::Bullets(&[
                "Full-service kitchen & bath design",
                "Cabinet installation & refacing",
                "Plumbing & electrical coordination",
                "Delivery & on-site installation",
            ]),
            ContentBlock::Note(
                "Pricing, minimums, and service descriptions will map to your FAQ and fee schedule.",
            ),
        ],
    },
    Section {
        title: "How It Works",
        blocks: &[
            ContentBlock::Steps(&[
                "Initial consult & measurements",
                "Design proposal & product selection",
                "Order, delivery scheduling, and installation",
                "Final walkthrough",
            ]),
            ContentBlock::Buttons(&CONSULT_ACTIONS),
        ],
    },
];

const PRODUCTS: &[Section] = &[
    Section {
        title: "Product Categories",
        blocks: &[
            ContentBlock::Buttons(&PRODUCT_CATEGORIES),
            ContentBlock::Note(
                "Link each category to brand pages and external manufacturer sites.",
            ),
        ],
    },
    Section {
        title: "Featured Brands",
        blocks: &[ContentBlock::Chips(&FEATURED_BRANDS)],
    },
];

const INVENTORY: &[Section] = &[Section {
    title: "Available Inventory",
    blocks: &[ContentBlock::Note(INVENTORY_NOTE)],
}];

const FAQ: &[Section] = &[Section {
    title: "Frequently Asked Questions",
    blocks: &[ContentBlock::Note(FAQ_NOTE)],
}];

const LOCATIONS: &[Section] = &[Section {
    title: "Showrooms & Service Areas",
    blocks: &[ContentBlock::Bullets(&[
        "Phoenix (HQ) – 101 Sedalia Dr, Phoenix, AZ 85001",
        "Scottsdale – 901 S. Sedona Way, Scottsdale, AZ",
        "Tucson – 8023 Sedalia Dr, Tucson, AZ",
        "Las Vegas – Elite Home Renovations",
        "Albuquerque – IRB Home Supply",
    ])],
}];

const CONTACT: &[Section] = &[Section {
    title: "Contact Us",
    blocks: &[ContentBlock::Note(CONTACT_NOTE)],
}];

const ABOUT: &[Section] = &[Section {
    title: "About HRS",
    blocks: &[ContentBlock::Paragraph(
        "Founded in 2007, HRS provides kitchen and bath design, showroom product selection, delivery, and installation across the Southwest. Our teams include certified designers and experienced installers focused on quality and schedule.",
    )],
}];

pub const fn sections_for(tab: TabKind) -> &'static [Section] {
    match tab {
        TabKind::Home => HOME,
        TabKind::Services => SERVICES,
        TabKind::Products => PRODUCTS,
        TabKind::Inventory => INVENTORY,
        TabKind::Faq => FAQ,
        TabKind::Locations => LOCATIONS,
        TabKind::Contact => CONTACT,
        TabKind::About => ABOUT,
    }
}

/// Buttons and chips on a tab, in reading order.
pub fn actions_for(tab: TabKind) -> Vec<Action> {
    sections_for(tab)
        .iter()
        .flat_map(|section| section.blocks.iter())
        .filter_map(|block| match block {
            ContentBlock::Buttons(actions) | ContentBlock::Chips(actions) => Some(*actions),
            _ => None,
        })
        .flatten()
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        ActionTarget, ContentBlock, FEATURED_BRANDS, PRODUCT_CATEGORIES, actions_for,
        sections_for,
    };
    use crate::TabKind;

    #[test]
    fn every_tab_has_a_titled_section() {
        for tab in TabKind::ALL {
            let sections = sections_for(tab);
            assert!(!sections.is_empty(), "{tab:?}");
            assert!(sections.iter().all(|section| !section.title.is_empty()));
        }
    }

    #[test]
    fn home_actions_open_inventory_and_contact() {
        let actions = actions_for(TabKind::Home);
        let targets = actions
            .iter()
            .map(|action| action.target)
            .collect::<Vec<_>>();
        assert_eq!(
            targets,
            vec![
                ActionTarget::OpenTab(TabKind::Inventory),
                ActionTarget::OpenTab(TabKind::Contact),
            ]
        );
    }

    #[test]
    fn product_actions_search_for_their_label() {
        let actions = actions_for(TabKind::Products);
        assert_eq!(
            actions.len(),
            PRODUCT_CATEGORIES.len() + FEATURED_BRANDS.len()
        );
        for action in actions {
            assert_eq!(action.target, ActionTarget::SearchInventory(action.label));
        }
    }

    #[test]
    fn static_only_tabs_have_no_actions() {
        for tab in [TabKind::Locations, TabKind::About, TabKind::Faq] {
            assert!(actions_for(tab).is_empty(), "{tab:?}");
        }
    }

    #[test]
    fn how_it_works_lists_four_steps() {
        let steps = sections_for(TabKind::Services)
            .iter()
            .flat_map(|section| section.blocks.iter())
            .find_map(|block| match block {
                ContentBlock::Steps(steps) => Some(*steps),
                _ => None,
            })
            .expect("services steps");
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[3], "Final walkthrough");
    }
}
