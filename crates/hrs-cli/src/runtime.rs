// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use hrs_app::{ContactField, ContactForm, ContactOutcome, FaqEntry, InventoryRecord};
use hrs_data::{Catalog, DatasetOrigin};
use std::sync::Arc;

pub struct CatalogRuntime<'a> {
    catalog: &'a Catalog,
    acknowledged_contacts: usize,
}

impl<'a> CatalogRuntime<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            acknowledged_contacts: 0,
        }
    }
}

impl hrs_tui::AppRuntime for CatalogRuntime<'_> {
    fn inventory(&self) -> Arc<[InventoryRecord]> {
        self.catalog.inventory()
    }

    fn faqs(&self) -> &[FaqEntry] {
        self.catalog.faqs()
    }

    fn dataset_label(&self) -> String {
        match self.catalog.inventory_origin() {
            DatasetOrigin::Bundled => "bundled dataset".to_owned(),
            DatasetOrigin::File(path) => path.display().to_string(),
        }
    }

    fn submit_contact(&mut self, form: &ContactForm) -> Result<ContactOutcome> {
        let outcome = form.send()?;
        self.acknowledged_contacts += 1;
        // Contact details stay out of the log.
        tracing::info!(
            project_type = form.input().value(ContactField::ProjectType),
            has_email = !form.input().email.trim().is_empty(),
            has_phone = !form.input().phone.trim().is_empty(),
            acknowledged = self.acknowledged_contacts,
            "contact form acknowledged; nothing sent"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogRuntime;
    use anyhow::Result;
    use hrs_app::{ContactForm, ContactOutcome, NOT_CONNECTED};
    use hrs_data::{Catalog, DatasetOrigin};
    use hrs_testkit::{sample_faqs, scenario_records};
    use hrs_tui::AppRuntime;
    use std::path::PathBuf;

    fn fixture_catalog(origin: DatasetOrigin) -> Catalog {
        Catalog::from_parts(
            scenario_records(),
            sample_faqs(2),
            origin,
            DatasetOrigin::Bundled,
        )
    }

    #[test]
    fn runtime_shares_catalog_records() {
        let catalog = fixture_catalog(DatasetOrigin::Bundled);
        let runtime = CatalogRuntime::new(&catalog);
        assert_eq!(runtime.inventory().len(), 2);
        assert_eq!(runtime.faqs().len(), 2);
        assert_eq!(runtime.dataset_label(), "bundled dataset");
    }

    #[test]
    fn dataset_label_names_override_file() {
        let catalog = fixture_catalog(DatasetOrigin::File(PathBuf::from("/srv/inventory.json")));
        let runtime = CatalogRuntime::new(&catalog);
        assert_eq!(runtime.dataset_label(), "/srv/inventory.json");
    }

    #[test]
    fn submit_contact_validates_and_never_sends() -> Result<()> {
        let catalog = fixture_catalog(DatasetOrigin::Bundled);
        let mut runtime = CatalogRuntime::new(&catalog);

        let mut form = ContactForm::default();
        assert!(runtime.submit_contact(&form).is_err());
        assert_eq!(runtime.acknowledged_contacts, 0);

        for ch in "Avery".chars() {
            form.push_char(ch);
        }
        form.move_field(2);
        for ch in "555-0100".chars() {
            form.push_char(ch);
        }
        let outcome = runtime.submit_contact(&form)?;
        assert_eq!(
            outcome,
            ContactOutcome::NotSent {
                reason: NOT_CONNECTED,
            }
        );
        assert_eq!(runtime.acknowledged_contacts, 1);
        Ok(())
    }
}
