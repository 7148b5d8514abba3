// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use hrs_app::{InventoryView, cents_to_micros, filter_records, format_micros, table_model};
use hrs_data::{
    Catalog, DatasetOrigin, DatasetSources, parse_faq_json, parse_inventory_json,
    validate_dataset_path,
};
use hrs_testkit::{
    InventoryFaker, sample_faqs, scenario_records, temp_dataset_dir, write_faq_file,
    write_inventory_file, write_json,
};
use serde_json::json;

#[test]
fn validate_dataset_path_rejects_uri_forms() {
    assert!(validate_dataset_path("").is_err());
    assert!(validate_dataset_path("   ").is_err());
    assert!(validate_dataset_path("file:inventory.json").is_err());
    assert!(validate_dataset_path("https://example.com/inventory.json").is_err());
    assert!(validate_dataset_path("/tmp/inventory.json").is_ok());
    assert!(validate_dataset_path("data/inventory.json").is_ok());
}

#[test]
fn bundled_catalog_loads() -> Result<()> {
    let catalog = Catalog::bundled()?;
    let summary = catalog.summary();

    assert_eq!(summary.records, 42);
    assert_eq!(summary.records_missing_cost, 4);
    assert_eq!(summary.records_missing_list_price, 3);
    assert_eq!(summary.faqs, 15);
    assert_eq!(summary.inventory_origin, DatasetOrigin::Bundled);
    assert!(summary.to_string().contains("42 records (bundled)"));
    Ok(())
}

#[test]
fn bundled_catalog_normalizes_loose_cells() -> Result<()> {
    let catalog = Catalog::bundled()?;
    let inventory = catalog.inventory();

    let sink = inventory
        .iter()
        .find(|record| record.brand == "Kohler" && record.model == "30210")
        .expect("numeric model number should load as text");
    assert_eq!(sink.serial, "881004");

    let oven = inventory
        .iter()
        .find(|record| record.model == "HBL8453UC")
        .expect("bosch wall oven");
    assert_eq!(oven.cost_micros, Some(cents_to_micros(184_900)));
    assert_eq!(oven.list_price_micros, Some(cents_to_micros(289_900)));

    let wine = inventory
        .iter()
        .find(|record| record.model == "DEC2450W")
        .expect("sub-zero wine column");
    assert_eq!(wine.cost_micros, None);
    assert_eq!(wine.list_price_micros, Some(cents_to_micros(889_500)));
    Ok(())
}

#[test]
fn bundled_catalog_searches_like_the_showroom() -> Result<()> {
    let catalog = Catalog::bundled()?;
    let mut view = InventoryView::new(catalog.inventory(), true);

    view.set_query_text("bosch");
    assert_eq!(view.match_count(), 4);
    // The refrigerator has no cost, so it adds nothing to the cost total.
    assert_eq!(
        format_micros(view.totals().cost_micros),
        "$4,247.00"
    );

    view.set_query_text("30210");
    assert_eq!(view.match_count(), 1);
    Ok(())
}

#[test]
fn load_reads_override_files() -> Result<()> {
    let dir = temp_dataset_dir()?;
    let inventory_path = write_inventory_file(dir.path(), &scenario_records())?;
    let faq_path = write_faq_file(dir.path(), &sample_faqs(3))?;

    let catalog = Catalog::load(&DatasetSources {
        inventory_path: Some(inventory_path.clone()),
        faq_path: Some(faq_path),
    })?;

    assert_eq!(catalog.inventory().as_ref(), scenario_records().as_slice());
    assert_eq!(catalog.faqs().len(), 3);
    assert_eq!(
        catalog.inventory_origin(),
        &DatasetOrigin::File(inventory_path)
    );
    Ok(())
}

#[test]
fn load_keeps_bundled_faqs_when_only_inventory_is_overridden() -> Result<()> {
    let dir = temp_dataset_dir()?;
    let records = InventoryFaker::new(5).records(25);
    let inventory_path = write_inventory_file(dir.path(), &records)?;

    let catalog = Catalog::load(&DatasetSources {
        inventory_path: Some(inventory_path),
        faq_path: None,
    })?;

    assert_eq!(catalog.inventory().len(), 25);
    assert_eq!(catalog.faqs().len(), Catalog::bundled()?.faqs().len());
    assert_eq!(catalog.summary().faq_origin, DatasetOrigin::Bundled);
    Ok(())
}

#[test]
fn load_reports_missing_file_with_hint() {
    let dir = temp_dataset_dir().expect("temp dir");
    let missing = dir.path().join("nope.json");
    let err = Catalog::load(&DatasetSources {
        inventory_path: Some(missing),
        faq_path: None,
    })
    .expect_err("missing file should fail");
    let message = format!("{err:#}");
    assert!(message.contains("nope.json"));
    assert!(message.contains("[data]"));
}

#[test]
fn load_rejects_malformed_inventory() -> Result<()> {
    let dir = temp_dataset_dir()?;
    let path = write_json(dir.path().join("inventory.json"), &json!({"Model#": "A1"}))?;

    let err = Catalog::load(&DatasetSources {
        inventory_path: Some(path),
        faq_path: None,
    })
    .expect_err("object instead of array should fail");
    assert!(format!("{err:#}").contains("JSON array"));
    Ok(())
}

#[test]
fn parse_inventory_tolerates_missing_columns() -> Result<()> {
    let records = parse_inventory_json(r#"[{"Brand": "GE"}, {}]"#)?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].brand, "GE");
    assert_eq!(records[0].model, "");
    assert_eq!(records[1].cost_micros, None);
    assert_eq!(records[1].list_price_micros, None);
    Ok(())
}

#[test]
fn parse_inventory_spells_float_identifiers_as_integers() -> Result<()> {
    let records = parse_inventory_json(r#"[{"Model#": 30210.0, "Serial#": 1e3, "Brand": 7.5}]"#)?;
    assert_eq!(records[0].model, "30210");
    assert_eq!(records[0].serial, "1000");
    assert_eq!(records[0].brand, "7.5");
    assert!(filter_records(&records, "0.").is_empty());
    assert_eq!(filter_records(&records, "30210"), vec![0]);
    Ok(())
}

#[test]
fn fractional_cent_costs_total_before_rounding() -> Result<()> {
    let records = parse_inventory_json(
        r#"[{"Model#": "T1", "Cost": 0.333}, {"Model#": "T2", "Cost": "0.333"}, {"Model#": "T3", "Cost": 0.333}]"#,
    )?;
    let view = InventoryView::new(records.into(), true);
    let table = table_model(&view.snapshot());
    assert_eq!(table.rows[0][4], "$0.33");
    assert_eq!(table.totals.map(|totals| totals.cost).as_deref(), Some("$1.00"));
    Ok(())
}

#[test]
fn parse_inventory_ignores_unknown_columns() -> Result<()> {
    let records = parse_inventory_json(
        r#"[{"Model#": "A1", "Serial#": "S1", "Brand": "GE", "Description": "Fridge", "Cost": 500, "List Price": 900, "Warehouse": "PHX"}]"#,
    )?;
    assert_eq!(records, scenario_records()[..1].to_vec());
    Ok(())
}

#[test]
fn parse_faq_json_fills_missing_fields() -> Result<()> {
    let faqs = parse_faq_json(r#"[{"question": "Hours?"}, {"answer": 42}]"#)?;
    assert_eq!(faqs[0].question, "Hours?");
    assert_eq!(faqs[0].answer, "");
    assert_eq!(faqs[1].answer, "42");
    Ok(())
}
