// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod coerce;

use anyhow::{Context, Result, anyhow, bail};
use hrs_app::{FaqEntry, InventoryRecord};
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::coerce::{is_blank, micros_value, text_value};

pub const APP_NAME: &str = "hrs";

pub const BUNDLED_INVENTORY: &str = include_str!("../data/inventory.json");
pub const BUNDLED_FAQS: &str = include_str!("../data/faqs.json");

#[derive(Debug, Deserialize)]
struct SourceInventoryRow {
    #[serde(rename = "Model#", default)]
    model: Value,
    #[serde(rename = "Serial#", default)]
    serial: Value,
    #[serde(rename = "Brand", default)]
    brand: Value,
    #[serde(rename = "Description", default)]
    description: Value,
    #[serde(rename = "Cost", default)]
    cost: Value,
    #[serde(rename = "List Price", default)]
    list_price: Value,
}

#[derive(Debug, Deserialize)]
struct SourceFaqRow {
    #[serde(default)]
    question: Value,
    #[serde(default)]
    answer: Value,
}

/// Optional replacements for the bundled datasets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSources {
    pub inventory_path: Option<PathBuf>,
    pub faq_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for DatasetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything the site reads at startup. Built once and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    inventory: Arc<[InventoryRecord]>,
    faqs: Vec<FaqEntry>,
    inventory_origin: DatasetOrigin,
    faq_origin: DatasetOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub records: usize,
    pub records_missing_cost: usize,
    pub records_missing_list_price: usize,
    pub faqs: usize,
    pub inventory_origin: DatasetOrigin,
    pub faq_origin: DatasetOrigin,
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "inventory: {} records ({}) -- {} without cost, {} without list price",
            self.records,
            self.inventory_origin,
            self.records_missing_cost,
            self.records_missing_list_price
        )?;
        write!(f, "faqs: {} entries ({})", self.faqs, self.faq_origin)
    }
}

impl Catalog {
    pub fn bundled() -> Result<Self> {
        Self::load(&DatasetSources::default())
    }

    pub fn load(sources: &DatasetSources) -> Result<Self> {
        let (inventory, inventory_origin) = match &sources.inventory_path {
            Some(path) => (
                parse_inventory_json(&read_dataset(path)?)
                    .with_context(|| format!("parse inventory dataset {}", path.display()))?,
                DatasetOrigin::File(path.clone()),
            ),
            None => (
                parse_inventory_json(BUNDLED_INVENTORY).context("parse bundled inventory")?,
                DatasetOrigin::Bundled,
            ),
        };
        let (faqs, faq_origin) = match &sources.faq_path {
            Some(path) => (
                parse_faq_json(&read_dataset(path)?)
                    .with_context(|| format!("parse FAQ dataset {}", path.display()))?,
                DatasetOrigin::File(path.clone()),
            ),
            None => (
                parse_faq_json(BUNDLED_FAQS).context("parse bundled FAQs")?,
                DatasetOrigin::Bundled,
            ),
        };

        tracing::info!(
            records = inventory.len(),
            faqs = faqs.len(),
            inventory = %inventory_origin,
            faq = %faq_origin,
            "catalog loaded"
        );

        Ok(Self::from_parts(inventory, faqs, inventory_origin, faq_origin))
    }

    pub fn from_parts(
        inventory: Vec<InventoryRecord>,
        faqs: Vec<FaqEntry>,
        inventory_origin: DatasetOrigin,
        faq_origin: DatasetOrigin,
    ) -> Self {
        Self {
            inventory: Arc::from(inventory),
            faqs,
            inventory_origin,
            faq_origin,
        }
    }

    /// Shared handle to the records; cloning it never copies rows.
    pub fn inventory(&self) -> Arc<[InventoryRecord]> {
        Arc::clone(&self.inventory)
    }

    pub fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    pub fn inventory_origin(&self) -> &DatasetOrigin {
        &self.inventory_origin
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            records: self.inventory.len(),
            records_missing_cost: self
                .inventory
                .iter()
                .filter(|record| record.cost_micros.is_none())
                .count(),
            records_missing_list_price: self
                .inventory
                .iter()
                .filter(|record| record.list_price_micros.is_none())
                .count(),
            faqs: self.faqs.len(),
            inventory_origin: self.inventory_origin.clone(),
            faq_origin: self.faq_origin.clone(),
        }
    }
}

pub fn parse_inventory_json(raw: &str) -> Result<Vec<InventoryRecord>> {
    let rows: Vec<SourceInventoryRow> = serde_json::from_str(raw)
        .context("inventory must be a JSON array of objects with Model#, Serial#, Brand, Description, Cost, List Price")?;

    Ok(rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let record = InventoryRecord {
                model: text_value(&row.model),
                serial: text_value(&row.serial),
                brand: text_value(&row.brand),
                description: text_value(&row.description),
                cost_micros: micros_value(&row.cost),
                list_price_micros: micros_value(&row.list_price),
            };
            warn_on_dropped_price(index, "Cost", &row.cost, record.cost_micros);
            warn_on_dropped_price(index, "List Price", &row.list_price, record.list_price_micros);
            record
        })
        .collect())
}

pub fn parse_faq_json(raw: &str) -> Result<Vec<FaqEntry>> {
    let rows: Vec<SourceFaqRow> = serde_json::from_str(raw)
        .context("FAQs must be a JSON array of objects with question and answer")?;
    Ok(rows
        .iter()
        .map(|row| FaqEntry {
            question: text_value(&row.question),
            answer: text_value(&row.answer),
        })
        .collect())
}

fn warn_on_dropped_price(row: usize, field: &str, value: &Value, micros: Option<i64>) {
    if micros.is_none() && !is_blank(value) {
        tracing::warn!(row, field, value = %value, "non-numeric price treated as missing");
    }
}

fn read_dataset(path: &Path) -> Result<String> {
    validate_dataset_path(&path.to_string_lossy())?;
    fs::read_to_string(path).with_context(|| {
        format!(
            "read dataset {} -- check [data] paths in the config or remove them to use the bundled data",
            path.display()
        )
    })
}

pub fn validate_dataset_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        bail!("dataset path must not be empty");
    }

    if let Some(index) = path.find("://")
        && index > 0
    {
        let scheme = &path[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "dataset path {path:?} looks like a URI ({scheme}://); datasets are read from local files only"
            );
        }
    }

    if path.starts_with("file:") {
        bail!("dataset path {path:?} uses file: URI syntax; pass a plain filesystem path");
    }

    Ok(())
}

pub fn default_log_path() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("HRS_LOG_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set HRS_LOG_PATH or [log].file to a writable path")
    })?;

    let app_dir = data_root.join(APP_NAME);
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("create data directory {}", app_dir.display()))?;
    Ok(app_dir.join("hrs.log"))
}
