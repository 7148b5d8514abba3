// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use hrs_app::{FaqEntry, InventoryRecord, cents_to_micros};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

const BRANDS: [&str; 14] = [
    "GE",
    "Bosch",
    "Sub-Zero",
    "Viking",
    "Miele",
    "Jenn-Air",
    "Thermador",
    "Amana",
    "Whirlpool",
    "KitchenAid",
    "Frigidaire",
    "Kohler",
    "Moen",
    "Delta",
];

const DESCRIPTIONS: [&str; 16] = [
    "French door refrigerator",
    "Built-in refrigerator",
    "Top control dishwasher",
    "Slide-in gas range",
    "Induction cooktop",
    "Wall oven, double",
    "Wall-mount range hood",
    "Over-the-range microwave",
    "Front-load washer",
    "Electric dryer",
    "Undermount kitchen sink",
    "Pull-down kitchen faucet",
    "Wine column",
    "Warming drawer",
    "Trash compactor",
    "Vanity faucet, brushed nickel",
];

const QUESTIONS: [(&str, &str); 4] = [
    (
        "Do you offer free estimates?",
        "Yes. An initial consult and measurements are free.",
    ),
    (
        "Which areas do you serve?",
        "Phoenix, Scottsdale, Tucson, Las Vegas, and Albuquerque.",
    ),
    (
        "Can I buy appliances without installation?",
        "Yes. Delivery-only orders are welcome.",
    ),
    (
        "How long does a kitchen remodel take?",
        "Most projects finish in six to ten weeks.",
    ),
];

pub fn record(
    model: &str,
    serial: &str,
    brand: &str,
    description: &str,
    cost_cents: Option<i64>,
    list_price_cents: Option<i64>,
) -> InventoryRecord {
    InventoryRecord {
        model: model.to_owned(),
        serial: serial.to_owned(),
        brand: brand.to_owned(),
        description: description.to_owned(),
        cost_micros: cost_cents.map(cents_to_micros),
        list_price_micros: list_price_cents.map(cents_to_micros),
    }
}

/// The two-row reference set: a GE fridge with both prices and a Bosch
/// oven with no cost.
pub fn scenario_records() -> Vec<InventoryRecord> {
    vec![
        record("A1", "S1", "GE", "Fridge", Some(50_000), Some(90_000)),
        record("B2", "S2", "Bosch", "Oven", None, Some(70_000)),
    ]
}

pub fn sample_faqs(count: usize) -> Vec<FaqEntry> {
    (0..count)
        .map(|index| {
            let (question, answer) = QUESTIONS[index % QUESTIONS.len()];
            FaqEntry {
                question: format!("{question} (#{})", index + 1),
                answer: answer.to_owned(),
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded generator for showroom inventory rows. The same seed always
/// yields the same rows.
#[derive(Debug, Clone)]
pub struct InventoryFaker {
    rng: DeterministicRng,
}

impl InventoryFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
        }
    }

    pub fn record(&mut self) -> InventoryRecord {
        let brand = self.pick(&BRANDS);
        let prefix = brand_prefix(brand);
        let cost_cents = self.int_range_i64(9_900, 1_200_000);
        let markup_percent = self.int_range_i64(20, 90);
        let list_price_cents = cost_cents + cost_cents * markup_percent / 100;

        InventoryRecord {
            model: format!("{prefix}{:04}", self.int_range_i64(100, 9_999)),
            serial: format!(
                "{prefix}-{:02}-{:06}",
                self.int_range_i64(0, 99),
                self.int_range_i64(0, 999_999)
            ),
            brand: brand.to_owned(),
            description: self.pick(&DESCRIPTIONS).to_owned(),
            // Roughly one row in eight is missing each price.
            cost_micros: (self.rng.int_n(8) != 0).then_some(cents_to_micros(cost_cents)),
            list_price_micros: (self.rng.int_n(8) != 0)
                .then_some(cents_to_micros(list_price_cents)),
        }
    }

    pub fn records(&mut self, count: usize) -> Vec<InventoryRecord> {
        (0..count).map(|_| self.record()).collect()
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn int_range_i64(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }
}

pub fn brand_prefix(brand: &str) -> String {
    brand
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// A record in the spreadsheet-export shape the loader reads.
pub fn source_row(record: &InventoryRecord) -> Value {
    json!({
        "Model#": record.model,
        "Serial#": record.serial,
        "Brand": record.brand,
        "Description": record.description,
        "Cost": record.cost_micros.map(micros_to_dollars),
        "List Price": record.list_price_micros.map(micros_to_dollars),
    })
}

pub fn faq_row(entry: &FaqEntry) -> Value {
    json!({
        "question": entry.question,
        "answer": entry.answer,
    })
}

pub fn temp_dataset_dir() -> Result<tempfile::TempDir> {
    tempfile::tempdir().context("create temp dataset dir")
}

pub fn write_inventory_file(dir: &Path, records: &[InventoryRecord]) -> Result<PathBuf> {
    let rows = records.iter().map(source_row).collect::<Vec<_>>();
    write_json(dir.join("inventory.json"), &Value::Array(rows))
}

pub fn write_faq_file(dir: &Path, entries: &[FaqEntry]) -> Result<PathBuf> {
    let rows = entries.iter().map(faq_row).collect::<Vec<_>>();
    write_json(dir.join("faqs.json"), &Value::Array(rows))
}

pub fn write_json(path: PathBuf, value: &Value) -> Result<PathBuf> {
    let raw = serde_json::to_string_pretty(value).context("encode fixture json")?;
    std::fs::write(&path, raw).with_context(|| format!("write fixture {}", path.display()))?;
    Ok(path)
}

fn micros_to_dollars(micros: i64) -> f64 {
    micros as f64 / 1_000_000.0
}
