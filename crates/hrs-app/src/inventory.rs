// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::Serialize;
use std::sync::Arc;

use crate::{InventoryRecord, format_micros, format_optional_micros};

pub const TOTALS_LABEL: &str = "Totals (filtered)";
pub const TEXT_COLUMNS: [&str; 4] = ["Model#", "Serial#", "Brand", "Description"];
pub const PRICE_COLUMNS: [&str; 2] = ["Cost", "List Price"];

/// Sums of the unrounded prices, in millionths of a dollar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InventoryTotals {
    pub cost_micros: i64,
    pub list_price_micros: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    SetQuery(String),
    ClearQuery,
    TogglePrices,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    QueryChanged { query: String, matches: usize },
    PricesVisibilityChanged(bool),
}

/// Searchable view over the immutable inventory dataset.
///
/// The filtered subset and totals are recomputed synchronously on every
/// query change, so the accessors always agree with `query_text`.
#[derive(Debug, Clone)]
pub struct InventoryView {
    records: Arc<[InventoryRecord]>,
    query_text: String,
    prices_visible: bool,
    filtered: Vec<usize>,
    totals: InventoryTotals,
}

/// Read-only state handed to the presentation layer after each change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySnapshot<'a> {
    pub query: &'a str,
    pub records: Vec<&'a InventoryRecord>,
    pub totals: InventoryTotals,
    pub prices_visible: bool,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub totals: Option<InventoryTotalsRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryTotalsRow {
    pub label: &'static str,
    pub cost: String,
    pub list_price: String,
}

impl InventoryView {
    pub fn new(records: Arc<[InventoryRecord]>, prices_visible: bool) -> Self {
        let filtered = (0..records.len()).collect::<Vec<_>>();
        let totals = compute_totals(records.iter());
        Self {
            records,
            query_text: String::new(),
            prices_visible,
            filtered,
            totals,
        }
    }

    pub fn dispatch(&mut self, command: InventoryCommand) -> Vec<InventoryEvent> {
        match command {
            InventoryCommand::SetQuery(text) => self.set_query_text(text),
            InventoryCommand::ClearQuery => self.clear_query(),
            InventoryCommand::TogglePrices => self.toggle_prices_visible(),
        }
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) -> Vec<InventoryEvent> {
        let text = text.into();
        if text == self.query_text {
            return Vec::new();
        }

        self.query_text = text;
        self.recompute();
        tracing::debug!(
            query = self.query_text.as_str(),
            matches = self.filtered.len(),
            "inventory filter recomputed"
        );
        vec![InventoryEvent::QueryChanged {
            query: self.query_text.clone(),
            matches: self.filtered.len(),
        }]
    }

    pub fn clear_query(&mut self) -> Vec<InventoryEvent> {
        self.set_query_text(String::new())
    }

    pub fn push_query_char(&mut self, ch: char) -> Vec<InventoryEvent> {
        let mut next = self.query_text.clone();
        next.push(ch);
        self.set_query_text(next)
    }

    pub fn pop_query_char(&mut self) -> Vec<InventoryEvent> {
        let mut next = self.query_text.clone();
        if next.pop().is_none() {
            return Vec::new();
        }
        self.set_query_text(next)
    }

    pub fn toggle_prices_visible(&mut self) -> Vec<InventoryEvent> {
        self.prices_visible = !self.prices_visible;
        vec![InventoryEvent::PricesVisibilityChanged(self.prices_visible)]
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn prices_visible(&self) -> bool {
        self.prices_visible
    }

    pub fn totals(&self) -> InventoryTotals {
        self.totals
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn match_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered_records(&self) -> Vec<&InventoryRecord> {
        self.filtered
            .iter()
            .filter_map(|index| self.records.get(*index))
            .collect()
    }

    pub fn snapshot(&self) -> InventorySnapshot<'_> {
        InventorySnapshot {
            query: &self.query_text,
            records: self.filtered_records(),
            totals: self.totals,
            prices_visible: self.prices_visible,
            total_count: self.records.len(),
        }
    }

    fn recompute(&mut self) {
        self.filtered = filter_records(&self.records, &self.query_text);
        self.totals = compute_totals(
            self.filtered
                .iter()
                .filter_map(|index| self.records.get(*index)),
        );
    }
}

/// Indices of the records whose text fields contain `query`, ignoring case,
/// in dataset order. An empty query matches every record.
pub fn filter_records(records: &[InventoryRecord], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, &needle))
        .map(|(index, _)| index)
        .collect()
}

/// `lowered_query` must already be lowercased.
pub fn record_matches(record: &InventoryRecord, lowered_query: &str) -> bool {
    if lowered_query.is_empty() {
        return true;
    }
    [
        &record.model,
        &record.serial,
        &record.brand,
        &record.description,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(lowered_query))
}

pub fn compute_totals<'a, I>(records: I) -> InventoryTotals
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    records
        .into_iter()
        .fold(InventoryTotals::default(), |totals, record| InventoryTotals {
            cost_micros: totals
                .cost_micros
                .saturating_add(record.cost_micros.unwrap_or(0)),
            list_price_micros: totals
                .list_price_micros
                .saturating_add(record.list_price_micros.unwrap_or(0)),
        })
}

pub fn table_model(snapshot: &InventorySnapshot<'_>) -> InventoryTable {
    let mut columns = TEXT_COLUMNS.to_vec();
    if snapshot.prices_visible {
        columns.extend(PRICE_COLUMNS);
    }

    let rows = snapshot
        .records
        .iter()
        .map(|record| {
            let mut row = vec![
                record.model.clone(),
                record.serial.clone(),
                record.brand.clone(),
                record.description.clone(),
            ];
            if snapshot.prices_visible {
                row.push(format_optional_micros(record.cost_micros));
                row.push(format_optional_micros(record.list_price_micros));
            }
            row
        })
        .collect();

    let totals = snapshot.prices_visible.then(|| InventoryTotalsRow {
        label: TOTALS_LABEL,
        cost: format_micros(snapshot.totals.cost_micros),
        list_price: format_micros(snapshot.totals.list_price_micros),
    });

    InventoryTable {
        columns,
        rows,
        totals,
    }
}
