//! # Sales Aggregation
//!
//! Sums purchased quantities per product and answers two questions about the
//! result: which product sold the most, and how total units split across
//! products.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sales Aggregation                                    │
//! │                                                                         │
//! │  order_products ⋈ products  (ecom-db)                                  │
//! │       │  ("Laptop", Some(1)), ("Keyboard", Some(1)), ("Laptop", None)   │
//! │       ▼                                                                 │
//! │  SalesTotals::from_rows ← None is skipped, Some(q) is summed           │
//! │       │  { "Keyboard": 1, "Laptop": 1 }   (sorted by name)             │
//! │       │                                                                 │
//! │       ├──► best_seller()   → BestSeller { "Keyboard", 1 }              │
//! │       │                      (tie → smallest name)                     │
//! │       │                                                                 │
//! │       └──► distribution()  → [SalesShare { "Keyboard", 1, 50.0 }, ...] │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tie-Break
//! When several products share the highest total, the one whose name sorts
//! first (byte-wise, `str` ordering) is the best seller. Callers can rely on
//! this; it does not depend on row order from the store.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Totals
// =============================================================================

/// Total purchased quantity per product name.
///
/// Backed by a sorted map so every iteration (and therefore the tie-break and
/// the distribution order) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SalesTotals {
    totals: BTreeMap<String, i64>,
}

impl SalesTotals {
    /// Creates an empty set of totals.
    pub fn new() -> Self {
        SalesTotals::default()
    }

    /// Aggregates `(product name, quantity)` rows.
    ///
    /// ## Example
    /// ```rust
    /// use ecom_core::sales::SalesTotals;
    ///
    /// let totals = SalesTotals::from_rows([("A", Some(2)), ("B", Some(1)), ("A", Some(3))]).unwrap();
    /// assert_eq!(totals.get("A"), Some(5));
    /// assert_eq!(totals.get("B"), Some(1));
    /// ```
    ///
    /// ## Errors
    /// - [`CoreError::NegativeQuantity`] if a row carries a quantity below zero
    /// - [`CoreError::QuantityOverflow`] if a product's total exceeds `i64`
    pub fn from_rows<I, S>(rows: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (S, Option<i64>)>,
        S: Into<String>,
    {
        let mut totals = SalesTotals::new();
        for (name, quantity) in rows {
            totals.record(name, quantity)?;
        }
        Ok(totals)
    }

    /// Adds one association row to the totals.
    ///
    /// A `None` quantity contributes nothing and does not create an entry.
    pub fn record(&mut self, name: impl Into<String>, quantity: Option<i64>) -> CoreResult<()> {
        let Some(quantity) = quantity else {
            return Ok(());
        };

        let name = name.into();

        if quantity < 0 {
            return Err(CoreError::NegativeQuantity {
                product: name,
                quantity,
            });
        }

        match self.totals.get_mut(&name) {
            Some(total) => {
                *total = total
                    .checked_add(quantity)
                    .ok_or_else(|| CoreError::QuantityOverflow {
                        product: name.clone(),
                    })?;
            }
            None => {
                self.totals.insert(name, quantity);
            }
        }

        Ok(())
    }

    /// Total units for one product, if it was purchased at all.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.totals.get(name).copied()
    }

    /// Number of distinct products with at least one counted row.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Iterates `(name, units)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.totals.iter().map(|(name, units)| (name.as_str(), *units))
    }

    /// Sum of units across all products, saturating at `i64::MAX`.
    pub fn total_units(&self) -> i64 {
        self.totals
            .values()
            .fold(0i64, |acc, units| acc.saturating_add(*units))
    }

    /// Returns the product with the highest total, or `None` when nothing was
    /// purchased.
    ///
    /// Ties go to the name that sorts first.
    ///
    /// ## Example
    /// ```rust
    /// use ecom_core::sales::SalesTotals;
    ///
    /// let totals = SalesTotals::from_rows([("Mouse", Some(2)), ("Cable", Some(2))]).unwrap();
    /// assert_eq!(totals.best_seller().unwrap().name, "Cable");
    ///
    /// assert!(SalesTotals::new().best_seller().is_none());
    /// ```
    pub fn best_seller(&self) -> Option<BestSeller> {
        // Strictly-greater comparison keeps the first (smallest) name on ties.
        let mut best: Option<(&String, i64)> = None;
        for (name, &units) in &self.totals {
            match best {
                Some((_, top)) if units <= top => {}
                _ => best = Some((name, units)),
            }
        }

        best.map(|(name, units)| BestSeller {
            name: name.clone(),
            units,
        })
    }

    /// Splits total units into per-product shares.
    ///
    /// Shares are ordered by units descending, then by name. Returns an empty
    /// list when there is nothing to show (no products, or zero units in
    /// total).
    pub fn distribution(&self) -> Vec<SalesShare> {
        let total = self.total_units();
        if total == 0 {
            return Vec::new();
        }

        let mut shares: Vec<SalesShare> = self
            .iter()
            .map(|(name, units)| SalesShare {
                name: name.to_string(),
                units,
                percent: units as f64 * 100.0 / total as f64,
            })
            .collect();

        // Stable sort keeps name order among equal unit counts.
        shares.sort_by(|a, b| b.units.cmp(&a.units));
        shares
    }
}

// =============================================================================
// Results
// =============================================================================

/// The product with the highest total purchased quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestSeller {
    pub name: String,
    pub units: i64,
}

/// One product's slice of the sales distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesShare {
    pub name: String,
    pub units: i64,
    /// Share of all units, 0.0..=100.0.
    pub percent: f64,
}

impl SalesShare {
    /// Percentage with one decimal place, e.g. `"30.8%"`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
