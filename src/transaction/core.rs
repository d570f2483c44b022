//! Defines the core data models for transactions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for transaction IDs.
///
/// IDs are millisecond timestamps, see [next_transaction_id].
pub type TransactionId = i64;

/// Transactions with a predicted confidence strictly above this value count as
/// categorized. A confidence of exactly 0.5 is uncategorized.
pub const CATEGORIZED_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Confidence above this value is shown with the "High" badge.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// The fixed set of labels the categorization service predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Bills,
    Shopping,
    Entertainment,
    WorkSupplies,
    Health,
    Other,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Shopping,
        Category::Entertainment,
        Category::WorkSupplies,
        Category::Health,
        Category::Other,
    ];

    /// The label used on the wire and in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::WorkSupplies => "Work Supplies",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    /// Parse a wire label, e.g. "Work Supplies".
    ///
    /// # Errors
    /// Returns [Error::UnknownCategory] if `label` is not one of the known labels.
    pub fn from_label(label: &str) -> Result<Self, Error> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .ok_or_else(|| Error::UnknownCategory(label.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Category {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::from_label(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_owned()
    }
}

/// An expense with a predicted and, once the user corrects it, an actual category.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, unique within the store.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent. Zero for entries that have not been priced yet.
    pub amount: f64,
    /// The category predicted by the categorization service.
    pub predicted_category: Category,
    /// How confident the categorization service was, in the range [0, 1].
    ///
    /// This is the model's original value and is never overwritten.
    pub predicted_confidence: f64,
    /// The category chosen by the user, if they corrected the prediction.
    pub actual_category: Option<Category>,
    /// Whether the user has recorded a correction.
    pub is_corrected: bool,
    /// When the transaction was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        description: &str,
        predicted_category: Category,
        predicted_confidence: f64,
    ) -> TransactionBuilder {
        TransactionBuilder {
            description: description.to_owned(),
            amount: 0.0,
            predicted_category,
            predicted_confidence,
        }
    }

    /// Whether the prediction is confident enough to count as categorized.
    pub fn is_categorized(&self) -> bool {
        self.predicted_confidence > CATEGORIZED_CONFIDENCE_THRESHOLD
    }

    /// The category to display: the correction if there is one, otherwise the prediction.
    pub fn effective_category(&self) -> Category {
        self.actual_category.unwrap_or(self.predicted_category)
    }

    /// Merge the fields set in `update` into this transaction.
    pub(crate) fn apply(&mut self, update: TransactionUpdate) {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(predicted_category) = update.predicted_category {
            self.predicted_category = predicted_category;
        }
        if let Some(actual_category) = update.actual_category {
            self.actual_category = Some(actual_category);
        }
        if let Some(is_corrected) = update.is_corrected {
            self.is_corrected = is_corrected;
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// New transactions start with an amount of zero and no correction. Call
/// [TransactionBuilder::finalize] with an ID and creation time to get the
/// [Transaction].
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    description: String,
    amount: f64,
    predicted_category: Category,
    predicted_confidence: f64,
}

impl TransactionBuilder {
    /// Set the amount for the transaction.
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Build the final [Transaction] instance.
    pub fn finalize(self, id: TransactionId, created_at: OffsetDateTime) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            predicted_category: self.predicted_category,
            predicted_confidence: self.predicted_confidence,
            actual_category: None,
            is_corrected: false,
            created_at,
        }
    }
}

/// The fields of a [Transaction] that may change after creation.
///
/// Fields left as `None` are not touched. The ID, predicted confidence and
/// creation time are fixed, so they have no counterpart here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub predicted_category: Option<Category>,
    pub actual_category: Option<Category>,
    pub is_corrected: Option<bool>,
}

impl TransactionUpdate {
    /// An update that records `category` as the user's correction.
    pub fn correction(category: Category) -> Self {
        Self {
            actual_category: Some(category),
            is_corrected: Some(true),
            ..Default::default()
        }
    }
}

/// The badge shown next to a transaction's confidence in the transactions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Map a confidence in [0, 1] to a badge.
    ///
    /// The Medium/Low boundary is [CATEGORIZED_CONFIDENCE_THRESHOLD], so a
    /// transaction counted as uncategorized always shows the Low badge.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceLevel::High
        } else if confidence > CATEGORIZED_CONFIDENCE_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// Get an ID for a new transaction.
///
/// The ID is the current Unix time in milliseconds, bumped past `latest_id`
/// so that two transactions created within the same millisecond still get
/// distinct IDs.
pub fn next_transaction_id(now: OffsetDateTime, latest_id: Option<TransactionId>) -> TransactionId {
    let millis = (now.unix_timestamp_nanos() / 1_000_000) as TransactionId;

    match latest_id {
        Some(latest_id) if latest_id >= millis => latest_id + 1,
        _ => millis,
    }
}

/// Format a confidence in [0, 1] as a whole-number percentage, e.g. "92%".
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{
        Category, ConfidenceLevel, Transaction, TransactionUpdate, format_confidence,
        next_transaction_id,
    };

    #[test]
    fn category_labels_round_trip_through_json() {
        let json = serde_json::to_string(&Category::WorkSupplies).unwrap();
        assert_eq!(json, "\"Work Supplies\"");

        let category: Category = serde_json::from_str("\"Work Supplies\"").unwrap();
        assert_eq!(category, Category::WorkSupplies);
    }

    #[test]
    fn unknown_category_label_fails_to_parse() {
        let result = serde_json::from_str::<Category>("\"Groceries\"");

        assert!(result.is_err());
    }

    #[test]
    fn builder_defaults_to_zero_amount_and_uncorrected() {
        let created_at = datetime!(2025-10-05 12:00 UTC);

        let transaction = Transaction::build("Starbucks coffee", Category::Food, 0.92)
            .finalize(1, created_at);

        assert_eq!(transaction.amount, 0.0);
        assert!(!transaction.is_corrected);
        assert_eq!(transaction.actual_category, None);
        assert_eq!(transaction.created_at, created_at);
    }

    #[test]
    fn apply_only_changes_given_fields() {
        let mut transaction = Transaction::build("Uber", Category::Transport, 0.81)
            .amount(23.5)
            .finalize(7, datetime!(2025-10-05 12:00 UTC));
        let original = transaction.clone();

        transaction.apply(TransactionUpdate::correction(Category::WorkSupplies));

        assert_eq!(transaction.actual_category, Some(Category::WorkSupplies));
        assert!(transaction.is_corrected);
        assert_eq!(transaction.description, original.description);
        assert_eq!(transaction.amount, original.amount);
        assert_eq!(transaction.predicted_category, original.predicted_category);
        assert_eq!(
            transaction.predicted_confidence,
            original.predicted_confidence
        );
    }

    #[test]
    fn confidence_badges_use_strict_thresholds() {
        assert_eq!(ConfidenceLevel::from_confidence(0.71), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(0.7), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.51), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.5), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_confidence(0.0), ConfidenceLevel::Low);
    }

    #[test]
    fn next_id_uses_timestamp_millis() {
        let now = datetime!(2025-10-05 12:00 UTC);
        let want = now.unix_timestamp() * 1000;

        assert_eq!(next_transaction_id(now, None), want);
        assert_eq!(next_transaction_id(now, Some(want - 5)), want);
    }

    #[test]
    fn next_id_is_bumped_past_latest_id() {
        let now = datetime!(2025-10-05 12:00 UTC);
        let millis = now.unix_timestamp() * 1000;

        assert_eq!(next_transaction_id(now, Some(millis)), millis + 1);
        assert_eq!(next_transaction_id(now, Some(millis + 10)), millis + 11);
    }

    #[test]
    fn confidence_is_formatted_as_whole_percentage() {
        assert_eq!(format_confidence(0.92), "92%");
        assert_eq!(format_confidence(0.0), "0%");
        assert_eq!(format_confidence(1.0), "100%");
    }
}
