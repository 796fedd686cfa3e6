//! Generic record sort keyed by a field name resolved at call time.
//!
//! Each record type declares its sortable field names and hands out a
//! comparable value per field. Unknown or empty field names and empty
//! collections leave the input untouched.

use std::borrow::Cow;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Lenient parse used by the config loader; unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortOrder::Ascending),
            "desc" | "descending" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub field: String,
    pub order: SortOrder,
}

impl SortOptions {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

/// A field value as seen by the comparator.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Anything else, compared through its textual form.
    Other(String),
}

impl FieldValue<'_> {
    fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::UInt(a), FieldValue::UInt(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (a, b) => a.as_text().to_lowercase().cmp(&b.as_text().to_lowercase()),
        }
    }

    fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_ref()),
            FieldValue::Int(n) => Cow::Owned(n.to_string()),
            FieldValue::UInt(n) => Cow::Owned(n.to_string()),
            FieldValue::Float(n) => Cow::Owned(n.to_string()),
            FieldValue::Other(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

/// Records that can be ordered by a named field.
pub trait Sortable {
    /// Declared field names, matched case-insensitively.
    const FIELDS: &'static [&'static str];

    /// Value of a declared field. `name` is always one of `FIELDS`.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;

    fn resolve_field(name: &str) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .copied()
            .find(|f| f.eq_ignore_ascii_case(name))
    }
}

pub fn sort_records<T: Sortable>(items: &mut [T], options: &SortOptions) {
    if items.is_empty() || options.field.is_empty() {
        return;
    }
    let Some(field) = T::resolve_field(&options.field) else {
        tracing::debug!(field = %options.field, "sort field not found, leaving order unchanged");
        return;
    };

    items.sort_unstable_by(|a, b| {
        let ord = match (a.field_value(field), b.field_value(field)) {
            (Some(va), Some(vb)) => va.compare(&vb),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        match options.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: String,
        count: i64,
        size: u64,
        ratio: f64,
        flag: bool,
    }

    impl Sortable for Row {
        const FIELDS: &'static [&'static str] = &["ID", "Count", "Size", "Ratio", "Flag"];

        fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "ID" => Some(FieldValue::Text(Cow::Borrowed(self.id.as_str()))),
                "Count" => Some(FieldValue::Int(self.count)),
                "Size" => Some(FieldValue::UInt(self.size)),
                "Ratio" => Some(FieldValue::Float(self.ratio)),
                "Flag" => Some(FieldValue::Other(self.flag.to_string())),
                _ => None,
            }
        }
    }

    fn row(id: &str, count: i64, size: u64, ratio: f64, flag: bool) -> Row {
        Row {
            id: id.to_string(),
            count,
            size,
            ratio,
            flag,
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("beta", 10, 3, 0.5, true),
            row("Alpha", -2, 30, 2.25, false),
            row("gamma", 7, 1, -1.0, true),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn text_compares_case_insensitively() {
        let mut rows = sample();
        sort_records(&mut rows, &SortOptions::new("id", SortOrder::Ascending));
        assert_eq!(ids(&rows), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn numeric_fields_compare_numerically() {
        let mut rows = sample();
        sort_records(&mut rows, &SortOptions::new("COUNT", SortOrder::Ascending));
        assert_eq!(ids(&rows), vec!["Alpha", "gamma", "beta"]);

        sort_records(&mut rows, &SortOptions::new("size", SortOrder::Ascending));
        assert_eq!(ids(&rows), vec!["gamma", "beta", "Alpha"]);

        sort_records(&mut rows, &SortOptions::new("Ratio", SortOrder::Ascending));
        assert_eq!(ids(&rows), vec!["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn nan_ratio_sorts_after_numbers() {
        let mut rows = vec![
            row("nan", 0, 0, f64::NAN, true),
            row("high", 0, 0, 3.0, true),
            row("low", 0, 0, -1.5, true),
        ];
        sort_records(&mut rows, &SortOptions::new("ratio", SortOrder::Ascending));
        assert_eq!(ids(&rows), vec!["low", "high", "nan"]);

        sort_records(&mut rows, &SortOptions::new("ratio", SortOrder::Descending));
        assert_eq!(ids(&rows), vec!["nan", "high", "low"]);
    }

    #[test]
    fn other_values_compare_by_text() {
        let mut rows = vec![row("x", 0, 0, 0.0, true), row("y", 0, 0, 0.0, false)];
        sort_records(&mut rows, &SortOptions::new("flag", SortOrder::Ascending));
        assert_eq!(ids(&rows), vec!["y", "x"]);
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_keys() {
        for field in ["ID", "count", "size", "ratio"] {
            let mut asc = sample();
            sort_records(&mut asc, &SortOptions::new(field, SortOrder::Ascending));
            let mut desc = sample();
            sort_records(&mut desc, &SortOptions::new(field, SortOrder::Descending));
            let mut reversed = asc.clone();
            reversed.reverse();
            assert_eq!(desc, reversed, "field {field}");
        }
    }

    #[test]
    fn unknown_or_empty_field_is_noop() {
        let original = sample();

        let mut rows = sample();
        sort_records(&mut rows, &SortOptions::new("nope", SortOrder::Descending));
        assert_eq!(rows, original);

        let mut rows = sample();
        sort_records(&mut rows, &SortOptions::new("", SortOrder::Descending));
        assert_eq!(rows, original);

        let mut empty: Vec<Row> = Vec::new();
        sort_records(&mut empty, &SortOptions::new("ID", SortOrder::Ascending));
        assert!(empty.is_empty());
    }

    #[test]
    fn parse_sort_order() {
        assert_eq!(SortOrder::parse("ASC"), Some(SortOrder::Ascending));
        assert_eq!(SortOrder::parse(" desc "), Some(SortOrder::Descending));
        assert_eq!(SortOrder::parse("sideways"), None);
    }
}
