//! Value comparison for table sorting
//!
//! Text is ordered the way a browser's `localeCompare` orders Latin-script
//! text: accents and case only break ties between otherwise equal words, so
//! "Érica" sorts between "Eduardo" and "Fábio" instead of after "Zé".

use std::cmp::Ordering;
use chrono::{DateTime, Utc};

/// A sortable attribute value extracted from a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
    Time(DateTime<Utc>),
    Missing,
}

/// Records that can be ordered by one of their attributes
pub trait Sortable {
    /// Attributes a table can be sorted by
    type Field: Copy + Eq + std::fmt::Debug;

    fn sort_value(&self, field: Self::Field) -> SortValue<'_>;
}

impl<'a> From<&'a str> for SortValue<'a> {
    fn from(value: &'a str) -> Self {
        SortValue::Text(value)
    }
}

impl<'a> From<&'a String> for SortValue<'a> {
    fn from(value: &'a String) -> Self {
        SortValue::Text(value.as_str())
    }
}

impl<'a, T> From<Option<T>> for SortValue<'a>
where
    T: Into<SortValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(SortValue::Missing, Into::into)
    }
}

impl From<DateTime<Utc>> for SortValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        SortValue::Time(value)
    }
}

impl From<i32> for SortValue<'_> {
    fn from(value: i32) -> Self {
        SortValue::Number(f64::from(value))
    }
}

impl From<f64> for SortValue<'_> {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl SortValue<'_> {
    /// Numbers and timestamps share one numeric scale, text comes after them
    /// and missing values come last.
    fn rank(&self) -> u8 {
        match self {
            SortValue::Number(_) | SortValue::Time(_) => 0,
            SortValue::Text(_) => 1,
            SortValue::Missing => 2,
        }
    }

    fn numeric(&self) -> f64 {
        match self {
            SortValue::Number(n) => *n,
            SortValue::Time(t) => t.timestamp_millis() as f64,
            _ => 0.0,
        }
    }
}

/// Total order over sort values
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Text(x), SortValue::Text(y)) => locale_compare(x, y),
        (SortValue::Time(x), SortValue::Time(y)) => x.cmp(y),
        _ if a.rank() == 0 && b.rank() == 0 => a.numeric().total_cmp(&b.numeric()),
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Locale-aware string comparison
///
/// Compares base letters first, then accents, then case (lowercase first), and
/// finally the raw code points so that distinct strings never compare equal.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let a_keys: Vec<CharKey> = a.chars().map(CharKey::new).collect();
    let b_keys: Vec<CharKey> = b.chars().map(CharKey::new).collect();

    let by_base = a_keys.iter().map(|k| k.base).cmp(b_keys.iter().map(|k| k.base));
    let by_accent = || a_keys.iter().map(|k| k.accent).cmp(b_keys.iter().map(|k| k.accent));
    let by_case = || a_keys.iter().map(|k| k.upper).cmp(b_keys.iter().map(|k| k.upper));

    by_base
        .then_with(by_accent)
        .then_with(by_case)
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy)]
struct CharKey {
    base: char,
    accent: u8,
    upper: bool,
}

impl CharKey {
    fn new(c: char) -> Self {
        let upper = c.is_uppercase();
        let lower = c.to_lowercase().next().unwrap_or(c);
        let (base, accent) = fold_accent(lower);
        Self { base, accent, upper }
    }
}

/// Strip the diacritic from a lowercase Latin letter
fn fold_accent(c: char) -> (char, u8) {
    match c {
        'á' => ('a', 1),
        'à' => ('a', 2),
        'â' => ('a', 3),
        'ã' => ('a', 4),
        'ä' => ('a', 5),
        'å' => ('a', 6),
        'ç' => ('c', 1),
        'é' => ('e', 1),
        'è' => ('e', 2),
        'ê' => ('e', 3),
        'ë' => ('e', 5),
        'í' => ('i', 1),
        'ì' => ('i', 2),
        'î' => ('i', 3),
        'ï' => ('i', 5),
        'ñ' => ('n', 4),
        'ó' => ('o', 1),
        'ò' => ('o', 2),
        'ô' => ('o', 3),
        'õ' => ('o', 4),
        'ö' => ('o', 5),
        'ú' => ('u', 1),
        'ù' => ('u', 2),
        'û' => ('u', 3),
        'ü' => ('u', 5),
        'ý' => ('y', 1),
        'ÿ' => ('y', 5),
        other => (other, 0),
    }
}
