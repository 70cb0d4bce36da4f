//! Combined ingredient totals across a set of recipes.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::model::Recipe;

/// Ingredient name to summed quantity, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IngredientTotals {
    totals: IndexMap<String, f64>,
}

impl IngredientTotals {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.totals.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(name, total)| (name.as_str(), *total))
    }

    fn add(&mut self, name: &str, quantity: f64) {
        *self.totals.entry(name.to_string()).or_insert(0.0) += quantity;
    }
}

impl fmt::Display for IngredientTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, total) in self.iter() {
            writeln!(f, "{}: {}", name, format_quantity(total))?;
        }
        Ok(())
    }
}

/// Sum ingredient quantities across `recipes`, keyed by exact ingredient name.
///
/// Quantities that do not start with a number count as zero.
pub fn aggregate<'a, I>(recipes: I) -> IngredientTotals
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut totals = IngredientTotals::default();
    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            totals.add(&ingredient.name, parse_quantity(&ingredient.quantity));
        }
    }
    totals
}

/// Parse the leading numeric part of a free-form quantity.
///
/// Leading ECMAScript whitespace and line terminators are skipped (U+FEFF
/// counts, U+0085 does not), then the longest prefix forming a decimal
/// float (`2`, `-1.5`, `.5`, `3e2`) or `Infinity` is read. `"2 cups"` is 2,
/// `"200g"` is 200, and anything without a numeric prefix is 0.
pub fn parse_quantity(text: &str) -> f64 {
    let text = text.trim_start_matches(is_js_whitespace);
    let prefix = numeric_prefix(text);
    if prefix.is_empty() {
        return 0.0;
    }
    match prefix.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

/// Render a quantity the way a browser prints a number: `1`, `3.5`,
/// `Infinity`, `1e+21`, `1e-7`.
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return &text[..end + "Infinity".len()];
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &text[..end]
}
