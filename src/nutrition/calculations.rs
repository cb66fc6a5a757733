use crate::error::{NutritionError, Result};
use crate::models::Nutrients;
use crate::nutrition::constants::REFERENCE_PORTION_G;

/// Round to two decimal places, half away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert figures stated for `portion_size_g` grams into per-100g figures.
///
/// Rejects a portion that is zero, negative or not a number.
pub fn normalize_to_per_100g(portion_size_g: f64, per_portion: Nutrients) -> Result<Nutrients> {
    if !portion_size_g.is_finite() || portion_size_g <= 0.0 {
        return Err(NutritionError::validation(
            "Portion size must be greater than zero.",
        ));
    }

    Ok(per_portion * (REFERENCE_PORTION_G / portion_size_g))
}

/// Derive per-100g figures from absolute totals.
///
/// `None` when `total_weight_g` is exactly zero: the ratio is undefined.
pub fn per_100g_of(totals: Nutrients, total_weight_g: f64) -> Option<Nutrients> {
    if total_weight_g == 0.0 {
        return None;
    }
    Some(totals * (REFERENCE_PORTION_G / total_weight_g))
}
