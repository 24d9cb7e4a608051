//! Price calculation for a print job against a rates snapshot.

use crate::error::CoreError;
use crate::types::{ColorMode, JobSpec, PaperSize, Rates, Sides};

/// A3 jobs are charged at twice the A4 per-page rate.
const A3_MULTIPLIER: f64 = 2.0;

/// Compute the total price for a job specification.
///
/// The base per-page rate is selected by (color, sides); A3 doubles it.
/// The total is `rate * pages * copies`, floored at `min_charge`. Pure and
/// side-effect free; the result is frozen on the order at creation time.
pub fn quote(spec: &JobSpec, rates: &Rates) -> Result<f64, CoreError> {
    if spec.pages < 1 {
        return Err(CoreError::InvalidSpecification(format!(
            "pages must be at least 1, got {}",
            spec.pages
        )));
    }
    if spec.copies < 1 {
        return Err(CoreError::InvalidSpecification(format!(
            "copies must be at least 1, got {}",
            spec.copies
        )));
    }

    let base = match (spec.color, spec.sides) {
        (ColorMode::Bw, Sides::Single) => rates.bw_single_a4,
        (ColorMode::Bw, Sides::Duplex) => rates.bw_duplex_a4,
        (ColorMode::Color, Sides::Single) => rates.color_single_a4,
        (ColorMode::Color, Sides::Duplex) => rates.color_duplex_a4,
    };

    let per_page = match spec.size {
        PaperSize::A4 => base,
        PaperSize::A3 => base * A3_MULTIPLIER,
    };

    let total = per_page * f64::from(spec.pages) * f64::from(spec.copies);
    Ok(total.max(rates.min_charge))
}
