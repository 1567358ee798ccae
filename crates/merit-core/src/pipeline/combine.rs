//! Step-weighted combination of the shifted tiers.

use super::shift::ShiftedTiers;
use super::step::StepFunction;

/// Fold the shifted layers into one raw merit per sample.
///
/// Seeds the merit with the wrap layer, then iterates tiers from least to
/// most important applying, per sample,
///
/// ```text
/// merit = merit * (1 - s) + s * layer    where s = step(layer - threshold)
/// ```
///
/// A smooth multiplexer: wherever a tier's shifted value exceeds its shifted
/// threshold, that tier is decisive and its value overwrites the merit;
/// otherwise the lower-priority merit passes through. Output is in the
/// shifted numeric space, lower is better.
pub fn fold(shifted: &ShiftedTiers, step: StepFunction) -> Vec<f64> {
    let tier_count = shifted.thresholds.len();
    let mut merits = shifted.layers[tier_count].clone();

    for idx in (0..tier_count).rev() {
        let layer = &shifted.layers[idx];
        let threshold = shifted.thresholds[idx];
        for (merit, &value) in merits.iter_mut().zip(layer.iter()) {
            let s = step.eval(value - threshold);
            *merit = *merit * (1.0 - s) + s * value;
        }
    }
    merits
}
