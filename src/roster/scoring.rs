use std::collections::BTreeMap;
use tracing::trace;

use crate::error::{CoreError, CoreResult};

/// Skill columns averaged into a participant's score, in summation order.
pub const SKILLS: [&str; 7] = [
    "Техника владения мячом",
    "Скорость и ускорение",
    "Выносливость",
    "Точность ударов и передач",
    "Принятие решений",
    "Защита",
    "На воротах",
];

/// Arithmetic mean of the recognized skill values.
///
/// Values are summed in `SKILLS` order and divided by the number of skills,
/// with no rounding. Keys outside `SKILLS` are ignored and out-of-range values
/// are averaged as-is. A missing skill is an error; nothing is defaulted.
pub fn score(attributes: &BTreeMap<String, f64>) -> CoreResult<f64> {
    let mut sum = 0.0;
    for skill in SKILLS {
        let value = attributes
            .get(skill)
            .ok_or_else(|| CoreError::MissingAttribute {
                participant: None,
                skill: skill.to_string(),
            })?;
        sum += *value;
    }
    let mean = sum / SKILLS.len() as f64;
    trace!(mean, "scored attributes");
    Ok(mean)
}
