use crate::entities::{PackInstance, Part};
use crate::io::ext_repr::{ExtPart, ExtSuitcase};
use anyhow::{Context, Result, ensure};
use itertools::Itertools;

/// Imports a suitcase/parts pair into the library.
///
/// All numeric fields must be finite, non-negative integers; a single
/// malformed field rejects the entire solve. Validation happens here, before
/// any table work, so the solver itself never sees invalid input.
pub fn import(ext_suitcase: &ExtSuitcase, ext_parts: &[ExtPart]) -> Result<PackInstance> {
    let capacity = validate_integral(ext_suitcase.volume)
        .context("invalid suitcase field 'volume'")? as usize;

    let parts = ext_parts
        .iter()
        .map(|ext_part| {
            let volume = validate_integral(ext_part.volume)
                .with_context(|| format!("invalid field 'volume' of part '{}'", ext_part.id))?;
            let value = validate_integral(ext_part.value)
                .with_context(|| format!("invalid field 'value' of part '{}'", ext_part.id))?;
            Ok(Part::new(ext_part.id.clone(), volume as usize, value))
        })
        .collect::<Result<Vec<Part>>>()?;

    ensure!(
        parts.iter().map(|p| &p.id).all_unique(),
        "part ids should be unique. ids: {:?}",
        parts.iter().map(|p| &p.id).duplicates().collect_vec()
    );

    Ok(PackInstance::new(parts, capacity))
}

fn validate_integral(v: f64) -> Result<u64> {
    ensure!(v.is_finite(), "{v} is not a finite number");
    ensure!(v >= 0.0, "{v} is negative");
    ensure!(v.fract() == 0.0, "{v} is not an integer");
    Ok(v as u64)
}
