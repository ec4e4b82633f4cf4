//! Vehicle entry/exit registration. Counterpart of the web form's submit
//! handler: the plate is normalized, validated, and only then sent to the
//! core service. An invalid plate never produces a network call.

use crate::core::plate;
use crate::domain::ports::CoreApi;
use crate::utils::error::{ParkingError, Result};

fn gate_plate(raw: &str) -> Result<String> {
    let canonical = plate::normalize(raw);
    if !plate::is_valid(&canonical) {
        tracing::debug!("rejected plate input {:?} (normalized {:?})", raw, canonical);
        return Err(ParkingError::ValidationError {
            message: plate::PLATE_FORMAT_HINT.to_string(),
        });
    }
    Ok(canonical)
}

pub async fn register_entry(core: &impl CoreApi, raw_plate: &str) -> Result<String> {
    let canonical = gate_plate(raw_plate)?;
    let receipt = core.register_entry(&canonical).await?;
    tracing::info!("entry registered for {} in slot {}", receipt.plate, receipt.slot_code);
    Ok(format!(
        "Entry registered. Slot {} · plate {}.",
        receipt.slot_code, receipt.plate
    ))
}

pub async fn register_exit(core: &impl CoreApi, raw_plate: &str) -> Result<String> {
    let canonical = gate_plate(raw_plate)?;
    let receipt = core.register_exit(&canonical).await?;
    tracing::info!("exit registered for {} from slot {}", receipt.plate, receipt.slot_code);
    Ok(format!(
        "Exit registered. {} min · total ${:.2}.",
        receipt.minutes, receipt.amount
    ))
}
