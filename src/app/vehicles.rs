//! Vehicles view: the slot table plus recent check-in/check-out activity.

use crate::app::dashboard::activity_lines;
use crate::domain::model::{SessionRecord, Slot};
use crate::domain::ports::CoreApi;
use crate::utils::error::Result;

const RECENT_LIMIT: usize = 8;

pub struct VehiclesReport {
    pub slots: Vec<Slot>,
    pub recent: Vec<SessionRecord>,
}

pub async fn load(core: &impl CoreApi) -> Result<VehiclesReport> {
    tracing::debug!("loading vehicles data");
    let slots = core.slots().await?;
    let recent = core.recent_sessions(RECENT_LIMIT).await?;
    Ok(VehiclesReport { slots, recent })
}

pub fn render(report: &VehiclesReport) -> String {
    let mut lines = vec!["Slots".to_string()];
    if report.slots.is_empty() {
        lines.push("  No slots configured yet.".to_string());
    } else {
        for slot in &report.slots {
            let status = if slot.occupied { "Occupied" } else { "Free" };
            lines.push(format!(
                "  {:<6} {:<9} {}",
                slot.code,
                status,
                slot.plate.as_deref().unwrap_or("-")
            ));
        }
    }

    lines.push(String::new());
    lines.push("Recent activity".to_string());
    lines.extend(activity_lines(&report.recent));
    lines.join("\n")
}
