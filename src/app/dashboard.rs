//! Dashboard view: occupancy KPIs, a textual occupancy bar and the most
//! recent session activity.

use crate::domain::model::{SessionRecord, StatsOverview};
use crate::domain::ports::CoreApi;
use crate::utils::error::Result;

const RECENT_LIMIT: usize = 5;
const BAR_WIDTH: usize = 20;

#[derive(Debug)]
pub struct DashboardReport {
    pub overview: StatsOverview,
    pub recent: Vec<SessionRecord>,
}

pub async fn load(core: &impl CoreApi) -> Result<DashboardReport> {
    tracing::debug!("loading dashboard data");
    let overview = core.overview().await?;
    let recent = core.recent_sessions(RECENT_LIMIT).await?;
    Ok(DashboardReport { overview, recent })
}

pub fn render(report: &DashboardReport) -> String {
    let stats = &report.overview;
    let mut lines = vec![
        "Parking dashboard".to_string(),
        format!("  Occupied slots:  {}", stats.occupied),
        format!("  Free slots:      {}", stats.free),
        format!("  Active vehicles: {}", stats.active_vehicles),
        format!("  Rate:            ${:.2}/min", stats.current_rate_per_minute),
        format!(
            "  Occupancy:       {} {:.1}%",
            occupancy_bar(stats.occupancy_percent, BAR_WIDTH),
            stats.occupancy_percent.clamp(0.0, 100.0)
        ),
        String::new(),
        "Recent activity".to_string(),
    ];
    lines.extend(activity_lines(&report.recent));
    lines.join("\n")
}

/// Fixed-width bar, percent clamped to 0..=100 as the web UI does.
pub fn occupancy_bar(percent: f64, width: usize) -> String {
    let safe = percent.clamp(0.0, 100.0);
    let filled = ((safe / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn activity_lines(sessions: &[SessionRecord]) -> Vec<String> {
    if sessions.is_empty() {
        return vec!["  No recent activity.".to_string()];
    }

    sessions
        .iter()
        .map(|s| {
            let (kind, time) = match s.check_out_at {
                Some(out) => ("Exit", out),
                None => ("Entry", s.check_in_at),
            };
            format!(
                "  {} · {} · {}",
                s.plate,
                kind,
                time.format("%Y-%m-%d %H:%M")
            )
        })
        .collect()
}
