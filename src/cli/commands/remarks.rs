use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::remarks::{RemarkRow, build_remarks};
use crate::errors::AppResult;
use crate::input::{DaySelector, load_logs, select_day};
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Remarks { input, day } = cmd {
        let logs = load_logs(input)?;
        let selector = DaySelector::from_args(day.day, day.date.as_deref());
        let log = select_day(&logs, &selector)?;

        header(format!("Activity Log & Remarks: {}", log.date));

        let rows = build_remarks(&log.segments);
        if rows.is_empty() {
            info("No segments for this day.");
            return Ok(());
        }

        print!("{}", render_table(&rows));
    }
    Ok(())
}

fn render_table(rows: &[RemarkRow]) -> String {
    let mut table = Table::new(vec![
        Column::new("Time"),
        Column::new("Hours"),
        Column::new("Status"),
        Column::wrapped("Location", 28),
        Column::wrapped("Remarks", 40),
    ]);

    for r in rows {
        table.add_row(vec![
            r.time_range(),
            format_hours(r.duration_hours),
            colorize_status(&r.status, r.row),
            colorize_optional(r.location.as_deref()),
            colorize_optional(r.remarks.as_deref()),
        ]);
    }

    table.render()
}
