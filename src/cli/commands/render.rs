use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::ChartLayout;
use crate::errors::{AppError, AppResult};
use crate::export::{ChartFormat, RenderLogic};
use crate::input::{DaySelector, load_logs, select_day};
use crate::ui::messages::info;
use crate::utils::time::format_hours;
use tracing::debug;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        input,
        file,
        format,
        day,
        width,
        force,
    } = cmd
    {
        let logs = load_logs(input)?;
        let selector = DaySelector::from_args(day.day, day.date.as_deref());
        let log = select_day(&logs, &selector)?;

        let format = match format {
            Some(f) => *f,
            None => ChartFormat::from_config(&cfg.default_format).ok_or_else(|| {
                AppError::InvalidExportFormat(cfg.default_format.clone())
            })?,
        };

        let mut chart_cfg = cfg.chart.clone();
        if let Some(w) = width {
            chart_cfg.width = *w;
        }
        if chart_cfg.width <= chart_cfg.label_width + chart_cfg.summary_width {
            return Err(AppError::InvalidInput(format!(
                "width {} leaves no room for the graph area",
                chart_cfg.width
            )));
        }
        let layout = ChartLayout::from_config(&chart_cfg);
        debug!(format = format.as_str(), date = %log.date, width = layout.width, "rendering chart");

        let chart = RenderLogic::render(log, &layout, chart_cfg.stroke_width, format, file, *force)?;

        info(format!(
            "{}: {} segments, {} status changes, total {} h",
            chart.date,
            chart.segment_count,
            chart.path.transitions,
            format_hours(chart.total_hours)
        ));
    }
    Ok(())
}
