use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::aggregate;
use crate::core::trip::TripSummary;
use crate::errors::AppResult;
use crate::input::{DaySelector, load_logs, select_day};
use crate::models::daily_log::DailyLog;
use crate::models::duty_status::CanonicalRow;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_total, colorize_status};
use crate::utils::formatting::separator_line;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { input, day } = cmd {
        let logs = load_logs(input)?;

        if day.day.is_none() && day.date.is_none() && logs.len() > 1 {
            print_trip(&logs, cfg);
        } else {
            let selector = DaySelector::from_args(day.day, day.date.as_deref());
            let log = select_day(&logs, &selector)?;
            print_day(log, cfg);
        }
    }
    Ok(())
}

fn print_day(log: &DailyLog, cfg: &Config) {
    let hours = aggregate(&log.segments);

    header(&log.date);

    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("Status"),
        Column::new("Hours"),
        Column::new("Time"),
    ]);

    for (row, h) in hours.iter() {
        table.add_row(vec![
            row.number().to_string(),
            colorize_status(row.label(), row),
            format_hours(h),
            hours2readable(h, false),
        ]);
    }

    print!("{}", table.render());
    println!("{}", separator_line(&cfg.separator_char, 40));

    let total = hours.total();
    println!(
        "Total: {}{}{} h ({} segments)",
        color_for_total(total),
        format_hours(total),
        RESET,
        log.segments.len()
    );
}

fn print_trip(logs: &[DailyLog], cfg: &Config) {
    let trip = TripSummary::from_logs(logs);

    header(format!("Trip: {} days", trip.day_count()));

    let mut columns = vec![Column::new("Date")];
    columns.extend(CanonicalRow::ALL.iter().map(|r| Column::new(r.key())));
    columns.extend([
        Column::new("Total"),
        Column::new("Driving"),
        Column::new("On-duty"),
    ]);
    let mut table = Table::new(columns);

    for d in &trip.days {
        let mut row = vec![d.date.clone()];
        row.extend(d.hours.iter().map(|(_, h)| format_hours(h)));
        row.push(format!(
            "{}{}{}",
            color_for_total(d.total_hours),
            format_hours(d.total_hours),
            RESET
        ));
        row.push(format_hours(d.driving_hours));
        row.push(format_hours(d.on_duty_hours));
        table.add_row(row);
    }

    print!("{}", table.render());
    println!("{}", separator_line(&cfg.separator_char, 60));

    if let (Some(first), Some(last)) = (trip.first_date(), trip.last_date()) {
        println!("Period:  {first} → {last}");
    }
    println!(
        "Driving: {} h | On-duty: {} h",
        format_hours(trip.total_driving_hours),
        format_hours(trip.total_on_duty_hours)
    );
}
