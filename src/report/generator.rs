use crate::domain::{week_of, Planner, Week};
use crate::persistence::{ensure_planner_dir, load_planner, report_file, FileBlobStore};
use crate::report::stats::{compute_week_stats, DayAmount};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Format an amount with two decimals
fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn format_extremum(day: Option<&DayAmount>) -> String {
    match day {
        Some(day) => format!(
            "{} ({})",
            format_amount(day.amount),
            day.date_key.date().format("%A")
        ),
        None => "—".to_string(),
    }
}

/// Render the markdown report for a week
pub fn render_week_report(planner: &Planner, week: &Week) -> String {
    let keys = week.keys();
    let stats = compute_week_stats(&planner.shopping, week);
    let mut report = String::new();

    // Header
    report.push_str(&format!("# Weekly Report - {}\n\n", week.label()));

    // Spending Section
    report.push_str("## Spending\n\n");
    report.push_str(&format!("- **Total Spent:** {}\n", format_amount(stats.total_spent)));
    report.push_str(&format!("- **Average per Day:** {}\n", format_amount(stats.average_per_day)));
    report.push_str(&format!(
        "- **Most Expensive Day:** {}\n",
        format_extremum(stats.most_expensive_day.as_ref())
    ));
    report.push_str(&format!(
        "- **Cheapest Day:** {}\n",
        format_extremum(stats.cheapest_day.as_ref())
    ));
    report.push_str(&format!(
        "- **Purchased:** {}/{} items ({})\n\n",
        stats.completed_items,
        stats.total_items,
        format_percent(stats.completion_rate)
    ));

    // Habits Section
    if !planner.habits.is_empty() {
        report.push_str("## Habits\n\n");
        for habit in planner.habits.habits() {
            let marks: String = keys
                .iter()
                .map(|key| if habit.is_done(key) { '●' } else { '·' })
                .collect();
            report.push_str(&format!(
                "- **{}:** {} ({}/7)\n",
                habit.name,
                marks,
                habit.completed_count_in(&keys)
            ));
        }
        report.push('\n');
    }

    // Days Breakdown Section
    report.push_str("## Days\n\n");
    for (key, day) in keys.iter().zip(&stats.per_day) {
        report.push_str(&format!("### {}\n\n", key.date().format("%A, %-d %B")));

        let tasks = planner.tasks.tasks_for(key);
        let items = planner.shopping.items_for(key);
        if tasks.is_empty() && items.is_empty() {
            report.push_str("_Nothing planned._\n\n");
            continue;
        }

        for task in tasks {
            let mark = if task.completed { "x" } else { " " };
            report.push_str(&format!("- [{}] {}\n", mark, task.text));
        }

        if !items.is_empty() {
            if !tasks.is_empty() {
                report.push('\n');
            }
            report.push_str(&format!(
                "Shopping ({}/{} bought, {} spent):\n\n",
                day.completed_count,
                day.total_items,
                format_amount(day.total)
            ));
            for item in items {
                let mark = if item.completed { "x" } else { " " };
                report.push_str(&format!("- [{}] {} — {}\n", mark, item.name, format_amount(item.price)));
            }
        }
        report.push('\n');
    }

    report
}

/// Generate the weekly report for the week containing `date` (default today)
pub fn generate_report(
    dir: Option<&Path>,
    date: Option<NaiveDate>,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let report_date = date.unwrap_or_else(|| Local::now().date_naive());
    let week = week_of(report_date);

    let data_dir = ensure_planner_dir(dir)?;
    let outcome = load_planner(&FileBlobStore::new(&data_dir));
    for warning in &outcome.warnings {
        eprintln!("Warning: {}", warning);
    }

    let report = render_week_report(&outcome.planner, &week);

    let output = output_path.unwrap_or_else(|| report_file(&data_dir, week.start()));
    fs::write(&output, report)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    info!(path = %output.display(), week = %week.start(), "report written");
    Ok(output)
}
