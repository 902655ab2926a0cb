use crate::app::AppState;
use crate::domain::Panel;
use crate::ui::styles::Palette;
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Column title for a day, e.g. " Mon 19 " with a marker on today
pub fn day_title(date: NaiveDate, today: NaiveDate, suffix: &str) -> String {
    let marker = if date == today { "• " } else { "" };
    format!(" {}{}{} ", marker, date.format("%a %-d"), suffix)
}

/// Border style for a day column
pub fn column_border(app: &AppState, palette: &Palette, day: usize, panel: Panel) -> Style {
    if app.selected_day == day && app.focus == panel {
        palette.focused_border_style()
    } else {
        palette.border_style()
    }
}

/// Render one column of tasks per day of the visible week
pub fn render_task_columns(f: &mut Frame, app: &AppState, palette: &Palette, columns: &[Rect]) {
    let week = app.week();

    for (day, ((date, key), area)) in week.days().into_iter().zip(week.keys()).zip(columns).enumerate() {
        let tasks = app.planner.tasks.tasks_for(&key);
        let active = app.focus == Panel::Tasks && app.selected_day == day;

        let items: Vec<ListItem> = tasks
            .iter()
            .enumerate()
            .map(|(row, task)| {
                let (mark, style) = if task.completed {
                    ("✓ ", palette.done_style())
                } else {
                    ("○ ", palette.base_style())
                };
                let style = if active && row == app.selected_row {
                    palette.selected_style()
                } else {
                    style
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, style),
                    Span::styled(task.text.clone(), style),
                ]))
            })
            .collect();

        let (done, total) = app.planner.tasks.progress_for(&key);
        let suffix = if total > 0 {
            format!(" {}/{}", done, total)
        } else {
            String::new()
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(column_border(app, palette, day, Panel::Tasks))
                .title(Span::styled(day_title(date, app.today, &suffix), palette.title_style())),
        );

        f.render_widget(list, *area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_title() {
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let tuesday = monday.succ_opt().unwrap();
        assert_eq!(day_title(monday, monday, ""), " • Mon 19 ");
        assert_eq!(day_title(tuesday, monday, " 1/2"), " Tue 20 1/2 ");
    }
}
