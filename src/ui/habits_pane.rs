use crate::app::AppState;
use crate::domain::Panel;
use crate::ui::styles::Palette;
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

const NAME_WIDTH: usize = 14;

/// Fit a habit name into the name column
fn fit_name(name: &str) -> String {
    let count = name.chars().count();
    if count > NAME_WIDTH {
        let truncated: String = name.chars().take(NAME_WIDTH - 1).collect();
        format!("{}…", truncated)
    } else {
        format!("{}{}", name, " ".repeat(NAME_WIDTH - count))
    }
}

/// First letter of the weekday name
fn weekday_initial(date: NaiveDate) -> char {
    date.format("%a").to_string().chars().next().unwrap_or(' ')
}

/// Render the habit grid for the visible week
pub fn render_habits_pane(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let keys = app.visible_keys();
    let focused = app.focus == Panel::Habits;

    let mut items = Vec::with_capacity(app.planner.habits.len() + 1);

    // Weekday header, with the selected day underlined
    let mut header = vec![Span::raw(" ".repeat(NAME_WIDTH + 1))];
    for (day, key) in keys.iter().enumerate() {
        let mut style = palette.hint_style();
        if day == app.selected_day {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        header.push(Span::styled(format!("{} ", weekday_initial(key.date())), style));
    }
    items.push(ListItem::new(Line::from(header)));

    for (row, habit) in app.planner.habits.habits().iter().enumerate() {
        let name_style = if focused && row == app.selected_row {
            palette.selected_style()
        } else {
            palette.base_style()
        };

        let mut spans = vec![Span::styled(fit_name(&habit.name), name_style), Span::raw(" ")];
        for (day, key) in keys.iter().enumerate() {
            let (mark, mut style) = if habit.is_done(key) {
                ("●", palette.price_style())
            } else {
                ("·", palette.hint_style())
            };
            if focused && row == app.selected_row && day == app.selected_day {
                style = palette.selected_style();
            }
            spans.push(Span::styled(mark, style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {}/7", habit.completed_count_in(&keys)),
            palette.hint_style(),
        ));
        items.push(ListItem::new(Line::from(spans)));
    }

    let border = if focused {
        palette.focused_border_style()
    } else {
        palette.border_style()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" Habits ", palette.title_style())),
    );

    f.render_widget(list, area);
}
