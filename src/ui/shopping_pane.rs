use crate::app::AppState;
use crate::domain::Panel;
use crate::report::stats::WeekStats;
use crate::ui::styles::Palette;
use crate::ui::week_pane::{column_border, day_title};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render one shopping list per day of the visible week, titled with the day's spend
pub fn render_shopping_columns(
    f: &mut Frame,
    app: &AppState,
    stats: &WeekStats,
    palette: &Palette,
    columns: &[Rect],
) {
    let week = app.week();

    for (day, ((date, key), area)) in week.days().into_iter().zip(week.keys()).zip(columns).enumerate() {
        let active = app.focus == Panel::Shopping && app.selected_day == day;

        let items: Vec<ListItem> = app
            .planner
            .shopping
            .items_for(&key)
            .iter()
            .enumerate()
            .map(|(row, item)| {
                let selected = active && row == app.selected_row;
                let (mark, name_style) = if item.completed {
                    ("✓ ", palette.done_style())
                } else {
                    ("○ ", palette.base_style())
                };
                let (name_style, price_style) = if selected {
                    (palette.selected_style(), palette.selected_style())
                } else {
                    (name_style, palette.price_style())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, name_style),
                    Span::styled(item.name.clone(), name_style),
                    Span::styled(format!(" {:.2}", item.price), price_style),
                ]))
            })
            .collect();

        let suffix = match stats.day(&key) {
            Some(spend) if spend.total_items > 0 => format!(" {:.2}", spend.total),
            _ => String::new(),
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(column_border(app, palette, day, Panel::Shopping))
                .title(Span::styled(day_title(date, app.today, &suffix), palette.title_style())),
        );

        f.render_widget(list, *area);
    }
}
