use crate::report::stats::{DayAmount, WeekStats};
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn extremum_line<'a>(label: &'a str, day: Option<&DayAmount>, palette: &Palette) -> Line<'a> {
    let (amount, weekday) = match day {
        Some(day) => (
            format!("{:.2}", day.amount),
            day.date_key.date().format("%A").to_string(),
        ),
        None => ("—".to_string(), String::new()),
    };

    Line::from(vec![
        Span::styled(label, palette.hint_style()),
        Span::styled(amount, palette.price_style()),
        Span::styled(format!(" {}", weekday), palette.hint_style()),
    ])
}

/// Render spending statistics for the visible week
pub fn render_stats_pane(f: &mut Frame, stats: &WeekStats, palette: &Palette, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(" Total spent    ", palette.hint_style()),
            Span::styled(format!("{:.2}", stats.total_spent), palette.price_style()),
        ]),
        Line::from(vec![
            Span::styled(" Per day        ", palette.hint_style()),
            Span::styled(format!("{:.2}", stats.average_per_day), palette.price_style()),
        ]),
        extremum_line(" Most expensive ", stats.most_expensive_day.as_ref(), palette),
        extremum_line(" Cheapest       ", stats.cheapest_day.as_ref(), palette),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Purchased      ", palette.hint_style()),
            Span::styled(
                format!(
                    "{}/{} ({:.0}%)",
                    stats.completed_items, stats.total_items, stats.completion_rate
                ),
                palette.base_style(),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .title(Span::styled(" Spending ", palette.title_style())),
    );

    f.render_widget(paragraph, area);
}
