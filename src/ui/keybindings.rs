use crate::app::AppState;
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, palette: &Palette, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ←/→ day   "),
        Span::raw("↑/↓ select   "),
        Span::raw("[ / ] week   "),
        Span::raw(". today   "),
        Span::raw("Tab pane   "),
        Span::raw("a add   "),
        Span::raw("Space toggle   "),
        Span::raw("x delete   "),
        Span::raw("t theme   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(palette.hint_style());
    f.render_widget(paragraph, area);
}

/// Render the week range with the status message on the right
pub fn render_header(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let week = app.week();
    let mut spans = vec![Span::styled(format!(" {}", week.label()), palette.title_style())];
    if week.index_of(app.today).is_some() {
        spans.push(Span::styled("  (this week)", palette.hint_style()));
    }
    spans.push(Span::styled(
        format!("  ·  {}", app.focus.name()),
        palette.hint_style(),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);

    if let Some(message) = &app.status_message {
        let status = Paragraph::new(Span::styled(format!("{} ", message), palette.error_style()))
            .alignment(Alignment::Right);
        f.render_widget(status, area);
    }
}
