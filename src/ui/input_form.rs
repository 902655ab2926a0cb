use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_lines<'a>(label: &'a str, value: &'a str, editing: bool, palette: &Palette) -> [Line<'a>; 2] {
    [
        Line::styled(label, palette.hint_style()),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(value, palette.title_style()),
            if editing {
                Span::styled("█", palette.title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]),
    ]
}

/// Render the add form for tasks, habits and shopping items
pub fn render_input_form(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let day = app.selected_date().format("%A, %-d %B").to_string();
    let (title, label) = match app.ui_mode {
        UiMode::AddingHabit => (" New Habit ".to_string(), "Name:"),
        UiMode::AddingShoppingItem => (format!(" Buy on {} ", day), "Item:"),
        _ => (format!(" Task for {} ", day), "Task:"),
    };

    let mut lines = vec![Line::raw("")];
    lines.extend(field_lines(label, &form.text, form.editing_field == 0, palette));

    if app.ui_mode == UiMode::AddingShoppingItem {
        lines.push(Line::raw(""));
        lines.extend(field_lines("Price:", &form.price, form.editing_field == 1, palette));
    }

    lines.push(Line::raw(""));
    if let Some(error) = &form.error {
        lines.push(Line::styled(error.as_str(), palette.error_style()));
    }

    let hint = if app.ui_mode == UiMode::AddingShoppingItem {
        "Tab to switch fields  ·  Enter to submit  ·  Esc to cancel"
    } else {
        "Enter to submit  ·  Esc to cancel"
    };
    lines.push(Line::styled(hint, palette.hint_style()));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.focused_border_style())
                .title(Span::styled(title, palette.title_style()))
                .style(palette.modal_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
