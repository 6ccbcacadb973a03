use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::FormApp;
use decfield_core::DecimalField;

pub(crate) fn draw(f: &mut Frame, app: &FormApp) {
    let mut constraints: Vec<Constraint> = vec![Constraint::Length(1)];
    constraints.extend(app.fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let title = Paragraph::new(Line::from(Span::styled(
        " decfield form ",
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, chunks[0]);

    for (i, field) in app.fields.iter().enumerate() {
        render_field(f, chunks[1 + i], field, i == app.focused);
    }

    render_footer(f, chunks[chunks.len() - 1], app);
}

fn render_field(f: &mut Frame, area: Rect, field: &DecimalField, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let mode_tag = format!(" {} ({:?}) ", field.label(), field.config().mode);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            mode_tag,
            Style::default().fg(border_color).add_modifier(Modifier::BOLD),
        ));

    let content = Paragraph::new(value_line(field, focused)).block(block);
    f.render_widget(content, area);
}

// Render the value with the selection highlighted and, when focused, the
// caret as a reversed cell.
fn value_line(field: &DecimalField, focused: bool) -> Line<'static> {
    let state = field.state();
    let value = state.value();

    if !focused {
        return Line::from(value.to_string());
    }

    let caret_style = Style::default().add_modifier(Modifier::REVERSED);

    if let Some(sel) = state.selection() {
        let selected = Style::default().bg(Color::Cyan).fg(Color::Black);
        return Line::from(vec![
            Span::raw(value[..sel.start].to_string()),
            Span::styled(value[sel.start..sel.end].to_string(), selected),
            Span::raw(value[sel.end..].to_string()),
        ]);
    }

    let caret = state.caret();
    if caret >= value.len() {
        return Line::from(vec![
            Span::raw(value.to_string()),
            Span::styled(" ".to_string(), caret_style),
        ]);
    }

    let next = value[caret..]
        .chars()
        .next()
        .map(|c| caret + c.len_utf8())
        .unwrap_or(value.len());
    Line::from(vec![
        Span::raw(value[..caret].to_string()),
        Span::styled(value[caret..next].to_string(), caret_style),
        Span::raw(value[next..].to_string()),
    ])
}

fn render_footer(f: &mut Frame, area: Rect, app: &FormApp) {
    let values: Vec<String> = app
        .fields
        .iter()
        .map(|field| format!("{}={:?}", field.label(), field.value()))
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            values.join("  "),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Tab/Enter blur+next · Space/Esc select all · Esc on empty field quits",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let footer = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}
