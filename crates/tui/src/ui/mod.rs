use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use flex_core::fuel::Outcome;

use crate::app::{App, ConfirmAction, Focus};
use crate::strings::{
    build_status_line, confirm_clear_message, help_lines_ascii, EMPTY_HISTORY, HISTORY_FOOTER,
    RESULT_PLACEHOLDER, TITLE_CONFIRM, TITLE_ETHANOL, TITLE_GASOLINE, TITLE_HELP, TITLE_HISTORY,
    TITLE_VERDICT,
};
use crate::theme::THEME;

const FORM_WIDTH: u16 = 46;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(11), Constraint::Length(3)])
        .split(f.area());
    draw_form(f, chunks[0], app);
    draw_status(f, chunks[1], app);

    if app.show_history {
        draw_history(f, f.area(), app);
    } else {
        app.history_area = None;
    }
    if let Some(confirm) = app.confirm {
        draw_confirm(f, f.area(), confirm, app);
    }
    if app.show_help {
        draw_help(f, f.area());
    }
}

fn draw_form(f: &mut Frame, area: Rect, app: &mut App) {
    let column = centered_column(FORM_WIDTH, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(column);
    let title = Paragraph::new(Line::from(Span::styled(
        "flexfuel - fill up with the cheaper liter",
        Style::default()
            .fg(THEME.title)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, rows[0]);
    draw_price_field(f, rows[1], app, Focus::Ethanol);
    draw_price_field(f, rows[2], app, Focus::Gasoline);
    draw_result(f, rows[3], app);
}

fn draw_price_field(f: &mut Frame, area: Rect, app: &mut App, field: Focus) {
    let focused = app.focus == field && !app.overlay_open();
    let (title, text, cursor, accent) = match field {
        Focus::Ethanol => (
            TITLE_ETHANOL,
            app.ethanol_input.clone(),
            app.ethanol_cursor,
            THEME.ethanol,
        ),
        Focus::Gasoline => (
            TITLE_GASOLINE,
            app.gasoline_input.clone(),
            app.gasoline_cursor,
            THEME.gasoline,
        ),
    };
    let border_style = if focused {
        Style::default().fg(THEME.border_focus)
    } else {
        Style::default().fg(THEME.border_inactive)
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_width = area.width.saturating_sub(2);
    // Keep the cursor in view when the value outgrows the field.
    let cursor_col = width_before(&text, cursor);
    let offset = cursor_col.saturating_sub(inner_width.saturating_sub(1));
    let para = Paragraph::new(text).block(block).scroll((0, offset));
    f.render_widget(para, area);

    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: inner_width,
        height: area.height.saturating_sub(2),
    };
    match field {
        Focus::Ethanol => app.ethanol_area = Some(inner),
        Focus::Gasoline => app.gasoline_area = Some(inner),
    }
    if focused {
        f.set_cursor_position(Position::new(inner.x + cursor_col - offset, inner.y));
    }
}

fn draw_result(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(TITLE_VERDICT)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(THEME.border_inactive));
    let line = match &app.last_result {
        None => Line::from(Span::styled(
            RESULT_PLACEHOLDER,
            Style::default().fg(THEME.hint),
        )),
        Some(Ok(outcome)) => Line::from(Span::styled(
            outcome.label(),
            Style::default()
                .fg(outcome_color(*outcome))
                .add_modifier(Modifier::BOLD),
        )),
        Some(Err(e)) => Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(THEME.error),
        )),
    };
    let para = Paragraph::new(line).block(block);
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let focus = if app.show_history {
        "History"
    } else {
        app.focus.label()
    };
    let tips = build_status_line(focus, app.history.len(), area.width.saturating_sub(2));
    let help = Span::styled(tips, Style::default().fg(THEME.hint));
    let para =
        Paragraph::new(Line::from(vec![help])).block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_history(f: &mut Frame, area: Rect, app: &mut App) {
    let popup_area = centered_rect(70, 70, area);
    let block = Block::default()
        .title(Span::styled(
            TITLE_HISTORY,
            Style::default()
                .fg(THEME.title)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    // Last inner row is reserved for the footer hint.
    let inner = Rect {
        x: popup_area.x.saturating_add(1),
        y: popup_area.y.saturating_add(1),
        width: popup_area.width.saturating_sub(2),
        height: popup_area.height.saturating_sub(3),
    };
    app.history_area = Some(inner);

    let mut lines: Vec<Line> = Vec::new();
    if app.history.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_HISTORY,
            Style::default().fg(THEME.hint),
        )));
    } else {
        for (i, rec) in app.history.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Ethanol {}  |  Gasoline {}", rec.ethanol, rec.gasoline),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("   {}", rec.recorded_at),
                    Style::default().fg(THEME.hint),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  -> {}", rec.outcome.label()),
                Style::default().fg(outcome_color(rec.outcome)),
            )));
        }
    }

    let scroll = app.history_scroll.min(app.history_max_scroll());
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll as usize)
        .take(inner.height as usize)
        .collect();

    f.render_widget(Clear, popup_area);
    let para = Paragraph::new(visible).block(block);
    f.render_widget(para, popup_area);

    let footer_area = Rect {
        x: inner.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: inner.width,
        height: 1,
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        HISTORY_FOOTER,
        Style::default().fg(THEME.hint),
    )));
    f.render_widget(footer, footer_area);

    let total = app.history_line_count();
    if total > inner.height as usize {
        let mut sb_state = ScrollbarState::new(total).position(scroll as usize);
        let sb = Scrollbar::default().orientation(ScrollbarOrientation::VerticalRight);
        f.render_stateful_widget(sb, inner, &mut sb_state);
    }
}

fn draw_confirm(f: &mut Frame, area: Rect, confirm: ConfirmAction, app: &App) {
    let popup_area = centered_rect(60, 30, area);
    let block = Block::default()
        .title(Span::styled(
            TITLE_CONFIRM,
            Style::default()
                .fg(THEME.title)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    let mut lines = Vec::new();
    match confirm {
        ConfirmAction::ClearHistory => {
            lines.push(Line::from(confirm_clear_message(app.history.len())));
        }
    }
    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, popup_area);
    f.render_widget(para, popup_area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(70, 70, area);
    let block = Block::default()
        .title(Span::styled(
            TITLE_HELP,
            Style::default()
                .fg(THEME.title)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    let lines = help_lines_ascii()
        .iter()
        .map(|s| Line::from(*s))
        .collect::<Vec<Line>>();
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(Clear, popup_area);
    f.render_widget(para, popup_area);
}

fn outcome_color(outcome: Outcome) -> ratatui::style::Color {
    match outcome {
        Outcome::Ethanol => THEME.ethanol,
        Outcome::Gasoline => THEME.gasoline,
    }
}

fn centered_column(width: u16, r: Rect) -> Rect {
    let w = width.min(r.width);
    Rect {
        x: r.x + (r.width - w) / 2,
        y: r.y,
        width: w,
        height: r.height,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1]);
    horiz[1]
}

fn width_before(s: &str, upto_chars: usize) -> u16 {
    let prefix: String = s.chars().take(upto_chars).collect();
    UnicodeWidthStr::width(prefix.as_str()) as u16
}

#[cfg(test)]
mod tests {
    use super::{centered_column, centered_rect, width_before};
    use ratatui::layout::Rect;

    #[test]
    fn centered_column_clamps_to_available_width() {
        let r = Rect::new(0, 0, 30, 10);
        let c = centered_column(46, r);
        assert_eq!(c.width, 30);
        assert_eq!(c.x, 0);

        let wide = Rect::new(0, 0, 100, 10);
        let c = centered_column(46, wide);
        assert_eq!(c.width, 46);
        assert_eq!(c.x, 27);
    }

    #[test]
    fn centered_rect_stays_inside() {
        let r = Rect::new(0, 0, 80, 24);
        let p = centered_rect(70, 70, r);
        assert!(p.x >= r.x && p.x + p.width <= r.x + r.width);
        assert!(p.y >= r.y && p.y + p.height <= r.y + r.height);
    }

    #[test]
    fn width_before_counts_chars() {
        assert_eq!(width_before("4.29", 0), 0);
        assert_eq!(width_before("4.29", 2), 2);
        assert_eq!(width_before("4.29", 10), 4);
    }
}
