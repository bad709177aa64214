use std::time::{Duration, Instant};

use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};

use crate::{
    app::{App, Focus},
    ui,
};

pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let mut last_draw = Instant::now();
    let heartbeat = Duration::from_millis(500);
    loop {
        if app.dirty || last_draw.elapsed() >= heartbeat {
            terminal.draw(|f| ui::draw(f, app))?;
            app.dirty = false;
            last_draw = Instant::now();
        }
        if app.overlay_open() {
            let _ = terminal.hide_cursor();
        } else {
            let _ = terminal.show_cursor();
        }

        if event::poll(Duration::from_millis(120))? {
            match event::read()? {
                Event::Key(key) => app.on_key(key),
                Event::Paste(s) => {
                    if !app.overlay_open() {
                        app.insert_text(&s);
                        app.dirty = true;
                    }
                }
                Event::Resize(_, _) => app.dirty = true,
                Event::Mouse(me) => on_mouse(app, me),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn on_mouse(app: &mut App, me: MouseEvent) {
    if app.show_help || app.confirm.is_some() {
        return;
    }
    if app.show_history {
        let inside = app
            .history_area
            .is_some_and(|a| contains(a, me.column, me.row));
        if inside {
            match me.kind {
                MouseEventKind::ScrollUp => {
                    app.history_scroll_by(-3);
                    app.dirty = true;
                }
                MouseEventKind::ScrollDown => {
                    app.history_scroll_by(3);
                    app.dirty = true;
                }
                _ => {}
            }
        }
        return;
    }
    if let MouseEventKind::Down(MouseButton::Left) = me.kind {
        if app
            .ethanol_area
            .is_some_and(|a| contains(a, me.column, me.row))
        {
            app.focus = Focus::Ethanol;
            app.dirty = true;
        } else if app
            .gasoline_area
            .is_some_and(|a| contains(a, me.column, me.row))
        {
            app.focus = Focus::Gasoline;
            app.dirty = true;
        }
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
