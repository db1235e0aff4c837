mod editor;
mod todo_list;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    todo_list::render(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    // Input overlays sit on top of the list
    match app.mode {
        Mode::Insert => editor::render(frame, "New Todo", &app.draft),
        Mode::Edit => {
            if let Some(editing) = &app.editing {
                editor::render(frame, "Edit Todo", &editing.title);
            }
        }
        Mode::Normal => {}
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("tuido - Todo List ({})", app.todos.len());

    let header = Paragraph::new(Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(error) = &app.error {
        Line::from(vec![Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        )])
    } else if app.loading {
        Line::from(vec![Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )])
    } else {
        let help = match app.mode {
            Mode::Normal => {
                "j/k: nav | h/l: page | a: add | e/Enter: edit | Space: toggle | d: delete | q: quit"
            }
            Mode::Insert => "type the title | Enter: add | Esc: close",
            Mode::Edit => "type the title | Enter: save | Esc: cancel",
        };
        Line::from(vec![Span::styled(help, Style::default().fg(Color::Gray))])
    };

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}
