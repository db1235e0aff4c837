use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::page;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    render_list(frame, app, chunks[0]);
    render_pagination(frame, app, chunks[1]);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Todos ");

    if app.todos.is_empty() && !app.loading {
        let empty = Paragraph::new("No todos")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let w = area.width.saturating_sub(2) as usize;
    let fixed = 12; // marker(3) + space(1) + #id(6) + spaces(2)
    let flex = w.saturating_sub(fixed).max(10);

    let items: Vec<ListItem> = app
        .visible()
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let is_selected = i == app.cursor;

            let marker = if todo.completed { "[x]" } else { "[ ]" };
            let marker_color = if todo.completed {
                Color::Green
            } else {
                Color::Gray
            };

            let title = truncate_title(&todo.title, flex);

            let mut title_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if todo.completed {
                title_style = title_style
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT);
            }

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(marker_color)),
                Span::raw(" "),
                Span::styled(
                    format!("#{:<5}", todo.id),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw("  "),
                Span::styled(format!("{:<flex$}", title), title_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if !app.visible().is_empty() {
        state.select(Some(app.cursor));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Cut a title down to `max` characters for display. Titles are free text
/// typed by the user, so the cut must land on a char boundary, never a byte
/// offset inside a multibyte character.
fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() > max {
        let cut: String = title.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        title.to_string()
    }
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let total = page::total_pages(app.todos.len()).max(1);
    let at_first = app.page <= 1;
    let at_last = app.page >= total;

    let control = |label: &str, disabled: bool| {
        Span::styled(
            label.to_string(),
            if disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Cyan)
            },
        )
    };

    let line = Line::from(vec![
        control("< Prev", at_first),
        Span::raw("  "),
        Span::styled(
            format!("Page {} of {}", app.page, total),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        control("Next >", at_last),
    ]);

    let footer = Paragraph::new(line).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::TodoService;
    use crate::types::{NewTodo, Todo};
    use async_trait::async_trait;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    struct StubService;

    #[async_trait]
    impl TodoService for StubService {
        async fn list_todos(&self) -> crate::error::Result<Vec<Todo>> {
            Err(crate::error::TuidoError::Api("stub".into()))
        }
        async fn create_todo(&self, _new: &NewTodo) -> crate::error::Result<Todo> {
            Err(crate::error::TuidoError::Api("stub".into()))
        }
        async fn update_todo(&self, _todo: &Todo) -> crate::error::Result<Todo> {
            Err(crate::error::TuidoError::Api("stub".into()))
        }
        async fn delete_todo(&self, _id: u64) -> crate::error::Result<()> {
            Err(crate::error::TuidoError::Api("stub".into()))
        }
    }

    fn app_with_title(title: &str) -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(Arc::new(StubService), tx);
        app.todos = vec![Todo {
            id: 1,
            title: title.to_string(),
            completed: false,
        }];
        app
    }

    #[test]
    fn short_titles_pass_through_untouched() {
        assert_eq!(truncate_title("Buy milk", 20), "Buy milk");
    }

    #[test]
    fn long_titles_are_cut_with_an_ellipsis() {
        assert_eq!(truncate_title("aaaaaaaaaaaa", 10), "aaaaaaa...");
    }

    #[test]
    fn truncation_never_splits_a_multibyte_character() {
        // A cut at a fixed byte offset would land inside the 'é'
        let title = format!("{}é{}", "a".repeat(22), "x".repeat(10));
        let cut = truncate_title(&title, 25);
        assert_eq!(cut.chars().count(), 25);
        assert!(cut.ends_with("..."));

        let emoji = "📝".repeat(12);
        assert_eq!(truncate_title(&emoji, 8).chars().count(), 8);
    }

    #[test]
    fn narrow_terminal_renders_multibyte_titles_without_panicking() {
        let title = format!("{}é{}", "a".repeat(22), "x".repeat(10));
        let app = app_with_title(&title);

        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, &app, frame.area()))
            .unwrap();
    }
}
