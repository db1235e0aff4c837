use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::action::Action;
use crate::event::Event;
use crate::page;
use crate::service::TodoService;
use crate::types::{NewTodo, Todo};

/// Input mode. `Insert` routes keystrokes into the new-todo draft,
/// `Edit` into the detached working copy of an existing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Edit,
}

pub struct App {
    pub mode: Mode,

    // The in-memory mirror of the remote collection, in server order with
    // locally created items prepended.
    pub todos: Vec<Todo>,

    // Pending-creation input buffer. Cleared only when the server confirms.
    pub draft: String,

    // Detached working copy for the edit session, never an alias into `todos`.
    pub editing: Option<Todo>,

    // 1-based page, always clamped into range; cursor is an index into the
    // visible slice of the current page.
    pub page: usize,
    pub cursor: usize,

    pub loading: bool,
    pub error: Option<String>,
    pub should_quit: bool,

    service: Arc<dyn TodoService>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(service: Arc<dyn TodoService>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            mode: Mode::default(),
            todos: Vec::new(),
            draft: String::new(),
            editing: None,
            page: 1,
            cursor: 0,
            loading: false,
            error: None,
            should_quit: false,
            service,
            action_tx,
        }
    }

    /// The slice of `todos` shown on the current page.
    pub fn visible(&self) -> &[Todo] {
        let (start, end) = page::slice_bounds(self.page, self.todos.len());
        &self.todos[start..end]
    }

    pub fn selected(&self) -> Option<&Todo> {
        self.visible().get(self.cursor)
    }

    pub fn total_pages(&self) -> usize {
        page::total_pages(self.todos.len())
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Init => Action::LoadTodos,
            Event::Key(key) => self.handle_key(key),
            _ => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        // Ctrl-C quits regardless of mode, before chars reach a draft
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            Mode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
                KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
                KeyCode::Char('h') | KeyCode::Left => Action::PrevPage,
                KeyCode::Char('l') | KeyCode::Right => Action::NextPage,
                KeyCode::Char('a') => Action::EnterInsertMode,
                KeyCode::Char('e') | KeyCode::Enter => Action::BeginEdit,
                KeyCode::Char('d') => Action::DeleteSelected,
                KeyCode::Char(' ') => Action::ToggleSelected,
                _ => Action::None,
            },
            Mode::Insert => match key.code {
                KeyCode::Esc => Action::ExitInsertMode,
                KeyCode::Enter => Action::SubmitCreate,
                KeyCode::Backspace => Action::Backspace,
                KeyCode::Char(c) => Action::Input(c),
                _ => Action::None,
            },
            Mode::Edit => match key.code {
                KeyCode::Esc => Action::CancelEdit,
                KeyCode::Enter => Action::SubmitUpdate,
                KeyCode::Backspace => Action::Backspace,
                KeyCode::Char(c) => Action::Input(c),
                _ => Action::None,
            },
        }
    }

    pub fn update(&mut self, action: Action) {
        // A failure notice is transient: any following action dismisses it
        if self.error.is_some() && !matches!(action, Action::Quit) {
            self.error = None;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
            }

            Action::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::CursorDown => {
                if self.cursor + 1 < self.visible().len() {
                    self.cursor += 1;
                }
            }

            Action::NextPage => {
                self.page = page::next(self.page, self.todos.len());
                self.clamp_cursor();
            }
            Action::PrevPage => {
                self.page = page::prev(self.page);
                self.clamp_cursor();
            }

            Action::EnterInsertMode => {
                // An earlier abandoned draft is picked up where it was left
                self.mode = Mode::Insert;
            }
            Action::ExitInsertMode => {
                self.mode = Mode::Normal;
            }
            Action::SubmitCreate => {
                // No validation: an empty title is sent as-is. The draft is
                // only cleared once the server echoes the item back.
                let payload = NewTodo::with_title(self.draft.clone());
                self.loading = true;
                self.spawn_create(payload);
            }

            Action::BeginEdit => {
                // Selecting a new item silently discards any unsaved edit
                if let Some(todo) = self.selected().cloned() {
                    self.editing = Some(todo);
                    self.mode = Mode::Edit;
                }
            }
            Action::CancelEdit => {
                self.editing = None;
                self.mode = Mode::Normal;
            }
            Action::SubmitUpdate => {
                if let Some(todo) = self.editing.clone() {
                    self.loading = true;
                    self.spawn_update(todo);
                }
            }

            Action::Input(c) => match self.mode {
                Mode::Insert => self.draft.push(c),
                Mode::Edit => {
                    if let Some(editing) = &mut self.editing {
                        editing.title.push(c);
                    }
                }
                Mode::Normal => {}
            },
            Action::Backspace => match self.mode {
                Mode::Insert => {
                    self.draft.pop();
                }
                Mode::Edit => {
                    if let Some(editing) = &mut self.editing {
                        editing.title.pop();
                    }
                }
                Mode::Normal => {}
            },

            Action::DeleteSelected => {
                if let Some(todo) = self.selected() {
                    let id = todo.id;
                    self.loading = true;
                    self.spawn_delete(id);
                }
            }
            Action::ToggleSelected => {
                if let Some(todo) = self.selected() {
                    let mut payload = todo.clone();
                    payload.completed = !payload.completed;
                    self.loading = true;
                    self.spawn_update(payload);
                }
            }

            Action::LoadTodos => {
                self.loading = true;
                self.spawn_load();
            }
            Action::TodosLoaded(todos) => {
                self.loading = false;
                self.todos = todos;
                self.page = 1;
                self.cursor = 0;
            }
            Action::Created(todo) => {
                self.loading = false;
                // Prepend: the new item lands on page 1 wherever we are
                self.todos.insert(0, todo);
                self.draft.clear();
                if self.mode == Mode::Insert {
                    self.mode = Mode::Normal;
                }
            }
            Action::Updated(todo) => {
                self.loading = false;
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
                    *slot = todo.clone();
                }
                // Close the edit session only if this echo belongs to it; a
                // completed-toggle on another item must not clobber it
                if self.editing.as_ref().map(|e| e.id) == Some(todo.id) {
                    self.editing = None;
                    if self.mode == Mode::Edit {
                        self.mode = Mode::Normal;
                    }
                }
            }
            Action::Deleted(id) => {
                self.loading = false;
                self.todos.retain(|t| t.id != id);
                // Deleting the last item of a trailing page pulls us back
                self.page = page::clamp(self.page, self.todos.len());
                self.clamp_cursor();
                // An edit session on the deleted item is left dangling on
                // purpose; committing it targets a resource that is gone
            }

            Action::Error(msg) => {
                self.loading = false;
                self.error = Some(msg);
            }
            Action::None => {}
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn spawn_load(&self) {
        let tx = self.action_tx.clone();
        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            match service.list_todos().await {
                Ok(todos) => {
                    tx.send(Action::TodosLoaded(todos)).ok();
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to fetch todos");
                    tx.send(Action::from(e)).ok();
                }
            }
        });
    }

    fn spawn_create(&self, payload: NewTodo) {
        let tx = self.action_tx.clone();
        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            match service.create_todo(&payload).await {
                Ok(todo) => {
                    tx.send(Action::Created(todo)).ok();
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to create todo");
                    tx.send(Action::from(e)).ok();
                }
            }
        });
    }

    fn spawn_update(&self, payload: Todo) {
        let tx = self.action_tx.clone();
        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            match service.update_todo(&payload).await {
                Ok(todo) => {
                    tx.send(Action::Updated(todo)).ok();
                }
                Err(e) => {
                    tracing::error!(error = %e, id = payload.id, "failed to update todo");
                    tx.send(Action::from(e)).ok();
                }
            }
        });
    }

    fn spawn_delete(&self, id: u64) {
        let tx = self.action_tx.clone();
        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            match service.delete_todo(id).await {
                Ok(()) => {
                    tx.send(Action::Deleted(id)).ok();
                }
                Err(e) => {
                    tracing::error!(error = %e, id, "failed to delete todo");
                    tx.send(Action::from(e)).ok();
                }
            }
        });
    }
}
