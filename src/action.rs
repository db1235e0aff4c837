use crate::error::TuidoError;
use crate::types::Todo;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,

    // Cursor within the visible page
    CursorUp,
    CursorDown,

    // Pagination (pure, no network)
    NextPage,
    PrevPage,

    // New-todo draft
    EnterInsertMode,
    ExitInsertMode,
    SubmitCreate,

    // Edit session
    BeginEdit,
    CancelEdit,
    SubmitUpdate,

    // Shared text input, dispatched by the current mode
    Input(char),
    Backspace,

    // Mutations on the selected item
    DeleteSelected,
    ToggleSelected,

    // Request completions
    LoadTodos,
    TodosLoaded(Vec<Todo>),
    Created(Todo),
    Updated(Todo),
    Deleted(u64),

    Error(String),
    None,
}

impl From<TuidoError> for Action {
    fn from(err: TuidoError) -> Self {
        Action::Error(err.to_string())
    }
}
