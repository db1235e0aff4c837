use serde::{Deserialize, Serialize};

/// A single task record. The `id` is assigned by the server and never
/// changes; the client never fabricates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Create payload: everything but the id, which only the server may assign.
#[derive(Debug, Clone, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn with_title(title: String) -> Self {
        Self {
            title,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_ignores_unknown_fields() {
        // JSONPlaceholder todos carry a userId the client has no use for
        let json = r#"{"userId": 1, "id": 42, "title": "delectus aut autem", "completed": false}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 42);
        assert_eq!(todo.title, "delectus aut autem");
        assert!(!todo.completed);
    }

    #[test]
    fn new_todo_serializes_without_id() {
        let payload = NewTodo::with_title("Buy milk".to_string());
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn todo_round_trips_full_payload() {
        let todo = Todo {
            id: 5,
            title: "X".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
