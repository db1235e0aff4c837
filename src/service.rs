use async_trait::async_trait;

use crate::error::Result;
use crate::types::{NewTodo, Todo};

/// The remote todo collection, reduced to its four operations. The app only
/// ever talks to this seam; `rest::RestService` is the production backend.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Fetch the whole collection, in server order.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Create an item; the server echoes it back with an assigned id.
    async fn create_todo(&self, new: &NewTodo) -> Result<Todo>;

    /// Full-payload update; the server echoes the updated item.
    async fn update_todo(&self, todo: &Todo) -> Result<Todo>;

    /// Delete by id. Success is signaled by response status alone.
    async fn delete_todo(&self, id: u64) -> Result<()>;
}
