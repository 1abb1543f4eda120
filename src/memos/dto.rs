use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateMemoRequest {
    pub content: String,
}

impl CreateMemoRequest {
    /// `None` for blank memos, which are never stored.
    pub fn content(&self) -> Option<&str> {
        let trimmed = self.content.trim();
        (!trimmed.is_empty()).then_some(self.content.as_str())
    }
}
