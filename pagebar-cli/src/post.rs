use crate::error::CliError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Record shape of the sample posts feed. Only `id` and `title` are
/// rendered; the rest is carried along untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Read a JSON array of posts from disk.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, CliError> {
    let raw = fs::read_to_string(path)?;
    let posts = serde_json::from_str(&raw)?;
    Ok(posts)
}
