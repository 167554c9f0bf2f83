use std::path::Path;

/// Reads a whole file as UTF-8 text
pub async fn file_get_async(path: &Path) -> Result<String, String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))
}
