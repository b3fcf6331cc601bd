//! Common test utilities for integration tests

use taskboard_mcp::{BoardData, BoardServerHandler, Storage};
use tempfile::NamedTempFile;

/// Create a test handler with temporary storage
pub fn test_handler() -> (BoardServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = BoardServerHandler::new(temp_file.path().to_str().unwrap()).unwrap();
    (handler, temp_file)
}

/// Extract the entity id from a create response message
/// Response format: "Project created with ID: <id> (order: 0)"
pub fn extract_id(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    // Fallback: last whitespace-separated token without parentheses
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}

/// Reload the persisted board state from the handler's data file
///
/// Every successful mutation saves before returning, so this always sees
/// the latest committed state.
#[allow(dead_code)]
pub fn reload(temp_file: &NamedTempFile) -> BoardData {
    Storage::new(temp_file.path()).load().unwrap()
}

/// Create a project and a milestone under it, returning their ids
#[allow(dead_code)]
pub async fn seed_project_and_milestone(handler: &BoardServerHandler) -> (String, String) {
    let response = handler
        .handle_create_project("Launch".to_string(), None, None, None)
        .await
        .unwrap();
    let project_id = extract_id(&response);

    let response = handler
        .handle_create_milestone(project_id.clone(), "Alpha".to_string(), None, None, None, None)
        .await
        .unwrap();
    let milestone_id = extract_id(&response);

    (project_id, milestone_id)
}
