//! End-to-end tests driving the MCP tool handlers, including persistence.

mod common;

use common::{extract_id, reload, seed_project_and_milestone, test_handler};

#[tokio::test]
async fn create_and_list_round_trip() {
    let (handler, _temp_file) = test_handler();

    let response = handler
        .handle_create_project(
            "Website".to_string(),
            Some("relaunch".to_string()),
            Some("2026-10-01".to_string()),
            None,
        )
        .await
        .unwrap();
    let project_id = extract_id(&response);

    let listing = handler.handle_list_projects().await.unwrap();
    assert!(listing.contains(&project_id));
    assert!(listing.contains("Website"));
    assert!(listing.contains("relaunch"));
    assert!(listing.contains("2026-10-01"));
}

#[tokio::test]
async fn empty_board_lists_nothing() {
    let (handler, _temp_file) = test_handler();
    let listing = handler.handle_list_projects().await.unwrap();
    assert_eq!(listing, "No projects found");
}

#[tokio::test]
async fn mutations_persist_across_handler_restart() {
    let (handler, temp_file) = test_handler();
    let (project_id, milestone_id) = seed_project_and_milestone(&handler).await;

    let response = handler
        .handle_create_task(
            milestone_id.clone(),
            "Write docs".to_string(),
            None,
            Some("In Progress".to_string()),
            None,
            None,
            None,
        )
        .await
        .unwrap();
    let task_id = extract_id(&response);

    // A fresh handler on the same file sees the committed state
    let reborn = taskboard_mcp::BoardServerHandler::new(temp_file.path().to_str().unwrap()).unwrap();
    let listing = reborn.handle_get_project(project_id).await.unwrap();
    assert!(listing.contains(&task_id));
    assert!(listing.contains("Write docs"));
    assert!(listing.contains("In Progress"));
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let (handler, temp_file) = test_handler();
    let (_, milestone_id) = seed_project_and_milestone(&handler).await;

    let response = handler
        .handle_create_task(
            milestone_id,
            "Fix login".to_string(),
            Some("intermittent 500s".to_string()),
            None,
            None,
            None,
            None,
        )
        .await
        .unwrap();
    let task_id = extract_id(&response);

    handler
        .handle_update_task(
            task_id.clone(),
            None,
            None,
            Some("Blocked".to_string()),
            Some(true),
            None,
            None,
        )
        .await
        .unwrap();

    let data = reload(&temp_file);
    let task = data.find_task(&task_id).unwrap();
    assert_eq!(task.name, "Fix login");
    assert_eq!(task.details.as_deref(), Some("intermittent 500s"));
    assert_eq!(task.status, taskboard_mcp::Status::Blocked);
    assert!(task.completed);
}

#[tokio::test]
async fn update_clears_fields_with_empty_string() {
    let (handler, temp_file) = test_handler();

    let response = handler
        .handle_create_project(
            "P".to_string(),
            Some("notes".to_string()),
            Some("2026-01-01".to_string()),
            None,
        )
        .await
        .unwrap();
    let project_id = extract_id(&response);

    handler
        .handle_update_project(project_id.clone(), None, Some(String::new()), Some(String::new()))
        .await
        .unwrap();

    let data = reload(&temp_file);
    let project = data.find_project(&project_id).unwrap();
    assert_eq!(project.details, None);
    assert_eq!(project.due_date, None);
}

#[tokio::test]
async fn reorder_tools_apply_new_sequence() {
    let (handler, temp_file) = test_handler();
    let (_, milestone_id) = seed_project_and_milestone(&handler).await;

    let mut task_ids = Vec::new();
    for name in ["a", "b", "c"] {
        let response = handler
            .handle_create_task(milestone_id.clone(), name.to_string(), None, None, None, None, None)
            .await
            .unwrap();
        task_ids.push(extract_id(&response));
    }

    let new_sequence = vec![task_ids[2].clone(), task_ids[0].clone(), task_ids[1].clone()];
    handler
        .handle_reorder_tasks(milestone_id.clone(), new_sequence.clone())
        .await
        .unwrap();

    let data = reload(&temp_file);
    let read_back: Vec<String> = data
        .tasks_of(&milestone_id)
        .iter()
        .map(|t| t.id.clone())
        .collect();
    assert_eq!(read_back, new_sequence);
}

#[tokio::test]
async fn move_task_tool_reparents() {
    let (handler, temp_file) = test_handler();
    let (project_id, m1) = seed_project_and_milestone(&handler).await;

    let response = handler
        .handle_create_milestone(project_id, "Beta".to_string(), None, None, None, None)
        .await
        .unwrap();
    let m2 = extract_id(&response);

    let response = handler
        .handle_create_task(m1.clone(), "T".to_string(), None, None, None, None, None)
        .await
        .unwrap();
    let task_id = extract_id(&response);

    handler
        .handle_move_task(task_id.clone(), m2.clone(), 0)
        .await
        .unwrap();

    let data = reload(&temp_file);
    assert_eq!(data.find_task(&task_id).unwrap().milestone_id, m2);
    assert!(data.tasks_of(&m1).is_empty());
}

#[tokio::test]
async fn delete_project_tool_cascades() {
    let (handler, temp_file) = test_handler();
    let (project_id, milestone_id) = seed_project_and_milestone(&handler).await;
    let response = handler
        .handle_create_task(milestone_id.clone(), "T".to_string(), None, None, None, None, None)
        .await
        .unwrap();
    let task_id = extract_id(&response);

    handler.handle_delete_project(project_id).await.unwrap();

    let data = reload(&temp_file);
    assert!(data.board_view().is_empty());
    assert!(data.find_milestone(&milestone_id).is_none());
    assert!(data.find_task(&task_id).is_none());
}

#[tokio::test]
async fn invalid_inputs_are_rejected() {
    let (handler, _temp_file) = test_handler();
    let (project_id, milestone_id) = seed_project_and_milestone(&handler).await;

    // Empty name
    let result = handler
        .handle_create_project("  ".to_string(), None, None, None)
        .await;
    assert!(result.is_err());

    // Malformed date
    let result = handler
        .handle_create_milestone(
            project_id.clone(),
            "M".to_string(),
            None,
            None,
            Some("next tuesday".to_string()),
            None,
        )
        .await;
    assert!(result.is_err());

    // Unknown status
    let result = handler
        .handle_update_milestone(
            milestone_id,
            None,
            None,
            Some("Cancelled".to_string()),
            None,
        )
        .await;
    assert!(result.is_err());

    // Dangling parent reference
    let result = handler
        .handle_create_task("id_404".to_string(), "T".to_string(), None, None, None, None, None)
        .await;
    assert!(result.is_err());

    // Missing update target
    let result = handler
        .handle_update_project("id_404".to_string(), Some("x".to_string()), None, None)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn get_project_unknown_id_errors() {
    let (handler, _temp_file) = test_handler();
    let result = handler.handle_get_project("id_404".to_string()).await;
    assert!(result.is_err());
}
