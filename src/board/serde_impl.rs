//! Serialization and deserialization implementations for BoardData
//!
//! The data file holds the three entity arrays plus the id counter. The id
//! index is not serialized; it is rebuilt from the arrays on load.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

use super::board_data::BoardData;
use super::entity::{Milestone, Project, Task};
use super::error::EntityKind;

#[derive(Deserialize)]
#[serde(default)]
struct BoardDataFile {
    id_counter: u32,
    #[serde(rename = "project")]
    projects: Vec<Project>,
    #[serde(rename = "milestone")]
    milestones: Vec<Milestone>,
    #[serde(rename = "task")]
    tasks: Vec<Task>,
}

impl Default for BoardDataFile {
    fn default() -> Self {
        Self {
            id_counter: 0,
            projects: Vec::new(),
            milestones: Vec::new(),
            tasks: Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for BoardData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = BoardDataFile::deserialize(deserializer)?;

        let mut id_index = HashMap::new();
        for project in &file.projects {
            id_index.insert(project.id.clone(), EntityKind::Project);
        }
        for milestone in &file.milestones {
            id_index.insert(milestone.id.clone(), EntityKind::Milestone);
        }
        for task in &file.tasks {
            id_index.insert(task.id.clone(), EntityKind::Task);
        }

        Ok(BoardData {
            projects: file.projects,
            milestones: file.milestones,
            tasks: file.tasks,
            id_index,
            id_counter: file.id_counter,
        })
    }
}

impl Serialize for BoardData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("BoardData", 4)?;
        // Scalar first: TOML wants values before the entity tables
        state.serialize_field("id_counter", &self.id_counter)?;
        state.serialize_field("project", &self.projects)?;
        state.serialize_field("milestone", &self.milestones)?;
        state.serialize_field("task", &self.tasks)?;
        state.end()
    }
}
