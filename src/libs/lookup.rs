//! Name → ID resolution for the configured workspace, project and tags.

use crate::api::{TimeTracker, Workspace};
use crate::libs::{
    config::Config,
    error::{FillError, Resource},
};

/// IDs every fill run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIds {
    pub workspace_id: String,
    pub project_id: String,
    pub tag_id: String,
    pub holiday_tag_id: String,
}

/// Picks the workspace called `name`, or the first one when `name` is `None`.
pub async fn find_workspace<T: TimeTracker>(client: &T, name: Option<&str>) -> Result<Workspace, FillError> {
    let mut workspaces = client.workspaces().await?;
    if workspaces.is_empty() {
        return Err(FillError::NotFound(Resource::NoWorkspaces));
    }

    match name {
        None => Ok(workspaces.swap_remove(0)),
        Some(name) => workspaces
            .into_iter()
            .find(|workspace| workspace.name == name)
            .ok_or_else(|| FillError::NotFound(Resource::Workspace(name.to_string()))),
    }
}

pub async fn find_project_id<T: TimeTracker>(client: &T, workspace_id: &str, name: &str) -> Result<String, FillError> {
    client
        .projects(workspace_id)
        .await?
        .into_iter()
        .find(|project| project.name == name)
        .map(|project| project.id)
        .ok_or_else(|| FillError::NotFound(Resource::Project(name.to_string())))
}

pub async fn find_tag_id<T: TimeTracker>(client: &T, workspace_id: &str, name: &str) -> Result<String, FillError> {
    client
        .tags(workspace_id)
        .await?
        .into_iter()
        .find(|tag| tag.name == name)
        .map(|tag| tag.id)
        .ok_or_else(|| FillError::NotFound(Resource::Tag(name.to_string())))
}

/// Resolves every configured name, stopping at the first one that is missing.
pub async fn resolve<T: TimeTracker>(client: &T, config: &Config) -> Result<ResolvedIds, FillError> {
    let workspace = find_workspace(client, config.workspace.as_deref()).await?;
    tracing::debug!(workspace = %workspace.name, id = %workspace.id, "workspace resolved");

    let project_id = find_project_id(client, &workspace.id, &config.project).await?;
    let tag_id = find_tag_id(client, &workspace.id, &config.tag).await?;
    let holiday_tag_id = find_tag_id(client, &workspace.id, &config.holiday_tag).await?;

    Ok(ResolvedIds {
        workspace_id: workspace.id,
        project_id,
        tag_id,
        holiday_tag_id,
    })
}
