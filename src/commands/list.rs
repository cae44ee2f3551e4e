use crate::{
    api::{Clockify, TimeTracker},
    libs::{config::Config, messages::Message, view::View},
    msg_error, msg_info, msg_print,
};
use anyhow::Result;

pub async fn cmd(config: &Config) -> Result<()> {
    let clockify = Clockify::new(config)?;
    list_all(&clockify).await
}

/// Prints every workspace with its projects and tags. A failure listing one
/// workspace's projects or tags is reported and the listing goes on.
pub async fn list_all<T: TimeTracker>(client: &T) -> Result<()> {
    let workspaces = client.workspaces().await?;

    msg_print!(Message::WorkspacesHeader, true);
    if workspaces.is_empty() {
        msg_info!(Message::NoWorkspacesFound);
        return Ok(());
    }
    View::workspaces(&workspaces);

    for workspace in &workspaces {
        msg_print!(Message::ProjectsHeader(workspace.name.clone()), true);
        match client.projects(&workspace.id).await {
            Ok(projects) if projects.is_empty() => msg_info!(Message::NoProjectsFound),
            Ok(projects) => View::projects(&projects),
            Err(e) => msg_error!(Message::ProjectsFetchFailed(e.to_string())),
        }

        msg_print!(Message::TagsHeader(workspace.name.clone()), true);
        match client.tags(&workspace.id).await {
            Ok(tags) if tags.is_empty() => msg_info!(Message::NoTagsFound),
            Ok(tags) => View::tags(&tags, None),
            Err(e) => msg_error!(Message::TagsFetchFailed(e.to_string())),
        }
    }

    msg_print!(Message::ListConfigHint, true);
    Ok(())
}
