use crate::{
    api::{Clockify, TimeTracker},
    libs::{
        config::Config,
        error::{FillError, Resource},
        lookup,
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;

pub async fn cmd(config: &Config) -> Result<()> {
    let clockify = Clockify::new(config)?;
    check_holiday_tag(&clockify, config).await?;
    Ok(())
}

/// Prints the configured workspace's tags and fails with a tag `NotFound`
/// when the holiday tag is not among them.
pub async fn check_holiday_tag<T: TimeTracker>(client: &T, config: &Config) -> Result<(), FillError> {
    let workspace = lookup::find_workspace(client, config.workspace.as_deref()).await?;
    let tags = client.tags(&workspace.id).await?;

    msg_print!(Message::TagsHeader(workspace.name.clone()), true);
    if tags.is_empty() {
        msg_info!(Message::NoTagsFound);
    } else {
        View::tags(&tags, Some(&config.holiday_tag));
    }
    println!();

    if tags.iter().any(|tag| tag.name == config.holiday_tag) {
        msg_success!(Message::HolidayTagFound(config.holiday_tag.clone()));
        Ok(())
    } else {
        msg_error!(Message::HolidayTagMissing(config.holiday_tag.clone()));
        msg_print!(Message::HolidayTagMissingHint);
        Err(FillError::NotFound(Resource::Tag(config.holiday_tag.clone())))
    }
}
