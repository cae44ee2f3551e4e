use crate::{
    api::{ArgentinaHolidays, Clockify},
    libs::{
        config::Config,
        error::FillError,
        filler::{FillOptions, FillOutcome, Filler, Mode},
        prompt::ConsolePrompter,
        range,
    },
    msg_debug,
};
use anyhow::Result;

#[derive(Debug, Default)]
pub struct FillArgs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub desc: Option<String>,
    pub dry_run: bool,
    pub include_weekends: bool,
}

pub async fn cmd(config: &Config, args: FillArgs) -> Result<()> {
    let mode = Mode::from_flags(args.from.as_deref(), args.to.as_deref(), args.desc.as_deref())?;
    let options = FillOptions {
        dry_run: args.dry_run,
        include_weekends: args.include_weekends,
    };

    msg_debug!("mode {:?}, {:?}", mode, options);

    let clockify = Clockify::new(config)?;
    let holidays = ArgentinaHolidays::new(config)?;
    let filler = Filler::new(config, &clockify, &holidays, &ConsolePrompter);

    match filler.run(mode, options, range::today(config.timezone)).await? {
        FillOutcome::Completed { created, failed } if !failed.is_empty() => Err(FillError::CreationFailed {
            failed: failed.len(),
            total: created.len() + failed.len(),
        }
        .into()),
        _ => Ok(()),
    }
}
