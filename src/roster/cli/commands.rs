use super::print::{print_result, print_settings};
use super::setup::{Cli, Commands, ContactCommands, TaskCommands};
use clap::Parser;
use roster::api::{self, ConfigAction, MessageLevel, RosterApi};
use roster::commands::CmdResult;
use roster::error::{Result, RosterError};
use roster::init::{initialize, RosterContext};
use roster::logging;
use roster::model::{ContactDraft, ContactPatch, Record, SearchField, TaskDraft};
use roster::query::StatusFilter;
use roster::store::DataStore;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = initialize()?;
    match cli.command {
        Commands::Contacts(cmd) => handle_contacts(&ctx, cmd),
        Commands::Tasks(cmd) => handle_tasks(&ctx, cmd),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Init => handle_init(&ctx),
    }
}

fn handle_contacts(ctx: &RosterContext, cmd: ContactCommands) -> Result<()> {
    let mut api = ctx.contacts()?;
    let result = match cmd {
        ContactCommands::List => api.list(StatusFilter::All)?,
        ContactCommands::Add { name, phone, email } => {
            let mut draft = ContactDraft::new(name.trim(), phone.trim());
            if let Some(email) = email {
                draft = draft.with_email(email.trim());
            }
            api.add(draft)?
        }
        ContactCommands::Show { selector } => api.show(&selector)?,
        ContactCommands::Search { query, phone } => {
            let field = if phone {
                SearchField::Phone
            } else {
                SearchField::Name
            };
            api.search(&query, field)?
        }
        ContactCommands::Update {
            selector,
            name,
            phone,
            email,
        } => {
            let patch = ContactPatch {
                name: trimmed(name),
                phone: trimmed(phone),
                email: trimmed(email),
            };
            api.update(&selector, patch)?
        }
        ContactCommands::Delete { selector } => api.delete(&selector)?,
    };
    finish(&mut api, result)
}

fn handle_tasks(ctx: &RosterContext, cmd: TaskCommands) -> Result<()> {
    let mut api = ctx.tasks()?;
    let result = match cmd {
        TaskCommands::List { status } => api.list(status)?,
        TaskCommands::Add {
            description,
            priority,
        } => api.add(TaskDraft::new(description.join(" "), priority.trim()))?,
        TaskCommands::Complete { id } => api.complete(&id)?,
        TaskCommands::Delete { completed: true, .. } => api.purge_completed()?,
        TaskCommands::Delete { id, .. } => api.delete(id.as_deref().unwrap_or_default())?,
    };
    finish(&mut api, result)
}

fn handle_config(ctx: &RosterContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = api::config(&ctx.paths, action)?;
    report(result)
}

fn handle_init(ctx: &RosterContext) -> Result<()> {
    let result = api::init(&ctx.paths)?;
    report(result)
}

/// Saves when the command changed something, then prints.
fn finish<R: Record, S: DataStore<R>>(
    api: &mut RosterApi<R, S>,
    result: CmdResult<R>,
) -> Result<()> {
    if result.is_mutation() {
        api.save()?;
    }
    print_result(&result);
    Ok(())
}

/// Prints a record-less result; an error-level message fails the command.
fn report(result: CmdResult<()>) -> Result<()> {
    if let Some(error) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(RosterError::Config(error.content.clone()));
    }
    print_settings(&result);
    Ok(())
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
