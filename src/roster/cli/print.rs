use colored::{ColoredString, Colorize};
use roster::api::{CmdMessage, MessageLevel};
use roster::commands::CmdResult;
use roster::config::RosterConfig;
use roster::model::Record;

fn styled(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

fn config_lines(config: &RosterConfig) -> Vec<String> {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{} = {}", key.bold(), value))
        .collect()
}

fn message_lines<R>(result: &CmdResult<R>) -> Vec<String> {
    result.messages.iter().map(|m| styled(m).to_string()).collect()
}

/// Lines for a command result: messages first, then records, then config.
pub(super) fn render<R: Record>(result: &CmdResult<R>) -> Vec<String> {
    let mut lines = message_lines(result);
    lines.extend(result.listed.iter().map(|r| r.to_string()));
    if let Some(config) = &result.config {
        lines.extend(config_lines(config));
    }
    lines
}

/// Lines for a result that carries no records (config, init).
pub(super) fn render_settings(result: &CmdResult<()>) -> Vec<String> {
    let mut lines = message_lines(result);
    if let Some(config) = &result.config {
        lines.extend(config_lines(config));
    }
    lines
}

pub(super) fn print_result<R: Record>(result: &CmdResult<R>) {
    for line in render(result) {
        println!("{}", line);
    }
}

pub(super) fn print_settings(result: &CmdResult<()>) {
    for line in render_settings(result) {
        println!("{}", line);
    }
}
