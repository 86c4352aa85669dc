use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use codex_sessions::consts::SOURCE_DISPLAY_NAME;
use codex_sessions::utils::Timezone;
use codex_sessions::{
    AppError, SessionInfo, default_sessions_dir, find_by_prefix, list_sessions, sessions_dir_in,
};

use crate::cli::{Cli, Commands};
use crate::output::{
    SessionTableOptions, output_session_json, output_single_session_json, print_session_table,
};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) timezone: Timezone,
    pub(crate) sessions_dir: PathBuf,
}

impl CommandContext<'_> {
    /// Enumerate sessions, reporting the count on stderr unless quiet
    fn load_sessions(&self, quiet: bool) -> Result<Vec<SessionInfo>, AppError> {
        let start = Instant::now();
        let sessions = list_sessions(&self.sessions_dir)?;
        if !quiet {
            eprintln!(
                "Found {} {} sessions in {} ({:.2}ms)",
                sessions.len(),
                SOURCE_DISPLAY_NAME,
                self.sessions_dir.display(),
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
        Ok(sessions)
    }

    fn limited<'s>(&self, sessions: Vec<&'s SessionInfo>) -> Vec<&'s SessionInfo> {
        match self.cli.limit {
            Some(limit) => sessions.into_iter().take(limit).collect(),
            None => sessions,
        }
    }

    fn print_sessions(&self, sessions: &[&SessionInfo]) -> Result<(), AppError> {
        if self.cli.json {
            println!("{}", output_session_json(sessions)?);
        } else {
            print_session_table(
                sessions,
                SessionTableOptions {
                    use_color: self.cli.use_color(),
                    compact: self.cli.compact,
                    timezone: self.timezone,
                    source_label: SOURCE_DISPLAY_NAME,
                },
            );
        }
        Ok(())
    }
}

fn handle_list(ctx: &CommandContext<'_>) -> Result<ExitCode, AppError> {
    let sessions = ctx.load_sessions(ctx.cli.quiet)?;
    if sessions.is_empty() && !ctx.cli.json {
        println!("No {SOURCE_DISPLAY_NAME} sessions found.");
        return Ok(ExitCode::SUCCESS);
    }
    let shown = ctx.limited(sessions.iter().collect());
    ctx.print_sessions(&shown)?;
    Ok(ExitCode::SUCCESS)
}

fn handle_find(ctx: &CommandContext<'_>, prefix: &str) -> Result<ExitCode, AppError> {
    let sessions = ctx.load_sessions(ctx.cli.quiet)?;
    let matches = ctx.limited(find_by_prefix(&sessions, prefix));
    if matches.is_empty() && !ctx.cli.json {
        println!("No {SOURCE_DISPLAY_NAME} sessions matching \"{prefix}\".");
        return Ok(ExitCode::SUCCESS);
    }
    ctx.print_sessions(&matches)?;
    Ok(ExitCode::SUCCESS)
}

/// Print the newest session; meant for scripts, so always quiet
fn handle_latest(ctx: &CommandContext<'_>) -> Result<ExitCode, AppError> {
    let sessions = ctx.load_sessions(true)?;
    let Some(latest) = sessions.first() else {
        eprintln!("No {SOURCE_DISPLAY_NAME} sessions found.");
        return Ok(ExitCode::FAILURE);
    };
    if ctx.cli.json {
        println!("{}", output_single_session_json(latest)?);
    } else {
        println!("{}", latest.identifier);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_path(ctx: &CommandContext<'_>) -> ExitCode {
    println!("{}", ctx.sessions_dir.display());
    ExitCode::SUCCESS
}

pub(crate) fn run(cli: &Cli) -> Result<ExitCode, AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let sessions_dir = match &cli.home {
        Some(home) => sessions_dir_in(home),
        None => default_sessions_dir(),
    };
    let ctx = CommandContext {
        cli,
        timezone,
        sessions_dir,
    };

    match Commands::or_default(cli.command.clone()) {
        Commands::List => handle_list(&ctx),
        Commands::Latest => handle_latest(&ctx),
        Commands::Find { prefix } => handle_find(&ctx, &prefix),
        Commands::Path => Ok(handle_path(&ctx)),
    }
}
