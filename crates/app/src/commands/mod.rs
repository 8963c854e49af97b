//! Command handlers
//!
//! Each handler runs one use case against the [`AppContext`] and returns a
//! [`Report`]; printing is left to the binary.

pub mod applications;
pub mod auth;
pub mod jobs;
pub mod profile;
pub mod system;

use std::path::Path;
use std::time::Instant;

use anyhow::Context as _;
use jobmatch_domain::FileUpload;
use tracing::{info, warn};

use crate::cli::Command;
use crate::context::AppContext;
use crate::utils::logging::error_label;
use crate::utils::output::Report;

/// Run `command` and log its outcome.
pub async fn dispatch(ctx: &AppContext, command: Command) -> anyhow::Result<Report> {
    let name = command_name(&command);
    let started = Instant::now();

    let result = match command {
        Command::Login(args) => auth::login(ctx, args).await,
        Command::Register(args) => auth::register(ctx, args).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Whoami => auth::whoami(ctx).await,
        Command::Profile(args) => profile::update(ctx, args).await,
        Command::Jobs(cmd) => jobs::run(ctx, cmd).await,
        Command::Recommend(args) => profile::recommend(ctx, args).await,
        Command::Resume(cmd) => profile::resume(ctx, cmd).await,
        Command::Applications(cmd) => applications::run(ctx, cmd).await,
        Command::Feedback(cmd) => profile::feedback(ctx, cmd).await,
        Command::Health => system::health(ctx).await,
        Command::Analytics => system::analytics(ctx).await,
        Command::Email(cmd) => system::email(ctx, cmd).await,
    };

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    match &result {
        Ok(_) => info!(command = name, duration_ms, "command_execution_success"),
        Err(err) => warn!(
            command = name,
            duration_ms,
            error_kind = error_label(err),
            error = %err,
            "command_execution_failure"
        ),
    }
    result
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Login(_) => "login",
        Command::Register(_) => "register",
        Command::Logout => "logout",
        Command::Whoami => "whoami",
        Command::Profile(_) => "profile",
        Command::Jobs(_) => "jobs",
        Command::Recommend(_) => "recommend",
        Command::Resume(_) => "resume",
        Command::Applications(_) => "applications",
        Command::Feedback(_) => "feedback",
        Command::Health => "health",
        Command::Analytics => "analytics",
        Command::Email(_) => "email",
    }
}

/// Read a resume from disk as a multipart file part.
pub(crate) async fn read_upload(path: &Path) -> anyhow::Result<FileUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| "resume.pdf".to_string(), str::to_string);

    let mime_type = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => "application/pdf",
        Some(ext) if ext.eq_ignore_ascii_case("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some(ext) if ext.eq_ignore_ascii_case("doc") => "application/msword",
        Some(ext) if ext.eq_ignore_ascii_case("txt") => "text/plain",
        _ => "application/octet-stream",
    };

    Ok(FileUpload { file_name, mime_type: mime_type.to_string(), bytes })
}
