//! Service health, analytics and email ingestion

use anyhow::Context as _;
use jobmatch_infra::ApiError;
use serde_json::{json, Value};

use crate::cli::EmailCommand;
use crate::context::AppContext;
use crate::utils::output::Report;

pub async fn health(ctx: &AppContext) -> anyhow::Result<Report> {
    let base_url = ctx.api.client.config().base_url.clone();
    match ctx.api.system.health().await {
        Ok(response) => Ok(Report::message(
            &response,
            format!("{base_url}: {}", response.message_or("healthy")),
        )),
        Err(err @ (ApiError::Status { .. } | ApiError::Unauthorized { .. })) => {
            anyhow::bail!("{base_url} is unhealthy: {}", err.message())
        }
        Err(err) => Err(anyhow::Error::new(err).context(format!("{base_url} is unreachable"))),
    }
}

pub async fn analytics(ctx: &AppContext) -> anyhow::Result<Report> {
    let response = ctx.api.system.analytics().await?;
    let data = response.data.unwrap_or_else(|| json!({}));
    let text = serde_json::to_string_pretty(&data)?;
    Ok(Report::message(&data, text))
}

pub async fn email(ctx: &AppContext, command: EmailCommand) -> anyhow::Result<Report> {
    let response = match command {
        EmailCommand::Sync => ctx.api.system.sync_emails().await?,
        EmailCommand::Analyze { path } => {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let email: Value = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not valid JSON", path.display()))?;
            ctx.api.system.analyze_email(&email).await?
        }
    };

    let data = response.into_result("Email request failed")?.unwrap_or_else(|| json!({}));
    let text = serde_json::to_string_pretty(&data)?;
    Ok(Report::message(&data, text))
}
