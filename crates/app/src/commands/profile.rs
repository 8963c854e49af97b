//! Profile, recommendation, resume and feedback commands

use anyhow::bail;
use jobmatch_domain::{NewFeedback, UserUpdate};
use serde_json::json;

use super::jobs::recommendation_table;
use super::read_upload;
use crate::cli::{FeedbackCommand, ProfileArgs, RecommendArgs, ResumeCommand};
use crate::context::AppContext;
use crate::utils::output::Report;

pub async fn update(ctx: &AppContext, args: ProfileArgs) -> anyhow::Result<Report> {
    let update = UserUpdate {
        first_name: args.first_name,
        last_name: args.last_name,
        skills: args.skills,
        experience_years: args.experience_years,
        location: args.location,
    };
    if update.is_empty() {
        bail!("Nothing to update; pass at least one profile field");
    }

    let user = ctx.sessions.update_profile(&update).await?;
    let text = format!("Updated profile of {} (skills: {})", user.display_name(), user.skills.join(", "));
    Ok(Report::message(&user, text))
}

pub async fn recommend(ctx: &AppContext, args: RecommendArgs) -> anyhow::Result<Report> {
    let user = ctx.require_user().await?;
    let recommendations = match args.skills {
        Some(skills) => ctx.profile.ai_recommendations(&user.id, &skills).await?,
        None => ctx.profile.recommendations(&user.id, args.limit).await?,
    };
    Ok(recommendation_table(&recommendations))
}

pub async fn resume(ctx: &AppContext, command: ResumeCommand) -> anyhow::Result<Report> {
    let user = ctx.require_user().await?;
    match command {
        ResumeCommand::Upload { path } => {
            let file = read_upload(&path).await?;
            let receipt = ctx.profile.upload_resume(&user.id, &file).await?;
            let text = format!("Uploaded {}", receipt.filename);
            Ok(Report::message(&receipt, text))
        }
        ResumeCommand::Match { path } => {
            let file = read_upload(&path).await?;
            let matched = ctx.profile.match_resume(&user.id, &file).await?;
            let report = recommendation_table(&matched.recommendations);
            Ok(Report::message(&matched, report.text()))
        }
        ResumeCommand::Url => {
            let url = ctx.profile.resume_url(&user.id);
            Ok(Report::message(&json!({"url": url}), url))
        }
    }
}

pub async fn feedback(ctx: &AppContext, command: FeedbackCommand) -> anyhow::Result<Report> {
    let user = ctx.require_user().await?;
    match command {
        FeedbackCommand::Submit { job_id, feedback_type, rating } => {
            let feedback =
                NewFeedback { user_id: user.id, job_id, feedback_type, rating, metadata: None };
            let stored = ctx.profile.submit_feedback(&feedback).await?;
            let text = format!("Recorded {} feedback {}", stored.feedback_type, stored.id);
            Ok(Report::message(&stored, text))
        }
        FeedbackCommand::List => {
            let history = ctx.profile.feedback_history(&user.id).await?;
            let rows = history
                .iter()
                .map(|entry| {
                    vec![
                        entry.id.clone(),
                        entry.job_id.clone(),
                        entry.feedback_type.to_string(),
                        entry.rating.map(|r| r.to_string()).unwrap_or_default(),
                        entry.timestamp.clone(),
                    ]
                })
                .collect();
            Ok(Report::table(&history, &["ID", "JOB", "TYPE", "RATING", "WHEN"], rows))
        }
    }
}
