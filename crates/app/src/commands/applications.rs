//! Application tracking commands

use jobmatch_domain::CreateApplicationRequest;
use serde_json::json;

use super::read_upload;
use crate::cli::ApplicationsCommand;
use crate::context::AppContext;
use crate::utils::output::{render_table, truncate, Report};

pub async fn run(ctx: &AppContext, command: ApplicationsCommand) -> anyhow::Result<Report> {
    match command {
        ApplicationsCommand::List => {
            let user = ctx.require_user().await?;
            let applications = ctx.applications.list(&user.id).await?;
            let stats = ctx.applications.statistics();

            let rows = applications
                .iter()
                .map(|app| {
                    vec![
                        app.id.clone(),
                        truncate(app.job_title.as_deref().unwrap_or(&app.job_id), 36),
                        app.company_name.clone().unwrap_or_default(),
                        app.status.to_string(),
                        app.applied_at.clone(),
                    ]
                })
                .collect::<Vec<_>>();

            let summary = format!(
                "{} total: {} pending, {} interviewing, {} rejected, {} accepted",
                stats.total, stats.pending, stats.interviewing, stats.rejected, stats.accepted
            );
            let table = render_table(&["ID", "JOB", "COMPANY", "STATUS", "APPLIED"], &rows);
            Ok(Report::message(
                &json!({"applications": applications, "statistics": stats}),
                format!("{table}\n\n{summary}"),
            ))
        }
        ApplicationsCommand::Create { job_id, cover_letter, match_score } => {
            let user = ctx.require_user().await?;
            let request = CreateApplicationRequest { job_id, cover_letter, match_score };
            let application = ctx.applications.create(&user.id, &request).await?;
            let text = format!("Created application {} ({})", application.id, application.status);
            Ok(Report::message(&application, text))
        }
        ApplicationsCommand::Status { application_id, status } => {
            ctx.applications.update_status(&application_id, status).await?;
            Ok(Report::message(
                &json!({"id": application_id, "status": status}),
                format!("Application {application_id} is now {status}"),
            ))
        }
        ApplicationsCommand::Insights { application_id } => {
            let insights = ctx.applications.insights(&application_id).await?;
            let mut lines =
                vec![format!("Success probability: {:.0}%", insights.success_probability * 100.0)];
            lines.extend(insights.improvement_suggestions.iter().map(|s| format!("- {s}")));
            Ok(Report::message(&insights, lines.join("\n")))
        }
        ApplicationsCommand::UploadResume { application_id, path } => {
            let file = read_upload(&path).await?;
            let receipt = ctx.applications.upload_resume(&application_id, &file).await?;
            let text = format!(
                "Uploaded {} ({})",
                receipt.filename,
                ctx.applications.resume_url(&application_id)
            );
            Ok(Report::message(&receipt, text))
        }
    }
}
