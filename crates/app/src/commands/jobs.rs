//! Job listing, search and matching commands

use jobmatch_core::{JobFeed, JobFilter};
use jobmatch_domain::constants::DEFAULT_PAGE_SIZE;
use jobmatch_domain::{Job, JobRecommendation, JobSearchParams};
use serde_json::json;
use tracing::debug;

use crate::cli::{JobsCommand, ListJobsArgs};
use crate::context::AppContext;
use crate::utils::output::{truncate, Report};

const JOB_HEADERS: [&str; 5] = ["ID", "TITLE", "COMPANY", "LOCATION", "SALARY"];
const RECOMMENDATION_HEADERS: [&str; 4] = ["ID", "TITLE", "COMPANY", "MATCH"];

pub async fn run(ctx: &AppContext, command: JobsCommand) -> anyhow::Result<Report> {
    match command {
        JobsCommand::List(args) => list(ctx, args).await,
        JobsCommand::Search { query, limit } => {
            let params = JobSearchParams { limit, ..JobSearchParams::query(query) };
            let jobs = ctx.jobs.search(&params).await?;
            Ok(job_table(&jobs))
        }
        JobsCommand::Show { job_id } => {
            let job = ctx.jobs.get_job(&job_id).await?;
            Ok(Report::message(&job, describe_job(&job)))
        }
        JobsCommand::Sync => {
            let text = match ctx.jobs.sync().await? {
                Some(sync) => format!("{} ({} jobs added)", sync.message, sync.jobs_added),
                None => "Sync finished".to_string(),
            };
            Ok(Report::message(&json!({"synced": true}), text))
        }
        JobsCommand::Match { job_id } => {
            let user = ctx.require_user().await?;
            let result = ctx.jobs.match_with_user(&job_id, &user.id).await?;
            let text = serde_json::to_string_pretty(&result)?;
            Ok(Report::message(&result, text))
        }
        JobsCommand::Similar { job_id } => {
            let user = ctx.require_user().await?;
            let recommendations = ctx.jobs.recommendations(&user.id, &job_id).await?;
            Ok(recommendation_table(&recommendations))
        }
    }
}

/// Load one page into a feed and apply the client-side filter.
async fn list(ctx: &AppContext, args: ListJobsArgs) -> anyhow::Result<Report> {
    let params = JobSearchParams {
        q: None,
        limit: Some(args.limit.unwrap_or(DEFAULT_PAGE_SIZE)),
        offset: args.offset,
    };
    let append = args.offset.is_some_and(|offset| offset > 0);

    let mut feed = JobFeed::new();
    ctx.jobs.load_into(&mut feed, &params, append).await?;

    let mut filter = JobFilter::new(args.filter);
    if let Some(location) = args.location {
        filter = filter.with_location(location);
    }
    if let Some(salary) = args.salary {
        filter = filter.with_salary(salary);
    }

    let visible: Vec<Job> = filter.apply(feed.jobs()).into_iter().cloned().collect();
    debug!(loaded = feed.len(), shown = visible.len(), "Applied job filter");
    Ok(job_table(&visible))
}

pub(crate) fn job_table(jobs: &[Job]) -> Report {
    let rows = jobs
        .iter()
        .map(|job| {
            vec![
                job.id.clone(),
                truncate(&job.title, 40),
                truncate(&job.company, 24),
                job.location.clone().unwrap_or_default(),
                job.salary.clone().unwrap_or_default(),
            ]
        })
        .collect();
    Report::table(&jobs, &JOB_HEADERS, rows)
}

pub(crate) fn recommendation_table(recommendations: &[JobRecommendation]) -> Report {
    let rows = recommendations
        .iter()
        .map(|rec| {
            vec![
                rec.job.id.clone(),
                truncate(&rec.job.title, 40),
                truncate(&rec.job.company, 24),
                rec.percentage().map(|pct| format!("{pct:.0}%")).unwrap_or_default(),
            ]
        })
        .collect();
    Report::table(&recommendations, &RECOMMENDATION_HEADERS, rows)
}

fn describe_job(job: &Job) -> String {
    let mut lines = vec![format!("{} at {}", job.title, job.company)];
    if let Some(location) = &job.location {
        lines.push(format!("Location: {location}"));
    }
    if let Some(salary) = &job.salary {
        lines.push(format!("Salary:   {salary}"));
    }
    if let Some(job_type) = &job.job_type {
        lines.push(format!("Type:     {job_type}"));
    }
    lines.push(format!("Apply:    {}", job.url));
    if !job.description.is_empty() {
        lines.push(String::new());
        lines.push(job.description.clone());
    }
    lines.join("\n")
}
