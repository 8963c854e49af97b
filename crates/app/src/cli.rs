//! Command-line definitions for the `jobmatch` binary

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jobmatch_domain::{ApplicationStatus, FeedbackType};

use crate::utils::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "jobmatch", version, about = "JobMatch job-search client")]
pub struct Cli {
    /// Override the API base URL (e.g. http://127.0.0.1:8080/api)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Load configuration from this JSON or TOML file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// How results are printed
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in with email and password, or with a Google ID token
    Login(LoginArgs),

    /// Create an account and sign in
    Register(RegisterArgs),

    /// Remove stored credentials
    Logout,

    /// Verify the stored session and show the signed-in user
    Whoami,

    /// Update the signed-in user's profile
    Profile(ProfileArgs),

    /// Browse, search and match jobs
    #[command(subcommand)]
    Jobs(JobsCommand),

    /// Recommended jobs for the signed-in user
    Recommend(RecommendArgs),

    /// Upload a resume or rank jobs against one
    #[command(subcommand)]
    Resume(ResumeCommand),

    /// Track job applications
    #[command(subcommand)]
    Applications(ApplicationsCommand),

    /// Rate recommendations and outcomes
    #[command(subcommand)]
    Feedback(FeedbackCommand),

    /// Check that the API is reachable
    Health,

    /// Show server-side analytics
    Analytics,

    /// Mailbox ingestion for application tracking
    #[command(subcommand)]
    Email(EmailCommand),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long, required_unless_present = "google_id_token")]
    pub email: Option<String>,

    #[arg(long, env = "JOBMATCH_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// ID token obtained from Google sign-in
    #[arg(long, conflicts_with_all = ["email", "password"])]
    pub google_id_token: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, env = "JOBMATCH_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Comma-separated skills, replacing the stored list
    #[arg(long, value_delimiter = ',')]
    pub skills: Option<Vec<String>>,

    #[arg(long)]
    pub experience_years: Option<i32>,

    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum JobsCommand {
    /// List jobs, syncing from the upstream source when the listing is empty
    List(ListJobsArgs),

    /// Server-side search
    Search {
        query: String,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one job
    Show { job_id: String },

    /// Ask the server to pull new jobs from its upstream source
    Sync,

    /// Score a job against the signed-in user
    Match { job_id: String },

    /// Jobs similar to `job_id` for the signed-in user
    Similar { job_id: String },
}

#[derive(Args, Debug, Default)]
pub struct ListJobsArgs {
    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,

    /// Keep jobs whose title or company contains this text
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Keep jobs whose location contains this text
    #[arg(long)]
    pub location: Option<String>,

    /// Salary label such as "$80k-$120k"
    #[arg(long)]
    pub salary: Option<String>,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[arg(long)]
    pub limit: Option<u32>,

    /// Rank jobs against this skills description instead of the profile
    #[arg(long)]
    pub skills: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ResumeCommand {
    /// Attach a resume to the signed-in user's profile
    Upload { path: PathBuf },

    /// Upload a resume and rank jobs against it
    Match { path: PathBuf },

    /// Print the download URL of the stored resume
    Url,
}

#[derive(Subcommand, Debug)]
pub enum ApplicationsCommand {
    /// List applications with summary counts
    List,

    /// Apply to a job
    Create {
        job_id: String,

        #[arg(long)]
        cover_letter: Option<String>,

        #[arg(long)]
        match_score: Option<f64>,
    },

    /// Change an application's status
    Status { application_id: String, status: ApplicationStatus },

    /// AI insights for an application
    Insights { application_id: String },

    /// Attach a resume to an application
    UploadResume { application_id: String, path: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum FeedbackCommand {
    /// Rate a recommendation or outcome
    Submit {
        job_id: String,

        #[arg(long = "type")]
        feedback_type: FeedbackType,

        /// 1 to 5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,
    },

    /// Feedback submitted by the signed-in user
    List,
}

#[derive(Subcommand, Debug)]
pub enum EmailCommand {
    /// Pull new mail and update application statuses
    Sync,

    /// Classify one email, read as JSON from a file
    Analyze { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_nested_job_listing() {
        let cli = Cli::try_parse_from([
            "jobmatch",
            "--output",
            "json",
            "jobs",
            "list",
            "--limit",
            "5",
            "--salary",
            "$80k-$120k",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Command::Jobs(JobsCommand::List(args)) => {
                assert_eq!(args.limit, Some(5));
                assert_eq!(args.salary.as_deref(), Some("$80k-$120k"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn status_accepts_dashed_spelling() {
        let cli =
            Cli::try_parse_from(["jobmatch", "applications", "status", "a1", "under-review"])
                .unwrap();
        match cli.command {
            Command::Applications(ApplicationsCommand::Status { status, .. }) => {
                assert_eq!(status, ApplicationStatus::UnderReview);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn google_login_excludes_password() {
        let err = Cli::try_parse_from([
            "jobmatch",
            "login",
            "--google-id-token",
            "tok",
            "--email",
            "a@b.c",
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn skills_are_comma_separated() {
        let cli = Cli::try_parse_from(["jobmatch", "profile", "--skills", "rust,sql"]).unwrap();
        match cli.command {
            Command::Profile(args) => {
                assert_eq!(args.skills, Some(vec!["rust".to_string(), "sql".to_string()]));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
