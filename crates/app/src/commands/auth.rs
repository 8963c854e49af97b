//! Sign-in, registration and session commands

use anyhow::bail;
use jobmatch_domain::constants::NO_USER_LOGGED_IN;
use jobmatch_domain::{LoginCredentials, RegisterData, Session, User};
use serde_json::json;

use crate::cli::{LoginArgs, RegisterArgs};
use crate::context::AppContext;
use crate::utils::output::Report;

pub async fn login(ctx: &AppContext, args: LoginArgs) -> anyhow::Result<Report> {
    let session = match (args.google_id_token, args.email) {
        (Some(id_token), _) => ctx.sessions.login_with_google(&id_token).await?,
        (None, Some(email)) => {
            let Some(password) = args.password else {
                bail!("A password is required to sign in with email");
            };
            ctx.sessions.login(&LoginCredentials { email, password }).await?
        }
        (None, None) => bail!("Provide --email or --google-id-token"),
    };
    Ok(signed_in(&session, "Signed in as"))
}

pub async fn register(ctx: &AppContext, args: RegisterArgs) -> anyhow::Result<Report> {
    let data = RegisterData {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password: args.password,
    };
    let session = ctx.sessions.register(&data).await?;
    Ok(signed_in(&session, "Registered and signed in as"))
}

pub async fn logout(ctx: &AppContext) -> anyhow::Result<Report> {
    ctx.sessions.logout().await;
    Ok(Report::message(&json!({"signed_out": true}), "Signed out"))
}

/// Cold-start check: verify the stored token and show its user.
pub async fn whoami(ctx: &AppContext) -> anyhow::Result<Report> {
    let Some(session) = ctx.sessions.load_stored_auth().await else {
        bail!(NO_USER_LOGGED_IN);
    };
    Ok(Report::message(&session.user, describe(&session.user)))
}

fn signed_in(session: &Session, prefix: &str) -> Report {
    Report::message(&session.user, format!("{prefix} {}", describe(&session.user)))
}

fn describe(user: &User) -> String {
    format!("{} <{}> (id {})", user.display_name(), user.email, user.id)
}
