mod http;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use registration::{
    BackendConfig, DEFAULT_BACKEND_URL, DEFAULT_REQUEST_TIMEOUT_SECS, Field, Registration, RegistrationFlow,
    RegistrationResult, Role,
};

use crate::http::HttpApi;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] registration::ConfigError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("registration failed: {0}")]
    Rejected(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "meetup-cli", about = "Register attendees and inspect the meetup registration service")]
struct Cli {
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    base_url: String,

    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one registration.
    Register(RegisterArgs),
    /// List registrations, newest first.
    List {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check that the service is up.
    Health,
    /// Print the role labels offered by the form.
    Roles,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    company: String,
    /// One of the form's role labels (case-insensitive) or free text.
    #[arg(long)]
    role: String,
}

impl RegisterArgs {
    /// Load the arguments into a fresh flow, canonicalizing known roles.
    fn into_flow(self) -> RegistrationFlow {
        let role = Role::from_label(&self.role).map_or(self.role, |role| role.label().to_owned());
        let mut flow = RegistrationFlow::new();
        flow.update_field(Field::Name, self.name);
        flow.update_field(Field::Email, self.email);
        flow.update_field(Field::Company, self.company);
        flow.update_field(Field::Role, role);
        flow
    }
}

impl Cli {
    fn backend_config(&self) -> Result<BackendConfig, CliError> {
        Ok(BackendConfig::from_base_url(Some(&self.base_url))?.with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpApi::new(cli.backend_config()?)?;
    tracing::debug!(base_url = %api.config().base_url, "using registration service");

    match cli.command {
        Command::Register(args) => {
            let mut flow = args.into_flow();
            let result = registration::submit(&mut flow, &api).await;
            match result {
                Some(result) => println!("{}", render_confirmation(&result)),
                None => {
                    let message = flow.error_message().unwrap_or(registration::GENERIC_FAILURE_MESSAGE);
                    return Err(CliError::Rejected(message.to_owned()));
                }
            }
        }
        Command::List { json } => {
            let registrations = api.list_registrations().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&registrations)?);
            } else {
                println!("{}", render_table(&registrations));
            }
        }
        Command::Health => {
            let health = api.health().await?;
            println!("{} ({}) at {}", health.status, health.service, health.timestamp);
        }
        Command::Roles => {
            for role in Role::ALL {
                println!("{}", role.label());
            }
        }
    }
    Ok(())
}

fn render_confirmation(result: &RegistrationResult) -> String {
    format!(
        "Registration successful!\n  Name:            {}\n  Email:           {}\n  Company:         {}\n  Role:            {}\n  Registration ID: {}",
        result.input.name, result.input.email, result.input.company, result.input.role, result.id
    )
}

fn render_table(registrations: &[Registration]) -> String {
    if registrations.is_empty() {
        return "no registrations yet".to_owned();
    }
    registrations
        .iter()
        .map(|r| format!("{}\t{}\t{}\t{}\t{}", r.id, r.name, r.email, r.company, r.role))
        .collect::<Vec<_>>()
        .join("\n")
}
