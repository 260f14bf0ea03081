use crate::domain::entities::SessionRecord;
use crate::domain::errors::ClientError;
use crate::domain::ports::{AuthGateway, FormGateway, SessionStore};
use crate::frameworks::cli::{Cli, Command};
use crate::frameworks::config;
use crate::interface_adapters::{ApiClient, FileSessionStore};
use crate::use_cases::{
    CurrentUserUseCase, FormSubmissionUseCase, LoginUseCase, LogoutUseCase, SignupUseCase,
};
use clap::Parser;
use std::process::ExitCode;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout carries command output.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing();

    let raw_base_url = cli.api_url.unwrap_or_else(config::api_base_url);
    let base_url = match config::parse_base_url(&raw_base_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "bad configuration");
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    let storage_dir = cli.storage_dir.unwrap_or_else(config::storage_dir);
    tracing::debug!(%base_url, storage_dir = %storage_dir.display(), "client configured.");

    let api = ApiClient::new(base_url);
    let store = FileSessionStore::new(storage_dir);

    match execute(cli.command, api.clone(), api, store).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

// Run one command and return the feedback line a form would show.
pub async fn execute<A, F, S>(
    command: Command,
    auth: A,
    forms: F,
    store: S,
) -> Result<String, ClientError>
where
    A: AuthGateway,
    F: FormGateway,
    S: SessionStore,
{
    match command {
        Command::Login(args) => {
            let record = LoginUseCase { auth, store }.execute(args.into()).await?;
            Ok(greeting(&record))
        }
        Command::Signup(args) => {
            let record = SignupUseCase { auth, store }.execute(args.into()).await?;
            Ok(greeting(&record))
        }
        Command::Logout => {
            let result = LogoutUseCase { store }.execute().await?;
            Ok(if result.cleared {
                "Signed out.".to_string()
            } else {
                "No active session.".to_string()
            })
        }
        Command::Whoami => {
            let current = CurrentUserUseCase { store }.execute().await?;
            Ok(match current {
                Some(record) => describe(&record),
                None => "Not signed in.".to_string(),
            })
        }
        Command::Contact(args) => {
            FormSubmissionUseCase { forms }
                .send_contact_form(&args.into())
                .await?;
            Ok("Message sent successfully!".to_string())
        }
        Command::Appointment(args) => {
            FormSubmissionUseCase { forms }
                .send_appointment_form(&args.into())
                .await?;
            Ok("Appointment booked successfully!".to_string())
        }
        Command::Subscribe(args) => {
            FormSubmissionUseCase { forms }
                .send_sub_form(&args.into())
                .await?;
            Ok("Subscribed successfully!".to_string())
        }
    }
}

fn greeting(record: &SessionRecord) -> String {
    let mut line = format!("Welcome, {}!", record.name);
    if record.is_doctor() {
        line.push_str(" The analytics dashboard is available.");
    }
    line
}

fn describe(record: &SessionRecord) -> String {
    let role = if record.is_doctor() { "doctor" } else { "patient" };
    format!("{} <{}> ({role})", record.name, record.email)
}
