//! Command-line surface of the clinic client.
//!
//! Each subcommand stands in for one website form: it collects the same
//! fields, runs the same validation and submits to the same endpoint.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::entities::{AppointmentFormData, ContactFormData, Credentials, SubscriptionData};

#[derive(Debug, Parser)]
#[command(name = "clinic")]
#[command(version)]
#[command(about = "Sign in and submit forms to the clinic API", long_about = None)]
pub struct Cli {
    /// API base URL (defaults to $API_BASE_URL, then http://localhost:5000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory holding the stored session (defaults to $CLINIC_STORAGE_DIR)
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login(LoginArgs),
    /// Create an account and store the session
    Signup(SignupArgs),
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Send the contact form
    Contact(ContactArgs),
    /// Book an appointment
    Appointment(AppointmentArgs),
    /// Subscribe to the newsletter
    Subscribe(SubscribeArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub message: String,
}

// Everything defaults to empty so missing fields reach the form's own check.
#[derive(Debug, Args)]
pub struct AppointmentArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Requested slot, e.g. 2026-10-20T09:30
    #[arg(long, default_value = "")]
    pub datetime: String,
    #[arg(long, default_value = "")]
    pub department: String,
    #[arg(long, default_value = "")]
    pub doctor: String,
    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Debug, Args)]
pub struct SubscribeArgs {
    #[arg(long)]
    pub email: String,
}

impl From<LoginArgs> for Credentials {
    fn from(args: LoginArgs) -> Self {
        Credentials::login(args.email, args.password)
    }
}

impl From<SignupArgs> for Credentials {
    fn from(args: SignupArgs) -> Self {
        Credentials::signup(args.name, args.email, args.password)
    }
}

impl From<ContactArgs> for ContactFormData {
    fn from(args: ContactArgs) -> Self {
        ContactFormData {
            name: args.name,
            email: args.email,
            subject: args.subject,
            message: args.message,
        }
    }
}

impl From<AppointmentArgs> for AppointmentFormData {
    fn from(args: AppointmentArgs) -> Self {
        AppointmentFormData {
            name: args.name,
            email: args.email,
            phone: args.phone,
            datetime: args.datetime,
            department: args.department,
            doctor: args.doctor,
            message: args.message,
        }
    }
}

impl From<SubscribeArgs> for SubscriptionData {
    fn from(args: SubscribeArgs) -> Self {
        SubscriptionData { email: args.email }
    }
}
