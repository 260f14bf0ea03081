use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    clinic_client::run().await
}
