mod cli;
mod infra;
mod report;
mod routes;
mod server;

use alumni_directory::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
