//! List job headers and download per-second data for the first job.
//!
//! Run with:
//!
//! ```sh
//! WDL_API_KEY=... cargo run --example fetch_job
//! ```
//!
//! Set `RUST_LOG=welldatalabs=debug` to see each request.

use std::env;

use tracing_subscriber::EnvFilter;
use welldatalabs::api::PerSecDataRequest;
use welldatalabs::WellDataClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = env::var("WDL_API_KEY").map_err(|_| "WDL_API_KEY must be set")?;
    let client = WellDataClient::new(api_key)?;

    let headers = client.job_headers().get_all().await?;
    println!("{} job headers", headers.len());
    for header in headers.iter().take(10) {
        println!(
            "  {}  {:<20}  {}",
            header.job_id,
            header.api.as_deref().unwrap_or("-"),
            header.well_name.as_deref().unwrap_or("-"),
        );
    }

    let Some(first) = headers.first() else {
        return Ok(());
    };

    let summaries = client.job_summaries().get(first.job_id.as_str(), None).await?;
    if let Some(summary) = summaries.first() {
        println!(
            "summary: {} columns x {} rows",
            summary.column_metadata.len(),
            summary.row_data.len()
        );
    }

    let request = PerSecDataRequest::new(first.job_id.as_str());
    match client.per_sec_data().download_to_file(&request).await {
        Ok(path) => {
            let size = tokio::fs::metadata(&path).await?.len();
            println!("per-second data: {} bytes at {}", size, path.display());
        }
        Err(e) if e.is_client_error() => {
            println!("per-second data unavailable: {}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
