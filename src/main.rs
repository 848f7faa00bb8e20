use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    if let Err(e) = fiberctl_lib::cli::run_cli().await {
        eprintln!("CLI Error: {}", e);
        std::process::exit(1);
    }
}
