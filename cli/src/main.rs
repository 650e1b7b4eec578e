use cli::config::CONFIG_FILE;
use client::HttpTransport;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("Invoking Bedrock model configured in {}", CONFIG_FILE);

    let transport = HttpTransport::new();
    cli::execute(CONFIG_FILE, &transport, &mut std::io::stdout()).await;
}
