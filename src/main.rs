//! Service entry point.

#[tokio::main]
async fn main() {
    if let Err(e) = chartwright::run().await {
        eprintln!("chartwright failed: {e}");
        std::process::exit(1);
    }
}
