use clap::Parser;
use pointmap::cli::{run, Cli};
use pointmap::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
