mod action;

use clap::Parser;
use subscription_flow::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = action::AppArgs::parse();

    logger::setup_simple_logger(args.log_level)?;

    args.run().await
}
