use clap::Parser;
use dotenv::dotenv;
use merkle_nft_deploy::{cli::Cli, errors::ScriptError};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli {
        priv_key,
        rpc_url,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    command.run(priv_key, rpc_url).await
}
