use clap::Parser;
use contract_tasks::{
    cli::Cli, config::NetworkConfig, errors::ScriptError, runtime::rpc::RpcRuntime,
};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli {
        network,
        rpc_url,
        private_key,
        artifacts,
        command,
    } = Cli::parse();

    // Logs go to stderr, stdout only carries the task output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let network = NetworkConfig::resolve(&network, rpc_url.as_deref())?;
    let runtime = RpcRuntime::new(network, private_key.as_deref(), artifacts)?;

    command.run(&runtime).await
}
