use std::io::Write;

use tracing::info;

use crate::{
    cli::DeployArgs,
    errors::ScriptError,
    output_writer::{write_deploy_output, OutputFormat},
    runtime::{DeployedContract, Runtime},
};

use super::resolve_signer;

/// Deploy `args.name` with the system contract and gateway as constructor arguments
pub async fn deploy<W: Write>(
    args: &DeployArgs,
    runtime: &dyn Runtime,
    out: &mut W,
) -> Result<DeployedContract, ScriptError> {
    let network = runtime.network_name().to_string();
    let signer = resolve_signer(runtime).await?;

    let factory = runtime.get_contract_factory(&args.name).await?;
    let contract = factory
        .deploy(&[args.system_contract.clone(), args.gateway.clone()])
        .await?;
    info!("Deployed {} at {}", contract.name, contract.address);

    write_deploy_output(
        out,
        OutputFormat::from_json_flag(args.json),
        signer,
        &network,
        &contract,
    )?;

    Ok(contract)
}
