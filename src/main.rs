use clap::Parser;
use nft_minter::{
    ledger_client::rpc_ledger_client::RpcConnector, logging::init_logging, MetadataReference,
    MintedNft, MinterConfig, NftMinter, Result,
};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Metadata URL (e.g. an IPFS gateway link) stored on the NFT
    metadata: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the variables may come from the shell
    let _ = dotenvy::dotenv();
    init_logging();
    let args = Args::parse();

    match run(args.metadata).await {
        Ok(minted) => {
            println!("{}", minted);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = ?err, "mint failed");
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(metadata: Option<String>) -> Result<MintedNft> {
    let metadata = MetadataReference::from_arg(metadata)?;
    let config = MinterConfig::from_env()?;
    debug!(?config, "loaded config");
    let minter = NftMinter::new(config, RpcConnector);
    minter.mint(&metadata).await
}
