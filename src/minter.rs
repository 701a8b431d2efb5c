use crate::{
    address::ObjectId,
    config::MinterConfig,
    error::{Error, Result},
    execution::ExecutionStatus,
    keys::SuiKeypair,
    ledger_client::{Connect, LedgerClient, ResponseOptions},
    transaction::{MoveCall, MoveTarget, PureArg, Transaction},
};
use std::fmt;
use tracing::{debug, info, warn};
use url::Url;


/// Module of the published package that mints
pub const MINTER_MODULE: &str = "nft_minter";
/// Entry function: `mint_nft(name, description, url)`
pub const MINT_FUNCTION: &str = "mint_nft";
/// Display name given to every minted NFT
pub const NFT_NAME: &str = "My NFT";
/// Description given to every minted NFT
pub const NFT_DESCRIPTION: &str = "Made by Bot";

/// Non-empty URL or content id pointing at the NFT's off-chain metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataReference(String);

impl MetadataReference {
    /// Fails with [`Error::MissingArgument`] on blank input. Anything else is kept as given.
    pub fn new(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(Error::MissingArgument);
        }
        Ok(MetadataReference(value.to_string()))
    }

    /// From the optional positional CLI argument
    pub fn from_arg(arg: Option<String>) -> Result<Self> {
        arg.as_deref()
            .map_or(Err(Error::MissingArgument), Self::new)
    }

    /// The reference exactly as given
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A successfully minted NFT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintedNft {
    object_id: ObjectId,
    digest: String,
    explorer_link: String,
}

impl MintedNft {
    /// Id of the minted NFT object
    pub fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    /// Digest of the mint transaction
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// `<explorer>/object/<id>`
    pub fn explorer_link(&self) -> &str {
        &self.explorer_link
    }
}

impl fmt::Display for MintedNft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✅ NFT minted: {}", self.explorer_link)
    }
}

/// `<explorer>/object/<id>`
pub fn explorer_object_link(explorer: &Url, object_id: &ObjectId) -> String {
    format!(
        "{}/object/{}",
        explorer.as_str().trim_end_matches('/'),
        object_id
    )
}

/// The one call this tool ever makes: `<package>::nft_minter::mint_nft(name, description, url)`
pub fn mint_transaction(
    package_id: &ObjectId,
    metadata: &MetadataReference,
    gas_budget: u64,
) -> Transaction {
    let target = MoveTarget::new(*package_id, MINTER_MODULE, MINT_FUNCTION);
    let arguments = vec![
        PureArg::from(NFT_NAME),
        PureArg::from(NFT_DESCRIPTION),
        PureArg::from(metadata.as_str()),
    ];
    Transaction::new()
        .with_move_call(MoveCall::new(target, arguments))
        .with_gas_budget(gas_budget)
}

/// Mints NFTs through whatever ledger `connector` opens
#[derive(Debug)]
pub struct NftMinter<C: Connect> {
    config: MinterConfig,
    connector: C,
}

impl<C: Connect> NftMinter<C> {
    /// Minter that opens ledger clients through `connector`
    pub fn new(config: MinterConfig, connector: C) -> Self {
        NftMinter { config, connector }
    }

    /// Validate the CLI argument, then [`NftMinter::mint`]. Nothing is connected or derived when
    /// the argument is missing.
    pub async fn mint_arg(&self, arg: Option<String>) -> Result<MintedNft> {
        let metadata = MetadataReference::from_arg(arg)?;
        self.mint(&metadata).await
    }

    /// Connect, derive the signer, submit one mint call and pull the new object's id out of the
    /// effects. A single attempt.
    pub async fn mint(&self, metadata: &MetadataReference) -> Result<MintedNft> {
        let client = self.connector.connect(self.config.rpc_url())?;
        let signer = SuiKeypair::from_hex(self.config.private_key_hex())?;
        debug!(sender = %signer.address(), "derived signer");

        let tx = mint_transaction(
            self.config.package_id(),
            metadata,
            self.config.gas_budget(),
        );
        info!(metadata = metadata.as_str(), "minting NFT");
        let res = client
            .sign_and_execute(&signer, &tx, ResponseOptions::effects_and_events())
            .await?;

        if let Some(ExecutionStatus::Failure(error)) = res.effects().map(|e| e.status()) {
            warn!(digest = res.digest(), error = error.as_str(), "transaction failed on chain");
        }
        let object_id = *res
            .first_created_object_id()
            .ok_or_else(|| Error::Extraction {
                digest: res.digest().to_string(),
            })?;
        let explorer_link = explorer_object_link(self.config.explorer_url(), &object_id);
        info!(%object_id, digest = res.digest(), "NFT minted");
        Ok(MintedNft {
            object_id,
            digest: res.digest().to_string(),
            explorer_link,
        })
    }
}
