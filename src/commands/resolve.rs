//! Resolve command implementation
//!
//! Wires the collaborators together and runs one resolve: pipeline
//! config first (it configures the store), then the repository, then
//! the resolver. The correlation id is the only thing written to
//! stdout; close failures are logged but never mask the result.

use tracing::{info, warn};

use crate::cancel::{self, CancelToken};
use crate::cli::Cli;
use crate::config::{self, ConfigSources};
use crate::error::{Result, SlipfindError};
use crate::output::{OutputSink, StdoutSink};
use crate::repo::LocalRepository;
use crate::resolver::{ResolveInput, SlipResolver};
use crate::secret::{SecretSource, VaultKv};
use crate::store::{HttpSlipStore, SlipStore};

/// Run slip resolution for the configured checkout
pub fn run(cli: Cli) -> Result<()> {
    let cancel_token = CancelToken::new();
    cancel::install_ctrlc_handler(&cancel_token);

    info!(
        path = %cli.path.display(),
        depth = cli.depth,
        "starting slipfind"
    );

    // Pipeline config resolution runs up front; it configures the store.
    let sources = ConfigSources {
        secret_locator: cli.vault_path.clone(),
        secret_mount: cli.vault_mount.clone(),
        file_path: cli.pipeline_config.clone(),
    };
    let pipeline = config::resolve_pipeline(&sources, || {
        Ok(Box::new(VaultKv::from_env()?) as Box<dyn SecretSource>)
    })?;

    let endpoint = cli
        .store_url
        .as_deref()
        .ok_or(SlipfindError::StoreEndpointRequired)?;
    let store = HttpSlipStore::new(endpoint, &pipeline)?;

    let repo = LocalRepository::open(&cli.path)?;

    let result = SlipResolver::new(&repo, &store, &cancel_token)
        .resolve(ResolveInput { depth: cli.depth });

    // Release handles before reporting; a close failure must not
    // override the primary result.
    if let Err(e) = store.close() {
        warn!(error = %e, "failed to close slip store");
    }
    if let Err(e) = repo.close() {
        warn!(error = %e, "failed to close repository");
    }

    let output = result?;
    StdoutSink.write_line(&output.correlation_id)?;

    info!(
        correlation_id = %output.correlation_id,
        matched_commit = %output.matched_commit,
        repository = %output.repository,
        resolved_by = output.resolved_by,
        "slip resolution complete"
    );

    Ok(())
}
