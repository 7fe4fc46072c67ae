//! The site-catalog domain model and description loading.
//!
//! A catalog is described in JSON and deserialized straight into the model
//! types, which the writer then walks.

mod profiles;
mod types;

pub use profiles::{Namespace, Profile, Profiles};
pub use types::{
    Arch, Connection, Directory, DirectoryType, FileServer, GatewayType, GridGateway,
    InternalMountPoint, JobType, Os, ReplicaCatalog, SchedulerType, SiteCatalogEntry, SiteStore,
};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Parses a site-catalog description from its JSON text.
pub fn parse_site_store(json: &str) -> Result<SiteStore> {
    let store: SiteStore =
        serde_json::from_str(json).context("malformed site catalog description")?;
    tracing::debug!(sites = store.sites.len(), "parsed site catalog description");
    Ok(store)
}

/// Loads a site-catalog description from a JSON file.
pub fn load_site_store<P: AsRef<Path>>(path: P) -> Result<SiteStore> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_site_store(&json)
}
