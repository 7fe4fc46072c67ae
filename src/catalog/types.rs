use std::fmt;
use std::io::{self, Write};

use serde::Deserialize;

use super::profiles::Profiles;
use crate::writer::escape_xml;

/// Processor architecture of a site or gateway.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86,
    X86_64,
    Amd64,
    Ia64,
    Ppc,
    Ppc_64,
    Sparcv7,
    Sparcv9,
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Arch::X86 => "x86",
            Arch::X86_64 => "x86_64",
            Arch::Amd64 => "amd64",
            Arch::Ia64 => "ia64",
            Arch::Ppc => "ppc",
            Arch::Ppc_64 => "ppc_64",
            Arch::Sparcv7 => "sparcv7",
            Arch::Sparcv9 => "sparcv9",
        };
        write!(f, "{}", token)
    }
}

/// Operating system family, written in the schema's uppercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Os {
    Linux,
    Sunos,
    Aix,
    Macosx,
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Os::Linux => "LINUX",
            Os::Sunos => "SUNOS",
            Os::Aix => "AIX",
            Os::Macosx => "MACOSX",
            Os::Windows => "WINDOWS",
        };
        write!(f, "{}", token)
    }
}

/// How a directory is scoped and retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryType {
    SharedScratch,
    SharedStorage,
    LocalScratch,
    LocalStorage,
}

impl fmt::Display for DirectoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            DirectoryType::SharedScratch => "shared-scratch",
            DirectoryType::SharedStorage => "shared-storage",
            DirectoryType::LocalScratch => "local-scratch",
            DirectoryType::LocalStorage => "local-storage",
        };
        write!(f, "{}", token)
    }
}

/// The grid middleware a gateway speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayType {
    Gt2,
    Gt4,
    Gt5,
    Condor,
    Cream,
    Batch,
    Pbs,
    Lsf,
    Sge,
    Nordugrid,
    Unicore,
}

impl fmt::Display for GatewayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            GatewayType::Gt2 => "gt2",
            GatewayType::Gt4 => "gt4",
            GatewayType::Gt5 => "gt5",
            GatewayType::Condor => "condor",
            GatewayType::Cream => "cream",
            GatewayType::Batch => "batch",
            GatewayType::Pbs => "pbs",
            GatewayType::Lsf => "lsf",
            GatewayType::Sge => "sge",
            GatewayType::Nordugrid => "nordugrid",
            GatewayType::Unicore => "unicore",
        };
        write!(f, "{}", token)
    }
}

/// The local scheduler behind a gateway contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerType {
    Fork,
    Pbs,
    Lsf,
    Condor,
    Sge,
    Unknown,
}

impl fmt::Display for SchedulerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            SchedulerType::Fork => "fork",
            SchedulerType::Pbs => "pbs",
            SchedulerType::Lsf => "lsf",
            SchedulerType::Condor => "condor",
            SchedulerType::Sge => "sge",
            SchedulerType::Unknown => "unknown",
        };
        write!(f, "{}", token)
    }
}

/// The class of jobs a gateway accepts.
///
/// `auxillary` keeps the schema's historical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Compute,
    Auxillary,
    Transfer,
    Register,
    Cleanup,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            JobType::Compute => "compute",
            JobType::Auxillary => "auxillary",
            JobType::Transfer => "transfer",
            JobType::Register => "register",
            JobType::Cleanup => "cleanup",
        };
        write!(f, "{}", token)
    }
}

/// One complete site catalog, the root of the tree handed to the serializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteStore {
    #[serde(default)]
    pub sites: Vec<SiteCatalogEntry>,
}

/// A single execution site and the resources it offers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteCatalogEntry {
    pub handle: String,
    pub arch: Arch,
    pub os: Os,
    #[serde(default)]
    pub osrelease: Option<String>,
    #[serde(default)]
    pub osversion: Option<String>,
    #[serde(default)]
    pub glibc: Option<String>,
    #[serde(default)]
    pub grid_gateways: Vec<GridGateway>,
    #[serde(default)]
    pub directories: Vec<Directory>,
    #[serde(default)]
    pub replica_catalogs: Vec<ReplicaCatalog>,
    #[serde(default)]
    pub profiles: Profiles,
}

/// A job submission endpoint for a site.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GridGateway {
    #[serde(rename = "type")]
    pub gateway_type: GatewayType,
    pub contact: String,
    pub scheduler: SchedulerType,
    #[serde(rename = "jobtype")]
    pub job_type: JobType,
    #[serde(default)]
    pub os: Option<Os>,
    #[serde(default)]
    pub arch: Option<Arch>,
    #[serde(default)]
    pub osrelease: Option<String>,
    #[serde(default)]
    pub osversion: Option<String>,
    #[serde(default)]
    pub glibc: Option<String>,
    #[serde(default)]
    pub idle_nodes: Option<u32>,
    #[serde(default)]
    pub total_nodes: Option<u32>,
}

/// A storage directory a site exposes, with the file servers that serve it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Directory {
    #[serde(rename = "type")]
    pub directory_type: DirectoryType,
    #[serde(default)]
    pub internal_mount_point: Option<InternalMountPoint>,
    #[serde(default)]
    pub file_servers: Vec<FileServer>,
}

impl Directory {
    /// A directory with no mount point information serializes to nothing.
    pub fn is_empty(&self) -> bool {
        self.internal_mount_point.is_none()
    }
}

/// Where a directory is mounted on the site, with optional size hints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InternalMountPoint {
    pub path: String,
    #[serde(default)]
    pub free_size: Option<String>,
    #[serde(default)]
    pub total_size: Option<String>,
}

/// A server through which a directory's files are reachable.
#[derive(Debug, Clone, Deserialize)]
pub struct FileServer {
    pub url: String,
    #[serde(default)]
    pub profiles: Profiles,
}

/// A replica catalog a site registers its outputs with.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReplicaCatalog {
    #[serde(rename = "type")]
    pub catalog_type: String,
    pub url: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl ReplicaCatalog {
    /// Writes one `<alias name="..."/>` line for a registered alias.
    pub fn write_alias<W: Write>(&self, sink: &mut W, indent: &str, alias: &str) -> io::Result<()> {
        writeln!(sink, "{}<alias name=\"{}\"/>", indent, escape_xml(alias))
    }
}

/// A keyed connection parameter of a replica catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection {
    pub key: String,
    pub value: String,
}
