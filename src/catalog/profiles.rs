//! Profile sets attached to sites and file servers.

use std::fmt;
use std::io::{self, Write};

use serde::Deserialize;

use crate::writer::escape_xml;

/// Namespaces a profile key can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Env,
    Condor,
    Globus,
    Dagman,
    Pegasus,
    Hints,
    Selector,
    Stat,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Namespace::Env => "env",
            Namespace::Condor => "condor",
            Namespace::Globus => "globus",
            Namespace::Dagman => "dagman",
            Namespace::Pegasus => "pegasus",
            Namespace::Hints => "hints",
            Namespace::Selector => "selector",
            Namespace::Stat => "stat",
        };
        write!(f, "{}", token)
    }
}

/// A single namespaced key/value profile.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub namespace: Namespace,
    pub key: String,
    pub value: String,
}

impl Profile {
    pub fn new(namespace: Namespace, key: &str, value: &str) -> Self {
        Self {
            namespace,
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// The ordered profile set a container node carries.
///
/// Serialized as a delegated fragment: the engine hands over the sink and
/// the indent prefix of the enclosing element's children.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Profiles {
    entries: Vec<Profile>,
}

impl Profiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, profile: Profile) {
        self.entries.push(profile);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Writes every profile as one indent-prefixed
    /// `<profile namespace="..." key="...">value</profile>` line.
    pub fn to_xml<W: Write>(&self, sink: &mut W, indent: &str) -> io::Result<()> {
        for profile in &self.entries {
            writeln!(
                sink,
                "{}<profile namespace=\"{}\" key=\"{}\">{}</profile>",
                indent,
                profile.namespace,
                escape_xml(&profile.key),
                escape_xml(&profile.value)
            )?;
        }
        Ok(())
    }
}
