//! Visit/depart handlers for each site-catalog node type.

use std::io::Write;

use crate::catalog::{
    Connection, Directory, FileServer, GridGateway, ReplicaCatalog, SiteCatalogEntry, SiteStore,
};

use super::error::WriteError;
use super::tags::TagWriter;

/// One node of the site-catalog tree, as handed to the serializer.
///
/// The set is closed: adding a node type means adding a variant here, and
/// every match in this module stops compiling until the new variant is
/// handled.
#[derive(Debug, Clone, Copy)]
pub enum SiteData<'a> {
    Store(&'a SiteStore),
    Site(&'a SiteCatalogEntry),
    Grid(&'a GridGateway),
    Directory(&'a Directory),
    FileServer(&'a FileServer),
    ReplicaCatalog(&'a ReplicaCatalog),
    Connection(&'a Connection),
}

/// What a visit opened, so the matching depart closes exactly that.
#[derive(Debug, Clone, Copy)]
enum Frame {
    Open(&'static str),
    Empty,
}

/// One serialization session: site-catalog nodes in, sc-4.0 XML fragments
/// out.
///
/// A driver calls [`visit`](Self::visit) before a node's children and
/// [`depart`](Self::depart) after them; [`walk`] does exactly that for a
/// whole subtree. Every visit pushes one frame recording which tag it opened
/// (if any) and every depart pops one, so an opened element is closed exactly
/// once even when a visit writes nothing at all.
///
/// The engine emits fragments only. The XML declaration and the enclosing
/// `<sitecatalog>` root are the caller's responsibility.
pub struct XmlSiteWriter<W: Write> {
    tags: TagWriter<W>,
    frames: Vec<Frame>,
}

impl<W: Write> XmlSiteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            tags: TagWriter::new(sink),
            frames: Vec::new(),
        }
    }

    /// Current nesting depth, zero at session start and end.
    pub fn depth(&self) -> usize {
        self.tags.depth()
    }

    /// Emits the opening fragment for a node.
    pub fn visit(&mut self, node: SiteData<'_>) -> Result<(), WriteError> {
        let frame = match node {
            SiteData::Store(_) => Frame::Empty,
            SiteData::Site(entry) => {
                self.tags.open_tag(
                    "site",
                    &[
                        ("handle", Some(entry.handle.clone())),
                        ("arch", Some(entry.arch.to_string())),
                        ("os", Some(entry.os.to_string())),
                        ("osrelease", entry.osrelease.clone()),
                        ("osversion", entry.osversion.clone()),
                        ("glibc", entry.glibc.clone()),
                    ],
                )?;
                Frame::Open("site")
            }
            SiteData::Grid(gateway) => {
                // no children in this schema, so the element self-closes
                self.tags.empty_tag(
                    "grid",
                    &[
                        ("type", Some(gateway.gateway_type.to_string())),
                        ("contact", Some(gateway.contact.clone())),
                        ("scheduler", Some(gateway.scheduler.to_string())),
                        ("jobtype", Some(gateway.job_type.to_string())),
                        ("os", gateway.os.map(|os| os.to_string())),
                        ("arch", gateway.arch.map(|arch| arch.to_string())),
                        ("osrelease", gateway.osrelease.clone()),
                        ("osversion", gateway.osversion.clone()),
                        ("glibc", gateway.glibc.clone()),
                        ("idle-nodes", gateway.idle_nodes.map(|n| n.to_string())),
                        ("total-nodes", gateway.total_nodes.map(|n| n.to_string())),
                    ],
                )?;
                Frame::Empty
            }
            SiteData::Directory(directory) => match directory.internal_mount_point.as_ref() {
                // no mount point information, nothing to serialize
                None => Frame::Empty,
                Some(mount) => {
                    self.tags.open_tag(
                        "directory",
                        &[
                            ("path", Some(mount.path.clone())),
                            ("type", Some(directory.directory_type.to_string())),
                            ("free-size", mount.free_size.clone()),
                            ("total-size", mount.total_size.clone()),
                        ],
                    )?;
                    Frame::Open("directory")
                }
            },
            SiteData::FileServer(server) => {
                // TODO: emit per-operation servers once the model carries
                // get/put scopes instead of a single URL
                self.tags.open_tag(
                    "file-server",
                    &[
                        ("operation", Some("all".to_string())),
                        ("url", Some(server.url.clone())),
                    ],
                )?;
                Frame::Open("file-server")
            }
            SiteData::ReplicaCatalog(catalog) => {
                self.tags.open_tag(
                    "replica-catalog",
                    &[
                        ("type", Some(catalog.catalog_type.clone())),
                        ("url", Some(catalog.url.clone())),
                    ],
                )?;
                Frame::Open("replica-catalog")
            }
            SiteData::Connection(connection) => {
                self.tags.text_tag(
                    "connection",
                    &[("key", Some(connection.key.clone()))],
                    &connection.value,
                )?;
                Frame::Empty
            }
        };
        self.frames.push(frame);
        Ok(())
    }

    /// Emits a node's trailing delegated fragments and closes whatever its
    /// visit opened.
    pub fn depart(&mut self, node: SiteData<'_>) -> Result<(), WriteError> {
        let frame = self.frames.pop().ok_or(WriteError::IndentUnderflow)?;

        match node {
            SiteData::Site(entry) => {
                let indent = self.tags.current_indent();
                entry.profiles.to_xml(self.tags.sink_mut(), &indent)?;
            }
            SiteData::FileServer(server) => {
                let indent = self.tags.current_indent();
                server.profiles.to_xml(self.tags.sink_mut(), &indent)?;
            }
            SiteData::ReplicaCatalog(catalog) => {
                let indent = self.tags.current_indent();
                for alias in &catalog.aliases {
                    catalog.write_alias(self.tags.sink_mut(), &indent, alias)?;
                }
            }
            SiteData::Store(_)
            | SiteData::Grid(_)
            | SiteData::Directory(_)
            | SiteData::Connection(_) => {}
        }

        match frame {
            Frame::Open(name) => self.tags.close_tag(name),
            Frame::Empty => Ok(()),
        }
    }

    /// Ends the session, verifying every opened element was closed, and
    /// returns the sink.
    pub fn finish(self) -> Result<W, WriteError> {
        if !self.frames.is_empty() || self.tags.depth() != 0 {
            return Err(WriteError::IndentUnderflow);
        }
        Ok(self.tags.into_sink())
    }
}

/// Drives `visit` before a node's children and `depart` after them, in
/// document order.
pub fn walk<W: Write>(writer: &mut XmlSiteWriter<W>, node: SiteData<'_>) -> Result<(), WriteError> {
    writer.visit(node)?;
    match node {
        SiteData::Store(store) => {
            for site in &store.sites {
                walk(writer, SiteData::Site(site))?;
            }
        }
        SiteData::Site(entry) => {
            for gateway in &entry.grid_gateways {
                walk(writer, SiteData::Grid(gateway))?;
            }
            for directory in &entry.directories {
                walk(writer, SiteData::Directory(directory))?;
            }
            for catalog in &entry.replica_catalogs {
                walk(writer, SiteData::ReplicaCatalog(catalog))?;
            }
        }
        SiteData::Directory(directory) => {
            for server in &directory.file_servers {
                walk(writer, SiteData::FileServer(server))?;
            }
        }
        SiteData::ReplicaCatalog(catalog) => {
            for connection in &catalog.connections {
                walk(writer, SiteData::Connection(connection))?;
            }
        }
        SiteData::Grid(_) | SiteData::FileServer(_) | SiteData::Connection(_) => {}
    }
    writer.depart(node)
}

/// Serializes a whole site store through one session and returns the sink.
pub fn serialize_site_store<W: Write>(store: &SiteStore, sink: W) -> Result<W, WriteError> {
    tracing::debug!(sites = store.sites.len(), "serializing site store");
    let mut writer = XmlSiteWriter::new(sink);
    walk(&mut writer, SiteData::Store(store))?;
    writer.finish()
}
