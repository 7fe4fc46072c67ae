//! The XML serialization engine.
//!
//! [`XmlSiteWriter`] turns a site-catalog tree into Site Catalog schema 4.0
//! XML fragments, one visit/depart pair per node type, with tab indentation
//! proportional to nesting depth.

pub mod error;
pub mod indent;
pub mod session;
pub mod tags;

pub use error::WriteError;
pub use indent::IndentLevel;
pub use session::{serialize_site_store, walk, SiteData, XmlSiteWriter};
pub use tags::{escape_xml, TagWriter};
