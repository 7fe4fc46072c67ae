//! Renders an in-memory site catalog to Site Catalog schema 4.0 XML.
//!
//! The crate has two halves: [`catalog`] defines the site-catalog tree
//! (sites, grid gateways, directories, file servers, replica catalogs) and
//! loads it from a JSON description, and [`writer`] serializes that tree to
//! XML fragments through a visit/depart session with tab indentation.
//!
//! ```
//! use sitecat::catalog::parse_site_store;
//! use sitecat::writer::serialize_site_store;
//!
//! let store = parse_site_store(
//!     r#"{ "sites": [ { "handle": "local", "arch": "x86_64", "os": "LINUX" } ] }"#,
//! )
//! .unwrap();
//! let xml = serialize_site_store(&store, Vec::new()).unwrap();
//! assert_eq!(
//!     String::from_utf8(xml).unwrap(),
//!     "<site handle=\"local\" arch=\"x86_64\" os=\"LINUX\">\n</site>\n"
//! );
//! ```

pub mod catalog;
pub mod writer;

pub use catalog::{load_site_store, parse_site_store, SiteStore};
pub use writer::{serialize_site_store, SiteData, WriteError, XmlSiteWriter};
