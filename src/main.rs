use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::fs;
use std::io::Write;

use sitecat::catalog::{self, SiteStore};
use sitecat::writer;

/// Wraps the engine's fragments in the sc-4.0 document root.
fn render_document(store: &SiteStore) -> Result<String> {
    let mut buffer = Vec::new();
    writeln!(buffer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        buffer,
        "<sitecatalog xmlns=\"http://pegasus.isi.edu/schema/sitecatalog\" version=\"4.0\">"
    )?;
    let mut buffer = writer::serialize_site_store(store, buffer)?;
    writeln!(buffer, "</sitecatalog>")?;
    String::from_utf8(buffer).context("serialized catalog is not valid UTF-8")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("sitecat")
        .about("Render a site catalog description to Site Catalog schema 4.0 XML")
        .arg(
            Arg::new("input")
                .help("Input JSON site catalog description")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the XML document to a file instead of stdout"),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input").unwrap();
    let store = catalog::load_site_store(input_file)?;
    let document = render_document(&store)?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, &document).with_context(|| format!("failed to write {}", path))?;
            tracing::debug!(path = %path, "wrote site catalog document");
        }
        None => print!("{}", document),
    }

    Ok(())
}
