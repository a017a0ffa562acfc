//! Catalog command implementation.
//!
//! Prints the block catalog as `<block_id> <scheme>` lines on stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::TexturingScheme;

/// Print the block catalog
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog table to print instead of the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Only list blocks with this texturing scheme
    #[arg(long)]
    pub scheme: Option<TexturingScheme>,
}

pub fn run(args: CatalogArgs, printer: &Printer) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };

    let count = write_catalog(&mut io::stdout().lock(), &catalog, args.scheme)?;
    printer.status("Listed", &plural(count, "block", "blocks"));

    Ok(())
}

/// Write catalog lines, optionally filtered by scheme. Returns the line count.
pub fn write_catalog(
    out: &mut dyn Write,
    catalog: &Catalog,
    scheme: Option<TexturingScheme>,
) -> Result<usize> {
    let mut count = 0;
    for entry in catalog.entries() {
        if scheme.is_some_and(|s| s != entry.texturing) {
            continue;
        }
        writeln!(out, "{} {}", entry.block_id, entry.texturing)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_catalog_all() {
        let catalog = Catalog::parse("oak_log axis\nstone uniform\n").unwrap();
        let mut buf = Vec::new();

        let count = write_catalog(&mut buf, &catalog, None).unwrap();

        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "oak_log axis\nstone uniform\n");
    }

    #[test]
    fn test_write_catalog_filtered() {
        let catalog = Catalog::builtin().unwrap();
        let mut buf = Vec::new();

        let count = write_catalog(&mut buf, &catalog, Some(TexturingScheme::Facing6)).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(count, 5);
        assert!(text.lines().all(|l| l.ends_with(" facing6")));
        assert!(text.contains("observer facing6\n"));
    }
}
