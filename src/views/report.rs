use std::io::{self, Write};

use crate::extractor::ExtractionResult;

/// Write the plain-text report: title, then headings, then links.
pub fn render<W: Write>(result: &ExtractionResult, out: &mut W) -> io::Result<()> {
    writeln!(out, "Page Title: {}", result.title.as_deref().unwrap_or(""))?;

    writeln!(out)?;
    writeln!(out, "Headings:")?;
    for heading in &result.headings {
        writeln!(out, "  - {}", heading)?;
    }

    writeln!(out)?;
    writeln!(out, "Links:")?;
    for link in &result.links {
        writeln!(out, "  - {}", link)?;
    }
    Ok(())
}
