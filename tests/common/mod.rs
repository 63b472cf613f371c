#![allow(dead_code)]

use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes one poll tick per line.
pub fn write_ticks(lines: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    file.flush()?;
    Ok(file)
}

pub fn pending_tick(provider: &str, reference: &str) -> String {
    format!(
        r#"[{{"provider_code": "{provider}", "state": "pending", "reference": "{reference}", "landing_route": "/shop/confirmation"}}]"#
    )
}
