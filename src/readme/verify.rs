//! Checking a README against freshly generated content.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::render::DocRenderer;

use super::format::ReadmeFormatter;

/// Check whether the README at `path` is up to date for `pkg`.
///
/// A missing file is not an error, it is simply not up to date. The
/// comparison is byte-for-byte with no whitespace normalization.
pub fn verify_readme<R: DocRenderer>(
    formatter: &ReadmeFormatter<R>,
    pkg: &str,
    path: &Path,
) -> Result<bool> {
    let want = formatter.format(pkg)?;

    let got = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("{} does not exist", path.display());
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    Ok(want.as_bytes() == got.as_slice())
}
