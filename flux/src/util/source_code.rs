// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{ops::Deref, path::{Path, PathBuf}, sync::Arc};

#[derive(Debug, Clone)]
pub struct SourceCode {
    path: Arc<PathBuf>,
    contents: String,
}

impl SourceCode {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: Arc::new(path.into()),
            contents: contents.into(),
        }
    }

    /// Decodes the raw bytes of a script, dropping a leading UTF-8 byte order
    /// mark. Invalid sequences are replaced instead of rejected.
    #[must_use]
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8]) -> Self {
        const BYTE_ORDER_MARK: &[u8] = &[0xEF, 0xBB, 0xBF];

        let bytes = bytes.strip_prefix(BYTE_ORDER_MARK).unwrap_or(bytes);
        Self::new(path, String::from_utf8_lossy(bytes).into_owned())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Deref for SourceCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.contents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_mark_is_stripped() {
        let source = SourceCode::from_bytes("prueba.flux", b"\xEF\xBB\xBFmostrar(1)");
        assert_eq!(source.contents(), "mostrar(1)");
    }

    #[test]
    fn contents_without_byte_order_mark_are_kept() {
        let source = SourceCode::from_bytes("prueba.flux", b"mostrar(1)");
        assert_eq!(&*source, "mostrar(1)");
        assert_eq!(source.path(), Path::new("prueba.flux"));
    }
}
