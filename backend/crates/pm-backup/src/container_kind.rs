use crate::ZIP_MAGIC;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// The whole buffer is the JSON manifest.
    BareManifest,
    /// ZIP archive with the manifest under `backup.json`.
    BundledArchive,
}

pub fn classify(bytes: &[u8]) -> ContainerKind {
    if bytes.starts_with(&ZIP_MAGIC) {
        ContainerKind::BundledArchive
    } else {
        ContainerKind::BareManifest
    }
}
