//! Shared upload constraints.

/// Maximum accepted size for a single uploaded file.
pub const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Multipart field name carrying the family identifier.
pub const FAMILY_ID_FIELD: &str = "familyId";

/// Multipart field name carrying each uploaded file.
pub const FILES_FIELD: &str = "files";
