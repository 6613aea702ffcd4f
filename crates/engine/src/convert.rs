//! Store failures into repository errors

use docstore_core::Error;
use docstore_storage::StoreError;
use tracing::warn;

/// Extension for attaching operation context to store results
pub(crate) trait StoreResultExt<T> {
    /// Wrap any store failure as an internal error naming `op`
    fn context(self, op: &str) -> Result<T, Error>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn context(self, op: &str) -> Result<T, Error> {
        self.map_err(|e| {
            warn!(operation = op, error = %e, "store call failed");
            Error::internal(format!("failed to {}: {}", op, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore_core::ErrorKind;

    #[test]
    fn test_store_errors_become_internal() {
        let r: Result<(), StoreError> = Err(StoreError::Unavailable("down".into()));
        let err = r.context("delete document").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(
            err.to_string(),
            "internal error: failed to delete document: store unavailable: down"
        );
    }

    #[test]
    fn test_ok_passes_through() {
        let r: Result<u8, StoreError> = Ok(3);
        assert_eq!(r.context("read").unwrap(), 3);
    }
}
