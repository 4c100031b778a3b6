//! Server response-code classification.

use crate::error::ErrorKind;

/// Map a per-object server response code into the local taxonomy.
///
/// The vocabulary is service-defined and open-ended; only the families with
/// a distinct caller reaction are classified. Everything else is preserved
/// verbatim as [`ErrorKind::Unknown`] so no code is ever dropped.
pub fn map_response_code(code: &str) -> ErrorKind {
    match code {
        // The client's change key no longer matches the server's version.
        "ErrorIrresolvableConflict"
        | "ErrorChangeKeyRequired"
        | "ErrorChangeKeyRequiredForWriteOperations"
        | "ErrorStaleObject" => ErrorKind::Conflict,

        "ErrorItemNotFound" | "ErrorFolderNotFound" | "ErrorParentFolderNotFound" => {
            ErrorKind::NotFound
        }

        "ErrorAccessDenied" | "ErrorCreateItemAccessDenied" | "ErrorAccountDisabled" => {
            ErrorKind::PermissionDenied
        }

        "ErrorQuotaExceeded" | "ErrorSubmissionQuotaExceeded" => ErrorKind::QuotaExceeded,

        other => ErrorKind::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_family() {
        assert_eq!(
            map_response_code("ErrorIrresolvableConflict"),
            ErrorKind::Conflict
        );
        assert_eq!(map_response_code("ErrorStaleObject"), ErrorKind::Conflict);
    }

    #[test]
    fn test_not_found_family() {
        assert_eq!(map_response_code("ErrorItemNotFound"), ErrorKind::NotFound);
        assert_eq!(map_response_code("ErrorFolderNotFound"), ErrorKind::NotFound);
    }

    #[test]
    fn test_unmapped_code_is_preserved() {
        let kind = map_response_code("ErrorInvalidSmtpAddress");
        assert_eq!(kind, ErrorKind::Unknown("ErrorInvalidSmtpAddress".into()));
    }
}
