//! Result lines and exit codes for the command-line driver

use crate::error::ScanError;
use crate::scanner::Outcome;

/// Exit code for a sorted file
pub const SORTED_EXIT_CODE: u8 = 0;
/// Exit code for an inversion
pub const INVERSION_EXIT_CODE: u8 = 1;
/// Exit code for failures during the scan (read errors, truncation)
pub const SCAN_ERROR_EXIT_CODE: u8 = 1;
/// Exit code for usage mistakes and structural errors
pub const USAGE_EXIT_CODE: u8 = 2;

/// Render the single stdout line for a completed scan
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Sorted => "SORTED".to_string(),
        Outcome::Inversion(index) => format!(
            "NOT SORTED. First inversion at index {index} (a[{index}] < a[{}])",
            index.saturating_sub(1)
        ),
    }
}

/// Exit code for a completed scan
pub fn exit_code(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Sorted => SORTED_EXIT_CODE,
        Outcome::Inversion(_) => INVERSION_EXIT_CODE,
    }
}

/// Exit code for a failed scan
pub fn error_exit_code(err: &ScanError) -> u8 {
    if err.is_structural() {
        USAGE_EXIT_CODE
    } else {
        SCAN_ERROR_EXIT_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_render_lines() {
        assert_eq!(render(&Outcome::Sorted), "SORTED");
        assert_eq!(
            render(&Outcome::Inversion(1)),
            "NOT SORTED. First inversion at index 1 (a[1] < a[0])"
        );
        assert_eq!(
            render(&Outcome::Inversion(3_000_000_000)),
            "NOT SORTED. First inversion at index 3000000000 (a[3000000000] < a[2999999999])"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&Outcome::Sorted), 0);
        assert_eq!(exit_code(&Outcome::Inversion(7)), INVERSION_EXIT_CODE);
        assert_eq!(error_exit_code(&ScanError::BadSize { size: 5 }), 2);
        assert_eq!(
            error_exit_code(&ScanError::OpenFailed {
                path: "dir".into(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            }),
            USAGE_EXIT_CODE
        );
        assert_eq!(
            error_exit_code(&ScanError::Truncated { residual: 1 }),
            SCAN_ERROR_EXIT_CODE
        );
        assert_eq!(
            error_exit_code(&ScanError::Io(io::Error::from(io::ErrorKind::BrokenPipe))),
            SCAN_ERROR_EXIT_CODE
        );
    }
}
