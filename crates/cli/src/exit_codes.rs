//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                            |
//! |------|----------------------------------------------------|
//! | 0    | Success                                            |
//! | 1    | Wrong number of input files                        |
//! | 2    | Malformed options (reported by clap)               |
//! | 3    | File open/read/write failure                       |
//! | 4    | Required column missing from an input header       |
//! | 5    | Settings file unreadable or invalid                |

use kenpo_recon::CheckError;

/// Success - both markers written, output saved.
pub const EXIT_SUCCESS: u8 = 0;

/// Zero files, or more than two.
pub const EXIT_FILE_COUNT: u8 = 1;

/// Open, decode, parse, or save failure.
pub const EXIT_IO: u8 = 3;

/// A header row lacks a column the run needs.
pub const EXIT_MISSING_COLUMNS: u8 = 4;

/// Settings file could not be read, parsed, or validated.
pub const EXIT_CONFIG: u8 = 5;

/// Map an engine error to its exit code.
pub fn check_exit_code(err: &CheckError) -> u8 {
    match err {
        CheckError::MissingColumns { .. } => EXIT_MISSING_COLUMNS,
        CheckError::ConfigParse(_) | CheckError::ConfigValidation(_) => EXIT_CONFIG,
    }
}
