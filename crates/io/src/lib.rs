// File I/O operations

pub mod csv;
pub mod text;
pub mod xlsx;

/// Field delimiter of reservation-system exports (ledger, single-file input).
pub const LEDGER_DELIMITER: u8 = b'\t';

/// Field delimiter of the insurer's result file.
pub const INSURER_DELIMITER: u8 = b',';
