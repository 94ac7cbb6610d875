//! File transports for inventory inputs and report outputs.

/// CSV table and report file I/O.
pub mod csv;
