// Library module for screensweep
// Re-exports modules for use in integration tests and external crates

pub mod cleaner;
