//! Event handlers for funds snapshots

pub mod console;

// Re-export for convenience
pub use console::ConsoleEventHandler;
