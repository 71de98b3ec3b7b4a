//! Converter core: rates, formatting, the controller and its widget seams

pub mod config;
pub mod controller;
pub mod format;
pub mod log;
pub mod rates;
pub mod screen;
pub mod widgets;

// Re-export main types for cleaner imports
pub use controller::{ConversionState, Converter, Recomputed, Side};
pub use rates::RateTable;
pub use screen::Screen;
pub use widgets::{AmountInput, CurrencySelector, MemoryInput, MemorySelector};
