// Adapters layer: concrete implementations of the domain ports.
// The file-backed storage lives next to the CLI config in `config::cli`.

pub mod memory;

pub use memory::MemoryStorage;
