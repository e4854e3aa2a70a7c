//! Configuration storage for ask.
//!
//! Ask keeps one TOML record per user at the platform config path
//! (e.g. `~/.config/ask/config.toml` on Linux): the model registry, the
//! default model key, and the default request parameters. The file is
//! seeded from a built-in template on first run and rewritten after every
//! administrative command.

mod mutate;
mod paths;
mod store;
mod types;


pub use store::ConfigError;
pub use types::Config;
