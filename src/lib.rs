//! # DragoDB
//!
//! A small in-process key-value store with per-key TTL, plus the
//! interactive shell that drives it.
//!
//! The [`Store`] is the engine: string keys to string values, one lock
//! around everything, and lazy expiry (an expired key is dropped the next
//! time someone reads it, never by a background sweep).
//!
//! ```rust
//! use dragodb::{Lookup, Store};
//!
//! let store = Store::new();
//! store.write("a", "1");
//! assert_eq!(store.read("a"), Lookup::Found("1".to_string()));
//!
//! assert!(store.set_expiry("a", -1));
//! assert_eq!(store.read("a"), Lookup::Absent);
//! assert!(!store.set_expiry("a", 10));
//! ```

pub mod art;
pub mod clock;
pub mod config;
pub mod parse;
pub mod shell;
pub mod store;
mod utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use parse::{parse_command, Command, CommandError};
pub use shell::{InputLines, LineSource, Script, Shell};
pub use store::{Lookup, Store};
