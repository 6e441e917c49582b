pub mod watched;

pub use watched::{parse_runtime_minutes, WatchedEntry, WatchedList};
