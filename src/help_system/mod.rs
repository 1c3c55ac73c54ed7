//! Contextual help: `bex <flag> ?` prints the help topic for one flag.

mod lookup;
mod topics;

pub use lookup::{topic_help, unknown_topic_hint};
