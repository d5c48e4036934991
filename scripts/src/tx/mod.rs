//! Chain access, provider creation plus the reads & writes the deploy scripts need

pub mod client;
pub mod reader;
pub mod sender;
