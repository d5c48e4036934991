//! Deploy scripts and the environment they run in

pub mod accounts;
pub mod artifacts;
pub mod deployer;
pub mod environment;
pub mod scripts;
