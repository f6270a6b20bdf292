pub mod prune;
pub mod read;
pub mod update;
