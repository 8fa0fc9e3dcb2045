pub mod apps;
pub mod error;
pub mod push;
