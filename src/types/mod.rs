pub mod alert;
pub mod auth;
pub mod metric;
pub mod reading;
pub mod settings;
pub mod stats;
pub mod summary;
