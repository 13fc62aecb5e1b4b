mod accumulate;
pub mod daily;
pub mod hourly;
