pub mod geometry;
pub mod night_time;
pub mod terminator;
