pub mod compute;
pub mod entities;
pub mod geometry;
