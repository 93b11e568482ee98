pub mod adhd;
pub mod asd_deep_dive;
pub mod glad;
pub mod isaa;
