pub mod criteria;
pub mod discrepancy;
pub mod progress;
pub mod response;
pub mod score;
pub mod summary;
