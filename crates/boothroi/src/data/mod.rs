pub mod export;
pub mod scenario;
