// Export all necessary modules
pub mod cli;
pub mod data;
pub mod error;
pub mod patterns;
