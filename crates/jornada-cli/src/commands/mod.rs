pub mod allocate;
pub mod concept;
pub mod config;
