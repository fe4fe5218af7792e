
pub mod provider;
