pub(crate) mod account;
pub mod artifact;
