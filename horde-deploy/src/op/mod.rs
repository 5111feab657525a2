mod deploy;

pub use deploy::{deploy, DeployedContract};
