pub mod cmd;
pub mod constants;
pub mod error;
pub mod op;
pub mod util;
