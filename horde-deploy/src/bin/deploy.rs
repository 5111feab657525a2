use clap::Parser;
use horde_tracing::{init_tracing_subscriber, println_red_err};

#[tokio::main]
async fn main() {
    init_tracing_subscriber(Default::default());
    let command = horde_deploy::cmd::Deploy::parse();
    if let Err(err) = horde_deploy::op::deploy(command).await {
        println_red_err(&format!("{err}"));
        std::process::exit(1);
    }
}
