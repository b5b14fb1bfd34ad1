//! Command-line entry point: fetch a thread and print one chain per line.

use cast_thread::{Config, ThreadClient, ThreadClientChainExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let thread_hash = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: cast-thread <thread-hash>"))?;

    let mut client = ThreadClient::with_reqwest(Config::from_env());

    for chain in client.fetch_chains(&thread_hash)? {
        println!("{chain}");
    }

    Ok(())
}
