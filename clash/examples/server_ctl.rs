//! Example CLI binding server options straight onto a struct.
//!
//! Run with `RUST_LOG=clash=debug` to watch schema preparation, defaults and
//! repeated arguments being logged:
//!
//! ```text
//! cargo run -p clash --example server_ctl -- -p 8080 --bind=0.0.0.0 -v true
//! ```

use std::io::{self, Write};
use std::net::IpAddr;
use std::process::ExitCode;
use std::time::Duration;

use clash::Clash;
use tracing_subscriber::EnvFilter;

/// Options shared by every tool in the suite.
#[derive(Debug, Default, Clash)]
struct CommonArgs {
    #[clash(short = "v", long = "verbose")]
    verbose: bool,
    #[clash(short = "c", long = "config", default = "server.toml")]
    config: String,
}

/// Options for the server binary.
#[derive(Debug, Default, Clash)]
struct ServerArgs {
    #[clash(short = "p", long = "port", required)]
    port: u16,
    #[clash(short = "b", long = "bind", parse_with = parse_addr, default_with = localhost)]
    bind: Option<IpAddr>,
    #[clash(short = "t", long = "timeout", parse_with = parse_secs, default = "30")]
    timeout: Duration,
    #[clash(short = "w", long, default = 4)]
    workers: u8,
    #[clash(flatten)]
    common: CommonArgs,
}

fn parse_addr(raw: &str) -> Result<Option<IpAddr>, std::net::AddrParseError> {
    raw.parse().map(Some)
}

fn localhost() -> Option<IpAddr> {
    Some(IpAddr::from([127, 0, 0, 1]))
}

fn parse_secs(raw: &str) -> Result<Duration, std::num::ParseIntError> {
    raw.parse().map(Duration::from_secs)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match ServerArgs::bind(std::env::args().skip(1)) {
        Ok(args) => report(&args).map_or(ExitCode::FAILURE, |()| ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!(error = %err, "invalid arguments");
            ExitCode::from(2)
        }
    }
}

fn report(args: &ServerArgs) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{args:#?}")?;
    stdout.flush()
}
