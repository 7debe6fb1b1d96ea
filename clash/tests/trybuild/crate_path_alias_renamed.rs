//! The runtime imported under another name, including a flattened struct.

use clash as cli;
use cli::Clash;

#[derive(Debug, Default, Clash)]
#[clash(crate = "cli")]
struct Fetch {
    #[clash(short = "u", long = "url")]
    url: String,
    #[clash(flatten)]
    limits: Limits,
}

#[derive(Debug, Default, Clash)]
#[clash(crate = "cli")]
struct Limits {
    #[clash(short = "n", long)]
    attempts: u32,
}

fn main() {
    let bound: Result<Fetch, cli::ClashError> = Fetch::bind(["--attempts=1"]);
    drop(bound);
}
