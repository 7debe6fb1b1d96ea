//! The runtime reached through a re-export module.

mod deps {
    pub use clash;
}

use deps::clash::Clash;

#[derive(Debug, Default, Clash)]
#[clash(crate = "deps::clash")]
struct Upload {
    #[clash(short = "d", long = "dest", default = "/tmp")]
    dest: String,
    #[clash(short = "r", long = "retries")]
    retries: u32,
}

fn main() {
    let bound: Result<Upload, deps::clash::ClashError> = Upload::bind(["--retries=1"]);
    drop(bound);
}
