use giftcard_cli::cli::{ReadParams, build_cli};
use giftcard_cli::{commands, logging};

fn main() {
    let matches = build_cli().get_matches();
    logging::init_logging();

    let params = ReadParams::from_matches(&matches);
    commands::read::run(params.into());
}
