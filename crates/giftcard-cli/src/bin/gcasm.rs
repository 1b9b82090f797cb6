use giftcard_cli::cli::{AsmParams, build_gcasm_cli};
use giftcard_cli::{commands, logging};

fn main() {
    let matches = build_gcasm_cli().get_matches();
    logging::init_logging();

    let params = AsmParams::from_matches(&matches);
    commands::asm::run(params.into());
}
