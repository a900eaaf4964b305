//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    env_logger::init();
    if let Err(err) = offline_regions_cli::run() {
        eprintln!("offline-regions: {err}");
        std::process::exit(1);
    }
}
