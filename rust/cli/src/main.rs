use std::io;

fn main() {
    warsim_cli::logging::init_logging();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = warsim_cli::run(std::env::args(), &mut stdout.lock(), &mut stderr.lock());
    std::process::exit(code);
}
