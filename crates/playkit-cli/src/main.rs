use clap::Parser;
use playkit::{Cli, run};

fn main() {
    // `playkit dice roll --times 1000 | head` closes the pipe early; die
    // quietly on SIGPIPE instead of panicking inside println!
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    // Handlers attach context to every failure; `{:#}` prints the whole
    // chain on one line, e.g.
    // "Error: Failed to export CSV to out.csv: IO error: Permission denied"
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
