use clap::Parser;
use dircount::{logging, Cli, DirCount, OutputFormatter, OutputMode};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

// Every report run exits 0; problems are reported on stderr.
fn run() -> i32 {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let dircount = match DirCount::from_cli(&cli) {
        Ok(dircount) => dircount,
        Err(e) => {
            OutputFormatter::new(OutputMode::Human).print_user_friendly_error(&e);
            return 0;
        }
    };

    if let Err(e) = dircount.run_to_stdout() {
        dircount.handle_error(&e);
    }

    0
}
