use std::env::args_os;
use std::process::ExitCode;

use log::error;

use adpwave::{Options, USAGE, convert};

fn usage() {
    println!("{USAGE}");
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match Options::from_args(args_os().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            error!("{e}");
            usage();
            return ExitCode::from(1);
        }
    };

    match convert(&options) {
        Ok(_) => ExitCode::from(0),
        Err(e) => {
            error!("Couldn't convert: {e}");
            ExitCode::from(1)
        }
    }
}
