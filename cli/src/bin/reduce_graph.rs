use clap::Parser;
use graph_manip_cli::pipeline::{init_logger, run_reduce};
use graph_manip_cli::reduce_commands::ReduceArgs;
#[macro_use]
extern crate log;

fn main() {
    let args = ReduceArgs::parse();
    let config = match args.to_config() {
        Ok(config) => config,
        Err(why) => {
            eprintln!("{}", why);
            std::process::exit(1);
        }
    };
    init_logger(config.verbose);
    if let Err(why) = run_reduce(&config) {
        error!("{}", why);
        std::process::exit(1);
    }
}
