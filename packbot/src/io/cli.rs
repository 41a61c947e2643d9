use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Returns a json object with an optimal parts list that the robot can pack")]
pub struct Cli {
    /// The source for the suitcase (file path or http url)
    pub suitcase_source: String,
    /// The source for the parts list (file path or http url)
    pub parts_source: String,
    /// Logs a basic breakdown of the input and additional output stats
    #[arg(short, long)]
    pub verbose: bool,
    /// Saves fetched inputs to suitcase.json and parts.json
    #[arg(short, long)]
    pub save_inputs: bool,
    /// Reduces the input by an integer division factor (for testing)
    #[arg(
        short,
        long,
        value_name = "FACTOR",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub reduction_factor: u64,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
}
