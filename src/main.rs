use{
    std::{
        time::Instant
    },
    structopt::StructOpt,
    indicatif::*,
    log::{error, LevelFilter},
};

pub mod error;
pub mod logging;
pub mod json_parsing;
pub mod misc_types;
pub mod stats_methods;
pub mod epidemic_model;
pub mod simulate;
pub mod network_inspect;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let start_time = Instant::now();
    let opt = Cli::from_args();
    if let Err(e) = logging::init_logging(opt.log_level){
        eprintln!("{e}");
        std::process::exit(2);
    }
    let res = match opt.cmd{
        CmdOption::Simulate(o) => o.execute(),
        CmdOption::Network(o) => o.execute(),
    };
    println!("Execution took {}",humantime::format_duration(start_time.elapsed()));
    if let Err(e) = res{
        error!("{e}");
        std::process::exit(1);
    }
}

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Contagion spread on random contact networks")]
pub struct Cli
{
    /// off, error, warn, info, debug or trace
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    cmd: CmdOption
}

#[derive(Debug, StructOpt, Clone)]
pub enum CmdOption
{
    Simulate(simulate::Simulate),
    Network(network_inspect::NetworkInspect)
}
