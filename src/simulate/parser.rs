use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    std::{num::*, path::PathBuf},
    crate::epidemic_model::NetworkOptions,
    crate::error::SimError,
    crate::misc_types::*,
    crate::json_parsing::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Run the epidemic on one contact network, write the daily counts
/// and snapshots of the network
pub struct Simulate
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Directory the output files are created in
    #[structopt(long, parse(from_os_str), default_value = ".")]
    out_dir: PathBuf
}

impl Simulate {
    pub fn parse(&self) -> Result<Option<(SimulateParams, Value)>, SimError>
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self) -> Result<(), SimError>
    {
        match self.parse()?{
            None => Ok(()),
            Some((param, json)) => {
                super::execute::run_simulation(&param, &json, &self.out_dir)
                    .map(|_| ())
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SimulateParams
{
    pub network: NetworkOptions,
    /// transmission probability per contact and day
    pub prob: f64,
    pub day_count: NonZeroUsize,
    /// take a snapshot every `snapshot_interval` days
    pub snapshot_interval: NonZeroUsize,
    pub write_snapshots: bool,
    pub graph_seed: u64,
    pub sir_seed: u64,
}

impl SimulateParams
{
    pub fn validate(&self) -> Result<(), SimError>
    {
        self.network.validate()?;
        if !(0.0..=1.0).contains(&self.prob){
            return Err(SimError::invalid(format!("prob has to be in [0, 1], got {}", self.prob)));
        }
        Ok(())
    }

    pub fn quick_name(&self) -> String
    {
        format!(
            "v{}Contagion_{}P{}D{}GS{}SS{}",
            crate::VERSION,
            self.network.name(),
            self.prob,
            self.day_count,
            self.graph_seed,
            self.sir_seed
        )
    }
}

impl Default for SimulateParams
{
    fn default() -> Self {
        Self{
            network: NetworkOptions::default(),
            prob: DEFAULT_TRANSMISSION_PROB,
            day_count: DEFAULT_DAY_COUNT,
            snapshot_interval: DEFAULT_SNAPSHOT_INTERVAL,
            write_snapshots: true,
            graph_seed: DEFAULT_GRAPH_SEED,
            sir_seed: DEFAULT_SIR_SEED
        }
    }
}
