use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    std::path::PathBuf,
    crate::epidemic_model::NetworkOptions,
    crate::error::SimError,
    crate::misc_types::*,
    crate::json_parsing::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Generate a single contact network and compare the realized degrees
/// with the drawn target degrees
pub struct NetworkInspect
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Directory the output files are created in
    #[structopt(long, parse(from_os_str), default_value = ".")]
    out_dir: PathBuf
}

impl NetworkInspect {
    pub fn parse(&self) -> Result<Option<(NetworkParams, Value)>, SimError>
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self) -> Result<(), SimError>
    {
        match self.parse()?{
            None => Ok(()),
            Some((param, json)) => {
                super::execute::inspect_network(&param, &json, &self.out_dir)
                    .map(|_| ())
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NetworkParams
{
    pub network: NetworkOptions,
    pub graph_seed: u64,
}

impl NetworkParams
{
    pub fn name<E>(&self, kind: &str, file_ending: E) -> String
    where E: std::fmt::Display
    {
        format!(
            "v{}Network_{}GS{}_{kind}.{file_ending}",
            crate::VERSION,
            self.network.name(),
            self.graph_seed
        )
    }
}

impl Default for NetworkParams
{
    fn default() -> Self {
        Self{
            network: NetworkOptions::default(),
            graph_seed: DEFAULT_GRAPH_SEED
        }
    }
}
