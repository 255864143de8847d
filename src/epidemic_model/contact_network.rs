use {
    serde::{Serialize, Deserialize},
    rand::{Rng, seq::index},
    log::debug,
    super::*,
    crate::{error::SimError, misc_types::*},
};

/// Undirected contact graph. The node payloads are the health records,
/// the edges are fixed once the graph is generated.
pub type ContactGraph = net_ensembles::GenericGraph<HealthRecord, net_ensembles::graph::NodeContainer<HealthRecord>>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkOptions{
    pub node_count: usize,
    pub mean_degree: f64,
    pub std_dev_degree: f64,
    pub initial_infected: usize,
}

impl Default for NetworkOptions{
    fn default() -> Self {
        Self{
            node_count: DEFAULT_NODE_COUNT,
            mean_degree: DEFAULT_MEAN_DEGREE,
            std_dev_degree: DEFAULT_STD_DEV_DEGREE,
            initial_infected: DEFAULT_INITIAL_INFECTED
        }
    }
}

impl NetworkOptions{
    pub fn validate(&self) -> Result<(), SimError>
    {
        if self.node_count == 0 {
            return Err(SimError::invalid("node_count has to be positive"));
        }
        if self.initial_infected > self.node_count {
            return Err(
                SimError::invalid(
                    format!(
                        "initial_infected ({}) exceeds node_count ({})",
                        self.initial_infected,
                        self.node_count
                    )
                )
            );
        }
        Ok(())
    }

    pub fn name(&self) -> String
    {
        format!(
            "N{}Mean{}Std{}InInf{}",
            self.node_count,
            self.mean_degree,
            self.std_dev_degree,
            self.initial_infected
        )
    }
}

/// Result of the network generation, keeps the target degrees for inspection
pub struct GeneratedNetwork{
    pub graph: ContactGraph,
    pub infected: Vec<usize>,
    pub target_degrees: Vec<usize>
}

/// # Generate a contact network
/// * draws the target degrees, builds the expected degree graph
/// * every node starts healthy, then `initial_infected` distinct nodes are
///   chosen uniformly without replacement and infected
pub fn generate_contact_network<R>(options: &NetworkOptions, rng: &mut R) -> Result<GeneratedNetwork, SimError>
where R: Rng + ?Sized
{
    options.validate()?;
    let target_degrees = draw_target_degrees(
        options.node_count,
        options.mean_degree,
        options.std_dev_degree,
        rng
    )?;
    let mut graph = expected_degree_graph(&target_degrees, rng);
    debug!(
        "generated contact network with {} nodes and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    graph.contained_iter_mut()
        .for_each(HealthRecord::reset);

    let infected = index::sample(rng, options.node_count, options.initial_infected)
        .into_vec();
    for &patient in infected.iter(){
        graph.at_mut(patient).infect();
    }

    Ok(
        GeneratedNetwork{
            graph,
            infected,
            target_degrees
        }
    )
}

/// Like [`generate_contact_network`], returns the graph and the ids of the infected nodes
pub fn generate_network<R>(options: &NetworkOptions, rng: &mut R) -> Result<(ContactGraph, Vec<usize>), SimError>
where R: Rng + ?Sized
{
    let network = generate_contact_network(options, rng)?;
    Ok((network.graph, network.infected))
}

/// All pairs of connected nodes, each edge once with `i < j`
pub fn edge_pairs(graph: &ContactGraph) -> Vec<[usize;2]>
{
    let mut vec = Vec::with_capacity(graph.edge_count());
    for j in 0..graph.vertex_count(){
        for (n_index, _) in graph.contained_iter_neighbors_with_index(j){
            if j < n_index{
                vec.push([j, n_index]);
            }
        }
    }
    vec
}

pub fn realized_degrees(graph: &ContactGraph) -> Vec<usize>
{
    (0..graph.vertex_count())
        .map(|i| graph.degree(i).unwrap_or(0))
        .collect()
}
