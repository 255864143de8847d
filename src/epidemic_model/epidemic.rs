use {
    rand::Rng,
    rand_distr::{Normal, Distribution},
    serde::{Serialize, Deserialize},
    log::trace,
    super::*,
    crate::error::SimError,
};

/// The incubation threshold is redrawn from N(mean, std) every day for every
/// infected node, symptoms show once the draw is below the days infected
pub const INCUBATION_MEAN: f64 = 8.0;
pub const INCUBATION_STD_DEV: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateCounts{
    pub healthy: usize,
    pub infected: usize,
    pub symptomatic: usize
}

/// What happened during one call of [`Epidemic::advance_one_day`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DayOutcome{
    pub newly_infected: usize,
    pub newly_symptomatic: usize
}

/// # Epidemic engine
/// Owns the contact graph together with the health records of all nodes
/// and keeps the lists of infected-asymptomatic and symptomatic nodes
/// in sync with the records.
#[derive(Clone)]
pub struct Epidemic{
    graph: ContactGraph,
    infected_list: Vec<usize>,
    symptomatic_list: Vec<usize>,
    // scratch space, reused every day
    new_infected_list: Vec<usize>,
    onset_list: Vec<usize>,
    incubation: Normal<f64>,
}

impl Epidemic{
    /// `infected` has to list exactly the nodes whose record is infected.
    /// Nodes that are already symptomatic are picked up from the records.
    pub fn new(graph: ContactGraph, infected: Vec<usize>) -> Result<Self, SimError>
    {
        let n = graph.vertex_count();
        let mut seen = vec![false; n];
        for &index in infected.iter(){
            if index >= n {
                return Err(SimError::invalid(format!("infected node {index} is not part of the graph ({n} nodes)")));
            }
            if seen[index] {
                return Err(SimError::invalid(format!("infected node {index} listed twice")));
            }
            seen[index] = true;
            if !graph.at(index).is_infected(){
                return Err(SimError::invalid(format!("node {index} is listed as infected, but its record is not")));
            }
        }
        let infected_records = graph.contained_iter()
            .filter(|record| record.is_infected())
            .count();
        if infected_records != infected.len(){
            return Err(
                SimError::invalid(
                    format!(
                        "{infected_records} records are infected, but {} nodes were listed",
                        infected.len()
                    )
                )
            );
        }

        let symptomatic_list = graph.contained_iter()
            .enumerate()
            .filter(|(_, record)| record.is_symptomatic())
            .map(|(index, _)| index)
            .collect();

        let incubation = Normal::new(INCUBATION_MEAN, INCUBATION_STD_DEV)
            .map_err(|e| SimError::invalid(e.to_string()))?;

        Ok(
            Self{
                graph,
                infected_list: infected,
                symptomatic_list,
                new_infected_list: Vec::new(),
                onset_list: Vec::new(),
                incubation
            }
        )
    }

    pub fn graph(&self) -> &ContactGraph
    {
        &self.graph
    }

    pub fn record(&self, index: usize) -> &HealthRecord
    {
        self.graph.at(index)
    }

    /// infected but not (yet) symptomatic nodes
    pub fn infected(&self) -> &[usize]
    {
        &self.infected_list
    }

    pub fn symptomatic(&self) -> &[usize]
    {
        &self.symptomatic_list
    }

    pub fn counts(&self) -> StateCounts
    {
        let infected = self.infected_list.len();
        let symptomatic = self.symptomatic_list.len();
        StateCounts{
            healthy: self.graph.vertex_count() - infected - symptomatic,
            infected,
            symptomatic
        }
    }

    /// Copy of the current state for later visualization
    pub fn snapshot(&self, day: usize) -> Snapshot
    {
        Snapshot{
            day,
            states: self.graph.contained_iter()
                .map(HealthRecord::state)
                .collect(),
            edges: edge_pairs(&self.graph)
        }
    }

    /// # Advance the epidemic by one day
    /// 1. exposure: every node that was infected at the start of the day gets
    ///    one Bernoulli(`prob`) trial per healthy neighbor. Nodes infected
    ///    today only become sources tomorrow. A healthy node with several
    ///    infected neighbors gets a trial from each of them until one succeeds.
    /// 2. incubation: `days_infected` of every infected node (including the
    ///    ones infected today) increases by one
    /// 3. symptom onset: every infected node draws an incubation threshold,
    ///    all nodes whose threshold is below `days_infected` are collected
    ///    first and moved to the symptomatic list afterwards
    ///
    /// Fails with `InvalidParameter` if `prob` is not in `[0, 1]`, in which
    /// case nothing is changed.
    pub fn advance_one_day<R>(&mut self, prob: f64, rng: &mut R) -> Result<DayOutcome, SimError>
    where R: Rng + ?Sized
    {
        if !(0.0..=1.0).contains(&prob){
            return Err(SimError::invalid(format!("transmission probability has to be in [0, 1], got {prob}")));
        }
        debug_assert!(self.new_infected_list.is_empty());

        for &index in self.infected_list.iter(){
            for (n_index, neighbour) in self.graph
                .contained_iter_neighbors_mut_with_index(index)
                .filter(|(_, neighbour)| neighbour.is_healthy())
            {
                if rng.gen_bool(prob){
                    neighbour.infect();
                    self.new_infected_list.push(n_index);
                }
            }
        }
        let newly_infected = self.new_infected_list.len();
        self.infected_list.append(&mut self.new_infected_list);

        for &index in self.infected_list.iter(){
            self.graph.at_mut(index).days_infected += 1;
        }

        debug_assert!(self.onset_list.is_empty());
        for &index in self.infected_list.iter(){
            let threshold = self.incubation.sample(rng);
            if threshold < self.graph.at(index).days_infected as f64{
                self.onset_list.push(index);
            }
        }
        let newly_symptomatic = self.onset_list.len();
        for &index in self.onset_list.iter(){
            self.graph.at_mut(index).show_symptoms();
        }
        self.symptomatic_list.append(&mut self.onset_list);
        let graph = &self.graph;
        self.infected_list.retain(|&index| graph.at(index).is_infected());

        debug_assert!(self.is_consistent());
        trace!("day done: {newly_infected} new infections, {newly_symptomatic} new symptomatic");

        Ok(
            DayOutcome{
                newly_infected,
                newly_symptomatic
            }
        )
    }

    /// The two lists are disjoint, free of duplicates and agree with the
    /// flags of the health records
    pub fn is_consistent(&self) -> bool
    {
        let mut membership = vec![0_u8; self.graph.vertex_count()];
        for &index in self.infected_list.iter(){
            membership[index] += 1;
            if !self.graph.at(index).is_infected(){
                return false;
            }
        }
        for &index in self.symptomatic_list.iter(){
            membership[index] += 1;
            if !self.graph.at(index).is_symptomatic(){
                return false;
            }
        }
        membership.iter()
            .zip(self.graph.contained_iter())
            .all(
                |(&count, record)|
                {
                    let expected = u8::from(!record.is_healthy());
                    count == expected && !(record.infected && record.symptomatic)
                }
            )
    }
}
