use {
    super::parser::*,
    serde_json::Value,
    std::{fs::File, io::BufWriter, path::{Path, PathBuf}},
    rand_pcg::Pcg64,
    rand::SeedableRng,
    log::info,
    crate::indication_bar,
    crate::error::SimError,
    crate::epidemic_model::*,
};

pub struct SimulationSummary
{
    pub final_counts: StateCounts,
    pub snapshots: Vec<Snapshot>,
    pub curve_path: PathBuf,
    pub snapshot_paths: Vec<PathBuf>
}

/// Generate the network, then advance the epidemic day by day.
/// A snapshot is taken at the start of every day that is a multiple
/// of `snapshot_interval`.
pub fn run_simulation(param: &SimulateParams, json: &Value, out_dir: &Path) -> Result<SimulationSummary, SimError>
{
    param.validate()?;

    let mut graph_rng = Pcg64::seed_from_u64(param.graph_seed);
    let (graph, infected) = generate_network(&param.network, &mut graph_rng)?;
    let mut epidemic = Epidemic::new(graph, infected)?;
    info!(
        "contact network: {} nodes, {} edges, {} initially infected",
        epidemic.graph().vertex_count(),
        epidemic.graph().edge_count(),
        epidemic.infected().len()
    );
    let mut sir_rng = Pcg64::seed_from_u64(param.sir_seed);

    let name = param.quick_name();
    let curve_path = out_dir.join(format!("{name}.curves"));
    info!("creating: {}", curve_path.display());
    let mut writer = CurveWriter::create(&curve_path)?;
    writer.write_header(std::slice::from_ref(json))?;

    let day_count = param.day_count.get();
    let interval = param.snapshot_interval.get();
    let mut snapshots = Vec::with_capacity(day_count / interval + 1);

    let bar = indication_bar(day_count as u64);
    for day in 0..day_count{
        if day % interval == 0{
            snapshots.push(epidemic.snapshot(day));
        }
        writer.write_day(day, epidemic.counts())?;

        let outcome = epidemic.advance_one_day(param.prob, &mut sir_rng)?;
        let counts = epidemic.counts();
        info!("{}", progress_line(day, &outcome, &counts));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let final_counts = epidemic.counts();
    writer.write_day(day_count, final_counts)?;
    writer.finish()?;
    info!(
        "after {day_count} days: {} healthy, {} infected, {} showing",
        final_counts.healthy,
        final_counts.infected,
        final_counts.symptomatic
    );

    let mut snapshot_paths = Vec::new();
    if param.write_snapshots{
        for snapshot in snapshots.iter(){
            let path = out_dir.join(format!("{name}_day{}.dot", snapshot.day));
            info!("creating: {}", path.display());
            let file = File::create(&path)?;
            snapshot.write_dot(BufWriter::new(file))?;
            snapshot_paths.push(path);
        }
    }

    Ok(
        SimulationSummary{
            final_counts,
            snapshots,
            curve_path,
            snapshot_paths
        }
    )
}

/// per-day progress, "sick" counts infected and symptomatic nodes
fn progress_line(day: usize, outcome: &DayOutcome, counts: &StateCounts) -> String
{
    format!(
        "day {day}: I have {} sick nodes and {} showing ({} new infections, {} new symptomatic)",
        counts.infected + counts.symptomatic,
        counts.symptomatic,
        outcome.newly_infected,
        outcome.newly_symptomatic
    )
}
