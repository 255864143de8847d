use{
    super::parser::*,
    serde_json::Value,
    std::{fs::File, io::{BufWriter, Write}, path::{Path, PathBuf}},
    rand_pcg::Pcg64,
    rand::SeedableRng,
    log::info,
    crate::error::SimError,
    crate::epidemic_model::*,
    crate::stats_methods::*,
};

pub struct NetworkReport
{
    pub target: Option<MyVariance>,
    pub realized: Option<MyVariance>,
    pub edge_count: usize,
    pub files: Vec<PathBuf>
}

pub fn inspect_network(param: &NetworkParams, json: &Value, out_dir: &Path) -> Result<NetworkReport, SimError>
{
    let mut rng = Pcg64::seed_from_u64(param.graph_seed);
    let network = generate_contact_network(&param.network, &mut rng)?;
    let realized_degrees = realized_degrees(&network.graph);

    let target = MyVariance::from_slice(&network.target_degrees);
    let realized = MyVariance::from_slice(&realized_degrees);
    if let (Some(t), Some(r)) = (&target, &realized){
        info!("target degree:   mean {} variance {}", t.mean(), t.variance());
        info!("realized degree: mean {} variance {}", r.mean(), r.variance());
    }
    let edge_count = network.graph.edge_count();
    info!("{edge_count} edges");

    let hist_name = out_dir.join(param.name("hist", "dat"));
    info!("creating: {}", hist_name.display());
    let file = File::create(&hist_name)?;
    write_histogram(
        BufWriter::new(file),
        json,
        &histogram(&network.target_degrees, param.network.node_count),
        &histogram(&realized_degrees, param.network.node_count)
    )?;

    let dot_name = out_dir.join(param.name("day0", "dot"));
    info!("creating: {}", dot_name.display());
    let file = File::create(&dot_name)?;
    let epidemic = Epidemic::new(network.graph, network.infected)?;
    epidemic.snapshot(0)
        .write_dot(BufWriter::new(file))?;

    Ok(
        NetworkReport{
            target,
            realized,
            edge_count,
            files: vec![hist_name, dot_name]
        }
    )
}

/// one line per degree: how many nodes have it as target and realized degree.
/// Target degrees of node_count or more share the last line
fn write_histogram<W: Write>(mut buf: W, json: &Value, target: &[usize], realized: &[usize]) -> std::io::Result<()>
{
    write_jsons(std::slice::from_ref(json), &mut buf)?;
    writeln!(buf, "#degree target realized")?;
    let len = target.len().max(realized.len());
    for degree in 0..len{
        let t = target.get(degree).copied().unwrap_or(0);
        let r = realized.get(degree).copied().unwrap_or(0);
        writeln!(buf, "{degree} {t} {r}")?;
    }
    buf.flush()
}
