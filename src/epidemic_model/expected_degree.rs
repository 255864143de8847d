use {
    rand::Rng,
    rand_distr::{Normal, Distribution},
    super::*,
    crate::error::SimError,
};

/// Draw a target degree for every node from N(mean, std_dev).
/// * draws are rounded to the nearest integer (halfway cases away from zero)
/// * negative draws are clamped to zero
pub fn draw_target_degrees<R>(
    node_count: usize,
    mean: f64,
    std_dev: f64,
    rng: &mut R
) -> Result<Vec<usize>, SimError>
where R: Rng + ?Sized
{
    if !mean.is_finite(){
        return Err(SimError::invalid(format!("mean degree has to be finite, got {mean}")));
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(
            SimError::invalid(format!("degree standard deviation has to be finite and >= 0, got {std_dev}"))
        );
    }
    let normal = Normal::new(mean, std_dev)
        .map_err(|e| SimError::invalid(format!("degree distribution N({mean}, {std_dev}): {e}")))?;

    let degrees = (0..node_count)
        .map(
            |_|
            {
                let draw = normal.sample(rng).round();
                if draw > 0.0 {
                    draw as usize
                } else {
                    0
                }
            }
        ).collect();
    Ok(degrees)
}

/// # Expected degree (Chung-Lu) random graph
/// Every unordered pair `{i, j}` with `i != j` becomes an edge independently
/// with probability `min(w_i * w_j / sum(w), 1)`.
///
/// Instead of rolling a die for each of the `n(n-1)/2` pairs, the nodes are
/// sorted by descending weight and, for each node, the number of rejected
/// partners is drawn from a geometric distribution. Since the weights only
/// shrink along the sorted order, the skipped-to partner is then accepted
/// with probability `q / p`. This needs `O(n + m)` random numbers.
///
/// The realized degrees only approximate the weights.
pub fn expected_degree_graph<R>(weights: &[usize], rng: &mut R) -> ContactGraph
where R: Rng + ?Sized
{
    let n = weights.len();
    let mut graph = ContactGraph::new(n);

    // summed as f64, the weights are unbounded
    let total: f64 = weights.iter()
        .map(|&w| w as f64)
        .sum();
    if n < 2 || total == 0.0 {
        return graph;
    }
    let rho = 1.0 / total;

    // stable sort -> same graph for same seed
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| weights[b].cmp(&weights[a]));
    let seq: Vec<f64> = order.iter()
        .map(|&i| weights[i] as f64)
        .collect();

    for u in 0..n-1 {
        let factor = seq[u] * rho;
        let mut v = u + 1;
        let mut p = (seq[v] * factor).min(1.0);
        while v < n && p > 0.0 {
            if p < 1.0 {
                // r in (0, 1]
                let r: f64 = 1.0 - rng.gen::<f64>();
                let skip = (r.ln() / (-p).ln_1p()).floor();
                if skip >= (n - v) as f64 {
                    break;
                }
                v += skip as usize;
            }
            let q = (seq[v] * factor).min(1.0);
            if rng.gen::<f64>() < q / p {
                // v > u always and v only grows, so no loop or repeated pair
                let res = graph.add_edge(order[u], order[v]);
                debug_assert!(res.is_ok());
            }
            v += 1;
            p = q;
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;

    #[test]
    fn large_weights_give_complete_graph() {
        let mut rng = Pcg64::seed_from_u64(12);
        let graph = expected_degree_graph(&[10; 6], &mut rng);
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 15);
        for i in 0..6 {
            assert_eq!(graph.degree(i), Some(5));
        }
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let mut rng = Pcg64::seed_from_u64(13);
        let graph = expected_degree_graph(&[usize::MAX; 4], &mut rng);
        assert_eq!(graph.edge_count(), 6);

        let weights = draw_target_degrees(3, 1e19, 0.0, &mut rng).unwrap();
        assert_eq!(weights, vec![10_000_000_000_000_000_000; 3]);
        let graph = expected_degree_graph(&weights, &mut rng);
        assert_eq!(graph.edge_count(), 3);
        for i in 0..3 {
            assert_eq!(graph.degree(i), Some(2));
        }
    }

    #[test]
    fn zero_weights_give_no_edges() {
        let mut rng = Pcg64::seed_from_u64(3);
        let graph = expected_degree_graph(&[0; 20], &mut rng);
        assert_eq!(graph.vertex_count(), 20);
        assert_eq!(graph.edge_count(), 0);

        let graph = expected_degree_graph(&[4], &mut rng);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn zero_weight_node_stays_isolated() {
        let mut rng = Pcg64::seed_from_u64(99);
        let mut weights = vec![6; 50];
        weights[17] = 0;
        let graph = expected_degree_graph(&weights, &mut rng);
        assert_eq!(graph.degree(17), Some(0));
    }

    #[test]
    fn mean_degree_is_close_to_target() {
        let mut rng = Pcg64::seed_from_u64(2020);
        let weights = draw_target_degrees(2000, 8.0, 2.0, &mut rng).unwrap();
        let graph = expected_degree_graph(&weights, &mut rng);
        let mean = 2.0 * graph.edge_count() as f64 / 2000.0;
        assert!((6.5..9.5).contains(&mean), "mean degree {mean}");
    }

    #[test]
    fn no_self_loops_or_parallel_edges() {
        let mut rng = Pcg64::seed_from_u64(7);
        let weights = draw_target_degrees(300, 12.0, 5.0, &mut rng).unwrap();
        let graph = expected_degree_graph(&weights, &mut rng);
        for i in 0..graph.vertex_count() {
            let mut neighbors: Vec<usize> = graph
                .contained_iter_neighbors_with_index(i)
                .map(|(j, _)| j)
                .collect();
            assert!(!neighbors.contains(&i));
            let len = neighbors.len();
            neighbors.sort_unstable();
            neighbors.dedup();
            assert_eq!(len, neighbors.len());
        }
    }

    #[test]
    fn negative_draws_are_clamped() {
        let mut rng = Pcg64::seed_from_u64(1);
        let degrees = draw_target_degrees(500, -3.0, 1.0, &mut rng).unwrap();
        assert_eq!(degrees.len(), 500);
        assert!(degrees.iter().all(|&d| d == 0));

        let degrees = draw_target_degrees(10, 4.0, 0.0, &mut rng).unwrap();
        assert_eq!(degrees, vec![4; 10]);
    }

    #[test]
    fn bad_distribution_is_rejected() {
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(draw_target_degrees(10, 4.0, -1.0, &mut rng).unwrap_err().is_invalid_parameter());
        assert!(draw_target_degrees(10, f64::NAN, 1.0, &mut rng).unwrap_err().is_invalid_parameter());
        assert!(draw_target_degrees(10, 4.0, f64::INFINITY, &mut rng).unwrap_err().is_invalid_parameter());
    }
}
