use {
    std::io::Write,
    serde::{Serialize, Deserialize},
    super::*,
};

/// Copy of the network state on a given day.
/// Never mutated after it was taken.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot{
    pub day: usize,
    pub states: Vec<DiseaseState>,
    pub edges: Vec<[usize;2]>
}

impl Snapshot{
    pub fn counts(&self) -> StateCounts
    {
        let mut counts = StateCounts::default();
        self.states.iter()
            .for_each(
                |state|
                match state{
                    DiseaseState::Healthy => counts.healthy += 1,
                    DiseaseState::InfectedAsymptomatic => counts.infected += 1,
                    DiseaseState::Symptomatic => counts.symptomatic += 1
                }
            );
        counts
    }

    /// Graphviz source, one colored and labeled vertex per node.
    /// Render e.g. with `neato -Tpng`
    pub fn write_dot<W: Write>(&self, mut writer: W) -> std::io::Result<()>
    {
        writeln!(writer, "graph day_{} {{", self.day)?;
        writeln!(writer, "\tlabel=\"Day Number {}\";", self.day)?;
        writeln!(writer, "\tlabelloc=t;")?;
        writeln!(writer, "\tnode [shape=circle, style=filled, width=0.2, fixedsize=true, label=\"\"];")?;
        writeln!(writer, "\tedge [color=\"#888888\", penwidth=0.5];")?;
        for (index, state) in self.states.iter().enumerate(){
            writeln!(
                writer,
                "\t{index} [fillcolor={}, tooltip=\"{}\"];",
                state.color(),
                state.label()
            )?;
        }
        for [i, j] in self.edges.iter(){
            writeln!(writer, "\t{i} -- {j};")?;
        }
        writeln!(writer, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Snapshot
    {
        Snapshot{
            day: 5,
            states: vec![
                DiseaseState::Healthy,
                DiseaseState::InfectedAsymptomatic,
                DiseaseState::Symptomatic,
                DiseaseState::Healthy
            ],
            edges: vec![[0, 1], [1, 2]]
        }
    }

    #[test]
    fn counts_states() {
        assert_eq!(
            toy().counts(),
            StateCounts{healthy: 2, infected: 1, symptomatic: 1}
        );
    }

    #[test]
    fn dot_output() {
        let mut buf = Vec::new();
        toy().write_dot(&mut buf).unwrap();
        let dot = String::from_utf8(buf).unwrap();
        assert!(dot.starts_with("graph day_5 {"));
        assert!(dot.contains("label=\"Day Number 5\""));
        assert!(dot.contains("0 [fillcolor=green, tooltip=\"Not Sick\"];"));
        assert!(dot.contains("1 [fillcolor=yellow, tooltip=\"Sick, Not Showing\"];"));
        assert!(dot.contains("2 [fillcolor=red, tooltip=\"Showing\"];"));
        assert!(dot.contains("\t1 -- 2;"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
