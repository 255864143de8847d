use {
    serde::{Serialize, Deserialize},
    net_ensembles::Node
};

/// The three mutually exclusive states a person can be in.
/// `Symptomatic` is terminal, there is no recovery or death.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash)]
#[derive(Serialize, Deserialize)]
pub enum DiseaseState{
    Healthy,
    InfectedAsymptomatic,
    Symptomatic,
}

impl DiseaseState{
    pub fn label(&self) -> &'static str
    {
        match self{
            Self::Healthy => "Not Sick",
            Self::InfectedAsymptomatic => "Sick, Not Showing",
            Self::Symptomatic => "Showing"
        }
    }

    pub fn color(&self) -> &'static str
    {
        match self{
            Self::Healthy => "green",
            Self::InfectedAsymptomatic => "yellow",
            Self::Symptomatic => "red"
        }
    }
}

impl Default for DiseaseState{
    fn default() -> Self{
        DiseaseState::Healthy
    }
}

/// Health record of a single node, stored as the node payload
/// of the contact graph and addressed by node index
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize)]
pub struct HealthRecord{
    pub infected: bool,
    pub days_infected: u32,
    pub symptomatic: bool,
    pub days_symptomatic: u32,
}

impl HealthRecord{
    pub fn state(&self) -> DiseaseState
    {
        if self.symptomatic{
            DiseaseState::Symptomatic
        } else if self.infected{
            DiseaseState::InfectedAsymptomatic
        } else {
            DiseaseState::Healthy
        }
    }

    pub fn is_healthy(&self) -> bool{
        !self.infected && !self.symptomatic
    }
    pub fn is_infected(&self) -> bool{
        self.infected && !self.symptomatic
    }
    pub fn is_symptomatic(&self) -> bool{
        self.symptomatic
    }

    /// back to the healthy baseline
    pub fn reset(&mut self){
        *self = Self::default();
    }

    /// Healthy -> Infected-Asymptomatic
    pub fn infect(&mut self){
        debug_assert!(self.is_healthy());
        self.infected = true;
        self.days_infected = 0;
    }

    /// Infected-Asymptomatic -> Symptomatic.
    /// The node stops being tracked as infected.
    pub fn show_symptoms(&mut self){
        debug_assert!(self.is_infected());
        self.infected = false;
        self.symptomatic = true;
        self.days_symptomatic = 1;
    }
}

impl Node for HealthRecord{
    fn new_from_index(_index: usize) -> Self{
        HealthRecord::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_are_one_way() {
        let mut record = HealthRecord::default();
        assert_eq!(record.state(), DiseaseState::Healthy);

        record.infect();
        assert_eq!(record.state(), DiseaseState::InfectedAsymptomatic);
        assert_eq!(record.days_infected, 0);

        record.days_infected += 3;
        record.show_symptoms();
        assert_eq!(record.state(), DiseaseState::Symptomatic);
        assert!(!record.infected);
        assert_eq!(record.days_symptomatic, 1);
        // incubation time is kept for reference
        assert_eq!(record.days_infected, 3);

        assert!(!record.is_healthy());
        assert!(!record.is_infected());
    }

    #[test]
    fn reset_restores_baseline() {
        let mut record = HealthRecord::default();
        record.infect();
        record.reset();
        assert!(record.is_healthy());
        assert_eq!(record, HealthRecord::default());
    }
}
