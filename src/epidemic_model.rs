pub mod health_states;
pub use health_states::*;

pub mod expected_degree;
pub use expected_degree::*;

pub mod contact_network;
pub use contact_network::*;

pub mod epidemic;
pub use epidemic::*;

pub mod snapshot;
pub use snapshot::*;

pub mod curve_writer;
pub use curve_writer::*;
