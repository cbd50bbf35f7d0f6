pub mod evolution;
pub mod group_by;
pub mod repartition;
pub mod stats;
pub mod xy;
