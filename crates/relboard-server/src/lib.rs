pub mod model;
pub mod startup;
