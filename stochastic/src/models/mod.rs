pub mod modelname;
pub mod registry;
pub mod stochasticmodel;
