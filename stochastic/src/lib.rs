//! Contract for stochastic loading generators.
//!
//! A [`StochasticModel`](models::stochasticmodel::StochasticModel) turns a
//! named event into an [`EventDocument`](data::event::EventDocument) of
//! loading time histories, held in memory or written as JSON.

pub mod data;
pub mod models;
pub mod prelude;
pub mod utils;
