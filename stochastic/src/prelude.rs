pub use crate::{
    data::{event::*, timehistory::*, units::*},
    models::{modelname::*, registry::*, stochasticmodel::*},
    utils::{config::*, errors::*, logging::*, output::*},
};
