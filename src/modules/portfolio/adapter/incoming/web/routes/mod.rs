mod entries;
mod get_portfolio;
mod tags;
mod update_profile;

pub use entries::*;
pub use get_portfolio::*;
pub use tags::*;
pub use update_profile::*;
