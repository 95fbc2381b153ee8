//! SeaORM entity definitions

pub mod prelude;

pub mod out_of_offices;
pub mod releases;
pub mod sprs;
pub mod team_events;
pub mod users;
