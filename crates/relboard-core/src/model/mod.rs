//! Domain model types
//!
//! These types travel between the HTTP layer, the services and the
//! persistence traits, decoupled from specific storage backends.

mod calendar;
mod enums;
mod release;
mod spr;
mod user;

pub use calendar::{OutOfOffice, TeamEvent};
pub use enums::{Priority, Resolution, Territory};
pub use release::Release;
pub use spr::Spr;
pub use user::User;
