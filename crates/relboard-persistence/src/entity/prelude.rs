pub use super::out_of_offices::Entity as OutOfOffices;
pub use super::releases::Entity as Releases;
pub use super::sprs::Entity as Sprs;
pub use super::team_events::Entity as TeamEvents;
pub use super::users::Entity as Users;
