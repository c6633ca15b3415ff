//! Command implementations.

pub mod discover;
pub mod fetch;
pub mod list;
pub mod parse;
pub mod profile;

pub use self::discover::execute_discover;
pub use self::fetch::{execute_event, execute_race, execute_round};
pub use self::list::execute_list;
pub use self::parse::execute_parse;
pub use self::profile::execute_profile;
