pub mod cast_vote;
pub mod create_dao;
pub mod create_proposal;
pub mod execute_proposal;
pub mod fund_treasury;
pub mod initialize_registry;
pub mod update_default_parameters;
pub mod update_parameters;
pub mod views;

pub use cast_vote::*;
pub use create_dao::*;
pub use create_proposal::*;
pub use execute_proposal::*;
pub use fund_treasury::*;
pub use initialize_registry::*;
pub use update_default_parameters::*;
pub use update_parameters::*;
pub use views::*;
