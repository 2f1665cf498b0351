pub mod dao;
pub mod proposal;
pub mod registry;
pub mod vote_record;

pub use dao::*;
pub use proposal::*;
pub use registry::*;
pub use vote_record::*;
