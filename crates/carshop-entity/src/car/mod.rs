//! Car domain entities.

pub mod condition;
pub mod model;
pub mod search;

pub use condition::CarCondition;
pub use model::Car;
pub use search::CarSearchCriteria;
