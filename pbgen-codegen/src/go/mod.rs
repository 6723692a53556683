//! Go code generation modules.

pub mod collections;
pub mod model;

pub use collections::CollectionsGenerator;
pub use model::ModelGenerator;
