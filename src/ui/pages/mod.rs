pub mod compare;
pub mod saved;

pub use compare::ComparePage;
pub use saved::SavedPage;
