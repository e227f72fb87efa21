pub mod browse;
pub mod manage;

pub use browse::BrowseController;
pub use manage::ManageController;
