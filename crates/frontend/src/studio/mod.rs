pub mod api;
pub mod page;
pub mod state;

pub use page::StudioPage;
