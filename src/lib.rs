pub mod aggregate;
pub mod app;
pub mod data;
pub mod dates;
pub mod errors;
pub mod flatten;
pub mod handlers;
pub mod models;
pub mod reports;
pub mod state;
pub mod storage;

pub use app::router;
pub use state::AppState;
pub use storage::{load_dataset, resolve_data_path};
