pub mod handlers;
pub mod middleware;
pub mod state;

pub use state::AppState;
