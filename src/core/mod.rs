pub mod config;
pub mod engine;
pub mod page;
pub mod phase;
pub mod scene;
pub mod smoother;
pub mod stream;

pub use config::*;
pub use engine::*;
pub use phase::*;
pub use scene::*;
pub use smoother::*;
pub use stream::*;
