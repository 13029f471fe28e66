pub mod session;
pub mod voice;

pub use session::{SessionConfigurator, SessionRequest};
pub use voice::Voice;
