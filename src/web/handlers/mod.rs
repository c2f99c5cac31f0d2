pub mod chat_handlers;
pub mod guidance_handlers;
pub mod interview_handlers;
pub mod resume_handlers;
pub mod system_handlers;

pub use chat_handlers::*;
pub use guidance_handlers::*;
pub use interview_handlers::*;
pub use resume_handlers::*;
pub use system_handlers::*;
