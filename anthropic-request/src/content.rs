pub mod assistant_content;
pub mod user_content;

pub use assistant_content::*;
pub use user_content::*;
