pub mod prompt;
pub mod providers;
pub mod relay;

pub use prompt::{build_prompt, build_prompt_for_tag};
pub use relay::{RelayService, FALLBACK_MESSAGE};
