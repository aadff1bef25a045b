// Adapters layer: terminal and process implementations of the domain ports.

pub mod process;
pub mod prompt;

pub use process::SystemRunner;
pub use prompt::PromptConfirmer;
