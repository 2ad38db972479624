mod formatting;
mod generator;

pub use formatting::share_text;
pub use generator::IdeaGenerator;
