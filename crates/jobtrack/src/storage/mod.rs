pub mod filesystem;

pub use filesystem::{ResumeStore, ACCEPTED_EXTENSIONS};
