// Application layer - Use case interactors

pub mod container;
pub mod resolve_interactor;
pub mod screen_interactor;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export interactors
pub use resolve_interactor::VideoSourceResolver;
pub use screen_interactor::{HomeScreenInteractor, ScreenSettings, ScreenState};
