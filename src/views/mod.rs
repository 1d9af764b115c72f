#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod chat;
pub mod shared;

#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub use chat::ChatView;
