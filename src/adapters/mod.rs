// Adapters layer: concrete implementations of the domain ports (http, storage, display).

pub mod display;
pub mod http;
pub mod storage;

pub use display::{NoDisplay, PreviewDisplay};
pub use http::HttpImageSource;
pub use storage::LocalStorage;
