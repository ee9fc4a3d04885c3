pub mod content;

pub use content::{
    ContentRoot, ContentRootProvider, InMemoryContentRoot, InMemoryContentRootProvider,
    RasterError, RasterSnapshot,
};
