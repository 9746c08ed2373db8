pub mod local;

pub use local::LocalAssetStorage;
