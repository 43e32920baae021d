pub mod error;
pub mod model;
pub mod policy;
pub mod validate;
pub mod wasm;
