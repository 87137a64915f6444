//! Registry collaborators: location lookup, identifier generation, patient storage

mod local;
mod traits;

pub use local::LocalRegistry;
pub use traits::RegistryClientTrait;

#[cfg(test)]
pub use traits::MockRegistryClientTrait;
