//! Adapters translating the uniform digest call into each provider's native pattern

mod native;
mod subtle;

pub use native::NativeAdapter;
pub use subtle::SubtleAdapter;
