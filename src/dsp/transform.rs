//! Transform trait definition
//!
//! Base trait for every buffer-reshaping operation that can be queued in a
//! `TransformChain`.

use std::fmt::Debug;

use crate::engine::SampleBuffer;

/// Base trait for all buffer transforms
///
/// A transform takes exclusive ownership of its input and returns the
/// buffer that supersedes it. Whether that is the same storage modified in
/// place or a freshly derived buffer is the transform's business; the caller
/// only ever holds one owner.
pub trait Transform: Debug + Send + Sync {
    /// Consume `buffer` and return the transformed buffer
    fn apply(&self, buffer: SampleBuffer) -> SampleBuffer;

    /// Get the transform type identifier
    fn transform_type(&self) -> &'static str;

    /// Clone the transform into a boxed trait object
    fn box_clone(&self) -> Box<dyn Transform>;
}

impl Clone for Box<dyn Transform> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Helper macro to implement common Transform trait methods
#[macro_export]
macro_rules! impl_transform_common {
    ($transform_type:expr) => {
        fn transform_type(&self) -> &'static str {
            $transform_type
        }

        fn box_clone(&self) -> Box<dyn $crate::dsp::Transform> {
            Box::new(self.clone())
        }
    };
}
