//! Persisted entity abstraction.

use serde::Serialize;

/// A persisted record with a stable integer identity.
///
/// An identity of `0` means "not yet assigned"; the store generates one
/// on insert.
pub trait Entity: Clone + Send + Sync + Serialize + 'static {
    /// Human-readable entity name used in log fields and error messages.
    const NAME: &'static str;

    /// The entity's identity.
    fn id(&self) -> i32;

    /// Overwrite the entity's identity.
    fn set_id(&mut self, id: i32);

    /// Whether the store still has to assign an identity.
    fn is_transient(&self) -> bool {
        self.id() == 0
    }
}
