//! Id Generator Port - DOM ids for rendered elements.

/// Port turning an id seed into a DOM id.
///
/// # Contract
///
/// - Deterministic: equal seeds give equal ids
/// - Injective on seeds built from `PlaceKey` slugs, so distinct place keys
///   never collide for the same column
pub trait IdGenerator: Send + Sync {
    fn generate(&self, seed: &str) -> String;
}
