use serde::de::DeserializeOwned;

/// A record read from a content collection.
pub trait Record: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection the record lives in.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}
