use crate::CoreError;

/// Whole-collection persistence for an ordered list of records.
///
/// Implementations must treat an empty or absent resource as an empty
/// collection, and must not touch the stored content when encoding fails.
pub trait RecordRepository<T>: Send + Sync {
    fn load_all(&self) -> Result<Vec<T>, CoreError>;
    fn save_all(&self, items: &[T]) -> Result<(), CoreError>;
}

