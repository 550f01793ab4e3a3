use super::error::EmptyCollection;

pub(crate) trait OptionExtension<T> {
    /// Converts [`None`] into an [`EmptyCollection`] error. Used where the only way for a lookup to
    /// come back empty is for the underlying collection to be empty.
    fn or_empty(self) -> Result<T, EmptyCollection>;
}

impl<T> OptionExtension<T> for Option<T> {
    fn or_empty(self) -> Result<T, EmptyCollection> {
        self.ok_or(EmptyCollection)
    }
}
