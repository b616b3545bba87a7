/// Storage capability the booking manager depends on. Implementations decide
/// how records are persisted and how identifiers are assigned on `add`.
pub trait Repository<T>: Clone + Send + Sync + 'static {
    fn get_all(&self) -> Vec<T>;
    fn add(&self, entity: T);
}
