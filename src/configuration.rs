pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> String;
    fn database_url(&self) -> Option<String>;
    /// Number of rooms seeded into the impersistent backend.
    fn rooms(&self) -> u32;
}
