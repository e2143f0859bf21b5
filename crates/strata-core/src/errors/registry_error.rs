/// Topic registry errors — the only errors surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("topic '{name}' is already on the timeline")]
    AlreadyExists { name: String },

    #[error("timeline is full: at most {capacity} topics at once")]
    CapacityExceeded { capacity: usize },

    #[error("no historical data found for '{topic}'")]
    NoDataFound { topic: String },
}
