use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the map initializer.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of ambient dependencies injected into map initialization.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment` with the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates a new instance of `Environment` which drops all messages.
    pub fn new_silent() -> Self {
        Self { logger: Arc::new(|_| {}) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { logger: Arc::new(|msg| println!("{}", msg)) }
    }
}
