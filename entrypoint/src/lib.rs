#![deny(missing_docs)]
//! Standardized initialization for the binaries in this workspace.
//! Every lambda calls [Entrypoint::init] first so that logging looks the same everywhere.

use tracing_subscriber::EnvFilter;

mod environment;

pub use environment::Environment;

/// Describes how the binary should be initialized
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [Entrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(Environment);

impl InitializedEntrypoint {
    /// the environment the binary was initialized for
    pub fn environment(&self) -> Environment {
        self.0
    }
}

impl Entrypoint {
    /// consume self, initialize this binary, and return a proof that it was initialized
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true) // Include current span in formatted events
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(self.env)
    }
}
