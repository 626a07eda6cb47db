//! Typed sentinels for required environment variables.
//!
//! [env_var!] generates one struct per variable; holding an instance proves the
//! variable was present when the struct was built.

// Re-export paste so users don't need to depend on it directly
pub use paste;
use thiserror::Error;


#[cfg(any(test, feature = "mock"))]
mod testing_harness {
    use super::VarNameErr;
    use std::cell::Cell;

    type MockValue = Cell<Option<Box<dyn Fn(&'static str) -> Result<String, std::env::VarError>>>>;
    thread_local! {
        static MOCK_VAR_GETTER: MockValue = const { Cell::new(None) };
    }

    pub fn read_env(s: &'static str) -> Result<String, VarNameErr> {
        let cur_getter = MOCK_VAR_GETTER.replace(None);
        let out = match cur_getter {
            Some(mock) => {
                let out = mock(s);
                MOCK_VAR_GETTER.replace(Some(mock));
                out
            }
            None => std::env::var(s),
        };
        super::non_empty(s, out)
    }

    /// Runs `cb` with every variable read on this thread answered by `f`.
    pub fn with_mock_env<F, Cb, U>(f: F, cb: Cb) -> U
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError> + 'static,
        Cb: FnOnce() -> U,
    {
        MOCK_VAR_GETTER.replace(Some(Box::new(f)));
        let output = cb();
        MOCK_VAR_GETTER.replace(None);
        output
    }
}

#[cfg(any(test, feature = "mock"))]
pub use testing_harness::{read_env, with_mock_env};

#[cfg(not(any(test, feature = "mock")))]
pub fn read_env(s: &'static str) -> Result<String, VarNameErr> {
    non_empty(s, std::env::var(s))
}

/// A variable that is set to the empty string is treated as missing
fn non_empty(
    var_name: &'static str,
    res: Result<String, std::env::VarError>,
) -> Result<String, VarNameErr> {
    match res {
        Ok(v) if v.trim().is_empty() => Err(VarNameErr {
            var_name,
            err: std::env::VarError::NotPresent,
        }),
        Ok(v) => Ok(v),
        Err(err) => Err(VarNameErr { var_name, err }),
    }
}

/// The type of error that is produced by this crate
#[derive(Debug, Error)]
#[error("An error occurred while reading envvar: {var_name}. Err: {err}")]
pub struct VarNameErr {
    var_name: &'static str,
    err: std::env::VarError,
}

impl VarNameErr {
    /// The name of the variable that could not be read
    pub fn var_name(&self) -> &'static str {
        self.var_name
    }
}

#[macro_export]
macro_rules! env_var {
    (
        $(#[$attr:meta])*
        $v:vis struct $n:ident;
    ) => {
        $crate::paste::paste! {
            #[doc = "Proof that the `" $n:snake:upper "` environment variable was read at startup."]
            $(#[$attr])*
            $v struct $n(std::sync::Arc<str>);

            impl $n {
                #[doc = "Read `" $n:snake:upper "` from the environment. Empty values are rejected."]
                #[allow(dead_code)]
                #[tracing::instrument(err)]
                $v fn new() -> Result<Self, $crate::VarNameErr> {
                    let res = $crate::read_env(stringify!([<$n:snake:upper>]))?;
                    Ok(Self(std::sync::Arc::from(res)))
                }

                #[doc = "Build from a literal value, bypassing the environment"]
                #[allow(dead_code)]
                $v fn from_value(s: impl Into<std::sync::Arc<str>>) -> Self {
                    Self(s.into())
                }

                #[allow(dead_code)]
                #[doc = "Returns an Arc<str> of the contained value"]
                $v fn as_arc(&self) -> std::sync::Arc<str> {
                    self.0.clone()
                }
            }

            impl std::ops::Deref for $n {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl std::convert::AsRef<str> for $n {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl std::fmt::Display for $n {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        }
    };
    (
        $(#[$attr:meta])*
        $v:vis struct $n:ident {
            $(
                $(#[$field_attr:meta])*
                $field_vis:vis $field_name:ident
            ),* $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $(
                $crate::env_var!(
                    $(#[$field_attr])*
                    $field_vis struct $field_name;
                );
            )*

            $(#[$attr])*
            $v struct $n {
                $(
                    pub [<$field_name:snake>]: $field_name,
                )*
            }

            impl $n {
                #[doc = "Read every variable in this group. Fails on the first one that is missing"]
                #[allow(dead_code)]
                $v fn new() -> Result<Self, $crate::VarNameErr> {
                    Ok(Self {
                        $(
                            [<$field_name:snake>]: $field_name::new()?,
                        )*
                    })
                }
            }
        }
    };
}
