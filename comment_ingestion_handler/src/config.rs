use aws_config::{BehaviorVersion, Region, SdkConfig, meta::region::RegionProviderChain};
use env_var::{VarNameErr, env_var};

env_var!(
    pub struct EnvVars {
        #[derive(Debug, Clone)]
        pub TableName,
        #[derive(Debug, Clone)]
        pub BucketIngestaName,
    }
);

/// Everything the lambda needs before it can accept events
#[derive(Debug, Clone)]
pub struct Config {
    /// dynamodb table holding the normalized comments
    pub table_name: TableName,
    /// s3 bucket receiving the raw request bodies
    pub bucket_ingesta_name: BucketIngestaName,
}

impl Config {
    /// Reads the required variables, failing on the first one that is missing or empty
    pub fn from_env() -> Result<Self, VarNameErr> {
        let EnvVars {
            table_name,
            bucket_ingesta_name,
        } = EnvVars::new()?;

        Ok(Config {
            table_name,
            bucket_ingesta_name,
        })
    }
}

pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_var::with_mock_env;
    use std::env::VarError;

    #[test]
    fn it_reads_both_names() {
        let config = with_mock_env(
            |name| match name {
                "TABLE_NAME" => Ok("comentarios".to_string()),
                "BUCKET_INGESTA_NAME" => Ok("ingesta-raw".to_string()),
                _ => Err(VarError::NotPresent),
            },
            Config::from_env,
        )
        .unwrap();

        assert_eq!(config.table_name.as_ref(), "comentarios");
        assert_eq!(config.bucket_ingesta_name.as_ref(), "ingesta-raw");
    }

    #[test]
    fn it_fails_fast_without_a_bucket() {
        let err = with_mock_env(
            |name| match name {
                "TABLE_NAME" => Ok("comentarios".to_string()),
                _ => Err(VarError::NotPresent),
            },
            Config::from_env,
        )
        .unwrap_err();

        assert_eq!(err.var_name(), "BUCKET_INGESTA_NAME");
    }

    #[test]
    fn it_fails_fast_on_an_empty_table_name() {
        let err = with_mock_env(
            |name| match name {
                "TABLE_NAME" => Ok(String::new()),
                "BUCKET_INGESTA_NAME" => Ok("ingesta-raw".to_string()),
                _ => Err(VarError::NotPresent),
            },
            Config::from_env,
        )
        .unwrap_err();

        assert_eq!(err.var_name(), "TABLE_NAME");
    }
}
