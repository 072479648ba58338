use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Turns raw file content into a typed value. May suspend and may fail.
#[async_trait::async_trait]
pub trait FileParser<T>: Send + Sync {
    async fn parse(&self, content: String) -> Result<T>;
}

/// Turns a typed value into file content. May suspend and may fail.
#[async_trait::async_trait]
pub trait FileSerializer<T>: Send + Sync {
    async fn serialize(&self, data: &T) -> Result<String>;
}

#[async_trait::async_trait]
impl<T, F> FileParser<T> for F
where
    T: Send + 'static,
    F: Fn(String) -> Result<T> + Send + Sync,
{
    async fn parse(&self, content: String) -> Result<T> {
        self(content)
    }
}

#[async_trait::async_trait]
impl<T, F> FileSerializer<T> for F
where
    T: Sync,
    F: Fn(&T) -> Result<String> + Send + Sync,
{
    async fn serialize(&self, data: &T) -> Result<String> {
        self(data)
    }
}

/// Passes text through unchanged in both directions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

#[async_trait::async_trait]
impl FileParser<String> for Identity {
    async fn parse(&self, content: String) -> Result<String> {
        Ok(content)
    }
}

#[async_trait::async_trait]
impl FileSerializer<String> for Identity {
    async fn serialize(&self, data: &String) -> Result<String> {
        Ok(data.clone())
    }
}

/// JSON content via serde_json.
#[derive(Debug, Default, Clone, Copy)]
pub struct Json {
    pretty: bool,
}

impl Json {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

#[async_trait::async_trait]
impl<T: DeserializeOwned + Send + 'static> FileParser<T> for Json {
    async fn parse(&self, content: String) -> Result<T> {
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait::async_trait]
impl<T: Serialize + Sync> FileSerializer<T> for Json {
    async fn serialize(&self, data: &T) -> Result<String> {
        let content = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(content)
    }
}
