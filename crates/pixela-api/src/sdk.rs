use crate::client::PixelaClient;
use crate::errors::Result;
use crate::graphs::GraphsClient;
use crate::pixel::PixelClient;

/// Main SDK struct for Pixela
///
/// Owns one configured client and hands out the resource clients that
/// share it.
pub struct Pixela {
    api_client: PixelaClient,
}

impl Pixela {
    /// Create a new Pixela instance for a username/token pair
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_client: PixelaClient::new(username, token),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_client: PixelaClient::from_env()?,
        })
    }

    /// Wrap an already-configured client
    pub fn with_client(api_client: PixelaClient) -> Self {
        Self { api_client }
    }

    /// Resource client for graph definitions
    pub fn graphs(&self) -> GraphsClient<'_> {
        GraphsClient::new(&self.api_client)
    }

    /// Resource client for daily pixel records
    pub fn pixel(&self) -> PixelClient<'_> {
        PixelClient::new(&self.api_client)
    }

    /// Borrow the underlying transport client
    pub fn client(&self) -> &PixelaClient {
        &self.api_client
    }
}
