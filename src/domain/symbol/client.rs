//! Symbols sub-client — tradable pair metadata.

use crate::client::BybitClient;
use crate::domain::symbol::wire::SymbolsResponse;
use crate::error::SdkError;

const SYMBOLS_PATH: &str = "/spot/v1/symbols";

/// Sub-client for symbol metadata.
pub struct Symbols<'a> {
    pub(crate) client: &'a BybitClient,
}

impl<'a> Symbols<'a> {
    /// List all tradable spot pairs.
    pub async fn list(&self) -> Result<SymbolsResponse, SdkError> {
        Ok(self.client.http.get_public(SYMBOLS_PATH, &[]).await?)
    }
}
