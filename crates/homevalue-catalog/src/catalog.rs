//! Mock catalog API.

use homevalue_core::models::enhancement::{EnhancementDetail, EnhancementSummary};
use homevalue_core::models::quote::{QuoteAck, QuoteRequest};
use tokio::time::sleep;
use tracing::info;

use crate::config::CatalogConfig;
use crate::data;

pub const QUOTE_ACK_MESSAGE: &str =
    "Quote request received. Our team will contact you within 24 hours.";

/// Read-only enhancement catalog behind simulated latency.
pub struct Catalog {
    items: Vec<EnhancementDetail>,
    config: CatalogConfig,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            items: data::enhancements(),
            config,
        }
    }

    /// Card summaries for every enhancement, in display order.
    pub async fn list(&self) -> Vec<EnhancementSummary> {
        sleep(self.config.list_delay).await;
        self.items.iter().map(|d| d.summary.clone()).collect()
    }

    /// Full record for `id`, or `None` for an unknown id.
    pub async fn get(&self, id: &str) -> Option<EnhancementDetail> {
        sleep(self.config.get_delay).await;
        self.items.iter().find(|d| d.id() == id).cloned()
    }

    /// Acknowledge a quote request. Always succeeds, for any `id`.
    pub async fn request_quote(&self, id: &str, request: QuoteRequest) -> QuoteAck {
        info!(
            enhancement = id,
            name = %request.name,
            phone = ?request.phone,
            email = ?request.email,
            "Quote requested"
        );
        sleep(self.config.quote_delay).await;

        QuoteAck {
            ok: true,
            message: QUOTE_ACK_MESSAGE.into(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}
