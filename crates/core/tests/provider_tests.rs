// ═══════════════════════════════════════════════════════════════════
// Provider Tests — IndexProvider trait, HttpIndexProvider logic
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;

use diy_index_core::errors::CoreError;
use diy_index_core::models::index::{Constituent, IndexAllocation, IndexSummary};
use diy_index_core::models::settings::Settings;
use diy_index_core::providers::http::HttpIndexProvider;
use diy_index_core::providers::traits::IndexProvider;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Provider
// ═══════════════════════════════════════════════════════════════════

/// A mock data source serving one fixed index.
struct MockProvider;

#[async_trait]
impl IndexProvider for MockProvider {
    fn name(&self) -> &str {
        "MockProvider"
    }

    async fn list_indices(&self) -> Result<Vec<IndexSummary>, CoreError> {
        Ok(vec![IndexSummary {
            name: "NIFTY50".into(),
        }])
    }

    async fn get_allocation(
        &self,
        index_name: &str,
        amount: f64,
    ) -> Result<IndexAllocation, CoreError> {
        Ok(IndexAllocation {
            name: index_name.to_string(),
            constituents: vec![Constituent {
                symbol: "RELIANCE".into(),
                name: "Reliance Industries".into(),
                weight: 100.0,
                price: 2500.0,
                shares: (amount / 2500.0) as u64,
                allocated_amount: amount,
            }],
        })
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Trait objects
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn mock_provider_works_through_trait_object() {
    let provider: Box<dyn IndexProvider> = Box::new(MockProvider);
    assert_eq!(provider.name(), "MockProvider");

    let indices = provider.list_indices().await.unwrap();
    assert_eq!(indices.len(), 1);

    let allocation = provider.get_allocation("NIFTY50", 100_000.0).await.unwrap();
    assert_eq!(allocation.name, "NIFTY50");
    assert_eq!(allocation.constituents[0].shares, 40);
}

// ═══════════════════════════════════════════════════════════════════
//  HttpIndexProvider
// ═══════════════════════════════════════════════════════════════════

mod http_provider {
    use super::*;

    #[test]
    fn reports_its_name() {
        let provider = HttpIndexProvider::new(Settings::new("http://localhost:4000"));
        assert_eq!(provider.name(), "IndexApi");
    }

    #[test]
    fn base_url_trailing_slash_trimmed_by_settings() {
        let provider = HttpIndexProvider::new(Settings::new("http://localhost:4000/"));
        assert_eq!(provider.base_url(), "http://localhost:4000");
    }

    #[tokio::test]
    async fn negative_amount_rejected_before_any_request() {
        let provider = HttpIndexProvider::new(Settings::new("http://localhost:4000"));
        let err = provider.get_allocation("NIFTY50", -1.0).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn nan_amount_rejected_before_any_request() {
        let provider = HttpIndexProvider::new(Settings::new("http://localhost:4000"));
        let err = provider
            .get_allocation("NIFTY50", f64::NAN)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn unparseable_base_url_is_a_validation_error() {
        let provider = HttpIndexProvider::new(Settings::new("not a url"));
        let err = provider.list_indices().await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn from_env_fails_without_configuration() {
        std::env::remove_var(diy_index_core::models::settings::API_BASE_URL_ENV);
        assert!(matches!(
            HttpIndexProvider::from_env(),
            Err(CoreError::MissingEnv(_))
        ));
    }
}
