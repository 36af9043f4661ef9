//! Test context for unified test setup
//!
//! Starts a mock backend and builds settings and services pointed at it.

use tempfile::TempDir;
use training_portal::config::{
    AdminConfig, BackendConfig, FeaturesConfig, LoggingConfig, PricingConfig, Settings,
};
use training_portal::services::ServiceFactory;

use super::backend_mock::{BackendMockServer, TEST_ANON_KEY};

/// Test configuration options
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub registration_open: bool,
    pub newsletter: bool,
    pub required_role: Option<String>,
    pub page_size: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            registration_open: true,
            newsletter: true,
            required_role: None,
            page_size: 5,
        }
    }
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: BackendMockServer,
    pub settings: Settings,
    pub services: ServiceFactory,
    pub temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_config(TestConfig::default()).await
    }

    pub async fn new_with_config(config: TestConfig) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let backend = BackendMockServer::new().await;
        let settings = Self::create_test_settings(&backend, &config, &temp_dir);
        settings.validate().expect("Test settings should be valid");
        let services = ServiceFactory::new(settings.clone()).expect("Failed to build services");

        Self {
            backend,
            settings,
            services,
            temp_dir,
        }
    }

    fn create_test_settings(backend: &BackendMockServer, config: &TestConfig, temp_dir: &TempDir) -> Settings {
        Settings {
            backend: BackendConfig {
                url: backend.url(),
                anon_key: TEST_ANON_KEY.to_string(),
                timeout_seconds: 5,
                application_name: "training-portal-tests".to_string(),
            },
            pricing: PricingConfig::default(),
            admin: AdminConfig {
                page_size: config.page_size,
                required_role: config.required_role.clone(),
                ..AdminConfig::default()
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                file_path: temp_dir.path().join("test.log").to_string_lossy().into_owned(),
            },
            features: FeaturesConfig {
                newsletter: config.newsletter,
                registration_open: config.registration_open,
            },
        }
    }
}
