use ghsearch_config::Config;
use ghsearch_ghapi_interface::ApiService;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub api_service: &'a (dyn ApiService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use ghsearch_config::Config;
    use ghsearch_ghapi_interface::MockApiService;

    use crate::CoreContext;

    pub struct CoreContextTest {
        pub config: Config,
        pub api_service: MockApiService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version().expect("test configuration"),
                api_service: MockApiService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext<'_> {
            CoreContext {
                config: &self.config,
                api_service: &self.api_service,
            }
        }
    }
}
