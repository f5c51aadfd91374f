use api::HttpUserService;
use dioxus::prelude::*;
use store::DashboardConfig;

/// The user service provided by [`ServiceProvider`].
pub fn use_user_service() -> HttpUserService {
    use_context::<HttpUserService>()
}

pub fn use_dashboard_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}

/// Provides the REST client and dashboard configuration to everything below it.
#[component]
pub fn ServiceProvider(config: DashboardConfig, children: Element) -> Element {
    let service_config = config.clone();
    use_context_provider(move || {
        let service = HttpUserService::from_config(&service_config);
        tracing::info!("using user service at {}", service.base_url());
        service
    });
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}
