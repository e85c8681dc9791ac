use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{self, AppConfig};
use crate::shared::toast::{NotifierHandle, ToastService, Toaster};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(AppConfig::default());
    let config_ready = RwSignal::new(false);
    provide_context(config);

    let toasts = ToastService::new();
    provide_context(NotifierHandle::new(toasts));

    // Shell selection (company / module), kept in the URL query
    provide_context(AppGlobalContext::new());

    spawn_local(async move {
        let loaded = config::load_config().await;
        log::set_max_level(loaded.log_level());
        log::debug!("Configuration ready: {:?}", loaded);
        config.set(loaded);
        config_ready.set(true);
    });

    view! {
        <Toaster service=toasts />
        <Show when=move || config_ready.get() fallback=|| view! { <div class="app-loading">"Cargando..."</div> }>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </Show>
    }
}
