use leptos::prelude::*;

use crate::shared::config::AppConfig;

/// Shown when local storage holds no usable token; login happens on the
/// identity server, which writes the session back to local storage
#[component]
pub fn SessionRequiredPage() -> impl IntoView {
    let config = use_context::<RwSignal<AppConfig>>().expect("AppConfig not found in component tree");

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Sell-out"</h1>
                <h2>"Sesión requerida"</h2>
                <p>"Tu sesión no está activa o ha expirado. Inicia sesión para continuar."</p>
                <a class="btn btn-primary" href=move || config.get().identity.login_url>
                    "Iniciar sesión"
                </a>
            </div>
        </div>
    }
}
