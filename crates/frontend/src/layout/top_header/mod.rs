//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        do_logout(set_auth_state);
        ctx.reset();
    };

    let breadcrumb = move || {
        let company = ctx.company.get().map(|c| c.title());
        let module = ctx.module.get().map(|m| m.title());
        match (company, module) {
            (Some(c), Some(m)) => format!("{} / {}", c, m),
            (Some(c), None) => c.to_string(),
            _ => String::new(),
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title" on:click=move |_| ctx.back_to_companies()>
                    "Sell-out"
                </span>
                <span class="top-header__breadcrumb">{breadcrumb}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.username.clone())
                            .filter(|name| !name.is_empty())
                            .unwrap_or_else(|| "Usuario".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
