use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::session_required::SessionRequiredPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restores ?empresa=&modulo= once, then keeps the URL in sync
    ctx.init_router_integration();

    view! {
        <Shell center=|| view! { <Center /> }.into_any() />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <SessionRequiredPage /> }
        >
            <MainLayout />
        </Show>
    }
}
