mod company_grid;
mod module_grid;

pub use company_grid::CompanyGrid;
pub use module_grid::ModuleGrid;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::render_module;
use leptos::prelude::*;

/// Company grid, then the company's modules, then the selected screen
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
            {move || match (ctx.company.get(), ctx.module.get()) {
                (None, _) => view! { <CompanyGrid /> }.into_any(),
                (Some(company), None) => view! { <ModuleGrid company=company /> }.into_any(),
                (Some(_), Some(module)) => view! {
                    <div class="module-view">
                        <button class="btn btn-link module-view__back" on:click=move |_| ctx.back_to_modules()>
                            "← Volver a módulos"
                        </button>
                        {render_module(module)}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
