use crate::layout::catalog::Company;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ModuleGrid(company: Company) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="page">
            <div class="page__header">
                <button class="btn btn-link" on:click=move |_| ctx.back_to_companies()>
                    "← Volver a empresas"
                </button>
                <h1 class="page__title">{company.title()}</h1>
            </div>
            <div class="card-grid">
                {company
                    .modules()
                    .into_iter()
                    .map(|module| {
                        view! {
                            <button
                                class="card card--module"
                                style=format!("--card-accent: {};", company.color())
                                on:click=move |_| ctx.select_module(module)
                            >
                                <span class="card__icon">{icon(module.icon_name())}</span>
                                <span class="card__title">{module.title()}</span>
                                <span class="card__caption">{module.description()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
