use crate::layout::catalog::Company;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn CompanyGrid() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Seleccione una empresa"</h1>
            </div>
            <div class="card-grid">
                {Company::all()
                    .into_iter()
                    .map(|company| {
                        view! {
                            <button
                                class="card card--company"
                                style=format!("--card-accent: {};", company.color())
                                on:click=move |_| ctx.select_company(company)
                            >
                                <span class="card__icon">{icon("building")}</span>
                                <span class="card__title">{company.title()}</span>
                                <span class="card__caption">{company.modules_caption()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
