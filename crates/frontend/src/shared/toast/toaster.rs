use super::ToastService;
use leptos::prelude::*;

/// Renders the toast queue in the top-right corner
#[component]
pub fn Toaster(service: ToastService) -> impl IntoView {
    view! {
        <div class="toaster">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let notice = toast.notice;
                    view! {
                        <div class=format!("toast {}", notice.severity.css_class()) role="status">
                            <div class="toast__body">
                                <strong class="toast__summary">{notice.summary.clone()}</strong>
                                {notice.detail.clone().map(|d| view! { <div class="toast__detail">{d}</div> })}
                            </div>
                            <button class="toast__close" on:click=move |_| service.dismiss(id) title="Cerrar">
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
