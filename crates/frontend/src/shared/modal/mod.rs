use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;

/// Dialog over a dimmed overlay. Escape, the overlay and the close button
/// all call `on_close`.
#[component]
pub fn Modal(
    title: String,
    on_close: Callback<()>,
    /// Footer buttons (Guardar, Cancelar, ...)
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    /// Extra class on the dialog box, e.g. `modal--wide`
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=format!("modal {}", class) on:click=stop_propagation role="dialog">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {action_buttons.map(|buttons| view! { <div class="modal-footer">{buttons()}</div> })}
            </div>
        </div>
    }
}

/// Yes/no question before a destructive action
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[prop(default = "Eliminar")] confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let buttons: ChildrenFn = Arc::new(move || {
        view! {
            <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>"Cancelar"</button>
            <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                {icon("delete")}
                {confirm_label}
            </button>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=on_cancel class="modal--confirm" action_buttons=buttons>
            <p class="confirm-message">{message}</p>
        </Modal>
    }
}
