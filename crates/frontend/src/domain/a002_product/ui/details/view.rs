use super::view_model::ProductDetailsViewModel;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::toast::use_notifier;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::common::FieldErrors;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ProductDetails(
    initial: Option<Product>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(initial, use_notifier());
    let vm_clone = vm.clone();
    let errors: Signal<FieldErrors> = vm.errors.into();
    let saving = vm.saving;

    view! {
        <div class="details-container product-details">
            <div class="details-form">
                {
                    let vm_clone = vm_clone.clone();
                    view! {
                        <FormField label="Código ítem" field="codItem" errors=errors required=true>
                            <input
                                type="text"
                                id="codItem"
                                prop:value={
                                    let vm = vm_clone.clone();
                                    move || vm.form.get().cod_item
                                }
                                on:input={
                                    let vm = vm_clone.clone();
                                    move |ev| vm.update(|f| f.cod_item = event_target_value(&ev))
                                }
                            />
                        </FormField>
                    }
                }

                {
                    let vm_clone = vm_clone.clone();
                    view! {
                        <FormField label="Código barra SAP" field="codBarraSap" errors=errors required=true>
                            <input
                                type="text"
                                id="codBarraSap"
                                prop:value={
                                    let vm = vm_clone.clone();
                                    move || vm.form.get().cod_barra_sap
                                }
                                on:input={
                                    let vm = vm_clone.clone();
                                    move |ev| vm.update(|f| f.cod_barra_sap = event_target_value(&ev))
                                }
                            />
                        </FormField>

                    }

                }
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled=move || saving.get()
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Guardar" } else { "Crear" }
                    }
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("x")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
