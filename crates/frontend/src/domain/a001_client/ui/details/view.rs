use super::view_model::ClientDetailsViewModel;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::toast::use_notifier;
use contracts::domain::common::{FieldErrors, RecordId};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ClientDetails(
    id: Option<RecordId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ClientDetailsViewModel::new(use_notifier());
    vm.load_if_needed(id);

    let vm_clone = vm.clone();
    let errors: Signal<FieldErrors> = vm.errors.into();
    let loading = vm.loading;
    let saving = vm.saving;

    view! {
        <div class="details-container client-details">
            <Show when=move || loading.get()>
                <div class="details-loading">"Cargando..."</div>
            </Show>

            <div class="details-form">
                {
                    let vm_clone = vm_clone.clone();
                    view! {
                        <FormField label="Código cliente" field="codCliente" errors=errors required=true>
                            <input
                                type="text"
                                id="codCliente"
                                prop:value={
                                    let vm = vm_clone.clone();
                                    move || vm.form.get().cod_cliente
                                }
                                on:input={
                                    let vm = vm_clone.clone();
                                    move |ev| vm.update(|f| f.cod_cliente = event_target_value(&ev))
                                }
                                placeholder="MZCL-000000"
                            />
                        </FormField>
                    }
                }

                {
                    let vm_clone = vm_clone.clone();
                    view! {
                        <FormField label="Nombre cliente" field="nombreCliente" errors=errors required=true>
                            <input
                                type="text"
                                id="nombreCliente"
                                prop:value={
                                    let vm = vm_clone.clone();
                                    move || vm.form.get().nombre_cliente
                                }
                                on:input={
                                    let vm = vm_clone.clone();
                                    move |ev| vm.update(|f| f.nombre_cliente = event_target_value(&ev))
                                }
                            />
                        </FormField>

                    }

                }

                {
                    let vm_clone = vm_clone.clone();
                    view! {
                        <FormField label="Ciudad" field="ciudad" errors=errors>
                            <input
                                type="text"
                                id="ciudad"
                                prop:value={
                                    let vm = vm_clone.clone();
                                    move || vm.form.get().ciudad
                                }
                                on:input={
                                    let vm = vm_clone.clone();
                                    move |ev| vm.update(|f| f.ciudad = event_target_value(&ev))
                                }
                            />
                        </FormField>

                    }

                }

                {
                    let vm_clone = vm_clone.clone();
                    view! {
                        <FormField label="Código proveedor" field="codigoProveedor" errors=errors>
                            <input
                                type="text"
                                id="codigoProveedor"
                                prop:value={
                                    let vm = vm_clone.clone();
                                    move || vm.form.get().codigo_proveedor
                                }
                                on:input={
                                    let vm = vm_clone.clone();
                                    move |ev| vm.update(|f| f.codigo_proveedor = event_target_value(&ev))
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
                    disabled=move || saving.get() || loading.get()
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
