use contracts::usecases::u501_spreadsheet_import::mapping::ColumnMapping;
use leptos::prelude::*;

/// Row/column positions of a Deprati workbook; blank fields are not sent
#[component]
pub fn MappingForm(mapping: RwSignal<ColumnMapping>) -> impl IntoView {
    view! {
        <div class="details-form mapping-form">
            <p class="mapping-form__hint">
                "Indique filas y columnas (números). Los campos vacíos no se envían."
            </p>
            <div class="mapping-form__grid">
                {ColumnMapping::FIELDS
                    .iter()
                    .map(|(key, label)| {
                        let key: &'static str = key;
                        view! {
                            <div class="form-group">
                                <label for=key>{*label}</label>
                                <input
                                    type="number"
                                    min="0"
                                    id=key
                                    prop:value=move || mapping.with(|m| m.get(key).to_string())
                                    on:input=move |ev| {
                                        mapping.update(|m| m.set(key, event_target_value(&ev)));
                                    }
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
