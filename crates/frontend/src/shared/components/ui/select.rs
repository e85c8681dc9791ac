use leptos::prelude::*;

/// Labelled `<select>` over plain string options.
///
/// The empty value means "no choice"; `placeholder` labels that entry
/// (e.g. "Todos"), and without it the entry is not rendered.
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Selected value, empty for none
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// `(value, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional)]
    placeholder: Option<&'static str>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! {
                    <option value="" selected=move || value.get().is_empty()>{text}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Options whose value and label are the same text
pub fn plain_options(values: &[String]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.clone(), v.clone())).collect()
}

/// Empty select value back to `None`
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_means_none() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("Góndola".into()), Some("Góndola".to_string()));
    }

    #[test]
    fn plain_options_repeat_the_value_as_label() {
        let opts = plain_options(&["A".to_string()]);
        assert_eq!(opts, vec![("A".to_string(), "A".to_string())]);
    }
}
