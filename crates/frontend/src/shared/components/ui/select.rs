use leptos::prelude::*;

/// Closed-vocabulary select: only the listed values can be chosen.
///
/// A value outside `options` (legacy data) is still shown as selected so it
/// isn't silently replaced, but it can't be picked again once changed.
#[component]
pub fn EnumSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the leading empty option; none when absent
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    let unknown_value = move || {
        let current = value.get();
        let known = options.with(|opts| opts.iter().any(|(v, _)| *v == current));
        (!current.is_empty() && !known).then_some(current)
    };

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
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || placeholder.get().map(|text| view! {
                    <option value="" selected=move || value.get().is_empty()>{text}</option>
                })}
                {move || unknown_value().map(|v| view! {
                    <option value=v.clone() selected=true disabled=true>{v.clone()}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Options where the stored value is also the label.
pub fn options_from(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_use_value_as_label() {
        assert_eq!(
            options_from(&["Open", "New"]),
            vec![
                ("Open".to_string(), "Open".to_string()),
                ("New".to_string(), "New".to_string())
            ]
        );
    }
}
