use crate::filter::{Filter, FilterId, FilterOperator, FilterOptions, FilterType, operators_for};
use itertools::Itertools as _;
use log::debug;
use std::rc::Rc;
use strum::IntoEnumIterator as _;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub options: Rc<FilterOptions>,
    pub filters: Vec<Filter>,
    pub on_add: Callback<(FilterType, String)>,
    pub on_operator: Callback<(FilterId, FilterOperator)>,
    pub on_remove: Callback<FilterId>,
    pub on_clear: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct FilterChipProps {
    filter: Filter,
    options: Rc<FilterOptions>,
    on_operator: Callback<(FilterId, FilterOperator)>,
    on_remove: Callback<FilterId>,
}

#[function_component(FilterChip)]
fn filter_chip(
    FilterChipProps {
        filter,
        options,
        on_operator,
        on_remove,
    }: &FilterChipProps,
) -> Html {
    let id = filter.id;
    let onchange = {
        let on_operator = on_operator.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<FilterOperator>() {
                Ok(operator) => on_operator.emit((id, operator)),
                Err(err) => debug!("Ignoring operator change: {err}"),
            }
        })
    };
    let onclick = {
        let on_remove = on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id))
    };
    let operators = operators_for(filter.filter_type, filter.value.len()).map(|operator| {
        html! {
            <option value={operator.to_string()} selected={operator == filter.operator}>
                { operator.to_string() }
            </option>
        }
    });
    let values = filter
        .value
        .iter()
        .map(|value| options.label(filter.filter_type, value))
        .join(", ");

    html! {
        <div class="filter-chip" id={id.to_string()}>
            <span class="filter-type">{ filter.filter_type.to_string() }</span>
            <select class="filter-operator" {onchange}>{ for operators }</select>
            <span class="filter-values">{ values }</span>
            <button class="filter-remove" {onclick} aria-label="Remove filter">{"×"}</button>
        </div>
    }
}

/// Lets the visitor compose filters from the option lists and shows the
/// active ones as editable chips.
#[function_component(FilterBar)]
pub fn filter_bar(
    FilterBarProps {
        options,
        filters,
        on_add,
        on_operator,
        on_remove,
        on_clear,
    }: &FilterBarProps,
) -> Html {
    let filter_type = use_state(|| FilterType::Tags);
    let value_ref = use_node_ref();

    let on_type_change = {
        let filter_type = filter_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(ty) = select.value().parse() {
                filter_type.set(ty);
            }
        })
    };

    let on_add_click = {
        let filter_type = filter_type.clone();
        let value_ref = value_ref.clone();
        let on_add = on_add.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(select) = value_ref.cast::<HtmlSelectElement>() else {
                return;
            };
            let value = select.value();
            if !value.is_empty() {
                on_add.emit((*filter_type, value));
            }
        })
    };

    let on_clear_click = {
        let on_clear = on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    let type_options = FilterType::iter().map(|ty| {
        html! {
            <option value={ty.to_string()} selected={ty == *filter_type}>{ ty.to_string() }</option>
        }
    });
    let value_options = options.for_type(*filter_type).iter().map(|option| {
        html! {
            <option value={option.value.clone()} style={format!("color: {}", option.swatch)}>
                { &option.label }
            </option>
        }
    });

    html! {
        <div class="filter-bar">
            <div class="filter-add">
                <select class="filter-type-select" onchange={on_type_change}>{ for type_options }</select>
                <select class="filter-value-select" ref={value_ref}>{ for value_options }</select>
                <button onclick={on_add_click}>{"Add filter"}</button>
            </div>
            if !filters.is_empty() {
                <div class="filter-chips">
                    { for filters.iter().map(|filter| html! {
                        <FilterChip
                            key={filter.id.to_string()}
                            filter={filter.clone()}
                            options={options.clone()}
                            on_operator={on_operator.clone()}
                            on_remove={on_remove.clone()}
                        />
                    }) }
                    <button class="filter-clear" onclick={on_clear_click}>{"Clear filters"}</button>
                </div>
            }
        </div>
    }
}
