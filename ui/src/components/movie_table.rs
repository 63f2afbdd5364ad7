use payloads::{MovieId, responses};
use yew::prelude::*;

use crate::sorting::{
    SortKey, SortOrder, SortState, review_average, sorted_rows,
};

/// Table columns in display order. Every column is sortable.
const COLUMNS: [SortKey; 5] = [
    SortKey::Title,
    SortKey::Reviews,
    SortKey::FilmCompany,
    SortKey::Cost,
    SortKey::ReleaseYear,
];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<responses::Movie>,
    pub companies: Vec<responses::MovieCompany>,
    /// Id of the selected row, if any.
    pub selected: Option<MovieId>,
    pub sort: SortState,
    pub on_sort: Callback<SortKey>,
    pub on_row_click: Callback<MovieId>,
}

#[function_component]
pub fn MovieTable(props: &Props) -> Html {
    // Sort a derived copy so the fetched rows stay in backend order.
    let rows = sorted_rows(&props.rows, props.sort);

    html! {
        <table class="w-full text-left border-collapse">
            <thead>
                <tr class="border-b border-neutral-300 dark:border-neutral-700">
                    <th class="py-2 px-3"></th>
                    {
                        COLUMNS
                            .iter()
                            .map(|key| header_cell(*key, props))
                            .collect::<Html>()
                    }
                </tr>
            </thead>
            <tbody>
                {
                    rows.iter()
                        .map(|row| movie_row(row, props))
                        .collect::<Html>()
                }
            </tbody>
        </table>
    }
}

fn header_cell(key: SortKey, props: &Props) -> Html {
    let onclick = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |_: MouseEvent| on_sort.emit(key))
    };

    let indicator = if props.sort.order_by == key {
        match props.sort.order {
            SortOrder::Ascending => " ▲",
            SortOrder::Descending => " ▼",
        }
    } else {
        ""
    };

    html! {
        <th class="py-2 px-3 cursor-pointer select-none" {onclick}>
            { key.label() }{ indicator }
        </th>
    }
}

fn movie_row(row: &responses::Movie, props: &Props) -> Html {
    let is_selected = props.selected.as_ref() == Some(&row.id);

    let onclick = {
        let on_row_click = props.on_row_click.clone();
        let id = row.id.clone();
        Callback::from(move |_: MouseEvent| on_row_click.emit(id.clone()))
    };

    let average = if row.reviews.is_empty() {
        "-".to_string()
    } else {
        format!("{:.1}", review_average(&row.reviews))
    };

    // Unmatched company ids render as absent.
    let company = props
        .companies
        .iter()
        .find(|company| company.id == row.film_company_id)
        .map(|company| company.name.clone())
        .unwrap_or_else(|| "-".to_string());

    let row_class = if is_selected {
        "cursor-pointer bg-neutral-100 dark:bg-neutral-800"
    } else {
        "cursor-pointer hover:bg-neutral-50 dark:hover:bg-neutral-800/50"
    };

    html! {
        <tr class={row_class} {onclick}>
            <td class="py-2 px-3">
                <input type="checkbox" checked={is_selected} />
            </td>
            <td class="py-2 px-3">{ &row.title }</td>
            <td class="py-2 px-3">{ average }</td>
            <td class="py-2 px-3">{ company }</td>
            <td class="py-2 px-3">{ format!("{:.0}", row.cost) }</td>
            <td class="py-2 px-3">{ row.release_year }</td>
        </tr>
    }
}
