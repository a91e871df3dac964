//! The searchable, sortable, paginated table behind every entity screen.
//!
//! Filtering, sorting and paging are done by [`list_view::ListState`] over
//! the rows the page hands in; this component only keeps that state and the
//! row selection, and renders them.

use list_view::{
    Column, ListState, PAGE_SIZES, PageSelection, Selection, SortDirection,
};
use payloads::Record;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::PaginationControls;

/// A column plus an optional custom cell renderer. Without one the cell
/// shows the column's value as text.
#[derive(PartialEq)]
pub struct TableColumn<R> {
    pub column: Column<R>,
    pub render: Option<Callback<R, Html>>,
}

impl<R> TableColumn<R> {
    pub fn new(column: Column<R>) -> Self {
        Self {
            column,
            render: None,
        }
    }

    pub fn render_with(
        mut self,
        render: impl Fn(R) -> Html + 'static,
    ) -> Self {
        self.render = Some(Callback::from(render));
        self
    }
}

/// An extra per-row button next to Edit and Delete.
#[derive(PartialEq)]
pub struct RowAction<R> {
    pub label: AttrValue,
    pub on_click: Callback<R>,
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: Record + Clone + PartialEq + 'static> {
    pub title: AttrValue,
    pub rows: Vec<R>,
    pub columns: Vec<TableColumn<R>>,
    #[prop_or_default]
    pub is_loading: bool,
    /// Show row checkboxes. Bulk delete also needs `on_bulk_delete`.
    #[prop_or(true)]
    pub selectable: bool,
    #[prop_or_default]
    pub on_create: Option<Callback<()>>,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
    #[prop_or_default]
    pub on_edit: Option<Callback<R>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<R>>,
    #[prop_or_default]
    pub on_bulk_delete: Option<Callback<Vec<R::Id>>>,
    #[prop_or_default]
    pub actions: Vec<RowAction<R>>,
    #[prop_or_else(|| AttrValue::from("No data available"))]
    pub empty_message: AttrValue,
    #[prop_or_else(|| AttrValue::from("Search..."))]
    pub search_placeholder: AttrValue,
}

const BUTTON_CLASS: &str = "px-3 py-2 text-sm font-medium rounded-md \
     border border-neutral-300 dark:border-neutral-600 text-neutral-700 \
     dark:text-neutral-300 bg-white dark:bg-neutral-700 hover:bg-neutral-50 \
     dark:hover:bg-neutral-600 disabled:opacity-50 transition-colors";

const PRIMARY_BUTTON_CLASS: &str = "px-3 py-2 text-sm font-medium rounded-md \
     text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 \
     dark:text-neutral-900 dark:hover:bg-neutral-200 transition-colors";

const DANGER_BUTTON_CLASS: &str = "px-3 py-2 text-sm font-medium rounded-md \
     text-white bg-red-600 hover:bg-red-700 dark:bg-red-700 \
     dark:hover:bg-red-600 transition-colors";

const LINK_CLASS: &str = "text-sm font-medium text-neutral-700 \
     dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white \
     hover:underline";

#[function_component]
pub fn DataTable<R>(props: &DataTableProps<R>) -> Html
where
    R: Record + Clone + PartialEq + 'static,
{
    let list_state = use_state(ListState::default);
    let selection = use_state(Selection::<R::Id>::new);
    let header_checkbox = use_node_ref();

    // Keep the selection to rows that still exist after refetches and
    // deletes.
    {
        let selection = selection.clone();
        let ids: Vec<R::Id> = props.rows.iter().map(Record::id).collect();
        use_effect_with(ids, move |ids| {
            let mut pruned = (*selection).clone();
            pruned.retain(ids.iter().copied());
            if pruned != *selection {
                selection.set(pruned);
            }
        });
    }

    let columns: Vec<Column<R>> =
        props.columns.iter().map(|c| c.column.clone()).collect();
    let page = list_state.apply(&props.rows, &columns);
    let page_ids: Vec<R::Id> = page.rows.iter().map(|r| r.id()).collect();
    let page_status = selection.page_status(&page_ids);

    {
        let header_checkbox = header_checkbox.clone();
        use_effect_with(page_status, move |status| {
            if let Some(input) = header_checkbox.cast::<HtmlInputElement>() {
                input.set_indeterminate(*status == PageSelection::Some);
            }
        });
    }

    let on_search = {
        let list_state = list_state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*list_state).clone();
            next.set_query(input.value());
            list_state.set(next);
        })
    };

    let on_page_size = {
        let list_state = list_state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse() {
                let mut next = (*list_state).clone();
                next.set_page_size(size);
                list_state.set(next);
            }
        })
    };

    let on_page_change = {
        let list_state = list_state.clone();
        Callback::from(move |page: usize| {
            let mut next = (*list_state).clone();
            next.set_page(page);
            list_state.set(next);
        })
    };

    let on_sort = {
        let list_state = list_state.clone();
        Callback::from(move |key: &'static str| {
            let mut next = (*list_state).clone();
            next.sort_by(key);
            list_state.set(next);
        })
    };

    let on_toggle_page = {
        let selection = selection.clone();
        let page_ids = page_ids.clone();
        Callback::from(move |_: Event| {
            let mut next = (*selection).clone();
            next.toggle_page(&page_ids);
            selection.set(next);
        })
    };

    let on_toggle_row = {
        let selection = selection.clone();
        Callback::from(move |id: R::Id| {
            let mut next = (*selection).clone();
            next.toggle(id);
            selection.set(next);
        })
    };

    let bulk_delete_button = match &props.on_bulk_delete {
        Some(on_bulk_delete) if props.selectable && !selection.is_empty() => {
            let on_click = {
                let on_bulk_delete = on_bulk_delete.clone();
                let ids = selection.ids();
                Callback::from(move |_: MouseEvent| {
                    on_bulk_delete.emit(ids.clone())
                })
            };
            html! {
                <button onclick={on_click} class={DANGER_BUTTON_CLASS}>
                    {format!("Delete Selected ({})", selection.len())}
                </button>
            }
        }
        _ => html! {},
    };

    let has_row_actions = props.on_edit.is_some()
        || props.on_delete.is_some()
        || !props.actions.is_empty();
    let column_count = props.columns.len()
        + usize::from(props.selectable)
        + usize::from(has_row_actions);

    let header_cells = props.columns.iter().map(|c| {
        let column = &c.column;
        let arrow = match list_state.sort {
            Some(sort) if sort.key == column.key => match sort.direction {
                SortDirection::Ascending => " ↑",
                SortDirection::Descending => " ↓",
            },
            _ => "",
        };
        if column.sortable {
            let key = column.key;
            let onclick = on_sort.reform(move |_: MouseEvent| key);
            html! {
                <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-neutral-600 dark:text-neutral-400">
                    <button {onclick} class="uppercase hover:text-neutral-900 dark:hover:text-white">
                        {column.label}{arrow}
                    </button>
                </th>
            }
        } else {
            html! {
                <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-neutral-600 dark:text-neutral-400">
                    {column.label}
                </th>
            }
        }
    });

    let body_rows = page.rows.iter().map(|row| {
        let id = row.id();
        let row_actions = props.actions.iter().map(|action| {
            let onclick = {
                let on_click = action.on_click.clone();
                let row = (*row).clone();
                Callback::from(move |_: MouseEvent| on_click.emit(row.clone()))
            };
            html! {
                <button {onclick} class={LINK_CLASS}>{&action.label}</button>
            }
        });
        let edit = props.on_edit.as_ref().map(|on_edit| {
            let on_edit = on_edit.clone();
            let row = (*row).clone();
            let onclick =
                Callback::from(move |_: MouseEvent| on_edit.emit(row.clone()));
            html! { <button {onclick} class={LINK_CLASS}>{"Edit"}</button> }
        });
        let delete = props.on_delete.as_ref().map(|on_delete| {
            let on_delete = on_delete.clone();
            let row = (*row).clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                on_delete.emit(row.clone())
            });
            html! {
                <button
                    {onclick}
                    class="text-sm font-medium text-red-600 dark:text-red-400 hover:underline"
                >
                    {"Delete"}
                </button>
            }
        });

        html! {
            <tr
                key={format!("{id:?}")}
                class="border-t border-neutral-200 dark:border-neutral-700 hover:bg-neutral-50 dark:hover:bg-neutral-700/50"
            >
                if props.selectable {
                    <td class="px-4 py-3 w-8">
                        <input
                            type="checkbox"
                            checked={selection.is_selected(&id)}
                            onchange={on_toggle_row.reform(move |_: Event| id)}
                            class="h-4 w-4 rounded border-neutral-300 dark:border-neutral-600"
                        />
                    </td>
                }
                {for props.columns.iter().map(|c| html! {
                    <td class="px-4 py-3 text-sm text-neutral-900 dark:text-neutral-100">
                        {match &c.render {
                            Some(render) => render.emit((*row).clone()),
                            None => html! { {c.column.cell(row).to_string()} },
                        }}
                    </td>
                })}
                if has_row_actions {
                    <td class="px-4 py-3 text-right whitespace-nowrap">
                        <div class="flex justify-end gap-3">
                            {for row_actions}
                            {edit}
                            {delete}
                        </div>
                    </td>
                }
            </tr>
        }
    });

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow border border-neutral-200 dark:border-neutral-700">
            <div class="p-4 flex flex-wrap items-center justify-between gap-3 border-b border-neutral-200 dark:border-neutral-700">
                <div>
                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {&props.title}
                    </h2>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {format!("{} items", page.filtered_count)}
                    </p>
                </div>
                <div class="flex flex-wrap items-center gap-2">
                    {bulk_delete_button}
                    if let Some(on_refresh) = &props.on_refresh {
                        <button
                            onclick={on_refresh.reform(|_: MouseEvent| ())}
                            disabled={props.is_loading}
                            class={BUTTON_CLASS}
                            title="Refresh"
                        >
                            {"⟳ Refresh"}
                        </button>
                    }
                    if let Some(on_create) = &props.on_create {
                        <button
                            onclick={on_create.reform(|_: MouseEvent| ())}
                            class={PRIMARY_BUTTON_CLASS}
                        >
                            {"Create New"}
                        </button>
                    }
                </div>
            </div>

            <div class="p-4 flex flex-wrap items-center justify-between gap-3">
                <input
                    type="search"
                    value={list_state.query.clone()}
                    oninput={on_search}
                    placeholder={props.search_placeholder.clone()}
                    class="w-full sm:w-72 px-3 py-2 text-sm border border-neutral-300 dark:border-neutral-600
                           rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100
                           focus:outline-none focus:ring-2 focus:ring-neutral-500"
                />
                <label class="flex items-center gap-2 text-sm text-neutral-600 dark:text-neutral-400">
                    {"Rows per page"}
                    <select
                        onchange={on_page_size}
                        class="px-2 py-1 border border-neutral-300 dark:border-neutral-600 rounded-md
                               bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                    >
                        {for PAGE_SIZES.into_iter().map(|size| html! {
                            <option
                                value={size.to_string()}
                                selected={size == list_state.page_size}
                            >
                                {size}
                            </option>
                        })}
                    </select>
                </label>
            </div>

            <div class="relative overflow-x-auto">
                <table class="min-w-full">
                    <thead class="bg-neutral-50 dark:bg-neutral-900/40">
                        <tr>
                            if props.selectable {
                                <th class="px-4 py-3 w-8">
                                    <input
                                        ref={header_checkbox}
                                        type="checkbox"
                                        checked={page_status == PageSelection::All}
                                        disabled={page_ids.is_empty()}
                                        onchange={on_toggle_page}
                                        class="h-4 w-4 rounded border-neutral-300 dark:border-neutral-600"
                                    />
                                </th>
                            }
                            {for header_cells}
                            if has_row_actions {
                                <th class="px-4 py-3 text-right text-xs font-semibold uppercase tracking-wider text-neutral-600 dark:text-neutral-400">
                                    {"Actions"}
                                </th>
                            }
                        </tr>
                    </thead>
                    <tbody>
                        if page.rows.is_empty() {
                            <tr>
                                <td
                                    colspan={column_count.to_string()}
                                    class="px-4 py-12 text-center text-sm text-neutral-500 dark:text-neutral-400"
                                >
                                    {&props.empty_message}
                                </td>
                            </tr>
                        } else {
                            {for body_rows}
                        }
                    </tbody>
                </table>

                if props.is_loading {
                    <div class="absolute inset-0 flex items-center justify-center bg-white/60 dark:bg-neutral-900/60">
                        <span class="text-sm font-medium text-neutral-700 dark:text-neutral-300">
                            {"Loading..."}
                        </span>
                    </div>
                }
            </div>

            <div class="px-4 pb-4">
                <PaginationControls
                    page={page.page}
                    total_pages={page.total_pages}
                    on_page_change={on_page_change}
                    is_loading={props.is_loading}
                />
            </div>
        </div>
    }
}
