//! Record Table Component
//!
//! Striped table of all records with a "View" action per row.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::detail_path;
use crate::store::{use_list_store, ListStateStoreFields};

#[component]
pub fn RecordTable() -> impl IntoView {
    let store = use_list_store();
    let navigate = StoredValue::new(use_navigate());

    let has_records = move || store.records().with(|records| !records.is_empty());

    view! {
        <Show when=has_records>
            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Field"</th>
                        <th class="center">"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.records().get().into_iter().enumerate()
                        key=|(_, record)| record.id.clone()
                        children=move |(index, record)| {
                            let path = detail_path(&record.id);
                            let row_class = if index % 2 == 0 { "row-even" } else { "row-odd" };
                            view! {
                                <tr class=row_class>
                                    <td>{record.name}</td>
                                    <td>{record.field}</td>
                                    <td class="center">
                                        <button
                                            class="btn btn-primary"
                                            on:click=move |_| {
                                                log::debug!("[LIST] opening {}", path);
                                                navigate.with_value(|nav| nav(&path, Default::default()));
                                            }
                                        >
                                            "View"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
        <p class="record-count">{move || format!("{} records", store.records().with(|records| records.len()))}</p>
    }
}
