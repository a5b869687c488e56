//! Detail Row Component
//!
//! The routed record's table row. Switches between plain text and inputs
//! according to the row's [`RowMode`].

use leptos::prelude::*;

use crud_store::{EditDraft, Record, RowMode};

/// Which record column a cell shows
#[derive(Clone, Copy, Debug, PartialEq)]
enum Column {
    Name,
    Field,
}

impl Column {
    fn stored(self, record: &Record) -> String {
        match self {
            Column::Name => record.name.clone(),
            Column::Field => record.field.clone(),
        }
    }

    fn draft(self, draft: &EditDraft) -> String {
        match self {
            Column::Name => draft.name.clone(),
            Column::Field => draft.field.clone(),
        }
    }

    fn set_draft(self, draft: &mut EditDraft, value: String) {
        match self {
            Column::Name => draft.name = value,
            Column::Field => draft.field = value,
        }
    }

    fn error(self, draft: &EditDraft) -> Option<&'static str> {
        match self {
            Column::Name => draft.errors.name,
            Column::Field => draft.errors.field,
        }
    }
}

#[component]
pub fn DetailRow(
    record: ReadSignal<Option<Record>>,
    mode: RwSignal<RowMode>,
    on_edit: Callback<()>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    // Only flips on mode transitions, so typing does not rebuild the inputs
    let editing = Memo::new(move |_| mode.with(RowMode::is_editing));

    let actions = move || {
        if editing.get() {
            view! {
                <button class="btn btn-save" on:click=move |_| on_save.run(())>"Save"</button>
                <button class="btn btn-cancel" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            }
            .into_any()
        } else {
            view! {
                <button class="btn btn-edit" on:click=move |_| on_edit.run(())>"Edit"</button>
                <button class="btn btn-delete" on:click=move |_| on_delete.run(())>"Delete"</button>
            }
            .into_any()
        }
    };

    view! {
        <tr class="row-odd">
            <EditableCell column=Column::Name record=record mode=mode editing=editing />
            <EditableCell column=Column::Field record=record mode=mode editing=editing />
            <td class="actions">{actions}</td>
        </tr>
    }
}

#[component]
fn EditableCell(
    column: Column,
    record: ReadSignal<Option<Record>>,
    mode: RwSignal<RowMode>,
    editing: Memo<bool>,
) -> impl IntoView {
    let draft_value = move || mode.with(|m| m.draft().map(|d| column.draft(d)).unwrap_or_default());
    let draft_error = move || mode.with(|m| m.draft().and_then(|d| column.error(d)));

    let content = move || {
        if editing.get() {
            view! {
                <input
                    type="text"
                    class=move || if draft_error().is_some() { "text-input invalid" } else { "text-input" }
                    prop:value=draft_value
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        mode.update(|m| {
                            if let Some(draft) = m.draft_mut() {
                                column.set_draft(draft, value);
                            }
                        });
                    }
                />
                {move || draft_error().map(|msg| view! { <p class="field-error">{msg}</p> })}
            }
            .into_any()
        } else {
            view! {
                <span>{move || record.with(|r| r.as_ref().map(|r| column.stored(r)).unwrap_or_default())}</span>
            }
            .into_any()
        }
    };

    view! { <td>{content}</td> }
}
