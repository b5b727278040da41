use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input, Label};
use crate::models::{NavigationFormData, NavigationItem};
use crate::state::{AppContext, AppState};
use crate::tree;
use crate::util::{is_valid_absolute_url, mint_item_id};
use icons::{Move, Search, X};
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Field-level messages for a rejected form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ItemFormErrors {
    pub label: Option<&'static str>,
    pub url: Option<&'static str>,
}

/// Check a raw form payload at the boundary.
///
/// The tree operations trust their input, so everything user-typed is
/// vetted here: the label must be non-blank, and the link must be either
/// empty (no link) or an absolute URL.
pub(crate) fn validate_item_form(
    label: &str,
    url: &str,
) -> Result<NavigationFormData, ItemFormErrors> {
    let mut errors = ItemFormErrors::default();

    if label.trim().is_empty() {
        errors.label = Some("Name is required");
    }

    let url = url.trim();
    if !url.is_empty() && !is_valid_absolute_url(url) {
        errors.url = Some("Invalid URL");
    }

    if errors.label.is_some() || errors.url.is_some() {
        return Err(errors);
    }

    Ok(NavigationFormData {
        label: label.trim().to_string(),
        url: (!url.is_empty()).then(|| url.to_string()),
    })
}

/// Route a validated form payload to the right store operation and close
/// whichever form produced it.
///
/// Editing wins over adding a child, which wins over adding at the root,
/// mirroring how the forms are opened: only one can be on screen.
pub(crate) fn submit_item_form(
    state: &AppState,
    editing_item_id: RwSignal<Option<String>>,
    adding_child_to_id: RwSignal<Option<String>>,
    is_adding_item: RwSignal<bool>,
    data: NavigationFormData,
) {
    if let Some(id) = editing_item_id.get_untracked() {
        state.update_item(&id, &data);
        editing_item_id.set(None);
    } else if let Some(parent_id) = adding_child_to_id.get_untracked() {
        state.add_item(NavigationItem::new(mint_item_id(), data), Some(&parent_id));
        adding_child_to_id.set(None);
    } else {
        state.add_item(NavigationItem::new(mint_item_id(), data), None);
        is_adding_item.set(false);
    }
}

#[component]
pub fn ItemForm(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] initial: Option<NavigationFormData>,
    #[prop(into)] on_submit: Callback<NavigationFormData>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let label: RwSignal<String> =
        RwSignal::new(initial.as_ref().map(|d| d.label.clone()).unwrap_or_default());
    let url: RwSignal<String> =
        RwSignal::new(initial.as_ref().and_then(|d| d.url.clone()).unwrap_or_default());
    let label_error: RwSignal<Option<&'static str>> = RwSignal::new(None);
    let url_error: RwSignal<Option<&'static str>> = RwSignal::new(None);

    let merged_class = tw_merge!("relative w-full rounded-lg border bg-card p-5", class);

    let on_submit_ev = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate_item_form(&label.get_untracked(), &url.get_untracked()) {
            Ok(data) => {
                label_error.set(None);
                url_error.set(None);
                on_submit.run(data);
            }
            Err(errors) => {
                label_error.set(errors.label);
                url_error.set(errors.url);
            }
        }
    };

    view! {
        <div class=merged_class>
            <form class="flex w-[95%] flex-col gap-4" on:submit=on_submit_ev>
                <div class="flex flex-col gap-2">
                    <Label html_for="item-label">"Name"</Label>
                    <Input id="item-label" placeholder="e.g. Promotions" bind_value=label />
                    <Show when=move || label_error.get().is_some() fallback=|| ().into_view()>
                        <p class="text-sm text-destructive">
                            {move || label_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                </div>

                <div class="flex flex-col gap-2">
                    <Label html_for="item-url">"Link"</Label>
                    <div class="relative">
                        <Search class="absolute left-2 top-1/2 h-4 w-4 -translate-y-1/2 text-muted-foreground" />
                        <Input id="item-url" class="pl-8" placeholder="Paste or search" bind_value=url />
                    </div>
                    <Show when=move || url_error.get().is_some() fallback=|| ().into_view()>
                        <p class="text-sm text-destructive">
                            {move || url_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                </div>

                <div class="flex gap-2">
                    <Button
                        variant=ButtonVariant::Outline
                        class="font-semibold"
                        attr:r#type="button"
                        attr:aria-label="Cancel"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        class="font-semibold text-primary"
                        attr:aria-label="Save menu item"
                    >
                        "Save"
                    </Button>
                </div>
            </form>

            <button
                type="button"
                class="absolute right-4 top-4 cursor-pointer text-muted-foreground hover:text-foreground md:right-8 md:top-6"
                aria-label="Dismiss form"
                on:click=move |_| on_cancel.run(())
            >
                <X class="h-5 w-5" />
            </button>
        </div>
    }
}

#[component]
pub fn MenuItemRow(
    item_id: String,
    level: usize,
    is_mobile: RwSignal<bool>,
    editing_item_id: RwSignal<Option<String>>,
    adding_child_to_id: RwSignal<Option<String>>,
    on_submit: Callback<NavigationFormData>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<AppContext>();

    let id_sv = StoredValue::new(item_id);
    let state_sv = StoredValue::new(state);

    let wrapper_class = if level == 0 { "w-full" } else { "" };

    view! {
        <div class=wrapper_class>
            {move || {
                let id = id_sv.get_value();
                let all = state_sv.get_value().0.items.get();

                // The row may outlive its item for one render after a
                // removal; just render nothing then.
                let Some(path) = tree::locate(&all, &id) else {
                    return ().into_view().into_any();
                };
                let Some(item) = tree::item_at(&all, &path) else {
                    return ().into_view().into_any();
                };
                let item = item.clone();

                let is_editing = editing_item_id.get().as_deref() == Some(id.as_str());
                let is_adding_child = adding_child_to_id.get().as_deref() == Some(id.as_str());

                let on_dragstart = move |ev: web_sys::DragEvent| {
                    if let Some(dt) = ev.data_transfer() {
                        let _ = dt.set_data("text/plain", &id_sv.get_value());
                        dt.set_drop_effect("move");
                    }
                };
                let on_dragover = move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    if let Some(dt) = ev.data_transfer() {
                        dt.set_drop_effect("move");
                    }
                };
                let on_drop = move |ev: web_sys::DragEvent| {
                    ev.prevent_default();

                    let dragged_id = ev
                        .data_transfer()
                        .and_then(|dt| dt.get_data("text/plain").ok())
                        .unwrap_or_default();
                    if dragged_id.trim().is_empty() {
                        return;
                    }

                    let target_id = id_sv.get_value();
                    state_sv
                        .get_value()
                        .0
                        .reorder_items(&dragged_id, Some(target_id.as_str()));
                };

                let actions = {
                    let id = id.clone();
                    move || {
                        let size = if is_mobile.get() { ButtonSize::Badge } else { ButtonSize::Sm };
                        let locked = editing_item_id.get().as_deref() == Some(id.as_str());
                        let add_disabled = locked || level >= tree::MAX_DEPTH;

                        let id_for_edit = id.clone();
                        let id_for_delete = id.clone();
                        let id_for_add = id.clone();

                        view! {
                            <Button
                                variant=ButtonVariant::Outline
                                size=size
                                class="rounded-none rounded-l-lg border-r-0 font-bold"
                                attr:aria-label="Edit item"
                                on:click=move |_| editing_item_id.set(Some(id_for_edit.clone()))
                            >
                                "Edit"
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                size=size
                                class="rounded-none font-bold"
                                attr:aria-label="Delete item"
                                attr:disabled=locked
                                on:click=move |_| state_sv.get_value().0.remove_item(&id_for_delete)
                            >
                                "Delete"
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                size=size
                                class="rounded-none rounded-r-lg border-l-0 font-bold"
                                attr:aria-label="Add menu item"
                                attr:disabled=add_disabled
                                on:click=move |_| adding_child_to_id.set(Some(id_for_add.clone()))
                            >
                                "Add menu item"
                            </Button>
                        }
                    }
                };

                let url_line = item.url.clone().map(|url| view! {
                    <div class="text-sm text-muted-foreground">{url}</div>
                });

                let edit_form = if is_editing {
                    let initial = NavigationFormData {
                        label: item.label.clone(),
                        url: item.url.clone(),
                    };
                    view! {
                        <div class="ml-2 mt-2 flex justify-center md:ml-8">
                            <ItemForm class="my-4 w-5/6" initial=initial on_submit=on_submit on_cancel=on_cancel />
                        </div>
                    }
                    .into_any()
                } else {
                    ().into_view().into_any()
                };

                let add_child_form = if is_adding_child {
                    view! {
                        <div class="ml-2 mt-2 flex justify-center md:ml-8">
                            <ItemForm class="my-4 w-5/6" on_submit=on_submit on_cancel=on_cancel />
                        </div>
                    }
                    .into_any()
                } else {
                    ().into_view().into_any()
                };

                let children_view = if item.children.is_empty() {
                    ().into_view().into_any()
                } else {
                    let child_ids_sv = StoredValue::new(
                        item.children.iter().map(|c| c.id.clone()).collect::<Vec<String>>(),
                    );

                    view! {
                        <div class="ml-2 md:ml-8">
                            <For
                                each=move || child_ids_sv.get_value()
                                key=|id| id.clone()
                                children=move |id| {
                                    view! {
                                        <MenuItemRow
                                            item_id=id
                                            level=level + 1
                                            is_mobile=is_mobile
                                            editing_item_id=editing_item_id
                                            adding_child_to_id=adding_child_to_id
                                            on_submit=on_submit
                                            on_cancel=on_cancel
                                        />
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                };

                let row_class = if is_editing {
                    "flex items-center border-b bg-card p-2 ring-1 ring-primary/30 md:p-5"
                } else {
                    "flex items-center border-b bg-card p-2 md:p-5"
                };

                view! {
                    <div>
                        <div
                            class=row_class
                            draggable="true"
                            on:dragstart=on_dragstart
                            on:dragover=on_dragover
                            on:drop=on_drop
                        >
                            <button class="mr-3 cursor-grab" type="button" aria-label="Move item">
                                <Move class="h-4 w-4 text-muted-foreground md:h-5 md:w-5" />
                            </button>

                            <div class="min-w-0 flex-1">
                                <div class="max-w-12 truncate font-medium md:max-w-full">
                                    {item.label.clone()}
                                </div>
                                {url_line}
                            </div>

                            <div class="flex">{actions}</div>
                        </div>

                        {edit_form}
                        {add_child_form}
                        {children_view}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_requires_a_label() {
        let err = validate_item_form("", "https://example.com").unwrap_err();
        assert_eq!(err.label, Some("Name is required"));
        assert_eq!(err.url, None);

        let err = validate_item_form("   ", "").unwrap_err();
        assert_eq!(err.label, Some("Name is required"));
    }

    #[test]
    fn an_empty_link_field_means_no_url() {
        let data = validate_item_form("Promotions", "").unwrap();
        assert_eq!(data.label, "Promotions");
        assert_eq!(data.url, None);

        let data = validate_item_form("Promotions", "   ").unwrap();
        assert_eq!(data.url, None);
    }

    #[test]
    fn a_malformed_link_is_reported() {
        let err = validate_item_form("Promotions", "not-a-url").unwrap_err();
        assert_eq!(err.label, None);
        assert_eq!(err.url, Some("Invalid URL"));
    }

    #[test]
    fn both_fields_can_fail_at_once() {
        let err = validate_item_form("", "nope").unwrap_err();
        assert_eq!(err.label, Some("Name is required"));
        assert_eq!(err.url, Some("Invalid URL"));
    }

    #[test]
    fn a_valid_payload_passes_through_trimmed() {
        let data = validate_item_form("  Promotions ", " https://example.com/sale ").unwrap();
        assert_eq!(data.label, "Promotions");
        assert_eq!(data.url.as_deref(), Some("https://example.com/sale"));
    }
}
