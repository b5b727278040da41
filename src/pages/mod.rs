use crate::components::hooks::use_is_mobile::use_is_mobile;
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle,
};
use crate::editor::{submit_item_form, ItemForm, MenuItemRow};
use crate::models::NavigationFormData;
use crate::state::AppContext;
use crate::tree;
use icons::Plus;
use leptos::prelude::*;

#[component]
pub fn ManagerPage() -> impl IntoView {
    let state = expect_context::<AppContext>();

    // Which form is on screen, if any. Only one can be open at a time:
    // the primary add button hides while another form is showing, and
    // submitting or cancelling clears these again.
    let is_adding_item: RwSignal<bool> = RwSignal::new(false);
    let editing_item_id: RwSignal<Option<String>> = RwSignal::new(None);
    let adding_child_to_id: RwSignal<Option<String>> = RwSignal::new(None);

    let is_mobile = use_is_mobile();

    let items = state.0.items;
    let notice = state.0.notice;

    let state_for_submit = state.clone();
    let on_submit = Callback::new(move |data: NavigationFormData| {
        submit_item_form(
            &state_for_submit.0,
            editing_item_id,
            adding_child_to_id,
            is_adding_item,
            data,
        );
    });
    let on_cancel = Callback::new(move |_: ()| {
        is_adding_item.set(false);
        editing_item_id.set(None);
        adding_child_to_id.set(None);
    });

    let no_form_open = move || {
        !is_adding_item.get()
            && editing_item_id.get().is_none()
            && adding_child_to_id.get().is_none()
    };

    view! {
        <div class="flex flex-col gap-4 p-4">
            <Card class="items-center gap-2 py-4 text-center">
                <CardHeader class="items-center">
                    <CardTitle class="text-2xl">
                        {move || if items.get().is_empty() { "This menu is empty" } else { "Menu" }}
                    </CardTitle>
                </CardHeader>

                <CardContent class="flex flex-col items-center gap-2">
                    {move || {
                        let all = items.get();
                        if all.is_empty() {
                            view! {
                                <CardDescription>
                                    "There are no links in this menu yet."
                                </CardDescription>
                            }
                            .into_any()
                        } else if tree::count_links(&all) == 0 {
                            view! {
                                <CardDescription>
                                    "Add links to your menu so visitors can find their way around."
                                </CardDescription>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="text-muted-foreground">
                                    <p>{format!("Items in menu: {}", tree::count_items(&all))}</p>
                                    <p>{format!("Links in menu: {}", tree::count_links(&all))}</p>
                                </div>
                            }
                            .into_any()
                        }
                    }}

                    <Show when=no_form_open fallback=|| ().into_view()>
                        <Button
                            attr:aria-label="Add menu item"
                            on:click=move |_| is_adding_item.set(true)
                        >
                            <Plus class="h-4 w-4" />
                            "Add menu item"
                        </Button>
                    </Show>
                </CardContent>
            </Card>

            <Show when=move || notice.get().is_some() fallback=|| ().into_view()>
                {move || {
                    notice.get().map(|message| view! {
                        <Alert class="border-destructive/30">
                            <AlertDescription class="text-destructive">{message}</AlertDescription>
                        </Alert>
                    })
                }}
            </Show>

            <Show
                when=move || {
                    is_adding_item.get()
                        && editing_item_id.get().is_none()
                        && adding_child_to_id.get().is_none()
                }
                fallback=|| ().into_view()
            >
                <ItemForm on_submit=on_submit on_cancel=on_cancel />
            </Show>

            {move || {
                let all = items.get();
                if all.is_empty() {
                    return ().into_view().into_any();
                }

                let root_ids_sv = StoredValue::new(
                    all.iter().map(|item| item.id.clone()).collect::<Vec<String>>(),
                );

                view! {
                    <div class="flex w-full flex-col items-start rounded-lg border bg-background">
                        <For
                            each=move || root_ids_sv.get_value()
                            key=|id| id.clone()
                            children=move |id| {
                                view! {
                                    <MenuItemRow
                                        item_id=id
                                        level=0
                                        is_mobile=is_mobile
                                        editing_item_id=editing_item_id
                                        adding_child_to_id=adding_child_to_id
                                        on_submit=on_submit
                                        on_cancel=on_cancel
                                    />
                                }
                            }
                        />

                        <div class="w-full rounded-b-lg border-t bg-muted p-5">
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                class="font-semibold"
                                attr:aria-label="Add menu item"
                                on:click=move |_| is_adding_item.set(true)
                            >
                                "Add menu item"
                            </Button>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
