use ui_core_headless::{cell_text, Cell, Column, DataView, DataViewConfig, Row};

use super::recipes::{
    AVATAR, BADGE, CARD, CARD_CONTENT, CARD_DESCRIPTION, CARD_FOOTER, CARD_HEADER, CARD_TITLE,
    DATA_TABLE,
};
use super::*;

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=resolve_classes(&BADGE, &[("variant", variant.token())], layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            {..attrs}
        >
            {children()}
        </span>
    }
}

/// Up to two uppercase initials taken from the first and last words of `name`.
pub fn avatar_initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let picked = match words.as_slice() {
        [] => Vec::new(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    picked
        .into_iter()
        .filter_map(|word| word.chars().find(|ch| ch.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
/// Round avatar that shows an image and falls back to initials when the
/// image is missing or fails to load.
pub fn Avatar(
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] src: MaybeSignal<String>,
    #[prop(optional, into)] name: String,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let failed = create_rw_signal(false);
    let initials = avatar_initials(&name);
    let src = Signal::derive(move || src.get());
    let show_image = move || !failed.get() && !src.with(String::is_empty);

    view! {
        <span
            class=resolve_classes(&AVATAR, &[("size", size.token())], layout_class)
            role="img"
            aria-label=name
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-size=size.token()
            {..attrs}
        >
            <Show
                when=show_image
                fallback=move || {
                    view! {
                        <span data-ui-slot="fallback" aria-hidden="true">
                            {initials.clone()}
                        </span>
                    }
                }
            >
                <img
                    data-ui-slot="image"
                    src=move || src.get()
                    alt=""
                    on:error=move |_| failed.set(true)
                />
            </Show>
        </span>
    }
}

#[component]
/// Shared card surface for summaries and grouped content.
pub fn Card(
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Article>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=resolve_classes(&CARD, &[("elevation", elevation.token())], layout_class)
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-elevation=elevation.token()
            {..attrs}
        >
            {children()}
        </article>
    }
}

#[component]
/// Card header region.
pub fn CardHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=resolve_classes(&CARD_HEADER, &[], layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-header"
            {..attrs}
        >
            {children()}
        </header>
    }
}

#[component]
/// Card title.
pub fn CardTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <h3
            class=resolve_classes(&CARD_TITLE, &[], layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-title"
            {..attrs}
        >
            {children()}
        </h3>
    }
}

#[component]
/// Supporting copy under a card title.
pub fn CardDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=resolve_classes(&CARD_DESCRIPTION, &[], layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-description"
            {..attrs}
        >
            {children()}
        </p>
    }
}

#[component]
/// Card body.
pub fn CardContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=resolve_classes(&CARD_CONTENT, &[], layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-content"
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Card action row.
pub fn CardFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=resolve_classes(&CARD_FOOTER, &[], layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-footer"
            {..attrs}
        >
            {children()}
        </footer>
    }
}

/// First row lacking a column key, with the total count of missing cells.
fn first_missing_key<'a>(keys: &'a [String], rows: &[Row]) -> Option<(usize, &'a str, usize)> {
    let mut missing = rows.iter().enumerate().flat_map(|(index, row)| {
        keys.iter()
            .filter(move |key| !row.contains_key(key))
            .map(move |key| (index, key.as_str()))
    });
    let (index, key) = missing.next()?;
    Some((index, key, missing.count() + 1))
}

fn render_cell(cell: Cell<View>) -> View {
    match cell {
        Cell::Value(value) => cell_text(&value).into_view(),
        Cell::Rendered(rendered) => rendered,
    }
}

#[component]
/// Searchable, optionally paginated table over JSON rows.
///
/// Columns render their raw field unless they carry a value derivation,
/// a conditional renderer, or a custom renderer. Pagination controls only
/// appear when there is more than one page.
pub fn DataTable(
    columns: Vec<Column<View>>,
    #[prop(into)] rows: MaybeSignal<Vec<Row>>,
    #[prop(optional)] config: DataViewConfig,
    #[prop(default = true)] searchable: bool,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(optional, into)] empty_text: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Table>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let column_count = columns.len().max(1);
    let headers: Vec<String> = columns.iter().map(|column| column.name().to_string()).collect();
    let column_keys: Vec<String> = columns
        .iter()
        .filter(|column| column.reads_key())
        .map(|column| column.key().to_string())
        .collect();
    let table = create_rw_signal(DataView::new(columns, rows.get_untracked(), config));
    let empty_text = empty_text.unwrap_or_else(|| "No results.".to_string());

    create_effect(move |previous: Option<()>| {
        let next = rows.get();
        if let Some((index, key, count)) = first_missing_key(&column_keys, &next) {
            logging::warn!("data table row {index} has no `{key}` field ({count} missing cells)");
        }
        if previous.is_some() {
            table.update(|view| view.set_rows(next));
        }
    });

    let search_value =
        Signal::derive(move || table.with(|view| view.search_query().to_string()));
    let search = searchable.then(|| {
        view! {
            <div data-ui-slot="search">
                <TextField
                    input_type="search"
                    placeholder=search_placeholder.unwrap_or_else(|| "Search...".to_string())
                    aria_label="Search table"
                    value=search_value
                    on_input=Callback::new(move |ev| {
                        let query = event_target_value(&ev);
                        table.update(|view| view.set_search_query(query));
                    })
                />
            </div>
        }
    });

    let body = move || {
        table.with(|view| {
            let visible = view.visible_rows();
            if visible.is_empty() {
                return view! {
                    <tr data-ui-slot="empty">
                        <td colspan=column_count>{empty_text.clone()}</td>
                    </tr>
                }
                .into_view();
            }
            visible
                .into_iter()
                .map(|row| {
                    let cells = view
                        .columns()
                        .iter()
                        .map(|column| {
                            let content = render_cell(column.resolve_cell(row));
                            view! { <td data-ui-slot="cell">{content}</td> }
                        })
                        .collect_view();
                    view! { <tr data-ui-slot="row">{cells}</tr> }
                })
                .collect_view()
        })
    };

    let page_buttons = move || {
        table.with(|view| {
            let current_page = view.current_page();
            view.page_numbers()
                .map(|page| {
                    let (variant, aria_current) = if page == current_page {
                        (ButtonVariant::Default, "page")
                    } else {
                        (ButtonVariant::Outline, "false")
                    };
                    view! {
                        <Button
                            variant=variant
                            size=ButtonSize::Sm
                            ui_slot="page"
                            attr:aria-current=aria_current
                            on_click=Callback::new(move |_| {
                                table.update(|view| {
                                    view.go_to_page(page);
                                });
                            })
                        >
                            {page}
                        </Button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div
            class=resolve_classes(&DATA_TABLE, &[], layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            data-ui-paginated=bool_token(config.paginate())
        >
            {search}
            <table node_ref=node_ref aria-label=aria_label data-ui-slot="table" {..attrs}>
                <thead>
                    <tr>
                        {headers
                            .into_iter()
                            .map(|header| view! { <th scope="col">{header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <Show when=move || table.with(DataView::shows_pagination) fallback=|| ()>
                <nav data-ui-slot="pagination" aria-label="Pagination">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        ui_slot="previous"
                        disabled=Signal::derive(move || {
                            table.with(|view| view.current_page() <= 1)
                        })
                        on_click=Callback::new(move |_| {
                            table.update(|view| {
                                view.previous_page();
                            });
                        })
                    >
                        "Previous"
                    </Button>
                    {page_buttons}
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        ui_slot="next"
                        disabled=Signal::derive(move || {
                            table.with(|view| view.current_page() >= view.total_pages())
                        })
                        on_click=Callback::new(move |_| {
                            table.update(|view| {
                                view.next_page();
                            });
                        })
                    >
                        "Next"
                    </Button>
                </nav>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_use_first_and_last_words() {
        assert_eq!(avatar_initials("Ada Lovelace"), "AL");
        assert_eq!(avatar_initials("grace brewster murray hopper"), "GH");
        assert_eq!(avatar_initials("  plato "), "P");
    }

    #[test]
    fn initials_skip_leading_punctuation_and_empty_names() {
        assert_eq!(avatar_initials("(j) doe"), "JD");
        assert_eq!(avatar_initials(""), "");
        assert_eq!(avatar_initials("-- --"), "");
    }

    #[test]
    fn missing_keys_report_first_gap_and_total() {
        let keys = vec!["id".to_string(), "name".to_string()];
        let rows = vec![
            Row::new().with("id", 1).with("name", "Ada"),
            Row::new().with("id", 2),
            Row::new(),
        ];
        assert_eq!(first_missing_key(&keys, &rows), Some((1, "name", 3)));
        assert_eq!(first_missing_key(&keys, &rows[..1]), None);
        assert_eq!(first_missing_key(&[], &rows), None);
    }

    #[test]
    fn page_callbacks_drive_the_shared_table_signal() {
        let runtime = create_runtime();
        let rows: Vec<Row> = (1..=25u64).map(|id| Row::new().with("id", id)).collect();
        let table = create_rw_signal(DataView::<View>::new(
            vec![Column::new("ID", "id")],
            rows,
            DataViewConfig::new(true),
        ));
        let go_to = |page: usize| {
            Callback::new(move |_: ()| {
                table.update(|view| {
                    view.go_to_page(page);
                })
            })
        };

        go_to(3).call(());
        assert_eq!(table.with(|view| view.current_page()), 3);
        assert_eq!(table.with(|view| view.visible_rows().len()), 5);
        go_to(4).call(());
        assert_eq!(table.with(|view| view.current_page()), 3);
        assert!(table.with(DataView::shows_pagination));
        runtime.dispose();
    }
}
