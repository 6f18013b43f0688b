use crate::shared::class_names::class_names;
use crate::shared::i18n::{use_locale, Locale};
use crate::shared::icons::icon;
use contracts::navigation::{resolve_rows, TabDescriptor, TabRow};
use leptos::prelude::*;

const DEFAULT_TEXT_CLASSES: &str = "text-sm font-medium leading-none text-gray-600";
const ROW_CLASSES: &str = "group flex w-64 flex-row items-center rounded-md px-3 py-[10px] \
     hover:bg-gray-100 group-hover:text-gray-700 \
     [&[aria-current='page']]:bg-gray-200 [&[aria-current='page']]:text-gray-900";
const DISABLED_CLASSES: &str = "pointer-events-none !opacity-30";
const INDENTED_CLASSES: &str = "ml-7 mr-5 w-auto";

/// Class list of the row anchor
pub fn row_class(row: &TabRow) -> String {
    let text_classes = row
        .text_class_names
        .as_deref()
        .filter(|classes| !classes.is_empty())
        .unwrap_or(DEFAULT_TEXT_CLASSES);

    class_names([
        Some(text_classes),
        Some(ROW_CLASSES),
        row.disabled.then_some(DISABLED_CLASSES),
        row.indented.then_some(INDENTED_CLASSES),
        Some(if row.tall { "h-14" } else { "h-9" }),
        row.class_name.as_deref(),
    ])
}

fn tab_row_view(row: TabRow, locale: &Locale) -> impl IntoView {
    let class = row_class(&row);
    let label = locale.t(&row.name);
    let info = row.info.as_deref().map(|key| locale.t(key));
    let test_id = row.test_id();
    let depth = row.depth.to_string();

    view! {
        <a
            href=row.href
            target=row.target.as_str()
            class=class
            data-testid=test_id
            data-depth=depth
            aria-current=row.active.then_some("page")
            aria-disabled=row.disabled.then_some("true")
            tabindex=row.disabled.then_some("-1")
            rel=row.link_props.rel
            title=row.link_props.title
            download=row.link_props.download.then_some("")
        >
            {row.icon.map(|name| view! {
                <span class="mr-[10px] h-[16px] w-[16px] self-start stroke-[2px] md:mt-0">
                    {icon(&name)}
                </span>
            })}
            <div>
                <span class="flex items-center space-x-2">
                    <p>{label}</p>
                    {row.show_external_glyph.then(|| icon("external-link"))}
                </span>
                {info.map(|text| view! {
                    <p class="mt-1 text-xs font-normal">{text}</p>
                })}
            </div>
            {row.show_chevron.then(|| view! {
                <div class="ml-auto self-center h-auto w-[20px] text-gray-700">
                    {icon("chevron-right")}
                </div>
            })}
        </a>
    }
}

/// One navigation tab with its nested children.
///
/// The row and its children are emitted as sibling anchors; children get the
/// indented layout. A hidden tab renders nothing, children included.
#[component]
pub fn VerticalTabItem(
    /// Tab descriptor, read-only
    tab: TabDescriptor,
    /// Current route; a row is active when this starts with its `href`
    #[prop(into)]
    current_path: Signal<String>,
) -> impl IntoView {
    let locale = use_locale();
    let tab = StoredValue::new(tab);

    move || {
        let path = current_path.get();
        let rows = tab.with_value(|tab| resolve_rows(tab, &path));
        if rows.is_empty() {
            tab.with_value(|tab| log::debug!("vertical tab '{}' is hidden", tab.name));
        }
        rows.into_iter()
            .map(|row| tab_row_view(row, &locale))
            .collect_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::navigation::resolve_row;

    fn row(tab: &TabDescriptor, path: &str) -> TabRow {
        resolve_row(tab, path, false, 0).unwrap()
    }

    #[test]
    fn test_row_class_defaults() {
        let profile = TabDescriptor::new("profile", "/profile").with_icon("user");
        let class = row_class(&row(&profile, "/"));
        assert!(class.starts_with(DEFAULT_TEXT_CLASSES));
        assert!(class.ends_with("h-9"));
        assert!(!class.contains(DISABLED_CLASSES));
        assert!(!class.contains(INDENTED_CLASSES));
    }

    #[test]
    fn test_row_class_variants() {
        let tab = TabDescriptor::new("billing", "/billing")
            .with_info("billing_description")
            .disabled()
            .with_class_name("mt-4");
        let class = row_class(&row(&tab, "/"));
        assert!(class.contains(DISABLED_CLASSES));
        // no icon
        assert!(class.contains(INDENTED_CLASSES));
        assert!(class.contains("h-14"));
        assert!(class.ends_with("mt-4"));
    }

    #[test]
    fn test_row_class_text_override() {
        let tab = TabDescriptor::new("a", "/a").with_text_class_names("text-lg text-red-500");
        let class = row_class(&row(&tab, "/"));
        assert!(class.starts_with("text-lg text-red-500"));
        assert!(!class.contains(DEFAULT_TEXT_CLASSES));

        let empty = TabDescriptor::new("a", "/a").with_text_class_names("");
        assert!(row_class(&row(&empty, "/")).starts_with(DEFAULT_TEXT_CLASSES));

        // only an empty override falls back to the defaults
        let blank = TabDescriptor::new("a", "/a").with_text_class_names("  ");
        assert!(!row_class(&row(&blank, "/")).contains(DEFAULT_TEXT_CLASSES));
    }

    #[test]
    fn test_child_row_is_indented_even_with_icon() {
        let child = TabDescriptor::new("c", "/p/c").with_icon("user");
        let class = row_class(&resolve_row(&child, "/", true, 1).unwrap());
        assert!(class.contains(INDENTED_CLASSES));
    }

    fn locale() -> Locale {
        Locale::from_json(
            r#"{"docs": "Docs", "billing": "Billing", "billing_description": "Invoices"}"#,
        )
        .unwrap()
    }

    fn render_row(tab: &TabDescriptor, path: &str) -> String {
        tab_row_view(row(tab, path), &locale()).to_html()
    }

    fn render_item(tab: TabDescriptor, path: &'static str) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(locale());
            view! {
                <VerticalTabItem tab=tab current_path=Signal::derive(move || path.to_string()) />
            }
            .to_html()
        })
    }

    #[test]
    fn test_row_markup_active_internal() {
        let tab = TabDescriptor::new("billing", "/billing").with_info("billing_description");
        let html = render_row(&tab, "/billing/invoices");
        assert!(html.contains(r#"target="_self""#));
        assert!(html.contains(r#"aria-current="page""#));
        assert!(html.contains(r#"data-testid="vertical-tab-billing""#));
        assert!(html.contains(r#"data-depth="0""#));
        assert!(html.contains(">Billing</p>"));
        assert!(html.contains(r#"<p class="mt-1 text-xs font-normal">Invoices</p>"#));
        assert!(html.contains("9 18 15 12 9 6"));
        assert!(!html.contains("15 3 21 3 21 9"));
    }

    #[test]
    fn test_row_markup_inactive_external() {
        let tab = TabDescriptor::new("docs", "https://docs.example.com").external();
        let html = render_row(&tab, "/settings");
        assert!(html.contains(r#"target="_blank""#));
        assert!(!html.contains("aria-current"));
        assert!(!html.contains("mt-1 text-xs"));
        assert!(!html.contains("9 18 15 12 9 6"));

        // external glyph follows the label inside the label line
        let label = html.find(">Docs</p>").unwrap();
        let glyph = html.find("15 3 21 3 21 9").unwrap();
        let line_end = html.find("</span>").unwrap();
        assert!(label < glyph && glyph < line_end);
    }

    #[test]
    fn test_item_markup_children() {
        let tab = TabDescriptor::new("billing", "/billing").with_children(vec![
            TabDescriptor::new("docs", "/billing/docs"),
            TabDescriptor::new("invoices", "/billing/invoices"),
        ]);
        let html = render_item(tab, "/billing/docs");
        assert_eq!(html.matches("<a ").count(), 3);
        let parent = html.find(r#"data-testid="vertical-tab-billing""#).unwrap();
        let docs = html.find(r#"data-testid="vertical-tab-docs""#).unwrap();
        let invoices = html.find(r#"data-testid="vertical-tab-invoices""#).unwrap();
        assert!(parent < docs && docs < invoices);
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 2);
        assert_eq!(html.matches(r#"data-depth="1""#).count(), 2);
    }

    #[test]
    fn test_hidden_item_renders_no_anchors() {
        let tab = TabDescriptor::new("billing", "/billing")
            .hidden()
            .with_children(vec![TabDescriptor::new("docs", "/billing/docs")]);
        let html = render_item(tab, "/billing/docs");
        assert!(!html.contains("<a"));
    }
}
