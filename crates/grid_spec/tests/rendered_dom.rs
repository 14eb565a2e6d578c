//! Parses rendered grids back into a DOM and checks their structure.

use grid_spec::{GridComponent, Node, SlottedContent};
use html5ever::tendril::TendrilSink as _;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const PLACEHOLDER_SUBSTRING: &str = "replace me";
const WARNING_SUBSTRING: &str = "no grid dimensions";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parse(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            exact_errors: false,
            scripting_enabled: false,
            ..TreeBuilderOpts::default()
        },
        ..ParseOpts::default()
    };
    parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .unwrap_or_else(|_error| RcDom::default())
}

fn render(attrs: &[(&str, &str)]) -> RcDom {
    init_logging();
    let component = GridComponent::from_external_attributes(attrs.iter().copied());
    parse(&component.shadow_html())
}

fn collect_elements(handle: &Handle, out: &mut Vec<Handle>) {
    if matches!(handle.data, NodeData::Element { .. }) {
        out.push(Handle::clone(handle));
    }
    for child in handle.children.borrow().iter() {
        collect_elements(child, out);
    }
}

fn elements(dom: &RcDom) -> Vec<Handle> {
    let mut out = Vec::new();
    collect_elements(&dom.document, &mut out);
    out
}

fn tag_of(handle: &Handle) -> String {
    match &handle.data {
        NodeData::Element { name, .. } => name.local.to_string(),
        _ => String::new(),
    }
}

fn attr_of(handle: &Handle, attr_name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn text_of(handle: &Handle) -> String {
    let mut text = String::new();
    if let NodeData::Text { contents } = &handle.data {
        text.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        text.push_str(&text_of(child));
    }
    text
}

fn grid_rows(dom: &RcDom) -> Vec<Handle> {
    elements(dom)
        .into_iter()
        .filter(|handle| {
            attr_of(handle, "class")
                .is_some_and(|classes| classes.split_whitespace().any(|class| class == "gridrow"))
        })
        .collect()
}

fn slot_names(root: &Handle) -> Vec<String> {
    let mut found = Vec::new();
    collect_elements(root, &mut found);
    found
        .iter()
        .filter(|handle| tag_of(handle) == "slot")
        .filter_map(|handle| attr_of(handle, "name"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single cell needs no layout, so nothing is rendered.
    #[test]
    fn no_grid_for_single_dim() {
        let dom = render(&[("dim", "100")]);
        assert_eq!(grid_rows(&dom).len(), 0);
        assert!(slot_names(&dom.document).is_empty());
    }

    #[test]
    fn two_cells_in_one_row() {
        let dom = render(&[("dim", "50 50")]);
        let rows = grid_rows(&dom);
        assert_eq!(rows.len(), 1);
        assert_eq!(slot_names(&rows[0]), vec!["1", "2"]);
    }

    #[test]
    fn trailing_separator_renders_identically() {
        init_logging();
        let with_separator = GridComponent::from_external_attributes([("dim", "50 50;")]);
        let without_separator = GridComponent::from_external_attributes([("dim", "50 50")]);
        assert_eq!(with_separator.shadow_html(), without_separator.shadow_html());
    }

    #[test]
    fn ids_continue_into_second_row() {
        let dom = render(&[("dim", "50 50;30 30 40;")]);
        let rows = grid_rows(&dom);
        assert_eq!(rows.len(), 2);
        assert_eq!(slot_names(&rows[0]), vec!["1", "2"]);
        assert_eq!(slot_names(&rows[1]), vec!["3", "4", "5"]);
        assert_eq!(attr_of(&rows[1], "class").as_deref(), Some("gridrow grid-2"));
    }

    /// Tests slot names run 1..=K across rows for a handful of shapes
    ///
    /// # Panics
    /// Panics if a row count or slot sequence differs from the expected one
    #[test]
    fn ids_are_contiguous_for_every_shape() {
        for (dim, rows_expected, cells_expected) in [
            ("50 50", 1, 2),
            ("25 25 25 25;", 1, 4),
            ("70 30; 50 50;", 2, 4),
            ("10 90;20 80;30 70;", 3, 6),
            ("  33   33  34 ; 100 ", 2, 4),
        ] {
            let dom = render(&[("dim", dim)]);
            assert_eq!(grid_rows(&dom).len(), rows_expected, "rows for {dim:?}");
            let names = slot_names(&dom.document);
            let expected: Vec<String> = (1..=cells_expected).map(|id: usize| id.to_string()).collect();
            assert_eq!(names, expected, "slots for {dim:?}");
        }
    }

    #[test]
    fn one_grid_rule_per_row() {
        let dom = render(&[("dim", "70 30; 50 50; 20 20 60")]);
        let style = elements(&dom)
            .into_iter()
            .find(|handle| tag_of(handle) == "style")
            .map(|handle| text_of(&handle))
            .unwrap_or_default();
        assert_eq!(style.matches("grid-template-columns").count(), 3);
        assert!(style.contains("grid-template-columns: 20% 20% 60%;"));
        assert!(style.contains("--gridspace-row: var(--dd-gridspace-row, 10px);"));
    }

    #[test]
    fn default_placeholder_names_its_slot() {
        let dom = render(&[("dim", "50 50;")]);
        let first_slot = elements(&dom)
            .into_iter()
            .find(|handle| tag_of(handle) == "slot");
        assert!(first_slot.is_some());
        if let Some(slot) = first_slot {
            let text = text_of(&slot);
            assert!(text.to_uppercase().contains(&PLACEHOLDER_SUBSTRING.to_uppercase()));
            assert!(text.contains("<div slot=1>your content</div>"));
        }
    }

    #[test]
    fn no_auto_fillers() {
        init_logging();
        let component =
            GridComponent::from_external_attributes([("no-fillers", ""), ("dim", "50 50;")]);
        assert!(!component.shadow_html().contains(PLACEHOLDER_SUBSTRING));
        let dom = parse(&component.shadow_html());
        assert_eq!(slot_names(&dom.document), vec!["1", "2"]);
    }

    #[test]
    fn warns_without_dim() {
        for attrs in [&[][..], &[("dim", "")][..]] {
            let dom = render(attrs);
            let body_text = text_of(&dom.document);
            assert!(body_text.to_uppercase().contains(&WARNING_SUBSTRING.to_uppercase()));
            assert_eq!(grid_rows(&dom).len(), 0);
        }
    }

    #[test]
    fn row_and_cell_styles_are_inline() {
        let dom = render(&[
            ("dim", "50 50"),
            ("row-style", "background: red;"),
            ("cell-style", r#"font-family: "Fira Sans";"#),
        ]);
        let rows = grid_rows(&dom);
        assert_eq!(attr_of(&rows[0], "style").as_deref(), Some("background: red;"));
        let cell_styles: Vec<Option<String>> = rows[0]
            .children
            .borrow()
            .iter()
            .filter(|child| tag_of(child) == "div")
            .map(|child| attr_of(child, "style"))
            .collect();
        assert_eq!(
            cell_styles,
            vec![
                Some(r#"font-family: "Fira Sans";"#.to_owned()),
                Some(r#"font-family: "Fira Sans";"#.to_owned()),
            ]
        );
    }

    #[test]
    fn composed_content_fills_matching_cells_only() {
        init_logging();
        let component = GridComponent::from_external_attributes([("dim", "50 50;30 30 40")]);
        let children = [
            SlottedContent::new("4", Node::text("fourth cell")),
            SlottedContent::new("6", Node::text("nowhere")),
            SlottedContent::untagged(Node::text("loose")),
        ];
        let dom = parse(&component.compose_html(&children));
        let rows = grid_rows(&dom);
        assert_eq!(rows.len(), 2);
        let second_row_text = text_of(&rows[1]);
        assert!(second_row_text.contains("fourth cell"));
        assert!(!second_row_text.contains("<div slot=4>"));
        assert!(second_row_text.contains("<div slot=3>"));
        let whole = text_of(&dom.document);
        assert!(!whole.contains("nowhere"));
        assert!(!whole.contains("loose"));
    }
}
