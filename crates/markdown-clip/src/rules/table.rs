//! `table` rendering as a pipe table.

use crate::convert::{convert_children, Context};
use crate::node::{Node, Tag};

/// Render every `tr` below the table, in document order.
///
/// The first row is always the header, whether or not it uses `th`. Later
/// rows only contribute their `td` cells; a `th` in a body row is skipped.
/// Cells are the row's direct children, so a nested table stays inside the
/// cell that holds it while its rows are still listed after the outer row.
pub fn convert_table(table: &Node, ctx: &Context<'_>) -> String {
    let rows: Vec<&Node> = table
        .descendants()
        .filter(|n| n.is(&Tag::TableRow))
        .collect();

    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };

    let mut out = String::new();

    let header_cells = render_cells(header, ctx, |c| {
        c.is(&Tag::TableHeaderCell) || c.is(&Tag::TableCell)
    });
    if !header_cells.is_empty() {
        push_row(&mut out, &header_cells);
        let separator = vec!["---".to_string(); header_cells.len()];
        push_row(&mut out, &separator);
    }

    for row in body {
        let cells = render_cells(row, ctx, |c| c.is(&Tag::TableCell));
        if !cells.is_empty() {
            push_row(&mut out, &cells);
        }
    }

    out.push('\n');
    out
}

fn render_cells(row: &Node, ctx: &Context<'_>, is_cell: impl Fn(&Node) -> bool) -> Vec<String> {
    row.element_children()
        .filter(|c| is_cell(c))
        .map(|cell| convert_children(cell, ctx, 0).trim().to_string())
        .collect()
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push_str("| ");
    out.push_str(&cells.join(" | "));
    out.push_str(" |\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ConversionOptions;

    fn cell(tag: &str, text: &str) -> Node {
        Node::element(tag).with_child(Node::text(text))
    }

    fn row(cells: Vec<Node>) -> Node {
        cells
            .into_iter()
            .fold(Node::element("tr"), |tr, c| tr.with_child(c))
    }

    fn render(table: &Node) -> String {
        let options = ConversionOptions::default();
        let ctx = Context::new(&options, None);
        convert_table(table, &ctx)
    }

    #[test]
    fn test_header_and_body() {
        let table = Node::element("table")
            .with_child(
                Node::element("thead").with_child(row(vec![cell("th", "A"), cell("th", "B")])),
            )
            .with_child(
                Node::element("tbody").with_child(row(vec![cell("td", " 1 "), cell("td", "2")])),
            );
        let out = render(&table);
        assert_eq!(out, "| A | B |\n| --- | --- |\n| 1 | 2 |\n\n");
        assert_eq!(out.trim_end().lines().count(), 3);
    }

    #[test]
    fn test_first_row_is_header_without_th() {
        let table = Node::element("table")
            .with_child(row(vec![cell("td", "a"), cell("td", "b")]))
            .with_child(row(vec![cell("td", "c"), cell("td", "d")]));
        assert_eq!(render(&table), "| a | b |\n| --- | --- |\n| c | d |\n\n");
    }

    #[test]
    fn test_body_th_is_skipped() {
        let table = Node::element("table")
            .with_child(row(vec![cell("th", "k"), cell("th", "v")]))
            .with_child(row(vec![cell("th", "name"), cell("td", "x")]))
            .with_child(row(vec![cell("th", "only header")]));
        assert_eq!(render(&table), "| k | v |\n| --- | --- |\n| x |\n\n");
    }

    #[test]
    fn test_no_rows() {
        assert_eq!(render(&Node::element("table")), "");
    }

    #[test]
    fn test_nested_table_cells_stay_in_their_row() {
        let inner = Node::element("table").with_child(row(vec![cell("td", "x")]));
        let table = Node::element("table")
            .with_child(row(vec![cell("th", "k"), cell("th", "v")]))
            .with_child(row(vec![cell("td", "a"), Node::element("td").with_child(inner)]));
        assert_eq!(
            render(&table),
            "| k | v |\n| --- | --- |\n| a | | x |\n| --- | |\n| x |\n\n"
        );
    }

    #[test]
    fn test_cells_are_converted() {
        let table = Node::element("table").with_child(row(vec![
            Node::element("th").with_child(cell("strong", "bold")),
            Node::element("td").with_child(cell("code", "x")),
        ]));
        assert_eq!(render(&table), "| **bold** | `x` |\n| --- | --- |\n\n");
    }
}
