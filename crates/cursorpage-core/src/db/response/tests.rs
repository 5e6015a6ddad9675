use crate::{
    db::{
        cursor::{Cursor, decode_cursor, encode_cursor},
        response::{Page, PageInfo, format_edges, format_edges_with, format_flat},
        sort::{SortDirection, SortSpec},
    },
    test_support::{TestRow, row},
    value::Value,
};

fn sort() -> SortSpec {
    SortSpec::single("name", SortDirection::Asc, "id").expect("sort should be valid")
}

fn page() -> Page<TestRow> {
    let items = vec![
        row([("id", Value::Uint(1)), ("name", Value::from("ada"))]),
        row([("id", Value::Uint(2)), ("name", Value::from("grace"))]),
    ];
    let sort = sort();
    let page_info = PageInfo {
        has_next_page: true,
        has_previous_page: false,
        start_cursor: Some(encode_cursor(&items[0], &sort).expect("row encodes")),
        end_cursor: Some(encode_cursor(&items[1], &sort).expect("row encodes")),
    };

    Page::new(items, page_info)
}

#[test]
fn flat_format_keeps_items_and_page_info() {
    let page = page();
    let expected_info = page.page_info.clone();

    let flat = format_flat(page);

    assert_eq!(flat.data.len(), 2);
    assert_eq!(flat.page_info, expected_info);
}

#[test]
fn edge_cursors_match_page_bounds() {
    let page = page();
    let info = page.page_info.clone();

    let connection = format_edges(page, &sort()).expect("edges should format");

    assert_eq!(connection.edges.len(), 2);
    assert_eq!(Some(connection.edges[0].cursor.clone()), info.start_cursor);
    assert_eq!(Some(connection.edges[1].cursor.clone()), info.end_cursor);
    assert_eq!(connection.page_info, info);

    let boundary =
        decode_cursor(&connection.edges[1].cursor, &sort()).expect("edge cursor decodes");
    assert_eq!(boundary.get("name"), Some(&Value::from("grace")));
}

#[test]
fn edges_are_idempotent() {
    let first = format_edges(page(), &sort()).expect("edges should format");
    let second = format_edges(page(), &sort()).expect("edges should format");

    assert_eq!(first, second);
}

#[test]
fn mapped_edges_keep_row_cursors() {
    let raw = format_edges(page(), &sort()).expect("edges should format");
    let mapped = format_edges_with(page(), &sort(), |row| {
        row.get("name")
            .and_then(Value::as_text)
            .map(str::to_uppercase)
            .unwrap_or_default()
    })
    .expect("edges should format");

    assert_eq!(mapped.nodes().cloned().collect::<Vec<_>>(), vec!["ADA", "GRACE"]);
    assert_eq!(
        mapped.edges.iter().map(|edge| &edge.cursor).collect::<Vec<_>>(),
        raw.edges.iter().map(|edge| &edge.cursor).collect::<Vec<_>>()
    );
}

#[test]
fn page_map_leaves_page_info_alone() {
    let page = page();
    let info = page.page_info.clone();

    let ids = page.map(|row| row.get("id").cloned());

    assert_eq!(ids.items, vec![Some(Value::Uint(1)), Some(Value::Uint(2))]);
    assert_eq!(ids.page_info, info);
}

#[test]
fn shapes_serialize_with_relay_field_names() {
    let info = PageInfo {
        has_next_page: false,
        has_previous_page: true,
        start_cursor: Some(Cursor::from("abc")),
        end_cursor: None,
    };

    let json = serde_json::to_value(&info).expect("page info serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "hasNextPage": false,
            "hasPreviousPage": true,
            "startCursor": "abc",
            "endCursor": null,
        })
    );

    let flat = Page::new(vec![1u32, 2], info.clone()).into_flat();
    let json = serde_json::to_value(&flat).expect("flat page serializes");
    assert_eq!(json["data"], serde_json::json!([1, 2]));
    assert_eq!(json["pageInfo"]["hasPreviousPage"], true);

    let connection = format_edges(page(), &sort()).expect("edges should format");
    let json = serde_json::to_value(&connection).expect("connection serializes");
    assert!(json["edges"][0]["cursor"].is_string());
    assert_eq!(json["edges"][0]["node"]["id"], serde_json::json!({ "Uint": 1 }));
}
