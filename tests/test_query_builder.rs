//! Query-string builder output against the backend's filter dialect.

use snapcart_sdk::QueryBuilder;

#[test]
fn filter_eq_emits_bracketed_pairs() {
    let pairs = QueryBuilder::new().filter_eq("slug", "stage-rig").build();
    assert_eq!(
        pairs,
        vec![("filters[slug][$eq]".to_string(), "stage-rig".to_string())]
    );
}

#[test]
fn filters_combine_in_call_order() {
    let qs = QueryBuilder::new()
        .filter_containsi("name", "stage")
        .filter_eq("product_type", "equipment")
        .filter_gte("base_price", "50000")
        .filter_lte("base_price", "200000")
        .to_query_string();

    assert_eq!(
        qs,
        "filters[name][$containsi]=stage\
         &filters[product_type][$eq]=equipment\
         &filters[base_price][$gte]=50000\
         &filters[base_price][$lte]=200000"
    );
}

#[test]
fn filter_in_indexes_each_value() {
    let qs = QueryBuilder::new()
        .filter_in("category", &["music", "theatre"])
        .to_query_string();
    assert_eq!(
        qs,
        "filters[category][$in][0]=music&filters[category][$in][1]=theatre"
    );
}

#[test]
fn empty_filter_in_adds_nothing() {
    let pairs = QueryBuilder::new().filter_in("category", &[]).build();
    assert!(pairs.is_empty());
}

#[test]
fn sort_uses_colon_direction_syntax() {
    let qs = QueryBuilder::new()
        .sort("base_price", "asc")
        .sort("name", "desc")
        .to_query_string();
    assert_eq!(qs, "sort=base_price:asc&sort=name:desc");
}

#[test]
fn pagination_and_populate_round_out_the_query() {
    let qs = QueryBuilder::new()
        .page(2)
        .page_size(20)
        .populate("variants")
        .to_query_string();
    assert_eq!(qs, "pagination[page]=2&pagination[pageSize]=20&populate=variants");
}

#[test]
fn empty_builder_builds_an_empty_query() {
    assert!(QueryBuilder::new().build().is_empty());
    assert_eq!(QueryBuilder::new().to_query_string(), "");
}
