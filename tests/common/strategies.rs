use proptest::prelude::*;

/// Strategy for generating valid column names
pub fn column_name_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,15}"
}

/// Strategy for generating distinct, ordered column lists
pub fn column_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(column_name_strategy(), 0..12)
        .prop_map(|columns| columns.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Strategy for generating a column list plus a filter list drawn partly from it
pub fn columns_with_filter_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    column_list_strategy().prop_flat_map(|columns| {
        let picks = prop::sample::subsequence(columns.clone(), 0..=columns.len());
        let strays = prop::collection::vec(column_name_strategy(), 0..3);
        (Just(columns), (picks, strays).prop_map(|(mut picks, strays)| {
            picks.extend(strays);
            picks
        }))
    })
}
