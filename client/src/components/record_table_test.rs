use super::*;

#[test]
fn cell_class_colors_only_category_column() {
    assert_eq!(cell_class(2, 2, "cell--ok"), "record-table__cell cell--ok");
    assert_eq!(cell_class(0, 2, "cell--ok"), "record-table__cell");
}
