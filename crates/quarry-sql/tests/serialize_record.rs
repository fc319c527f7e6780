use quarry_core::schema::{Field, Index, Layout};
use quarry_core::Record;
use quarry_sql::Serializer;

use pretty_assertions::assert_eq;

fn points() -> Layout {
    let mut layout = Layout::new("points");
    layout
        .put_field(Field::new("_id", "long:unsigned").auto_increment())
        .unwrap();
    layout.put_field(Field::new("x", "int")).unwrap();
    layout.put_field(Field::new("y", "string:32")).unwrap();
    layout.put_field(Field::new("z", "bool")).unwrap();
    layout.put_index(Index::primary("_id")).unwrap();
    layout
}

#[test]
fn insert_follows_layout_order_and_fills_null() {
    let mut record = Record::new();
    record.set("y", "hi").set("x", 3);

    let sql = Serializer::mysql()
        .insert_record(&points(), &record)
        .unwrap();

    assert_eq!(
        sql,
        "INSERT INTO `points` (`_id`, `x`, `y`, `z`) VALUES ( null, 3, 'hi', null )"
    );
    assert!(sql.contains("VALUES ( null, 3, 'hi'"));
}

#[test]
fn insert_renders_booleans_as_integers() {
    let mut record = Record::new();
    record.set("_id", 4u64).set("z", true);

    assert_eq!(
        Serializer::mysql()
            .insert_record(&points(), &record)
            .unwrap(),
        "INSERT INTO `points` (`_id`, `x`, `y`, `z`) VALUES ( 4, null, null, 1 )"
    );
}

#[test]
fn insert_rejects_fields_missing_from_layout() {
    let mut record = Record::new();
    record.set("w", 1);

    let err = Serializer::mysql()
        .insert_record(&points(), &record)
        .unwrap_err();
    assert!(err.is_unknown_field());
}

#[test]
fn update_sets_only_the_diff() {
    let mut record = Record::from_iter([("_id", 7), ("x", 1), ("y", 2)]);
    record.set("x", 10).set("y", 2);

    assert_eq!(
        Serializer::mysql()
            .update_record(&points(), &record)
            .unwrap(),
        "UPDATE `points` SET `x` = 10 WHERE `_id` = 7"
    );
}

#[test]
fn update_of_sliced_record_touches_only_the_slice() {
    let mut record = Record::from_iter([("_id", 7), ("x", 1), ("y", 2)]);
    record.set("x", 10).set("y", 20);

    let slice = record.slice(&["_id", "y"]);

    assert_eq!(
        Serializer::mysql().update_record(&points(), &slice).unwrap(),
        "UPDATE `points` SET `y` = 20 WHERE `_id` = 7"
    );
}

#[test]
fn update_selects_the_row_by_its_committed_key() {
    let mut record = Record::from_iter([("_id", 7), ("x", 1)]);
    record.set("_id", 8);

    assert_eq!(
        Serializer::mysql()
            .update_record(&points(), &record)
            .unwrap(),
        "UPDATE `points` SET `_id` = 8 WHERE `_id` = 7"
    );
}

#[test]
fn update_without_changes_fails() {
    let record = Record::from_iter([("_id", 7), ("x", 1)]);

    let err = Serializer::mysql()
        .update_record(&points(), &record)
        .unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn update_without_primary_key_fails() {
    let mut layout = Layout::new("logs");
    layout.put_field(Field::new("line", "text")).unwrap();

    let mut record = Record::from_iter([("line", "a")]);
    record.set("line", "b");

    let err = Serializer::mysql()
        .update_record(&layout, &record)
        .unwrap_err();
    assert!(err.is_missing_primary_key());
}

#[test]
fn delete_targets_the_primary_key() {
    let record = Record::from_iter([("_id", 7), ("x", 1)]);

    assert_eq!(
        Serializer::mysql()
            .delete_record(&points(), &record)
            .unwrap(),
        "DELETE FROM `points` WHERE `_id` = 7"
    );
}

#[test]
fn delete_without_key_value_fails() {
    let mut record = Record::new();
    record.set("x", 1);

    let err = Serializer::mysql()
        .delete_record(&points(), &record)
        .unwrap_err();
    assert!(err.is_invalid_statement());
}
