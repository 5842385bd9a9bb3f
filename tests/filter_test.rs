//! Behavioural tests for the filter combinator algebra.

use pretty_assertions::assert_eq;
use sqlsift::prelude::*;

const AGE: TypedColumn<i64> = TypedColumn::new("Age");
const NAME: TypedColumn<String> = TypedColumn::new("Name");
const ACTIVE: TypedColumn<bool> = TypedColumn::new("Active");
const TAGS: TypedColumn<Vec<String>> = TypedColumn::new("Tags");

fn sql(filter: &Filter) -> String {
    filter.render().unwrap().sql
}

#[test]
fn combinators_leave_inputs_untouched() {
    let f = Filter::from(AGE).greater_than(18).unwrap();
    let before = f.tokens().clone();

    let g = Filter::from(NAME).equal("Tom").unwrap();
    let _ = f.and_filter(&g);
    let _ = f.or_group(&g);
    let _ = f.without_aliases();
    let _ = f.and(NAME);

    assert_eq!(f.tokens(), &before);
    assert_eq!(sql(&f), "Age > ?");
    // the other operand is reusable too
    assert_eq!(sql(&g), "Name = ?");
}

#[test]
fn flat_and_is_associative() {
    let a = Filter::from(AGE).greater_than(18).unwrap();
    let b = Filter::from(NAME).equal("Tom").unwrap();
    let c = Filter::from(ACTIVE).equal(true).unwrap();

    let left = a.and_filter(&b).and_filter(&c);
    let right = a.and_filter(&b.and_filter(&c));

    // flat and never inserts parentheses, so both associations produce the
    // same left-to-right token stream
    assert_eq!(left.tokens(), right.tokens());
    assert_eq!(sql(&left), "Age > ? AND Name = ? AND Active = ?");
}

#[test]
fn group_wraps_right_operand_exactly_once() {
    let a = Filter::from(AGE).greater_than(18).unwrap();
    let b = Filter::from(NAME)
        .equal("Tom")
        .unwrap()
        .or(NAME)
        .equal("Jerry")
        .unwrap();

    assert_eq!(sql(&a.and_group(&b)), "Age > ? AND ( Name = ? OR Name = ? )");
    assert_eq!(sql(&a.or_group(&b)), "Age > ? OR ( Name = ? OR Name = ? )");
}

#[test]
fn nested_groups() {
    let inner = Filter::from(NAME).equal("Tom").unwrap().or(NAME).equal("Jerry").unwrap();
    let outer = Filter::from(ACTIVE).equal(true).unwrap().and_group(&inner);
    let top = Filter::from(AGE).greater_than(18).unwrap().or_group(&outer);

    assert_eq!(
        sql(&top),
        "Age > ? OR ( Active = ? AND ( Name = ? OR Name = ? ) )"
    );
}

#[test]
fn scenario_age_tom_jerry() {
    let filter = Filter::from(AGE).greater_than(18).unwrap().and_group(
        &Filter::from(NAME)
            .equal("Tom")
            .unwrap()
            .or(NAME)
            .equal("Jerry")
            .unwrap(),
    );

    let rendered = filter.render().unwrap();
    assert_eq!(rendered.sql, "Age > ? AND ( Name = ? OR Name = ? )");
    assert_eq!(
        rendered.params,
        vec![
            Value::Int(18),
            Value::String("Tom".to_string()),
            Value::String("Jerry".to_string()),
        ]
    );
}

#[test]
fn alias_suppression_and_round_trip() {
    let t0 = Alias::new("t0");
    let filter = Filter::from_aliased(AGE, &t0).greater_than(18).unwrap();

    assert_eq!(sql(&filter), "t0.Age > ?");

    let bare = filter.without_aliases();
    let rendered = bare.render().unwrap();
    assert_eq!(rendered.sql, "Age > ?");
    assert_eq!(rendered.params, vec![Value::Int(18)]);

    // toggle is lossless
    let restored = bare.with_aliases();
    assert_eq!(sql(&restored), sql(&filter));
    assert_eq!(restored.tokens(), filter.tokens());
}

#[test]
fn mixed_alias_and_bare_fields() {
    let t0 = Alias::new("t0");
    let filter = Filter::from_aliased(AGE, &t0)
        .greater_than(18)
        .unwrap()
        .and(NAME)
        .equal("Tom")
        .unwrap();

    assert_eq!(sql(&filter), "t0.Age > ? AND Name = ?");
    // only alias-tagged tokens lose their prefix
    assert_eq!(sql(&filter.without_aliases()), "Age > ? AND Name = ?");
}

#[test]
fn blank_field_name_is_rejected() {
    let blank = FieldDef::new("", TypeCategory::Numeric);
    assert!(matches!(
        Filter::from_def(&blank),
        Err(FilterError::InvalidArgument(_))
    ));

    let filter = Filter::from(AGE).greater_than(18).unwrap();
    assert!(matches!(
        filter.and_def(&blank),
        Err(FilterError::InvalidArgument(_))
    ));
}

#[test]
fn null_value_is_rejected_for_comparison() {
    let err = Filter::from(AGE).equal(None::<i64>).unwrap_err();
    assert!(matches!(err, FilterError::InvalidArgument(_)));

    let err = Filter::from(AGE).greater_than(None::<i64>).unwrap_err();
    assert!(matches!(err, FilterError::InvalidArgument(_)));
}

#[test]
fn null_checks_use_dedicated_operators() {
    let filter = Filter::from(NAME).is_null().or(NAME).equal("Tom").unwrap();
    assert_eq!(sql(&filter), "Name IS NULL OR Name = ?");

    let filter = Filter::from(NAME).is_not_null();
    let rendered = filter.render().unwrap();
    assert_eq!(rendered.sql, "Name IS NOT NULL");
    assert!(rendered.params.is_empty());
}

#[test]
fn empty_in_list_is_always_false() {
    let filter = Filter::from(NAME).in_values(Vec::<String>::new()).unwrap();
    let rendered = filter.render().unwrap();
    assert_eq!(rendered.sql, "1 = 0");
    assert!(rendered.params.is_empty());

    // staged after a connective the constant still composes
    let filter = Filter::from(AGE)
        .greater_than(18)
        .unwrap()
        .and(NAME)
        .in_values(Vec::<String>::new())
        .unwrap();
    assert_eq!(sql(&filter), "Age > ? AND 1 = 0");
}

#[test]
fn empty_not_in_list_is_always_true() {
    let filter = Filter::from(NAME).not_in_values(Vec::<String>::new()).unwrap();
    assert_eq!(sql(&filter), "1 = 1");
}

#[test]
fn in_list_params_keep_order() {
    let filter = Filter::from(NAME).in_values(["Tom", "Jerry", "Spike"]).unwrap();
    let rendered = filter.render().unwrap();
    assert_eq!(rendered.sql, "Name IN ( ?, ?, ? )");
    assert_eq!(
        rendered.params,
        vec![
            Value::String("Tom".to_string()),
            Value::String("Jerry".to_string()),
            Value::String("Spike".to_string()),
        ]
    );
}

#[test]
fn collection_containment() {
    let filter = Filter::from(TAGS).contains(["rust", "sql"]).unwrap();
    let rendered = filter.render().unwrap();
    assert_eq!(rendered.sql, "Tags @> ?");
    assert_eq!(
        rendered.params,
        vec![Value::Array(vec![
            Value::String("rust".to_string()),
            Value::String("sql".to_string()),
        ])]
    );
}

#[test]
fn descriptor_path_checks_operator_legality() {
    let age = FieldDef::new("Age", TypeCategory::Numeric);
    let name = FieldDef::new("Name", TypeCategory::Text);

    let filter = Filter::from_def(&age)
        .unwrap()
        .binary(Operator::Gt, 18)
        .unwrap();
    assert_eq!(sql(&filter), "Age > ?");

    // LIKE against a numeric field is refused at the call
    let err = Filter::from_def(&age)
        .unwrap()
        .binary(Operator::Like, "18%")
        .unwrap_err();
    assert!(matches!(err, FilterError::InvalidArgument(_)));

    let filter = Filter::from_def(&name)
        .unwrap()
        .binary(Operator::Like, "To%")
        .unwrap();
    assert_eq!(sql(&filter), "Name LIKE ?");
}

#[test]
fn descriptor_path_arity_checks() {
    let age = FieldDef::new("Age", TypeCategory::Numeric);

    let err = Filter::from_def(&age)
        .unwrap()
        .unary(Operator::Eq)
        .unwrap_err();
    assert!(matches!(err, FilterError::InvalidArgument(_)));

    let err = Filter::from_def(&age)
        .unwrap()
        .binary(Operator::Between, 18)
        .unwrap_err();
    assert!(matches!(err, FilterError::InvalidArgument(_)));

    let filter = Filter::from_def(&age)
        .unwrap()
        .ranged(Operator::Between, 18, 65)
        .unwrap();
    assert_eq!(sql(&filter), "Age BETWEEN ? AND ?");
}

#[test]
fn typed_and_descriptor_paths_agree_on_legality() {
    // boolean IN list is legal on both paths and yields the same tokens
    let typed = Filter::from(ACTIVE).in_values([true, false]).unwrap();
    assert_eq!(sql(&typed), "Active IN ( ?, ? )");

    let def = FieldDef::new("Active", TypeCategory::Boolean);
    let dyn_filter = Filter::from_def(&def)
        .unwrap()
        .listed(Operator::In, [true, false])
        .unwrap();
    assert_eq!(dyn_filter.tokens(), typed.tokens());

    // equality too
    let typed = Filter::from(ACTIVE).equal(true).unwrap();
    let dyn_filter = Filter::from_def(&def)
        .unwrap()
        .binary(Operator::Eq, true)
        .unwrap();
    assert_eq!(dyn_filter.tokens(), typed.tokens());
}

#[test]
fn like_accepts_owned_and_borrowed_patterns() {
    let filter = Filter::from(NAME).like("To%").unwrap();
    assert_eq!(sql(&filter), "Name LIKE ?");

    let pattern = String::from("To%");
    let filter = Filter::from(NAME).not_like(pattern).unwrap();
    assert_eq!(sql(&filter), "Name NOT LIKE ?");

    // NULL pattern is rejected like any other NULL-hostile operator
    let err = Filter::from(NAME).like(None::<String>).unwrap_err();
    assert!(matches!(err, FilterError::InvalidArgument(_)));
}

#[test]
fn descriptor_path_composes_with_typed_path() {
    let name = FieldDef::new("Name", TypeCategory::Text);
    let filter = Filter::from(AGE)
        .greater_than(18)
        .unwrap()
        .and_def(&name)
        .unwrap()
        .binary(Operator::Eq, "Tom")
        .unwrap();
    assert_eq!(sql(&filter), "Age > ? AND Name = ?");
}

#[test]
fn postgres_dialect_numbers_params() {
    let filter = Filter::from(AGE).greater_than(18).unwrap().and_group(
        &Filter::from(NAME)
            .equal("Tom")
            .unwrap()
            .or(NAME)
            .equal("Jerry")
            .unwrap(),
    );
    let rendered = filter.render_with_dialect(Dialect::Postgres).unwrap();
    assert_eq!(rendered.sql, "Age > $1 AND ( Name = $2 OR Name = $3 )");
}

#[test]
fn display_inlines_values() {
    let filter = Filter::from(NAME).equal("Tom").unwrap().and(AGE).less_than(30).unwrap();
    assert_eq!(filter.to_string(), "Name = 'Tom' AND Age < 30");
}
