//! Unit tests for the dmnforge core data model
//!
//! Covers JSON grid ingestion and serde round-trips for the types the
//! generator consumes.

use dmnforge_core::{ParamDef, RuleRow, Value};

#[test]
fn test_param_list_deserializes_from_grid_json() {
    let json = r#"[{"name":"age","type":"number"},{"name":"status","type":"string"}]"#;
    let params: Vec<ParamDef> = serde_json::from_str(json).unwrap();

    assert_eq!(params.len(), 2);
    assert_eq!(params[0], ParamDef::number("age"));
    assert_eq!(params[1], ParamDef::string("status"));
}

#[test]
fn test_rule_row_deserializes_from_grid_json() {
    let json = r#"{"age": 30, "status": "active", "vip": true, "note": null}"#;
    let row: RuleRow = serde_json::from_str(json).unwrap();

    assert_eq!(row.get("age"), Some(&Value::Number(30.0)));
    assert_eq!(row.get("status"), Some(&Value::String("active".to_string())));
    assert_eq!(row.get("vip"), Some(&Value::Bool(true)));
    assert_eq!(row.get("note"), Some(&Value::Null));
}

#[test]
fn test_json_value_ingestion_rejects_nested_data() {
    let nested = serde_json::json!({"tags": ["a", "b"]});
    let err = Value::try_from(nested).unwrap_err();

    assert!(err.to_string().contains("Not a scalar"));
}

#[test]
fn test_row_from_json_object_via_try_from() -> anyhow::Result<()> {
    let grid: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(r#"[{"age": 18}, {"age": 65}]"#)?;

    let rows: Vec<RuleRow> = grid
        .into_iter()
        .map(|obj| {
            obj.into_iter()
                .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                .collect::<Result<RuleRow, dmnforge_core::CoreError>>()
        })
        .collect::<Result<_, _>>()?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("age"), Some(&Value::Number(18.0)));
    Ok(())
}
