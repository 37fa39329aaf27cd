//! Unit tests for connector domain types.

use crate::connector::domain::{
    CategoryDescriptor, ConnectorCategory, ConnectorDescriptor, ConnectorDomainError,
    ConnectorFilter, ConnectorSetting, Dialect, FilterVerdict, ParseConnectorCategoryError,
    PropertyValue,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn mysql() -> ConnectorDescriptor {
    ConnectorDescriptor::new(
        Dialect::new("mysql").expect("valid dialect"),
        "MySQL",
        ConnectorCategory::Editor,
    )
    .with_interface("sqlalchemy")
    .with_settings([ConnectorSetting::new("url", "mysql://host:3306/db")])
    .with_property("is_sql", true)
    .with_property("sql_identifier_quote", "`")
    .with_property("has_live_queries", false)
}

// ── Dialect ────────────────────────────────────────────────────────

#[rstest]
#[case("hive", "hive")]
#[case("  hive-tez ", "hive-tez")]
#[case("adls-v1", "adls-v1")]
fn dialect_is_trimmed(#[case] input: &str, #[case] expected: &str) {
    let dialect = Dialect::new(input).expect("valid dialect");
    assert_eq!(dialect.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_dialect_is_rejected(#[case] input: &str) {
    assert_eq!(Dialect::new(input), Err(ConnectorDomainError::EmptyDialect));
}

#[rstest]
fn dialect_matching_is_case_sensitive() {
    let dialect = Dialect::new("Hive").expect("valid dialect");
    assert_ne!(dialect, "hive");
    assert_eq!(dialect, "Hive");
}

#[rstest]
fn dialect_deserialization_rejects_blank_values() {
    let result = serde_json::from_value::<Dialect>(json!("  "));
    assert!(result.is_err());
}

// ── ConnectorCategory ──────────────────────────────────────────────

#[rstest]
#[case(ConnectorCategory::Editor, "editor")]
#[case(ConnectorCategory::Browsers, "browsers")]
#[case(ConnectorCategory::Catalogs, "catalogs")]
#[case(ConnectorCategory::Optimizers, "optimizers")]
#[case(ConnectorCategory::Schedulers, "schedulers")]
#[case(ConnectorCategory::Plugins, "plugins")]
fn category_names_parse_and_serialize(#[case] category: ConnectorCategory, #[case] name: &str) {
    assert_eq!(category.as_str(), name);
    assert_eq!(ConnectorCategory::try_from(name), Ok(category));
    assert_eq!(serde_json::to_value(category).expect("serialize"), json!(name));
}

#[rstest]
fn category_parsing_ignores_case_and_whitespace() {
    assert_eq!(
        ConnectorCategory::try_from(" Schedulers "),
        Ok(ConnectorCategory::Schedulers)
    );
}

#[rstest]
fn unknown_category_is_rejected() {
    let err = ConnectorCategory::try_from("dashboards").expect_err("unknown category");
    assert_eq!(err, ParseConnectorCategoryError("dashboards".to_owned()));
    let domain: ConnectorDomainError = err.into();
    assert!(matches!(domain, ConnectorDomainError::UnknownCategory(_)));
}

#[rstest]
fn category_descriptor_serializes_type_key() {
    let descriptor = CategoryDescriptor::new(ConnectorCategory::Catalogs);
    assert_eq!(
        serde_json::to_value(&descriptor).expect("serialize"),
        json!({"name": "Catalogs", "type": "catalogs", "description": ""})
    );
}

// ── ConnectorDescriptor ────────────────────────────────────────────

#[rstest]
fn identity_falls_back_to_dialect(mysql: ConnectorDescriptor) {
    assert_eq!(mysql.id(), None);
    assert_eq!(mysql.identity(), "mysql");

    let with_id = mysql.with_id("mysql-primary");
    assert_eq!(with_id.identity(), "mysql-primary");
}

#[rstest]
fn flags_default_to_false_when_absent(mysql: ConnectorDescriptor) {
    assert!(mysql.is_sql());
    assert!(!mysql.flag("has_live_queries"));
    assert!(!mysql.flag("has_catalog"));
    assert!(!mysql.flag("sql_identifier_quote"));
}

#[rstest]
fn textual_properties_are_exposed(mysql: ConnectorDescriptor) {
    let quote = mysql
        .property("sql_identifier_quote")
        .and_then(PropertyValue::as_str);
    assert_eq!(quote, Some("`"));
    assert_eq!(mysql.setting("url"), Some("mysql://host:3306/db"));
    assert_eq!(mysql.setting("server_host"), None);
}

#[rstest]
fn descriptor_serializes_to_ui_shape(mysql: ConnectorDescriptor) {
    let value = serde_json::to_value(&mysql).expect("serialize");
    assert_eq!(
        value,
        json!({
            "dialect": "mysql",
            "nice_name": "MySQL",
            "description": "",
            "category": "editor",
            "interface": "sqlalchemy",
            "settings": [{"name": "url", "value": "mysql://host:3306/db"}],
            "properties": {
                "has_live_queries": false,
                "is_sql": true,
                "sql_identifier_quote": "`"
            }
        })
    );
}

#[rstest]
fn descriptor_deserializes_sparse_records() {
    let descriptor: ConnectorDescriptor = serde_json::from_value(json!({
        "dialect": "oozie",
        "nice_name": "Oozie",
        "category": "schedulers"
    }))
    .expect("deserialize");

    assert_eq!(descriptor.dialect(), "oozie");
    assert_eq!(descriptor.interface(), None);
    assert!(descriptor.settings().is_empty());
    assert!(descriptor.properties().is_empty());
    assert_eq!(descriptor.description(), "");
}

// ── ConnectorFilter ────────────────────────────────────────────────

#[rstest]
#[case(&[], &[], "hive", FilterVerdict::Allowed)]
#[case(&["hive"], &[], "hive", FilterVerdict::Blacklisted)]
#[case(&[], &["mysql"], "hive", FilterVerdict::NotWhitelisted)]
#[case(&[], &["hive"], "hive", FilterVerdict::Allowed)]
#[case(&["hive"], &["hive"], "hive", FilterVerdict::Blacklisted)]
fn filter_verdicts(
    #[case] blacklist: &[&str],
    #[case] whitelist: &[&str],
    #[case] dialect: &str,
    #[case] expected: FilterVerdict,
) {
    let filter = ConnectorFilter::new(blacklist, whitelist);
    assert_eq!(filter.verdict(dialect), expected);
    assert_eq!(filter.allows(dialect), expected == FilterVerdict::Allowed);
}

#[rstest]
fn filter_entries_are_trimmed_and_blanks_dropped() {
    let filter = ConnectorFilter::new([" oozie ", "", "  "], ["hive,"]);
    assert_eq!(filter.blacklist().len(), 1);
    assert!(filter.blacklist().contains("oozie"));
    assert!(filter.whitelist().contains("hive,"));
}

#[rstest]
fn default_filter_allows_everything() {
    let filter = ConnectorFilter::allow_all();
    assert!(!filter.is_restricted());
    assert!(filter.allows("anything"));
}

#[rstest]
fn filter_deserializes_prefixed_and_null_lists() {
    let filter: ConnectorFilter = serde_json::from_value(json!({
        "connectors_blacklist": ["celery"],
        "connectors_whitelist": null
    }))
    .expect("deserialize");
    assert_eq!(filter, ConnectorFilter::new(["celery"], Vec::<String>::new()));
}

#[rstest]
fn filter_merges_both_key_spellings() {
    let filter: ConnectorFilter = serde_json::from_value(json!({
        "blacklist": ["oozie"],
        "connectors_blacklist": ["celery"],
        "whitelist": null,
        "connectors_whitelist": ["hive"]
    }))
    .expect("deserialize");
    assert_eq!(filter, ConnectorFilter::new(["oozie", "celery"], ["hive"]));
}
