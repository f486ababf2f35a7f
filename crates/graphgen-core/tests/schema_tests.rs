use graphgen_core::config::{ConflictPolicy, PropertyCasing};
use graphgen_core::error::{ParseError, TransformError};
use graphgen_core::ir::{Schema, TypeTag};
use graphgen_core::parse::{self, CypherWorkbenchDocument, Dialect};
use graphgen_core::transform::{self, AssembleOptions};

const MOVIES: &str = include_str!("fixtures/cypher-workbench-movies.json");
const SHOP: &str = include_str!("fixtures/data-importer-shop.json");
const COMPANY: &str = include_str!("fixtures/arrows-company.json");

fn load(dialect: Dialect, input: &str) -> Schema {
    transform::load(dialect, input, &AssembleOptions::default()).expect("should assemble")
}

fn edges(schema: &Schema) -> Vec<String> {
    schema
        .relationships()
        .values()
        .flat_map(|rel| {
            rel.endpoints()
                .iter()
                .map(move |p| format!("({})-[:{}]->({})", p.source, rel.rel_type(), p.target))
        })
        .collect()
}

/// Every endpoint label must name a node of the same schema.
fn assert_endpoints_resolve(schema: &Schema) {
    for rel in schema.relationships().values() {
        for pair in rel.endpoints() {
            assert!(schema.node(&pair.source).is_some(), "missing {}", pair.source);
            assert!(schema.node(&pair.target).is_some(), "missing {}", pair.target);
        }
    }
}

#[test]
fn assemble_cypher_workbench() {
    let schema = load(Dialect::CypherWorkbench, MOVIES);
    assert_eq!(schema.dialect(), Dialect::CypherWorkbench);
    assert!(schema.warnings().is_empty());
    assert_endpoints_resolve(&schema);

    let labels: Vec<&str> = schema.nodes().values().map(|n| n.label()).collect();
    assert_eq!(labels, ["Person", "Movie", "Genre"]);

    let person = schema.node("PERSON").unwrap();
    let keys: Vec<&str> = person.source_keys().iter().map(String::as_str).collect();
    assert_eq!(keys, ["Node0", "Node2"]);
    let nicknames = person.properties().get("nicknames").unwrap();
    assert_eq!(nicknames.type_tag, TypeTag::String);
    assert!(nicknames.is_array);

    let acted_in = schema.relationship("acted_in").unwrap();
    assert_eq!(acted_in.rel_type(), "ACTED_IN");
    assert_eq!(acted_in.endpoints().len(), 1);
    assert_eq!(acted_in.properties().len(), 2);
    assert_eq!(
        acted_in.properties().get("screentime").unwrap().type_tag,
        TypeTag::Float
    );

    insta::assert_debug_snapshot!(edges(&schema), @r#"
    [
        "(Person)-[:ACTED_IN]->(Movie)",
        "(Person)-[:DIRECTED]->(Movie)",
        "(Movie)-[:IN_GENRE]->(Genre)",
        "(Person)-[:REVIEWED]->(Movie)",
    ]
    "#);
}

#[test]
fn assemble_data_importer() {
    let schema = load(Dialect::DataImporter, SHOP);
    assert_endpoints_resolve(&schema);
    assert_eq!(schema.nodes().len(), 4);

    let customer = schema.node("customer").unwrap();
    assert_eq!(customer.label(), "Customer");
    let props: Vec<(&str, TypeTag)> = customer
        .properties()
        .iter()
        .map(|p| (p.name.as_str(), p.type_tag))
        .collect();
    assert_eq!(
        props,
        [
            ("customerId", TypeTag::Integer),
            ("Email", TypeTag::String),
            ("vip", TypeTag::Boolean),
        ]
    );

    // HAS connects two distinct label pairs; the lowercase repeat collapses.
    let has = schema.relationship("HAS").unwrap();
    assert!(has.connects("Order", "Item"));
    assert!(has.connects("Customer", "Address"));
    assert_eq!(has.endpoints().len(), 2);
    assert!(has.properties().contains("quantity"));
    assert!(has.properties().contains("since"));

    insta::assert_debug_snapshot!(edges(&schema), @r#"
    [
        "(Customer)-[:PLACED]->(Order)",
        "(Order)-[:HAS]->(Item)",
        "(Customer)-[:HAS]->(Address)",
    ]
    "#);
}

#[test]
fn assemble_arrows() {
    let schema = load(Dialect::Arrows, COMPANY);
    assert_endpoints_resolve(&schema);

    let person = schema.node("Person").unwrap();
    assert_eq!(person.properties().len(), 3);
    assert!(person.properties().get("skills").unwrap().is_array);

    let works_for = schema.relationship("works_for").unwrap();
    assert_eq!(works_for.endpoints().len(), 1);
    assert_eq!(works_for.properties().len(), 2);
    assert!(schema.relationship("KNOWS").unwrap().connects("Person", "Person"));
}

#[test]
fn detected_load_matches_explicit_load() {
    for (dialect, input) in [
        (Dialect::CypherWorkbench, MOVIES),
        (Dialect::DataImporter, SHOP),
        (Dialect::Arrows, COMPANY),
    ] {
        let detected = transform::load_detected(input, &AssembleOptions::default()).unwrap();
        assert_eq!(detected, load(dialect, input));
    }
}

#[test]
fn assembly_is_deterministic() {
    assert_eq!(
        load(Dialect::CypherWorkbench, MOVIES),
        load(Dialect::CypherWorkbench, MOVIES)
    );
}

#[test]
fn malformed_input_produces_no_schema() {
    let err = transform::load(Dialect::Arrows, "{not json", &AssembleOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        TransformError::Parse(ParseError::MalformedInput { .. })
    ));
}

#[test]
fn malformed_input_without_dialect_is_still_malformed() {
    let err = transform::load_detected("{not json", &AssembleOptions::default()).unwrap_err();
    match err {
        TransformError::Parse(ParseError::MalformedInput { dialect, .. }) => {
            assert_eq!(dialect, None)
        }
        other => panic!("expected malformed input, got {other:?}"),
    }

    let err = transform::load_detected(r#"{"foo": 1}"#, &AssembleOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        TransformError::Parse(ParseError::UnknownDialect(_))
    ));
}

#[test]
fn unsupported_type_aborts_assembly() {
    let input = MOVIES.replace("\"datatype\": \"Boolean\"", "\"datatype\": \"weirdtype\"");
    let err = transform::load(Dialect::CypherWorkbench, &input, &AssembleOptions::default())
        .unwrap_err();
    match &err {
        TransformError::UnsupportedType(e) => assert_eq!(e.type_name, "weirdtype"),
        other => panic!("expected unsupported type, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "unsupported property type 'weirdtype' (CypherWorkbench: REVIEWED.recommended)"
    );
}

#[test]
fn dangling_endpoint_is_malformed() {
    let input = MOVIES.replace("\"endNodeLabelKey\": \"Node3\"", "\"endNodeLabelKey\": \"Node9\"");
    let err = transform::load(Dialect::CypherWorkbench, &input, &AssembleOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("unknown node 'Node9'"), "{err}");
}

#[test]
fn version_mismatch_is_recorded_not_fatal() {
    let input = MOVIES.replace("\"version\": \"1.3.0\"", "\"version\": \"1.4.2\"");
    let doc: CypherWorkbenchDocument = parse::from_json(&input).unwrap();
    let schema = transform::assemble(&doc).expect("mismatch should not be fatal");
    assert_eq!(schema.warnings().len(), 1);
    assert_eq!(schema.warnings()[0].found.as_deref(), Some("1.4.2"));
    assert_eq!(schema.nodes().len(), 3);
}

#[test]
fn options_pass_through() {
    let options = AssembleOptions {
        property_casing: PropertyCasing::UpperCamel,
        on_type_conflict: ConflictPolicy::LastWriteWins,
    };
    let schema = transform::load(Dialect::Arrows, COMPANY, &options).unwrap();
    assert_eq!(schema.property_casing(), PropertyCasing::UpperCamel);
}

#[test]
fn strict_policy_surfaces_type_conflicts() {
    let input = COMPANY.replace("\"age\": \"integer\"", "\"name\": \"integer\"");
    let options = AssembleOptions {
        on_type_conflict: ConflictPolicy::Error,
        ..AssembleOptions::default()
    };
    let err = transform::load(Dialect::Arrows, &input, &options).unwrap_err();
    assert!(matches!(err, TransformError::TypeConflict { ref property, .. } if property == "name"));

    // The default keeps the later declaration.
    let schema = load(Dialect::Arrows, &input);
    let name = schema.node("person").unwrap().properties().get("name").unwrap();
    assert_eq!(name.type_tag, TypeTag::Integer);
}
