//! End-to-end rendering of process definitions.

use serde_json::{json, Value};
use stateflow::builder::{ProcessBuilder, StateBuilder};
use stateflow::core::{Flag, Guard, Transition};
use stateflow::definition::ProcessDefinition;
use stateflow::renderer::{render_process, Document, DocumentOptions, EventEdge, StateNode};

const HEADER: &str = r#"dpi="75";pad="1";fontname="Courier";nodesep="1";rankdir="TD";ranksep="0.5";"#;

fn order_process() -> ProcessDefinition {
    ProcessBuilder::<Value>::new("order")
        .initial("new")
        .state(
            StateBuilder::new("new")
                .event(
                    Transition::new("pay", "paid")
                        .when(Guard::new(|p: &Value| p["amount"].as_u64() > Some(0))),
                )
                .event(Transition::new("cancel", "cancelled"))
                .event(Transition::noop("remind"))
                .attribute("label", json!("New order")),
        )
        .unwrap()
        .state(StateBuilder::new("paid").flag(Flag::new("final")))
        .unwrap()
        .state(
            StateBuilder::new("cancelled")
                .flag(Flag::new("final"))
                .attribute("color", json!("red")),
        )
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn document_with_single_node_and_edge() {
    let mut document = Document::new("p");
    document.add_state("N");
    document.add_edge("E");

    assert_eq!(
        document.render(),
        r#"digraph p {dpi="75";pad="1";fontname="Courier";nodesep="1";rankdir="TD";ranksep="0.5";NE}"#
    );
}

#[test]
fn process_renders_nodes_then_edges() {
    let process = order_process();
    let dot = render_process(&process, DocumentOptions::default()).render();

    let expected = [
        "digraph order {",
        HEADER,
        r#""new"[shape="box",style="rounded",label="New order"];"#,
        r#""paid"[shape="box",style="rounded",label="paid\n[final]"];"#,
        r#""cancelled"[shape="box",style="rounded",label="cancelled\n[final]",color="red"];"#,
        r#""new"->"paid"[label="pay"];"#,
        r#""new"->"cancelled"[label="cancel"];"#,
        "}",
    ]
    .concat();

    assert_eq!(dot, expected);
}

#[test]
fn dangling_targets_render_without_validation() {
    let process = ProcessBuilder::<Value>::new("broken")
        .initial("a")
        .state(StateBuilder::new("a").event(Transition::new("go", "ghost")))
        .unwrap()
        .build()
        .unwrap();

    assert!(process.validate().is_failure());

    let dot = render_process(&process, DocumentOptions::default()).render();
    assert!(dot.contains(r#""a"->"ghost"[label="go"];"#));
    assert!(!dot.contains(r#""ghost"[shape"#));
}

#[test]
fn options_apply_to_header() {
    let options: DocumentOptions =
        serde_json::from_value(json!({"dpi": 96, "font": "Helvetica"})).unwrap();
    let dot = render_process(&order_process(), options).render();

    assert!(dot.starts_with(
        r#"digraph order {dpi="96";pad="1";fontname="Helvetica";nodesep="1";rankdir="TD";ranksep="0.5";"#
    ));
}

#[test]
fn manual_mapping_mixes_fragment_types() {
    let mut document = Document::new("manual").with_dpi(120);
    document.add_state(StateNode::new("a"));
    document.add_state(StateNode::new("b").with_color("blue"));
    document.add_edge(EventEdge::new("a", "b", "next"));

    assert_eq!(
        document.to_string(),
        [
            r#"digraph manual {dpi="120";pad="1";fontname="Courier";nodesep="1";rankdir="TD";ranksep="0.5";"#,
            r#""a"[shape="box",style="rounded",label="a"];"#,
            r#""b"[shape="box",style="rounded",label="b",color="blue"];"#,
            r#""a"->"b"[label="next"];"#,
            "}",
        ]
        .concat()
    );
}

#[test]
fn driver_walks_process_with_own_current_state() {
    let process = order_process();
    let mut current = process.initial().to_string();

    for (event, payload) in [
        ("remind", json!({})),
        ("pay", json!({"amount": 0})),
        ("pay", json!({"amount": 25})),
    ] {
        if let Some(next) = process.trigger(&current, event, &payload).unwrap() {
            current = next;
        }
    }

    assert_eq!(current, "paid");
    assert!(process.state(&current).unwrap().has_flag("final"));
    assert!(process
        .trigger(&current, "pay", &json!({}))
        .unwrap_err()
        .is_not_found());
}
