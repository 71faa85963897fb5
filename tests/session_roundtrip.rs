//! End-to-end session tests over temporary workspaces: build the
//! candidate list, commit a selection, and verify the written subgraph
//! and selection state round-trip into the next session.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use oxrdf::vocab::rdf;
use oxrdf::{Graph, NamedNode, TripleRef};
use oxttl::TurtleParser;
use tempfile::TempDir;

use triplepick::graph::GraphSource;
use triplepick::models::{Candidate, Category};
use triplepick::services::{CandidateListBuilder, CommitPipeline};
use triplepick::state::SelectionStore;
use triplepick::vocab::blueprint;

const CLASSES_TTL: &str = r#"@prefix : <http://schema.example.org/blueprint-ui-config-initializer/> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .

<http://data.example.org/class/A> rdf:type :Class ;
    :colorIndex "3" ;
    :icon "widget-icon" ;
    :label "Widget" ;
    :searchPrio "1" .

<http://data.example.org/class/B> rdf:type :Class ;
    :colorIndex "5" ;
    :icon "gadget-icon" ;
    :label "Gadget" ;
    :searchPrio "2" .
"#;

const LINKS_TTL: &str = r#"@prefix : <http://schema.example.org/blueprint-ui-config-initializer/> .

<http://data.example.org/entity/X> :link [
    :label "Home" ;
    :path "/home" ;
    :to <http://data.example.org/entity/Y>
] .
"#;

const DETAILS_TTL: &str = r#"@prefix : <http://schema.example.org/blueprint-ui-config-initializer/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

<http://data.example.org/group/G> :label "Attributes" ;
    :order "1" ;
    :detail [ :label "Name" ; :order "1" ; :path rdfs:label ] ;
    :detail [ :label "Size" ; :order "2" ; :path "/size" ] .

<http://data.example.org/class/A> :detailGroup <http://data.example.org/group/G> .
"#;

fn workspace() -> TempDir {
    tempfile::tempdir().expect("temp workspace")
}

fn write_input(dir: &Path, category: Category, content: &str) {
    std::fs::write(dir.join(category.input_file()), content).expect("write fixture");
}

fn build(dir: &Path, category: Category) -> Vec<Candidate> {
    let source = match GraphSource::load(dir, category) {
        Ok(source) => Some(source),
        Err(triplepick::error::AppError::SourceNotFound { .. }) => None,
        Err(err) => panic!("unexpected load failure: {err}"),
    };
    let store = SelectionStore::new(dir);
    CandidateListBuilder::new(source.as_ref(), &store)
        .build(category)
        .expect("candidate build")
}

fn commit(dir: &Path, category: Category, selected: &[String]) {
    let source = GraphSource::load(dir, category).expect("source for commit");
    let store = SelectionStore::new(dir);
    let outcome = CommitPipeline::new(&source, &store, dir)
        .commit(category, selected)
        .expect("commit");
    assert!(outcome.state_error.is_none());
}

fn read_output(dir: &Path, category: Category) -> Graph {
    let file = File::open(dir.join(category.output_file())).expect("output file");
    let mut graph = Graph::new();
    for triple in TurtleParser::new().for_reader(BufReader::new(file)) {
        graph.insert(&triple.expect("valid output turtle"));
    }
    graph
}

#[test]
fn first_run_lists_every_labeled_subject_unselected() {
    let ws = workspace();
    write_input(ws.path(), Category::Classes, CLASSES_TTL);

    let candidates = build(ws.path(), Category::Classes);
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| !c.preselected));

    let labels: Vec<&str> = candidates.iter().map(|c| c.display_text.as_str()).collect();
    assert!(labels.contains(&"Widget"));
    assert!(labels.contains(&"Gadget"));
}

#[test]
fn classes_selection_round_trips() {
    let ws = workspace();
    write_input(ws.path(), Category::Classes, CLASSES_TTL);

    let selected = vec!["http://data.example.org/class/A".to_string()];
    commit(ws.path(), Category::Classes, &selected);

    // The state file holds exactly the committed identifier.
    let state = std::fs::read_to_string(ws.path().join("classes.conf")).unwrap();
    assert_eq!(state, "http://data.example.org/class/A\n");

    // The output subgraph holds only A's attribute bundle.
    let output = read_output(ws.path(), Category::Classes);
    let a = NamedNode::new_unchecked("http://data.example.org/class/A");
    let b = NamedNode::new_unchecked("http://data.example.org/class/B");
    assert_eq!(output.len(), 5);
    assert!(output.contains(TripleRef::new(&a, rdf::TYPE, blueprint::CLASS)));
    assert!(output.triples_for_subject(&b).next().is_none());

    // The next session pre-checks exactly the committed selection.
    let candidates = build(ws.path(), Category::Classes);
    let preselected: Vec<&str> = candidates
        .iter()
        .filter(|c| c.preselected)
        .map(|c| c.identifier.as_str())
        .collect();
    assert_eq!(preselected, vec!["http://data.example.org/class/A"]);
}

#[test]
fn links_selection_reemits_record_under_owner() {
    let ws = workspace();
    write_input(ws.path(), Category::Links, LINKS_TTL);

    let candidates = build(ws.path(), Category::Links);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].identifier, "/home");
    assert!(!candidates[0].preselected);

    commit(ws.path(), Category::Links, &["/home".to_string()]);

    let output = read_output(ws.path(), Category::Links);
    let x = NamedNode::new_unchecked("http://data.example.org/entity/X");
    let record = output
        .object_for_subject_predicate(&x, blueprint::LINK)
        .expect("link record under its owner");
    assert!(matches!(record, oxrdf::TermRef::BlankNode(_)));
    assert_eq!(output.len(), 4);

    let candidates = build(ws.path(), Category::Links);
    assert!(candidates[0].preselected);
}

#[test]
fn details_commit_keeps_group_and_referencing_class() {
    let ws = workspace();
    write_input(ws.path(), Category::Details, DETAILS_TTL);

    let candidates = build(ws.path(), Category::Details);
    let identifiers: Vec<&str> = candidates.iter().map(|c| c.identifier.as_str()).collect();
    assert!(identifiers.contains(&"/size"));
    assert!(identifiers.contains(&"http://www.w3.org/2000/01/rdf-schema#label"));

    // Select only /size; the standard label field survives regardless.
    commit(ws.path(), Category::Details, &["/size".to_string()]);

    let output = read_output(ws.path(), Category::Details);
    let group = NamedNode::new_unchecked("http://data.example.org/group/G");
    let records: Vec<_> = output
        .objects_for_subject_predicate(&group, blueprint::DETAIL)
        .collect();
    assert_eq!(records.len(), 2);
    assert!(output
        .object_for_subject_predicate(&group, blueprint::ORDER)
        .is_some());
    let class = NamedNode::new_unchecked("http://data.example.org/class/A");
    assert!(output
        .object_for_subject_predicate(&class, blueprint::DETAIL_GROUP)
        .is_some());
}

#[test]
fn empty_selection_commits_an_empty_subgraph() {
    let ws = workspace();
    write_input(ws.path(), Category::Classes, CLASSES_TTL);

    commit(ws.path(), Category::Classes, &[]);

    assert!(read_output(ws.path(), Category::Classes).is_empty());
    let candidates = build(ws.path(), Category::Classes);
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| !c.preselected));
}

#[test]
fn stale_identifiers_never_error_and_never_match() {
    let ws = workspace();
    write_input(ws.path(), Category::Classes, CLASSES_TTL);
    std::fs::write(
        ws.path().join("classes.conf"),
        "http://data.example.org/class/Removed\n",
    )
    .unwrap();

    let candidates = build(ws.path(), Category::Classes);
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| !c.preselected));
    assert!(!candidates
        .iter()
        .any(|c| c.identifier == "http://data.example.org/class/Removed"));
}

#[test]
fn committing_one_category_leaves_the_others_alone() {
    let ws = workspace();
    write_input(ws.path(), Category::Classes, CLASSES_TTL);
    write_input(ws.path(), Category::Links, LINKS_TTL);

    commit(ws.path(), Category::Classes, &["http://data.example.org/class/A".to_string()]);
    commit(ws.path(), Category::Links, &["/home".to_string()]);

    // Re-committing links must not disturb the classes output or state.
    let classes_output = std::fs::read_to_string(ws.path().join("classes.ttl")).unwrap();
    let classes_state = std::fs::read_to_string(ws.path().join("classes.conf")).unwrap();
    commit(ws.path(), Category::Links, &[]);
    assert_eq!(
        std::fs::read_to_string(ws.path().join("classes.ttl")).unwrap(),
        classes_output
    );
    assert_eq!(
        std::fs::read_to_string(ws.path().join("classes.conf")).unwrap(),
        classes_state
    );
    assert!(!ws.path().join("details.ttl").exists());
    assert!(!ws.path().join("details.conf").exists());
}

#[test]
fn missing_input_graph_builds_an_empty_list() {
    let ws = workspace();
    let candidates = build(ws.path(), Category::Details);
    assert!(candidates.is_empty());
}

#[test]
fn selection_order_is_preserved_verbatim() {
    let ws = workspace();
    write_input(ws.path(), Category::Classes, CLASSES_TTL);

    let selected = vec![
        "http://data.example.org/class/B".to_string(),
        "http://data.example.org/class/A".to_string(),
    ];
    commit(ws.path(), Category::Classes, &selected);

    let store = SelectionStore::new(ws.path());
    assert_eq!(store.read(Category::Classes).unwrap(), selected);
}
