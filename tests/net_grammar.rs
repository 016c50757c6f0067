use petri_analysis::{
    analysis::NetAnalyzer,
    net::{
        PetriNet,
        grammar::{DefinitionStrings, NetDefinition},
    },
};

#[test]
fn parse_from_entries_1() {
    let definition = NetDefinition::parse(
        "p1, p2, p3",
        "t1, t2",
        "p1->t1, t1->p2, p2->t2",
        "p1=1, p2=0, p3=2",
    )
    .unwrap();

    let net = PetriNet::try_from(definition).unwrap();

    assert_eq!(net.place_count(), 3);
    assert_eq!(net.transition_count(), 2);
    assert_eq!(net.arc_count(), 3);

    let mut analyzer = NetAnalyzer::new(None);
    analyzer.load_petri_net(&net).unwrap();

    assert_eq!(analyzer.enabled_transitions(), vec!["t1".to_string()]);
    assert_eq!(analyzer.analyze_liveness(), 0.5);
    assert!(analyzer.analyze_boundedness());
}

#[test]
fn parse_from_entries_2() {
    // an arc referring to a non-existing node t9
    let definition = NetDefinition::parse("p1, p2", "t1", "p1->t9", "p1=1").unwrap();
    assert!(PetriNet::try_from(definition).is_err());
}

#[test]
fn parse_from_entries_3() {
    // a marking referring to a non-existing place p9
    let definition = NetDefinition::parse("p1", "t1", "p1->t1", "p9=1").unwrap();
    assert!(PetriNet::try_from(definition).is_err());
}

#[test]
fn parse_from_entries_4() {
    // a name used for both a place and a transition
    let definition = NetDefinition::parse("x1", "x1", "", "").unwrap();
    assert!(PetriNet::try_from(definition).is_err());
}

#[test]
fn parse_from_entries_5() {
    // a negative count parses but cannot mark a constructed net
    let definition = NetDefinition::parse("p1", "t1", "p1->t1", "p1=-2").unwrap();
    assert!(PetriNet::try_from(definition).is_err());
}

#[test]
fn parse_directly_into_analyzer() {
    // the analyzer takes the definition as-is, including a negative count
    let definition = NetDefinition::parse("p1, p2", "t1", "p1->t1", "p1=1, p2=-2").unwrap();

    let mut analyzer = NetAnalyzer::new(None);
    analyzer.load_definition(&definition).unwrap();

    assert_eq!(analyzer.enabled_transitions(), vec!["t1".to_string()]);
    assert!(!analyzer.analyze_boundedness());
}

#[test]
fn parse_and_stringify() {
    let definition = NetDefinition::parse(
        "p1, p2, p3",
        "t1, t2",
        "p1->t1, t1->p2, p2->t2",
        "p1=1, p2=0, p3=2",
    )
    .unwrap();
    let net = PetriNet::try_from(definition).unwrap();

    let strings = DefinitionStrings::from_net(&net);
    assert_eq!(strings.places, "p1, p2, p3");
    assert_eq!(strings.transitions, "t1, t2");
    assert_eq!(strings.arcs, "p1->t1, t1->p2, p2->t2");
    assert_eq!(strings.marking, "p1=1, p2=0, p3=2");
}

#[test]
fn stringify_and_parse() {
    let mut net = PetriNet::new();
    net.add_place("p1", 2).unwrap();
    net.add_place("p2", 0).unwrap();
    net.add_transition("t1").unwrap();
    net.add_arc("p1", "t1", 1).unwrap();
    net.add_arc("t1", "p2", 1).unwrap();

    let strings = DefinitionStrings::from_net(&net);
    let definition = NetDefinition::parse(
        &strings.places,
        &strings.transitions,
        &strings.arcs,
        &strings.marking,
    )
    .unwrap();
    let parsed_net = PetriNet::try_from(definition).unwrap();

    assert_eq!(parsed_net, net);
}
