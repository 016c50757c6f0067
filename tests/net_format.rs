use petri_analysis::net::{PetriNet, error::NetError, format::ToNetFormat};

#[test]
fn test_parse_net_format() {
    let input = r#"
PLACE p1 tokens 1
PLACE p2 tokens 0
TRANSITION t1
ARC p1 t1 2
ARC t1 p2
"#;

    let net = PetriNet::parse_net_format(input).unwrap();

    assert_eq!(net.place_count(), 2);
    assert_eq!(net.transition_count(), 1);
    assert_eq!(net.arc_count(), 2);
    assert_eq!(net.place("p1").unwrap().tokens(), 1);
    assert_eq!(net.transition("t1").unwrap().input_arcs()["p1"], 2);
    // a missing ARC weight defaults to 1
    assert_eq!(net.transition("t1").unwrap().output_arcs()["p2"], 1);
}

#[test]
fn test_place_token_count_is_fourth_field() {
    // the count sits strictly in the 4th field, the 3rd is filler
    let net = PetriNet::parse_net_format("PLACE p1 tokens 5").unwrap();
    assert_eq!(net.place("p1").unwrap().tokens(), 5);

    // a three-field PLACE line has no count at all
    let net = PetriNet::parse_net_format("PLACE p1 5").unwrap();
    assert_eq!(net.place("p1").unwrap().tokens(), 0);

    let net = PetriNet::parse_net_format("PLACE p1").unwrap();
    assert_eq!(net.place("p1").unwrap().tokens(), 0);
}

#[test]
fn test_skips_unrecognized_lines() {
    let input = r#"
# a comment-ish line
PLACE p1 tokens 1

NOTE something else entirely
TRANSITION t1
"#;

    let net = PetriNet::parse_net_format(input).unwrap();
    assert_eq!(net.place_count(), 1);
    assert_eq!(net.transition_count(), 1);
}

#[test]
fn test_parse_failures() {
    assert!(matches!(
        PetriNet::parse_net_format("PLACE p1 tokens many"),
        Err(NetError::Parse(_))
    ));
    assert!(matches!(
        PetriNet::parse_net_format("PLACE"),
        Err(NetError::Parse(_))
    ));
    assert!(matches!(
        PetriNet::parse_net_format("TRANSITION"),
        Err(NetError::Parse(_))
    ));
    assert!(matches!(
        PetriNet::parse_net_format("PLACE p1\nTRANSITION t1\nARC p1"),
        Err(NetError::Parse(_))
    ));
    assert!(matches!(
        PetriNet::parse_net_format("PLACE p1\nTRANSITION t1\nARC p1 t1 heavy"),
        Err(NetError::Parse(_))
    ));
}

#[test]
fn test_arc_needs_declared_endpoints() {
    // records apply in file order, forward references do not resolve
    let input = r#"
ARC p1 t1
PLACE p1 tokens 1
TRANSITION t1
"#;

    assert_eq!(
        PetriNet::parse_net_format(input),
        Err(NetError::UnknownNode("p1".to_string()))
    );
}

#[test]
fn test_duplicate_record() {
    let input = r#"
PLACE p1 tokens 1
PLACE p1 tokens 2
"#;

    assert_eq!(
        PetriNet::parse_net_format(input),
        Err(NetError::DuplicateName("p1".to_string()))
    );
}

#[test]
fn test_invalid_arc_direction_rejected() {
    let input = r#"
PLACE p1 tokens 1
PLACE p2 tokens 0
ARC p1 p2
"#;

    assert_eq!(
        PetriNet::parse_net_format(input),
        Err(NetError::InvalidArc {
            from: "p1".to_string(),
            to: "p2".to_string()
        })
    );
}

#[test]
fn test_write_and_parse() {
    let mut net = PetriNet::new();
    net.add_place("p1", 1).unwrap();
    net.add_place("p2", 0).unwrap();
    net.add_place("p3", 2).unwrap();
    net.add_transition("t1").unwrap();
    net.add_transition("t2").unwrap();
    net.add_arc("p1", "t1", 1).unwrap();
    net.add_arc("t1", "p2", 3).unwrap();
    net.add_arc("p2", "t2", 1).unwrap();

    let text = net.to_net_format();
    let parsed = PetriNet::parse_net_format(&text).unwrap();

    assert_eq!(parsed, net);
}

#[test]
fn test_net_format_output() {
    let mut net = PetriNet::new();
    net.add_place("p2", 0).unwrap();
    net.add_place("p1", 1).unwrap();
    net.add_transition("t1").unwrap();
    net.add_arc("p1", "t1", 2).unwrap();

    // places and transitions are written sorted, arcs in insertion order
    assert_eq!(
        net.to_net_format(),
        "PLACE p1 tokens 1\nPLACE p2 tokens 0\nTRANSITION t1\nARC p1 t1 2\n"
    );
}

#[test]
fn test_json_round_trip() {
    let mut net = PetriNet::new();
    net.add_place("p1", 4).unwrap();
    net.add_transition("t1").unwrap();
    net.add_arc("p1", "t1", 2).unwrap();

    let json = net.to_json().unwrap();
    let parsed = PetriNet::from_json(&json).unwrap();

    assert_eq!(parsed, net);
    // JSON keeps the layout positions as well
    assert_eq!(parsed.position("p1"), net.position("p1"));
}
