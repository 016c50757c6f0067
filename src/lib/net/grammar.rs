/// In this file, we parse the interactive construction grammar for nets.
///
/// The grammar consists of four comma-separated entry strings:
/// /// ```
/// /// places:      p1, p2, p3
/// /// transitions: t1, t2
/// /// arcs:        p1->t1, t1->p2, p2->t2
/// /// marking:     p1=1, p2=0, p3=2
/// /// ```
///
/// Node names start with an ASCII letter followed by letters, digits, or
/// underscores. Arcs carry no weight syntax in this form and always default
/// to weight 1. Marking values may be negative in the raw grammar; building
/// a net from them rejects negative counts, while the analyzer accepts them
/// so its boundedness check has something to validate.
use std::num::ParseIntError;

use itertools::Itertools;
use nom::{
    Parser,
    bytes::complete::tag,
    error::{FromExternalError, ParseError},
};

use crate::net::{PetriNet, error::NetError};

fn integer<'a, E: ParseError<&'a str> + FromExternalError<&'a str, ParseIntError>>(
    input: &'a str,
) -> nom::IResult<&'a str, i64, E> {
    nom::combinator::map_res(
        nom::combinator::recognize((
            nom::combinator::opt(tag("-")),
            nom::character::complete::digit1,
        )),
        str::parse::<i64>,
    )
    .parse(input)
}

#[test]
fn test_integer_1() {
    let (_, num) = integer::<nom::error::Error<&str>>("42").unwrap();
    assert_eq!(num, 42);
}

#[test]
fn test_integer_2() {
    let (_, num) = integer::<nom::error::Error<&str>>("-7").unwrap();
    assert_eq!(num, -7);
}

#[test]
fn test_integer_3() {
    let (_, num) = integer::<nom::error::Error<&str>>("-9223372036854775808").unwrap();
    assert_eq!(num, i64::MIN);
}

#[test]
fn test_integer_4() {
    // past the i64 range the parser fails instead of panicking
    assert!(integer::<nom::error::Error<&str>>("99999999999999999999").is_err());
}

fn opt_whitespace<'a, E: ParseError<&'a str>>(input: &'a str) -> nom::IResult<&'a str, &'a str, E> {
    nom::character::complete::multispace0(input)
}

fn separator<'a, E: ParseError<&'a str>>(input: &'a str) -> nom::IResult<&'a str, (), E> {
    let (input, _) = opt_whitespace(input)?;
    let (input, _) = tag(",")(input)?;
    let (input, _) = opt_whitespace(input)?;
    Ok((input, ()))
}

fn identifier<'a, E: ParseError<&'a str>>(input: &'a str) -> nom::IResult<&'a str, &'a str, E> {
    let (input2, (first, rest)) = (
        nom::character::complete::alpha1,
        nom::bytes::complete::take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .parse(input)?;

    Ok((input2, &input[..first.len() + rest.len()]))
}

#[test]
fn test_identifier_1() {
    let (rest, name) = identifier::<nom::error::Error<&str>>("p1").unwrap();
    assert_eq!(name, "p1");
    assert_eq!(rest, "");
}

#[test]
fn test_identifier_2() {
    let (rest, name) = identifier::<nom::error::Error<&str>>("wait_queue_2, x").unwrap();
    assert_eq!(name, "wait_queue_2");
    assert_eq!(rest, ", x");
}

#[test]
fn test_identifier_3() {
    assert!(identifier::<nom::error::Error<&str>>("1p").is_err());
}

// E.g., p1 -> t1
fn arc<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> nom::IResult<&'a str, (&'a str, &'a str), E> {
    let (input, source) = identifier(input)?;
    let (input, _) = opt_whitespace(input)?;
    let (input, _) = tag("->")(input)?;
    let (input, _) = opt_whitespace(input)?;
    let (input, target) = identifier(input)?;

    Ok((input, (source, target)))
}

#[test]
fn test_arc_1() {
    let (_, (source, target)) = arc::<nom::error::Error<&str>>("p1->t1").unwrap();
    assert_eq!(source, "p1");
    assert_eq!(target, "t1");
}

#[test]
fn test_arc_2() {
    let (_, (source, target)) = arc::<nom::error::Error<&str>>("t1 -> p2").unwrap();
    assert_eq!(source, "t1");
    assert_eq!(target, "p2");
}

// E.g., p1 = 3
fn marking_entry<'a, E: ParseError<&'a str> + FromExternalError<&'a str, ParseIntError>>(
    input: &'a str,
) -> nom::IResult<&'a str, (&'a str, i64), E> {
    let (input, place) = identifier(input)?;
    let (input, _) = opt_whitespace(input)?;
    let (input, _) = tag("=")(input)?;
    let (input, _) = opt_whitespace(input)?;
    let (input, value) = integer(input)?;

    Ok((input, (place, value)))
}

#[test]
fn test_marking_entry_1() {
    let (_, (place, value)) = marking_entry::<nom::error::Error<&str>>("p1=1").unwrap();
    assert_eq!(place, "p1");
    assert_eq!(value, 1);
}

#[test]
fn test_marking_entry_2() {
    let (_, (place, value)) = marking_entry::<nom::error::Error<&str>>("p2 = -3").unwrap();
    assert_eq!(place, "p2");
    assert_eq!(value, -3);
}

fn name_list<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> nom::IResult<&'a str, Vec<&'a str>, E> {
    nom::multi::separated_list1(separator, identifier).parse(input)
}

fn arc_list<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> nom::IResult<&'a str, Vec<(&'a str, &'a str)>, E> {
    nom::multi::separated_list1(separator, arc).parse(input)
}

fn marking_list<'a, E: ParseError<&'a str> + FromExternalError<&'a str, ParseIntError>>(
    input: &'a str,
) -> nom::IResult<&'a str, Vec<(&'a str, i64)>, E> {
    nom::multi::separated_list1(separator, marking_entry).parse(input)
}

fn run_to_end<'a, T>(
    kind: &str,
    input: &'a str,
    parser: fn(&'a str) -> nom::IResult<&'a str, Vec<T>, nom::error::Error<&'a str>>,
) -> Result<Vec<T>, NetError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(vec![]);
    }

    match parser(trimmed) {
        Ok(("", entries)) => Ok(entries),
        Ok((rest, _)) => Err(NetError::Parse(format!(
            "unexpected input '{rest}' in {kind} list"
        ))),
        Err(e) => Err(NetError::Parse(format!("invalid {kind} list: {e}"))),
    }
}

/// Parses a comma-separated list of node names. A blank string is the empty
/// list.
pub fn parse_name_list(input: &str) -> Result<Vec<&str>, NetError> {
    run_to_end("name", input, name_list)
}

#[test]
fn test_parse_name_list_1() {
    let names = parse_name_list("p1, p2,p3").unwrap();
    assert_eq!(names, vec!["p1", "p2", "p3"]);
}

#[test]
fn test_parse_name_list_2() {
    assert_eq!(parse_name_list("  ").unwrap(), Vec::<&str>::new());
}

#[test]
fn test_parse_name_list_3() {
    assert!(matches!(
        parse_name_list("p1, p2,"),
        Err(NetError::Parse(_))
    ));
}

/// Parses a comma-separated list of `source->target` arcs.
pub fn parse_arc_list(input: &str) -> Result<Vec<(&str, &str)>, NetError> {
    run_to_end("arc", input, arc_list)
}

#[test]
fn test_parse_arc_list_1() {
    let arcs = parse_arc_list("p1->t1, t1 -> p2").unwrap();
    assert_eq!(arcs, vec![("p1", "t1"), ("t1", "p2")]);
}

#[test]
fn test_parse_arc_list_2() {
    // the arrow is mandatory
    assert!(matches!(parse_arc_list("p1 t1"), Err(NetError::Parse(_))));
}

/// Parses a comma-separated list of `place=tokens` marking entries.
pub fn parse_marking_list(input: &str) -> Result<Vec<(&str, i64)>, NetError> {
    run_to_end("marking", input, marking_list)
}

#[test]
fn test_parse_marking_list_1() {
    let marking = parse_marking_list("p1=1, p2=0, p3=2").unwrap();
    assert_eq!(marking, vec![("p1", 1), ("p2", 0), ("p3", 2)]);
}

#[test]
fn test_parse_marking_list_2() {
    assert!(matches!(parse_marking_list("p1"), Err(NetError::Parse(_))));
}

#[test]
fn test_parse_marking_list_3() {
    // token counts that do not fit in an i64 are a parse error, not a panic
    assert!(matches!(
        parse_marking_list("p1=99999999999999999999"),
        Err(NetError::Parse(_))
    ));
}

/// The four entry strings of the construction form, parsed.
#[derive(Debug, Clone)]
pub struct NetDefinition<'a> {
    pub places: Vec<&'a str>,
    pub transitions: Vec<&'a str>,
    pub arcs: Vec<(&'a str, &'a str)>,
    pub marking: Vec<(&'a str, i64)>,
}

impl<'a> NetDefinition<'a> {
    pub fn parse(
        places: &'a str,
        transitions: &'a str,
        arcs: &'a str,
        marking: &'a str,
    ) -> Result<Self, NetError> {
        Ok(NetDefinition {
            places: parse_name_list(places)?,
            transitions: parse_name_list(transitions)?,
            arcs: parse_arc_list(arcs)?,
            marking: parse_marking_list(marking)?,
        })
    }
}

impl TryFrom<NetDefinition<'_>> for PetriNet {
    type Error = NetError;

    fn try_from(definition: NetDefinition) -> Result<Self, Self::Error> {
        let mut net = PetriNet::new();

        for place in &definition.places {
            net.add_place(place, 0)?;
        }
        for transition in &definition.transitions {
            net.add_transition(transition)?;
        }
        for (source, target) in &definition.arcs {
            net.add_arc(source, target, 1)?;
        }
        for (place, value) in &definition.marking {
            let tokens = u64::try_from(*value).map_err(|_| {
                NetError::Parse(format!("negative token count {value} for place '{place}'"))
            })?;
            net.set_tokens(place, tokens)?;
        }

        Ok(net)
    }
}

#[test]
fn test_definition_1() {
    let definition =
        NetDefinition::parse("p1, p2, p3", "t1, t2", "p1->t1, t1->p2, p2->t2", "p1=1, p2=0, p3=2")
            .unwrap();
    let net = PetriNet::try_from(definition).unwrap();

    assert_eq!(net.place_count(), 3);
    assert_eq!(net.transition_count(), 2);
    assert_eq!(net.arc_count(), 3);
    assert_eq!(
        net.marking(),
        vec![
            ("p1".to_string(), 1),
            ("p2".to_string(), 0),
            ("p3".to_string(), 2)
        ]
    );
}

#[test]
fn test_definition_2() {
    let definition = NetDefinition::parse("p1", "t1", "p1->t9", "").unwrap();
    assert_eq!(
        PetriNet::try_from(definition),
        Err(NetError::UnknownNode("t9".to_string()))
    );
}

#[test]
fn test_definition_3() {
    // negative counts parse but cannot become a net marking
    let definition = NetDefinition::parse("p1", "", "", "p1=-1").unwrap();
    assert!(matches!(
        PetriNet::try_from(definition),
        Err(NetError::Parse(_))
    ));
}

/// The four entry strings describing an existing net, the inverse of
/// `NetDefinition::parse`. Arc weights are not representable in this form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionStrings {
    pub places: String,
    pub transitions: String,
    pub arcs: String,
    pub marking: String,
}

impl DefinitionStrings {
    pub fn from_net(net: &PetriNet) -> Self {
        DefinitionStrings {
            places: net.place_names().join(", "),
            transitions: net.transition_names().join(", "),
            arcs: net
                .arcs()
                .iter()
                .map(|arc| format!("{}->{}", arc.source(), arc.target()))
                .join(", "),
            marking: net
                .marking()
                .iter()
                .map(|(name, tokens)| format!("{name}={tokens}"))
                .join(", "),
        }
    }
}

#[test]
fn test_definition_strings_1() {
    let definition = NetDefinition::parse("p1, p2", "t1", "p1->t1, t1->p2", "p1=2, p2=0").unwrap();
    let net = PetriNet::try_from(definition).unwrap();

    let strings = DefinitionStrings::from_net(&net);
    assert_eq!(strings.places, "p1, p2");
    assert_eq!(strings.transitions, "t1");
    assert_eq!(strings.arcs, "p1->t1, t1->p2");
    assert_eq!(strings.marking, "p1=2, p2=0");
}
