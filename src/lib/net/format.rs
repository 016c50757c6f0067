/// In this file, we read and write the line-oriented `.net` format and the
/// JSON snapshot format.
///
/// A `.net` file holds one record per line, whitespace-separated:
/// /// ```
/// /// PLACE p1 tokens 1
/// /// PLACE p2 tokens 0
/// /// TRANSITION t1
/// /// ARC p1 t1 1
/// /// ```
///
/// The token count of a `PLACE` record is strictly the 4th whitespace token
/// on the line; the 3rd token is ignored filler (the writer emits the literal
/// word `tokens`). A three-token `PLACE` line therefore has no count and
/// defaults to 0. `ARC` weights default to 1. Blank lines and lines with an
/// unrecognized leading token are skipped.
use crate::net::{PetriNet, error::NetError};

impl PetriNet {
    pub fn parse_net_format(input: &str) -> Result<PetriNet, NetError> {
        let mut net = PetriNet::new();

        for (index, line) in input.lines().enumerate() {
            let line_number = index + 1;
            let parts = line.split_whitespace().collect::<Vec<_>>();

            match parts.first() {
                Some(&"PLACE") => {
                    let name = parts.get(1).ok_or_else(|| {
                        NetError::Parse(format!("line {line_number}: PLACE record without a name"))
                    })?;
                    let tokens = match parts.get(3) {
                        Some(raw) => raw.parse::<u64>().map_err(|_| {
                            NetError::Parse(format!(
                                "line {line_number}: invalid token count '{raw}'"
                            ))
                        })?,
                        None => 0,
                    };
                    net.add_place(name, tokens)?;
                }
                Some(&"TRANSITION") => {
                    let name = parts.get(1).ok_or_else(|| {
                        NetError::Parse(format!(
                            "line {line_number}: TRANSITION record without a name"
                        ))
                    })?;
                    net.add_transition(name)?;
                }
                Some(&"ARC") => {
                    let source = parts.get(1).ok_or_else(|| {
                        NetError::Parse(format!("line {line_number}: ARC record without a source"))
                    })?;
                    let target = parts.get(2).ok_or_else(|| {
                        NetError::Parse(format!("line {line_number}: ARC record without a target"))
                    })?;
                    let weight = match parts.get(3) {
                        Some(raw) => raw.parse::<u64>().map_err(|_| {
                            NetError::Parse(format!("line {line_number}: invalid weight '{raw}'"))
                        })?,
                        None => 1,
                    };
                    net.add_arc(source, target, weight)?;
                }
                _ => {}
            }
        }

        Ok(net)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_file(&self, path: &str) -> anyhow::Result<()> {
        Ok(std::fs::write(path, self.to_json()?)?)
    }

    pub fn to_net_file(&self, path: &str) -> anyhow::Result<()> {
        Ok(std::fs::write(path, self.to_net_format())?)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let path = std::path::Path::new(path);
        match path.extension() {
            Some(ext) if ext == "json" => {
                let json_str = std::fs::read_to_string(path)?;
                Ok(Self::from_json(&json_str)?)
            }
            Some(ext) if ext == "net" => {
                let net_str = std::fs::read_to_string(path)?;
                Ok(Self::parse_net_format(&net_str)?)
            }
            _ => Err(anyhow::anyhow!(
                "Unsupported file extension: {:?}",
                path.extension()
            )),
        }
    }
}

pub trait ToNetFormat {
    fn to_net_format(&self) -> String;
}

impl ToNetFormat for PetriNet {
    fn to_net_format(&self) -> String {
        let mut out = String::new();

        // places, sorted by name so the output is reproducible
        for (name, tokens) in self.marking() {
            out.push_str(&format!("PLACE {name} tokens {tokens}\n"));
        }

        // transitions
        for name in self.transition_names() {
            out.push_str(&format!("TRANSITION {name}\n"));
        }

        // arcs, in insertion order
        for arc in self.arcs() {
            out.push_str(&format!(
                "ARC {} {} {}\n",
                arc.source(),
                arc.target(),
                arc.weight()
            ));
        }

        out
    }
}
