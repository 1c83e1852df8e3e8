//! Port schema resolution: the ports of a node as a pure function of its configuration.
//!
//! Fixed layouts are declared once per kind; text nodes get one input port per template
//! variable followed by their single output. Callers must re-resolve after every configuration
//! change; nothing here is cached.

use crate::template::{extract_variables, variable_port_id};
use crate::types::{NodeConfig, Port, PortDirection, PortOffset};
use tracing::instrument;

/// Top offset of the first variable port on a text node, in pixels.
const VARIABLE_PORT_TOP_PX: u32 = 50;
/// Vertical spacing between variable ports, in pixels.
const VARIABLE_PORT_STEP_PX: u32 = 25;

/// Resolves the ordered port set of a node.
///
/// Unknown kinds resolve to an empty set so the surrounding graph stays valid.
#[instrument(level = "trace", skip(config), fields(kind = %config.kind()))]
pub fn resolve_ports(config: &NodeConfig) -> Vec<Port> {
  match config {
    NodeConfig::Input(_) => vec![Port::output("value", None)],
    NodeConfig::Output(_) => vec![Port::input("value", None)],
    NodeConfig::Text(text) => text_ports(&text.text),
    NodeConfig::Calculator(_) => vec![
      Port::input("input1", Some(PortOffset::Percent(30.0))),
      Port::input("input2", Some(PortOffset::Percent(70.0))),
      Port::output("result", None),
    ],
    NodeConfig::Filter(_) => vec![
      Port::input("input", None),
      Port::output("true", Some(PortOffset::Percent(30.0))),
      Port::output("false", Some(PortOffset::Percent(70.0))),
    ],
    NodeConfig::Merger(_) => vec![
      Port::input("input1", Some(PortOffset::Percent(20.0))),
      Port::input("input2", Some(PortOffset::Percent(50.0))),
      Port::input("input3", Some(PortOffset::Percent(80.0))),
      Port::output("output", None),
    ],
    NodeConfig::Validator(_) => vec![
      Port::input("input", None),
      Port::output("valid", Some(PortOffset::Percent(30.0))),
      Port::output("invalid", Some(PortOffset::Percent(70.0))),
    ],
    NodeConfig::Logger(_) => vec![Port::input("input", None), Port::output("output", None)],
    NodeConfig::Llm => vec![
      Port::input("system", Some(PortOffset::Percent(100.0 / 3.0))),
      Port::input("prompt", Some(PortOffset::Percent(200.0 / 3.0))),
      Port::output("response", None),
    ],
    NodeConfig::Unknown { .. } => Vec::new(),
  }
}

/// Variable ports in extraction order, then the output.
fn text_ports(template: &str) -> Vec<Port> {
  let mut ports: Vec<Port> = extract_variables(template)
    .iter()
    .enumerate()
    .map(|(index, name)| {
      let top = VARIABLE_PORT_TOP_PX + VARIABLE_PORT_STEP_PX * index as u32;
      Port::input(variable_port_id(name), Some(PortOffset::Pixels(top)))
    })
    .collect();
  ports.push(Port::output("output", None));
  ports
}

/// Finds the port with `id` and `direction` in a resolved set.
pub fn find_port<'a>(ports: &'a [Port], id: &str, direction: PortDirection) -> Option<&'a Port> {
  ports
    .iter()
    .find(|p| p.id.as_str() == id && p.direction == direction)
}

/// Ports present in `before` but missing from `after` (compared by id and direction).
pub fn removed_ports<'a>(before: &'a [Port], after: &[Port]) -> Vec<&'a Port> {
  before
    .iter()
    .filter(|p| find_port(after, p.id.as_str(), p.direction).is_none())
    .collect()
}
