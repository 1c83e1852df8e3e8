//! Pipeline graph types: node kinds and configurations, ports, edges, snapshots and the
//! records exchanged with the validation service.

mod graph_snapshot;
#[cfg(test)]
mod graph_snapshot_test;
mod node_config;
#[cfg(test)]
mod node_config_test;
mod node_kind;
#[cfg(test)]
mod node_kind_test;
mod palette;
#[cfg(test)]
mod palette_test;
mod pipeline_edge;
mod pipeline_node;
mod port;
mod validation_report;
mod wire;

pub use graph_snapshot::GraphSnapshot;
pub use node_config::{
  CalculatorConfig, CalculatorOperation, DEFAULT_TEXT_TEMPLATE, FilterCondition, FilterConfig,
  InputConfig, InputType, LogLevel, LoggerConfig, MAX_SEPARATOR_LEN, MergeType, MergerConfig,
  NodeConfig, OutputConfig, OutputType, TextConfig, ValidationType, ValidatorConfig,
};
pub use node_kind::{NodeKind, UnknownTag};
pub use palette::{PaletteEntry, PaletteGroup, palette};
pub use pipeline_edge::{EdgeId, Endpoint, PipelineEdge};
pub use pipeline_node::{NodeId, PipelineNode, Position};
pub use port::{Port, PortAnchor, PortDirection, PortId, PortOffset, PortSide};
pub use validation_report::ValidationReport;
pub use wire::{ParseResponse, PayloadEdge, PayloadNode, PipelinePayload};
