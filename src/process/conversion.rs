use super::definition::Process;
use crate::error::ConversionError;

/// A trait for caller-owned models that can be turned into a `Process` snapshot.
///
/// Implement it on whatever structs your process-fetch layer produces so the
/// synthesizer can consume them without going through JSON.
///
/// # Example
///
/// ```rust
/// use procflow::prelude::*;
/// use procflow::error::ConversionError;
///
/// struct Step { id: String, position: u32, kind: String }
/// struct Workflow { id: String, steps: Vec<Step> }
///
/// impl IntoProcess for Workflow {
///     fn into_process(self) -> Result<Process, ConversionError> {
///         if self.id.is_empty() {
///             return Err(ConversionError::ValidationError("workflow has no id".into()));
///         }
///         let activities = self
///             .steps
///             .into_iter()
///             .map(|step| Activity {
///                 id: step.id,
///                 process_id: self.id.clone(),
///                 order: i64::from(step.position),
///                 activity_type: ActivityType::from_name(&step.kind),
///                 ..Default::default()
///             })
///             .collect();
///         Ok(Process { id: self.id, activities, ..Default::default() })
///     }
/// }
///
/// let workflow = Workflow {
///     id: "wf".into(),
///     steps: vec![Step { id: "s1".into(), position: 1, kind: "manual".into() }],
/// };
/// let graph = procflow::synthesize(&workflow.into_process().unwrap());
/// assert_eq!(graph.nodes.len(), 3);
/// ```
pub trait IntoProcess {
    /// Consumes the object and converts it into a process snapshot.
    fn into_process(self) -> Result<Process, ConversionError>;
}

impl IntoProcess for Process {
    fn into_process(self) -> Result<Process, ConversionError> {
        Ok(self)
    }
}
