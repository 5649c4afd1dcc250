use crate::error::RenderError;
use floorplan_core::Plan;
use std::time::Instant;

/// An output backend turning a validated plan into one artifact.
///
/// Implementations are pure: the same plan and settings always give the same
/// output, and nothing is shared between calls.
pub trait PlanRenderer {
    type Output: ArtifactSize;

    /// Short backend name used in logs ("svg", "pdf").
    fn name(&self) -> &'static str;

    fn render(&self, plan: &Plan) -> Result<Self::Output, RenderError>;
}

/// Byte length of a rendered artifact, for logging.
pub trait ArtifactSize {
    fn artifact_len(&self) -> usize;
}

impl ArtifactSize for String {
    fn artifact_len(&self) -> usize {
        self.len()
    }
}

impl ArtifactSize for Vec<u8> {
    fn artifact_len(&self) -> usize {
        self.len()
    }
}

/// Runs `renderer` and logs the artifact size and elapsed time.
pub fn render_logged<R: PlanRenderer + ?Sized>(
    renderer: &R,
    plan: &Plan,
) -> Result<R::Output, RenderError> {
    let start = Instant::now();
    let output = renderer.render(plan)?;
    log::debug!(
        "{} renderer produced {} bytes for '{}' in {:?}",
        renderer.name(),
        output.artifact_len(),
        plan.title,
        start.elapsed()
    );
    Ok(output)
}
