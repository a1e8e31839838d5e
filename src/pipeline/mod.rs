// src/pipeline/mod.rs
pub mod archive;
pub mod enumerate;
pub mod fuzz;
pub mod scan;

pub use enumerate::SubdomainSet;

use crate::config::Config;
use crate::error::ReconResult;
use crate::report::StepOutcome;
use crate::session::ResultSession;
use crate::tools::ToolRegistry;

pub struct PipelineReport {
    pub subdomain_count: usize,
    pub steps: Vec<StepOutcome>,
}

/// The fixed linear sequence: passive enumeration, merge, URL archaeology,
/// directory fuzzing, port/service discovery, template scan. There is no
/// branching back and no retry; a skipped or failed step never aborts the
/// ones after it.
pub async fn run(
    config: &Config,
    registry: &ToolRegistry,
    session: &ResultSession,
) -> ReconResult<PipelineReport> {
    let mut steps = Vec::new();

    let subdomains = enumerate::run(registry, session, &mut steps).await?;
    archive::run(registry, session, &mut steps).await?;
    fuzz::run(config, registry, session, &mut steps).await?;
    scan::run_port_scan(registry, session, &mut steps).await?;
    scan::run_vuln_scan(registry, session, &mut steps).await?;

    Ok(PipelineReport {
        subdomain_count: subdomains.len(),
        steps,
    })
}
