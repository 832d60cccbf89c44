// Resume analysis: signal extraction, job match, section completeness,
// local suggestions, composite scoring, and report assembly.
// LLM enrichment is delegated to `crate::augmentation`.

pub mod completeness;
pub mod handlers;
pub mod intake;
pub mod job_match;
pub mod report;
pub mod scoring;
pub mod signals;
pub mod suggestions;
pub mod vocabulary;
