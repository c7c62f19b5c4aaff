use std::sync::Arc;

use crate::config::Config;
use crate::llm::LlmProvider;
use crate::processing::DocumentExtractor;
use crate::report::ReportBuilder;
use crate::services::MeetingPipeline;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Shared chat completion client, built once at startup.
    pub llm: LlmProvider,
    pub extractor: DocumentExtractor,
    pub pipeline: MeetingPipeline,
}

impl AppState {
    pub fn new(config: Config, llm: LlmProvider) -> Self {
        let config = Arc::new(config);
        let reports = ReportBuilder::new(config.report.output_dir.clone());
        let pipeline = MeetingPipeline::new(llm.clone(), reports);

        Self {
            config,
            llm,
            extractor: DocumentExtractor::new(),
            pipeline,
        }
    }

    pub fn reports(&self) -> &ReportBuilder {
        self.pipeline.reports()
    }
}
