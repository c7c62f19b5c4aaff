mod pipeline;

pub use pipeline::MeetingPipeline;
