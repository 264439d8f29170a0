pub mod sanitize;
pub mod stance;
pub mod inference;
pub mod provenance;
pub mod external;
pub mod pipeline;
pub mod source;

pub use sanitize::{sanitize, SanitizedText};
pub use stance::{infer_stance, LexicalHintInferrer, StanceInferrer, StanceScore};
pub use inference::{infer_attributes, ConservativeInferrer, TextToAttributeInferrer};
pub use provenance::{build_provenance, ProvenanceParams, EXTERNAL_SOURCE};
pub use external::{ExternalPost, Tweet, TweetAuthor};
pub use pipeline::{IngestPipeline, IngestedSignal};
pub use source::{ingest_from_source, DatasetFileSource, ExternalSource};
