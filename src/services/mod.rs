pub mod exam_links;
pub mod json_writer;
pub mod question_normalizer;
pub mod question_renderer;
pub mod question_sorter;
pub mod warn_writer;

pub use exam_links::{group_by_exam, DiscussionLink};
pub use json_writer::write_pretty_json;
pub use question_normalizer::{build_record, normalize_options, parse_option, retag_exam_id, AnswerKey};
pub use question_renderer::render_question;
pub use question_sorter::{emit_blocks, extract_blocks, sort_blocks, sort_document, SortOutcome};
pub use warn_writer::WarnWriter;
