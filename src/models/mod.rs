pub mod document;
pub mod loaders;
pub mod question;

pub use document::{Document, DocumentBlock, DocumentBuilder, Paragraph, ParagraphFormat, QuestionNumber, Run};
pub use loaders::{load_all_page_sets, load_document, load_page_set, load_records, load_url_list};
pub use question::{NormalizedOption, QuestionRecord, RawPageSet, RawQuestionPage};
