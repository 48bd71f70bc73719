pub mod card;
pub mod dataset;
pub mod export;
pub mod input;
pub mod modal;
pub mod record;
pub mod session;
pub mod stats;
pub mod view;
mod viewer;

pub use card::{Card, ImageView};
pub use dataset::{Dataset, DatasetError, parse_records};
pub use export::{ExportError, ExportFormat, UnknownExportFormat, export};
pub use input::{Action, Key, dispatch};
pub use modal::{ImageModal, ModalImage};
pub use record::{
    DEFAULT_IMAGE_FORMAT, DecodedImage, ImageAsset, ImageRole, ImageSourceError, NO_ANSWER_PLACEHOLDER,
    QuestionRecord, decode_data_uri,
};
pub use session::{Mode, Session, Step, UnknownMode};
pub use stats::DatasetStats;
pub use view::{AnswerView, Progress, ScreenView};
pub use viewer::Viewer;
