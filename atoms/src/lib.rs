//! Domain atoms for the image-sharing backend.
//!
//! Each atom (`groups`, `images`) is split into `model`, `service` (pure
//! domain logic over the collaborator traits) and `http` (Lambda handlers).

pub mod error;
pub mod groups;
pub mod images;
pub mod payload;
pub mod response;
pub mod settings;
pub mod store;

pub use error::{GalleryError, GalleryResult, SigningError, StoreError};
pub use settings::GallerySettings;
pub use store::{IdGenerator, ItemStore, Record, UploadUrlSigner, UuidGenerator};
