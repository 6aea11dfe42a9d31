//! Wire models exchanged with the document service.

pub mod artifact;
pub mod template;

pub use artifact::{ArtifactMetadata, GeneratedArtifact};
pub use template::{FieldKind, FieldSpec, FieldWidget, TemplateSchema, TemplateVersion};
