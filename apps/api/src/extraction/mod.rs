// Résumé understanding: text cleanup, contact/name detection, section
// segmentation, per-section field extraction and the pipeline that ties them together.

pub mod completeness;
pub mod contact;
pub mod fields;
pub mod handlers;
pub mod name;
pub mod normalize;
pub mod pipeline;
pub mod sections;
