pub mod build_tag;

pub const DEFAULT_BUILD_TAG_PREFIX: &str = "builds";
pub const DEFAULT_BUILD_TAG_SEPARATOR: &str = "/";
