use thiserror::Error;

/// Rejections raised while decoding list endpoint parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid integer for `{param}`: {value}")]
    InvalidInteger { param: String, value: String },

    #[error("Invalid id list for `{param}`: {value}")]
    InvalidIdList { param: String, value: String },

    #[error("Invalid timestamp for `{param}`: {value}")]
    InvalidTimestamp { param: String, value: String },

    #[error("Invalid boolean for `{param}`: {value}")]
    InvalidBoolean { param: String, value: String },
}
