use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpanError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("incompatible time representations: can not project {from} onto a {onto} timeline")]
    IncompatibleRepresentations {
        from: &'static str,
        onto: &'static str,
    },

    #[error("time span arithmetic exceeded the representable range")]
    SpanOverflow,
}

pub type Result<T> = std::result::Result<T, SpanError>;
