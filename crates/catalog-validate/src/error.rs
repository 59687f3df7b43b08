use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    /// An alias was declared for a locale that has no rule set.
    #[error("alias '{alias}' points to unknown locale '{target}'")]
    UnknownAliasTarget { alias: String, target: String },

    /// An alias would shadow a built-in locale tag.
    #[error("alias '{alias}' conflicts with a built-in locale")]
    AliasShadowsLocale { alias: String },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
