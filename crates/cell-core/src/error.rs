use thiserror::Error;

/// Conditions that stop the hero visual from starting.
///
/// None of these are fatal to the page: the front-end logs them and falls
/// back to a static hero while the scroll animations keep working.
#[derive(Debug, Error)]
pub enum HeroError {
    #[error("no window")]
    MissingWindow,
    #[error("no document")]
    MissingDocument,
    #[error("missing container `{0}`")]
    MissingContainer(String),
    #[error("graphics unavailable: {0}")]
    GraphicsUnavailable(String),
    #[error("failed to compose shader `{program}`: {message}")]
    ShaderCompose {
        program: &'static str,
        message: String,
    },
}
