use thiserror::Error;

/// Shader stage, used in compile diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ProgramError {
    #[error("unable to create {0} shader object")]
    CreateShader(ShaderStage),

    #[error("unable to create program object")]
    CreateProgram,

    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("program failed to link: {log}")]
    Link { log: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("gain must be finite and positive, got {0}")]
    Gain(f64),

    #[error("initial tween must lie in [0, 1], got {0}")]
    InitialTween(f64),

    #[error("invalid value {value:?} for {key}")]
    Parse { key: &'static str, value: String },
}
