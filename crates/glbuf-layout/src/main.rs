//! `glbuf-layout`: prints how a list of uniform field types is packed.
//!
//! ```text
//! $ glbuf-layout float vec2 vec4
//! index  type    offset  size
//!     0  float        0     1
//!     1  vec2         2     2
//!     2  vec4         4     4
//! total: 8 floats (32 bytes)
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use glbuf::context::recording::RecordingContext;
use glbuf::logging::{LoggingConfig, init_logging};
use glbuf::{BufferUsage, UniformBuffer, UniformLayout, UniformType};

mod report;

#[derive(Debug, Parser)]
#[command(name = "glbuf-layout", version, about = "Print the packed layout of a uniform block")]
struct Args {
    /// Field types in declaration order: float, vec2, vec4, mat4, or a GL enum (e.g. 0x8B52).
    #[arg(required = true, value_parser = parse_uniform_type)]
    types: Vec<UniformType>,

    /// Also print the context calls a uniform buffer with this layout issues.
    #[arg(long)]
    trace: bool,

    /// Usage hint used for the traced allocation.
    #[arg(long, value_enum, default_value_t = Usage::Dynamic)]
    usage: Usage,

    /// Log filter (env_logger syntax); falls back to RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Usage {
    Static,
    Dynamic,
    Stream,
}

impl From<Usage> for BufferUsage {
    fn from(usage: Usage) -> Self {
        match usage {
            Usage::Static => BufferUsage::StaticDraw,
            Usage::Dynamic => BufferUsage::DynamicDraw,
            Usage::Stream => BufferUsage::StreamDraw,
        }
    }
}

fn parse_uniform_type(s: &str) -> std::result::Result<UniformType, String> {
    let ty = match s.to_ascii_lowercase().as_str() {
        "float" => UniformType::Float,
        "vec2" => UniformType::Vec2,
        "vec4" => UniformType::Vec4,
        "mat4" => UniformType::Mat4,
        other => {
            let value = match other.strip_prefix("0x") {
                Some(hex) => u32::from_str_radix(hex, 16),
                None => other.parse(),
            };
            UniformType::from_gl(value.map_err(|_| format!("unknown uniform type `{s}`"))?)
        }
    };
    Ok(ty)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..Default::default()
    });

    let layout = UniformLayout::new(&args.types).context("failed to pack uniform layout")?;
    print!("{}", report::layout_table(&layout));

    if args.trace {
        let gl = RecordingContext::new();
        let ubo = UniformBuffer::with_layout(&gl, layout, args.usage.into())
            .context("failed to create uniform buffer")?;
        ubo.update(&gl).context("failed to upload uniform buffer")?;
        ubo.bind(&gl, 0).context("failed to bind uniform buffer")?;

        println!();
        print!("{}", report::call_trace(&gl.calls()));
    }

    log::debug!("layout of {} fields printed", args.types.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(parse_uniform_type("Vec4"), Ok(UniformType::Vec4));
        assert_eq!(parse_uniform_type("MAT4"), Ok(UniformType::Mat4));
    }

    #[test]
    fn parses_gl_enums() {
        assert_eq!(parse_uniform_type("0x8B50"), Ok(UniformType::Vec2));
        assert_eq!(parse_uniform_type("5126"), Ok(UniformType::Float));
        assert_eq!(parse_uniform_type("0x8B51"), Ok(UniformType::Other(0x8B51)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_uniform_type("vec3ish").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from(["glbuf-layout", "--trace", "--usage", "static", "float", "mat4"])
            .unwrap();
        assert!(args.trace);
        assert!(matches!(args.usage, Usage::Static));
        assert_eq!(args.types, vec![UniformType::Float, UniformType::Mat4]);
    }

    #[test]
    fn args_require_a_type() {
        assert!(Args::try_parse_from(["glbuf-layout"]).is_err());
    }
}
