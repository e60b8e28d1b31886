use clap::{Parser, ValueEnum};
use anyhow::Result;
use modelfile::{io::Format, ModelFile};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modelconv")]
#[command(about = "Converts triangle models between the legacy, binary and text formats")]
struct Cli {
    /// Input file path
    #[arg(short, long)]
    input: String,

    /// Output file path, not needed with --info
    #[arg(short, long, required_unless_present = "info")]
    output: Option<String>,

    /// Format of the input file
    #[arg(long, value_enum, default_value_t = InputFormat::Legacy)]
    from: InputFormat,

    /// Format of the output file
    #[arg(long, value_enum, default_value_t = OutputFormat::Binary)]
    to: OutputFormat,

    /// Mirror the model along the z axis before writing
    #[arg(long)]
    mirror: bool,

    /// Print the triangle count and exit
    #[arg(long)]
    info: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    Legacy,
    Binary,
    Text,
    Obj,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Legacy,
    Binary,
    Text,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Legacy => Format::Legacy,
            OutputFormat::Binary => Format::Binary,
            OutputFormat::Text => Format::Text,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut model = load(&cli.input, cli.from)?;
    info!("Loaded {} triangles from {}", model.get_triangle_count(), cli.input);

    if cli.info {
        println!("{}", model.get_triangle_count());
        return Ok(());
    }

    if cli.mirror {
        model.mirror();
    }

    let Some(output) = cli.output.as_deref() else {
        anyhow::bail!("An output file is required");
    };
    Format::from(cli.to).write_file(&model, output)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", output, e))?;
    info!("Wrote {}", output);

    Ok(())
}

fn load(input_path: &str, from: InputFormat) -> Result<ModelFile> {
    let format = match from {
        InputFormat::Obj => {
            return modelfile::io::obj::load_obj(input_path)
                .map_err(|e| anyhow::anyhow!("Failed to load OBJ file: {}", e));
        },
        InputFormat::Legacy => Format::Legacy,
        InputFormat::Binary => Format::Binary,
        InputFormat::Text => Format::Text,
    };

    let mut model = ModelFile::new();
    format.read_file(&mut model, input_path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", input_path, e))?;
    Ok(model)
}
