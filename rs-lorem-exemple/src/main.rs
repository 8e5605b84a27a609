use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rs_lorem_core::text::{DEFAULT_LEXICON, generate_text_seeded};
use rs_lorem_core::{GenerationRequest, Unit, generate_text_from, random_hex, random_int, random_string, read_lexicon};

/// Generate filler text at word, sentence or paragraph granularity
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Granularity: word, sentence or paragraph
    #[arg(default_value = "paragraph")]
    unit: Unit,

    /// Number of units (zero or negative prints nothing)
    #[arg(default_value_t = 5, allow_negative_numbers = true)]
    length: i64,

    /// Use the cryptographically strong source
    #[arg(short, long)]
    secure: bool,

    /// Word list file, one word per line
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.unit).secure(self.secure)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=debug shows what the library does
    env_logger::init();

    let args = Args::parse();
    let lexicon = match &args.lexicon {
        Some(path) => read_lexicon(path)?,
        None => DEFAULT_LEXICON.iter().map(|w| (*w).to_owned()).collect(),
    };
    let request = args.request();
    log::info!("Request: {:?}", request);

    let text = match args.seed {
        Some(seed) => generate_text_seeded(&request, &lexicon, seed)?,
        None => generate_text_from(&request, &lexicon)?,
    };
    println!("{text}");

    // A few of the lower level helpers
    println!();
    println!("Random int in [-100, 100): {}", random_int(-100..100, args.secure)?);
    println!("Random token: {}", random_string(16, None, args.secure)?);
    println!("Random hex: {}", random_hex(8, args.secure)?);

    Ok(())
}
