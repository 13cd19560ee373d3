//! Generates declarations for every language from a schema.
//!
//! Run with: `cargo run --example generate -- <schema.xsd|url> [output-dir]`

use xsdgen::prelude::*;
use xsdgen::schema::collect_schema_files;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(location) = args.next() else {
        eprintln!("usage: generate <schema.xsd|directory|url> [output-dir]");
        std::process::exit(2);
    };
    let output = args.next().unwrap_or_else(|| ".".to_string());

    let sources: Vec<SchemaSource> = match SchemaSource::from_location(&location) {
        SchemaSource::Path(path) if path.is_dir() => collect_schema_files(&path)?
            .into_iter()
            .map(SchemaSource::Path)
            .collect(),
        source => vec![source],
    };

    let mut sink = FileSink::new(&output);
    for source in sources {
        let xml = source.load_to_string()?;
        let tree = parse_schema(&xml)?;

        let base_name = match &source {
            SchemaSource::Path(path) => path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("schema")
                .to_string(),
            SchemaSource::Url(_) => "schema".to_string(),
        };
        let config = GeneratorConfig::builder().base_name(base_name).build()?;

        let generator = Generator::new(&tree, config)?;
        for path in generator.write_all(&mut sink)? {
            println!("[generate] {} -> {}", source.location(), path.display());
        }
    }

    Ok(())
}
