use clap::Parser;
use petri_analysis::{
    analysis::NetAnalyzer,
    config::{AnalysisConfig, GeneralConfig},
    logger::Logger,
    net::PetriNet,
};

#[derive(Parser, Debug)]
#[command(name = "Petri Net Analysis Tool")]
#[command(version = "0.1")]
#[command(about = "Structural analysis for Petri net files", long_about = None)]
struct Args {
    file: String,

    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AnalysisConfig::from_optional_file(args.config)?;

    let net = PetriNet::from_file(&args.file)?;

    let logger = Logger::from_config(config.logger(), "Analyzer".into());

    let mut analyzer = NetAnalyzer::new(logger.as_ref());
    analyzer.load_petri_net(&net)?;

    let report = analyzer.analyze();

    let json_report = if *config.get_pretty_json() {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json_report);

    Ok(())
}
