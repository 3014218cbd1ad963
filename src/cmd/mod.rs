use std::path::PathBuf;

use clap::{Parser, Subcommand};
use walkdir::WalkDir;

use crate::{
    conf::settings,
    pkg::internal::{
        analyzer,
        search::{self, SearchQuery},
    },
    prelude::Result,
};

#[derive(Parser)]
#[command(about = "analyzes and scores pdf resumes")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// analyze a single pdf and print the result as json
    Analyze { path: PathBuf },
    /// analyze every pdf under a directory and search the results
    Scan {
        dir: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        min_score: u32,
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long)]
        query: Option<String>,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Analyze { path }) => {
            let result = analyzer::analyze(&path).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Some(SubCommandType::Scan {
            dir,
            min_score,
            skills,
            query,
        }) => {
            let dir = dir.unwrap_or_else(|| PathBuf::from(&settings.uploads_dir));
            tracing::info!("{} scanning {}", &settings.service_name, dir.display());
            let mut records = Vec::new();
            for entry in WalkDir::new(&dir)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("pdf"))
            {
                let path = entry.path();
                let result = analyzer::analyze(path).await;
                tracing::debug!("analyzed {}: score {}", path.display(), result.score);
                records.push((entry.file_name().to_string_lossy().into_owned(), result));
            }
            let stats = search::stats(&records);
            tracing::info!(
                "analyzed {} resumes, average score {}",
                stats.total,
                stats.average_score
            );
            let hits = search::search(
                &records,
                &SearchQuery {
                    query,
                    skills,
                    min_score,
                },
            );
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
