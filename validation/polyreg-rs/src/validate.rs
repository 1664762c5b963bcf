use log::{info, warn};
use polyreg_rs::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    #[serde(default)]
    notes: String,
    input: InputData,
    params: Params,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    #[serde(default = "default_strategy")]
    strategy: String,
    #[serde(default)]
    degree: Option<usize>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    coefficients: Vec<f64>,
    fitted: Vec<f64>,
    error: Option<String>,
}

fn default_strategy() -> String {
    "polynomial".to_string()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let input_dir = Path::new("../output/reference");
    let output_dir = Path::new("../output/polyreg_rs");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Generate reference cases first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            info!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let samples: Vec<(f64, f64)> = data
        .input
        .x
        .iter()
        .copied()
        .zip(data.input.y.iter().copied())
        .collect();

    let strategy: FitStrategy = data.params.strategy.parse()?;
    let mut builder = Regression::new().strategy(strategy);
    if let Some(degree) = data.params.degree {
        builder = builder.degree(degree);
    }

    // Rejected cases are recorded rather than aborting the run
    match builder.adapter(Batch).build()?.fit(&samples) {
        Ok(result) => {
            data.result.coefficients = result.coefficients();
            data.result.fitted = result.evaluate_all(&data.input.x);
        }
        Err(err) => {
            warn!("{}: {}", data.name, err);
            data.result.error = Some(err.to_string());
        }
    }

    let output_path = output_dir.join(input_path.file_name().unwrap_or_default());
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(())
}
