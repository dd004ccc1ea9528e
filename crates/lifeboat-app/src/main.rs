mod config;
mod form;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use lifeboat_core::{encode, FeatureSchema, PassengerInput, Prediction, Predictor, SurvivalModel};

use config::AppConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = AppConfig::load()?;

    let model = match &config.model_path {
        Some(path) => SurvivalModel::from_file(path)
            .with_context(|| format!("loading model artifact {}", path.display()))?,
        None => SurvivalModel::default(),
    };
    let schema = match &config.schema_path {
        Some(path) => FeatureSchema::from_file(path)
            .with_context(|| format!("loading schema artifact {}", path.display()))?,
        None => FeatureSchema::default(),
    };
    let predictor = Predictor::new(model, schema)?;

    info!(
        model_id = %predictor.model_id(),
        model_version = %predictor.model_version(),
        columns = predictor.schema().len(),
        "lifeboat started"
    );

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    writeln!(out, "Would you have survived the Titanic?")?;
    writeln!(out, "Answer the prompts below; q quits, Enter takes the default.\n")?;

    // One encode-then-predict cycle per submission, run to completion
    // before the next form starts.
    while let Some(passenger) = form::read_submission(&mut input, &mut out)? {
        match predictor.predict(&passenger) {
            Ok(prediction) => print_result(&mut out, &predictor, &passenger, prediction)?,
            Err(e) => writeln!(out, "\nprediction failed: {e}\n")?,
        }
    }

    info!("lifeboat stopped");
    Ok(())
}

fn print_result(
    out: &mut impl Write,
    predictor: &Predictor,
    passenger: &PassengerInput,
    prediction: Prediction,
) -> Result<()> {
    let pct = prediction.probability * 100.0;
    if prediction.survived {
        writeln!(out, "\n=> YOU SURVIVE ({pct:.1}% probability)")?;
    } else {
        writeln!(out, "\n=> YOU DO NOT SURVIVE ({pct:.1}% survival probability)")?;
    }

    writeln!(out, "\nFeatures fed to the model:")?;
    let vector = encode(passenger, predictor.schema());
    for (name, value) in vector.iter() {
        writeln!(out, "  {name:<20} {value:8.3}")?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests;
