use std::process::ExitCode;

use quakeshapes::configuration::Configuration;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(config_path) = args.next() else {
        eprintln!("usage: quakeshapes <config.json> <iml>...");
        return ExitCode::FAILURE;
    };

    let mut imls = Vec::new();
    for arg in args {
        match arg.parse::<f64>() {
            Ok(iml) => imls.push(iml),
            Err(error) => {
                tracing::error!(value = %arg, %error, "IML is not a number");
                return ExitCode::FAILURE;
            }
        }
    }

    let config = match Configuration::from_reader(&config_path) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(path = %config_path, %error, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let model = config.vulnerability_model();
    for name in model.names() {
        let Ok(function) = model.get(name) else {
            continue;
        };
        let loss_ratios = function.loss_ratios_for(&imls);
        let covs = function.covs_for(&imls);
        for ((iml, loss_ratio), cov) in imls.iter().zip(loss_ratios).zip(covs) {
            println!("{}, {}, {}, {}", name, iml, loss_ratio, cov);
        }
    }
    ExitCode::SUCCESS
}
