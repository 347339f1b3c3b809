use std::sync::Arc;

use anyhow::Context;
use borders_core::{Border, BordersViewModel, CountriesClient, ReqwestTransport, COUNTRIES_BASE_URL};
use clap::Parser;
use env_logger::{Builder, Env};
use log::debug;

/// Print the countries bordering a country.
#[derive(Parser, Debug)]
#[command(name = "borders", version)]
struct Args {
    /// Full name of the country, e.g. "Spain".
    country: String,

    /// Base address of the countries API.
    #[arg(long, env = "BORDERS_BASE_URL", default_value = COUNTRIES_BASE_URL)]
    base_url: String,

    /// Print the borders as a JSON array instead of one per line.
    #[arg(long)]
    json: bool,
}

/// Logs at `info` unless `RUST_LOG` says otherwise.
fn log_builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log_builder().init();

    let args = Args::parse();
    debug!("{args:?}");

    let client = CountriesClient::parse(&args.base_url, ReqwestTransport::new())
        .with_context(|| format!("cannot use {:?} as base url", args.base_url))?;
    let view_model = BordersViewModel::new(args.country, Arc::new(client));
    let borders = view_model.borders().await;

    println!("{}", render(view_model.country_name(), borders, args.json)?);
    Ok(())
}

/// One `name (native name)` line per border, or a JSON array with `json`.
fn render(country: &str, borders: &[Border], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(borders)?);
    }
    if borders.is_empty() {
        return Ok(format!("No borders found for {country}"));
    }
    Ok(borders
        .iter()
        .map(|border| format!("{} ({})", border.name, border.native_name))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_public_api() {
        let args = Args::try_parse_from(["borders", "Spain"]).unwrap();
        assert_eq!(args.country, "Spain");
        assert!(!args.json);
        // BORDERS_BASE_URL may be set in the environment running the tests.
        if std::env::var_os("BORDERS_BASE_URL").is_none() {
            assert_eq!(args.base_url, COUNTRIES_BASE_URL);
        }
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "borders",
            "United Kingdom",
            "--base-url",
            "http://127.0.0.1:3000/rest/v1",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.country, "United Kingdom");
        assert_eq!(args.base_url, "http://127.0.0.1:3000/rest/v1");
        assert!(args.json);
    }

    #[test]
    fn logging_defaults_to_info_without_touching_env() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let logger = log_builder().build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
        assert!(std::env::var_os("RUST_LOG").is_none());
    }

    fn border(name: &str, native_name: &str) -> Border {
        Border {
            name: name.to_string(),
            native_name: native_name.to_string(),
        }
    }

    #[test]
    fn renders_one_line_per_border() {
        let borders = [border("France", "France"), border("Morocco", "المغرب")];
        let out = render("Spain", &borders, false).unwrap();
        assert_eq!(out, "France (France)\nMorocco (المغرب)");
    }

    #[test]
    fn renders_empty_result_with_country_name() {
        let out = render("Iceland", &[], false).unwrap();
        assert_eq!(out, "No borders found for Iceland");
    }

    #[test]
    fn renders_json_array() {
        let out = render("Spain", &[border("Portugal", "Portugal")], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "Portugal");
        assert_eq!(value[0]["native_name"], "Portugal");

        let out = render("Iceland", &[], true).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn country_is_required() {
        assert!(Args::try_parse_from(["borders"]).is_err());
    }
}
